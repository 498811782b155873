// infrastructure/memory/students.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::InMemoryDatastore;
use crate::models::Student;
use crate::repositories::StudentRepository;
use crate::utils::error::Result;

/// Repository mémoire pour les étudiants
pub struct InMemoryStudentRepository {
    datastore: Arc<InMemoryDatastore>,
}

impl InMemoryStudentRepository {
    pub(crate) fn new(datastore: Arc<InMemoryDatastore>) -> Self {
        Self { datastore }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Vec<Student>> {
        Ok(self.datastore.students.read().await.find(|s| s.id == id))
    }

    async fn find_by_number(&self, number: &str) -> Result<Vec<Student>> {
        Ok(self
            .datastore
            .students
            .read()
            .await
            .find(|s| s.number == number))
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Student>> {
        Ok(self
            .datastore
            .students
            .read()
            .await
            .find(|s| s.email == email))
    }

    async fn find_by_track(&self, track_id: i64) -> Result<Vec<Student>> {
        Ok(self
            .datastore
            .students
            .read()
            .await
            .find(|s| s.track_id == Some(track_id)))
    }

    async fn create(&self, student: Student) -> Result<Student> {
        Ok(self.datastore.students.write().await.stage_create(student))
    }

    async fn update(&self, student: Student) -> Result<Student> {
        Ok(self.datastore.students.write().await.stage_update(student))
    }
}

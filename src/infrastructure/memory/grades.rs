// infrastructure/memory/grades.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::InMemoryDatastore;
use crate::models::Grade;
use crate::repositories::GradeRepository;
use crate::utils::error::Result;

/// Repository mémoire pour les notes
pub struct InMemoryGradeRepository {
    datastore: Arc<InMemoryDatastore>,
}

impl InMemoryGradeRepository {
    pub(crate) fn new(datastore: Arc<InMemoryDatastore>) -> Self {
        Self { datastore }
    }
}

#[async_trait]
impl GradeRepository for InMemoryGradeRepository {
    async fn find_by_student_and_course_unit(
        &self,
        student_id: i64,
        course_unit_id: i64,
    ) -> Result<Vec<Grade>> {
        Ok(self
            .datastore
            .grades
            .read()
            .await
            .find(|g| g.student_id == student_id && g.course_unit_id == course_unit_id))
    }

    async fn create(&self, grade: Grade) -> Result<Grade> {
        Ok(self.datastore.grades.write().await.stage_create(grade))
    }
}

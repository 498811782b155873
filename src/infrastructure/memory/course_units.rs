// infrastructure/memory/course_units.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::InMemoryDatastore;
use crate::models::CourseUnit;
use crate::repositories::CourseUnitRepository;
use crate::utils::error::Result;

/// Repository mémoire pour les UEs
pub struct InMemoryCourseUnitRepository {
    datastore: Arc<InMemoryDatastore>,
}

impl InMemoryCourseUnitRepository {
    pub(crate) fn new(datastore: Arc<InMemoryDatastore>) -> Self {
        Self { datastore }
    }
}

#[async_trait]
impl CourseUnitRepository for InMemoryCourseUnitRepository {
    async fn find_by_id(&self, id: i64) -> Result<Vec<CourseUnit>> {
        Ok(self.datastore.course_units.read().await.find(|u| u.id == id))
    }

    async fn find_by_code(&self, code: &str) -> Result<Vec<CourseUnit>> {
        Ok(self
            .datastore
            .course_units
            .read()
            .await
            .find(|u| u.code == code))
    }

    async fn create(&self, course_unit: CourseUnit) -> Result<CourseUnit> {
        Ok(self
            .datastore
            .course_units
            .write()
            .await
            .stage_create(course_unit))
    }
}

// tests/common/mod.rs
use std::sync::Arc;

use scolarite_platform::{
    CourseUnitService, GradeService, InMemoryRepositoryFactory, StudentService, TrackService,
};

/// Les quatre cas d'utilisation branchés sur une même unité de travail
pub struct Services {
    pub students: StudentService,
    pub tracks: TrackService,
    pub course_units: CourseUnitService,
    pub grades: GradeService,
}

/// Factory mémoire vierge
pub fn factory() -> Arc<InMemoryRepositoryFactory> {
    Arc::new(InMemoryRepositoryFactory::new())
}

pub fn services(repos: &Arc<InMemoryRepositoryFactory>) -> Services {
    Services {
        students: StudentService::new(repos.clone()),
        tracks: TrackService::new(repos.clone()),
        course_units: CourseUnitService::new(repos.clone()),
        grades: GradeService::new(repos.clone()),
    }
}

// infrastructure/memory/mod.rs
//
// Adaptateur de stockage en mémoire. Chaque collection sépare l'état committé
// des écritures en attente ; `save_changes` applique ces dernières. Les verrous
// ne protègent que les structures de données, aucune transaction ne couvre un
// cas d'utilisation complet.

pub mod course_units;
pub mod grades;
pub mod students;
pub mod tracks;

pub use course_units::InMemoryCourseUnitRepository;
pub use grades::InMemoryGradeRepository;
pub use students::InMemoryStudentRepository;
pub use tracks::InMemoryTrackRepository;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{CourseUnit, Grade, Student, Track};
use crate::repositories::{
    CourseUnitRepository, GradeRepository, RepositoryFactory, StudentRepository, TrackRepository,
};
use crate::utils::error::Result;

/// Identité interne des entités stockées
pub(crate) trait HasId {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

impl HasId for Student {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl HasId for Track {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl HasId for CourseUnit {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl HasId for Grade {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Magasin d'une collection : état committé, écritures en attente, compteur d'identifiants
pub(crate) struct Store<T> {
    committed: HashMap<i64, T>,
    staged: Vec<T>,
    next_id: i64,
}

impl<T: HasId + Clone> Store<T> {
    fn new() -> Self {
        Self {
            committed: HashMap::new(),
            staged: Vec::new(),
            next_id: 1,
        }
    }

    /// Met en attente une création et affecte l'identifiant
    fn stage_create(&mut self, mut entity: T) -> T {
        entity.set_id(self.next_id);
        self.next_id += 1;
        self.staged.push(entity.clone());
        entity
    }

    /// Met en attente un remplacement, l'identifiant existant est conservé
    fn stage_update(&mut self, entity: T) -> T {
        self.staged.push(entity.clone());
        entity
    }

    /// Applique les écritures en attente à l'état committé
    fn commit(&mut self) -> usize {
        let count = self.staged.len();
        for entity in self.staged.drain(..) {
            self.committed.insert(entity.id(), entity);
        }
        count
    }

    /// Lecture sur l'état committé uniquement
    fn find<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.committed
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }
}

/// État partagé entre les repositories d'une même unité de travail
pub struct InMemoryDatastore {
    pub(crate) students: RwLock<Store<Student>>,
    pub(crate) tracks: RwLock<Store<Track>>,
    pub(crate) course_units: RwLock<Store<CourseUnit>>,
    pub(crate) grades: RwLock<Store<Grade>>,
}

impl InMemoryDatastore {
    fn new() -> Self {
        Self {
            students: RwLock::new(Store::new()),
            tracks: RwLock::new(Store::new()),
            course_units: RwLock::new(Store::new()),
            grades: RwLock::new(Store::new()),
        }
    }
}

/// Factory mémoire : un repository par entité au-dessus de l'état partagé
pub struct InMemoryRepositoryFactory {
    datastore: Arc<InMemoryDatastore>,
}

impl InMemoryRepositoryFactory {
    pub fn new() -> Self {
        Self {
            datastore: Arc::new(InMemoryDatastore::new()),
        }
    }
}

impl Default for InMemoryRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryFactory for InMemoryRepositoryFactory {
    fn students(&self) -> Arc<dyn StudentRepository> {
        Arc::new(InMemoryStudentRepository::new(self.datastore.clone()))
    }

    fn tracks(&self) -> Arc<dyn TrackRepository> {
        Arc::new(InMemoryTrackRepository::new(self.datastore.clone()))
    }

    fn course_units(&self) -> Arc<dyn CourseUnitRepository> {
        Arc::new(InMemoryCourseUnitRepository::new(self.datastore.clone()))
    }

    fn grades(&self) -> Arc<dyn GradeRepository> {
        Arc::new(InMemoryGradeRepository::new(self.datastore.clone()))
    }

    async fn save_changes(&self) -> Result<()> {
        let mut applied = 0;
        applied += self.datastore.students.write().await.commit();
        applied += self.datastore.tracks.write().await.commit();
        applied += self.datastore.course_units.write().await.commit();
        applied += self.datastore.grades.write().await.commit();
        debug!(applied, "écritures en attente appliquées");
        Ok(())
    }
}

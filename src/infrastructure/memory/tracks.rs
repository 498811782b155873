// infrastructure/memory/tracks.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::InMemoryDatastore;
use crate::models::Track;
use crate::repositories::TrackRepository;
use crate::utils::error::Result;

/// Repository mémoire pour les parcours
pub struct InMemoryTrackRepository {
    datastore: Arc<InMemoryDatastore>,
}

impl InMemoryTrackRepository {
    pub(crate) fn new(datastore: Arc<InMemoryDatastore>) -> Self {
        Self { datastore }
    }
}

#[async_trait]
impl TrackRepository for InMemoryTrackRepository {
    async fn find_by_id(&self, id: i64) -> Result<Vec<Track>> {
        Ok(self.datastore.tracks.read().await.find(|t| t.id == id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Track>> {
        Ok(self.datastore.tracks.read().await.find(|t| t.name == name))
    }

    async fn create(&self, track: Track) -> Result<Track> {
        Ok(self.datastore.tracks.write().await.stage_create(track))
    }

    async fn update(&self, track: Track) -> Result<Track> {
        Ok(self.datastore.tracks.write().await.stage_update(track))
    }
}

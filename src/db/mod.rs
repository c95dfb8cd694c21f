/// Database layer: the metadata store seam and its Postgres implementation
pub mod photo_repo;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewPhoto, Photo};

/// Metadata store for photo records.
///
/// The photo service receives this as an injected dependency; production
/// wires in [`PgPhotoStore`], tests substitute an in-memory implementation.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn insert(&self, photo: NewPhoto) -> Result<Photo>;

    /// All records, newest first
    async fn list(&self) -> Result<Vec<Photo>>;

    /// Removes the record and returns it, or None if no such id exists
    async fn delete(&self, id: Uuid) -> Result<Option<Photo>>;
}

/// Postgres-backed photo store
#[derive(Clone)]
pub struct PgPhotoStore {
    pool: PgPool,
}

impl PgPhotoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoStore for PgPhotoStore {
    async fn insert(&self, photo: NewPhoto) -> Result<Photo> {
        photo_repo::insert_photo(&self.pool, &photo).await
    }

    async fn list(&self) -> Result<Vec<Photo>> {
        photo_repo::list_photos(&self.pool).await
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Photo>> {
        photo_repo::delete_photo(&self.pool, id).await
    }
}

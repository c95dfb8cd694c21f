/// Photo service - orchestrates the album workflows
///
/// create: validate the upload, push the bytes to the image store, persist
/// the metadata record, return it. list: newest first. delete: remove the
/// record by id, then the remote object.
///
/// The two create phases (remote upload, then database write) run
/// sequentially with no distributed transaction; when the second phase
/// fails, the already-uploaded object is removed best-effort so the host
/// does not accumulate unreachable images.
use std::sync::Arc;

use bytes::Bytes;
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::db::PhotoStore;
use crate::error::{AppError, Result};
use crate::models::{NewPhoto, Photo, PhotoUpload, SENTINEL_YEAR};
use crate::services::image_ops;
use crate::services::image_store::{self, ImageStore};

#[derive(Clone)]
pub struct PhotoService {
    store: Arc<dyn PhotoStore>,
    images: Arc<dyn ImageStore>,
    upload: UploadConfig,
}

impl PhotoService {
    pub fn new(store: Arc<dyn PhotoStore>, images: Arc<dyn ImageStore>, upload: UploadConfig) -> Self {
        Self { store, images, upload }
    }

    pub async fn create(&self, upload: PhotoUpload) -> Result<Photo> {
        if upload.bytes.is_empty() {
            return Err(AppError::Validation("an image file is required".to_string()));
        }
        if upload.bytes.len() > self.upload.max_bytes {
            return Err(AppError::Validation(format!(
                "image exceeds the {} byte limit",
                self.upload.max_bytes
            )));
        }

        let prepared = image_ops::prepare(&upload.bytes, &self.upload.allowed_formats, self.upload.max_width)?;
        if let Some(declared) = upload.content_type.as_deref() {
            if declared != prepared.content_type {
                tracing::debug!(
                    declared,
                    sniffed = prepared.content_type,
                    "stored content type differs from the one the client declared"
                );
            }
        }

        let stored = self
            .images
            .upload(Bytes::from(prepared.bytes), prepared.content_type, prepared.extension)
            .await?;

        if !image_store::is_remote_image_url(&stored.url) {
            tracing::error!(url = %stored.url, "image host returned an unusable URL");
            self.compensate_image(&stored.key, "unusable URL").await;
            return Err(AppError::UploadProvider(format!(
                "image host returned an unusable URL: {}",
                stored.url
            )));
        }

        let record = NewPhoto {
            image_url: stored.url,
            image_key: stored.key.clone(),
            year: if upload.year.trim().is_empty() {
                SENTINEL_YEAR.to_string()
            } else {
                upload.year
            },
            date: upload.date,
            text: upload.text,
        };

        match self.store.insert(record).await {
            Ok(photo) => {
                tracing::info!(id = %photo.id, url = %photo.image_url, "photo created");
                Ok(photo)
            }
            Err(err) => {
                // No metadata row was written; drop the uploaded object
                // instead of orphaning it
                self.compensate_image(&stored.key, "metadata write failed").await;
                Err(err)
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<Photo>> {
        self.store.list().await
    }

    pub async fn delete(&self, id: Uuid) -> Result<Photo> {
        let photo = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no photo with id {id}")))?;

        // The record is gone; removing the remote object is best-effort
        if let Err(err) = self.images.delete(&photo.image_key).await {
            tracing::warn!(id = %id, key = %photo.image_key, "remote image delete failed: {err}");
        }

        tracing::info!(id = %id, "photo deleted");
        Ok(photo)
    }

    async fn compensate_image(&self, key: &str, reason: &str) {
        if let Err(err) = self.images.delete(key).await {
            tracing::warn!(key, reason, "compensating image delete failed: {err}");
        }
    }
}

/// Photo handlers - HTTP endpoints for the gallery
use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{PhotoResponse, PhotoUpload};
use crate::services::PhotoService;

/// GET /photos - all photos, newest first
pub async fn list_photos(service: web::Data<PhotoService>) -> Result<HttpResponse> {
    let photos = service.list().await?;
    let body: Vec<PhotoResponse> = photos.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /photos - multipart upload: `image` file plus year/date/text fields
pub async fn upload_photo(
    service: web::Data<PhotoService>,
    payload: Multipart,
) -> Result<HttpResponse> {
    let upload = collect_photo_upload(payload).await?;
    let photo = service.create(upload).await?;
    Ok(HttpResponse::Created().json(PhotoResponse::from(photo)))
}

/// DELETE /photos/{id}
pub async fn delete_photo(
    service: web::Data<PhotoService>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let photo_id =
        Uuid::parse_str(&id).map_err(|_| AppError::BadRequest("invalid photo id".to_string()))?;

    let photo = service.delete(photo_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "photo deleted",
        "id": photo.id,
    })))
}

async fn collect_photo_upload(mut payload: Multipart) -> Result<PhotoUpload> {
    let mut upload = PhotoUpload::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("multipart error: {e}")))?;

        let name = field.name().to_string();
        match name.as_str() {
            "image" => {
                upload.content_type = field
                    .content_type()
                    .map(|m: &mime::Mime| m.essence_str().to_string());
                upload.bytes = read_field_bytes(&mut field, "image").await?;
            }
            "year" => upload.year = read_field_text(&mut field, "year").await?,
            "date" => upload.date = read_field_text(&mut field, "date").await?,
            "text" => upload.text = read_field_text(&mut field, "text").await?,
            // Unknown fields are ignored
            _ => drain_field(&mut field).await?,
        }
    }

    Ok(upload)
}

async fn read_field_bytes(field: &mut Field, name: &str) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk =
            chunk.map_err(|e| AppError::BadRequest(format!("{name} read error: {e}")))?;
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

async fn read_field_text(field: &mut Field, name: &str) -> Result<String> {
    let data = read_field_bytes(field, name).await?;
    String::from_utf8(data)
        .map_err(|_| AppError::BadRequest(format!("{name} must be valid UTF-8")))
}

async fn drain_field(field: &mut Field) -> Result<()> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| AppError::BadRequest(format!("multipart error: {e}")))?;
    }
    Ok(())
}

/// Photo repository - database operations for album photos
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewPhoto, Photo};

pub async fn insert_photo(pool: &PgPool, photo: &NewPhoto) -> Result<Photo> {
    let photo = sqlx::query_as::<_, Photo>(
        "INSERT INTO photos (image_url, image_key, year, date, text) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, image_url, image_key, year, date, text, created_at, updated_at",
    )
    .bind(&photo.image_url)
    .bind(&photo.image_key)
    .bind(&photo.year)
    .bind(&photo.date)
    .bind(&photo.text)
    .fetch_one(pool)
    .await?;

    Ok(photo)
}

pub async fn list_photos(pool: &PgPool) -> Result<Vec<Photo>> {
    let photos = sqlx::query_as::<_, Photo>(
        "SELECT id, image_url, image_key, year, date, text, created_at, updated_at \
         FROM photos ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(photos)
}

pub async fn delete_photo(pool: &PgPool, id: Uuid) -> Result<Option<Photo>> {
    let photo = sqlx::query_as::<_, Photo>(
        "DELETE FROM photos WHERE id = $1 \
         RETURNING id, image_url, image_key, year, date, text, created_at, updated_at",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(photo)
}

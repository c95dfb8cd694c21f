/// HTTP handlers for album-service
pub mod auth;
pub mod health;
pub mod photos;

pub use auth::login;
pub use health::health_check;
pub use photos::{delete_photo, list_photos, upload_photo};

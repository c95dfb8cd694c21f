pub mod access_gate;
pub mod image_ops;
pub mod image_store;
pub mod photo_service;

pub use access_gate::AccessGate;
pub use image_store::{ImageStore, S3ImageStore, StoredImage};
pub use photo_service::PhotoService;

//! Album Service
//!
//! Backend for a personal photo album: accepts image uploads with metadata,
//! stores the image bytes on an S3-compatible host and the metadata in
//! Postgres, and serves the gallery's list/create/delete API plus the
//! PIN-gated login used by the frontend's entry page.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};

//! Route configuration
use actix_web::web;

use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .service(web::scope("/auth").route("/login", web::post().to(handlers::login)))
        .service(
            web::scope("/photos")
                .route("", web::get().to(handlers::list_photos))
                .route("", web::post().to(handlers::upload_photo))
                .route("/{id}", web::delete().to(handlers::delete_photo)),
        );
}

/// Auth handler - the PIN login gating the gallery entry page
use actix_web::{web, HttpResponse};

use crate::error::{AppError, Result};
use crate::models::{LoginRequest, LoginResponse};
use crate::services::AccessGate;

/// POST /auth/login
pub async fn login(
    gate: web::Data<AccessGate>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let pin = req.pin.as_deref().unwrap_or("");
    if pin.is_empty() {
        return Err(AppError::Validation("PIN is required".to_string()));
    }

    if !gate.verify(pin) {
        return Err(AppError::Unauthorized("incorrect PIN".to_string()));
    }

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: "access granted".to_string(),
    }))
}

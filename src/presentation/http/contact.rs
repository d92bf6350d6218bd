use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::contact::send_message::{ContactMessage, SendContactMessage};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: &'static str,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/contact", post(submit)).with_state(ctx)
}

/// Public contact form, fire-and-forget acknowledgement.
#[utoipa::path(post, path = "/api/contact", tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, body = ContactResponse),
        (status = 400, description = "Validation failure with per-field detail")
    ))]
pub async fn submit(Json(req): Json<ContactRequest>) -> Result<Json<ContactResponse>, ApiError> {
    SendContactMessage
        .execute(ContactMessage {
            name: req.name,
            email: req.email,
            message: req.message,
        })
        .map_err(ApiError::from)?;
    Ok(Json(ContactResponse {
        message: "Message sent successfully!",
    }))
}

//! Contact form endpoint.

use actix_web::{HttpResponse, web};
use validator::Validate;

use mahogany_core::domain::NewContactMessage;
use mahogany_shared::dto::{ContactForm, SubmissionResponse};
use mahogany_shared::response::field_errors;

use crate::middleware::error::{AppError, AppResult, internal};
use crate::state::AppState;

/// POST /api/contact
pub async fn submit_message(
    state: web::Data<AppState>,
    body: web::Json<ContactForm>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();

    // Validate input
    if let Err(errors) = form.validate() {
        return Err(AppError::Validation {
            message: "Invalid form data",
            errors: field_errors(&errors),
        });
    }

    let message = state
        .contact
        .create_message(NewContactMessage {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        })
        .await
        .map_err(internal("Failed to send message"))?;

    Ok(HttpResponse::Created().json(SubmissionResponse {
        message: "Message sent successfully".to_string(),
        id: message.id,
    }))
}

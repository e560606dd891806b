//! Newsletter signup endpoint.

use actix_web::{HttpResponse, web};
use validator::Validate;

use mahogany_core::domain::NewSubscriber;
use mahogany_shared::dto::{SubmissionResponse, SubscribeRequest};
use mahogany_shared::response::field_errors;

use crate::middleware::error::{AppError, AppResult, internal};
use crate::state::AppState;

/// POST /api/newsletter/subscribe
pub async fn subscribe(
    state: web::Data<AppState>,
    body: web::Json<SubscribeRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if let Err(errors) = req.validate() {
        return Err(AppError::Validation {
            message: "Invalid email format",
            errors: field_errors(&errors),
        });
    }

    // Check if email is already subscribed. An inactive record does not
    // count; re-subscribing it is how it comes back to life.
    let already_subscribed = state
        .newsletter
        .is_subscribed(&req.email)
        .await
        .map_err(internal("Failed to subscribe to newsletter"))?;
    if already_subscribed {
        return Err(AppError::Conflict("Email is already subscribed"));
    }

    let subscriber = state
        .newsletter
        .subscribe(NewSubscriber { email: req.email })
        .await
        .map_err(internal("Failed to subscribe to newsletter"))?;

    Ok(HttpResponse::Created().json(SubmissionResponse {
        message: "Successfully subscribed to newsletter".to_string(),
        id: subscriber.id,
    }))
}

//! Data Transfer Objects - request/response types for the API.
//!
//! The write payloads carry their validation rules. Fields default to empty
//! strings on deserialization so a request missing a field still produces a
//! per-field validation error instead of a bare parse failure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Not a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Body of `POST /api/newsletter/subscribe`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[serde(default)]
    #[validate(email(message = "Not a valid email address"))]
    pub email: String,
}

/// 201 body for both write routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub message: String,
    pub id: Uuid,
}

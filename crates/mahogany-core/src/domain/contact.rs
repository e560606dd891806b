use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ContactMessage entity - a submitted contact form. Write-only from the
/// API's perspective; `responded` is for a future admin view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub responded: bool,
}

/// Input for a contact message, already validated at the API boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Create a message with a generated ID and a server-assigned timestamp.
    pub fn new(input: NewContactMessage) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            created_at: Utc::now(),
            responded: false,
        }
    }
}

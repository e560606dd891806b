use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// NewsletterSubscriber entity, keyed by email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub active: bool,
}

/// Input for a newsletter signup, already validated at the API boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubscriber {
    pub email: String,
}

impl NewsletterSubscriber {
    /// Create an active subscription with a generated ID and a
    /// server-assigned timestamp.
    pub fn new(input: NewSubscriber) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: input.email,
            subscribed_at: Utc::now(),
            active: true,
        }
    }
}

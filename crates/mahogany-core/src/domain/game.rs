use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a game sits in the studio's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Active,
    ComingSoon,
    Concept,
}

/// Game entity - a title on the games page, addressed by slug.
///
/// `progress` is a completion percentage (0-100). At most one game is expected
/// to carry `featured = true` for the homepage promotion slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub category: String,
    pub status: GameStatus,
    pub progress: u8,
    pub engine: String,
    pub featured: bool,
    pub release_date: Option<DateTime<Utc>>,
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_value(GameStatus::ComingSoon).unwrap(),
            serde_json::json!("coming_soon")
        );
        assert_eq!(
            serde_json::from_value::<GameStatus>(serde_json::json!("concept")).unwrap(),
            GameStatus::Concept
        );
    }
}

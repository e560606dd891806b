use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author attributed to a post when none is given.
pub const DEFAULT_AUTHOR: &str = "Tai";

/// Estimated read time, in minutes, when none is given.
pub const DEFAULT_READ_TIME: u32 = 5;

/// Posts are published unless explicitly held back.
pub const DEFAULT_PUBLISHED: bool = true;

/// BlogPost entity - a dev-blog entry, addressed by slug.
///
/// `content` is markdown-like text (`#`/`##`/`###`/`- ` line prefixes); the
/// site renders it client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub read_time: u32,
    pub published: bool,
}

/// Input for creating a blog post. Optional fields fall back to the
/// `DEFAULT_*` constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub author: Option<String>,
    pub read_time: Option<u32>,
    pub published: Option<bool>,
}

impl BlogPost {
    /// Create a post with a generated ID, filling in defaults for any
    /// omitted optional field.
    pub fn new(input: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            slug: input.slug,
            excerpt: input.excerpt,
            content: input.content,
            category: input.category,
            published_at: input.published_at,
            author: input.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            read_time: input.read_time.unwrap_or(DEFAULT_READ_TIME),
            published: input.published.unwrap_or(DEFAULT_PUBLISHED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewBlogPost {
        NewBlogPost {
            title: "Soundtrack Preview".to_string(),
            slug: "soundtrack-preview".to_string(),
            excerpt: "A first listen.".to_string(),
            content: "# Soundtrack Preview".to_string(),
            category: "Dev Update".to_string(),
            published_at: Utc::now(),
            author: None,
            read_time: None,
            published: None,
        }
    }

    #[test]
    fn defaults_fill_omitted_fields() {
        let post = BlogPost::new(input());
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert_eq!(post.read_time, DEFAULT_READ_TIME);
        assert!(post.published);
    }

    #[test]
    fn explicit_fields_win_over_defaults() {
        let post = BlogPost::new(NewBlogPost {
            author: Some("Guest".to_string()),
            read_time: Some(12),
            published: Some(false),
            ..input()
        });
        assert_eq!(post.author, "Guest");
        assert_eq!(post.read_time, 12);
        assert!(!post.published);
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(BlogPost::new(input())).unwrap();
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("readTime").is_some());
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    BlogPost, ContactMessage, Game, NewBlogPost, NewContactMessage, NewSubscriber, NewUser,
    NewsletterSubscriber, User,
};
use crate::error::RepoError;

/// User lookups and creation. No route exposes these yet; the port exists for
/// a future admin login.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Create a user, keyed by its generated ID.
    async fn create_user(&self, user: NewUser) -> Result<User, RepoError>;
}

/// Dev-blog posts, keyed by slug.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All posts with `published = true`, newest first by `published_at`.
    /// Equal timestamps keep insertion order.
    async fn published_posts(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Look up a post by slug, published or not.
    async fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError>;

    /// Create a post, applying defaults for omitted optional fields.
    /// A second create with the same slug silently replaces the first.
    async fn create_post(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;
}

/// Contact form submissions. Write-only; there is no read route.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_message(&self, message: NewContactMessage)
    -> Result<ContactMessage, RepoError>;
}

/// Newsletter subscriptions, keyed by email.
///
/// The repository does not reject duplicate emails; callers are expected to
/// pre-check with `is_subscribed`. Re-subscribing overwrites the record,
/// which is how an inactive subscription comes back to life.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn subscribe(&self, subscriber: NewSubscriber)
    -> Result<NewsletterSubscriber, RepoError>;

    /// True iff a record exists for the email and its `active` flag is set.
    async fn is_subscribed(&self, email: &str) -> Result<bool, RepoError>;
}

/// The games catalogue, keyed by slug. Seeded at startup; no create route.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// All games, in insertion order.
    async fn all_games(&self) -> Result<Vec<Game>, RepoError>;

    async fn game_by_slug(&self, slug: &str) -> Result<Option<Game>, RepoError>;

    /// The first game flagged `featured = true`, by insertion order.
    async fn featured_game(&self) -> Result<Option<Game>, RepoError>;
}

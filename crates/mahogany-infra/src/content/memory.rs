//! In-memory content store - the site's single source of truth.
//!
//! Collections live behind async RwLocks because actix handlers run on a
//! multi-threaded runtime. Note: data is lost on process restart.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use mahogany_core::domain::{
    BlogPost, ContactMessage, Game, NewBlogPost, NewContactMessage, NewSubscriber, NewUser,
    NewsletterSubscriber, User,
};
use mahogany_core::error::RepoError;
use mahogany_core::ports::{
    BlogRepository, ContactRepository, GameRepository, NewsletterRepository, UserRepository,
};

use super::fixtures;

/// A key-indexed table that remembers insertion order.
///
/// Overwriting an existing key keeps the row's original position. The blog
/// sort tie-break, the games listing, and the featured-game pick all read
/// rows in insertion order.
struct Table<K, V> {
    rows: HashMap<K, (u64, V)>,
    next_seq: u64,
}

impl<K: Eq + Hash, V> Table<K, V> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_seq: 0,
        }
    }

    fn insert(&mut self, key: K, value: V) {
        match self.rows.get_mut(&key) {
            Some(row) => row.1 = value,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.rows.insert(key, (seq, value));
            }
        }
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.get(key).map(|(_, value)| value)
    }

    /// Rows in insertion order.
    fn values(&self) -> Vec<&V> {
        let mut rows: Vec<&(u64, V)> = self.rows.values().collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, value)| value).collect()
    }
}

impl<V> Table<String, V> {
    fn from_rows(rows: Vec<V>, key: impl Fn(&V) -> String) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(key(&row), row);
        }
        table
    }
}

/// In-memory implementation of every content port.
///
/// Constructed explicitly and injected through application state so tests can
/// run against isolated stores.
pub struct InMemoryContentStore {
    users: RwLock<Table<Uuid, User>>,
    blog_posts: RwLock<Table<String, BlogPost>>,
    contact_messages: RwLock<Table<Uuid, ContactMessage>>,
    subscribers: RwLock<Table<String, NewsletterSubscriber>>,
    games: RwLock<Table<String, Game>>,
}

impl InMemoryContentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_content(Vec::new(), Vec::new())
    }

    /// A store seeded with the given posts and games, in the order given.
    pub fn with_content(posts: Vec<BlogPost>, games: Vec<Game>) -> Self {
        Self {
            users: RwLock::new(Table::new()),
            blog_posts: RwLock::new(Table::from_rows(posts, |post| post.slug.clone())),
            contact_messages: RwLock::new(Table::new()),
            subscribers: RwLock::new(Table::new()),
            games: RwLock::new(Table::from_rows(games, |game| game.slug.clone())),
        }
    }

    /// A store seeded with the studio's fixture content.
    pub fn with_fixtures() -> Self {
        let store = Self::with_content(fixtures::blog_posts(), fixtures::games());
        tracing::debug!("content store seeded from fixtures");
        store
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryContentStore {
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .into_iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, input: NewUser) -> Result<User, RepoError> {
        let user = User::new(input);
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl BlogRepository for InMemoryContentStore {
    async fn published_posts(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.blog_posts.read().await;
        let mut published: Vec<BlogPost> = posts
            .values()
            .into_iter()
            .filter(|post| post.published)
            .cloned()
            .collect();
        // Stable sort over insertion-ordered rows: equal timestamps keep
        // their insertion order.
        published.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(published)
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.blog_posts.read().await;
        Ok(posts.get(slug).cloned())
    }

    async fn create_post(&self, input: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::new(input);
        let mut posts = self.blog_posts.write().await;
        posts.insert(post.slug.clone(), post.clone());
        Ok(post)
    }
}

#[async_trait]
impl ContactRepository for InMemoryContentStore {
    async fn create_message(
        &self,
        input: NewContactMessage,
    ) -> Result<ContactMessage, RepoError> {
        let message = ContactMessage::new(input);
        let mut messages = self.contact_messages.write().await;
        messages.insert(message.id, message.clone());
        tracing::debug!(id = %message.id, "contact message stored");
        Ok(message)
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryContentStore {
    async fn subscribe(
        &self,
        input: NewSubscriber,
    ) -> Result<NewsletterSubscriber, RepoError> {
        let subscriber = NewsletterSubscriber::new(input);
        let mut subscribers = self.subscribers.write().await;
        subscribers.insert(subscriber.email.clone(), subscriber.clone());
        tracing::debug!(id = %subscriber.id, "newsletter subscription stored");
        Ok(subscriber)
    }

    async fn is_subscribed(&self, email: &str) -> Result<bool, RepoError> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers.get(email).is_some_and(|sub| sub.active))
    }
}

#[async_trait]
impl GameRepository for InMemoryContentStore {
    async fn all_games(&self) -> Result<Vec<Game>, RepoError> {
        let games = self.games.read().await;
        Ok(games.values().into_iter().cloned().collect())
    }

    async fn game_by_slug(&self, slug: &str) -> Result<Option<Game>, RepoError> {
        let games = self.games.read().await;
        Ok(games.get(slug).cloned())
    }

    async fn featured_game(&self) -> Result<Option<Game>, RepoError> {
        let games = self.games.read().await;
        Ok(games
            .values()
            .into_iter()
            .find(|game| game.featured)
            .cloned())
    }
}

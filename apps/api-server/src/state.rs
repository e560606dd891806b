//! Application state - shared across all handlers.

use std::sync::Arc;

use mahogany_core::ports::{
    BlogRepository, ContactRepository, GameRepository, NewsletterRepository, UserRepository,
};
use mahogany_infra::InMemoryContentStore;

/// Shared application state. One content store backs every port.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blog: Arc<dyn BlogRepository>,
    pub games: Arc<dyn GameRepository>,
    pub contact: Arc<dyn ContactRepository>,
    pub newsletter: Arc<dyn NewsletterRepository>,
}

impl AppState {
    /// State for the running server: the fixture-seeded store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryContentStore::with_fixtures()))
    }

    /// State around an explicit store. Tests use this to run each case
    /// against an isolated store.
    pub fn with_store(store: Arc<InMemoryContentStore>) -> Self {
        Self {
            users: store.clone(),
            blog: store.clone(),
            games: store.clone(),
            contact: store.clone(),
            newsletter: store,
        }
    }
}

//! Ports - trait definitions for the content store.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

pub use repository::{
    BlogRepository, ContactRepository, GameRepository, NewsletterRepository, UserRepository,
};

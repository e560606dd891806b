//! # Mahogany Infrastructure
//!
//! Concrete implementations of the ports defined in `mahogany-core`.
//! The site runs entirely from memory; everything here is lost on restart.

pub mod content;

pub use content::InMemoryContentStore;

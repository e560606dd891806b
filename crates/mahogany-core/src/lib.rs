//! # Mahogany Core
//!
//! The domain layer of the Mahogany Games site backend.
//! This crate contains entities and repository ports with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;

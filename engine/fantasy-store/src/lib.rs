//! fantasy-store - Repository surface for the gambit-exchange engine
//!
//! This crate defines the `FantasyStore` trait, the exact query and mutation
//! surface the scoring and market services require from their storage
//! collaborator, plus `MemoryStore`, an in-memory reference implementation
//! whose market operations are genuinely transactional (all state lives
//! behind one lock). Storage format is the implementation's concern; the
//! engine only depends on the trait.

pub mod error;
pub mod memory;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{FantasyStore, NewOutcome};

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

//! In-memory collaborators for embedding and tests.

pub mod memory;

pub use memory::{InMemoryProfiles, InMemoryResultSink};

//! Stride core: shared types, traits, errors, config, events, tracing, and constants.
//!
//! This crate has no knowledge of sampling or statistics. It defines the
//! vector & weight model, the result records the engine produces, and the
//! seams (collaborator traits) the engine is driven through.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod model;
pub mod traits;
pub mod tracing;
pub mod types;

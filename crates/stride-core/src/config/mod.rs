//! Configuration system for Stride.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod engine_config;
pub mod stride_config;

pub use engine_config::{EngineConfig, EngineSettings};
pub use stride_config::{ConfigOverrides, StrideConfig};

//! Error handling for Stride.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod provider_error;
pub mod publish_error;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use error_code::StrideErrorCode;
pub use model_error::ModelError;
pub use provider_error::ProviderError;
pub use publish_error::PublishError;
pub use simulation_error::SimulationError;

//! StrideErrorCode trait for stable, machine-readable error codes.

/// Trait for converting Stride errors to stable error codes.
/// Every error enum implements this so callers (persistence, transport
/// layers) can branch on a code rather than on message text.
pub trait StrideErrorCode {
    /// Returns the error code string (e.g., "MISSING_DATA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const MISSING_DATA: &str = "MISSING_DATA";
pub const COMPUTATION_TIMEOUT: &str = "COMPUTATION_TIMEOUT";
pub const INTERNAL_COMPUTATION: &str = "INTERNAL_COMPUTATION";
pub const CANCELLED: &str = "CANCELLED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PUBLISH_ERROR: &str = "PUBLISH_ERROR";

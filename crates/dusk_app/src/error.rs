//! App error types

use thiserror::Error;

/// Errors raised while mounting or driving the theme screen
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Host reported unusable screen metrics
    #[error("Invalid screen metrics: {0}")]
    InvalidScreen(String),

    /// Scenario could not be loaded
    #[error("Scenario error: {0}")]
    Scenario(String),
}

/// Result type for app operations
pub type Result<T> = std::result::Result<T, AppError>;

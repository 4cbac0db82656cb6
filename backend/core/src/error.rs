use thiserror::Error;

/// Top-level error type for the lensbot runtime.
///
/// The classification engine itself is total and never returns an error;
/// these variants cover the platform glue around it.
#[derive(Debug, Error)]
pub enum LensBotError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("LINE reply delivery failed: {0}")]
    DeliveryFailed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

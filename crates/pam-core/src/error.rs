//! Error type for the core primitives.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they parse or convert core values.

use thiserror::Error;

/// Errors raised while parsing or converting core values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("timestamp {secs} lies before the day origin {origin}")]
    BeforeDayOrigin { secs: i64, origin: i64 },
}

/// Shorthand result type for `pam-core`.
pub type CoreResult<T> = Result<T, CoreError>;

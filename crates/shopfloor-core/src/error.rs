//! Error handling for the Shopfloor editor.
//!
//! The editor core itself has no recoverable business errors: mutations
//! referencing missing elements are no-ops and degenerate transforms are
//! clamped. Errors here belong to the persistence boundary (storage and
//! serialization), and use `thiserror` for ergonomic handling.

use thiserror::Error;

/// Top-level error type for the Shopfloor crates.
#[derive(Error, Debug)]
pub enum Error {
    /// No layout is stored under the requested model name.
    #[error("layout '{name}' not found")]
    LayoutNotFound {
        /// The model name that was requested.
        name: String,
    },

    /// The model name cannot be used as a storage key.
    #[error("invalid layout name '{name}'")]
    InvalidName {
        /// The offending name.
        name: String,
    },

    /// Underlying storage I/O failure.
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    /// Layout (de)serialization failure.
    #[error("layout serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result alias used across the Shopfloor crates.
pub type Result<T> = std::result::Result<T, Error>;

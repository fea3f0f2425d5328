//! Bundle configuration errors and context helpers.

use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for bundle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, validating, or preparing a bundle config
#[derive(Error, Debug)]
pub enum Error {
    /// IO failure with the operation and path that caused it
    #[error("{context} ({}): {error}", .path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying failure
        #[source]
        error: std::io::Error,
    },

    /// TOML could not be parsed into a config
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Config parsed but failed validation
    #[error("invalid bundle config: {0}")]
    InvalidConfig(String),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Returns true for validation failures.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

/// Converts a missing value into a [`Error::GenericError`].
pub trait Context<T> {
    /// Attaches `msg` when the value is absent.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Attaches operation and path context to IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error as [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundle::Error::GenericError(format!($($arg)*)))
    };
}

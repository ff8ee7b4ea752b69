//! Global error handling for takeout
//!
//! Every fallible operation in the crate returns [`Result`], and the binary
//! turns a failed run into an error banner built from [`TakeoutError::kind`]
//! and the error message.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for takeout operations
#[derive(Error, Debug)]
pub enum TakeoutError {
    /// File system errors without further context
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File system errors tagged with the operation that failed
    #[error("{context}: {source}")]
    Fs {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Two source files flatten onto the same output name
    #[error(
        "Output name collision: '{name}' is produced by both {} and {}",
        first.display(),
        second.display()
    )]
    NameCollision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Coarse classification of a [`TakeoutError`], reported alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Walk,
    Config,
    NotFound,
    Collision,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::Walk => "walk",
            Self::Config => "config",
            Self::NotFound => "not-found",
            Self::Collision => "collision",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TakeoutError {
    /// The kind of failure, independent of its message
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Fs { .. } => ErrorKind::Io,
            Self::Walk(_) => ErrorKind::Walk,
            Self::Config(_) => ErrorKind::Config,
            Self::PathNotFound(_) => ErrorKind::NotFound,
            Self::NameCollision { .. } => ErrorKind::Collision,
        }
    }
}

/// Specialized Result type for takeout operations
pub type Result<T> = std::result::Result<T, TakeoutError>;

/// Creates a TakeoutError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::TakeoutError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to filesystem errors
pub trait ResultExt<T> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: fmt::Display;
}

impl<T> ResultExt<T> for std::result::Result<T, io::Error> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: fmt::Display,
    {
        self.map_err(|source| TakeoutError::Fs {
            context: f().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let err = TakeoutError::NameCollision {
            name: "lib_main.txt".to_string(),
            first: PathBuf::from("lib/main.dart"),
            second: PathBuf::from("lib/main.rs"),
        };
        assert_eq!(err.kind(), ErrorKind::Collision);
        assert!(err.to_string().contains("lib/main.dart"));
        assert!(err.to_string().contains("lib/main.rs"));

        let err: Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .with_context(|| "Failed to copy lib/a.dart");
        let err = err.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "Failed to copy lib/a.dart: gone");
    }

    #[test]
    fn macros_build_variants() {
        fn check(flag: bool) -> Result<()> {
            ensure!(flag, Config, "flag was {}", flag);
            Ok(())
        }
        assert!(check(true).is_ok());
        let err = check(false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.to_string(), "Configuration error: flag was false");
    }
}

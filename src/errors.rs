//! Error types for the test skeleton pipeline.
//!
//! Every failure is terminal for a run. The variants follow the stages of the
//! pipeline so a caller can tell where generation stopped:
//!
//! - `Usage`: the input argument was rejected before any file was touched
//! - `Read` / `Parse`: the source file could not be loaded or is not valid Rust
//! - `Render`: the collected signatures could not be turned into tokens
//! - `Format`: the rendered code could not be canonicalized
//! - `AlreadyExists` / `Write`: the companion file could not be created
//!
//! # Example
//!
//! ```rust
//! use mktest::errors::{ErrorCode, MktestError};
//!
//! let err = MktestError::usage("argument must be a .rs file");
//! assert_eq!(err.code(), ErrorCode::USAGE);
//! assert!(err.is_user_fixable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, MktestError>;

/// Structured error code for documentation and programmatic handling.
///
/// - E001-E009: argument errors
/// - E010-E019: read and parse errors
/// - E020-E029: render and format errors
/// - E030-E039: write errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Bad or missing input argument
    pub const USAGE: ErrorCode = ErrorCode("E001");

    /// Source file could not be read
    pub const READ: ErrorCode = ErrorCode("E010");
    /// Source file is not valid Rust
    pub const PARSE_SYNTAX: ErrorCode = ErrorCode("E011");

    /// Signature could not be rendered into the template
    pub const RENDER: ErrorCode = ErrorCode("E020");
    /// Rendered code failed to canonicalize
    pub const FORMAT: ErrorCode = ErrorCode("E021");

    /// Companion file already exists
    pub const ALREADY_EXISTS: ErrorCode = ErrorCode("E030");
    /// Companion file could not be written
    pub const WRITE: ErrorCode = ErrorCode("E031");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error raised by any stage of skeleton generation.
#[derive(Debug, Error)]
pub enum MktestError {
    /// Input argument rejected before any I/O.
    #[error("usage: {message}")]
    Usage { message: String },

    /// Source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file failed to parse.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A collected signature could not be expressed in the skeleton.
    #[error("failed to render test skeleton: {message}")]
    Render { message: String },

    /// The rendered skeleton is not valid Rust. Carries the raw text so the
    /// offending output can be inspected.
    #[error("{raw}\nfailed to format generated code: {message}")]
    Format { raw: String, message: String },

    /// The companion file is already present on disk.
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// The companion file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MktestError {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a read error with path context.
    pub fn read_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error from a syn error, using the span start for location.
    pub fn parse_with_path(err: &syn::Error, path: impl Into<PathBuf>) -> Self {
        let start = err.span().start();
        Self::Parse {
            path: path.into(),
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a format error carrying the unformatted text.
    pub fn format(raw: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            raw: raw.into(),
            message: message.into(),
        }
    }

    /// Map an I/O failure on the target path. `AlreadyExists` gets its own variant.
    pub fn write_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            Self::AlreadyExists { path }
        } else {
            Self::Write { path, source }
        }
    }

    /// Get the structured code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Usage { .. } => ErrorCode::USAGE,
            Self::Read { .. } => ErrorCode::READ,
            Self::Parse { .. } => ErrorCode::PARSE_SYNTAX,
            Self::Render { .. } => ErrorCode::RENDER,
            Self::Format { .. } => ErrorCode::FORMAT,
            Self::AlreadyExists { .. } => ErrorCode::ALREADY_EXISTS,
            Self::Write { .. } => ErrorCode::WRITE,
        }
    }

    /// Whether the user can resolve the error by changing their input or
    /// workspace, as opposed to an internal or environmental failure.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Usage { .. } | Self::Parse { .. } | Self::AlreadyExists { .. }
        )
    }
}

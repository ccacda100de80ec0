//! Type-state pattern for validating configuration before execution
//!
//! A [`GenerateConfig`] starts `Unvalidated`. Only a `Validated` config can be
//! handed to [`crate::commands::generate::handle_generate`], so the input path
//! is always checked before any file is read.
//!
//! # Example
//!
//! ```
//! use mktest::commands::state::GenerateConfig;
//!
//! let config = GenerateConfig::new("src/parser.rs".into(), false);
//! assert!(config.validate().is_ok());
//!
//! let config = GenerateConfig::new("src/parser_test.rs".into(), false);
//! assert!(config.validate().is_err());
//! ```

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::io::validate_input;

/// Marker type representing unvalidated state
#[derive(Debug, Clone, Copy)]
pub struct Unvalidated;

/// Marker type representing validated state
#[derive(Debug, Clone, Copy)]
pub struct Validated;

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig<State = Unvalidated> {
    input: PathBuf,
    stdout: bool,
    _state: PhantomData<State>,
}

impl GenerateConfig<Unvalidated> {
    /// Create a new unvalidated configuration
    pub fn new(input: PathBuf, stdout: bool) -> Self {
        Self {
            input,
            stdout,
            _state: PhantomData,
        }
    }

    /// Check the input path. No I/O happens here.
    pub fn validate(self) -> Result<GenerateConfig<Validated>> {
        validate_input(&self.input)?;
        Ok(GenerateConfig {
            input: self.input,
            stdout: self.stdout,
            _state: PhantomData,
        })
    }
}

impl<State> GenerateConfig<State> {
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Whether the skeleton goes to stdout instead of the companion file.
    pub fn stdout(&self) -> bool {
        self.stdout
    }
}

// Export modules for library usage
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{ast::SourceUnit, Param, TestCase, TestFile, UNNAMED};

pub use crate::errors::{ErrorCode, MktestError, Result};

pub use crate::extraction::{is_exported, SignatureExtractor};

pub use crate::codegen::{format_source, render};

pub use crate::io::{companion_path, read_source, validate_input, write_exclusive};

pub use crate::commands::{generate_skeleton, handle_generate, GenerateConfig, GenerateOutcome};

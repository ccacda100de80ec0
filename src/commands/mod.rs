//! CLI command implementations.
//!
//! - **generate**: write a `_test.rs` skeleton next to a Rust source file
//!
//! Commands follow a type-state pattern for configuration validation,
//! ensuring that only validated configurations can be executed.

pub mod generate;
pub mod state;

pub use generate::{generate_skeleton, handle_generate, GenerateOutcome};
pub use state::{GenerateConfig, Unvalidated, Validated};

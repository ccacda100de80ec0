//! Skeleton rendering and formatting.

pub mod format;
pub mod skeleton;

pub use format::{format_source, repair_imports};
pub use skeleton::{render, TEST_PREFIX};

//! Loading and parsing the input source file.

use crate::core::ast::SourceUnit;
use crate::errors::{MktestError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, debug_span};

/// Module name used for crate roots and paths with no usable file name.
pub const CRATE_MODULE: &str = "crate";

/// Read and parse one Rust source file.
///
/// Any read or syntax error aborts with no partial result.
pub fn read_source(path: &Path) -> Result<SourceUnit> {
    let _span = debug_span!("read_source", path = %path.display()).entered();

    let content = fs::read_to_string(path).map_err(|e| MktestError::read_with_path(e, path))?;
    let file = syn::parse_file(&content).map_err(|e| MktestError::parse_with_path(&e, path))?;

    debug!(
        bytes = content.len(),
        items = file.items.len(),
        "Parsed source file"
    );

    Ok(SourceUnit::new(file, path, module_name(path)))
}

/// Name of the module a file defines, derived from its path.
///
/// `foo.rs` defines `foo`, `foo/mod.rs` defines `foo`, and `lib.rs` or
/// `main.rs` define the crate root.
pub fn module_name(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str());

    match stem {
        Some("lib") | Some("main") | None => CRATE_MODULE.to_string(),
        Some("mod") => path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(CRATE_MODULE)
            .to_string(),
        Some(other) => other.to_string(),
    }
}

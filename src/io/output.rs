//! Companion file naming and the create-exclusive writer.

use crate::errors::{MktestError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span};

/// Suffix every input file must carry.
pub const SOURCE_SUFFIX: &str = ".rs";

/// Suffix of generated companion files. Inputs ending in it are rejected.
pub const TEST_SUFFIX: &str = "_test.rs";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reject anything that is not a plain `.rs` source file.
///
/// Only inspects the path; the file system is not touched.
pub fn validate_input(path: &Path) -> Result<()> {
    let name = file_name(path);
    let has_stem = name.len() > SOURCE_SUFFIX.len();

    if !has_stem || !name.ends_with(SOURCE_SUFFIX) || name.ends_with(TEST_SUFFIX) {
        return Err(MktestError::usage(format!(
            "argument must be a {} file, not a {} file: {}",
            SOURCE_SUFFIX,
            TEST_SUFFIX,
            path.display()
        )));
    }

    Ok(())
}

/// Path of the test file generated for `input`, in the same directory.
///
/// `foo.rs` maps to `foo_test.rs`. A trailing `_test` on the stem is dropped
/// first so the suffix is never doubled.
pub fn companion_path(input: &Path) -> PathBuf {
    let name = file_name(input);
    let stem = name.strip_suffix(SOURCE_SUFFIX).unwrap_or(&name);
    let stem = stem.strip_suffix("_test").unwrap_or(stem);

    input.with_file_name(format!("{stem}{TEST_SUFFIX}"))
}

/// Create `path` and write `content` to it, failing if it already exists.
pub fn write_exclusive(path: &Path, content: &str) -> Result<()> {
    let _span = debug_span!("write", path = %path.display()).entered();

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| MktestError::write_with_path(e, path))?;

    file.write_all(content.as_bytes())
        .map_err(|e| MktestError::write_with_path(e, path))?;

    debug!(bytes = content.len(), "Wrote companion file");
    Ok(())
}

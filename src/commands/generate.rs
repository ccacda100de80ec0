//! The generate command: read, collect, render, format, write.

use std::path::{Path, PathBuf};

use tracing::{debug_span, info};

use crate::codegen::{format_source, render};
use crate::commands::state::{GenerateConfig, Validated};
use crate::errors::Result;
use crate::extraction::SignatureExtractor;
use crate::io::{companion_path, read_source, write_exclusive};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The skeleton was written to this new file.
    Written(PathBuf),
    /// The skeleton was requested on stdout and is returned unwritten.
    Preview(String),
}

/// Run every stage for one validated input.
///
/// The companion file is only created once formatting has succeeded, and is
/// never overwritten.
pub fn handle_generate(config: GenerateConfig<Validated>) -> Result<GenerateOutcome> {
    let source = generate_skeleton(config.input())?;

    if config.stdout() {
        return Ok(GenerateOutcome::Preview(source));
    }

    let target = companion_path(config.input());
    write_exclusive(&target, &source)?;
    info!(path = %target.display(), "Generated test skeleton");

    Ok(GenerateOutcome::Written(target))
}

/// Produce the formatted test skeleton for a source file without writing it.
pub fn generate_skeleton(path: &Path) -> Result<String> {
    let unit = read_source(path)?;

    let tests = {
        let _span = debug_span!("collect", module = %unit.module).entered();
        SignatureExtractor::extract(&unit.file, &unit.module)
    };
    info!(
        module = %tests.module,
        functions = tests.tests.len(),
        "Collected exported functions"
    );

    let tokens = render(&tests)?;
    format_source(tokens)
}

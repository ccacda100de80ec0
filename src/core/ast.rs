use std::path::PathBuf;

/// A parsed Rust source file together with the module name it defines.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    pub file: syn::File,
    pub path: PathBuf,
    pub module: String,
}

impl SourceUnit {
    pub fn new(file: syn::File, path: impl Into<PathBuf>, module: impl Into<String>) -> Self {
        Self {
            file,
            path: path.into(),
            module: module.into(),
        }
    }
}

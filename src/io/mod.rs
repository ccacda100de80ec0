pub mod output;
pub mod source;

pub use output::{companion_path, validate_input, write_exclusive, SOURCE_SUFFIX, TEST_SUFFIX};
pub use source::{module_name, read_source};

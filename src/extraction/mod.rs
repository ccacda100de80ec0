//! Signature extraction from parsed Rust source.
//!
//! See [`extractor::SignatureExtractor`] for the rules that decide which
//! functions produce a test stub.

pub mod extractor;

pub use extractor::{binding_name, is_exported, type_text, SignatureExtractor};

// Test utility module for mktest integration tests
#![allow(dead_code)]

use quote::ToTokens;
use std::path::PathBuf;

// Helper to create a temporary source file
pub fn create_source_file(content: &str, file_name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(file_name);
    std::fs::write(&file_path, content).expect("Failed to write source file");
    (temp_dir, file_path)
}

// Parse generated output back into a syntax tree
pub fn parse_generated(source: &str) -> syn::File {
    syn::parse_file(source).expect("Generated code should parse")
}

// Names of all test functions in generated output, in order
pub fn test_fn_names(file: &syn::File) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

pub fn find_test_fn<'a>(file: &'a syn::File, name: &str) -> &'a syn::ItemFn {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Fn(f) if f.sig.ident == name => Some(f),
            _ => None,
        })
        .unwrap_or_else(|| panic!("missing test fn {name}"))
}

// (field name, field type) pairs of the case struct inside a test fn.
// Types are compared as token strings, e.g. `& mut Server`.
pub fn case_fields(item_fn: &syn::ItemFn) -> Option<Vec<(String, String)>> {
    item_fn.block.stmts.iter().find_map(|stmt| match stmt {
        syn::Stmt::Item(syn::Item::Struct(s)) => Some(
            s.fields
                .iter()
                .map(|f| {
                    (
                        f.ident.as_ref().map(|i| i.to_string()).unwrap_or_default(),
                        f.ty.to_token_stream().to_string(),
                    )
                })
                .collect(),
        ),
        _ => None,
    })
}

pub fn tokens(text: &str) -> String {
    text.parse::<proc_macro2::TokenStream>()
        .expect("valid tokens")
        .to_string()
}

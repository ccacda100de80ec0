//! Canonical formatting of rendered code.
//!
//! The rendered tokens are parsed back into a `syn::File`, imports are
//! repaired, and the result is printed with prettyplease.

use crate::errors::{MktestError, Result};
use proc_macro2::TokenStream;
use quote::ToTokens;
use tracing::{debug, debug_span};

/// Parse, repair imports and pretty-print generated code.
///
/// Fails with [`MktestError::Format`] carrying the raw rendered text when the
/// tokens are not a valid Rust file.
pub fn format_source(tokens: TokenStream) -> Result<String> {
    let _span = debug_span!("format").entered();

    let raw = tokens.to_string();
    let mut file =
        syn::parse2::<syn::File>(tokens).map_err(|e| MktestError::format(&raw, e.to_string()))?;

    repair_imports(&mut file);
    let formatted = prettyplease::unparse(&file);

    debug!(bytes = formatted.len(), "Formatted generated code");
    Ok(formatted)
}

/// Hoist `use` items to the top, drop duplicates, sort them, and make sure
/// the parent module is glob-imported.
pub fn repair_imports(file: &mut syn::File) {
    let mut imports = Vec::new();
    let mut rest = Vec::new();

    for item in file.items.drain(..) {
        match item {
            syn::Item::Use(item_use) => imports.push(item_use),
            other => rest.push(other),
        }
    }

    let parent_glob: syn::ItemUse = syn::parse_quote!(use super::*;);
    imports.push(parent_glob);

    let mut keyed: Vec<(String, syn::ItemUse)> = imports
        .into_iter()
        .map(|item_use| (item_use.to_token_stream().to_string(), item_use))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.dedup_by(|a, b| a.0 == b.0);

    file.items = keyed
        .into_iter()
        .map(|(_, item_use)| syn::Item::Use(item_use))
        .chain(rest)
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quote::quote;

    fn use_paths(file: &syn::File) -> Vec<String> {
        file.items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Use(u) => Some(u.tree.to_token_stream().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_repair_adds_parent_glob() {
        let mut file: syn::File = syn::parse_quote! {
            fn helper() {}
        };
        repair_imports(&mut file);
        assert_eq!(use_paths(&file), vec!["super :: *"]);
        assert!(matches!(file.items[1], syn::Item::Fn(_)));
    }

    #[test]
    fn test_repair_hoists_sorts_and_dedups() {
        let mut file: syn::File = syn::parse_quote! {
            fn helper() {}
            use std::path::Path;
            use super::*;
            use std::path::Path;
            use std::fs;
        };
        repair_imports(&mut file);
        assert_eq!(
            use_paths(&file),
            vec!["std :: fs", "std :: path :: Path", "super :: *"]
        );
        assert_eq!(file.items.len(), 4);
    }

    #[test]
    fn test_format_source_pretty_prints() {
        let formatted = format_source(quote! {
            #[test] fn test_noop() {}
        })
        .unwrap();

        assert!(formatted.starts_with("use super::*;\n"));
        assert!(formatted.contains("#[test]\nfn test_noop() {}\n"));
    }

    #[test]
    fn test_format_source_reports_raw_text() {
        let err = format_source(quote! { fn broken }).unwrap_err();
        match err {
            MktestError::Format { raw, .. } => assert_eq!(raw, "fn broken"),
            other => panic!("expected format error, got {other:?}"),
        }
    }
}

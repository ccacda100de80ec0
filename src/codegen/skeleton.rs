//! The fixed test skeleton template.
//!
//! Every collected function becomes a `#[test]` function. Functions with at
//! least one parameter also get a one-row case table and an empty loop over
//! it, ready to be filled in.

use crate::core::{Param, TestCase, TestFile, UNNAMED};
use crate::errors::{MktestError, Result};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use std::collections::HashSet;
use tracing::{debug, debug_span};

/// Prefix joined to a function name to form its test name.
pub const TEST_PREFIX: &str = "test_";

/// Field name used for a method receiver, since `self` cannot name a field.
pub const RECEIVER_FIELD: &str = "receiver";

/// Render the whole test module as an unformatted token stream.
pub fn render(file: &TestFile) -> Result<TokenStream> {
    let _span = debug_span!("render", module = %file.module).entered();

    let doc = format!(" Tests for `{}`.", file.module);
    let tests = file
        .tests
        .iter()
        .map(render_test)
        .collect::<Result<Vec<_>>>()?;

    debug!(tests = tests.len(), "Rendered test skeleton");

    Ok(quote! {
        #![doc = #doc]

        use super::*;

        #(#tests)*
    })
}

fn render_test(test: &TestCase) -> Result<TokenStream> {
    let name = test_fn_name(&test.name)?;

    if !test.has_params() {
        return Ok(quote! {
            #[test]
            fn #name() {}
        });
    }

    let fields = unique_fields(&test.params)?;
    let types = test
        .params
        .iter()
        .map(type_tokens)
        .collect::<Result<Vec<_>>>()?;
    let cues: Vec<&str> = test.params.iter().map(|p| p.name.as_str()).collect();

    Ok(quote! {
        #[test]
        #[allow(unreachable_code)]
        fn #name() {
            #[allow(dead_code)]
            struct Case {
                #(#fields: #types,)*
            }

            let cases = vec![Case {
                #(#fields: todo!(#cues),)*
            }];

            for case in cases {
                let _ = case;
            }
        }
    })
}

/// Test function identifier for a source function name.
pub fn test_fn_name(name: &str) -> Result<Ident> {
    let bare = name.strip_prefix("r#").unwrap_or(name);
    let full = format!("{TEST_PREFIX}{bare}");
    syn::parse_str::<Ident>(&full)
        .map_err(|e| MktestError::render(format!("invalid test name `{full}`: {e}")))
}

/// Case struct field for a parameter at `position` in the flattened list.
pub fn field_ident(param: &Param, position: usize) -> Result<Ident> {
    match param.name.as_str() {
        "self" => Ok(format_ident!("{}", RECEIVER_FIELD)),
        UNNAMED => Ok(format_ident!("unnamed_{}", position)),
        name => syn::parse_str::<Ident>(name)
            .map_err(|e| MktestError::render(format!("invalid field name `{name}`: {e}"))),
    }
}

/// Field identifiers for a whole case, in parameter order.
///
/// A renamed receiver or placeholder that would clash with a declared
/// parameter name gets a numeric suffix until it is free.
pub fn unique_fields(params: &[Param]) -> Result<Vec<Ident>> {
    let is_renamed = |param: &Param| param.is_unnamed() || param.name == "self";
    let mut taken: HashSet<String> = params
        .iter()
        .filter(|param| !is_renamed(*param))
        .map(|param| param.name.trim_start_matches("r#").to_string())
        .collect();

    params
        .iter()
        .enumerate()
        .map(|(position, param)| {
            let ident = field_ident(param, position)?;
            if !is_renamed(param) {
                return Ok(ident);
            }

            let base = ident.to_string();
            let mut candidate = base.clone();
            let mut suffix = 1;
            while taken.contains(&candidate) {
                candidate = format!("{base}_{suffix}");
                suffix += 1;
            }
            taken.insert(candidate.clone());
            Ok(format_ident!("{}", candidate))
        })
        .collect()
}

fn type_tokens(param: &Param) -> Result<TokenStream> {
    param.type_text.parse::<TokenStream>().map_err(|e| {
        MktestError::render(format!(
            "type of `{}` does not lex: `{}`: {e}",
            param.name, param.type_text
        ))
    })
}

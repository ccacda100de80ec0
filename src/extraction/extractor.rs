//! Signature extraction for test skeleton generation.
//!
//! `SignatureExtractor` walks the top-level items of a parsed file in source
//! order and keeps every exported free function and every exported method of
//! an inherent `impl` block. Each one becomes a [`TestCase`] whose parameters
//! are flattened as receiver, arguments, return value.
//!
//! # Usage
//!
//! ```rust
//! use mktest::extraction::SignatureExtractor;
//!
//! let file = syn::parse_file("pub fn add(a: i32, b: i32) -> i32 { a + b }").unwrap();
//! let tests = SignatureExtractor::extract(&file, "math");
//!
//! assert_eq!(tests.tests.len(), 1);
//! assert_eq!(tests.tests[0].params.len(), 3);
//! ```

use crate::core::{Param, TestCase, TestFile, UNNAMED};
use syn::visit_mut::{self, VisitMut};

/// Collects exported function signatures from a parsed file.
pub struct SignatureExtractor;

impl SignatureExtractor {
    /// Extract one test case per exported function or inherent method.
    ///
    /// Read-only over `file`; calling it twice yields equal results.
    pub fn extract(file: &syn::File, module: &str) -> TestFile {
        let mut data = TestFile::new(module);

        for item in &file.items {
            match item {
                syn::Item::Fn(item_fn) if is_exported(&item_fn.vis) => {
                    data.tests.push(Self::extract_function(&item_fn.sig, None));
                }
                syn::Item::Impl(item_impl) if item_impl.trait_.is_none() => {
                    data.tests.extend(Self::extract_impl(item_impl));
                }
                _ => {}
            }
        }

        data
    }

    fn extract_impl(item_impl: &syn::ItemImpl) -> Vec<TestCase> {
        item_impl
            .items
            .iter()
            .filter_map(|item| match item {
                syn::ImplItem::Fn(impl_fn) if is_exported(&impl_fn.vis) => Some(
                    Self::extract_function(&impl_fn.sig, Some(&item_impl.self_ty)),
                ),
                _ => None,
            })
            .collect()
    }

    fn extract_function(sig: &syn::Signature, self_ty: Option<&syn::Type>) -> TestCase {
        let mut test = TestCase::new(sig.ident.to_string());

        for input in &sig.inputs {
            match input {
                syn::FnArg::Receiver(receiver) => {
                    test.params.push(Self::extract_receiver(receiver, self_ty));
                }
                syn::FnArg::Typed(pat_type) => {
                    test.params.push(Param::new(
                        binding_name(&pat_type.pat),
                        signature_type_text(&pat_type.ty, self_ty),
                    ));
                }
            }
        }

        // A function without `->` declares no outputs at all
        match &sig.output {
            syn::ReturnType::Default => {}
            syn::ReturnType::Type(_, ty) => {
                test.params.push(Param::unnamed(signature_type_text(ty, self_ty)));
            }
        }

        test
    }

    fn extract_receiver(receiver: &syn::Receiver, self_ty: Option<&syn::Type>) -> Param {
        Param::new("self", signature_type_text(&receiver.ty, self_ty))
    }
}

/// `type_text` with bare `Self` resolved to the enclosing impl's type, since
/// `Self` means something else inside a generated test.
fn signature_type_text(ty: &syn::Type, self_ty: Option<&syn::Type>) -> String {
    match self_ty {
        Some(self_ty) => {
            let mut ty = ty.clone();
            SelfReplacer { self_ty }.visit_type_mut(&mut ty);
            type_text(&ty)
        }
        None => type_text(ty),
    }
}

/// Whether a declaration with this visibility is reachable from outside its
/// module.
///
/// `pub` and the restricted forms `pub(crate)`, `pub(super)` and `pub(in ..)`
/// count as exported. No keyword and `pub(self)` do not.
pub fn is_exported(vis: &syn::Visibility) -> bool {
    match vis {
        syn::Visibility::Public(_) => true,
        syn::Visibility::Restricted(restricted) => !restricted.path.is_ident("self"),
        syn::Visibility::Inherited => false,
    }
}

/// Name bound by a parameter pattern, or [`UNNAMED`] for wildcards and
/// destructuring patterns.
pub fn binding_name(pat: &syn::Pat) -> String {
    match pat {
        syn::Pat::Ident(pat_ident) if pat_ident.subpat.is_none() => pat_ident.ident.to_string(),
        syn::Pat::Reference(pat_ref) => binding_name(&pat_ref.pat),
        _ => UNNAMED.to_string(),
    }
}

/// Render a type the way the pretty-printer lays it out, on a single line.
pub fn type_text(ty: &syn::Type) -> String {
    let file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: vec![syn::parse_quote!(type T = #ty;)],
    };
    let printed = prettyplease::unparse(&file);

    match printed
        .trim()
        .strip_prefix("type T = ")
        .and_then(|rest| rest.strip_suffix(';'))
    {
        Some(text) => normalize_whitespace(text),
        None => normalize_whitespace(&quote::ToTokens::to_token_stream(ty).to_string()),
    }
}

/// Join a possibly wrapped type back onto one line.
///
/// Wrapping adds a trailing comma before each closing delimiter. It is
/// dropped everywhere except on a one-element tuple, where `(A,)` and `(A)`
/// are different types.
fn normalize_whitespace(text: &str) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(joined.len());
    // One frame per open delimiter: (is a tuple, top-level commas seen)
    let mut frames: Vec<(bool, usize)> = Vec::new();

    for c in joined.chars() {
        match c {
            ' ' if out.ends_with(['(', '[', '<']) => continue,
            '>' if out.ends_with('-') => {}
            '(' => {
                let call_like = out
                    .chars()
                    .last()
                    .is_some_and(|prev| prev.is_alphanumeric() || prev == '_');
                frames.push((!call_like, 0));
            }
            '[' | '<' => frames.push((false, 0)),
            ',' => {
                if let Some((_, commas)) = frames.last_mut() {
                    *commas += 1;
                }
            }
            ')' | ']' | '>' => {
                let trimmed = out.trim_end_matches(' ').len();
                out.truncate(trimmed);
                let (is_tuple, commas) = frames.pop().unwrap_or((false, 0));
                let one_tuple = c == ')' && is_tuple && commas == 1;
                if out.ends_with(',') && !one_tuple {
                    out.pop();
                }
            }
            _ => {}
        }
        out.push(c);
    }

    out
}

/// Substitutes the impl's self type for bare `Self`.
struct SelfReplacer<'a> {
    self_ty: &'a syn::Type,
}

impl VisitMut for SelfReplacer<'_> {
    fn visit_type_mut(&mut self, ty: &mut syn::Type) {
        if let syn::Type::Path(type_path) = ty {
            if type_path.qself.is_none() && type_path.path.is_ident("Self") {
                *ty = self.self_ty.clone();
                return;
            }
        }
        visit_mut::visit_type_mut(self, ty);
    }
}

//! End-to-end generation tests: source file in, formatted skeleton out.

mod common;

use common::{
    case_fields, create_source_file, find_test_fn, parse_generated, test_fn_names, tokens,
};
use indoc::indoc;
use mktest::{generate_skeleton, handle_generate, GenerateConfig, GenerateOutcome, MktestError};
use pretty_assertions::assert_eq;
use std::fs;

const SERVER_SOURCE: &str = indoc! {r#"
    use std::collections::HashMap;
    use std::io;

    pub struct Server {
        routes: HashMap<String, String>,
    }

    pub fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn private_helper(x: u8) -> u8 {
        x
    }

    impl Server {
        pub fn new() -> Self {
            Server { routes: HashMap::new() }
        }

        pub fn start(&self) -> io::Result<()> {
            Ok(())
        }

        pub fn route(&mut self, path: &str, handler: String) {
            self.routes.insert(path.to_string(), handler);
        }

        fn reset(&mut self) {}
    }

    impl Default for Server {
        fn default() -> Self {
            Self::new()
        }
    }

    pub fn shutdown() {}
"#};

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(name, ty)| (name.to_string(), tokens(ty)))
        .collect()
}

#[test]
fn test_skeleton_lists_exported_functions_in_source_order() {
    let (_dir, path) = create_source_file(SERVER_SOURCE, "server.rs");
    let generated = parse_generated(&generate_skeleton(&path).unwrap());

    assert_eq!(
        test_fn_names(&generated),
        vec!["test_add", "test_new", "test_start", "test_route", "test_shutdown"]
    );
}

#[test]
fn test_skeleton_case_fields_follow_signature() {
    let (_dir, path) = create_source_file(SERVER_SOURCE, "server.rs");
    let generated = parse_generated(&generate_skeleton(&path).unwrap());

    assert_eq!(
        case_fields(find_test_fn(&generated, "test_add")),
        Some(pairs(&[("a", "i32"), ("b", "i32"), ("unnamed_2", "i32")]))
    );
    assert_eq!(
        case_fields(find_test_fn(&generated, "test_start")),
        Some(pairs(&[
            ("receiver", "&Server"),
            ("unnamed_1", "io::Result<()>")
        ]))
    );
    assert_eq!(
        case_fields(find_test_fn(&generated, "test_route")),
        Some(pairs(&[
            ("receiver", "&mut Server"),
            ("path", "&str"),
            ("handler", "String")
        ]))
    );
    assert_eq!(
        case_fields(find_test_fn(&generated, "test_new")),
        Some(pairs(&[("unnamed_0", "Server")]))
    );
}

#[test]
fn test_function_without_params_has_empty_body() {
    let (_dir, path) = create_source_file(SERVER_SOURCE, "server.rs");
    let generated = parse_generated(&generate_skeleton(&path).unwrap());

    let shutdown = find_test_fn(&generated, "test_shutdown");
    assert!(shutdown.block.stmts.is_empty());
    assert_eq!(case_fields(shutdown), None);
}

#[test]
fn test_every_stub_is_a_test_with_a_case_loop() {
    let (_dir, path) = create_source_file(SERVER_SOURCE, "server.rs");
    let generated = parse_generated(&generate_skeleton(&path).unwrap());

    for item in &generated.items {
        if let syn::Item::Fn(item_fn) = item {
            assert!(item_fn.attrs.iter().any(|a| a.path().is_ident("test")));
            if case_fields(item_fn).is_some() {
                assert!(matches!(
                    item_fn.block.stmts.last(),
                    Some(syn::Stmt::Expr(syn::Expr::ForLoop(_), _))
                ));
            }
        }
    }
}

#[test]
fn test_header_and_single_import() {
    let (_dir, path) = create_source_file(SERVER_SOURCE, "server.rs");
    let source = generate_skeleton(&path).unwrap();
    let generated = parse_generated(&source);

    assert!(source.contains("Tests for `server`."));
    let imports: Vec<_> = generated
        .items
        .iter()
        .filter(|item| matches!(item, syn::Item::Use(_)))
        .collect();
    assert_eq!(imports.len(), 1);
    assert!(matches!(generated.items[0], syn::Item::Use(_)));
}

#[test]
fn test_no_exported_functions_yields_header_only() {
    let source = indoc! {r#"
        struct Hidden;

        fn helper() {}

        impl Hidden {
            fn private(&self) {}
        }
    "#};
    let (_dir, path) = create_source_file(source, "hidden.rs");
    let generated = parse_generated(&generate_skeleton(&path).unwrap());

    assert!(test_fn_names(&generated).is_empty());
    assert_eq!(generated.items.len(), 1);
}

#[test]
fn test_running_twice_fails_and_keeps_first_output() {
    let (dir, path) = create_source_file(SERVER_SOURCE, "server.rs");
    let target = dir.path().join("server_test.rs");

    let first = handle_generate(GenerateConfig::new(path.clone(), false).validate().unwrap());
    assert_eq!(first.unwrap(), GenerateOutcome::Written(target.clone()));
    let original = fs::read_to_string(&target).unwrap();

    let second = handle_generate(GenerateConfig::new(path, false).validate().unwrap());
    assert!(matches!(second, Err(MktestError::AlreadyExists { .. })));
    assert_eq!(fs::read_to_string(&target).unwrap(), original);
}

#[test]
fn test_generated_output_is_stable() {
    let (_dir, path) = create_source_file(SERVER_SOURCE, "server.rs");
    assert_eq!(
        generate_skeleton(&path).unwrap(),
        generate_skeleton(&path).unwrap()
    );
}

#[test]
fn test_module_file_uses_directory_name() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let dir = temp_dir.path().join("network");
    fs::create_dir(&dir).unwrap();
    let path = dir.join("mod.rs");
    fs::write(&path, "pub fn connect(addr: &str) -> bool { true }\n").unwrap();

    let source = generate_skeleton(&path).unwrap();
    assert!(source.contains("Tests for `network`."));
}

#[test]
fn test_case_fields_stay_distinct_when_names_clash() {
    let source = indoc! {r#"
        pub struct S;

        impl S {
            pub fn f(&self, receiver: u8, unnamed_2: u8) -> u8 {
                receiver + unnamed_2
            }
        }
    "#};
    let (_dir, path) = create_source_file(source, "clash.rs");
    let generated = parse_generated(&generate_skeleton(&path).unwrap());

    let names: Vec<String> = case_fields(find_test_fn(&generated, "test_f"))
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["receiver_1", "receiver", "unnamed_2", "unnamed_3"]);
}

pub mod ast;

/// Name recorded for a parameter or return value that has no binding identifier.
pub const UNNAMED: &str = "_";

/// One field of a generated test case: a binding name and the declared type
/// as written in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_text: String,
}

impl Param {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }

    pub fn unnamed(type_text: impl Into<String>) -> Self {
        Self::new(UNNAMED, type_text)
    }

    pub fn is_unnamed(&self) -> bool {
        self.name == UNNAMED
    }
}

/// A public function or method to generate a stub for.
///
/// `params` is flattened in a fixed order: receiver (methods only), then
/// arguments, then the return value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub params: Vec<Param>,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

/// Everything collected from one source file, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestFile {
    pub module: String,
    pub tests: Vec<TestCase>,
}

impl TestFile {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            tests: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

//! Symbol model for a documented package
//!
//! The model is produced by an external source inspector and consumed
//! read-only by the render pipeline. Every collection keeps the order the
//! inspector declared; the pipeline never re-sorts functions, types or
//! methods.

use serde::Deserialize;

/// A package's exported API surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Package {
    /// Package name (e.g. `stack`)
    pub name: String,
    /// Full import path (e.g. `github.com/acme/stack`)
    #[serde(default)]
    pub import_path: String,
    /// Package-level doc text
    #[serde(default)]
    pub doc: String,
    /// Package-level functions
    #[serde(default)]
    pub funcs: Vec<Func>,
    /// Exported types
    #[serde(default)]
    pub types: Vec<Type>,
    /// Package-level examples
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Package {
    /// Create an empty package
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_path: import_path.into(),
            ..Self::default()
        }
    }

    /// Set the package doc text
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Append a package-level function
    pub fn with_func(mut self, func: Func) -> Self {
        self.funcs.push(func);
        self
    }

    /// Append a type
    pub fn with_type(mut self, ty: Type) -> Self {
        self.types.push(ty);
        self
    }

    /// Append a package-level example
    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Iterate over every example in the package, in document order
    ///
    /// Package examples come first, then each function's, then each type's
    /// own examples followed by those of its constructors and methods.
    pub fn all_examples(&self) -> impl Iterator<Item = &Example> {
        let func_examples = self.funcs.iter().flat_map(|f| f.examples.iter());
        let type_examples = self.types.iter().flat_map(|t| {
            t.examples.iter().chain(
                t.constructors
                    .iter()
                    .chain(t.methods.iter())
                    .flat_map(|f| f.examples.iter()),
            )
        });
        self.examples.iter().chain(func_examples).chain(type_examples)
    }
}

/// A function or method
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Func {
    pub name: String,
    #[serde(default)]
    pub doc: String,
    /// Declaration as written in source, shown verbatim
    #[serde(default)]
    pub decl: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Func {
    /// Create a function with its declaration
    pub fn new(name: impl Into<String>, decl: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decl: decl.into(),
            ..Self::default()
        }
    }

    /// Set the doc text
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Attach an example
    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// First line of the declaration, used as the index entry label
    pub fn signature(&self) -> &str {
        let first = self.decl.lines().next().unwrap_or("").trim();
        first.strip_suffix('{').map_or(first, str::trim_end)
    }
}

/// An exported type with its constructors and methods
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Type {
    pub name: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub decl: String,
    /// Functions returning this type
    #[serde(default)]
    pub constructors: Vec<Func>,
    #[serde(default)]
    pub methods: Vec<Func>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Type {
    /// Create a type with its declaration
    pub fn new(name: impl Into<String>, decl: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decl: decl.into(),
            ..Self::default()
        }
    }

    /// Set the doc text
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Append a constructor
    pub fn with_constructor(mut self, func: Func) -> Self {
        self.constructors.push(func);
        self
    }

    /// Append a method
    pub fn with_method(mut self, func: Func) -> Self {
        self.methods.push(func);
        self
    }

    /// Attach an example
    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }
}

/// A runnable example
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Example {
    /// Owning symbol name, empty for package-level examples
    #[serde(default)]
    pub owner: String,
    /// Disambiguator between examples of the same owner, empty for the primary one
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub code: String,
    /// Expected output, empty when the example prints nothing
    #[serde(default)]
    pub output: String,
}

impl Example {
    /// Create an example for `owner` with the given source
    pub fn new(owner: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    /// Set the suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the expected output
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_first_line() {
        let f = Func::new("Walk", "func Walk(root string, fn WalkFunc) error {\n\treturn nil\n}");
        assert_eq!(f.signature(), "func Walk(root string, fn WalkFunc) error");

        let g = Func::new("Len", "func (s *Stack) Len() int");
        assert_eq!(g.signature(), "func (s *Stack) Len() int");
    }

    #[test]
    fn test_all_examples_order() {
        let pkg = Package::new("stack", "example.com/stack")
            .with_example(Example::new("", "a"))
            .with_func(Func::new("New", "func New()").with_example(Example::new("New", "b")))
            .with_type(
                Type::new("Stack", "type Stack struct{}")
                    .with_method(
                        Func::new("Push", "func (s *Stack) Push()")
                            .with_example(Example::new("Stack_Push", "d")),
                    )
                    .with_example(Example::new("Stack", "c")),
            );

        let codes: Vec<_> = pkg.all_examples().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b", "c", "d"]);
    }
}

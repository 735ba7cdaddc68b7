//! Source file specs and the root `build_*` entry points.

use std::fmt;

use indexmap::IndexSet;
use quill_dsl::{Container, Scope, build};

use crate::{
    function::{FunctionFactory, FunctionScope, FunctionSpec},
    structure::{TypeFactory, TypeScope, TypeSpec},
    writer::SourceWriter,
};

/// A whole source file: package, imports, and top-level declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    /// File name (without extension).
    pub name: String,
    /// Package the file belongs to, if any.
    pub package: Option<String>,
    /// Imports, deduplicated in first-add order.
    pub imports: IndexSet<String>,
    /// Top-level types, in add order.
    pub types: Vec<TypeSpec>,
    /// Top-level functions, in add order.
    pub functions: Vec<FunctionSpec>,
}

impl FileSpec {
    fn write(&self, out: &mut SourceWriter) {
        let mut wrote_section = false;
        if let Some(package) = &self.package {
            out.line(&format!("package {package}"));
            wrote_section = true;
        }
        if !self.imports.is_empty() {
            if wrote_section {
                out.blank();
            }
            for import in &self.imports {
                out.line(&format!("import {import}"));
            }
            wrote_section = true;
        }
        for spec in &self.types {
            if wrote_section {
                out.blank();
            }
            spec.write(out);
            wrote_section = true;
        }
        for spec in &self.functions {
            if wrote_section {
                out.blank();
            }
            spec.write(out);
            wrote_section = true;
        }
    }
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = SourceWriter::new();
        self.write(&mut out);
        f.write_str(&out.finish())
    }
}

/// Builder scope for one [`FileSpec`].
#[derive(Debug)]
pub struct FileScope {
    name: String,
    package: Option<String>,
    imports: IndexSet<String>,
    /// Top-level type children.
    pub types: Container<TypeFactory>,
    /// Top-level function children.
    pub functions: Container<FunctionFactory>,
}

impl FileScope {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            package: None,
            imports: IndexSet::new(),
            types: Container::new(TypeFactory),
            functions: Container::new(FunctionFactory),
        }
    }

    /// Set the package.
    pub fn package(&mut self, package: impl Into<String>) -> &mut Self {
        self.package = Some(package.into());
        self
    }

    /// Add an import; repeated paths are kept once, at their first
    /// position.
    pub fn import(&mut self, path: impl Into<String>) -> &mut Self {
        self.imports.insert(path.into());
        self
    }

    /// Add one top-level type called `name`.
    pub fn type_(&mut self, name: &str, configure: impl FnOnce(&mut TypeScope)) -> &TypeSpec {
        self.types.add(name, configure)
    }

    /// Add one top-level function called `name`.
    pub fn function(
        &mut self,
        name: &str,
        configure: impl FnOnce(&mut FunctionScope),
    ) -> &FunctionSpec {
        self.functions.add(name, configure)
    }

    /// Configure the types container as a block.
    pub fn types(&mut self, configure: impl FnOnce(&mut Container<TypeFactory>)) -> &mut Self {
        configure(&mut self.types);
        self
    }

    /// Configure the functions container as a block.
    pub fn functions(
        &mut self,
        configure: impl FnOnce(&mut Container<FunctionFactory>),
    ) -> &mut Self {
        configure(&mut self.functions);
        self
    }
}

impl Scope for FileScope {
    type Entity = FileSpec;

    fn finish(self) -> FileSpec {
        FileSpec {
            name: self.name,
            package: self.package,
            imports: self.imports,
            types: self.types.into_vec(),
            functions: self.functions.into_vec(),
        }
    }
}

/// Build a source file called `name`.
///
/// Runs `configure` exactly once, synchronously, then finalizes the
/// scope; the returned [`FileSpec`] is immutable.
pub fn build_file(name: &str, configure: impl FnOnce(&mut FileScope)) -> FileSpec {
    build(FileScope::new(name), configure)
}

/// Build a standalone type declaration called `name`.
pub fn build_type(name: &str, configure: impl FnOnce(&mut TypeScope)) -> TypeSpec {
    build(TypeScope::new(name), configure)
}

/// Build a standalone function declaration called `name`.
pub fn build_function(name: &str, configure: impl FnOnce(&mut FunctionScope)) -> FunctionSpec {
    build(FunctionScope::new(name), configure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_dedup_keep_first_position() {
        let file = build_file("net", |file| {
            file.import("core.io");
            file.import("core.net");
            file.import("core.io");
        });

        let imports: Vec<&str> = file.imports.iter().map(String::as_str).collect();
        assert_eq!(imports, ["core.io", "core.net"]);
    }

    #[test]
    fn test_package_only_file() {
        let file = build_file("empty", |file| {
            file.package("demo");
        });

        assert_eq!(file.to_string(), "package demo\n");
    }

    #[test]
    fn test_build_type_root() {
        let spec = build_type("Widget", |t| {
            t.property("id", |p| {
                p.ty("Int");
            });
        });

        assert_eq!(spec.name, "Widget");
        assert_eq!(spec.properties.len(), 1);
    }

    #[test]
    fn test_build_function_root() {
        let spec = build_function("main", |f| {
            f.line("run()");
        });

        assert_eq!(spec.to_string(), "fun main() {\n    run()\n}\n");
    }
}

//! Source-spec kinds for the Quill builder DSL.
//!
//! Each kind pairs an immutable spec struct with a builder scope and an
//! [`EntityFactory`](quill_dsl::EntityFactory), all driven through the
//! generic machinery in `quill-dsl`. The `build_*` entry points at the
//! crate root allocate a scope, run the caller's configuration closure
//! once, and finalize.
//!
//! ```
//! use quill_specs::build_file;
//!
//! let file = build_file("service", |file| {
//!     file.package("demo");
//!     file.function("main", |f| {
//!         f.line("Service().start()");
//!     });
//! });
//!
//! assert_eq!(file.functions[0].name, "main");
//! ```

mod annotation;
mod file;
mod function;
mod parameter;
mod property;
mod structure;
mod writer;

pub use annotation::{AnnotationFactory, AnnotationScope, AnnotationSpec};
pub use file::{FileScope, FileSpec, build_file, build_function, build_type};
pub use function::{FunctionFactory, FunctionScope, FunctionSpec};
pub use parameter::{ParamFactory, ParamScope, ParamSpec};
pub use property::{PropertyFactory, PropertyScope, PropertySpec};
pub use structure::{TypeFactory, TypeKind, TypeScope, TypeSpec};
pub use writer::SourceWriter;

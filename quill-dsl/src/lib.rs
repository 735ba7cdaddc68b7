//! Generic scoped-builder framework for source-spec construction.
//!
//! This crate is the kind-agnostic core under the Quill spec builders:
//! it arranges *when* and *with what name* child entities are built,
//! while the concrete entity kinds (functions, types, files, ...) live
//! in `quill-specs`.
//!
//! # Module Organization
//!
//! - [`Store`] / [`VecStore`] / [`AppendOnly`] - ordered backing stores
//! - [`EntityFactory`] / [`FnFactory`] - injected construction strategies
//! - [`Container`] - ordered child accumulation with one append contract
//! - [`Deferred`] / [`named!`] - first-use construction with
//!   binding-derived naming
//! - [`Scope`] / [`build`] - per-kind builder scopes and the root entry
//!   helper
//!
//! # Example
//!
//! ```
//! use quill_dsl::{Container, FnFactory, Scope, build};
//!
//! struct Step {
//!     name: String,
//! }
//!
//! struct StepScope {
//!     name: String,
//! }
//!
//! impl Scope for StepScope {
//!     type Entity = Step;
//!     fn finish(self) -> Step {
//!         Step { name: self.name }
//!     }
//! }
//!
//! struct PlanScope {
//!     steps: Container<FnFactory<fn(&str) -> StepScope>>,
//! }
//!
//! impl Scope for PlanScope {
//!     type Entity = Vec<Step>;
//!     fn finish(self) -> Vec<Step> {
//!         self.steps.into_vec()
//!     }
//! }
//!
//! fn step_scope(name: &str) -> StepScope {
//!     StepScope { name: name.to_owned() }
//! }
//!
//! let plan = build(
//!     PlanScope { steps: Container::new(FnFactory::new(step_scope as fn(&str) -> StepScope)) },
//!     |plan| {
//!         plan.steps.add("fetch", |_| {});
//!         plan.steps.add("compile", |_| {});
//!     },
//! );
//!
//! let names: Vec<&str> = plan.iter().map(|s| s.name.as_str()).collect();
//! assert_eq!(names, ["fetch", "compile"]);
//! ```

mod container;
mod deferred;
mod factory;
mod scope;
mod store;

pub use container::{Container, ContainerId};
pub use deferred::Deferred;
pub use factory::{EntityFactory, EntityOf, FnFactory};
pub use scope::{Scope, build};
pub use store::{AppendOnly, Store, StoreError, VecStore};

//! Shared code emission machinery for the buildconf source generator.
//!
//! This crate provides the language-agnostic pieces used by language-specific
//! backends (e.g., `buildconf-codegen-java`):
//!
//! - [`builder`] - Code emission building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`TypeResolver`] - Mapping from type-name strings to resolved types
//! - [`TypeMapper`] - Trait for language-specific type rendering
//! - [`ConfigGenerator`] - Trait implemented by each language backend
//! - [`Error`] - Error taxonomy shared by all backends

pub mod builder;
mod error;
mod language;
mod resolver;
mod types;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use error::{Error, Result};
pub use language::{ConfigGenerator, SourceFile};
pub use resolver::{BuiltinRegistry, TypeRegistry, TypeResolver};
pub use types::{Primitive, ResolvedType, TypeMapper};

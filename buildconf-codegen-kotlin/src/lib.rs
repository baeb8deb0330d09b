//! Kotlin source generator for buildconf.
//!
//! This crate turns one [`GenerationRequest`](buildconf_core::GenerationRequest)
//! into one Kotlin constants object: an `object` declaration with one
//! property per requested constant, written under the request's output
//! directory following the package hierarchy.
//!
//! Properties of primitive or string type become `const val`; everything
//! else becomes a plain `val` initialized at class-load time.

mod generator;
mod kotlin_file;
mod property;
mod type_mapper;

use buildconf_core::Provenance;

pub use buildconf_codegen::{
    BuiltinRegistry, ConfigGenerator, Error, ResolvedType, Result, SourceFile, TypeRegistry,
};
pub use generator::KotlinGenerator;
pub use kotlin_file::KotlinConfigFile;
pub use property::KotlinProperty;
pub use type_mapper::KotlinTypeMapper;

/// Default provenance marker, derived from this crate's package metadata.
fn provenance() -> Provenance {
    let version = env!("CARGO_PKG_VERSION").parse().unwrap_or_default();
    Provenance::new(env!("CARGO_PKG_NAME"), version)
}

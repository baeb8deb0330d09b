//! Java source generator for buildconf.
//!
//! This crate turns one [`GenerationRequest`](buildconf_core::GenerationRequest)
//! into one Java constants class: a `public final` class with a private
//! constructor and one `public static final` field per requested constant,
//! written under the request's output directory following the package
//! hierarchy.
//!
//! # Usage
//!
//! ```ignore
//! use buildconf_codegen_java::{ConfigGenerator, JavaGenerator};
//! use buildconf_core::GenerationRequest;
//!
//! let request = GenerationRequest::new("com.acme", "BuildConfig", "build/generated")
//!     .field("VERSION", "String", "\"1.2.3\"")
//!     .field("DEBUG", "boolean", "false");
//!
//! let generator = JavaGenerator::new();
//! let path = generator.generate(&request)?;
//! ```

mod field;
mod generator;
mod java_file;
mod type_mapper;

use buildconf_core::Provenance;

pub use buildconf_codegen::{
    BuiltinRegistry, ConfigGenerator, Error, ResolvedType, Result, SourceFile, TypeRegistry,
};
pub use field::JavaField;
pub use generator::JavaGenerator;
pub use java_file::JavaConfigFile;
pub use type_mapper::JavaTypeMapper;

/// Default provenance marker, derived from this crate's package metadata.
fn provenance() -> Provenance {
    let version = env!("CARGO_PKG_VERSION").parse().unwrap_or_default();
    Provenance::new(env!("CARGO_PKG_NAME"), version)
}

//! Core types for the buildconf source generator.
//!
//! This crate provides the request model, provenance metadata, and the
//! file-writing primitives shared by the language backends.

mod file;
mod provenance;
mod request;

// File operations
pub use file::{GeneratedFile, write_file};
// Provenance metadata
pub use provenance::{Provenance, Version};
// Request model
pub use request::{ConfigField, GenerationRequest};

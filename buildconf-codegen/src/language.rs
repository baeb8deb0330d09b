//! Language-neutral generator interface.

use std::path::PathBuf;

use buildconf_core::GenerationRequest;

use crate::error::Result;

/// A rendered source file that has not been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the request's output directory.
    pub path: PathBuf,
    /// Complete file content.
    pub content: String,
}

/// Trait implemented by each language backend.
///
/// A generator is a pure function of the request plus its read-only type
/// registry, so one instance can serve any number of requests and rendering
/// the same request twice yields byte-identical output.
pub trait ConfigGenerator {
    /// Get the language name (e.g., "java").
    fn language(&self) -> &'static str;

    /// Get the file extension for generated files (e.g., "java").
    fn file_extension(&self) -> &'static str;

    /// Render the request's file without touching the filesystem.
    fn preview(&self, request: &GenerationRequest) -> Result<SourceFile>;

    /// Render the request's file and write it under the request's output
    /// directory, returning the written path.
    ///
    /// Every field is resolved before anything is written, so a failing
    /// request never produces a file and never damages an existing one.
    fn generate(&self, request: &GenerationRequest) -> Result<PathBuf>;
}

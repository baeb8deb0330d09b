//! Kotlin generator implementation.

use std::path::{Path, PathBuf};

use buildconf_codegen::{
    BuiltinRegistry, ConfigGenerator, Error, Result, SourceFile, TypeRegistry, TypeResolver,
};
use buildconf_core::{GeneratedFile, GenerationRequest, Provenance};

use crate::{kotlin_file::KotlinConfigFile, property::KotlinProperty};

/// Kotlin code generator producing one constants object per request.
pub struct KotlinGenerator<R = BuiltinRegistry> {
    resolver: TypeResolver<R>,
    provenance: Provenance,
}

impl KotlinGenerator {
    /// Generator backed by the built-in type registry.
    pub fn new() -> Self {
        Self {
            resolver: TypeResolver::new(),
            provenance: crate::provenance(),
        }
    }
}

impl Default for KotlinGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TypeRegistry> KotlinGenerator<R> {
    /// Generator backed by a caller-supplied type registry.
    pub fn with_registry(registry: R) -> Self {
        Self {
            resolver: TypeResolver::with_registry(registry),
            provenance: crate::provenance(),
        }
    }

    /// Override the provenance marker stamped into generated files.
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Resolve every field and assemble the file descriptor.
    ///
    /// All fields are resolved before anything is rendered, so one bad field
    /// aborts the whole request.
    fn build_file(&self, request: &GenerationRequest) -> Result<KotlinConfigFile> {
        tracing::debug!(
            class_name = %request.class_name,
            fields = request.fields.len(),
            "generating Kotlin constants object"
        );

        let mut properties = Vec::with_capacity(request.fields.len());
        for field in &request.fields {
            let ty = self.resolver.resolve(&field.ty)?;
            properties.push(KotlinProperty::new(&field.name, ty, &field.value));
        }

        Ok(KotlinConfigFile::new(
            &request.package_name,
            &request.class_name,
            self.provenance.clone(),
        )
        .properties(properties))
    }
}

impl<R: TypeRegistry> ConfigGenerator for KotlinGenerator<R> {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn preview(&self, request: &GenerationRequest) -> Result<SourceFile> {
        let file = self.build_file(request)?;
        Ok(SourceFile {
            path: file.path(Path::new("")),
            content: file.render(),
        })
    }

    fn generate(&self, request: &GenerationRequest) -> Result<PathBuf> {
        let file = self.build_file(request)?;
        file.write(&request.output_dir)
            .map_err(|source| Error::io(file.path(&request.output_dir), source))
    }
}

//! Java generator implementation.

use std::path::{Path, PathBuf};

use buildconf_codegen::{
    BuiltinRegistry, ConfigGenerator, Error, Result, SourceFile, TypeRegistry, TypeResolver,
};
use buildconf_core::{GeneratedFile, GenerationRequest, Provenance};

use crate::{field::JavaField, java_file::JavaConfigFile};

/// Java code generator producing one constants class per request.
pub struct JavaGenerator<R = BuiltinRegistry> {
    resolver: TypeResolver<R>,
    provenance: Provenance,
}

impl JavaGenerator {
    /// Generator backed by the built-in type registry.
    pub fn new() -> Self {
        Self {
            resolver: TypeResolver::new(),
            provenance: crate::provenance(),
        }
    }
}

impl Default for JavaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TypeRegistry> JavaGenerator<R> {
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
    fn build_file(&self, request: &GenerationRequest) -> Result<JavaConfigFile> {
        tracing::debug!(
            class_name = %request.class_name,
            fields = request.fields.len(),
            "generating Java constants class"
        );

        let mut fields = Vec::with_capacity(request.fields.len());
        for field in &request.fields {
            let ty = self.resolver.resolve(&field.ty)?;
            fields.push(JavaField::new(&field.name, ty, &field.value));
        }

        Ok(JavaConfigFile::new(
            &request.package_name,
            &request.class_name,
            self.provenance.clone(),
        )
        .fields(fields))
    }
}

impl<R: TypeRegistry> ConfigGenerator for JavaGenerator<R> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_and_extension() {
        let generator = JavaGenerator::new();
        assert_eq!(generator.language(), "java");
        assert_eq!(generator.file_extension(), "java");
    }

    #[test]
    fn test_preview_path_is_relative() {
        let request = GenerationRequest::new("com.acme", "BuildConfig", "ignored")
            .field("DEBUG", "boolean", "false");

        let preview = JavaGenerator::new().preview(&request).unwrap();
        assert!(preview.path.is_relative());
        assert_eq!(
            preview.path,
            Path::new("com").join("acme").join("BuildConfig.java")
        );
    }

    #[test]
    fn test_preview_resolves_before_rendering() {
        let request = GenerationRequest::new("com.acme", "BuildConfig", "ignored")
            .field("DEBUG", "boolean", "false")
            .field("BROKEN", "123bad", "1");

        let err = JavaGenerator::new().preview(&request).unwrap_err();
        let Error::Resolution { type_name } = err else {
            panic!("expected Resolution error");
        };
        assert_eq!(type_name, "123bad");
    }
}

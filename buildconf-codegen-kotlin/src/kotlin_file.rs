//! Generated Kotlin constants-object file.

use std::path::{Path, PathBuf};

use buildconf_codegen::{CodeBuilder, CodeFragment, Renderable};
use buildconf_core::{GeneratedFile, Provenance};

use crate::property::KotlinProperty;

/// Descriptor of one generated Kotlin file: package, object name, provenance
/// marker, and the property declarations in emission order.
pub struct KotlinConfigFile {
    package_name: String,
    class_name: String,
    provenance: Provenance,
    properties: Vec<KotlinProperty>,
}

impl KotlinConfigFile {
    pub fn new(
        package_name: impl Into<String>,
        class_name: impl Into<String>,
        provenance: Provenance,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            provenance,
            properties: Vec::new(),
        }
    }

    /// Append one property declaration, preserving insertion order.
    pub fn property(mut self, property: KotlinProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Append property declarations from an iterator, preserving their order.
    pub fn properties(mut self, properties: impl IntoIterator<Item = KotlinProperty>) -> Self {
        self.properties.extend(properties);
        self
    }

    fn object_fragment(&self) -> CodeFragment {
        let mut body: Vec<CodeFragment> = Vec::new();
        for property in &self.properties {
            body.extend(property.to_fragments());
        }
        CodeFragment::block(format!("object {} {{", self.class_name), body, "}")
    }
}

impl GeneratedFile for KotlinConfigFile {
    fn path(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        for segment in self.package_name.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.kt", self.class_name));
        path
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder
            .push_line(&format!(
                "// Generated by {}. Do not edit.",
                self.provenance.marker()
            ))
            .push_blank();
        if !self.package_name.is_empty() {
            builder
                .push_line(&format!("package {}", self.package_name))
                .push_blank();
        }
        builder.apply_fragment(self.object_fragment());
        builder.build()
    }
}

//! Generated Java constants-class file.

use std::path::{Path, PathBuf};

use buildconf_codegen::{CodeBuilder, CodeFragment, Renderable};
use buildconf_core::{GeneratedFile, Provenance};

use crate::field::JavaField;

/// Descriptor of one generated Java file: package, class name, provenance
/// marker, and the constant declarations in emission order.
pub struct JavaConfigFile {
    package_name: String,
    class_name: String,
    provenance: Provenance,
    fields: Vec<JavaField>,
}

impl JavaConfigFile {
    pub fn new(
        package_name: impl Into<String>,
        class_name: impl Into<String>,
        provenance: Provenance,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            provenance,
            fields: Vec::new(),
        }
    }

    /// Append one constant declaration, preserving insertion order.
    pub fn field(mut self, field: JavaField) -> Self {
        self.fields.push(field);
        self
    }

    /// Append constant declarations from an iterator, preserving their order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = JavaField>) -> Self {
        self.fields.extend(fields);
        self
    }

    fn class_fragment(&self) -> CodeFragment {
        let mut body: Vec<CodeFragment> = Vec::new();
        for field in &self.fields {
            body.extend(field.to_fragments());
        }
        if !body.is_empty() {
            body.push(CodeFragment::Blank);
        }
        // The private constructor keeps the class non-instantiable.
        body.push(CodeFragment::block(
            format!("private {}() {{", self.class_name),
            Vec::new(),
            "}",
        ));
        CodeFragment::block(
            format!("public final class {} {{", self.class_name),
            body,
            "}",
        )
    }
}

impl GeneratedFile for JavaConfigFile {
    fn path(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        for segment in self.package_name.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.class_name));
        path
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        if !self.package_name.is_empty() {
            builder
                .push_line(&format!("package {};", self.package_name))
                .push_blank();
        }
        builder
            .push_line("import javax.annotation.Generated;")
            .push_blank()
            .push_line(&format!("@Generated(\"{}\")", self.provenance.marker()));
        builder.apply_fragment(self.class_fragment());
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use buildconf_codegen::{Primitive, ResolvedType};
    use buildconf_core::Version;

    use super::*;

    fn provenance() -> Provenance {
        Provenance::new("buildconf", Version::new(1, 0, 0))
    }

    #[test]
    fn test_render_full_class() {
        let file = JavaConfigFile::new("com.acme", "BuildConfig", provenance())
            .field(JavaField::new("VERSION", ResolvedType::String, "\"1.2.3\""))
            .field(JavaField::new(
                "DEBUG",
                ResolvedType::Primitive(Primitive::Boolean),
                "false",
            ));

        let expected = "\
package com.acme;

import javax.annotation.Generated;

@Generated(\"buildconf 1.0.0\")
public final class BuildConfig {
  public static final String VERSION = \"1.2.3\";
  public static final boolean DEBUG = false;

  private BuildConfig() {
  }
}
";
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_render_without_package() {
        let file = JavaConfigFile::new("", "BuildConfig", provenance());

        let expected = "\
import javax.annotation.Generated;

@Generated(\"buildconf 1.0.0\")
public final class BuildConfig {
  private BuildConfig() {
  }
}
";
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_declarations_follow_insertion_order() {
        let file = JavaConfigFile::new("com.acme", "BuildConfig", provenance())
            .field(JavaField::new(
                "B",
                ResolvedType::Primitive(Primitive::Int),
                "2",
            ))
            .field(JavaField::new(
                "A",
                ResolvedType::Primitive(Primitive::Int),
                "1",
            ));

        let rendered = file.render();
        let b = rendered.find("int B = 2;").unwrap();
        let a = rendered.find("int A = 1;").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_path_follows_package_hierarchy() {
        let file = JavaConfigFile::new("com.acme.app", "BuildConfig", provenance());
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out")
                .join("com")
                .join("acme")
                .join("app")
                .join("BuildConfig.java")
        );
    }

    #[test]
    fn test_path_with_default_package() {
        let file = JavaConfigFile::new("", "BuildConfig", provenance());
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out").join("BuildConfig.java")
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let file = JavaConfigFile::new("com.acme", "BuildConfig", provenance())
            .field(JavaField::new("VERSION", ResolvedType::String, "\"1.2.3\""));
        assert_eq!(file.render(), file.render());
    }
}

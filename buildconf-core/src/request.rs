//! Request model handed over by the build orchestrator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One constant to emit: a name, a type-name string, and a raw initializer.
///
/// The initializer is opaque trusted text. Backends emit it verbatim,
/// unmodified and unescaped, so callers can supply any source-level
/// expression: literals, method calls, references to other constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    /// Identifier of the generated constant, used verbatim.
    pub name: String,
    /// Type-name string, resolved by the backend's type resolver.
    #[serde(rename = "type")]
    pub ty: String,
    /// Raw source-level initializer expression.
    pub value: String,
}

impl ConfigField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }
}

/// One generation request: target package and class, output directory, and
/// the constants to emit.
///
/// Field order is significant and carried through to the generated file
/// unchanged. Name uniqueness is the orchestrator's contract; collection and
/// deduplication happen before a request reaches this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Dotted package name. Empty selects the default package.
    pub package_name: String,
    /// Simple name of the generated class.
    pub class_name: String,
    /// Directory the package hierarchy is created under.
    pub output_dir: PathBuf,
    /// Constants to emit, in declaration order.
    #[serde(default)]
    pub fields: Vec<ConfigField>,
}

impl GenerationRequest {
    pub fn new(
        package_name: impl Into<String>,
        class_name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            output_dir: output_dir.into(),
            fields: Vec::new(),
        }
    }

    /// Appends one field, preserving insertion order.
    pub fn field(
        mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.fields.push(ConfigField::new(name, ty, value));
        self
    }

    /// Appends fields from an iterator, preserving their order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = ConfigField>) -> Self {
        self.fields.extend(fields);
        self
    }
}

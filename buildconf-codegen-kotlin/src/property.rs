//! Kotlin property declaration builder.

use buildconf_codegen::{CodeBuilder, CodeFragment, Renderable, ResolvedType, TypeMapper};

use crate::type_mapper::KotlinTypeMapper;

/// Builder for one property of the generated constants object.
///
/// Types the platform can fold at compile time (primitives and the built-in
/// string) become `const val`; everything else becomes `val`. The
/// initializer expression is emitted verbatim, unmodified and unescaped.
#[derive(Debug, Clone)]
pub struct KotlinProperty {
    name: String,
    ty: ResolvedType,
    value: String,
}

impl KotlinProperty {
    pub fn new(name: impl Into<String>, ty: ResolvedType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            value: value.into(),
        }
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for KotlinProperty {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let keyword = if self.ty.is_constant() {
            "const val"
        } else {
            "val"
        };
        let ty = KotlinTypeMapper.render_type(&self.ty);
        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or_default();
        let head = format!("{} {}: {} = {}", keyword, self.name, ty, first);

        let rest: Vec<CodeFragment> = lines.map(CodeFragment::line).collect();
        if rest.is_empty() {
            vec![CodeFragment::Line(head)]
        } else {
            // Multiline initializer: continuation lines sit one level deeper.
            vec![CodeFragment::Line(head), CodeFragment::indent(rest)]
        }
    }
}

#[cfg(test)]
mod tests {
    use buildconf_codegen::Primitive;

    use super::*;

    #[test]
    fn test_string_property_is_const() {
        let property = KotlinProperty::new("VERSION", ResolvedType::String, "\"1.2.3\"");
        assert_eq!(property.build(), "const val VERSION: String = \"1.2.3\"\n");
    }

    #[test]
    fn test_primitive_property_is_const() {
        let property = KotlinProperty::new(
            "DEBUG",
            ResolvedType::Primitive(Primitive::Boolean),
            "false",
        );
        assert_eq!(property.build(), "const val DEBUG: Boolean = false\n");
    }

    #[test]
    fn test_reference_property_is_plain_val() {
        let property = KotlinProperty::new(
            "WIDGET",
            ResolvedType::named("com.acme.Widget"),
            "com.acme.Widget()",
        );
        assert_eq!(
            property.build(),
            "val WIDGET: com.acme.Widget = com.acme.Widget()\n"
        );
    }

    #[test]
    fn test_array_property_is_plain_val() {
        let property = KotlinProperty::new(
            "NUMBERS",
            ResolvedType::array(ResolvedType::Primitive(Primitive::Int)),
            "intArrayOf(1, 2, 3)",
        );
        assert_eq!(
            property.build(),
            "val NUMBERS: IntArray = intArrayOf(1, 2, 3)\n"
        );
    }

    #[test]
    fn test_multiline_value() {
        let property = KotlinProperty::new(
            "NAMES",
            ResolvedType::array(ResolvedType::String),
            "arrayOf(\n\"a\",\n\"b\"\n)",
        );
        assert_eq!(
            property.build(),
            "val NAMES: Array<String> = arrayOf(\n  \"a\",\n  \"b\"\n  )\n"
        );
    }
}

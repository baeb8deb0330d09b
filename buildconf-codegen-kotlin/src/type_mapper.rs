//! Kotlin type mapper implementation.

use buildconf_codegen::{Primitive, ResolvedType, TypeMapper};

/// Kotlin type mapper implementation.
///
/// Primitive arrays use the specialized array classes (`IntArray`,
/// `BooleanArray`, ...), everything else the generic `Array<T>`.
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn map_string(&self) -> &'static str {
        "String"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Boolean => "Boolean",
            Primitive::Byte => "Byte",
            Primitive::Short => "Short",
            Primitive::Int => "Int",
            Primitive::Long => "Long",
            Primitive::Char => "Char",
            Primitive::Float => "Float",
            Primitive::Double => "Double",
        }
    }

    fn map_array(&self, element: &ResolvedType) -> String {
        match element {
            ResolvedType::Primitive(p) => format!("{}Array", self.map_primitive(*p)),
            other => format!("Array<{}>", self.render_type(other)),
        }
    }
}

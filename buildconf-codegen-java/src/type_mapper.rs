//! Java type mapper implementation.

use buildconf_codegen::{Primitive, TypeMapper};

/// Java type mapper implementation.
///
/// Named references render fully qualified. Generated files never collect
/// imports for field types, so there is no simple-name collision handling
/// to get wrong.
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn map_string(&self) -> &'static str {
        "String"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        primitive.keyword()
    }
}

//! Language-agnostic model of resolved field types.
//!
//! A [`ResolvedType`] is produced by the resolver from one type-name string
//! and rendered into target-language syntax via the [`TypeMapper`] trait.

/// A resolved, emittable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// The built-in string type.
    String,
    /// A primitive type.
    Primitive(Primitive),
    /// A named class reference with optional generic arguments.
    ///
    /// The name is kept verbatim. Nothing checks that the class exists or is
    /// loadable; emitting a reference only requires its name.
    Named {
        name: String,
        args: Vec<ResolvedType>,
    },
    /// An array of an element type.
    Array(Box<ResolvedType>),
}

impl ResolvedType {
    /// Create a named reference without generic arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a named reference with generic arguments.
    pub fn generic(name: impl Into<String>, args: Vec<ResolvedType>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    /// Create an array of the given element type.
    pub fn array(element: ResolvedType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Whether a field of this type can be a compile-time constant.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::String | Self::Primitive(_))
    }
}

/// Primitive types of the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    /// The source-level keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Parse a primitive keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "char" => Some(Self::Char),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// Trait for mapping resolved types to language-specific syntax.
///
/// Implement this trait to support a new target language's type spellings.
pub trait TypeMapper {
    /// Map the built-in string type.
    fn map_string(&self) -> &'static str;

    /// Map a primitive type.
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Map a named reference (without its generic arguments).
    fn map_named(&self, name: &str) -> String {
        name.to_string()
    }

    /// Map a generic instantiation of an already-rendered base and arguments.
    fn map_generic(&self, base: &str, args: &[String]) -> String {
        format!("{}<{}>", base, args.join(", "))
    }

    /// Map an array of the given element type.
    fn map_array(&self, element: &ResolvedType) -> String {
        format!("{}[]", self.render_type(element))
    }

    /// Render a complete resolved type to a string.
    fn render_type(&self, ty: &ResolvedType) -> String {
        match ty {
            ResolvedType::String => self.map_string().to_string(),
            ResolvedType::Primitive(p) => self.map_primitive(*p).to_string(),
            ResolvedType::Named { name, args } => {
                let base = self.map_named(name);
                if args.is_empty() {
                    base
                } else {
                    let arg_strs: Vec<_> = args.iter().map(|a| self.render_type(a)).collect();
                    self.map_generic(&base, &arg_strs)
                }
            }
            ResolvedType::Array(element) => self.map_array(element),
        }
    }
}

//! Resolution of type-name strings.
//!
//! Every field carries its type as a plain string. [`TypeResolver`] maps that
//! string to a [`ResolvedType`] through an ordered chain of strategies, and
//! reports a [`Error::Resolution`] when none of them matches.

use crate::{
    error::{Error, Result},
    types::{Primitive, ResolvedType},
};

/// Queryable source of additional type names.
///
/// Stands in for the compile classpath of the build being configured. The
/// resolver consults it only after the literal and structural steps have
/// failed, so registry contents can extend resolution but never preempt it.
pub trait TypeRegistry {
    /// Look up a type-name string, returning the type it maps to, if any.
    fn lookup(&self, name: &str) -> Option<ResolvedType>;
}

/// Default registry covering the names the target platform resolves without
/// qualification: primitive keywords, `java.lang` short names, and array
/// suffixes over either.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

/// Short names resolvable without an import on the target platform.
const LANG_SHORT_NAMES: &[(&str, &str)] = &[
    ("Boolean", "java.lang.Boolean"),
    ("Byte", "java.lang.Byte"),
    ("CharSequence", "java.lang.CharSequence"),
    ("Character", "java.lang.Character"),
    ("Double", "java.lang.Double"),
    ("Float", "java.lang.Float"),
    ("Integer", "java.lang.Integer"),
    ("Long", "java.lang.Long"),
    ("Number", "java.lang.Number"),
    ("Object", "java.lang.Object"),
    ("Short", "java.lang.Short"),
];

impl TypeRegistry for BuiltinRegistry {
    fn lookup(&self, name: &str) -> Option<ResolvedType> {
        let (base, dimensions) = strip_array_suffixes(name);
        let resolved = if base == "String" {
            ResolvedType::String
        } else if let Some(primitive) = Primitive::from_keyword(base) {
            ResolvedType::Primitive(primitive)
        } else {
            let (_, qualified) = LANG_SHORT_NAMES
                .iter()
                .find(|(short, _)| *short == base)?;
            ResolvedType::named(*qualified)
        };
        Some(wrap_arrays(resolved, dimensions))
    }
}

/// Maps type-name strings to resolved types.
///
/// Resolution tries, in order, first match wins:
///
/// 1. the exact literal `"String"`, which is the built-in string type no
///    matter what the registry says;
/// 2. a syntactically valid dotted class name, with optional generic
///    arguments and array suffixes, accepted on shape alone without any
///    check that the class exists;
/// 3. the registry.
///
/// A string matching none of the three is a resolution error.
pub struct TypeResolver<R = BuiltinRegistry> {
    registry: R,
}

impl TypeResolver {
    /// Resolver backed by the built-in registry.
    pub fn new() -> Self {
        Self {
            registry: BuiltinRegistry,
        }
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TypeRegistry> TypeResolver<R> {
    /// Resolver backed by a caller-supplied registry.
    pub fn with_registry(registry: R) -> Self {
        Self { registry }
    }

    /// Resolve one type-name string.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedType> {
        if raw == "String" {
            return Ok(ResolvedType::String);
        }
        if let Some(resolved) = self.parse_structural(raw) {
            return Ok(resolved);
        }
        if let Some(resolved) = self.registry.lookup(raw) {
            return Ok(resolved);
        }
        Err(Error::resolution(raw))
    }

    /// Structural step: a dotted class name with optional generic arguments
    /// and array suffixes.
    ///
    /// Generic arguments recurse through the full chain, so primitives and
    /// registry names work inside them. A malformed argument fails the whole
    /// structural step and the raw string falls through to the registry.
    /// The bare segment `String` keeps meaning the built-in string type, so
    /// `String[]` is an array of it, not of some unverified class.
    fn parse_structural(&self, raw: &str) -> Option<ResolvedType> {
        let (base, dimensions) = strip_array_suffixes(raw);
        let (name, args_src) = split_generic(base)?;
        if !is_class_name(name) {
            return None;
        }
        let resolved = match args_src {
            None if name == "String" => ResolvedType::String,
            None => ResolvedType::named(name),
            Some(args_src) => {
                let mut args = Vec::new();
                for arg in split_arguments(args_src)? {
                    args.push(self.resolve(arg.trim()).ok()?);
                }
                ResolvedType::generic(name, args)
            }
        };
        Some(wrap_arrays(resolved, dimensions))
    }
}

/// Splits trailing `[]` pairs off a type-name string.
fn strip_array_suffixes(raw: &str) -> (&str, usize) {
    let mut base = raw;
    let mut dimensions = 0;
    while let Some(stripped) = base.strip_suffix("[]") {
        base = stripped;
        dimensions += 1;
    }
    (base, dimensions)
}

fn wrap_arrays(mut resolved: ResolvedType, dimensions: usize) -> ResolvedType {
    for _ in 0..dimensions {
        resolved = ResolvedType::array(resolved);
    }
    resolved
}

/// Splits `Base<Args>` into the base name and the raw argument list.
///
/// Returns `None` when angle brackets are present but malformed.
fn split_generic(raw: &str) -> Option<(&str, Option<&str>)> {
    match raw.find('<') {
        None if raw.contains('>') => None,
        None => Some((raw, None)),
        Some(_) if !raw.ends_with('>') => None,
        Some(open) => Some((&raw[..open], Some(&raw[open + 1..raw.len() - 1]))),
    }
}

/// Splits a generic argument list on top-level commas.
fn split_arguments(src: &str) -> Option<Vec<&str>> {
    if src.is_empty() {
        return None;
    }
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in src.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                args.push(&src[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    args.push(&src[start..]);
    Some(args)
}

/// Checks that `name` reads as a dotted class name: lowercase-starting
/// package segments, then a class segment starting uppercase, then only
/// nested-class segments, each a valid identifier.
fn is_class_name(name: &str) -> bool {
    let mut seen_class = false;
    for segment in name.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            // Empty segment, so a leading, trailing, or doubled dot.
            return false;
        };
        if !is_identifier_start(first) || !chars.all(is_identifier_part) {
            return false;
        }
        if seen_class {
            // Segments after the class keep the nested-class convention.
            if !first.is_uppercase() {
                return false;
            }
        } else if first.is_uppercase() {
            seen_class = true;
        }
    }
    seen_class
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

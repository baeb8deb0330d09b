//! Java constant declaration builder.

use buildconf_codegen::{CodeBuilder, CodeFragment, Renderable, ResolvedType, TypeMapper};

use crate::type_mapper::JavaTypeMapper;

/// Builder for one `public static final` constant declaration.
///
/// The initializer expression is emitted verbatim, unmodified and unescaped.
/// Validating it is the caller's job; a malformed expression surfaces when
/// the generated file is compiled, not here.
#[derive(Debug, Clone)]
pub struct JavaField {
    name: String,
    ty: ResolvedType,
    value: String,
}

impl JavaField {
    pub fn new(name: impl Into<String>, ty: ResolvedType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            value: value.into(),
        }
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JavaField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let ty = JavaTypeMapper.render_type(&self.ty);
        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or_default();
        let head = format!("public static final {} {} = {}", ty, self.name, first);

        let mut rest: Vec<String> = lines.map(str::to_string).collect();
        if rest.is_empty() {
            return vec![CodeFragment::Line(format!("{};", head))];
        }
        // Multiline initializer: continuation lines sit one level deeper and
        // the statement terminator lands on the last of them.
        if let Some(last) = rest.last_mut() {
            last.push(';');
        }
        vec![
            CodeFragment::Line(head),
            CodeFragment::indent(rest.into_iter().map(CodeFragment::Line).collect()),
        ]
    }
}

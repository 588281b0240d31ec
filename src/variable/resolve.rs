//! Applies a reference's modifier chain to the variable it names.

use super::{Modifier, Record, Reference, Variable, VariableError};
use crate::{html, Context};

/// Resolves a raw reference body (the text between `#{` and `}`).
///
/// Returns `Ok(Some(output))` on success, `Ok(None)` when the reference cannot
/// be resolved and the caller should fall back to the source text, and `Err`
/// when the context's severity makes the error fatal.
pub fn resolve_reference(body: &str, ctx: &Context) -> Result<Option<String>, VariableError> {
    let reference = Reference::parse(body);

    let Some(variable) = ctx.lexicon().get(reference.key) else {
        ctx.raise(VariableError::UnknownVariable {
            key: reference.key.to_string(),
        })?;
        return Ok(None);
    };

    let output = match variable {
        Variable::Simple(value) => simple_content(&reference, value, ctx)?,
        Variable::Structured(record) => structured_content(&reference, record, ctx)?,
    };

    Ok(Some(match ctx.class_name() {
        Some(class_name) => html::span(class_name, &output),
        None => output,
    }))
}

/// Simple variables ignore modifiers, but asking for one is still reported.
fn simple_content(
    reference: &Reference<'_>,
    value: &str,
    ctx: &Context,
) -> Result<String, VariableError> {
    if reference.has_modifiers() {
        ctx.raise(VariableError::UnexpectedModifier {
            key: reference.key.to_string(),
        })?;
    }
    Ok(value.to_string())
}

/// Label selection always runs before link wrapping, so `<abbr>` nests in `<a>`.
fn structured_content(
    reference: &Reference<'_>,
    record: &Record,
    ctx: &Context,
) -> Result<String, VariableError> {
    let label = structured_label(reference, record, ctx)?;
    wrap_link(reference, record, label, ctx)
}

fn structured_label(
    reference: &Reference<'_>,
    record: &Record,
    ctx: &Context,
) -> Result<String, VariableError> {
    let label = record.label();
    if !reference.has(Modifier::Abbr) {
        return Ok(label.to_string());
    }

    match record.abbr() {
        Some(short) => Ok(html::abbr(label, short)),
        None => {
            ctx.raise(VariableError::MissingAbbreviation {
                key: reference.key.to_string(),
            })?;
            Ok(label.to_string())
        }
    }
}

fn wrap_link(
    reference: &Reference<'_>,
    record: &Record,
    content: String,
    ctx: &Context,
) -> Result<String, VariableError> {
    if !reference.has(Modifier::Link) {
        return Ok(content);
    }

    match record.url() {
        Some(href) => Ok(html::link(href, &content)),
        None => {
            ctx.raise(VariableError::MissingUrl {
                key: reference.key.to_string(),
            })?;
            Ok(content)
        }
    }
}

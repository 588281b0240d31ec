//! Inline rule recognising `#{key|modifier...}` references.

use std::sync::Arc;

use crate::host::{InlineRule, InlineState, Token};
use crate::variable::resolve_reference;
use crate::{Context, VariableError, RENDERER_NAME};

/// Start delimiter of a reference.
pub const START_DELIMITER: &str = "#{";
/// End delimiter of a reference.
pub const END_DELIMITER: char = '}';

/// Replaces each reference with the resolved variable.
///
/// References that cannot be resolved, and unterminated ones, are pushed back
/// as their literal source text.
#[derive(Debug, Clone)]
pub struct VariableRule {
    ctx: Arc<Context>,
}

impl VariableRule {
    /// Creates a rule resolving references against `ctx`.
    pub fn new(ctx: Arc<Context>) -> Self {
        Self { ctx }
    }
}

impl InlineRule for VariableRule {
    fn scan(&self, state: &mut dyn InlineState, silent: bool) -> Result<bool, VariableError> {
        // Every entry was rejected; leave the source alone.
        if silent || self.ctx.lexicon().is_empty() {
            return Ok(false);
        }

        let src = state.src();
        let start = state.pos();
        if !src.get(start..).is_some_and(|rest| rest.starts_with(START_DELIMITER)) {
            return Ok(false);
        }

        let body_start = start + START_DELIMITER.len();
        let (content, end) = match src[body_start..].find(END_DELIMITER) {
            Some(offset) => {
                let body = &src[body_start..body_start + offset];
                let end = body_start + offset + END_DELIMITER.len_utf8();
                let content = match resolve_reference(body, &self.ctx)? {
                    Some(resolved) => resolved,
                    None => src[start..end].to_string(),
                };
                (content, end)
            }
            None => {
                tracing::debug!(position = start, "unterminated variable reference");
                (src[start..].to_string(), src.len())
            }
        };

        state.push(Token {
            kind: RENDERER_NAME,
            content,
        });
        state.set_pos(end);
        Ok(true)
    }
}

//! The narrow slice of a markup parser this crate plugs into.
//!
//! A host runs registered inline rules over a span of text. A rule inspects
//! the scan state at the current position and either declines or consumes
//! some input and pushes one opaque [`Token`]. Tokens are turned back into
//! text by the render hook registered under the token's kind.

mod plain;

pub use plain::{PlainHost, PlainState};

use crate::VariableError;

/// An opaque output token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Name of the render hook that turns this token into text.
    pub kind: &'static str,
    pub content: String,
}

/// Mutable inline scan state handed to rules.
pub trait InlineState {
    /// The whole inline source being scanned.
    fn src(&self) -> &str;

    /// Current byte offset into [`src`](Self::src).
    fn pos(&self) -> usize;

    fn set_pos(&mut self, pos: usize);

    fn push(&mut self, token: Token);
}

/// An inline scanning rule.
pub trait InlineRule: Send + Sync {
    /// Tries to match at the state's current position.
    ///
    /// Returns `Ok(true)` after consuming input and pushing a token,
    /// `Ok(false)` to decline with the state untouched. In `silent` mode a
    /// rule must not push tokens.
    fn scan(&self, state: &mut dyn InlineState, silent: bool) -> Result<bool, VariableError>;
}

/// Turns a token into output text.
pub type RenderHook = fn(&Token) -> String;

/// Registration points a host parser exposes to plugins.
pub trait Host {
    fn register_inline_rule(&mut self, name: &'static str, rule: Box<dyn InlineRule>);

    fn register_render_hook(&mut self, name: &'static str, hook: RenderHook);
}

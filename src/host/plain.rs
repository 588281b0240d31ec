use std::collections::HashMap;

use super::{Host, InlineRule, InlineState, RenderHook, Token};
use crate::VariableError;

/// A minimal host treating its whole input as one inline span.
///
/// Characters no rule claims are copied to the output unchanged, tokens are
/// rendered through their hook (or emitted verbatim when none is registered).
/// No block parsing and no escaping happen here.
#[derive(Default)]
pub struct PlainHost {
    rules: Vec<(&'static str, Box<dyn InlineRule>)>,
    hooks: HashMap<&'static str, RenderHook>,
}

impl std::fmt::Debug for PlainHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlainHost")
            .field("rules", &self.rules.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PlainHost {
    /// Creates a host with no rules or hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the registered inline rules, in registration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }

    /// Returns `true` if a render hook is registered under `name`.
    pub fn has_render_hook(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Scans `src` with the registered rules and renders the result.
    pub fn render(&self, src: &str) -> Result<String, VariableError> {
        let state = self.scan(src)?;
        let mut out = String::with_capacity(src.len());
        for node in state.nodes {
            match node {
                Node::Text(text) => out.push_str(&text),
                Node::Token(token) => match self.hooks.get(token.kind) {
                    Some(hook) => out.push_str(&hook(&token)),
                    None => out.push_str(&token.content),
                },
            }
        }
        Ok(out)
    }

    /// Scans `src` into text and tokens without rendering.
    pub fn tokenize(&self, src: &str) -> Result<Vec<Token>, VariableError> {
        let state = self.scan(src)?;
        Ok(state.tokens().cloned().collect())
    }

    fn scan(&self, src: &str) -> Result<PlainState, VariableError> {
        let mut state = PlainState::new(src);

        while state.pos < state.src.len() {
            if !self.try_rules(&mut state)? {
                state.advance_text();
            }
        }

        Ok(state)
    }

    fn try_rules(&self, state: &mut PlainState) -> Result<bool, VariableError> {
        for (_, rule) in &self.rules {
            if rule.scan(state, false)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Host for PlainHost {
    fn register_inline_rule(&mut self, name: &'static str, rule: Box<dyn InlineRule>) {
        self.rules.push((name, rule));
    }

    fn register_render_hook(&mut self, name: &'static str, hook: RenderHook) {
        self.hooks.insert(name, hook);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Token(Token),
}

/// Scan state over a single inline span.
#[derive(Debug, Clone)]
pub struct PlainState {
    src: String,
    pos: usize,
    nodes: Vec<Node>,
}

impl PlainState {
    /// Creates a state positioned at the start of `src`.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            pos: 0,
            nodes: Vec::new(),
        }
    }

    /// Tokens pushed so far.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Token(token) => Some(token),
            Node::Text(_) => None,
        })
    }

    /// Copies the character at the cursor to the output as plain text.
    fn advance_text(&mut self) {
        let Some(ch) = self.src[self.pos..].chars().next() else {
            self.pos = self.src.len();
            return;
        };
        match self.nodes.last_mut() {
            Some(Node::Text(text)) => text.push(ch),
            _ => self.nodes.push(Node::Text(ch.to_string())),
        }
        self.pos += ch.len_utf8();
    }
}

impl InlineState for PlainState {
    fn src(&self) -> &str {
        &self.src
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn push(&mut self, token: Token) {
        self.nodes.push(Node::Token(token));
    }
}

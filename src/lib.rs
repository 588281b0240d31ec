//! Inline variable substitution for markup parsers.
//!
//! References such as `#{key}` or `#{key|abbr|link}` are resolved against a
//! lexicon of simple (text) and structured (`label`, `abbr`, `url`) variables
//! and replaced with plain text or HTML.

pub mod config;
pub mod context;
mod error;
pub mod host;
mod html;
mod plugin;
pub mod rule;
pub mod variable;

pub use config::{ConfigError, Options, OptionsLoader, Severity};
pub use context::{Context, ContextBuilder, Diagnostics, Recorder, TracingDiagnostics};
pub use error::Error;
pub use host::{Host, InlineRule, InlineState, PlainHost, Token};
pub use plugin::{install, install_context};
pub use variable::{Lexicon, Variable, VariableError};

/// Name used in diagnostics.
pub const PLUGIN_NAME: &str = "markup-vars";

/// Name under which the inline rule is registered.
pub const RULE_NAME: &str = "variables_rule";

/// Name under which the token render hook is registered.
pub const RENDERER_NAME: &str = "variables_renderer";

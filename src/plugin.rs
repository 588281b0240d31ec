//! Installing the variable rule into a host parser.

use std::sync::Arc;

use crate::host::{Host, Token};
use crate::rule::VariableRule;
use crate::{Context, Error, Options, RENDERER_NAME, RULE_NAME};

/// Installs the plugin into `host` with the given options.
///
/// Builds the [`Context`] (failing with [`Error::MissingConfiguration`] when
/// `options.data` is empty), registers the inline rule and its render hook,
/// and returns the shared context.
///
/// ## Example
///
/// ```
/// use markup_vars::{install, Options, PlainHost};
///
/// let data = toml::from_str(r#"who = { label = "World Health Organization", abbr = "WHO" }"#).unwrap();
/// let mut host = PlainHost::new();
/// install(&mut host, Options::new(data))?;
///
/// assert_eq!(
///     host.render("#{who|abbr} leads")?,
///     r#"<abbr title="World Health Organization">WHO</abbr> leads"#
/// );
/// # Ok::<(), markup_vars::Error>(())
/// ```
pub fn install<H: Host + ?Sized>(host: &mut H, options: Options) -> Result<Arc<Context>, Error> {
    let ctx = Arc::new(Context::new(options)?);
    install_context(host, Arc::clone(&ctx));
    Ok(ctx)
}

/// Installs the plugin with an already built context.
pub fn install_context<H: Host + ?Sized>(host: &mut H, ctx: Arc<Context>) {
    host.register_render_hook(RENDERER_NAME, render_token);
    host.register_inline_rule(RULE_NAME, Box::new(VariableRule::new(ctx)));
}

/// Token contents are already final markup.
fn render_token(token: &Token) -> String {
    token.content.clone()
}

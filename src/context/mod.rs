//! Resolution context: the lexicon plus the policy applied to its errors.

mod diagnostics;

use std::sync::Arc;

pub use diagnostics::{Diagnostics, Recorder, TracingDiagnostics};

use crate::variable::{Lexicon, VariableError};
use crate::{Error, Options, Severity};

/// Read-only state shared by every render of one plugin installation.
///
/// Built once from [`Options`]; the lexicon is validated at build time and
/// never modified afterwards, so a context can be shared across threads.
///
/// ## Example
///
/// ```
/// use markup_vars::{Context, Options};
///
/// let data = toml::from_str(r#"since = "1948""#).unwrap();
/// let ctx = Context::builder()
///     .with_options(Options::new(data))
///     .build()?;
///
/// assert!(ctx.lexicon().contains_key("since"));
/// # Ok::<(), markup_vars::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    lexicon: Lexicon,
    severity: Severity,
    ignore_missing_variables: bool,
    class_name: Option<String>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Context {
    /// Creates a new builder for constructing a `Context`.
    pub fn builder() -> ContextBuilder {
        ContextBuilder {
            options: None,
            diagnostics: None,
        }
    }

    /// Builds a context reporting warnings through `tracing`.
    pub fn new(options: Options) -> Result<Self, Error> {
        Self::builder().with_options(options).build()
    }

    /// Returns the validated lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the class name every resolved replacement is wrapped in, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Applies the severity policy to a per-reference error.
    ///
    /// Returns `Err` only when the error must abort the render: under
    /// [`Severity::Error`], unless it is an unknown variable and missing
    /// variables are ignored. Otherwise the error is reported (or not, under
    /// [`Severity::Silent`]) and the caller carries on with its fallback.
    pub fn raise(&self, error: VariableError) -> Result<(), VariableError> {
        if self.ignore_missing_variables && matches!(error, VariableError::UnknownVariable { .. })
        {
            self.diagnostics.warn(&error);
            return Ok(());
        }

        match self.severity {
            Severity::Error => Err(error),
            Severity::Silent => Ok(()),
            Severity::Warn => {
                self.diagnostics.warn(&error);
                Ok(())
            }
        }
    }
}

/// Builder for constructing a [`Context`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ContextBuilder {
    options: Option<Options>,
    diagnostics: Option<Arc<dyn Diagnostics>>,
}

impl ContextBuilder {
    /// Attaches the plugin options the context is built from.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Routes warnings to `diagnostics` instead of `tracing`.
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Some(Arc::new(diagnostics));
        self
    }

    /// Validates the options and builds the lexicon.
    ///
    /// Fails with [`Error::MissingConfiguration`] when no options or no
    /// variable data were given, whatever the severity. Entries of unknown
    /// shape abort the build under [`Severity::Error`] and are skipped
    /// otherwise.
    pub fn build(self) -> Result<Context, Error> {
        let options = self.options.ok_or(Error::MissingConfiguration)?;
        if options.data.is_empty() {
            return Err(Error::MissingConfiguration);
        }

        let Options {
            data,
            severity,
            ignore_missing_variables,
            class_name,
        } = options;

        let mut ctx = Context {
            lexicon: Lexicon::default(),
            severity,
            ignore_missing_variables,
            class_name,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(TracingDiagnostics)),
        };
        let lexicon = Lexicon::build(&data, |error| ctx.raise(error))?;
        ctx.lexicon = lexicon;
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(toml_str: &str) -> toml::Table {
        toml::from_str(toml_str).unwrap()
    }

    fn context(options: Options, recorder: &Recorder) -> Context {
        Context::builder()
            .with_options(options)
            .with_diagnostics(recorder.clone())
            .build()
            .unwrap()
    }

    fn unknown(key: &str) -> VariableError {
        VariableError::UnknownVariable { key: key.into() }
    }

    #[test]
    fn test_builder_requires_options() {
        let result = Context::builder().build();
        assert!(matches!(result, Err(Error::MissingConfiguration)));
    }

    #[test]
    fn test_empty_data_is_missing_configuration_whatever_the_severity() {
        for severity in [Severity::Error, Severity::Warn, Severity::Silent] {
            let options = Options::new(toml::Table::new())
                .with_severity(severity)
                .with_ignore_missing_variables(true);
            assert!(matches!(
                Context::new(options),
                Err(Error::MissingConfiguration)
            ));
        }
    }

    #[test]
    fn test_lexicon_contains_each_valid_entry_once() {
        let ctx = Context::new(Options::new(data(
            r#"
            simple = "my simple value"
            rich = { label = "GitHub", abbr = "GH", url = "https://github.com" }
            "#,
        )))
        .unwrap();
        assert_eq!(ctx.lexicon().len(), 2);
    }

    #[test]
    fn test_invalid_entry_aborts_under_error() {
        let options = Options::new(data("simple = \"ok\"\ninvalid = 5")).with_severity(Severity::Error);
        assert!(matches!(
            Context::new(options),
            Err(Error::Variable(VariableError::UnknownVariableType { .. }))
        ));
    }

    #[test]
    fn test_invalid_entry_is_skipped_and_reported_under_warn() {
        let recorder = Recorder::new();
        let ctx = context(
            Options::new(data("simple = \"ok\"\ninvalid = 5")),
            &recorder,
        );
        assert_eq!(ctx.lexicon().len(), 1);
        assert!(!ctx.lexicon().contains_key("invalid"));
        assert_eq!(recorder.warnings().len(), 1);
        assert_eq!(recorder.warnings()[0].key(), "invalid");
    }

    #[test]
    fn test_invalid_entry_is_skipped_quietly_under_silent() {
        let recorder = Recorder::new();
        let ctx = context(
            Options::new(data("simple = \"ok\"\ninvalid = [1]")).with_severity(Severity::Silent),
            &recorder,
        );
        assert_eq!(ctx.lexicon().len(), 1);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_raise_by_severity() {
        let recorder = Recorder::new();
        let options = || Options::new(data("simple = \"ok\""));
        let error = VariableError::MissingUrl { key: "k".into() };

        let strict = context(options().with_severity(Severity::Error), &recorder);
        assert_eq!(strict.raise(error.clone()), Err(error.clone()));

        let silent = context(options().with_severity(Severity::Silent), &recorder);
        assert_eq!(silent.raise(error.clone()), Ok(()));
        assert!(recorder.is_empty());

        let warn = context(options(), &recorder);
        assert_eq!(warn.raise(error.clone()), Ok(()));
        assert_eq!(recorder.warnings(), vec![error]);
    }

    #[test]
    fn test_ignore_missing_downgrades_unknown_variable_only() {
        let recorder = Recorder::new();
        let ctx = context(
            Options::new(data("simple = \"ok\""))
                .with_severity(Severity::Error)
                .with_ignore_missing_variables(true),
            &recorder,
        );

        assert_eq!(ctx.raise(unknown("missing")), Ok(()));
        assert_eq!(recorder.warnings(), vec![unknown("missing")]);

        let other = VariableError::UnexpectedModifier { key: "simple".into() };
        assert_eq!(ctx.raise(other.clone()), Err(other));
    }

    #[test]
    fn test_ignore_missing_still_warns_under_silent() {
        let recorder = Recorder::new();
        let ctx = context(
            Options::new(data("simple = \"ok\""))
                .with_severity(Severity::Silent)
                .with_ignore_missing_variables(true),
            &recorder,
        );
        assert_eq!(ctx.raise(unknown("missing")), Ok(()));
        assert_eq!(recorder.warnings().len(), 1);
    }

    #[test]
    fn test_context_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Context>();
    }
}

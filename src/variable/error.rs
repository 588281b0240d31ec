use thiserror::Error;

/// Errors raised while resolving a single variable reference.
///
/// Every variant is routed through [`Context::raise`](crate::Context::raise),
/// which decides from the configured severity whether it propagates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VariableError {
    #[error("tried to display variable \"{key}\", but it does not exist in variable list")]
    UnknownVariable { key: String },

    #[error(
        "\"{key}\" variable is of unknown type. It should either be:\n\
         - simple (resolve to a simple string)\n\
         - structured (resolve to a table with a \"label\")\n\
         Instead, it appears to be of type \"{found}\""
    )]
    UnknownVariableType { key: String, found: String },

    #[error("tried to apply a modifier on variable \"{key}\" which is a simple variable")]
    UnexpectedModifier { key: String },

    #[error("tried to apply \"abbr\" modifier on \"{key}\" which has no \"abbr\" property")]
    MissingAbbreviation { key: String },

    #[error("tried to apply \"link\" modifier on \"{key}\" which has no \"url\" property")]
    MissingUrl { key: String },
}

impl VariableError {
    /// The variable key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownVariable { key }
            | Self::UnknownVariableType { key, .. }
            | Self::UnexpectedModifier { key }
            | Self::MissingAbbreviation { key }
            | Self::MissingUrl { key } => key,
        }
    }

    /// Short stable name of the error kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownVariable { .. } => "unknown_variable",
            Self::UnknownVariableType { .. } => "unknown_variable_type",
            Self::UnexpectedModifier { .. } => "unexpected_modifier",
            Self::MissingAbbreviation { .. } => "missing_abbreviation",
            Self::MissingUrl { .. } => "missing_url",
        }
    }
}

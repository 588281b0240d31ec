//! Reference grammar: `key[|modifier...]`.

/// Separator between the key and each modifier.
pub const MODIFIER_SEPARATOR: char = '|';

/// A presentational transform requested on a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// `abbr` or `-`: show the short form inside an `<abbr>` tag.
    Abbr,
    /// `link` or `#`: wrap the output in an `<a>` tag.
    Link,
}

impl Modifier {
    /// Matches a modifier token exactly, canonical name or alias.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "abbr" | "-" => Some(Self::Abbr),
            "link" | "#" => Some(Self::Link),
            _ => None,
        }
    }
}

/// A parsed reference body.
///
/// Unrecognized modifier tokens are kept so that a non-empty chain is still
/// reported on simple variables, but they match neither family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    pub key: &'a str,
    pub modifiers: Vec<&'a str>,
}

impl<'a> Reference<'a> {
    /// Splits a reference body on `|`: the key, then the modifier tokens.
    pub fn parse(body: &'a str) -> Self {
        let mut parts = body.split(MODIFIER_SEPARATOR);
        let key = parts.next().unwrap_or_default();
        Self {
            key,
            modifiers: parts.collect(),
        }
    }

    /// Returns `true` if any modifier token was given, recognized or not.
    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Returns `true` if any token of the chain belongs to the given family.
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers
            .iter()
            .any(|token| Modifier::parse(token) == Some(modifier))
    }
}

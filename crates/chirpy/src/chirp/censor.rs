//! Whole-token, case-insensitive masking of denylisted words.

use std::collections::HashMap;

use super::validator::ValidatedText;

/// Replacement token for every word in the default denylist.
pub const MASK: &str = "****";

const DEFAULT_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Immutable mapping from lowercase word to its replacement.
///
/// Built once at startup and shared by reference; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    words: HashMap<String, String>,
}

impl Denylist {
    /// Build a denylist from `(word, replacement)` pairs.
    ///
    /// Words are ASCII-lowercased so lookups match regardless of the case
    /// they were supplied in.
    pub fn new<I, W, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, R)>,
        W: AsRef<str>,
        R: Into<String>,
    {
        let words = entries
            .into_iter()
            .map(|(w, r)| (w.as_ref().to_ascii_lowercase(), r.into()))
            .collect();
        Self { words }
    }

    /// Replacement for `token`, if its lowercase form is denylisted.
    pub fn replacement(&self, token: &str) -> Option<&str> {
        self.words
            .get(&token.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Denylist {
    /// The production denylist: each of the default words maps to [`MASK`].
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().map(|w| (*w, MASK)))
    }
}

/// Mask every denylisted token of an already validated chirp.
///
/// Tokens are separated by the literal space character only. Tabs and
/// newlines stay inside their token, and consecutive spaces produce empty
/// tokens that are kept, so the output has exactly as many space-separated
/// tokens as the input. A token matches only as a whole, so `"fornax."` is
/// left alone.
pub fn censor(text: &ValidatedText<'_>, denylist: &Denylist) -> String {
    text.split(' ')
        .map(|token| denylist.replacement(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

//! Reply classification.
//!
//! The branch decision is a single named predicate: a reply takes the
//! farewell path when its lower-cased text contains any token of the
//! `KeywordSet` as a substring, so "Norway" matches "no".

/// Tokens that send the conversation down the farewell path.
pub const FAREWELL_KEYWORDS: [&str; 3] = ["no", "okay", "fine"];

/// Which way the conversation goes after the user's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The user declined: say goodbye, reassure, then close.
    Farewell,
    /// Anything else: point the user elsewhere, then close.
    Redirect,
}

/// Enumerated token set matched case-insensitively as substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    tokens: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(FAREWELL_KEYWORDS)
    }
}

impl KeywordSet {
    /// Builds a set from the given tokens. Tokens are lower-cased and blank
    /// tokens are dropped (an empty token would match every reply).
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the first token found in `text`, if any.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let normalized = text.to_lowercase();
        self.tokens
            .iter()
            .find(|token| normalized.contains(token.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }

    /// Decides the branch for a user reply.
    pub fn classify(&self, text: &str) -> Branch {
        if self.matches(text) {
            Branch::Farewell
        } else {
            Branch::Redirect
        }
    }
}

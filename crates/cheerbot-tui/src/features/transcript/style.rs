/// A styled span of text (UI-agnostic).
///
/// This is a minimal representation that can be converted to
/// ratatui Span/Line types at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// Creates an empty line.
    pub fn empty() -> Self {
        StyledLine { spans: vec![] }
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Semantic style identifiers (UI-agnostic).
///
/// These are translated to actual terminal styles by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No styling (alignment padding).
    Plain,
    /// Avatar glyph next to a bubble.
    Avatar,
    /// Bot bubble body.
    BotBubble,
    /// User bubble body.
    UserBubble,
}

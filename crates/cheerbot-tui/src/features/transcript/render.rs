//! Transcript view: bubbles to ratatui lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::layout::layout_bubbles;
use super::style::{Style as TranscriptStyle, StyledLine};
use crate::common::theme;
use crate::surface::Bubble;

/// Lays out the whole transcript for `width` columns.
pub fn render_transcript(bubbles: &[Bubble], width: usize) -> Vec<Line<'static>> {
    layout_bubbles(bubbles, width)
        .into_iter()
        .map(convert_styled_line)
        .collect()
}

fn convert_styled_line(styled_line: StyledLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = styled_line
        .spans
        .into_iter()
        .map(|s| Span::styled(s.text, convert_style(s.style)))
        .collect();
    Line::from(spans)
}

fn convert_style(style: TranscriptStyle) -> Style {
    match style {
        TranscriptStyle::Plain | TranscriptStyle::Avatar => Style::default(),
        TranscriptStyle::BotBubble => Style::default().fg(theme::INK).bg(theme::BOT_BUBBLE),
        TranscriptStyle::UserBubble => Style::default()
            .fg(ratatui::style::Color::White)
            .bg(theme::USER_BUBBLE)
            .add_modifier(Modifier::BOLD),
    }
}

//! Reply box view.

use cheerbot_core::dialogue::Phase;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::{InputState, REPLY_PLACEHOLDER};
use crate::common::theme;

/// Height of the reply box, borders included.
pub const INPUT_HEIGHT: u16 = 3;

const SEND_LABEL: &str = " Send ⏎ ";

/// Renders the reply box and places the terminal cursor inside it.
///
/// The placeholder only appears while the bot is waiting for an answer.
pub fn render_input(input: &InputState, phase: Phase, frame: &mut Frame, area: Rect) {
    let accepting = phase.accepts_reply();
    let border_color = if accepting { theme::ACCENT } else { theme::MUTED };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title_top(
            Line::from(Span::styled(
                SEND_LABEL,
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        );

    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        frame.render_widget(block, area);
        return;
    }

    let (visible, cursor_col) = visible_tail(
        input.buffer.text(),
        input.buffer.cursor_column(),
        inner.width as usize,
    );
    let line = if input.buffer.is_empty() && accepting {
        Line::from(Span::styled(
            REPLY_PLACEHOLDER,
            Style::default()
                .fg(theme::MUTED)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(visible, Style::default().fg(theme::INK)))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    let cursor_x = inner.x + u16::try_from(cursor_col).unwrap_or(inner.width - 1);
    frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
}

/// Slice of `text` that keeps the cursor on screen, and the cursor's
/// column within that slice.
///
/// When everything fits, the text is shown from the start. Otherwise the
/// leading columns are dropped until the cursor sits in the last column.
fn visible_tail(text: &str, cursor_col: usize, width: usize) -> (String, usize) {
    let width = width.max(1);
    // One column is reserved for the cursor past the last char.
    let skip = (cursor_col + 1).saturating_sub(width);
    if skip == 0 {
        return (text.to_string(), cursor_col);
    }

    let mut skipped = 0;
    let mut visible = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if skipped < skip {
            skipped += ch_width;
            continue;
        }
        visible.push(ch);
    }
    (visible, cursor_col.saturating_sub(skipped))
}

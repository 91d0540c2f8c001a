//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state.

use cheerbot_core::clock::Clock;
use cheerbot_core::dialogue::Phase;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::text::truncate_with_ellipsis;
use crate::common::{Scrollbar, theme};
use crate::input;
use crate::state::AppState;
use crate::transcript;

pub const WINDOW_TITLE: &str = "Friendly Chatbot";

const TITLE_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const STATUS_HINTS: &str = "Enter send · Esc quit";

/// Transcript padding on each side.
pub const TRANSCRIPT_MARGIN: u16 = 1;

/// Column kept free for the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

/// Renders the entire chat window.
pub fn render<C: Clock>(app: &AppState<C>, frame: &mut Frame) {
    let [title_area, transcript_area, input_area, status_area] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(input::INPUT_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(frame.area());

    render_title(frame, title_area);
    render_transcript(app, frame, transcript_area);
    input::render_input(&app.input, app.phase(), frame, input_area);
    render_status_line(app.phase(), frame, status_area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        WINDOW_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().fg(ratatui::style::Color::White).bg(theme::ACCENT));
    frame.render_widget(title, area);
}

fn render_transcript<C: Clock>(app: &AppState<C>, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    let content_area = Rect {
        x: area.x + TRANSCRIPT_MARGIN,
        y: area.y,
        width: area
            .width
            .saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH),
        height: area.height,
    };
    let viewport = content_area.height as usize;
    let lines = transcript::render_transcript(app.surface().bubbles(), content_area.width as usize);
    let total = lines.len();

    // `app.scroll` counts up from the bottom; the scrollbar wants lines hidden above.
    let max_offset = total.saturating_sub(viewport);
    let offset = max_offset - app.scroll.min(max_offset);

    let mut visible: Vec<Line<'static>> = lines.into_iter().skip(offset).take(viewport).collect();

    // Bottom-align: newest message sits just above the input box
    if visible.len() < viewport {
        let mut padded = vec![Line::default(); viewport - visible.len()];
        padded.extend(visible);
        visible = padded;
    }

    frame.render_widget(Paragraph::new(visible), content_area);
    frame.render_widget(
        Scrollbar::new(total, viewport, offset).style(Style::default().fg(theme::ACCENT)),
        area,
    );
}

fn render_status_line(phase: Phase, frame: &mut Frame, area: Rect) {
    let hint_style = Style::default().fg(theme::MUTED);
    let phase_style = if phase.accepts_reply() {
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        hint_style
    };

    let label_width = (area.width as usize).saturating_sub(STATUS_HINTS.width() + 2);
    let label = truncate_with_ellipsis(phase.label(), label_width);

    let line = Line::from(vec![
        Span::styled(format!(" {label}"), phase_style),
        Span::raw("  "),
        Span::styled(STATUS_HINTS, hint_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

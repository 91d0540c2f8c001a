//! Chat bubble layout.
//!
//! Bot bubbles hug the left edge behind the bot avatar; user bubbles are
//! right-aligned with the user avatar after them. Bubbles are separated by
//! one blank line.

use cheerbot_core::dialogue::Sender;
use unicode_width::UnicodeWidthStr;

use super::style::{Style, StyledLine, StyledSpan};
use crate::common::wrap_words;
use crate::surface::Bubble;

pub const BOT_AVATAR: &str = "🤖";
pub const USER_AVATAR: &str = "🙂";
/// Both avatars are double-width glyphs.
pub const AVATAR_WIDTH: usize = 2;

const AVATAR_BLANK: &str = "  ";
const AVATAR_GAP: usize = 1;
/// Spaces inside the bubble on each side of the text.
const BUBBLE_PADDING: usize = 1;
const MAX_BUBBLE_TEXT_WIDTH: usize = 60;

/// Widest text line a bubble may hold at this transcript width.
pub fn max_bubble_text_width(width: usize) -> usize {
    let overhead = AVATAR_WIDTH + AVATAR_GAP + BUBBLE_PADDING * 2;
    width
        .saturating_sub(overhead)
        .clamp(1, MAX_BUBBLE_TEXT_WIDTH)
}

/// Lays out every bubble, oldest first.
pub fn layout_bubbles(bubbles: &[Bubble], width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    for (idx, bubble) in bubbles.iter().enumerate() {
        if idx > 0 {
            lines.push(StyledLine::empty());
        }
        lines.extend(layout_bubble(bubble, width));
    }
    lines
}

fn layout_bubble(bubble: &Bubble, width: usize) -> Vec<StyledLine> {
    let text = bubble.text.replace('\t', "    ").replace('\x1b', "");
    let wrapped = wrap_words(&text, max_bubble_text_width(width));
    let inner = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);
    let bubble_width = inner + BUBBLE_PADDING * 2;

    wrapped
        .into_iter()
        .enumerate()
        .map(|(row, line)| {
            let fill = " ".repeat(inner - line.width());
            let body = format!(" {line}{fill} ");

            match bubble.sender {
                Sender::Bot => {
                    let avatar = if row == 0 { BOT_AVATAR } else { AVATAR_BLANK };
                    StyledLine {
                        spans: vec![
                            StyledSpan::new(avatar, Style::Avatar),
                            StyledSpan::new(" ", Style::Plain),
                            StyledSpan::new(body, Style::BotBubble),
                        ],
                    }
                }
                Sender::User => {
                    let avatar = if row == 0 { USER_AVATAR } else { AVATAR_BLANK };
                    let used = bubble_width + AVATAR_GAP + AVATAR_WIDTH;
                    let pad = " ".repeat(width.saturating_sub(used));
                    StyledLine {
                        spans: vec![
                            StyledSpan::new(pad, Style::Plain),
                            StyledSpan::new(body, Style::UserBubble),
                            StyledSpan::new(" ", Style::Plain),
                            StyledSpan::new(avatar, Style::Avatar),
                        ],
                    }
                }
            }
        })
        .collect()
}

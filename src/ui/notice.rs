//! Modal notifications: errors and confirmations.
//!
//! A notice blocks every other input until acknowledged.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

const NOTICE_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Alert,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Lines needed for `message` wrapped to `width` columns.
fn wrapped_height(message: &str, width: usize) -> u16 {
    if width == 0 {
        return 1;
    }
    let lines = message
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum::<usize>()
        .max(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let text_width = NOTICE_WIDTH.saturating_sub(6) as usize;
    let height = wrapped_height(&notice.message, text_width).saturating_add(6);
    let area = centered_rect_by_size(area, NOTICE_WIDTH, height);
    frame.render_widget(Clear, area);

    let color = match notice.kind {
        NoticeKind::Error => STATUS_ERROR,
        NoticeKind::Alert => STATUS_OK,
    };
    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let button = Style::default()
        .fg(HEADER_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    lines.extend(
        notice
            .message
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" OK ", button)).alignment(Alignment::Center));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

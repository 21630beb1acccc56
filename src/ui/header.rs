use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::path::Path;

/// Title bar: diagram file, node count, revision and dialog language.
pub struct Header<'a> {
    diagram: Option<&'a Path>,
    nodes: usize,
    revision: u64,
    language: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(diagram: Option<&'a Path>, nodes: usize, revision: u64, language: &'a str) -> Self {
        Self {
            diagram,
            nodes,
            revision,
            language,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let diagram = self
            .diagram
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "untitled".to_string());

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "pictopick",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(diagram, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} nodes", self.nodes), Style::default().fg(STATUS_OK)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("rev {}", self.revision), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("lang {}", self.language), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

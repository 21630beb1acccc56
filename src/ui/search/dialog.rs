//! Dialog rendering for the pictogram search overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::{CatalogEndpoints, PictogramRecord};
use crate::config::Language;
use crate::paginate::{PageNav, PageView};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_OK,
};

use super::state::{DialogFocus, SearchDialogState, SearchForm, SearchPhase, GRID_COLUMNS};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const DIALOG_WIDTH: u16 = 84;
const DIALOG_HEIGHT: u16 = 26;

/// Lines taken by one result card (label, identifier, spacer).
const CARD_HEIGHT: u16 = 3;

/// Render the search dialog on top of `area`.
pub fn render_search_dialog(
    frame: &mut Frame,
    area: Rect,
    state: &SearchDialogState,
    languages: &[Language],
    endpoints: &CatalogEndpoints,
) {
    let SearchDialogState::Visible(form) = state else {
        return;
    };

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Pictogram search ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(language_line(form, languages)), rows[0]);
    render_input(frame, rows[1], form);
    render_results(frame, rows[2], form);
    frame.render_widget(Paragraph::new(selection_line(form, endpoints)), rows[3]);
    frame.render_widget(Paragraph::new(pagination_line(form)), rows[4]);
    frame.render_widget(Paragraph::new(hints_line(form)), rows[5]);
}

fn language_line(form: &SearchForm, languages: &[Language]) -> Line<'static> {
    let code = form.session.language();
    let name = languages
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.name.clone())
        .unwrap_or_else(|| code.to_string());

    Line::from(vec![
        Span::styled(" Language: ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("‹ {} ›", name),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Ctrl+L to change)", Style::default().fg(MUTED_TEXT)),
    ])
}

fn render_input(frame: &mut Frame, area: Rect, form: &SearchForm) {
    let focused = form.focus == DialogFocus::Query;
    let border = if focused { ACCENT } else { POPUP_BORDER };
    let content = if form.input.is_empty() && !focused {
        Span::styled("Enter a keyword...", Style::default().fg(MUTED_TEXT))
    } else if focused {
        Span::styled(format!("{}▏", form.input), Style::default().fg(HEADER_TEXT))
    } else {
        Span::styled(form.input.clone(), Style::default().fg(HEADER_TEXT))
    };

    let block = Block::default()
        .title(" Keyword ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn render_results(frame: &mut Frame, area: Rect, form: &SearchForm) {
    if let SearchPhase::Searching { animation_tick, .. } = form.phase {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Searching...", Style::default().fg(HEADER_TEXT)),
        ]);
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        return;
    }

    if !form.session.has_searched() {
        let line = Line::from(Span::styled(
            "  Type a keyword and press Enter",
            Style::default().fg(MUTED_TEXT),
        ));
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        return;
    }

    match form.session.view() {
        PageView::NoResults => {
            let line = Line::from(Span::styled(
                "No results found",
                Style::default().fg(HEADER_TEXT),
            ));
            frame.render_widget(
                Paragraph::new(vec![Line::from(""), line]).alignment(Alignment::Center),
                area,
            );
        }
        PageView::Page { items, .. } => render_grid(frame, area, form, items),
    }
}

fn render_grid(frame: &mut Frame, area: Rect, form: &SearchForm, items: &[PictogramRecord]) {
    let card_width = area.width / GRID_COLUMNS as u16;
    if card_width == 0 {
        return;
    }
    let grid_focused = form.focus == DialogFocus::Results;
    let capacity = visible_rows(area.height);
    let first_row = first_visible_row(form.selected, capacity);
    let total_rows = items.len().div_ceil(GRID_COLUMNS);

    for (index, record) in items.iter().enumerate() {
        let row = index / GRID_COLUMNS;
        if row < first_row {
            continue;
        }
        if row >= first_row + capacity {
            break;
        }
        let column = (index % GRID_COLUMNS) as u16;
        let card = Rect {
            x: area.x + column * card_width,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT - 1,
        };

        let max = card_width.saturating_sub(2) as usize;
        let label = truncate(form.session.resolve_label(record), max);
        let id = truncate(&format!("#{}", record.id), max);

        let mut style = Style::default().fg(HEADER_TEXT);
        if index == form.selected {
            style = style.bg(ACTIVE_HIGHLIGHT);
            if grid_focused {
                style = style.add_modifier(Modifier::BOLD);
            }
        }

        let lines = vec![
            Line::from(Span::styled(format!(" {}", label), style)),
            Line::from(Span::styled(format!(" {}", id), style.fg(MUTED_TEXT))),
        ];
        frame.render_widget(Paragraph::new(lines).style(style), card);
    }

    // Markers for rows scrolled out of view, on the right edge.
    let marker = Style::default().fg(ACCENT);
    let marker_x = area.x + area.width.saturating_sub(1);
    if first_row > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled("▲", marker)),
            Rect::new(marker_x, area.y, 1, 1),
        );
    }
    if first_row + capacity < total_rows && area.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled("▼", marker)),
            Rect::new(marker_x, area.y + area.height - 1, 1, 1),
        );
    }
}

/// Card rows that fit in `height` lines. The last row needs no spacer.
fn visible_rows(height: u16) -> usize {
    (usize::from(height) + 1) / CARD_HEIGHT as usize
}

/// First row to draw so the row holding `selected` is on screen.
fn first_visible_row(selected: usize, capacity: usize) -> usize {
    let selected_row = selected / GRID_COLUMNS;
    selected_row.saturating_sub(capacity.saturating_sub(1))
}

fn selection_line(form: &SearchForm, endpoints: &CatalogEndpoints) -> Line<'static> {
    match form.selected_record() {
        Some(record) if form.focus == DialogFocus::Results && !form.is_searching() => {
            Line::from(vec![
                Span::styled(" Image: ", Style::default().fg(MUTED_TEXT)),
                Span::styled(endpoints.image_url(&record.id), Style::default().fg(HEADER_TEXT)),
            ])
        }
        _ => Line::from(""),
    }
}

/// Page info and the navigation actually offered for this page.
///
/// Shown only when the results do not fit on one page.
fn pagination_line(form: &SearchForm) -> Line<'static> {
    let PageView::Page { nav, .. } = form.session.view() else {
        return Line::from("");
    };
    if form.is_searching() || nav.total <= form.session.page_size() {
        return Line::from("");
    }
    Line::from(pagination_spans(&nav))
}

fn pagination_spans(nav: &PageNav) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!(" Page {} of {} ({} results)", nav.page, nav.page_count, nav.total),
        Style::default().fg(HEADER_TEXT),
    )];
    if nav.has_previous() {
        spans.push(Span::styled("   ← Previous (PgUp)", Style::default().fg(ACCENT)));
    }
    if nav.has_next() {
        spans.push(Span::styled("   Next → (PgDn)", Style::default().fg(ACCENT)));
    }
    spans
}

fn hints_line(form: &SearchForm) -> Line<'static> {
    let hints = match form.focus {
        DialogFocus::Query => " Enter: Search │ Tab: Results │ Esc: Close",
        DialogFocus::Results => " ←↑↓→: Move │ Enter: Insert │ Tab: Keyword │ Esc: Close",
    };
    Line::from(Span::styled(
        hints,
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    ))
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("chat", 10), "chat");
        assert_eq!(truncate("éléphant", 4), "élé…");
    }

    #[test]
    fn grid_scrolls_to_keep_selection_visible() {
        assert_eq!(visible_rows(9), 3);
        assert_eq!(visible_rows(8), 3);
        assert_eq!(visible_rows(7), 2);
        assert_eq!(visible_rows(1), 0);

        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(11, 3), 0);
        assert_eq!(first_visible_row(16, 3), 2);
        assert_eq!(first_visible_row(19, 5), 0);
        // Even with no room, the selected row is the one drawn first.
        assert_eq!(first_visible_row(16, 0), 4);
    }

    #[test]
    fn pagination_offers_only_valid_moves() {
        let first = PageNav {
            page: 1,
            page_count: 3,
            total: 45,
        };
        let text: String = pagination_spans(&first)
            .iter()
            .map(|span| span.content.to_string())
            .collect();
        assert!(text.contains("Page 1 of 3 (45 results)"));
        assert!(!text.contains("Previous"));
        assert!(text.contains("Next"));

        let last = PageNav { page: 3, ..first };
        let text: String = pagination_spans(&last)
            .iter()
            .map(|span| span.content.to_string())
            .collect();
        assert!(text.contains("Previous"));
        assert!(!text.contains("Next"));
    }
}

use crate::host::{DiagramHost, Document};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::commands::KeyBinding;
use crate::ui::layout::layout_regions;
use crate::ui::menu::{render_menu, MENU_KEY};
use crate::ui::notice::render_notice;
use crate::ui::search::render_search_dialog;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let document = app.document();
    let header_widget = Header::new(
        app.diagram_path(),
        document.nodes().len(),
        document.revision(),
        app.language(),
    );
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    render_canvas(frame, body, document);

    let hints = format!(
        "{}: Menu │ {}",
        KeyBinding::plain(MENU_KEY).label(),
        app.commands().menu_hint()
    );
    let footer_widget = Footer::new(hints);
    frame.render_widget(footer_widget.widget(footer), footer);

    render_search_dialog(
        frame,
        body,
        app.search_dialog(),
        &app.config().languages,
        app.endpoints(),
    );

    render_menu(frame, area, body, app.menu(), app.commands());

    if let Some(notice) = app.notice() {
        render_notice(frame, area, notice);
    }
}

/// Node list of the diagram with the current viewport in the title.
fn render_canvas(frame: &mut Frame<'_>, area: Rect, document: &Document) {
    let viewport = document.viewport();
    let title = format!(
        " Canvas  scroll ({:.0}, {:.0})  zoom {:.0}% ",
        viewport.scroll_x,
        viewport.scroll_y,
        viewport.scale * 100.0
    );
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let lines: Vec<Line> = if document.nodes().is_empty() {
        vec![Line::from(Span::styled(
            " Empty diagram. Ctrl+P to search pictograms.",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        document
            .nodes()
            .iter()
            .map(|node| {
                let selected = document.selection().contains(&node.id);
                let mut style = Style::default().fg(HEADER_TEXT);
                if selected {
                    style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(format!(" {} ", if selected { "▶" } else { "•" }), style),
                    Span::styled(node.label.clone(), style),
                    Span::styled(format!("  {}", node.geometry), style.fg(MUTED_TEXT)),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

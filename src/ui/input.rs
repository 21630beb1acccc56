use crate::ui::app::{App, Focus};
use crate::ui::menu::{MenuIntent, MenuKind, MENU_KEY};
use crate::ui::notice::Notice;
use crate::ui::search::{DialogFocus, SearchIntent, GRID_COLUMNS};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // A notice is modal until acknowledged.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return;
    }

    if app.menu().is_open() {
        handle_menu_key(app, key);
        return;
    }

    if key.code == MENU_KEY {
        app.open_menu(MenuKind::Extras);
        return;
    }

    if let Some(command) = app.commands().resolve(&key) {
        app.run_command(command);
        return;
    }

    match app.focus() {
        Focus::SearchDialog => handle_dialog_key(app, key),
        Focus::Canvas => handle_canvas_key(app, key),
    }
}

/// Right-click on the canvas opens the context menu at the pointer. Any
/// other click closes an open menu.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.notice().is_some() {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) if app.focus() == Focus::Canvas => {
            app.open_menu(MenuKind::Context {
                anchor: Some(Position::new(mouse.column, mouse.row)),
            });
        }
        MouseEventKind::Down(_) if app.menu().is_open() => {
            app.dispatch_menu(MenuIntent::Close);
        }
        _ => {}
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_menu(MenuIntent::Close),
        code if code == MENU_KEY => app.dispatch_menu(MenuIntent::Close),
        KeyCode::Up | KeyCode::BackTab => app.dispatch_menu(MenuIntent::Move { delta: -1 }),
        KeyCode::Down | KeyCode::Tab => app.dispatch_menu(MenuIntent::Move { delta: 1 }),
        KeyCode::Enter => app.choose_menu_entry(),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    let Some(focus) = app.search_dialog().form().map(|form| form.focus) else {
        return;
    };

    if is_ctrl_char(key, 'l') {
        app.cycle_language();
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_search_dialog(),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_search(SearchIntent::ToggleFocus),
        KeyCode::PageDown => app.dispatch_search(SearchIntent::NextPage),
        KeyCode::PageUp => app.dispatch_search(SearchIntent::PreviousPage),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::Backspace),
        KeyCode::Enter => match focus {
            DialogFocus::Query => {
                app.submit_search();
            }
            DialogFocus::Results => insert_selected(app),
        },
        _ => match focus {
            DialogFocus::Query => handle_query_key(app, key),
            DialogFocus::Results => handle_grid_key(app, key),
        },
    }
}

fn handle_query_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down => app.dispatch_search(SearchIntent::ToggleFocus),
        KeyCode::Char(ch) if !has_control(key) => {
            app.dispatch_search(SearchIntent::InsertChar(ch));
        }
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    let columns = GRID_COLUMNS as isize;
    match key.code {
        KeyCode::Left => app.dispatch_search(SearchIntent::MoveSelection { delta: -1 }),
        KeyCode::Right => app.dispatch_search(SearchIntent::MoveSelection { delta: 1 }),
        KeyCode::Up => app.dispatch_search(SearchIntent::MoveSelection { delta: -columns }),
        KeyCode::Down => app.dispatch_search(SearchIntent::MoveSelection { delta: columns }),
        KeyCode::Char('[') => app.dispatch_search(SearchIntent::PreviousPage),
        KeyCode::Char(']') => app.dispatch_search(SearchIntent::NextPage),
        // Typing from the grid goes back to the keyword field.
        KeyCode::Char(ch) if !has_control(key) => {
            app.dispatch_search(SearchIntent::InsertChar(ch));
        }
        _ => {}
    }
}

fn insert_selected(app: &mut App) {
    if let Err(err) = app.insert_selected() {
        tracing::error!(error = %err, "Pictogram insertion failed");
        app.notify(Notice::error("Error", err.to_string()));
    }
}

fn handle_canvas_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.scroll_canvas(-1, 0),
        KeyCode::Right => app.scroll_canvas(1, 0),
        KeyCode::Up => app.scroll_canvas(0, -1),
        KeyCode::Down => app.scroll_canvas(0, 1),
        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_canvas(true),
        KeyCode::Char('-') => app.zoom_canvas(false),
        KeyCode::Menu | KeyCode::Char('m') => app.open_menu(MenuKind::Context { anchor: None }),
        _ => {}
    }
}

fn has_control(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    #[test]
    fn ctrl_p_opens_dialog_and_esc_closes() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, ctrl('p'));
        assert_eq!(app.focus(), Focus::SearchDialog);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Canvas);
        assert!(!app.search_dialog().is_visible());
    }

    #[test]
    fn typed_chars_reach_keyword_field() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, ctrl('p'));
        for ch in "chat".chars() {
            handle_key(&mut app, key(KeyCode::Char(ch)));
        }
        handle_key(&mut app, key(KeyCode::Backspace));
        let form = app.search_dialog().form().expect("dialog open");
        assert_eq!(form.input, "cha");
    }

    #[test]
    fn notice_blocks_input_until_dismissed() {
        let mut app = App::new(Config::default());
        app.notify(Notice::error("Error", "boom"));
        handle_key(&mut app, ctrl('p'));
        assert_eq!(app.focus(), Focus::Canvas);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.notice().is_none());
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    fn right_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn menu_bar_opens_search() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, key(MENU_KEY));
        assert_eq!(app.menu().kind(), Some(MenuKind::Extras));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.menu().is_open());
        assert_eq!(app.focus(), Focus::SearchDialog);
    }

    #[test]
    fn menu_swallows_keys_until_closed() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, key(MENU_KEY));
        handle_key(&mut app, ctrl('q'));
        assert!(!app.should_quit());
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.menu().is_open());
        assert_eq!(app.focus(), Focus::Canvas);
    }

    #[test]
    fn menu_arrows_pick_quit() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, key(MENU_KEY));
        handle_key(&mut app, key(KeyCode::Up));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.should_quit());
    }

    #[test]
    fn right_click_opens_context_menu_at_pointer() {
        let mut app = App::new(Config::default());
        handle_mouse(&mut app, right_click(12, 7));
        assert_eq!(
            app.menu().kind(),
            Some(MenuKind::Context {
                anchor: Some(Position::new(12, 7))
            })
        );
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.focus(), Focus::SearchDialog);
    }

    #[test]
    fn context_menu_from_keyboard() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(
            app.menu().kind(),
            Some(MenuKind::Context { anchor: None })
        );
        handle_mouse(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..right_click(0, 0)
            },
        );
        assert!(!app.menu().is_open());
    }

    #[test]
    fn right_click_ignored_in_dialog() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, ctrl('p'));
        handle_mouse(&mut app, right_click(3, 3));
        assert!(!app.menu().is_open());
    }

    #[test]
    fn canvas_keys_scroll_and_zoom() {
        let mut app = App::new(Config::default());
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Char('+')));
        let viewport = crate::host::DiagramHost::viewport(app.document());
        assert_eq!(viewport.scroll_x, 40.0);
        assert_eq!(viewport.scale, 1.25);
    }
}

//! Popup menus listing the registered commands.
//!
//! The menu bar opens with F10 above the footer. The canvas context menu
//! opens at the pointer on right-click, or at the canvas center from the
//! keyboard. Both list [`CommandRegistry::menu`] in registration order.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::commands::CommandRegistry;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

const MENU_WIDTH: u16 = 34;

/// Opens the menu bar from anywhere.
pub const MENU_KEY: KeyCode = KeyCode::F(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    /// The menu bar entry, anchored above the footer.
    Extras,
    /// Canvas context menu. `None` centers it on the canvas.
    Context { anchor: Option<Position> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Hidden,
    Open {
        kind: MenuKind,
        selected: usize,
        len: usize,
    },
}

impl UiState for MenuState {}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Index of the highlighted entry.
    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Open { selected, .. } => Some(*selected),
            Self::Hidden => None,
        }
    }

    pub fn kind(&self) -> Option<MenuKind> {
        match self {
            Self::Open { kind, .. } => Some(*kind),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum MenuIntent {
    /// Show a menu of `len` entries with the first one highlighted.
    Open { kind: MenuKind, len: usize },
    Close,
    /// Move the highlight, wrapping at both ends.
    Move { delta: isize },
}

impl Intent for MenuIntent {}

pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuState;
    type Intent = MenuIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, MenuIntent::Open { len: 0, .. }) => MenuState::Hidden,
            (_, MenuIntent::Open { kind, len }) => MenuState::Open {
                kind,
                selected: 0,
                len,
            },
            (_, MenuIntent::Close) => MenuState::Hidden,
            (
                MenuState::Open {
                    kind,
                    selected,
                    len,
                },
                MenuIntent::Move { delta },
            ) => MenuState::Open {
                kind,
                selected: (selected as isize + delta).rem_euclid(len as isize) as usize,
                len,
            },
            (MenuState::Hidden, MenuIntent::Move { .. }) => MenuState::Hidden,
        }
    }
}

/// Rect of `width`×`height` with its top-left at `anchor`, shifted back
/// inside `area` when it would overflow.
fn anchored_rect(area: Rect, anchor: Position, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;
    Rect {
        x: anchor.x.clamp(area.x, max_x),
        y: anchor.y.clamp(area.y, max_y),
        width,
        height,
    }
}

/// Draw the open menu. `canvas` is the body area between header and footer.
pub fn render_menu(
    frame: &mut Frame,
    screen: Rect,
    canvas: Rect,
    state: &MenuState,
    commands: &CommandRegistry,
) {
    let MenuState::Open { kind, selected, .. } = state else {
        return;
    };

    let entries = commands.menu();
    let height = entries.len() as u16 + 2;
    let (title, anchor) = match kind {
        MenuKind::Extras => (
            " Extras ",
            Position::new(canvas.x + 1, (canvas.y + canvas.height).saturating_sub(height)),
        ),
        MenuKind::Context { anchor: Some(at) } => (" Canvas ", *at),
        MenuKind::Context { anchor: None } => (
            " Canvas ",
            Position::new(
                canvas.x + canvas.width.saturating_sub(MENU_WIDTH) / 2,
                canvas.y + canvas.height.saturating_sub(height) / 2,
            ),
        ),
    };
    let area = anchored_rect(screen, anchor, MENU_WIDTH, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner_width = MENU_WIDTH.saturating_sub(2) as usize;
    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(index, command)| {
            let shortcut = command
                .bindings
                .first()
                .map(|binding| binding.label())
                .unwrap_or_default();
            let padding = inner_width
                .saturating_sub(command.label.chars().count())
                .saturating_sub(shortcut.chars().count())
                .saturating_sub(2);
            let mut style = Style::default().fg(HEADER_TEXT);
            if index == *selected {
                style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!(" {}", command.label), style),
                Span::styled(" ".repeat(padding.max(1)), style),
                Span::styled(format!("{} ", shortcut), style.fg(MUTED_TEXT)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(len: usize) -> MenuState {
        MenuReducer::reduce(
            MenuState::Hidden,
            MenuIntent::Open {
                kind: MenuKind::Extras,
                len,
            },
        )
    }

    #[test]
    fn open_highlights_first_entry() {
        let state = open(3);
        assert!(state.is_open());
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.kind(), Some(MenuKind::Extras));
    }

    #[test]
    fn empty_menu_stays_hidden() {
        assert_eq!(open(0), MenuState::Hidden);
    }

    #[test]
    fn move_wraps_around() {
        let state = MenuReducer::reduce(open(3), MenuIntent::Move { delta: -1 });
        assert_eq!(state.selected(), Some(2));
        let state = MenuReducer::reduce(state, MenuIntent::Move { delta: 1 });
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn close_hides() {
        let state = MenuReducer::reduce(open(3), MenuIntent::Close);
        assert!(!state.is_open());
        let state = MenuReducer::reduce(state, MenuIntent::Move { delta: 1 });
        assert_eq!(state, MenuState::Hidden);
    }

    #[test]
    fn anchored_rect_stays_on_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        assert_eq!(
            anchored_rect(screen, Position::new(10, 5), 34, 5),
            Rect::new(10, 5, 34, 5)
        );
        assert_eq!(
            anchored_rect(screen, Position::new(70, 22), 34, 5),
            Rect::new(46, 19, 34, 5)
        );
    }
}

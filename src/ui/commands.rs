//! Command registration: named actions, their shortcuts and menu labels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CommandId {
    PictogramSearch,
    Save,
    Quit,
}

impl CommandId {
    pub fn name(self) -> &'static str {
        match self {
            CommandId::PictogramSearch => "pictogram-search",
            CommandId::Save => "save",
            CommandId::Quit => "quit",
        }
    }
}

/// A key with its modifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                expected.eq_ignore_ascii_case(&actual)
            }
            (expected, actual) => expected == actual,
        };
        code_matches && key.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }

    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key)
        } else {
            key
        }
    }
}

#[derive(Clone, Debug)]
pub struct Command {
    pub id: CommandId,
    /// Menu entry text.
    pub label: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Registered commands in menu order.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the application's menu.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Command {
            id: CommandId::PictogramSearch,
            label: "Search pictograms",
            bindings: vec![KeyBinding::ctrl('p'), KeyBinding::plain(KeyCode::F(3))],
        });
        registry.register(Command {
            id: CommandId::Save,
            label: "Save",
            bindings: vec![KeyBinding::ctrl('s')],
        });
        registry.register(Command {
            id: CommandId::Quit,
            label: "Quit",
            bindings: vec![KeyBinding::ctrl('q')],
        });
        registry
    }

    /// Add a command. A later registration with the same id replaces the
    /// earlier one in place.
    pub fn register(&mut self, command: Command) {
        match self.commands.iter_mut().find(|c| c.id == command.id) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<CommandId> {
        self.commands
            .iter()
            .find(|command| command.bindings.iter().any(|b| b.matches(key)))
            .map(|command| command.id)
    }

    pub fn menu(&self) -> &[Command] {
        &self.commands
    }

    /// Footer text: `"Ctrl+P: Search pictograms │ ..."`.
    pub fn menu_hint(&self) -> String {
        self.commands
            .iter()
            .filter_map(|command| {
                command
                    .bindings
                    .first()
                    .map(|binding| format!("{}: {}", binding.label(), command.label))
            })
            .collect::<Vec<_>>()
            .join(" │ ")
    }
}

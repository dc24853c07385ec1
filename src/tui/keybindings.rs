//! Keybinding definitions
//!
//! Defines the keyboard shortcuts shown in the help overlay

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Key as shown to the user
    pub keys: &'static str,
    /// Primary key code
    pub key: KeyCode,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Filter bar shortcuts
    Filter,
    /// Active on the roster list
    Roster,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Filter => "Filters",
            Self::Roster => "Roster",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: "q",
        key: KeyCode::Char('q'),
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "?",
        key: KeyCode::Char('?'),
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "s",
        key: KeyCode::Char('s'),
        description: "Save page as default",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "1-4",
        key: KeyCode::Char('1'),
        description: "All / Paid / Pending / Not paid",
        context: KeyContext::Filter,
    },
    Keybinding {
        keys: "Tab",
        key: KeyCode::Tab,
        description: "Next filter",
        context: KeyContext::Filter,
    },
    Keybinding {
        keys: "j/k",
        key: KeyCode::Char('j'),
        description: "Move selection down/up",
        context: KeyContext::Roster,
    },
    Keybinding {
        keys: "Enter",
        key: KeyCode::Enter,
        description: "Open/close month or select student",
        context: KeyContext::Roster,
    },
    Keybinding {
        keys: "r",
        key: KeyCode::Char('r'),
        description: "Send reminder",
        context: KeyContext::Roster,
    },
    Keybinding {
        keys: "m",
        key: KeyCode::Char('m'),
        description: "Mark as paid",
        context: KeyContext::Roster,
    },
];

/// Keybindings of one context, in definition order
pub fn bindings_for(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |kb| kb.context == context)
}

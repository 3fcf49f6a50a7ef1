//! Keybinding definitions
//!
//! One table feeds both the help dialog and the status-bar hints.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::models::Screen;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    /// Description shown in the help dialog
    pub description: &'static str,
    /// Short label for the status bar; `None` keeps it out of the hints
    pub hint: Option<&'static str>,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside dialogs and the editor
    Global,
    Menu,
    Welcome,
    Biometric,
    Religion,
    Assets,
    Documents,
    Executor,
    Witnesses,
    Success,
    /// Typing into a beneficiary field
    Editing,
}

impl KeyContext {
    /// Context of a wizard screen
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Menu => Self::Menu,
            Screen::Welcome => Self::Welcome,
            Screen::Biometric => Self::Biometric,
            Screen::Religion => Self::Religion,
            Screen::Assets => Self::Assets,
            Screen::Documents => Self::Documents,
            Screen::Executor => Self::Executor,
            Screen::Witnesses => Self::Witnesses,
            Screen::Success => Self::Success,
        }
    }
}

const fn bind(
    key: KeyCode,
    description: &'static str,
    hint: Option<&'static str>,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        modifiers: KeyModifiers::NONE,
        description,
        hint,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('q'), "Quit", Some("Quit"), KeyContext::Global),
    bind(KeyCode::Char('?'), "Help", Some("Help"), KeyContext::Global),
    bind(KeyCode::Esc, "Back one step", Some("Back"), KeyContext::Global),
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit immediately",
        hint: None,
        context: KeyContext::Global,
    },
    // Menu
    bind(KeyCode::Char('j'), "Next service", None, KeyContext::Menu),
    bind(KeyCode::Char('k'), "Previous service", None, KeyContext::Menu),
    bind(KeyCode::Enter, "Open service", Some("Select"), KeyContext::Menu),
    // Welcome
    bind(KeyCode::Char(' '), "Insert MyKad", Some("Insert MyKad"), KeyContext::Welcome),
    bind(KeyCode::Enter, "Proceed", Some("Proceed"), KeyContext::Welcome),
    // Biometric
    bind(KeyCode::Char(' '), "Place thumb on scanner", Some("Scan"), KeyContext::Biometric),
    bind(KeyCode::Enter, "Proceed", Some("Proceed"), KeyContext::Biometric),
    // Religion
    bind(KeyCode::Char('m'), "Muslim", Some("Muslim"), KeyContext::Religion),
    bind(KeyCode::Char('n'), "Non-Muslim", Some("Non-Muslim"), KeyContext::Religion),
    bind(KeyCode::Enter, "Keep current selection", None, KeyContext::Religion),
    // Assets
    bind(KeyCode::Char('j'), "Next beneficiary", None, KeyContext::Assets),
    bind(KeyCode::Char('k'), "Previous beneficiary", None, KeyContext::Assets),
    bind(KeyCode::Char('+'), "Increase share by 1%", Some("+1%"), KeyContext::Assets),
    bind(KeyCode::Char('-'), "Decrease share by 1%", Some("-1%"), KeyContext::Assets),
    bind(KeyCode::Char('p'), "Type a percentage", Some("Type %"), KeyContext::Assets),
    bind(KeyCode::Char('e'), "Edit name", Some("Name"), KeyContext::Assets),
    bind(KeyCode::Char('a'), "Add beneficiary", Some("Add"), KeyContext::Assets),
    bind(KeyCode::Char('x'), "Remove beneficiary", Some("Remove"), KeyContext::Assets),
    bind(KeyCode::Enter, "Continue to Document Upload", Some("Continue"), KeyContext::Assets),
    // Documents
    bind(KeyCode::Char('1'), "Upload Land Title", Some("Land"), KeyContext::Documents),
    bind(KeyCode::Char('2'), "Upload Vehicle Grant", Some("Vehicle"), KeyContext::Documents),
    bind(KeyCode::Char('3'), "Upload Bank Statement", Some("Bank"), KeyContext::Documents),
    bind(KeyCode::Enter, "Continue to Executor Selection", Some("Continue"), KeyContext::Documents),
    // Executor
    bind(KeyCode::Char('1'), "The Smart Contract", Some("Smart Contract"), KeyContext::Executor),
    bind(KeyCode::Char('2'), "Amanah Raya", Some("Amanah Raya"), KeyContext::Executor),
    bind(KeyCode::Char('3'), "Private Individual", Some("Individual"), KeyContext::Executor),
    bind(KeyCode::Enter, "Confirm Selection", Some("Confirm"), KeyContext::Executor),
    // Witnesses
    bind(KeyCode::Tab, "Switch witness", Some("Switch"), KeyContext::Witnesses),
    bind(KeyCode::Char('h'), "Focus Witness 1", None, KeyContext::Witnesses),
    bind(KeyCode::Char('l'), "Focus Witness 2", None, KeyContext::Witnesses),
    bind(KeyCode::Char('i'), "Insert IC", Some("Insert IC"), KeyContext::Witnesses),
    bind(KeyCode::Char('f'), "Scan Fingerprint", Some("Fingerprint"), KeyContext::Witnesses),
    bind(KeyCode::Enter, "Complete Registration", Some("Complete"), KeyContext::Witnesses),
    // Success
    bind(KeyCode::Enter, "Finish / Return to Home", Some("Finish"), KeyContext::Success),
    // Editing
    bind(KeyCode::Enter, "Save", Some("Save"), KeyContext::Editing),
    bind(KeyCode::Esc, "Cancel", Some("Cancel"), KeyContext::Editing),
    bind(KeyCode::Backspace, "Delete previous character", None, KeyContext::Editing),
];

/// Keybindings of exactly one context
pub fn bindings_in(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |kb| kb.context == context)
}

/// Status-bar hints for a context, screen keys before global keys
pub fn hints_for(context: KeyContext) -> Vec<String> {
    let mut contexts = vec![context];
    if context != KeyContext::Editing {
        contexts.push(KeyContext::Global);
    }

    contexts
        .into_iter()
        .flat_map(bindings_in)
        .filter_map(|kb| kb.hint.map(|hint| format!("{}:{}", format_keybinding(kb), hint)))
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        other => format!("{:?}", other),
    };

    parts.push(key_str);
    parts.join("+")
}

//! Application state for the TUI
//!
//! The App struct wraps the wizard with everything that only matters on
//! screen: list selections, the inline field editor, dialogs and toasts.

use crate::config::settings::Settings;
use crate::error::KioskResult;
use crate::journal::JournalLogger;
use crate::models::{KioskService, Percent, WitnessSlot};
use crate::services::Wizard;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmQuit,
}

/// Which beneficiary field the inline editor writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Share,
}

/// Inline editor on the assets screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEditor {
    pub field: EditField,
    pub index: usize,
    pub input: TextInput,
}

/// Longest beneficiary name the editor accepts
const NAME_MAX_LEN: usize = 40;

/// Main application state
pub struct App {
    pub settings: Settings,

    /// Journal sink; `None` when journaling is disabled
    pub journal: Option<JournalLogger>,

    pub wizard: Wizard,

    pub should_quit: bool,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    /// Highlighted tile on the main menu
    pub menu_index: usize,

    /// Highlighted row on the assets screen
    pub beneficiary_index: usize,

    /// Witness card that receives `i` / `f`
    pub witness_focus: WitnessSlot,

    pub editor: Option<FieldEditor>,

    pub notifications: NotificationQueue,

    /// Decorative animation counter, advanced on every tick
    pub animation_frame: usize,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, journal: Option<JournalLogger>) -> Self {
        let mut app = Self {
            settings,
            journal,
            wizard: Wizard::new(),
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            menu_index: default_menu_index(),
            beneficiary_index: 0,
            witness_focus: WitnessSlot::First,
            editor: None,
            notifications: NotificationQueue::new(),
            animation_frame: 0,
        };
        app.flush_journal();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Quit, asking first when a registration would be abandoned
    pub fn request_quit(&mut self) {
        if self.settings.confirm_quit && self.wizard.in_progress() {
            self.open_dialog(ActiveDialog::ConfirmQuit);
        } else {
            self.quit();
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Advance decorative animation and expire toasts
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.notifications.remove_expired();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Persist whatever the wizard recorded since the last flush
    ///
    /// A failing journal never interrupts the citizen; it only raises a toast.
    pub fn flush_journal(&mut self) {
        let entries = self.wizard.drain_events();
        if entries.is_empty() {
            return;
        }
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.log_batch(&entries) {
                self.notify(Notification::error(format!("Journal not saved: {}", e)));
            }
        }
    }

    /// Run a wizard action, turning failures into toasts
    pub fn apply<T>(&mut self, action: impl FnOnce(&mut Wizard) -> KioskResult<T>) -> Option<T> {
        let session = self.wizard.session();
        let result = action(&mut self.wizard);
        self.flush_journal();

        if self.wizard.session() != session {
            self.reset_selection();
        }
        self.clamp_selection();

        match result {
            Ok(value) => Some(value),
            Err(e) if e.is_rejection() => {
                self.notify(Notification::warning(e.to_string()));
                None
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
                None
            }
        }
    }

    /// Forget on-screen selections (used when a new session starts)
    pub fn reset_selection(&mut self) {
        self.menu_index = default_menu_index();
        self.beneficiary_index = 0;
        self.witness_focus = WitnessSlot::First;
        self.cancel_edit();
    }

    fn clamp_selection(&mut self) {
        let count = self.wizard.allocation().len();
        if self.beneficiary_index >= count {
            self.beneficiary_index = count.saturating_sub(1);
        }
    }

    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < KioskService::ALL.len() {
            self.menu_index += 1;
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub fn selected_service(&self) -> KioskService {
        KioskService::ALL[self.menu_index.min(KioskService::ALL.len() - 1)]
    }

    pub fn beneficiary_down(&mut self) {
        if self.beneficiary_index + 1 < self.wizard.allocation().len() {
            self.beneficiary_index += 1;
        }
    }

    pub fn beneficiary_up(&mut self) {
        self.beneficiary_index = self.beneficiary_index.saturating_sub(1);
    }

    /// Open the inline editor on the highlighted beneficiary
    pub fn begin_edit(&mut self, field: EditField) {
        let Some(beneficiary) = self.wizard.allocation().get(self.beneficiary_index) else {
            return;
        };

        let input = match field {
            EditField::Name => TextInput::new()
                .label("Name")
                .placeholder("Beneficiary Name")
                .max_len(NAME_MAX_LEN)
                .content(beneficiary.name.clone()),
            EditField::Share => TextInput::new()
                .label("Percent")
                .placeholder("0.0")
                .max_len(8)
                .content(share_input_text(beneficiary.share)),
        };

        self.editor = Some(FieldEditor {
            field,
            index: self.beneficiary_index,
            input,
        });
        self.input_mode = InputMode::Editing;
    }

    /// Write the editor's text into the wizard and close the editor
    pub fn commit_edit(&mut self) {
        let Some(editor) = self.editor.take() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        self.input_mode = InputMode::Normal;

        let text = editor.input.value().to_string();
        match editor.field {
            EditField::Name => {
                self.apply(|w| w.rename_beneficiary(editor.index, &text));
            }
            EditField::Share => {
                if let Some(stored) = self.apply(|w| w.set_share_from_input(editor.index, &text)) {
                    let typed = Percent::parse_lenient(&text);
                    if typed != stored {
                        self.notify(Notification::info(format!("Adjusted to {}", stored)));
                    }
                }
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.input_mode = InputMode::Normal;
    }
}

fn default_menu_index() -> usize {
    KioskService::ALL
        .iter()
        .position(|s| s.is_available())
        .unwrap_or(0)
}

/// Share as typed into the editor: `50.0%` becomes `50.0`
fn share_input_text(share: Percent) -> String {
    share.to_string().trim_end_matches('%').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Screen;
    use crate::tui::widgets::NotificationKind;
    use tempfile::TempDir;

    fn test_app() -> App {
        App::new(Settings::default(), None)
    }

    fn app_on_assets() -> App {
        let mut app = test_app();
        app.apply(|w| w.select_service(KioskService::DigitalWill));
        app.apply(|w| w.detect_card());
        app.apply(|w| w.advance());
        app.apply(|w| w.scan_fingerprint());
        app.apply(|w| w.advance());
        app.apply(|w| w.select_religion(crate::models::Religion::NonMuslim));
        assert_eq!(app.wizard.screen(), Screen::Assets);
        app
    }

    #[test]
    fn test_menu_starts_on_available_service() {
        let app = test_app();
        assert_eq!(app.selected_service(), KioskService::DigitalWill);
    }

    #[test]
    fn test_quit_without_session_in_progress() {
        let mut app = test_app();
        app.request_quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_mid_session_asks_first() {
        let mut app = test_app();
        app.apply(|w| w.select_service(KioskService::DigitalWill));
        app.request_quit();
        assert!(!app.should_quit);
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmQuit);
    }

    #[test]
    fn test_rejection_becomes_warning_toast() {
        let mut app = test_app();
        assert!(app.apply(|w| w.back()).is_none());
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.kind, NotificationKind::Warning);
    }

    #[test]
    fn test_share_edit_is_clamped_with_notice() {
        let mut app = app_on_assets();
        app.begin_edit(EditField::Share);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.editor.as_ref().unwrap().input.value(), "50.0");

        let editor = app.editor.as_mut().unwrap();
        editor.input.clear();
        for c in "80".chars() {
            editor.input.insert(c);
        }
        app.commit_edit();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.wizard.allocation().get(0).unwrap().share,
            Percent::from_whole(50)
        );
        assert!(app.notifications.current().unwrap().message.contains("50.0%"));
    }

    #[test]
    fn test_name_edit() {
        let mut app = app_on_assets();
        app.beneficiary_down();
        app.begin_edit(EditField::Name);
        let editor = app.editor.as_mut().unwrap();
        editor.input.clear();
        for c in "Ayah".chars() {
            editor.input.insert(c);
        }
        app.commit_edit();
        assert_eq!(app.wizard.allocation().get(1).unwrap().name, "Ayah");
    }

    #[test]
    fn test_selection_clamped_after_remove() {
        let mut app = app_on_assets();
        app.beneficiary_down();
        let index = app.beneficiary_index;
        app.apply(|w| w.remove_beneficiary(index));
        assert_eq!(app.beneficiary_index, 0);
    }

    #[test]
    fn test_events_reach_journal() {
        let temp_dir = TempDir::new().unwrap();
        let logger = JournalLogger::new(temp_dir.path().join("journal.log"));
        let mut app = App::new(Settings::default(), Some(logger.clone()));
        app.apply(|w| w.select_service(KioskService::DigitalWill));

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.session == app.wizard.session()));
    }

    #[test]
    fn test_tick_advances_animation() {
        let mut app = test_app();
        app.tick();
        app.tick();
        assert_eq!(app.animation_frame, 2);
    }
}

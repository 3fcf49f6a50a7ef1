//! Event handler for the TUI
//!
//! Routes keyboard events to the dialog, the inline editor or the handler of
//! the active wizard screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{DocumentKind, ExecutorChoice, Percent, Religion, Screen, WitnessSlot};

use super::app::{ActiveDialog, App, EditField, InputMode};
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }

    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.quit(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
            return;
        }
        KeyCode::Esc => {
            app.cancel_edit();
            return;
        }
        _ => {}
    }

    let Some(editor) = app.editor.as_mut() else {
        app.cancel_edit();
        return;
    };
    let input = &mut editor.input;

    match key.code {
        KeyCode::Char(c) => {
            let accepted = match editor.field {
                EditField::Name => !c.is_control(),
                EditField::Share => c.is_ascii_digit() || matches!(c, '.' | '-' | '%'),
            };
            if accepted {
                input.insert(c);
            }
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.request_quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Esc => {
            app.apply(|w| w.back());
            return;
        }
        _ => {}
    }

    match app.wizard.screen() {
        Screen::Menu => handle_menu_key(app, key),
        Screen::Welcome => handle_device_key(app, key, Screen::Welcome),
        Screen::Biometric => handle_device_key(app, key, Screen::Biometric),
        Screen::Religion => handle_religion_key(app, key),
        Screen::Assets => handle_assets_key(app, key),
        Screen::Documents => handle_documents_key(app, key),
        Screen::Executor => handle_executor_key(app, key),
        Screen::Witnesses => handle_witnesses_key(app, key),
        Screen::Success => handle_success_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.menu_down(),
        KeyCode::Char('k') | KeyCode::Up => app.menu_up(),
        KeyCode::Enter => {
            let service = app.selected_service();
            app.apply(|w| w.select_service(service));
        }
        _ => {}
    }
}

/// Welcome and biometric share one shape: simulate the device, then proceed
fn handle_device_key(app: &mut App, key: KeyEvent, screen: Screen) {
    match key.code {
        KeyCode::Char(' ') => {
            if screen == Screen::Welcome {
                app.apply(|w| w.detect_card());
            } else {
                app.apply(|w| w.scan_fingerprint());
            }
        }
        KeyCode::Enter => {
            app.apply(|w| w.advance());
        }
        _ => {}
    }
}

fn handle_religion_key(app: &mut App, key: KeyEvent) {
    let religion = match key.code {
        KeyCode::Char('m') | KeyCode::Char('M') => Religion::Muslim,
        KeyCode::Char('n') | KeyCode::Char('N') => Religion::NonMuslim,
        KeyCode::Enter => {
            app.apply(|w| w.advance());
            return;
        }
        _ => return,
    };

    let previous_cap = app.wizard.allocation().cap();
    if app.apply(|w| w.select_religion(religion)).is_some()
        && app.wizard.allocation().cap() != previous_cap
        && app.wizard.allocation().total() != Percent::zero()
    {
        app.notify(Notification::info(format!(
            "Shares rescaled to the {} cap",
            religion.cap()
        )));
    }
}

fn handle_assets_key(app: &mut App, key: KeyEvent) {
    let index = app.beneficiary_index;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.beneficiary_down(),
        KeyCode::Char('k') | KeyCode::Up => app.beneficiary_up(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            app.apply(|w| w.increase_share(index));
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
            app.apply(|w| w.decrease_share(index));
        }
        KeyCode::Char('a') => {
            if let Some(added) = app.apply(|w| w.add_beneficiary()) {
                app.beneficiary_index = added;
                app.begin_edit(EditField::Name);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(removed) = app.apply(|w| w.remove_beneficiary(index)) {
                app.notify(Notification::info(format!(
                    "Removed {}",
                    removed.display_name()
                )));
            }
        }
        KeyCode::Char('e') => app.begin_edit(EditField::Name),
        KeyCode::Char('p') => app.begin_edit(EditField::Share),
        KeyCode::Enter => {
            app.apply(|w| w.advance());
        }
        _ => {}
    }
}

fn handle_documents_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ '1'..='3') => {
            let document = DocumentKind::ALL[digit_index(c)];
            app.apply(|w| w.upload_document(document));
        }
        KeyCode::Enter => {
            app.apply(|w| w.advance());
        }
        _ => {}
    }
}

fn handle_executor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ '1'..='3') => {
            let executor = ExecutorChoice::ALL[digit_index(c)];
            app.apply(|w| w.select_executor(executor));
        }
        KeyCode::Enter => {
            app.apply(|w| w.advance());
        }
        _ => {}
    }
}

fn handle_witnesses_key(app: &mut App, key: KeyEvent) {
    let witness = app.witness_focus;
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.witness_focus = witness.other(),
        KeyCode::Char('h') | KeyCode::Left => app.witness_focus = WitnessSlot::First,
        KeyCode::Char('l') | KeyCode::Right => app.witness_focus = WitnessSlot::Second,
        KeyCode::Char('i') => {
            app.apply(|w| w.insert_witness_card(witness));
        }
        KeyCode::Char('f') => {
            if app.apply(|w| w.scan_witness_fingerprint(witness)).is_some()
                && !app.wizard.witness(witness.other()).verified
            {
                app.witness_focus = witness.other();
            }
        }
        KeyCode::Enter => {
            app.apply(|w| w.advance());
        }
        _ => {}
    }
}

fn handle_success_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.apply(|w| w.advance());
    }
}

/// '1'..='3' to 0..=2
fn digit_index(c: char) -> usize {
    (c as usize) - ('1' as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crossterm::event::KeyEventState;

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_key_event(app, key).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_at_assets() -> App {
        let mut app = App::new(Settings::default(), None);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.wizard.screen(), Screen::Assets);
        app
    }

    #[test]
    fn test_full_walk_with_keys() {
        let mut app = app_at_assets();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Documents);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Executor);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.wizard.executor(), Some(ExecutorChoice::AmanahRaya));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Witnesses);

        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.witness_focus, WitnessSlot::Second);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Success);
        assert!(app.wizard.registration().is_some());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Welcome);
        assert_eq!(app.witness_focus, WitnessSlot::First);
    }

    #[test]
    fn test_enter_on_welcome_without_card_stays() {
        let mut app = App::new(Settings::default(), None);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Welcome);
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_menu_navigation_to_unavailable_service() {
        let mut app = App::new(Settings::default(), None);
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Menu);
        assert!(app
            .notifications
            .current()
            .unwrap()
            .message
            .contains("coming soon"));
    }

    #[test]
    fn test_add_beneficiary_opens_name_editor() {
        let mut app = app_at_assets();
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.beneficiary_index, 2);

        type_str(&mut app, "Siti");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.allocation().get(2).unwrap().name, "Siti");

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.wizard.allocation().get(2).unwrap().share,
            Percent::from_whole(1)
        );
        assert!(app.wizard.can_advance());
    }

    #[test]
    fn test_share_editor_ignores_letters() {
        let mut app = app_at_assets();
        press(&mut app, KeyCode::Char('p'));
        type_str(&mut app, "abc");
        assert_eq!(app.editor.as_ref().unwrap().input.value(), "50.0");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.wizard.screen(), Screen::Assets);
    }

    #[test]
    fn test_help_dialog_closes_on_any_key() {
        let mut app = App::new(Settings::default(), None);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_confirm_quit_flow() {
        let mut app = app_at_assets();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmQuit);
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_immediately() {
        let mut app = app_at_assets();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key_event(&mut app, key).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_walks_back() {
        let mut app = app_at_assets();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.wizard.screen(), Screen::Religion);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.screen(), Screen::Assets);
    }
}

//! Chat input handling

use crate::application::input::InputField;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle a terminal event and update the input field.
///
/// While a reply is outstanding Enter is ignored so only one typing
/// placeholder is on screen; editing, scrolling and exit keep working.
pub fn handle_input(input: &mut InputField, awaiting_reply: bool, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(input, awaiting_reply, key),
        _ => InputAction::None,
    }
}

fn handle_key(input: &mut InputField, awaiting_reply: bool, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if ctrl && key.code == KeyCode::Char('c') {
        input.clear();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc => InputAction::Exit,
        KeyCode::Enter => {
            if awaiting_reply || input.text().trim().is_empty() {
                InputAction::None
            } else {
                InputAction::Submit
            }
        }
        KeyCode::Backspace => {
            input.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            input.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            input.move_left();
            InputAction::None
        }
        KeyCode::Right => {
            input.move_right();
            InputAction::None
        }
        KeyCode::Home => {
            input.move_home();
            InputAction::None
        }
        KeyCode::End => {
            input.move_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('u') if ctrl => InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => InputAction::ScrollBottom,
        KeyCode::Char(c) if !ctrl => {
            input.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

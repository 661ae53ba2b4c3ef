use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Quit,
    ToggleHelp,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Select,
    Back,
    FocusInput,
    Input(char),
    InputBackspace,
    InputClear,
    Submit,
    PickTag(usize),
    Refresh,
    OpenLink,
    Retry,
}

pub fn map_key_to_action(key: KeyEvent, editing: bool) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UserAction::Quit),
            KeyCode::Char('u') if editing => Some(UserAction::InputClear),
            _ => None,
        };
    }

    if editing {
        return match key.code {
            KeyCode::Esc => Some(UserAction::Back),
            KeyCode::Enter => Some(UserAction::Submit),
            KeyCode::Backspace => Some(UserAction::InputBackspace),
            KeyCode::Char(c) => Some(UserAction::Input(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UserAction::Quit),
        KeyCode::Char('?') => Some(UserAction::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::NavigateDown),
        KeyCode::Left | KeyCode::Char('h') => Some(UserAction::NavigateLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(UserAction::NavigateRight),
        KeyCode::Enter => Some(UserAction::Select),
        KeyCode::Esc | KeyCode::Char('b') => Some(UserAction::Back),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(UserAction::FocusInput),
        KeyCode::Char('r') => Some(UserAction::Refresh),
        KeyCode::Char('R') => Some(UserAction::Retry),
        KeyCode::Char('o') => Some(UserAction::OpenLink),
        KeyCode::Char(c @ '1'..='7') => Some(UserAction::PickTag(c as usize - '1' as usize)),
        _ => None,
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Select,
    Refresh,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::Down,
        KeyCode::Char('k') | KeyCode::Up => Action::Up,
        KeyCode::Char('h') | KeyCode::Left => Action::Left,
        KeyCode::Char('l') | KeyCode::Right => Action::Right,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_and_arrow_keys_agree() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), map_key(key(KeyCode::Down)));
        assert_eq!(map_key(key(KeyCode::Char('k'))), map_key(key(KeyCode::Up)));
        assert_eq!(map_key(key(KeyCode::Char('h'))), map_key(key(KeyCode::Left)));
        assert_eq!(map_key(key(KeyCode::Char('l'))), map_key(key(KeyCode::Right)));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_does_not() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn refresh_key() {
        assert_eq!(map_key(key(KeyCode::Char('r'))), Action::Refresh);
    }
}

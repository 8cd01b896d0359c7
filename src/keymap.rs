//! Keyboard shortcut handling.
//!
//! Keys are mapped against a small snapshot of the UI state, so the same key
//! can mean different things on different pages (Enter on Home vs. in the menu).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Page;
use crate::gpa::CourseField;

/// What the key handler needs to know about the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub page: Page,
    pub menu_open: bool,
    pub field: CourseField,
}

/// UI actions produced by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    GoTo(Page),
    MenuUp,
    MenuDown,
    MenuSelect,
    GetStarted,
    PreviousRow,
    NextRow,
    SwitchField,
    Decrement,
    Increment,
    CreditInput(char),
    CreditBackspace,
    AddCourse,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent, ctx: KeyContext) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    if let Some(action) = map_global(key.code, ctx) {
        return action;
    }

    if ctx.menu_open {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MenuUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MenuDown,
            KeyCode::Enter => KeyAction::MenuSelect,
            _ => KeyAction::None,
        };
    }

    match ctx.page {
        Page::Home => match key.code {
            KeyCode::Enter => KeyAction::GetStarted,
            _ => KeyAction::None,
        },
        Page::Calculator => map_calculator(key.code, ctx.field),
        Page::Guidance => KeyAction::None,
    }
}

fn map_global(code: KeyCode, ctx: KeyContext) -> Option<KeyAction> {
    let action = match code {
        KeyCode::Esc if ctx.menu_open => KeyAction::CloseMenu,
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('m') => KeyAction::ToggleMenu,
        KeyCode::Char('t') => KeyAction::ToggleTheme,
        KeyCode::Char('h') => KeyAction::GoTo(Page::Home),
        KeyCode::Char('c') => KeyAction::GoTo(Page::Calculator),
        KeyCode::Char('g') => KeyAction::GoTo(Page::Guidance),
        _ => return None,
    };
    Some(action)
}

fn map_calculator(code: KeyCode, field: CourseField) -> KeyAction {
    match code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::PreviousRow,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::NextRow,
        KeyCode::Tab | KeyCode::BackTab => KeyAction::SwitchField,
        KeyCode::Left => KeyAction::Decrement,
        KeyCode::Right => KeyAction::Increment,
        KeyCode::Char('a') => KeyAction::AddCourse,
        KeyCode::Char(c) if field == CourseField::CreditHours && (c.is_ascii_digit() || c == '.') => {
            KeyAction::CreditInput(c)
        }
        KeyCode::Backspace if field == CourseField::CreditHours => KeyAction::CreditBackspace,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(page: Page) -> KeyContext {
        KeyContext {
            page,
            menu_open: false,
            field: CourseField::CreditHours,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q')), ctx(Page::Home)), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Esc), ctx(Page::Calculator)), KeyAction::Quit);

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event, ctx(Page::Guidance)), KeyAction::Quit);
    }

    #[test]
    fn esc_closes_open_menu() {
        let mut context = ctx(Page::Home);
        context.menu_open = true;
        assert_eq!(map_key(press(KeyCode::Esc), context), KeyAction::CloseMenu);
    }

    #[test]
    fn page_keys() {
        assert_eq!(
            map_key(press(KeyCode::Char('c')), ctx(Page::Home)),
            KeyAction::GoTo(Page::Calculator)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('g')), ctx(Page::Calculator)),
            KeyAction::GoTo(Page::Guidance)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('h')), ctx(Page::Guidance)),
            KeyAction::GoTo(Page::Home)
        );
    }

    #[test]
    fn toggle_keys() {
        assert_eq!(map_key(press(KeyCode::Char('t')), ctx(Page::Home)), KeyAction::ToggleTheme);
        assert_eq!(map_key(press(KeyCode::Char('m')), ctx(Page::Home)), KeyAction::ToggleMenu);
    }

    #[test]
    fn menu_navigation() {
        let mut context = ctx(Page::Calculator);
        context.menu_open = true;
        assert_eq!(map_key(press(KeyCode::Down), context), KeyAction::MenuDown);
        assert_eq!(map_key(press(KeyCode::Char('k')), context), KeyAction::MenuUp);
        assert_eq!(map_key(press(KeyCode::Enter), context), KeyAction::MenuSelect);
        // calculator keys are shadowed while the menu is open
        assert_eq!(map_key(press(KeyCode::Char('a')), context), KeyAction::None);
        assert_eq!(map_key(press(KeyCode::Char('3')), context), KeyAction::None);
    }

    #[test]
    fn home_enter_gets_started() {
        assert_eq!(map_key(press(KeyCode::Enter), ctx(Page::Home)), KeyAction::GetStarted);
        assert_eq!(map_key(press(KeyCode::Enter), ctx(Page::Guidance)), KeyAction::None);
    }

    #[test]
    fn calculator_keys() {
        let context = ctx(Page::Calculator);
        assert_eq!(map_key(press(KeyCode::Up), context), KeyAction::PreviousRow);
        assert_eq!(map_key(press(KeyCode::Char('j')), context), KeyAction::NextRow);
        assert_eq!(map_key(press(KeyCode::Tab), context), KeyAction::SwitchField);
        assert_eq!(map_key(press(KeyCode::BackTab), context), KeyAction::SwitchField);
        assert_eq!(map_key(press(KeyCode::Left), context), KeyAction::Decrement);
        assert_eq!(map_key(press(KeyCode::Right), context), KeyAction::Increment);
        assert_eq!(map_key(press(KeyCode::Char('a')), context), KeyAction::AddCourse);
    }

    #[test]
    fn credit_field_accepts_digits_and_point() {
        let context = ctx(Page::Calculator);
        assert_eq!(map_key(press(KeyCode::Char('7')), context), KeyAction::CreditInput('7'));
        assert_eq!(map_key(press(KeyCode::Char('.')), context), KeyAction::CreditInput('.'));
        assert_eq!(map_key(press(KeyCode::Backspace), context), KeyAction::CreditBackspace);
        assert_eq!(map_key(press(KeyCode::Char('-')), context), KeyAction::None);
    }

    #[test]
    fn grade_field_ignores_digits() {
        let mut context = ctx(Page::Calculator);
        context.field = CourseField::GradePoint;
        assert_eq!(map_key(press(KeyCode::Char('7')), context), KeyAction::None);
        assert_eq!(map_key(press(KeyCode::Backspace), context), KeyAction::None);
    }
}

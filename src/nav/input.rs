// Keyboard input mapping for list views.
//
// Translates crossterm key events into `ListNavigator` operations. The
// bindings mirror the dashboard's list views: j/Down and k/Up move the
// cursor, Esc clears the selection. Everything else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::ListNavigator;

/// Apply a keyboard event to the navigator.
///
/// Returns `true` when the key was recognized as a navigation binding
/// (whether or not the cursor actually moved -- focus and list-size guards
/// live in the navigator itself).
pub fn handle_key(nav: &mut ListNavigator, key_event: KeyEvent) -> bool {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    match key_event.code {
        KeyCode::Down | KeyCode::Char('j') => {
            nav.move_down();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            nav.move_up();
            true
        }
        KeyCode::Esc => {
            nav.clear_selection();
            true
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    /// Helper to create a KeyEvent with no modifiers.
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn focused_nav(item_count: usize) -> ListNavigator {
        let mut nav = ListNavigator::new(item_count);
        nav.set_focused(true);
        nav
    }

    #[test]
    fn j_moves_down() {
        let mut nav = focused_nav(3);
        assert!(handle_key(&mut nav, key(KeyCode::Char('j'))));
        assert_eq!(nav.selected_index(), Some(0));
    }

    #[test]
    fn down_arrow_moves_down() {
        let mut nav = focused_nav(3);
        assert!(handle_key(&mut nav, key(KeyCode::Down)));
        assert_eq!(nav.selected_index(), Some(0));
    }

    #[test]
    fn k_moves_up() {
        let mut nav = focused_nav(3);
        assert!(handle_key(&mut nav, key(KeyCode::Char('k'))));
        assert_eq!(nav.selected_index(), Some(2));
    }

    #[test]
    fn up_arrow_moves_up() {
        let mut nav = focused_nav(3);
        assert!(handle_key(&mut nav, key(KeyCode::Up)));
        assert_eq!(nav.selected_index(), Some(2));
    }

    #[test]
    fn esc_clears_selection() {
        let mut nav = focused_nav(3);
        handle_key(&mut nav, key(KeyCode::Char('j')));
        assert!(handle_key(&mut nav, key(KeyCode::Esc)));
        assert_eq!(nav.selected_index(), None);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut nav = focused_nav(3);
        assert!(!handle_key(&mut nav, key(KeyCode::Char('x'))));
        assert_eq!(nav.selected_index(), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut nav = focused_nav(3);
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!handle_key(&mut nav, release));
        assert_eq!(nav.selected_index(), None);
    }

    #[test]
    fn bindings_respect_navigator_focus_guard() {
        let mut nav = ListNavigator::new(3); // unfocused
        assert!(handle_key(&mut nav, key(KeyCode::Char('j'))));
        assert_eq!(nav.selected_index(), None);
    }
}

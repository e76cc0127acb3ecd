//! Keyboard handling for the notice browser
//!
//! Maps key events to outcomes as a pure function of the current mode,
//! keeping the key bindings testable without a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{BrowserAction, BrowserState};

/// Interaction mode, derived from state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserMode {
    /// Modal dismissed; background screen has the keys
    Closed,
    /// Search box has focus; printable keys go to the text input
    Search,
    /// A notice is open in the detail view
    Detail,
    /// Browsing the list
    List,
}

/// Derive the interaction mode from browser state
pub fn browser_mode(state: &BrowserState) -> BrowserMode {
    if !state.is_open {
        BrowserMode::Closed
    } else if state.search_focused {
        BrowserMode::Search
    } else if state.selected.is_some() {
        BrowserMode::Detail
    } else {
        BrowserMode::List
    }
}

/// What a key press should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Apply a state transition
    Dispatch(BrowserAction),
    /// Dismiss the modal
    Close,
    /// Re-open the modal from the background screen
    Reopen,
    /// Quit the TUI
    Exit,
    /// Open the selected notice in $EDITOR (admin)
    EditSelected,
    /// Delete the selected notice (admin)
    DeleteSelected,
    /// Ignore the key
    None,
}

/// Map a key event to an outcome for the given mode.
///
/// Esc dismisses the modal from every open mode, matching the backdrop
/// click and the close button. Returning to the list from the detail
/// view is a separate binding (b, Left, Backspace).
pub fn map_key(
    mode: BrowserMode,
    code: KeyCode,
    modifiers: KeyModifiers,
    admin: bool,
) -> KeyOutcome {
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Exit;
    }

    match mode {
        BrowserMode::Closed => match code {
            KeyCode::Char('o') | KeyCode::Enter => KeyOutcome::Reopen,
            KeyCode::Char('q') => KeyOutcome::Exit,
            _ => KeyOutcome::None,
        },

        BrowserMode::Search => match code {
            KeyCode::Esc => KeyOutcome::Close,
            KeyCode::Enter | KeyCode::Tab => KeyOutcome::Dispatch(BrowserAction::ExitSearch),
            _ => KeyOutcome::None,
        },

        BrowserMode::Detail => match code {
            KeyCode::Esc => KeyOutcome::Close,
            KeyCode::Char('b') | KeyCode::Left | KeyCode::Backspace => {
                KeyOutcome::Dispatch(BrowserAction::Back)
            }
            KeyCode::Char('e') if admin => KeyOutcome::EditSelected,
            KeyCode::Char('d') if admin => KeyOutcome::DeleteSelected,
            KeyCode::Char('q') => KeyOutcome::Exit,
            _ => KeyOutcome::None,
        },

        BrowserMode::List => match code {
            KeyCode::Esc => KeyOutcome::Close,
            KeyCode::Char('/') => KeyOutcome::Dispatch(BrowserAction::FocusSearch),
            KeyCode::Char('j') | KeyCode::Down => KeyOutcome::Dispatch(BrowserAction::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => KeyOutcome::Dispatch(BrowserAction::CursorUp),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
                KeyOutcome::Dispatch(BrowserAction::PrevPage)
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
                KeyOutcome::Dispatch(BrowserAction::NextPage)
            }
            KeyCode::Char('s') => KeyOutcome::Dispatch(BrowserAction::CycleScope),
            KeyCode::Char('y') => KeyOutcome::Dispatch(BrowserAction::CycleYearNext),
            KeyCode::Char('Y') => KeyOutcome::Dispatch(BrowserAction::CycleYearPrev),
            KeyCode::Enter => KeyOutcome::Dispatch(BrowserAction::SelectCursor),
            KeyCode::Char('q') => KeyOutcome::Exit,
            _ => KeyOutcome::None,
        },
    }
}

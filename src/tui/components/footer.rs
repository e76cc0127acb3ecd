//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Esc", "h/l")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Close", "Page")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the notice list inside the browser modal
pub fn list_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_search()
        .add("s", "Scope")
        .add("y/Y", "Year")
        .add("Enter", "Open")
        .add("Esc", "Close")
        .with_quit()
        .build()
}

/// Shortcuts for the notice detail view
pub fn detail_shortcuts(admin: bool) -> Vec<Shortcut> {
    let builder = ShortcutsBuilder::new().add("b/←", "Back").add("Esc", "Close");
    let builder = if admin {
        builder.add("e", "Edit").add("d", "Delete")
    } else {
        builder
    };
    builder.with_quit().build()
}

/// Shortcuts while the search box has focus
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter/Tab", "Done")
        .add("Esc", "Close")
        .with_quit()
        .build()
}

/// Shortcuts shown when the modal is dismissed
pub fn closed_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("o", "Open Notices")
        .add("q", "Quit")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shortcuts_include_filters() {
        let shortcuts = list_shortcuts();
        assert!(shortcuts.iter().any(|s| s.key == "s"));
        assert!(shortcuts.iter().any(|s| s.key == "y/Y"));
        assert!(shortcuts.iter().any(|s| s.key == "Esc"));
    }

    #[test]
    fn test_detail_shortcuts_admin_gated() {
        let viewer = detail_shortcuts(false);
        assert!(!viewer.iter().any(|s| s.key == "e"));
        assert!(!viewer.iter().any(|s| s.key == "d"));

        let admin = detail_shortcuts(true);
        assert!(admin.iter().any(|s| s.key == "e"));
        assert!(admin.iter().any(|s| s.key == "d"));
    }
}

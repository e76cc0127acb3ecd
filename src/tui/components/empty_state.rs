//! Empty state component
//!
//! Centered placeholder shown when there is nothing to list: no storage
//! directory, no notices at all, still loading, or no filter matches.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::PLACARD_DIR;

/// The different empty states the browser can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// No .placard directory found
    #[default]
    NoPlacardDir,
    /// Storage exists but holds no notices
    NoNotices,
    /// Notices are still loading
    Loading,
    /// Filters matched nothing
    NoMatches,
}

/// Decide which empty state applies, if any
pub fn compute_empty_state(
    is_loading: bool,
    dir_exists: bool,
    total_count: usize,
    filtered_count: usize,
) -> Option<EmptyStateKind> {
    if is_loading {
        return Some(EmptyStateKind::Loading);
    }
    if !dir_exists {
        return Some(EmptyStateKind::NoPlacardDir);
    }
    if total_count == 0 {
        return Some(EmptyStateKind::NoNotices);
    }
    if filtered_count == 0 {
        return Some(EmptyStateKind::NoMatches);
    }
    None
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// Which empty state to display
    pub kind: EmptyStateKind,
    /// Search text, shown for the no-matches case
    pub search_text: Option<String>,
}

/// Centered empty state message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (message, hint) = match props.kind {
        EmptyStateKind::NoPlacardDir => (
            format!("No {} directory found", PLACARD_DIR),
            Some("Run `placard init` to create one".to_string()),
        ),
        EmptyStateKind::NoNotices => (
            "No notices yet".to_string(),
            Some("Run `placard create <title>` to add one".to_string()),
        ),
        EmptyStateKind::Loading => ("Loading notices...".to_string(), None),
        EmptyStateKind::NoMatches => {
            let msg = match props.search_text.as_deref() {
                Some(q) if !q.is_empty() => format!("No notices match \"{}\"", q),
                _ => "No notices match the current filters".to_string(),
            };
            (msg, Some("Adjust the search or year filter".to_string()))
        }
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            Text(content: message, color: theme.text)
            #(hint.map(|hint| element! {
                View(margin_top: 1) {
                    Text(content: hint, color: theme.text_dimmed)
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_takes_precedence() {
        assert_eq!(
            compute_empty_state(true, false, 0, 0),
            Some(EmptyStateKind::Loading)
        );
    }

    #[test]
    fn test_no_dir() {
        assert_eq!(
            compute_empty_state(false, false, 0, 0),
            Some(EmptyStateKind::NoPlacardDir)
        );
    }

    #[test]
    fn test_no_matches_vs_no_notices() {
        assert_eq!(
            compute_empty_state(false, true, 0, 0),
            Some(EmptyStateKind::NoNotices)
        );
        assert_eq!(
            compute_empty_state(false, true, 5, 0),
            Some(EmptyStateKind::NoMatches)
        );
        assert_eq!(compute_empty_state(false, true, 5, 3), None);
    }
}

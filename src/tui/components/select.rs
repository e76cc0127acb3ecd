//! Compact inline selector component for filter fields
//!
//! Cycles through a list of options with left/right arrows.
//! Displays as: Label: ◀ value ▶

use iocraft::prelude::*;

use crate::tui::components::Clickable;
use crate::tui::theme::theme;
use crate::types::SearchScope;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// List of options to choose from
    pub options: Vec<String>,
    /// Index of the currently selected option
    pub selected_index: usize,
    /// Whether the selector has focus
    pub has_focus: bool,
    /// Handler invoked when the left arrow is clicked (cycle backward)
    pub on_prev: Option<Handler<()>>,
    /// Handler invoked when the right arrow is clicked (cycle forward)
    pub on_next: Option<Handler<()>>,
}

/// Compact inline selector with arrow indicators
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let label_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let arrow_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: label_color,
                )
            }))
            Clickable(
                on_click: props.on_prev.clone(),
            ) {
                Text(
                    content: "◀",
                    color: arrow_color,
                )
            }
            Text(
                content: current_value,
                color: theme.text,
            )
            Clickable(
                on_click: props.on_next.clone(),
            ) {
                Text(
                    content: "▶",
                    color: arrow_color,
                )
            }
        }
    }
}

/// Helper trait for types that can be used with Select
pub trait Selectable: Sized + Clone + Copy + 'static {
    /// Get all possible values for this type
    fn all_values() -> Vec<Self>;
    /// Get the display string for this value
    fn display(&self) -> String;
    /// Get the index of this value in all_values
    fn index(&self) -> usize;
    /// Get the next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        let next_idx = (self.index() + 1) % values.len();
        values[next_idx]
    }
    /// Get the previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        let prev_idx = if self.index() == 0 {
            values.len() - 1
        } else {
            self.index() - 1
        };
        values[prev_idx]
    }
}

impl Selectable for SearchScope {
    fn all_values() -> Vec<Self> {
        vec![SearchScope::TitleOnly, SearchScope::TitleAndContent]
    }

    fn display(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> usize {
        match self {
            SearchScope::TitleOnly => 0,
            SearchScope::TitleAndContent => 1,
        }
    }
}

/// Get option strings for a selectable type
pub fn options_for<T: Selectable>() -> Vec<String> {
    T::all_values().iter().map(|v| v.display()).collect()
}

/// Option strings for the year facet: "all years" followed by each year
pub fn year_select_options(years: &[String]) -> Vec<String> {
    let mut options = vec!["all years".to_string()];
    options.extend(years.iter().cloned());
    options
}

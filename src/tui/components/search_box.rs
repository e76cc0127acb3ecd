//! Search input component
//!
//! A single-line text input with a "/" prefix. Notice filtering is literal
//! substring matching, applied on every keystroke.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the InlineSearchBox component
#[derive(Default, Props)]
pub struct InlineSearchBoxProps {
    /// State for the search text value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
}

/// Inline search input without borders
#[component]
pub fn InlineSearchBox(props: &InlineSearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;

    // Without a backing state the input has nothing to edit
    let Some(mut value) = props.value else {
        return element! {
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: "/", color: theme.text_dimmed)
            }
        };
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "/",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }

            View(flex_grow: 1.0) {
                TextInput(
                    value: value.to_string(),
                    has_focus: has_focus,
                    on_change: move |new_value| value.set(new_value),
                    color: theme.text,
                )
            }
        }
    }
}

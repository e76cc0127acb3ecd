//! Notice list page component
//!
//! Renders the current page of filtered notices with cursor highlighting,
//! plus the pagination bar shown below the list when there is more than
//! one page.

use iocraft::prelude::*;

use crate::tui::components::Clickable;
use crate::tui::theme::theme;
use crate::types::NoticeMetadata;

/// Props for the NoticeList component
#[derive(Default, Props)]
pub struct NoticeListProps {
    /// Notices on the current page (already filtered and sliced)
    pub notices: Vec<NoticeMetadata>,
    /// Cursor row within the page
    pub cursor: usize,
    /// Whether the list has focus
    pub has_focus: bool,
    /// Handler invoked with the notice id when a row is clicked
    pub on_select: Option<Handler<String>>,
}

/// One page of notices with cursor highlighting
#[component]
pub fn NoticeList(props: &NoticeListProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
        ) {
            #(props.notices.iter().enumerate().map(|(i, notice)| {
                element! {
                    NoticeRow(
                        notice: notice.clone(),
                        is_selected: i == props.cursor,
                        has_focus: props.has_focus && i == props.cursor,
                        on_click: props.on_select.clone(),
                    )
                }
            }))
        }
    }
}

/// Props for a single notice row
#[derive(Default, Props)]
pub struct NoticeRowProps {
    /// The notice to display
    pub notice: NoticeMetadata,
    /// Whether this row is under the cursor
    pub is_selected: bool,
    /// Whether this row has focus
    pub has_focus: bool,
    /// Handler invoked with this notice's id when the row is clicked
    pub on_click: Option<Handler<String>>,
}

/// Single notice row: cursor marker, date, title
///
/// The row hit-tests its own mouse events; the click handler receives
/// this row's notice id.
#[component]
pub fn NoticeRow(props: &NoticeRowProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let notice = &props.notice;

    hooks.use_local_terminal_events({
        let on_click = props.on_click.clone();
        let id = notice.id.clone();
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event
                && matches!(mouse_event.kind, MouseEventKind::Down(_))
                && let (Some(handler), Some(id)) = (&on_click, &id)
            {
                handler(id.clone());
            }
        }
    });

    let title = notice.title.as_deref().unwrap_or("(no title)");
    let date = notice
        .created
        .as_deref()
        .and_then(|c| c.get(..10))
        .unwrap_or("          ");

    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };

    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }

            View(width: 11, flex_shrink: 0.0) {
                Text(
                    content: date,
                    color: if props.is_selected { theme.highlight_text } else { theme.date_color },
                )
            }

            // Title truncates via overflow rather than manual slicing
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(
                    content: format!(" {}", title),
                    color: text_color,
                )
            }
        }
    }
}

/// Props for the PaginationBar component
#[derive(Default, Props)]
pub struct PaginationBarProps {
    /// Current page, 1-based
    pub current_page: usize,
    /// Total page count
    pub total_pages: usize,
    /// Handler for the "previous page" arrow
    pub on_prev: Option<Handler<()>>,
    /// Handler for the "next page" arrow
    pub on_next: Option<Handler<()>>,
}

/// "◀ Page X of Y ▶" bar; the caller hides it when there is one page or fewer
#[component]
pub fn PaginationBar(props: &PaginationBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let at_first = props.current_page <= 1;
    let at_last = props.current_page >= props.total_pages;

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::Center,
            gap: 2,
        ) {
            Clickable(on_click: props.on_prev.clone()) {
                Text(
                    content: "◀",
                    color: if at_first { theme.text_dimmed } else { theme.border_focused },
                )
            }
            Text(
                content: format!("Page {} of {}", props.current_page, props.total_pages),
                color: theme.text,
            )
            Clickable(on_click: props.on_next.clone()) {
                Text(
                    content: "▶",
                    color: if at_last { theme.text_dimmed } else { theme.border_focused },
                )
            }
        }
    }
}

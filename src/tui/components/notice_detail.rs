//! Notice detail component
//!
//! Full view of a single notice: title, creation date, and body text.
//! Shown inside the browser modal in place of the list when a notice
//! is selected.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::NoticeMetadata;

/// Props for the NoticeDetail component
#[derive(Default, Props)]
pub struct NoticeDetailProps {
    /// The notice to display
    pub notice: NoticeMetadata,
    /// Whether admin actions (edit/delete) are available
    pub admin: bool,
}

/// Detail view for a single notice
#[component]
pub fn NoticeDetail(props: &NoticeDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let notice = &props.notice;

    let title = notice.title.clone().unwrap_or_else(|| "(no title)".to_string());
    let id = notice.id.clone().unwrap_or_else(|| "???".to_string());
    let created = notice.created.clone().unwrap_or_default();

    let body = notice.content.trim().to_string();
    let body_lines: Vec<String> = if body.is_empty() {
        vec!["(no content)".to_string()]
    } else {
        body.lines().map(String::from).collect()
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
        ) {
            Text(
                content: title,
                color: theme.title_color,
                weight: Weight::Bold,
            )

            View(flex_direction: FlexDirection::Row, gap: 2, margin_bottom: 1) {
                Text(content: id, color: theme.id_color)
                Text(content: created, color: theme.date_color)
            }

            View(flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                #(body_lines.iter().map(|line| {
                    let content = if line.is_empty() { " ".to_string() } else { line.clone() };
                    element! {
                        Text(content: content, color: theme.text)
                    }
                }))
            }

            #(if props.admin {
                Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: "[e] edit in $EDITOR   [d] delete",
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

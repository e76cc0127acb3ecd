//! Modal container component
//!
//! Standardized modal box with a title bar, content area, and footer.

use iocraft::prelude::*;

use super::Clickable;
use crate::tui::theme::theme;

/// Modal width configuration
#[derive(Clone)]
pub enum ModalWidth {
    Fixed(u32),
    Percent(u32),
}

impl Default for ModalWidth {
    fn default() -> Self {
        Self::Fixed(64)
    }
}

/// Modal height configuration
#[derive(Clone, Default)]
pub enum ModalHeight {
    #[default]
    Auto,
    Fixed(u32),
    Percent(u32),
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: Option<ModalWidth>,
    pub height: Option<ModalHeight>,

    // Header
    pub title: Option<String>,
    pub title_color: Option<Color>,
    /// Handler for the "✕" button; the button renders only when set
    pub on_close: Option<Handler<()>>,

    // Footer
    pub footer_text: Option<String>,

    pub children: Vec<AnyElement<'a>>,
}

/// Modal box with optional close button and footer
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let title_color = props.title_color.unwrap_or(Color::Cyan);
    let width = props.width.clone().unwrap_or_default();
    let height = props.height.clone().unwrap_or_default();

    let has_title = props.title.is_some();
    let has_footer = props.footer_text.is_some();
    let on_close = props.on_close.clone();

    element! {
        View(
            width: match &width {
                ModalWidth::Fixed(n) => Size::Length(*n),
                ModalWidth::Percent(n) => Size::Percent(*n as f32),
            },
            height: match &height {
                ModalHeight::Auto => Size::Auto,
                ModalHeight::Fixed(n) => Size::Length(*n),
                ModalHeight::Percent(n) => Size::Percent(*n as f32),
            },
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: theme.border_focused,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(if has_title {
                let title = props.title.clone().unwrap_or_default();
                let close = on_close.clone();
                Some(element! {
                    View(
                        width: 100pct,
                        padding_bottom: 1,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                        flex_direction: FlexDirection::Row,
                    ) {
                        Text(
                            content: title,
                            color: title_color,
                            weight: Weight::Bold,
                        )
                        View(flex_grow: 1.0)
                        #(close.map(|handler| element! {
                            Clickable(on_click: Some(handler)) {
                                Text(content: "✕", color: theme.text_dimmed)
                            }
                        }))
                    }
                })
            } else {
                None
            })

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(if has_footer {
                let footer = props.footer_text.clone().unwrap_or_default();
                Some(element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: footer, color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_width_default() {
        assert!(matches!(ModalWidth::default(), ModalWidth::Fixed(64)));
    }

    #[test]
    fn test_modal_height_default() {
        assert!(matches!(ModalHeight::default(), ModalHeight::Auto));
    }

    #[test]
    fn test_modal_container_props_default() {
        let props = ModalContainerProps::default();
        assert!(props.title.is_none());
        assert!(props.footer_text.is_none());
        assert!(props.on_close.is_none());
    }
}

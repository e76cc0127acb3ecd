//! Modal overlay component
//!
//! Full-screen positioning layer for modals. The space around the centered
//! content is click-sensitive, so a click outside the modal box can dismiss
//! it the same way Esc does.

use iocraft::prelude::*;

use super::Clickable;

/// Standard backdrop color for all modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Whether to paint a solid backdrop behind the modal (default: false)
    pub show_backdrop: Option<bool>,
    /// Handler invoked when the backdrop (outside the content) is clicked
    pub on_backdrop_click: Option<Handler<()>>,
    /// Children elements to render centered inside the overlay
    pub children: Vec<AnyElement<'a>>,
}

/// Modal overlay that handles centering, backdrop, and outside-click
///
/// The overlay fills the screen. Content is centered; the four spacer
/// regions surrounding it each forward clicks to `on_backdrop_click`,
/// while clicks on the content itself do not.
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let show_backdrop = props.show_backdrop.unwrap_or(false);
    let backdrop_click = props.on_backdrop_click.clone();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            flex_direction: FlexDirection::Column,
            background_color: if show_backdrop { Some(MODAL_BACKDROP) } else { None },
        ) {
            Clickable(on_click: backdrop_click.clone()) {
                View(width: 100pct, flex_grow: 1.0)
            }
            View(width: 100pct, flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
                Clickable(on_click: backdrop_click.clone()) {
                    View(height: 100pct, flex_grow: 1.0)
                }
                #(std::mem::take(&mut props.children))
                Clickable(on_click: backdrop_click.clone()) {
                    View(height: 100pct, flex_grow: 1.0)
                }
            }
            Clickable(on_click: backdrop_click.clone()) {
                View(width: 100pct, flex_grow: 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_backdrop_constant() {
        assert!(matches!(
            MODAL_BACKDROP,
            Color::Rgb {
                r: 30,
                g: 30,
                b: 30
            }
        ));
    }

    #[test]
    fn test_show_backdrop_default() {
        let props = ModalOverlayProps::default();
        assert!(!props.show_backdrop.unwrap_or(false));
    }
}

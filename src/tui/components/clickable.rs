//! Clickable wrapper component for mouse interaction
//!
//! Wraps children with automatic hit-testing via `use_local_terminal_events`,
//! so events arrive only when they fall inside the wrapped region.

use iocraft::prelude::*;

/// Props for the Clickable component
#[derive(Default, Props)]
pub struct ClickableProps<'a> {
    /// Child element to wrap
    pub children: Vec<AnyElement<'a>>,
    /// Handler invoked when the region is clicked
    pub on_click: Option<Handler<()>>,
    /// Handler invoked when the mouse wheel scrolls up
    pub on_scroll_up: Option<Handler<()>>,
    /// Handler invoked when the mouse wheel scrolls down
    pub on_scroll_down: Option<Handler<()>>,
}

/// Generic clickable wrapper with automatic hit-testing
///
/// Mouse down triggers `on_click`; wheel events trigger the scroll handlers.
/// Coordinates are hit-tested against component bounds by the framework, so
/// no manual geometry tracking is needed.
#[component]
pub fn Clickable<'a>(
    props: &mut ClickableProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let on_click = props.on_click.clone();
    let on_scroll_up = props.on_scroll_up.clone();
    let on_scroll_down = props.on_scroll_down.clone();

    hooks.use_local_terminal_events({
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event {
                match mouse_event.kind {
                    MouseEventKind::Down(_) => {
                        if let Some(ref handler) = on_click {
                            handler(());
                        }
                    }
                    MouseEventKind::ScrollUp => {
                        if let Some(ref handler) = on_scroll_up {
                            handler(());
                        }
                    }
                    MouseEventKind::ScrollDown => {
                        if let Some(ref handler) = on_scroll_down {
                            handler(());
                        }
                    }
                    _ => {}
                }
            }
        }
    });

    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}

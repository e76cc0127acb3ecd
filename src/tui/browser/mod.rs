//! Notice browser view (`placard browse`)
//!
//! An interactive modal for browsing notices: literal substring search over
//! title or title+content, a year facet derived from creation dates, and
//! five-per-page pagination. The modal can be dismissed with Esc, a click
//! outside it, or its close button, and re-opened without losing the
//! search text.

pub mod handlers;
pub mod model;

use std::path::Path;
use std::sync::Arc;

use iocraft::prelude::*;
use parking_lot::Mutex;

use crate::notice::{Notice, get_notices_newest_first};
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, InlineSearchBox, ModalContainer, ModalOverlay, ModalWidth,
    NoticeDetail, NoticeList, PaginationBar, Select, Selectable, closed_shortcuts,
    compute_empty_state, detail_shortcuts, list_shortcuts, options_for, search_shortcuts,
    year_select_options,
};
use crate::tui::theme::theme;
use crate::types::{NOTICES_DIR, NoticeMetadata, SearchScope, YearFilter};

use handlers::{KeyOutcome, browser_mode, map_key};
use model::{BrowserAction, BrowserState, compute_browser_view, reduce_browser};

/// Shared slot for an edit request; the TUI exits and the CLI opens $EDITOR
pub type PendingEdit = Arc<Mutex<Option<String>>>;

/// Props for the BrowseScreen component
#[derive(Default, Props)]
pub struct BrowseScreenProps {
    /// Whether admin actions (edit/delete) are enabled
    pub admin: bool,
    /// Slot the screen writes a notice id into before exiting for editing
    pub pending_edit: Option<PendingEdit>,
}

/// Top-level browse screen: background page plus the notice browser modal
///
/// The screen owns the open flag and the notice list. The modal component
/// below stays purely presentational; every state transition runs through
/// the reducer in `model`.
#[component]
pub fn BrowseScreen<'a>(props: &BrowseScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let admin = props.admin;
    let pending_edit = props.pending_edit.clone();

    let mut browser: State<BrowserState> = hooks.use_state(|| BrowserState {
        is_open: true,
        ..Default::default()
    });
    let mut search_query = hooks.use_state(String::new);
    let mut is_loading = hooks.use_state(|| true);
    let mut dir_exists = hooks.use_state(|| false);
    let mut should_exit = hooks.use_state(|| false);
    let mut needs_reload = hooks.use_state(|| false);
    let pending_delete: State<Option<String>> = hooks.use_state(|| None);

    // Async load handler; re-supplies the notice list without touching filters
    let load_handler: Handler<()> = hooks.use_async_handler({
        move |()| {
            let mut browser = browser;
            let mut is_loading = is_loading;
            let mut dir_exists = dir_exists;
            async move {
                let notices = get_notices_newest_first();
                dir_exists.set(Path::new(NOTICES_DIR).exists());
                let mut state = browser.read().clone();
                state.notices = notices;
                browser.set(state);
                is_loading.set(false);
            }
        }
    });

    // Trigger initial load on mount
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(());
    }

    // Async delete handler (admin): remove the file, then reload
    let delete_handler: Handler<String> = hooks.use_async_handler({
        move |id: String| {
            let mut browser = browser;
            let mut needs_reload = needs_reload;
            async move {
                if let Ok(notice) = Notice::find(&id)
                    && notice.delete().is_ok()
                {
                    let state = reduce_browser(browser.read().clone(), BrowserAction::Back);
                    browser.set(state);
                    needs_reload.set(true);
                }
            }
        }
    });

    if needs_reload.get() && !is_loading.get() {
        needs_reload.set(false);
        is_loading.set(true);
        load_handler.clone()(());
    }

    // The text input owns the raw string; fold edits into the reducer so
    // every change resets pagination the same way
    let query_str = search_query.to_string();
    if query_str != browser.read().search_text {
        let state = reduce_browser(
            browser.read().clone(),
            BrowserAction::UpdateSearch(query_str.clone()),
        );
        browser.set(state);
    }

    // Mouse handlers for the modal chrome
    let close_handler: Handler<()> = hooks.use_async_handler({
        move |()| {
            let mut browser = browser;
            async move {
                let state = reduce_browser(browser.read().clone(), BrowserAction::Closed);
                browser.set(state);
            }
        }
    });
    let prev_page_handler: Handler<()> = hooks.use_async_handler({
        move |()| {
            let mut browser = browser;
            async move {
                let state = reduce_browser(browser.read().clone(), BrowserAction::PrevPage);
                browser.set(state);
            }
        }
    });
    let next_page_handler: Handler<()> = hooks.use_async_handler({
        move |()| {
            let mut browser = browser;
            async move {
                let state = reduce_browser(browser.read().clone(), BrowserAction::NextPage);
                browser.set(state);
            }
        }
    });
    let scope_handler: Handler<()> = hooks.use_async_handler({
        move |()| {
            let mut browser = browser;
            async move {
                let state = reduce_browser(browser.read().clone(), BrowserAction::CycleScope);
                browser.set(state);
            }
        }
    });
    let year_prev_handler: Handler<()> = hooks.use_async_handler({
        move |()| {
            let mut browser = browser;
            async move {
                let state = reduce_browser(browser.read().clone(), BrowserAction::CycleYearPrev);
                browser.set(state);
            }
        }
    });
    let year_next_handler: Handler<()> = hooks.use_async_handler({
        move |()| {
            let mut browser = browser;
            async move {
                let state = reduce_browser(browser.read().clone(), BrowserAction::CycleYearNext);
                browser.set(state);
            }
        }
    });
    let select_handler: Handler<String> = hooks.use_async_handler({
        move |id: String| {
            let mut browser = browser;
            async move {
                let state = reduce_browser(browser.read().clone(), BrowserAction::SelectId(id));
                browser.set(state);
            }
        }
    });

    // Keyboard event handling
    hooks.use_terminal_events({
        let pending_edit = pending_edit.clone();
        move |event| {
            let mut browser = browser;
            let mut should_exit = should_exit;
            let mut search_query = search_query;
            let mut pending_delete = pending_delete;

            if let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
                && kind != KeyEventKind::Release
            {
                let state = browser.read().clone();
                let mode = browser_mode(&state);

                match map_key(mode, code, modifiers, admin) {
                    KeyOutcome::Dispatch(action) => {
                        browser.set(reduce_browser(state, action));
                    }
                    KeyOutcome::Close => {
                        browser.set(reduce_browser(state, BrowserAction::Closed));
                    }
                    KeyOutcome::Reopen => {
                        // Keep the text input in sync with the retained search
                        search_query.set(state.search_text.clone());
                        browser.set(reduce_browser(state, BrowserAction::Opened));
                    }
                    KeyOutcome::Exit => {
                        should_exit.set(true);
                    }
                    KeyOutcome::EditSelected => {
                        if let Some(id) = state.selected.clone() {
                            if let Some(slot) = &pending_edit {
                                *slot.lock() = Some(id);
                            }
                            should_exit.set(true);
                        }
                    }
                    KeyOutcome::DeleteSelected => {
                        if let Some(id) = state.selected.clone() {
                            pending_delete.set(Some(id));
                        }
                    }
                    KeyOutcome::None => {}
                }
            }
        }
    });

    // Run a queued delete outside the event closure
    let queued_delete = pending_delete.read().clone();
    if let Some(id) = queued_delete {
        let mut pending_delete = pending_delete;
        pending_delete.set(None);
        delete_handler.clone()(id);
    }

    if should_exit.get() {
        system.exit();
    }

    let state = browser.read().clone();
    let view = compute_browser_view(&state);
    let mode = browser_mode(&state);

    let shortcuts = match mode {
        handlers::BrowserMode::Closed => closed_shortcuts(),
        handlers::BrowserMode::Search => search_shortcuts(),
        handlers::BrowserMode::Detail => detail_shortcuts(admin),
        handlers::BrowserMode::List => list_shortcuts(),
    };

    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            // Header bar
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(
                    content: "Placard - Notices",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(
                    content: if is_loading.get() {
                        "Loading...".to_string()
                    } else {
                        format!("{} notices", state.notices.len())
                    },
                    color: theme.text_dimmed,
                )
            }

            // Background page; visible when the modal is dismissed
            View(
                flex_grow: 1.0,
                width: 100pct,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(
                    content: "Press [o] to open the notice board",
                    color: theme.text_dimmed,
                )
            }

            Footer(shortcuts: shortcuts)

            // The browser modal
            #(if state.is_open {
                Some(element! {
                    NoticeBrowser(
                        page_notices: view.page_notices.clone(),
                        filtered_count: view.filtered_count,
                        total_count: state.notices.len(),
                        total_pages: view.total_pages,
                        current_page: view.current_page,
                        cursor: view.cursor,
                        year_options: view.year_options.clone(),
                        selected: view.selected.clone(),
                        show_pagination: view.show_pagination,
                        search_value: Some(search_query),
                        search_focused: state.search_focused,
                        scope: state.search_scope,
                        year_filter: state.year_filter.clone(),
                        admin: admin,
                        is_loading: is_loading.get(),
                        dir_exists: dir_exists.get(),
                        on_close: Some(close_handler.clone()),
                        on_prev_page: Some(prev_page_handler.clone()),
                        on_next_page: Some(next_page_handler.clone()),
                        on_scope_cycle: Some(scope_handler.clone()),
                        on_year_prev: Some(year_prev_handler.clone()),
                        on_year_next: Some(year_next_handler.clone()),
                        on_select: Some(select_handler.clone()),
                    )
                })
            } else {
                None
            })
        }
    }
}

/// Props for the NoticeBrowser modal
#[derive(Default, Props)]
pub struct NoticeBrowserProps {
    /// Notices on the effective page
    pub page_notices: Vec<NoticeMetadata>,
    /// Count of notices matching the filters
    pub filtered_count: usize,
    /// Count of all notices before filtering
    pub total_count: usize,
    /// Total pages after filtering
    pub total_pages: usize,
    /// Effective page, 1-based
    pub current_page: usize,
    /// Cursor row within the page
    pub cursor: usize,
    /// Year facet options
    pub year_options: Vec<String>,
    /// Notice shown in the detail view, if any
    pub selected: Option<NoticeMetadata>,
    /// Whether to render the pagination bar
    pub show_pagination: bool,
    /// Search text state, shared with the screen
    pub search_value: Option<State<String>>,
    /// Whether the search box has focus
    pub search_focused: bool,
    /// Current search scope
    pub scope: SearchScope,
    /// Current year filter
    pub year_filter: YearFilter,
    /// Whether admin affordances are shown
    pub admin: bool,
    /// Whether notices are still loading
    pub is_loading: bool,
    /// Whether the storage directory exists
    pub dir_exists: bool,

    /// Dismiss the modal (Esc, backdrop click, and close button share this)
    pub on_close: Option<Handler<()>>,
    pub on_prev_page: Option<Handler<()>>,
    pub on_next_page: Option<Handler<()>>,
    pub on_scope_cycle: Option<Handler<()>>,
    pub on_year_prev: Option<Handler<()>>,
    pub on_year_next: Option<Handler<()>>,
    /// Open a notice's detail view, invoked with the clicked row's id
    pub on_select: Option<Handler<String>>,
}

/// The notice browser modal: filter row, notice list, pagination, detail
#[component]
pub fn NoticeBrowser(props: &NoticeBrowserProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let year_index = match &props.year_filter {
        YearFilter::All => 0,
        YearFilter::Year(y) => props
            .year_options
            .iter()
            .position(|v| v == y)
            .map(|i| i + 1)
            .unwrap_or(0),
    };

    let empty_kind = compute_empty_state(
        props.is_loading,
        props.dir_exists,
        props.total_count,
        props.filtered_count,
    );
    // Only loading/no-dir are full-height here; an empty filter result keeps
    // the filter row visible so the user can widen it again
    let full_empty = matches!(
        empty_kind,
        Some(EmptyStateKind::Loading) | Some(EmptyStateKind::NoPlacardDir)
    );

    let search_text = props
        .search_value
        .map(|v| v.to_string())
        .unwrap_or_default();
    let showing_detail = props.selected.is_some();

    element! {
        ModalOverlay(
            show_backdrop: true,
            on_backdrop_click: props.on_close.clone(),
        ) {
            ModalContainer(
                width: ModalWidth::Percent(72),
                title: "Notices".to_string(),
                on_close: props.on_close.clone(),
                footer_text: format!(
                    "{} matching {}",
                    props.filtered_count,
                    if props.filtered_count == 1 { "notice" } else { "notices" },
                ),
            ) {
                #(if let Some(notice) = props.selected.clone() {
                    // Detail view replaces the list but keeps the modal chrome
                    Some(element! {
                        NoticeDetail(notice: notice, admin: props.admin)
                    })
                } else {
                    None
                })

                #(if !showing_detail && !full_empty {
                    Some(element! {
                        View(flex_direction: FlexDirection::Column, width: 100pct) {
                            // Filter row: search, scope, year
                            View(
                                width: 100pct,
                                flex_direction: FlexDirection::Row,
                                gap: 3,
                                margin_bottom: 1,
                            ) {
                                View(flex_grow: 1.0) {
                                    InlineSearchBox(
                                        value: props.search_value,
                                        has_focus: props.search_focused,
                                    )
                                }
                                Select(
                                    label: "in",
                                    options: options_for::<SearchScope>(),
                                    selected_index: props.scope.index(),
                                    on_prev: props.on_scope_cycle.clone(),
                                    on_next: props.on_scope_cycle.clone(),
                                )
                                Select(
                                    label: "year",
                                    options: year_select_options(&props.year_options),
                                    selected_index: year_index,
                                    on_prev: props.on_year_prev.clone(),
                                    on_next: props.on_year_next.clone(),
                                )
                            }

                            #(if props.filtered_count == 0 {
                                Some(element! {
                                    View(height: 5, width: 100pct) {
                                        EmptyState(
                                            kind: empty_kind.unwrap_or(EmptyStateKind::NoMatches),
                                            search_text: Some(search_text.clone()),
                                        )
                                    }
                                }.into_any())
                            } else {
                                Some(element! {
                                    NoticeList(
                                        notices: props.page_notices.clone(),
                                        cursor: props.cursor,
                                        has_focus: !props.search_focused,
                                        on_select: props.on_select.clone(),
                                    )
                                }.into_any())
                            })

                            #(if props.show_pagination {
                                Some(element! {
                                    View(margin_top: 1, width: 100pct) {
                                        PaginationBar(
                                            current_page: props.current_page,
                                            total_pages: props.total_pages,
                                            on_prev: props.on_prev_page.clone(),
                                            on_next: props.on_next_page.clone(),
                                        )
                                    }
                                })
                            } else {
                                None
                            })
                        }
                    })
                } else {
                    None
                })

                #(if !showing_detail && full_empty {
                    Some(element! {
                        View(height: 7, width: 100pct) {
                            EmptyState(kind: empty_kind.unwrap_or_default())
                        }
                    })
                } else {
                    None
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_edit_slot() {
        let slot: PendingEdit = Arc::new(Mutex::new(None));
        *slot.lock() = Some("n-a1b2".to_string());
        assert_eq!(slot.lock().clone(), Some("n-a1b2".to_string()));
    }
}

//! NoticeBrowser model types for testable state management
//!
//! This module separates state (BrowserState) from view (BrowserViewModel)
//! enabling comprehensive unit testing without the iocraft framework.

use crate::types::{NoticeMetadata, SearchScope, YearFilter};

/// Notices are listed five to a page
pub const PAGE_SIZE: usize = 5;

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct BrowserState {
    /// Notices supplied by the caller, in caller order
    pub notices: Vec<NoticeMetadata>,
    /// Whether the modal is visible (owned by the caller, observed here)
    pub is_open: bool,
    /// Current search text (literal, case-sensitive substring)
    pub search_text: String,
    /// Whether the search matches title only or title and content
    pub search_scope: SearchScope,
    /// Year facet derived from notice creation dates
    pub year_filter: YearFilter,
    /// Current page, 1-based
    pub current_page: usize,
    /// Cursor row within the current page
    pub cursor: usize,
    /// ID of the notice shown in the detail view, if any
    pub selected: Option<String>,
    /// Whether the search box has keyboard focus
    pub search_focused: bool,
}

impl Default for BrowserState {
    fn default() -> Self {
        BrowserState {
            notices: Vec::new(),
            is_open: false,
            search_text: String::new(),
            search_scope: SearchScope::default(),
            year_filter: YearFilter::default(),
            current_page: 1,
            cursor: 0,
            selected: None,
            search_focused: false,
        }
    }
}

/// All possible actions on the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    // Filters (each resets to page 1)
    /// Replace the search text
    UpdateSearch(String),
    /// Toggle between title-only and title+content search
    CycleScope,
    /// Advance the year filter to the next option (wrapping)
    CycleYearNext,
    /// Move the year filter to the previous option (wrapping)
    CycleYearPrev,

    // Pagination
    /// Go to the next page (no-op on the last page)
    NextPage,
    /// Go to the previous page (no-op on page 1)
    PrevPage,
    /// Jump to a specific page (clamped into range)
    GoToPage(usize),

    // List navigation
    /// Move the cursor up within the page
    CursorUp,
    /// Move the cursor down within the page
    CursorDown,

    // Selection
    /// Open the detail view for the notice under the cursor
    SelectCursor,
    /// Open the detail view for a specific notice id
    SelectId(String),
    /// Leave the detail view, returning to the list at the same page
    Back,

    // Search focus
    /// Focus the search box
    FocusSearch,
    /// Exit search mode, keeping the text
    ExitSearch,

    // Visibility (driven by the caller's open flag)
    /// The modal became visible
    Opened,
    /// The modal was hidden; transient selection state is cleared
    Closed,
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct BrowserViewModel {
    /// Notices on the effective page, in caller order
    pub page_notices: Vec<NoticeMetadata>,
    /// Total notices matching the current filters
    pub filtered_count: usize,
    /// ceil(filtered_count / PAGE_SIZE); 0 when nothing matches
    pub total_pages: usize,
    /// Requested page clamped into [1, max(total_pages, 1)]
    pub current_page: usize,
    /// Cursor clamped to the page slice
    pub cursor: usize,
    /// Distinct years present in the input, in first-appearance order
    pub year_options: Vec<String>,
    /// Selected notice resolved against the current input, if still present
    pub selected: Option<NoticeMetadata>,
    /// Pagination controls are hidden at one page or fewer
    pub show_pagination: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Whether a single notice matches the search text, scope, and year filter.
///
/// Matching is literal substring containment with no case folding or
/// trimming; empty search text matches everything.
pub fn notice_matches(
    notice: &NoticeMetadata,
    search_text: &str,
    scope: SearchScope,
    year_filter: &YearFilter,
) -> bool {
    let in_title = notice.title.as_deref().unwrap_or("").contains(search_text);
    let text_match = match scope {
        SearchScope::TitleOnly => in_title,
        SearchScope::TitleAndContent => in_title || notice.content.contains(search_text),
    };

    text_match && year_filter.matches(notice.year().as_deref())
}

/// Filter notices by the conjunctive predicate, preserving input order
pub fn filter_notices(
    notices: &[NoticeMetadata],
    search_text: &str,
    scope: SearchScope,
    year_filter: &YearFilter,
) -> Vec<NoticeMetadata> {
    notices
        .iter()
        .filter(|n| notice_matches(n, search_text, scope, year_filter))
        .cloned()
        .collect()
}

/// Distinct years present in the input, in first-appearance order.
/// Notices with an unrecognizable year contribute no option.
pub fn year_options(notices: &[NoticeMetadata]) -> Vec<String> {
    let mut years = Vec::new();
    for notice in notices {
        if let Some(year) = notice.year()
            && !years.contains(&year)
        {
            years.push(year);
        }
    }
    years
}

/// Number of pages for a filtered count (0 when the count is 0)
pub fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE)
}

/// Clamp a requested page into the valid range for the given page count
fn effective_page(requested: usize, pages: usize) -> usize {
    requested.clamp(1, pages.max(1))
}

/// Pure function: compute view model from state
///
/// All the logic for filtering, paginating, and resolving the selection
/// lives here. The selection is re-resolved against the current notices
/// on every computation, so a notice deleted by the caller simply stops
/// resolving rather than dangling.
pub fn compute_browser_view(state: &BrowserState) -> BrowserViewModel {
    let filtered = filter_notices(
        &state.notices,
        &state.search_text,
        state.search_scope,
        &state.year_filter,
    );
    let filtered_count = filtered.len();
    let pages = total_pages(filtered_count);
    let page = effective_page(state.current_page, pages);

    let start = (page - 1) * PAGE_SIZE;
    let page_notices: Vec<NoticeMetadata> =
        filtered.into_iter().skip(start).take(PAGE_SIZE).collect();

    let cursor = if page_notices.is_empty() {
        0
    } else {
        state.cursor.min(page_notices.len() - 1)
    };

    let selected = state.selected.as_ref().and_then(|id| {
        state
            .notices
            .iter()
            .find(|n| n.id.as_ref() == Some(id))
            .cloned()
    });

    BrowserViewModel {
        page_notices,
        filtered_count,
        total_pages: pages,
        current_page: page,
        cursor,
        year_options: year_options(&state.notices),
        selected,
        show_pagination: pages > 1,
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Contains only synchronous state transitions; deletion and editing go
/// through caller-supplied handlers, not through here.
pub fn reduce_browser(mut state: BrowserState, action: BrowserAction) -> BrowserState {
    match action {
        // Every filter change restarts at page 1
        BrowserAction::UpdateSearch(text) => {
            state.search_text = text;
            state.current_page = 1;
            state.cursor = 0;
        }
        BrowserAction::CycleScope => {
            state.search_scope = match state.search_scope {
                SearchScope::TitleOnly => SearchScope::TitleAndContent,
                SearchScope::TitleAndContent => SearchScope::TitleOnly,
            };
            state.current_page = 1;
            state.cursor = 0;
        }
        BrowserAction::CycleYearNext => {
            state.year_filter = cycle_year(&state.notices, &state.year_filter, 1);
            state.current_page = 1;
            state.cursor = 0;
        }
        BrowserAction::CycleYearPrev => {
            state.year_filter = cycle_year(&state.notices, &state.year_filter, -1);
            state.current_page = 1;
            state.cursor = 0;
        }

        BrowserAction::NextPage => {
            let view = compute_browser_view(&state);
            if view.current_page < view.total_pages {
                state.current_page = view.current_page + 1;
                state.cursor = 0;
            }
        }
        BrowserAction::PrevPage => {
            let view = compute_browser_view(&state);
            if view.current_page > 1 {
                state.current_page = view.current_page - 1;
                state.cursor = 0;
            }
        }
        BrowserAction::GoToPage(page) => {
            let view = compute_browser_view(&state);
            state.current_page = effective_page(page, view.total_pages);
            state.cursor = 0;
        }

        BrowserAction::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        BrowserAction::CursorDown => {
            let view = compute_browser_view(&state);
            let max_row = view.page_notices.len().saturating_sub(1);
            state.cursor = (state.cursor + 1).min(max_row);
        }

        // Selection preserves the page so "back" lands where the user left
        BrowserAction::SelectCursor => {
            let view = compute_browser_view(&state);
            if let Some(notice) = view.page_notices.get(view.cursor) {
                state.selected = notice.id.clone();
            }
        }
        BrowserAction::SelectId(id) => {
            if state.notices.iter().any(|n| n.id.as_deref() == Some(&id)) {
                state.selected = Some(id);
            }
        }
        BrowserAction::Back => {
            state.selected = None;
        }

        BrowserAction::FocusSearch => {
            state.search_focused = true;
        }
        BrowserAction::ExitSearch => {
            state.search_focused = false;
        }

        BrowserAction::Opened => {
            state.is_open = true;
        }
        BrowserAction::Closed => {
            state.is_open = false;
            state.selected = None;
            state.search_focused = false;
        }
    }
    state
}

/// Step the year filter through [all, year1, year2, ...] with wrapping
fn cycle_year(notices: &[NoticeMetadata], current: &YearFilter, step: isize) -> YearFilter {
    let years = year_options(notices);
    // Option 0 is the "all" sentinel
    let option_count = years.len() + 1;

    let current_idx = match current {
        YearFilter::All => 0,
        YearFilter::Year(y) => years.iter().position(|v| v == y).map(|i| i + 1).unwrap_or(0),
    };

    let next_idx = (current_idx as isize + step).rem_euclid(option_count as isize) as usize;
    if next_idx == 0 {
        YearFilter::All
    } else {
        YearFilter::Year(years[next_idx - 1].clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Reusable TUI components for the notice browser

pub mod clickable;
pub mod empty_state;
pub mod footer;
pub mod modal_container;
pub mod modal_overlay;
pub mod notice_detail;
pub mod notice_list;
pub mod search_box;
pub mod select;
pub mod shortcuts;

pub use clickable::{Clickable, ClickableProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps, compute_empty_state};
pub use footer::{
    Footer, FooterProps, Shortcut, closed_shortcuts, detail_shortcuts, list_shortcuts,
    search_shortcuts,
};
pub use modal_container::{ModalContainer, ModalContainerProps, ModalHeight, ModalWidth};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use notice_detail::{NoticeDetail, NoticeDetailProps};
pub use notice_list::{NoticeList, NoticeListProps, NoticeRow, NoticeRowProps, PaginationBar, PaginationBarProps};
pub use search_box::{InlineSearchBox, InlineSearchBoxProps};
pub use select::{Select, SelectProps, Selectable, options_for, year_select_options};
pub use shortcuts::ShortcutsBuilder;

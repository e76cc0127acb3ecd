pub mod commands;
pub mod error;
pub mod judging;
pub mod notice;
pub mod parser;
pub mod tui;
pub mod types;
pub mod utils;
pub mod works;

pub use error::{PlacardError, Result};
pub use notice::{Notice, get_all_notices, get_notices_newest_first};
pub use parser::parse_notice_content;
pub use types::{
    JUDGES_DIR, NOTICES_DIR, NoticeMetadata, PLACARD_DIR, SCORES_FILE, SearchScope, WORKS_DIR,
    YearFilter,
};

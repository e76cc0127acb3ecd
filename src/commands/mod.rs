mod browse;
pub mod create;
mod edit;
mod init;
mod judge;
mod ls;
mod works;

pub use browse::cmd_browse;
pub use create::cmd_create;
pub use edit::cmd_edit;
pub use init::cmd_init;
pub use judge::{cmd_judge_add, cmd_judge_ls, cmd_judge_score};
pub use ls::{cmd_delete, cmd_ls, cmd_show};
pub use works::{cmd_works_add, cmd_works_ls};

use crate::types::NoticeMetadata;
use owo_colors::OwoColorize;

/// Format a notice for single-line display
pub fn format_notice_line(notice: &NoticeMetadata) -> String {
    let id = notice.id.as_deref().unwrap_or("???");
    let id_padded = format!("{:8}", id);

    let date = notice
        .created
        .as_deref()
        .and_then(|c| c.get(..10))
        .unwrap_or("          ");

    let title = notice.title.as_deref().unwrap_or("");

    format!(
        "{} {} - {}",
        id_padded.cyan(),
        date.magenta(),
        title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_notice_line_contains_fields() {
        let notice = NoticeMetadata {
            id: Some("n-a1b2".to_string()),
            title: Some("Roof repairs".to_string()),
            content: String::new(),
            created: Some("2024-04-01T09:00:00Z".to_string()),
            file_path: None,
        };
        let line = format_notice_line(&notice);
        assert!(line.contains("n-a1b2"));
        assert!(line.contains("2024-04-01"));
        assert!(line.contains("Roof repairs"));
    }

    #[test]
    fn test_format_notice_line_missing_fields() {
        let line = format_notice_line(&NoticeMetadata::default());
        assert!(line.contains("???"));
    }
}

use std::path::PathBuf;

use crate::error::Result;
use crate::notice::Notice;
use crate::types::NOTICES_DIR;
use crate::utils::{ensure_dir, generate_id, is_stdin_tty, iso_date, read_stdin};

/// Create a new notice file and print its id
///
/// Body text comes from `-m`, or from stdin when piped; otherwise the
/// notice starts with an empty body for later editing.
pub fn cmd_create(title: &str, content: Option<&str>) -> Result<()> {
    let body = match content {
        Some(text) => text.to_string(),
        None if !is_stdin_tty() => read_stdin()?.trim().to_string(),
        None => String::new(),
    };

    let id = generate_id("n");
    let created = iso_date();

    let file_content = render_notice(&id, &created, title, &body);

    ensure_dir(NOTICES_DIR)?;
    let file_path = PathBuf::from(NOTICES_DIR).join(format!("{}.md", id));
    let notice = Notice::new(file_path);
    notice.write(&file_content)?;

    println!("{}", id);
    Ok(())
}

/// Render a notice file: frontmatter, title heading, body
fn render_notice(id: &str, created: &str, title: &str, body: &str) -> String {
    let mut content = format!(
        "---\nid: {}\ncreated: {}\n---\n\n# {}\n",
        id, created, title
    );
    if !body.is_empty() {
        content.push('\n');
        content.push_str(body);
        content.push('\n');
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_notice_content;

    #[test]
    fn test_render_notice_roundtrips() {
        let content = render_notice("n-a1b2", "2024-04-01T09:00:00Z", "Roof repairs", "Expect noise.");
        let metadata = parse_notice_content(&content).unwrap();
        assert_eq!(metadata.id, Some("n-a1b2".to_string()));
        assert_eq!(metadata.created, Some("2024-04-01T09:00:00Z".to_string()));
        assert_eq!(metadata.title, Some("Roof repairs".to_string()));
        assert_eq!(metadata.content.trim(), "Expect noise.");
    }

    #[test]
    fn test_render_notice_empty_body() {
        let content = render_notice("n-a1b2", "2024-04-01T09:00:00Z", "Roof repairs", "");
        let metadata = parse_notice_content(&content).unwrap();
        assert_eq!(metadata.title, Some("Roof repairs".to_string()));
        assert_eq!(metadata.content.trim(), "");
    }
}

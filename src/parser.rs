use regex::Regex;

use crate::error::{PlacardError, Result};
use crate::types::NoticeMetadata;

/// Split a record file into its frontmatter and body.
///
/// The format is:
/// ```text
/// ---
/// key: value
/// ---
/// # Title
///
/// Body content...
/// ```
pub fn split_frontmatter(content: &str) -> Result<(&str, &str)> {
    let frontmatter_re = Regex::new(r"(?s)^---\n(.*?)\n---\n(.*)$").unwrap();

    let captures = frontmatter_re
        .captures(content)
        .ok_or_else(|| PlacardError::InvalidFormat("missing frontmatter".to_string()))?;

    let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");
    Ok((yaml, body))
}

/// Extract the title (first `#` heading) and the remaining body text.
pub fn split_title(body: &str) -> (Option<String>, String) {
    let title_re = Regex::new(r"(?m)^#\s+(.*)$").unwrap();
    let title = title_re
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let content = title_re.replace(body, "").trim().to_string();
    (title, content)
}

/// Parse a notice file's content into NoticeMetadata.
pub fn parse_notice_content(content: &str) -> Result<NoticeMetadata> {
    let (yaml, body) = split_frontmatter(content)?;

    let mut metadata = NoticeMetadata::default();

    let line_re = Regex::new(r"^(\w[-\w]*):\s*(.*)$").unwrap();
    for line in yaml.lines() {
        if let Some(caps) = line_re.captures(line) {
            let key = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let value = caps.get(2).map(|m| m.as_str()).unwrap_or("");

            match key {
                "id" => metadata.id = Some(value.to_string()),
                "created" => metadata.created = Some(value.to_string()),
                _ => {} // Ignore unknown fields
            }
        }
    }

    let (title, text) = split_title(body);
    metadata.title = title;
    metadata.content = text;

    Ok(metadata)
}

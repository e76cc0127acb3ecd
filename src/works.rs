//! Work (submission) records.
//!
//! Works are the project entries listed on the public site. They live as
//! frontmatter files under `.placard/works/`, keyed by a numeric id that
//! grows monotonically, and are listed newest-id first with an optional
//! title-substring search.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PlacardError, Result};
use crate::parser::{split_frontmatter, split_title};
use crate::types::WORKS_DIR;
use crate::utils::{ensure_dir, iso_date};

/// Works are listed ten to a page, matching the public site.
pub const WORKS_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkMetadata {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Parse a work file's content
fn parse_work_content(content: &str) -> Result<WorkMetadata> {
    let (yaml, body) = split_frontmatter(content)?;

    let mut metadata = WorkMetadata::default();
    for line in yaml.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim();
            match key.trim() {
                "id" => {
                    metadata.id = value
                        .parse()
                        .map_err(|_| PlacardError::InvalidFormat(format!("bad work id: {}", value)))?;
                }
                "created" => metadata.created = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let (title, _) = split_title(body);
    metadata.title = title;
    Ok(metadata)
}

/// Load every work record, skipping files that fail to parse
pub fn get_all_works() -> Vec<WorkMetadata> {
    let Ok(entries) = fs::read_dir(WORKS_DIR) else {
        return Vec::new();
    };

    let mut works = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".md") {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(content) => match parse_work_content(&content) {
                Ok(metadata) => works.push(metadata),
                Err(e) => tracing::warn!("failed to parse work {}: {}", name, e),
            },
            Err(e) => tracing::warn!("failed to read work {}: {}", name, e),
        }
    }
    works
}

/// Look up a single work by numeric id
pub fn find_work(id: u64) -> Result<WorkMetadata> {
    get_all_works()
        .into_iter()
        .find(|w| w.id == id)
        .ok_or_else(|| PlacardError::WorkNotFound(id.to_string()))
}

/// Create a new work record and return its id
pub fn create_work(title: &str) -> Result<u64> {
    ensure_dir(WORKS_DIR)?;

    let next_id = get_all_works().iter().map(|w| w.id).max().unwrap_or(0) + 1;
    let content = format!(
        "---\nid: {}\ncreated: {}\n---\n# {}\n",
        next_id,
        iso_date(),
        title
    );
    let file_path = PathBuf::from(WORKS_DIR).join(format!("{}.md", next_id));
    fs::write(&file_path, content)?;
    Ok(next_id)
}

/// One page of a works listing
#[derive(Debug, Clone)]
pub struct WorksPage {
    pub works: Vec<WorkMetadata>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Filter works by title substring, order newest-id first, and slice out
/// the requested (1-based) page. An out-of-range page yields an empty slice.
pub fn list_works(works: Vec<WorkMetadata>, search: Option<&str>, page: usize) -> WorksPage {
    let mut matched: Vec<WorkMetadata> = works
        .into_iter()
        .filter(|w| match search {
            Some(s) => w.title.as_deref().unwrap_or("").contains(s),
            None => true,
        })
        .collect();
    matched.sort_by(|a, b| b.id.cmp(&a.id));

    let total_matches = matched.len();
    let total_pages = total_matches.div_ceil(WORKS_PAGE_SIZE);
    let page = page.max(1);

    let start = (page - 1) * WORKS_PAGE_SIZE;
    let works = matched
        .into_iter()
        .skip(start)
        .take(WORKS_PAGE_SIZE)
        .collect();

    WorksPage {
        works,
        page,
        total_pages,
        total_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: u64, title: &str) -> WorkMetadata {
        WorkMetadata {
            id,
            title: Some(title.to_string()),
            created: None,
        }
    }

    #[test]
    fn test_list_orders_newest_first() {
        let works = vec![work(1, "alpha"), work(3, "gamma"), work(2, "beta")];
        let page = list_works(works, None, 1);
        let ids: Vec<u64> = page.works.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_list_search_is_substring() {
        let works = vec![work(1, "solar tracker"), work(2, "lunar lander"), work(3, "solaris")];
        let page = list_works(works, Some("solar"), 1);
        let ids: Vec<u64> = page.works.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(page.total_matches, 2);
    }

    #[test]
    fn test_list_paginates_by_ten() {
        let works: Vec<WorkMetadata> = (1..=23).map(|i| work(i, "w")).collect();
        let p1 = list_works(works.clone(), None, 1);
        let p3 = list_works(works.clone(), None, 3);
        assert_eq!(p1.total_pages, 3);
        assert_eq!(p1.works.len(), 10);
        assert_eq!(p3.works.len(), 3);
        // Page slices concatenate without overlap
        assert_eq!(p1.works[0].id, 23);
        assert_eq!(p3.works.last().unwrap().id, 1);
    }

    #[test]
    fn test_list_out_of_range_page_is_empty() {
        let works = vec![work(1, "only")];
        let page = list_works(works, None, 9);
        assert!(page.works.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_parse_work_content() {
        let metadata =
            parse_work_content("---\nid: 7\ncreated: 2024-05-01T00:00:00Z\n---\n# Demo\n").unwrap();
        assert_eq!(metadata.id, 7);
        assert_eq!(metadata.title, Some("Demo".to_string()));
    }
}

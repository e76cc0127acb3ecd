use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PlacardError;

pub const PLACARD_DIR: &str = ".placard";
pub const NOTICES_DIR: &str = ".placard/notices";
pub const WORKS_DIR: &str = ".placard/works";
pub const JUDGES_DIR: &str = ".placard/judges";
pub const SCORES_FILE: &str = ".placard/scores.json";

/// Which fields a text search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    TitleOnly,
    TitleAndContent,
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::TitleOnly => write!(f, "title"),
            SearchScope::TitleAndContent => write!(f, "title+content"),
        }
    }
}

impl FromStr for SearchScope {
    type Err = PlacardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchScope::TitleOnly),
            "title+content" | "all" => Ok(SearchScope::TitleAndContent),
            _ => Err(PlacardError::Other(format!(
                "invalid search scope: {} (expected one of: {})",
                s,
                VALID_SCOPES.join(", ")
            ))),
        }
    }
}

pub const VALID_SCOPES: &[&str] = &["title", "title+content"];

/// Year facet for filtering notices by creation year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(String),
}

impl YearFilter {
    pub fn matches(&self, year: Option<&str>) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(y) => year == Some(y.as_str()),
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => write!(f, "all"),
            YearFilter::Year(y) => write!(f, "{}", y),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoticeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip)]
    pub title: Option<String>,

    /// Body text below the title heading
    #[serde(skip)]
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl NoticeMetadata {
    /// Four-digit creation year, or None when the timestamp is missing
    /// or unparseable (the "unknown year" bucket).
    pub fn year(&self) -> Option<String> {
        let created = self.created.as_deref()?;
        created
            .get(..10)
            .and_then(|d| d.parse::<jiff::civil::Date>().ok())
            .map(|d| d.year().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice_created(created: Option<&str>) -> NoticeMetadata {
        NoticeMetadata {
            created: created.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_year_from_iso_timestamp() {
        let n = notice_created(Some("2024-03-15T09:30:00Z"));
        assert_eq!(n.year(), Some("2024".to_string()));
    }

    #[test]
    fn test_year_from_bare_date() {
        let n = notice_created(Some("2023-12-01"));
        assert_eq!(n.year(), Some("2023".to_string()));
    }

    #[test]
    fn test_year_malformed_is_none() {
        assert_eq!(notice_created(Some("not a date")).year(), None);
        assert_eq!(notice_created(Some("2024-13-99T00:00:00Z")).year(), None);
        assert_eq!(notice_created(Some("")).year(), None);
        assert_eq!(notice_created(None).year(), None);
    }

    #[test]
    fn test_year_filter_matches() {
        assert!(YearFilter::All.matches(Some("2024")));
        assert!(YearFilter::All.matches(None));
        assert!(YearFilter::Year("2024".into()).matches(Some("2024")));
        assert!(!YearFilter::Year("2024".into()).matches(Some("2023")));
        // Unknown-year notices are excluded by any specific year filter
        assert!(!YearFilter::Year("2024".into()).matches(None));
    }

    #[test]
    fn test_scope_roundtrip() {
        assert_eq!("title".parse::<SearchScope>().ok(), Some(SearchScope::TitleOnly));
        assert_eq!(
            "title+content".parse::<SearchScope>().ok(),
            Some(SearchScope::TitleAndContent)
        );
        assert!("bogus".parse::<SearchScope>().is_err());
    }
}

//! Judging workflow: judge records and the score ledger.
//!
//! Judges live as frontmatter files under `.placard/judges/`. Scores are
//! kept in a single JSON ledger keyed by (judge, work); recording a score
//! for a pair that already has one overwrites it.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PlacardError, Result};
use crate::parser::{split_frontmatter, split_title};
use crate::types::{JUDGES_DIR, SCORES_FILE};
use crate::utils::{ensure_dir, generate_id, iso_date};

#[derive(Debug, Clone, Default)]
pub struct JudgeMetadata {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub judge: String,
    pub work_id: u64,
    pub score: u8,
    pub recorded: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreLedger {
    #[serde(default)]
    pub scores: Vec<ScoreEntry>,
}

impl ScoreLedger {
    pub fn load() -> Result<Self> {
        match fs::read_to_string(SCORES_FILE) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ScoreLedger::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self) -> Result<()> {
        ensure_dir(JUDGES_DIR)?;
        fs::write(SCORES_FILE, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Record a score, replacing any existing entry for the same
    /// (judge, work) pair.
    pub fn record(&mut self, judge: &str, work_id: u64, score: u8) {
        self.scores
            .retain(|s| !(s.judge == judge && s.work_id == work_id));
        self.scores.push(ScoreEntry {
            judge: judge.to_string(),
            work_id,
            score,
            recorded: iso_date(),
        });
    }

    /// Number of scores a judge has recorded
    pub fn count_for(&self, judge: &str) -> usize {
        self.scores.iter().filter(|s| s.judge == judge).count()
    }
}

/// Parse a score value, enforcing the 0-100 range
pub fn parse_score(s: &str) -> Result<u8> {
    s.parse::<u8>()
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| PlacardError::InvalidScore(s.to_string()))
}

fn parse_judge_content(content: &str) -> Result<JudgeMetadata> {
    let (yaml, body) = split_frontmatter(content)?;

    let mut metadata = JudgeMetadata::default();
    for line in yaml.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim();
            match key.trim() {
                "id" => metadata.id = Some(value.to_string()),
                "created" => metadata.created = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let (name, _) = split_title(body);
    metadata.name = name;
    Ok(metadata)
}

/// Load all judges, in file-name order
pub fn get_all_judges() -> Vec<JudgeMetadata> {
    let Ok(entries) = fs::read_dir(JUDGES_DIR) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();

    let mut judges = Vec::new();
    for path in files {
        match fs::read_to_string(&path) {
            Ok(content) => match parse_judge_content(&content) {
                Ok(mut metadata) => {
                    if metadata.id.is_none() {
                        metadata.id = path
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned());
                    }
                    judges.push(metadata);
                }
                Err(e) => tracing::warn!("failed to parse judge {}: {}", path.display(), e),
            },
            Err(e) => tracing::warn!("failed to read judge {}: {}", path.display(), e),
        }
    }
    judges
}

/// Find a judge by id or by exact name
pub fn find_judge(key: &str) -> Result<JudgeMetadata> {
    get_all_judges()
        .into_iter()
        .find(|j| j.id.as_deref() == Some(key) || j.name.as_deref() == Some(key))
        .ok_or_else(|| PlacardError::JudgeNotFound(key.to_string()))
}

/// Create a new judge record and return its id
pub fn create_judge(name: &str) -> Result<String> {
    ensure_dir(JUDGES_DIR)?;

    let id = generate_id("j");
    let content = format!("---\nid: {}\ncreated: {}\n---\n# {}\n", id, iso_date(), name);
    fs::write(PathBuf::from(JUDGES_DIR).join(format!("{}.md", id)), content)?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_overwrites_same_pair() {
        let mut ledger = ScoreLedger::default();
        ledger.record("j-1", 42, 80);
        ledger.record("j-1", 42, 95);
        ledger.record("j-2", 42, 70);

        assert_eq!(ledger.scores.len(), 2);
        let entry = ledger
            .scores
            .iter()
            .find(|s| s.judge == "j-1" && s.work_id == 42)
            .unwrap();
        assert_eq!(entry.score, 95);
    }

    #[test]
    fn test_count_for() {
        let mut ledger = ScoreLedger::default();
        ledger.record("j-1", 1, 50);
        ledger.record("j-1", 2, 60);
        ledger.record("j-2", 1, 70);
        assert_eq!(ledger.count_for("j-1"), 2);
        assert_eq!(ledger.count_for("j-3"), 0);
    }

    #[test]
    fn test_parse_score_range() {
        assert_eq!(parse_score("0").unwrap(), 0);
        assert_eq!(parse_score("100").unwrap(), 100);
        assert!(parse_score("101").is_err());
        assert!(parse_score("-1").is_err());
        assert!(parse_score("ten").is_err());
    }

    #[test]
    fn test_parse_judge_content() {
        let judge =
            parse_judge_content("---\nid: j-9f1e\ncreated: 2024-02-02T00:00:00Z\n---\n# Ada\n")
                .unwrap();
        assert_eq!(judge.id, Some("j-9f1e".to_string()));
        assert_eq!(judge.name, Some("Ada".to_string()));
    }
}

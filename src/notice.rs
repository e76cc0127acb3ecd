use std::fs;
use std::path::PathBuf;

use crate::error::{PlacardError, Result};
use crate::parser::parse_notice_content;
use crate::types::{NOTICES_DIR, NoticeMetadata};

/// Find all notice files in the notices directory
fn find_notices() -> Vec<String> {
    fs::read_dir(NOTICES_DIR)
        .ok()
        .map(|entries| {
            let mut names: Vec<String> = entries
                .filter_map(|e| e.ok())
                .filter_map(|e| {
                    let name = e.file_name().to_string_lossy().into_owned();
                    if name.ends_with(".md") { Some(name) } else { None }
                })
                .collect();
            names.sort();
            names
        })
        .unwrap_or_default()
}

/// Find a notice file by partial ID
fn find_notice_by_id(partial_id: &str) -> Result<PathBuf> {
    let files = find_notices();

    // Check for exact match first
    let exact_name = format!("{}.md", partial_id);
    if files.iter().any(|f| f == &exact_name) {
        return Ok(PathBuf::from(NOTICES_DIR).join(&exact_name));
    }

    // Then check for partial matches
    let matches: Vec<_> = files.iter().filter(|f| f.contains(partial_id)).collect();

    match matches.len() {
        0 => Err(PlacardError::NoticeNotFound(partial_id.to_string())),
        1 => Ok(PathBuf::from(NOTICES_DIR).join(matches[0])),
        _ => Err(PlacardError::AmbiguousId(partial_id.to_string())),
    }
}

/// A notice handle for reading and writing notice files
pub struct Notice {
    pub file_path: PathBuf,
    pub id: String,
}

impl Notice {
    /// Find a notice by its (partial) ID
    pub fn find(partial_id: &str) -> Result<Self> {
        let file_path = find_notice_by_id(partial_id)?;
        Ok(Notice::new(file_path))
    }

    /// Create a notice handle for a given file path
    pub fn new(file_path: PathBuf) -> Self {
        let id = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Notice { file_path, id }
    }

    /// Read and parse the notice's metadata
    pub fn read(&self) -> Result<NoticeMetadata> {
        let content = fs::read_to_string(&self.file_path)?;
        let mut metadata = parse_notice_content(&content)?;
        metadata.id = Some(self.id.clone());
        metadata.file_path = Some(self.file_path.clone());
        Ok(metadata)
    }

    /// Write content to the notice file
    pub fn write(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Remove the notice file
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.file_path)?;
        Ok(())
    }
}

/// Get all notices from the notices directory, in file-name order
pub fn get_all_notices() -> Vec<NoticeMetadata> {
    let files = find_notices();
    let mut notices = Vec::new();

    for file in files {
        let file_path = PathBuf::from(NOTICES_DIR).join(&file);
        match fs::read_to_string(&file_path) {
            Ok(content) => match parse_notice_content(&content) {
                Ok(mut metadata) => {
                    metadata.id = Some(file.strip_suffix(".md").unwrap_or(&file).to_string());
                    metadata.file_path = Some(file_path);
                    notices.push(metadata);
                }
                Err(e) => {
                    tracing::warn!("failed to parse {}: {}", file, e);
                }
            },
            Err(e) => {
                tracing::warn!("failed to read {}: {}", file, e);
            }
        }
    }

    notices
}

/// Get all notices ordered newest first (the order the browser receives)
pub fn get_notices_newest_first() -> Vec<NoticeMetadata> {
    let mut notices = get_all_notices();
    notices.sort_by(|a, b| b.created.cmp(&a.created));
    notices
}

use jiff::Zoned;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::Command;

use crate::error::{PlacardError, Result};
use crate::types::PLACARD_DIR;

/// Ensure the placard data directory exists
pub fn ensure_dir(subdir: &str) -> io::Result<()> {
    fs::create_dir_all(PLACARD_DIR)?;
    fs::create_dir_all(subdir)
}

/// Generate a unique record ID with the given prefix (e.g. "n-3f9c")
pub fn generate_id(prefix: &str) -> String {
    let random_bytes: [u8; 16] = rand::rng().random();
    let mut hasher = Sha256::new();
    hasher.update(random_bytes);
    let hash = format!("{:x}", hasher.finalize());

    format!("{}-{}", prefix, &hash[..4])
}

/// Get current ISO date string (without milliseconds)
pub fn iso_date() -> String {
    let now = Zoned::now();
    now.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Open a file in the user's preferred editor ($EDITOR, defaulting to vi)
///
/// Executes the editor through a shell so EDITOR values with arguments
/// (e.g., "subl -w", "code --wait") work. The file path is passed via a
/// shell positional parameter to avoid path-based injection.
pub fn open_in_editor(path: &Path) -> Result<()> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let status = Command::new("sh")
        .arg("-c")
        .arg(format!("{editor} \"$1\""))
        .arg("--")
        .arg(path)
        .status()?;

    if !status.success() {
        return Err(PlacardError::EditorFailed(status.code().unwrap_or(-1)));
    }

    Ok(())
}

/// Read all input from stdin (for piped input)
pub fn read_stdin() -> io::Result<String> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line?);
    }
    Ok(lines.join("\n").trim().to_string())
}

/// Check if stdin is a TTY (interactive)
pub fn is_stdin_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Truncate a string to a maximum length, handling multi-byte characters properly.
/// Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("n");
        assert!(id.starts_with("n-"));
        assert_eq!(id.len(), 6);
    }

    #[test]
    fn test_generate_id_unique() {
        let a = generate_id("n");
        let b = generate_id("n");
        // 4 hex chars can collide but two consecutive draws almost never do
        assert_ne!(a, b);
    }

    #[test]
    fn test_iso_date_format() {
        let date = iso_date();
        assert_eq!(date.len(), 20);
        assert!(date.ends_with('Z'));
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[10..11], "T");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer string", 10), "a longe...");
        assert_eq!(truncate_string("日本語のテキスト", 5), "日本...");
    }
}

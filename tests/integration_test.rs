use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run placard commands in an isolated temp directory
struct PlacardTest {
    temp_dir: TempDir,
    binary_path: String,
}

impl PlacardTest {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        // Find the binary - check both debug and release
        let binary_path = if cfg!(debug_assertions) {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/placard")
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/placard")
        };

        let binary_path = if std::path::Path::new(binary_path).exists() {
            binary_path.to_string()
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/placard").to_string()
        };

        PlacardTest {
            temp_dir,
            binary_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute placard command")
    }

    fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    fn read_notice(&self, id: &str) -> String {
        let path = self
            .temp_dir
            .path()
            .join(".placard")
            .join("notices")
            .join(format!("{}.md", id));
        fs::read_to_string(path).expect("Failed to read notice file")
    }

    fn notice_exists(&self, id: &str) -> bool {
        self.temp_dir
            .path()
            .join(".placard")
            .join("notices")
            .join(format!("{}.md", id))
            .exists()
    }

    fn write_notice(&self, id: &str, content: &str) {
        let dir = self.temp_dir.path().join(".placard").join("notices");
        fs::create_dir_all(&dir).expect("Failed to create notices directory");
        fs::write(dir.join(format!("{}.md", id)), content).expect("Failed to write notice file");
    }

    fn read_scores(&self) -> String {
        let path = self.temp_dir.path().join(".placard").join("scores.json");
        fs::read_to_string(path).expect("Failed to read scores file")
    }
}

/// Build a notice file body the way `placard create` does
fn notice_content(id: &str, created: &str, title: &str, body: &str) -> String {
    format!(
        "---\nid: {}\ncreated: {}\n---\n\n# {}\n\n{}\n",
        id, created, title, body
    )
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_creates_layout() {
    let placard = PlacardTest::new();

    let output = placard.run_success(&["init"]);
    assert!(output.contains("Initialized"));

    for dir in ["notices", "works", "judges"] {
        assert!(
            placard.temp_dir.path().join(".placard").join(dir).is_dir(),
            "{} directory should exist",
            dir
        );
    }

    // Second init is a no-op
    let output = placard.run_success(&["init"]);
    assert!(output.contains("already initialized"));
}

// ============================================================================
// Notice CRUD
// ============================================================================

#[test]
fn test_create_basic() {
    let placard = PlacardTest::new();

    let output = placard.run_success(&["create", "Test notice"]);
    let id = output.trim();

    assert!(id.starts_with("n-"), "ID should carry the notice prefix");
    assert!(placard.notice_exists(id), "Notice file should exist");

    let content = placard.read_notice(id);
    assert!(content.contains("# Test notice"));
    assert!(content.contains(&format!("id: {}", id)));
    assert!(content.contains("created: "));
}

#[test]
fn test_create_with_content() {
    let placard = PlacardTest::new();

    let output = placard.run_success(&["create", "Roof repairs", "-m", "Expect noise all week."]);
    let id = output.trim();

    let content = placard.read_notice(id);
    assert!(content.contains("# Roof repairs"));
    assert!(content.contains("Expect noise all week."));
}

#[test]
fn test_show_by_partial_id() {
    let placard = PlacardTest::new();

    let id = placard
        .run_success(&["create", "Holiday closure", "-m", "Closed on Friday."])
        .trim()
        .to_string();

    // Partial id lookup drops the prefix characters
    let partial = &id[..4];
    let output = placard.run_success(&["show", partial]);
    assert!(output.contains("Holiday closure"));
    assert!(output.contains("Closed on Friday."));
    assert!(output.contains(&id));
}

#[test]
fn test_show_missing_notice_fails() {
    let placard = PlacardTest::new();
    placard.run_success(&["init"]);

    let stderr = placard.run_failure(&["show", "n-zzzz"]);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_delete_removes_file() {
    let placard = PlacardTest::new();

    let id = placard
        .run_success(&["create", "Temporary"])
        .trim()
        .to_string();
    assert!(placard.notice_exists(&id));

    let output = placard.run_success(&["delete", &id]);
    assert!(output.contains(&id));
    assert!(!placard.notice_exists(&id));
}

#[test]
fn test_ambiguous_partial_id_fails() {
    let placard = PlacardTest::new();

    placard.write_notice(
        "n-ab11",
        &notice_content("n-ab11", "2024-01-01T00:00:00Z", "First", ""),
    );
    placard.write_notice(
        "n-ab22",
        &notice_content("n-ab22", "2024-01-02T00:00:00Z", "Second", ""),
    );

    let stderr = placard.run_failure(&["show", "n-ab"]);
    assert!(stderr.contains("ambiguous"));
}

// ============================================================================
// Notice listing and filters
// ============================================================================

#[test]
fn test_ls_empty() {
    let placard = PlacardTest::new();
    placard.run_success(&["init"]);

    let output = placard.run_success(&["ls"]);
    assert!(output.contains("No notices found"));
}

#[test]
fn test_ls_newest_first() {
    let placard = PlacardTest::new();

    placard.write_notice(
        "n-old1",
        &notice_content("n-old1", "2023-01-10T00:00:00Z", "Oldest notice", ""),
    );
    placard.write_notice(
        "n-new1",
        &notice_content("n-new1", "2024-07-07T00:00:00Z", "Newest notice", ""),
    );

    let output = placard.run_success(&["ls"]);
    let newest_pos = output.find("Newest notice").expect("newest listed");
    let oldest_pos = output.find("Oldest notice").expect("oldest listed");
    assert!(newest_pos < oldest_pos, "Newest notice should come first");
    assert!(output.contains("2 of 2 notices"));
}

#[test]
fn test_ls_search_is_case_sensitive() {
    let placard = PlacardTest::new();

    placard.write_notice(
        "n-aa11",
        &notice_content("n-aa11", "2024-01-01T00:00:00Z", "Welcome week", ""),
    );

    let output = placard.run_success(&["ls", "--search", "Welcome"]);
    assert!(output.contains("Welcome week"));

    let output = placard.run_success(&["ls", "--search", "welcome"]);
    assert!(output.contains("No notices match"));
}

#[test]
fn test_ls_scope_reaches_content() {
    let placard = PlacardTest::new();

    placard.write_notice(
        "n-aa11",
        &notice_content(
            "n-aa11",
            "2024-01-01T00:00:00Z",
            "Cafeteria menu",
            "Soup is served daily.",
        ),
    );

    // Title-only misses body text
    let output = placard.run_success(&["ls", "--search", "Soup"]);
    assert!(output.contains("No notices match"));

    let output = placard.run_success(&["ls", "--search", "Soup", "--scope", "title+content"]);
    assert!(output.contains("Cafeteria menu"));
}

#[test]
fn test_ls_year_filter_excludes_malformed_dates() {
    let placard = PlacardTest::new();

    placard.write_notice(
        "n-aa11",
        &notice_content("n-aa11", "2023-06-20T00:00:00Z", "From 2023", ""),
    );
    placard.write_notice(
        "n-bb22",
        &notice_content("n-bb22", "2024-02-14T00:00:00Z", "From 2024", ""),
    );
    placard.write_notice(
        "n-cc33",
        &notice_content("n-cc33", "someday", "Undatable", ""),
    );

    let output = placard.run_success(&["ls", "--year", "2023"]);
    assert!(output.contains("From 2023"));
    assert!(!output.contains("From 2024"));
    assert!(!output.contains("Undatable"));

    // No year filter includes the unknown-year notice
    let output = placard.run_success(&["ls"]);
    assert!(output.contains("Undatable"));
    assert!(output.contains("3 of 3 notices"));
}

#[test]
fn test_ls_invalid_scope_rejected() {
    let placard = PlacardTest::new();

    let stderr = placard.run_failure(&["ls", "--scope", "bogus"]);
    assert!(stderr.contains("Invalid scope"));
}

#[test]
fn test_ls_skips_unparseable_files() {
    let placard = PlacardTest::new();

    placard.write_notice("n-good", &notice_content("n-good", "2024-01-01T00:00:00Z", "Good", ""));
    placard.write_notice("n-junk", "no frontmatter here");

    let output = placard.run_success(&["ls"]);
    assert!(output.contains("Good"));
    assert!(output.contains("1 of 1 notices"));
}

// ============================================================================
// Works
// ============================================================================

#[test]
fn test_works_add_and_ls() {
    let placard = PlacardTest::new();

    let id = placard
        .run_success(&["works", "add", "Solar tracker"])
        .trim()
        .to_string();
    assert_eq!(id, "1");

    let output = placard.run_success(&["works", "ls"]);
    assert!(output.contains("Solar tracker"));
    assert!(output.contains("Page 1 of 1 (1 matching)"));
}

#[test]
fn test_works_ids_increment() {
    let placard = PlacardTest::new();

    let first = placard.run_success(&["works", "add", "First"]).trim().to_string();
    let second = placard.run_success(&["works", "add", "Second"]).trim().to_string();
    assert_eq!(first, "1");
    assert_eq!(second, "2");
}

#[test]
fn test_works_ls_paginates_at_ten() {
    let placard = PlacardTest::new();

    for i in 1..=12 {
        placard.run_success(&["works", "add", &format!("Work {:02}", i)]);
    }

    // Page 1 holds ids 12 down to 3
    let output = placard.run_success(&["works", "ls"]);
    assert!(output.contains("Page 1 of 2 (12 matching)"));
    assert!(output.contains("Work 12"));
    assert!(output.contains("Work 03"));
    assert!(!output.contains("Work 02"));

    let output = placard.run_success(&["works", "ls", "--page", "2"]);
    assert!(output.contains("Page 2 of 2 (12 matching)"));
    assert!(output.contains("Work 02"));
    assert!(output.contains("Work 01"));
    assert!(!output.contains("Work 03"));
}

#[test]
fn test_works_ls_search() {
    let placard = PlacardTest::new();

    placard.run_success(&["works", "add", "Solar tracker"]);
    placard.run_success(&["works", "add", "Wind meter"]);

    let output = placard.run_success(&["works", "ls", "--search", "Solar"]);
    assert!(output.contains("Solar tracker"));
    assert!(!output.contains("Wind meter"));

    let output = placard.run_success(&["works", "ls", "--search", "Nothing"]);
    assert!(output.contains("No works match"));
}

// ============================================================================
// Judging
// ============================================================================

#[test]
fn test_judge_add_and_ls() {
    let placard = PlacardTest::new();

    let id = placard
        .run_success(&["judge", "add", "Dana"])
        .trim()
        .to_string();
    assert!(id.starts_with("j-"));

    let output = placard.run_success(&["judge", "ls"]);
    assert!(output.contains("Dana"));
    assert!(output.contains("0 scored"));
}

#[test]
fn test_judge_score_records_entry() {
    let placard = PlacardTest::new();

    let judge_id = placard
        .run_success(&["judge", "add", "Dana"])
        .trim()
        .to_string();
    let work_id = placard
        .run_success(&["works", "add", "Solar tracker"])
        .trim()
        .to_string();

    placard.run_success(&["judge", "score", &judge_id, &work_id, "87"]);

    let scores = placard.read_scores();
    assert!(scores.contains(&judge_id));
    assert!(scores.contains("\"score\": 87"));

    let output = placard.run_success(&["judge", "ls"]);
    assert!(output.contains("1 scored"));
}

#[test]
fn test_judge_rescore_overwrites() {
    let placard = PlacardTest::new();

    let judge_id = placard
        .run_success(&["judge", "add", "Dana"])
        .trim()
        .to_string();
    placard.run_success(&["works", "add", "Solar tracker"]);

    placard.run_success(&["judge", "score", &judge_id, "1", "40"]);
    placard.run_success(&["judge", "score", &judge_id, "1", "95"]);

    let scores = placard.read_scores();
    assert!(!scores.contains("\"score\": 40"));
    assert!(scores.contains("\"score\": 95"));

    let output = placard.run_success(&["judge", "ls"]);
    assert!(output.contains("1 scored"), "Re-scoring must not add entries");
}

#[test]
fn test_judge_score_by_name() {
    let placard = PlacardTest::new();

    placard.run_success(&["judge", "add", "Dana"]);
    placard.run_success(&["works", "add", "Solar tracker"]);

    let output = placard.run_success(&["judge", "score", "Dana", "1", "70"]);
    assert!(output.contains("70"));
}

#[test]
fn test_judge_score_validation() {
    let placard = PlacardTest::new();

    let judge_id = placard
        .run_success(&["judge", "add", "Dana"])
        .trim()
        .to_string();
    placard.run_success(&["works", "add", "Solar tracker"]);

    let stderr = placard.run_failure(&["judge", "score", &judge_id, "1", "101"]);
    assert!(stderr.contains("between 0 and 100"));

    let stderr = placard.run_failure(&["judge", "score", &judge_id, "99", "50"]);
    assert!(stderr.contains("not found"));

    let stderr = placard.run_failure(&["judge", "score", "nobody", "1", "50"]);
    assert!(stderr.contains("not found"));
}

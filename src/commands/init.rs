use owo_colors::OwoColorize;

use crate::error::Result;
use crate::types::{JUDGES_DIR, NOTICES_DIR, PLACARD_DIR, WORKS_DIR};
use crate::utils::ensure_dir;

/// Create the .placard storage layout in the current directory
pub fn cmd_init() -> Result<()> {
    let existed = std::path::Path::new(PLACARD_DIR).exists();

    ensure_dir(NOTICES_DIR)?;
    ensure_dir(WORKS_DIR)?;
    ensure_dir(JUDGES_DIR)?;

    if existed {
        println!("{} already initialized", PLACARD_DIR.cyan());
    } else {
        println!("Initialized {}", PLACARD_DIR.cyan());
    }
    Ok(())
}

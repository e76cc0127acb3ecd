use owo_colors::OwoColorize;

use super::format_notice_line;
use crate::error::Result;
use crate::notice::{Notice, get_notices_newest_first};
use crate::tui::browser::model::filter_notices;
use crate::types::{SearchScope, YearFilter};

/// List notices, newest first, with the browser's filter semantics
pub fn cmd_ls(search: Option<&str>, scope: SearchScope, year: Option<&str>) -> Result<()> {
    let notices = get_notices_newest_first();

    if notices.is_empty() {
        println!("No notices found. Create one with: placard create <title>");
        return Ok(());
    }

    let year_filter = match year {
        Some(y) => YearFilter::Year(y.to_string()),
        None => YearFilter::All,
    };
    let filtered = filter_notices(&notices, search.unwrap_or(""), scope, &year_filter);

    if filtered.is_empty() {
        println!("No notices match the given filters");
        return Ok(());
    }

    for notice in &filtered {
        println!("{}", format_notice_line(notice));
    }
    println!("\n{} of {} notices", filtered.len(), notices.len());
    Ok(())
}

/// Print a single notice in full
pub fn cmd_show(id: &str) -> Result<()> {
    let notice = Notice::find(id)?;
    let metadata = notice.read()?;

    let title = metadata.title.as_deref().unwrap_or("(no title)");
    println!("{}", title.bold());
    println!(
        "{}  {}",
        notice.id.cyan(),
        metadata.created.as_deref().unwrap_or("").magenta()
    );

    let body = metadata.content.trim();
    if !body.is_empty() {
        println!("\n{}", body);
    }
    Ok(())
}

/// Delete a notice file
pub fn cmd_delete(id: &str) -> Result<()> {
    let notice = Notice::find(id)?;
    notice.delete()?;
    println!("Deleted notice {}", notice.id.cyan());
    Ok(())
}

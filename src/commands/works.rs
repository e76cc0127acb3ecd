use tabled::{Table, Tabled, settings::Style};

use crate::error::Result;
use crate::works::{create_work, get_all_works, list_works};

/// Table row for the works listing
#[derive(Tabled)]
struct WorkRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// Add a work record and print its numeric id
pub fn cmd_works_add(title: &str) -> Result<()> {
    let id = create_work(title)?;
    println!("{}", id);
    Ok(())
}

/// List works, newest first, 10 per page, optional title search
pub fn cmd_works_ls(search: Option<&str>, page: usize) -> Result<()> {
    let page_result = list_works(get_all_works(), search, page);

    if page_result.total_matches == 0 {
        match search {
            Some(s) => println!("No works match \"{}\"", s),
            None => println!("No works found. Add one with: placard works add <title>"),
        }
        return Ok(());
    }

    let rows: Vec<WorkRow> = page_result
        .works
        .iter()
        .map(|w| WorkRow {
            id: w.id,
            title: w.title.clone().unwrap_or_default(),
            created: w
                .created
                .as_deref()
                .and_then(|c| c.get(..10))
                .unwrap_or("")
                .to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\nPage {} of {} ({} matching)",
        page_result.page, page_result.total_pages, page_result.total_matches
    );
    Ok(())
}

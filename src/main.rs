use clap::{Parser, Subcommand};
use std::process::ExitCode;

use placard::commands::{
    cmd_browse, cmd_create, cmd_delete, cmd_edit, cmd_init, cmd_judge_add, cmd_judge_ls,
    cmd_judge_score, cmd_ls, cmd_show, cmd_works_add, cmd_works_ls,
};
use placard::types::{SearchScope, VALID_SCOPES};

#[derive(Parser)]
#[command(name = "placard")]
#[command(about = "Plain-text notice board with an interactive browser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the .placard storage directories
    Init,

    /// Create a new notice
    #[command(visible_alias = "c")]
    Create {
        /// Notice title
        title: String,

        /// Body text (reads from stdin if piped and not provided)
        #[arg(short = 'm', long)]
        content: Option<String>,
    },

    /// List notices, newest first
    Ls {
        /// Filter by literal substring (case-sensitive)
        #[arg(long)]
        search: Option<String>,

        /// Search scope: title or title+content
        #[arg(long, default_value = "title", value_parser = parse_scope)]
        scope: SearchScope,

        /// Filter by creation year (e.g. 2024)
        #[arg(long)]
        year: Option<String>,
    },

    /// Display a notice in full
    #[command(visible_alias = "s")]
    Show {
        /// Notice ID (can be partial)
        id: String,
    },

    /// Open a notice in $EDITOR
    Edit {
        /// Notice ID (can be partial)
        id: String,
    },

    /// Delete a notice
    Delete {
        /// Notice ID (can be partial)
        id: String,
    },

    /// Browse notices interactively
    Browse {
        /// Enable admin actions (edit and delete from the browser)
        #[arg(long)]
        admin: bool,
    },

    /// Manage work records
    Works {
        #[command(subcommand)]
        action: WorksAction,
    },

    /// Manage judges and scores
    Judge {
        #[command(subcommand)]
        action: JudgeAction,
    },
}

#[derive(Subcommand)]
enum WorksAction {
    /// Add a work record
    Add {
        /// Work title
        title: String,
    },
    /// List works (10 per page, newest first)
    Ls {
        /// Filter by title substring
        #[arg(long)]
        search: Option<String>,

        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,
    },
}

#[derive(Subcommand)]
enum JudgeAction {
    /// Add a judge
    Add {
        /// Judge name
        name: String,
    },
    /// List judges with their score counts
    Ls,
    /// Record a score for a work (0-100); re-scoring overwrites
    Score {
        /// Judge ID or exact name
        judge: String,
        /// Work ID
        work_id: u64,
        /// Score value (0-100)
        score: String,
    },
}

fn parse_scope(s: &str) -> Result<SearchScope, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid scope. Must be one of: {}",
            VALID_SCOPES.join(", ")
        )
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => cmd_init(),
        Commands::Create { title, content } => cmd_create(&title, content.as_deref()),
        Commands::Ls {
            search,
            scope,
            year,
        } => cmd_ls(search.as_deref(), scope, year.as_deref()),
        Commands::Show { id } => cmd_show(&id),
        Commands::Edit { id } => cmd_edit(&id),
        Commands::Delete { id } => cmd_delete(&id),

        Commands::Browse { admin } => cmd_browse(admin).await,

        Commands::Works { action } => match action {
            WorksAction::Add { title } => cmd_works_add(&title),
            WorksAction::Ls { search, page } => cmd_works_ls(search.as_deref(), page),
        },

        Commands::Judge { action } => match action {
            JudgeAction::Add { name } => cmd_judge_add(&name),
            JudgeAction::Ls => cmd_judge_ls(),
            JudgeAction::Score {
                judge,
                work_id,
                score,
            } => cmd_judge_score(&judge, work_id, &score),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::judging::{ScoreLedger, create_judge, find_judge, get_all_judges, parse_score};
use crate::works::find_work;

/// Add a judge record and print its id
pub fn cmd_judge_add(name: &str) -> Result<()> {
    let id = create_judge(name)?;
    println!("{}", id);
    Ok(())
}

/// List judges with their recorded score counts
pub fn cmd_judge_ls() -> Result<()> {
    let judges = get_all_judges();

    if judges.is_empty() {
        println!("No judges found. Add one with: placard judge add <name>");
        return Ok(());
    }

    let ledger = ScoreLedger::load()?;
    for judge in &judges {
        let id = judge.id.as_deref().unwrap_or("???");
        let name = judge.name.as_deref().unwrap_or("(unnamed)");
        let count = judge.id.as_deref().map(|i| ledger.count_for(i)).unwrap_or(0);
        println!(
            "{} {} - {} scored",
            format!("{:8}", id).cyan(),
            name,
            count
        );
    }
    Ok(())
}

/// Record a score for a (judge, work) pair, overwriting any previous score
pub fn cmd_judge_score(judge_key: &str, work_id: u64, score: &str) -> Result<()> {
    let score = parse_score(score)?;
    let judge = find_judge(judge_key)?;
    let work = find_work(work_id)?;

    let judge_id = judge
        .id
        .clone()
        .ok_or_else(|| crate::error::PlacardError::JudgeNotFound(judge_key.to_string()))?;

    let mut ledger = ScoreLedger::load()?;
    ledger.record(&judge_id, work.id, score);
    ledger.save()?;

    println!(
        "Scored work {} at {} for judge {}",
        work.id.to_string().cyan(),
        score.to_string().green(),
        judge_id.cyan()
    );
    Ok(())
}

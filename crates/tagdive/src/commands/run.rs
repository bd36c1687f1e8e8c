use super::{deepdive, summary};
use tagdive_core::SUMMARY_FILE;

/// Both stages in order: summary table first, then the per-tag deep dives.
/// The stages are independent; a tag absent from the summary still gets
/// its deep dive.
pub fn run(dir: Option<&str>, config: Option<&str>) -> anyhow::Result<()> {
    let root = super::resolve_root(dir)?;
    let config = super::load_config(config)?;

    let summary_rows = summary::run_stage(&root, &config)?;
    println!("Wrote {} ({} tags)", SUMMARY_FILE, summary_rows);

    let outcomes = deepdive::run_stage(&root, &config, None)?;
    deepdive::record_run(&root, Some(summary_rows), &outcomes)?;
    deepdive::print_outcomes(&outcomes);
    Ok(())
}

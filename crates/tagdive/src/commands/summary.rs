use std::path::Path;
use tagdive_core::{write_summary, PipelineConfig, SUMMARY_FILE};

pub fn run(dir: Option<&str>, config: Option<&str>) -> anyhow::Result<()> {
    let root = super::resolve_root(dir)?;
    let config = super::load_config(config)?;

    let rows = run_stage(&root, &config)?;
    println!("Wrote {} ({} tags)", SUMMARY_FILE, rows);
    Ok(())
}

/// Stage 1: locate the export, extract the tag table, write the summary
pub(crate) fn run_stage(root: &Path, config: &PipelineConfig) -> anyhow::Result<usize> {
    let export = tagdive_summary::find_export(root, &config.export_file_name)?;
    tracing::info!(path = %export.display(), "found export");

    let rows = tagdive_summary::extract_summary(&export, config)?;
    write_summary(root, &rows)?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stage_end_to_end() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("custom_chart_2025-08-20_2025-09-16.csv"),
            "Conversation tag,New conversations\nFree,10\nMy Account,7\n",
        )
        .unwrap();

        let count = run_stage(temp.path(), &PipelineConfig::default()).unwrap();
        assert_eq!(count, 1);
        assert!(temp.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn test_run_stage_missing_export_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = run_stage(temp.path(), &PipelineConfig::default()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

use chrono::Utc;
use std::path::Path;
use tagdive_chat::{run_tag, TagOutcome, TagStatus, TextCleaner};
use tagdive_core::{append_jsonl, PipelineConfig, RunRecord, TagRunStat, RUNS_FILE};

pub fn run(dir: Option<&str>, config: Option<&str>, tag: Option<&str>) -> anyhow::Result<()> {
    let root = super::resolve_root(dir)?;
    let config = super::load_config(config)?;

    let outcomes = run_stage(&root, &config, tag)?;
    record_run(&root, None, &outcomes)?;
    print_outcomes(&outcomes);
    Ok(())
}

/// Stage 2: deep-dive every configured tag (or just `only_tag`)
pub(crate) fn run_stage(
    root: &Path,
    config: &PipelineConfig,
    only_tag: Option<&str>,
) -> anyhow::Result<Vec<TagOutcome>> {
    let cleaner = TextCleaner::from_config(config);
    let mut outcomes = Vec::new();

    for source in &config.tag_sources {
        if only_tag.is_some_and(|t| t != source.tag) {
            continue;
        }
        outcomes.push(run_tag(root, &source.tag, &source.folder, config, &cleaner)?);
    }

    Ok(outcomes)
}

pub(crate) fn record_run(
    root: &Path,
    summary_rows: Option<usize>,
    outcomes: &[TagOutcome],
) -> anyhow::Result<()> {
    let tags: Vec<TagRunStat> = outcomes
        .iter()
        .filter_map(|outcome| match outcome.status {
            TagStatus::Written {
                questions,
                keywords,
            } => Some(TagRunStat {
                tag: outcome.tag.clone(),
                questions,
                keywords,
            }),
            _ => None,
        })
        .collect();

    let record = RunRecord {
        timestamp: Utc::now(),
        summary_rows,
        tags_processed: tags.len(),
        tags_skipped: outcomes.len() - tags.len(),
        tags,
    };
    append_jsonl(&root.join(RUNS_FILE), &record)?;
    Ok(())
}

pub(crate) fn print_outcomes(outcomes: &[TagOutcome]) {
    for outcome in outcomes {
        match &outcome.status {
            TagStatus::Written {
                questions,
                keywords,
            } => println!(
                "  {}: {} questions, {} keywords",
                outcome.tag, questions, keywords
            ),
            TagStatus::SourceMissing => {
                println!("  {}: no transcript folder or zip, skipped", outcome.tag)
            }
            TagStatus::NoMessages => {
                println!("  {}: no user messages extracted, skipped", outcome.tag)
            }
        }
    }

    let written = outcomes
        .iter()
        .filter(|o| matches!(o.status, TagStatus::Written { .. }))
        .count();
    println!("Processed {} of {} tags", written, outcomes.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagdive_core::read_jsonl;

    #[test]
    fn test_run_stage_skips_missing_sources() {
        let temp = tempfile::TempDir::new().unwrap();
        let outcomes = run_stage(temp.path(), &PipelineConfig::default(), None).unwrap();
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes
            .iter()
            .all(|o| o.status == TagStatus::SourceMissing));
    }

    #[test]
    fn test_run_stage_tag_filter() {
        let temp = tempfile::TempDir::new().unwrap();
        let outcomes =
            run_stage(temp.path(), &PipelineConfig::default(), Some("My Account")).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].tag, "My Account");
    }

    #[test]
    fn test_record_run_appends() {
        let temp = tempfile::TempDir::new().unwrap();
        let outcomes = vec![
            TagOutcome {
                tag: "My Account".to_string(),
                status: TagStatus::Written {
                    questions: 5,
                    keywords: 8,
                },
            },
            TagOutcome {
                tag: "Assign PR".to_string(),
                status: TagStatus::SourceMissing,
            },
        ];

        record_run(temp.path(), Some(3), &outcomes).unwrap();

        let records: Vec<RunRecord> = read_jsonl(&temp.path().join(RUNS_FILE)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].summary_rows, Some(3));
        assert_eq!(records[0].tags_processed, 1);
        assert_eq!(records[0].tags_skipped, 1);
        assert_eq!(records[0].tags[0].questions, 5);
    }
}

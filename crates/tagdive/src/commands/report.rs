use std::path::Path;
use tagdive_core::{read_jsonl, RunRecord, TagCountRow, RUNS_FILE, SUMMARY_FILE};

pub fn run(dir: Option<&str>) -> anyhow::Result<()> {
    let root = super::resolve_root(dir)?;
    let report = build_report(&root);
    println!("{}", report);
    Ok(())
}

fn build_report(root: &Path) -> String {
    let mut sections = Vec::new();

    match tagdive_core::read_summary(root) {
        Ok(rows) => sections.push(summary_section(&rows)),
        Err(_) => {
            return format!(
                "No {} found. Run `tagdive run` or `tagdive summary` first.",
                SUMMARY_FILE
            )
        }
    }

    let tag_sections = deep_dive_sections(root);
    if !tag_sections.is_empty() {
        sections.push(format!(
            "\nDeep Dives\n----------\n{}",
            tag_sections.join("\n")
        ));
    }

    if let Some(last_run) = last_run(root) {
        sections.push(format!(
            "\nLast Run\n--------\n  {} | {} tags processed, {} skipped",
            last_run.timestamp.format("%Y-%m-%d %H:%M UTC"),
            last_run.tags_processed,
            last_run.tags_skipped
        ));
    }

    sections.join("\n")
}

fn summary_section(rows: &[TagCountRow]) -> String {
    if rows.is_empty() {
        return "Top Tags\n========\n(empty summary)".to_string();
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| format!("  {:>6}  {}", row.count, row.tag))
        .collect();
    format!("Top Tags\n========\n{}", lines.join("\n"))
}

/// Per-tag blocks discovered from the keyword files on disk, the same way
/// the dashboard finds them
fn deep_dive_sections(root: &Path) -> Vec<String> {
    let mut stems = Vec::new();
    if let Ok(entries) = std::fs::read_dir(root) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(stem) = name.strip_suffix("_question_keywords.csv") {
                stems.push(stem.to_string());
            }
        }
    }
    stems.sort();

    stems
        .iter()
        .map(|stem| {
            let tag = stem.replace('_', " ");
            let questions = tagdive_core::read_questions(root, &tag)
                .map(|q| q.len())
                .unwrap_or(0);
            let keywords = tagdive_core::read_keywords(root, &tag).unwrap_or_default();
            let top: Vec<String> = keywords
                .iter()
                .take(5)
                .map(|(word, count)| format!("{} ({})", word, count))
                .collect();
            format!(
                "  {} — {} questions\n    top keywords: {}",
                tag,
                questions,
                if top.is_empty() {
                    "(none)".to_string()
                } else {
                    top.join(", ")
                }
            )
        })
        .collect()
}

fn last_run(root: &Path) -> Option<RunRecord> {
    let records: Vec<RunRecord> = read_jsonl(&root.join(RUNS_FILE)).ok()?;
    records.into_iter().last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagdive_core::{write_summary, write_tag_outputs};

    #[test]
    fn test_report_without_summary() {
        let temp = tempfile::TempDir::new().unwrap();
        let report = build_report(temp.path());
        assert!(report.contains("No top_tags_summary.csv"));
    }

    #[test]
    fn test_report_sections() {
        let temp = tempfile::TempDir::new().unwrap();
        write_summary(
            temp.path(),
            &[
                TagCountRow {
                    tag: "Manage Classes".to_string(),
                    count: 12,
                },
                TagCountRow {
                    tag: "My Account".to_string(),
                    count: 7,
                },
            ],
        )
        .unwrap();
        write_tag_outputs(
            temp.path(),
            "My Account",
            &["How do I reset my password?".to_string()],
            &[("password".to_string(), 2), ("reset".to_string(), 1)],
        )
        .unwrap();

        let report = build_report(temp.path());
        assert!(report.contains("Top Tags"));
        assert!(report.contains("Manage Classes"));
        assert!(report.contains("Deep Dives"));
        assert!(report.contains("My Account — 1 questions"));
        assert!(report.contains("password (2)"));
    }

    #[test]
    fn test_report_empty_summary() {
        let temp = tempfile::TempDir::new().unwrap();
        write_summary(temp.path(), &[]).unwrap();

        let report = build_report(temp.path());
        assert!(report.contains("(empty summary)"));
    }
}

//! Output artifact naming, writing, and read-back
//!
//! File names and column headers are part of the contract with the
//! dashboard that consumes these files; do not rename them.

use crate::error::{Error, Result};
use crate::io::atomic_write;
use crate::types::TagCountRow;
use std::path::Path;

pub const SUMMARY_FILE: &str = "top_tags_summary.csv";
pub const RUNS_FILE: &str = "tagdive_runs.jsonl";

/// Tag key as it appears in per-tag file names
pub fn tag_stem(tag: &str) -> String {
    tag.replace(' ', "_")
}

pub fn questions_file(tag: &str) -> String {
    format!("{}_user_questions.csv", tag_stem(tag))
}

pub fn keywords_file(tag: &str) -> String {
    format!("{}_question_keywords.csv", tag_stem(tag))
}

fn into_bytes(wtr: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    wtr.into_inner().map_err(|e| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })
}

/// Write the filtered, sorted summary table
pub fn write_summary(dir: &Path, rows: &[TagCountRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["Conversation tag", "New conversations"])?;
    for row in rows {
        wtr.write_record([row.tag.as_str(), &row.count.to_string()])?;
    }
    let data = into_bytes(wtr)?;
    atomic_write(&dir.join(SUMMARY_FILE), &data)?;
    Ok(())
}

/// Write a tag's question list and keyword table. Both buffers are built
/// before either file lands, so the pair appears together or not at all.
pub fn write_tag_outputs(
    dir: &Path,
    tag: &str,
    questions: &[String],
    keywords: &[(String, u64)],
) -> Result<()> {
    let mut q_wtr = csv::Writer::from_writer(Vec::new());
    q_wtr.write_record(["user_message"])?;
    for question in questions {
        q_wtr.write_record([question.as_str()])?;
    }
    let q_data = into_bytes(q_wtr)?;

    let mut k_wtr = csv::Writer::from_writer(Vec::new());
    k_wtr.write_record(["keyword", "frequency"])?;
    for (keyword, frequency) in keywords {
        k_wtr.write_record([keyword.as_str(), &frequency.to_string()])?;
    }
    let k_data = into_bytes(k_wtr)?;

    atomic_write(&dir.join(questions_file(tag)), &q_data)?;
    atomic_write(&dir.join(keywords_file(tag)), &k_data)?;
    Ok(())
}

/// Read the summary table back (report command)
pub fn read_summary(dir: &Path) -> Result<Vec<TagCountRow>> {
    let mut rdr = csv::Reader::from_path(dir.join(SUMMARY_FILE))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Read a tag's keyword table back
pub fn read_keywords(dir: &Path, tag: &str) -> Result<Vec<(String, u64)>> {
    let mut rdr = csv::Reader::from_path(dir.join(keywords_file(tag)))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Read a tag's question list back
pub fn read_questions(dir: &Path, tag: &str) -> Result<Vec<String>> {
    let mut rdr = csv::Reader::from_path(dir.join(questions_file(tag)))?;
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if let Some(text) = record.get(0) {
            rows.push(text.to_string());
        }
    }
    Ok(rows)
}

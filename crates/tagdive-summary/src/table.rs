//! Embedded two-column table extraction
//!
//! The export is not a clean CSV: metadata rows may sit above the real
//! (tag, count) table, and header names drift between exports. The real
//! table starts at a recognizable header line; everything from that line
//! onward is re-parsed with fuzzy column resolution.

use crate::schema::{resolve_column, FILE_TAG_MATCHERS, TABLE_COUNT_MATCHERS, TABLE_TAG_MATCHERS};
use std::path::Path;
use tagdive_core::{Error, PipelineConfig, Result, TagCountRow};

/// Parse the export at `path` into a denylist-filtered, descending-sorted
/// tag table. Unresolvable embedded columns yield an empty table, not an
/// error; a missing tag column anywhere in the file is fatal.
pub fn extract_summary(path: &Path, config: &PipelineConfig) -> Result<Vec<TagCountRow>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let file_headers = read_headers(&text)?;
    let file_tag_col =
        resolve_column(&file_headers, FILE_TAG_MATCHERS).ok_or_else(|| Error::TagColumnMissing {
            path: path.to_path_buf(),
        })?;

    let rows = match find_embedded_header(&text) {
        Some(line_idx) => parse_embedded_table(&text, line_idx)?,
        None => {
            tracing::debug!(
                path = %path.display(),
                "no embedded header line, treating whole file as the table"
            );
            parse_whole_file(&text, file_tag_col)?
        }
    };

    let mut rows: Vec<TagCountRow> = rows
        .into_iter()
        .filter(|row| !config.is_denylisted_tag(&row.tag))
        .collect();
    // sort_by is stable, so equal counts keep their input order
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(rows)
}

fn read_headers(text: &str) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    Ok(rdr.headers()?.iter().map(String::from).collect())
}

/// Find the line starting the real table: "conversation tag" then
/// "new conversations", tolerant of quoting, spacing, and casing
fn find_embedded_header(text: &str) -> Option<usize> {
    for (idx, line) in text.lines().enumerate() {
        let stripped = line
            .trim()
            .to_lowercase()
            .replace(['"', '\''], "");
        let stripped = stripped.trim();
        if stripped.starts_with("conversation tag") && stripped.contains("new conversations") {
            return Some(idx);
        }
    }
    None
}

fn parse_embedded_table(text: &str, header_line: usize) -> Result<Vec<TagCountRow>> {
    let table_text = text
        .lines()
        .skip(header_line)
        .collect::<Vec<_>>()
        .join("\n");

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(table_text.as_bytes());
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

    let tag_col = resolve_column(&headers, TABLE_TAG_MATCHERS);
    let count_col = resolve_column(&headers, TABLE_COUNT_MATCHERS);
    let (tag_col, count_col) = match (tag_col, count_col) {
        (Some(t), Some(c)) => (t, c),
        _ => {
            tracing::warn!(
                ?headers,
                "embedded table columns unresolved, producing empty summary"
            );
            return Ok(Vec::new());
        }
    };

    collect_rows(&mut rdr, tag_col, Some(count_col))
}

/// No embedded header anywhere: the original file is the table. The count
/// column is resolved with the same heuristics and defaults to zero when
/// nothing qualifies.
fn parse_whole_file(text: &str, tag_col: usize) -> Result<Vec<TagCountRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let count_col = resolve_column(&headers, TABLE_COUNT_MATCHERS);

    collect_rows(&mut rdr, tag_col, count_col)
}

fn collect_rows(
    rdr: &mut csv::Reader<&[u8]>,
    tag_col: usize,
    count_col: Option<usize>,
) -> Result<Vec<TagCountRow>> {
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let tag = record.get(tag_col).unwrap_or("").trim().to_string();
        let count = match count_col {
            Some(idx) => coerce_count(record.get(idx)),
            None => 0,
        };
        rows.push(TagCountRow { tag, count });
    }
    Ok(rows)
}

/// Counts are non-negative integers; non-numeric and negative values
/// become zero, floats truncate
fn coerce_count(field: Option<&str>) -> u64 {
    let field = field.unwrap_or("").trim();
    if let Ok(n) = field.parse::<u64>() {
        return n;
    }
    match field.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f as u64,
        _ => 0,
    }
}

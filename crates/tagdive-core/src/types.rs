//! Row and record types shared by the pipeline stages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One (tag, count) row of the export table
///
/// Tags are not unique in the input and duplicates pass through unchanged.
/// Serde names match the summary file columns the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCountRow {
    #[serde(rename = "Conversation tag")]
    pub tag: String,
    #[serde(rename = "New conversations")]
    pub count: u64,
}

/// A single transcript line split into sender and message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
}

/// A message whose sender passed the internal-identity filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub text: String,
}

impl UserMessage {
    /// A message is a question iff its trimmed text ends with `?`
    pub fn is_question(&self) -> bool {
        self.text.trim().ends_with('?')
    }
}

/// Per-tag counters for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRunStat {
    pub tag: String,
    pub questions: usize,
    pub keywords: usize,
}

/// One record appended to the runs log after each deep-dive invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub summary_rows: Option<usize>,
    pub tags_processed: usize,
    pub tags_skipped: usize,
    #[serde(default)]
    pub tags: Vec<TagRunStat>,
}

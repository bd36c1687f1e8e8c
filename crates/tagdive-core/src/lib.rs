//! Shared configuration, row types, errors, and artifact I/O for the tagdive pipeline

mod artifacts;
mod config;
mod error;
mod io;
mod types;

pub use artifacts::{
    keywords_file, questions_file, read_keywords, read_questions, read_summary, tag_stem,
    write_summary, write_tag_outputs, RUNS_FILE, SUMMARY_FILE,
};
pub use config::{PipelineConfig, TagSource, ENGLISH_STOPWORDS};
pub use error::{Error, Result};
pub use io::{append_jsonl, atomic_write, read_jsonl};
pub use types::{ChatMessage, RunRecord, TagCountRow, TagRunStat, UserMessage};

//! Per-tag deep-dive driver

use crate::clean::TextCleaner;
use crate::keywords::top_keywords;
use crate::source::{decode_transcript, resolve_source};
use crate::transcript::extract_user_messages;
use anyhow::Result;
use std::path::Path;
use tagdive_core::{write_tag_outputs, PipelineConfig, UserMessage};

const KEYWORD_LIMIT: usize = 20;

/// What happened for one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    pub tag: String,
    pub status: TagStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagStatus {
    /// Both output files were written
    Written { questions: usize, keywords: usize },
    /// No transcript directory or archive was found
    SourceMissing,
    /// A source existed but no user messages were extracted; nothing written
    NoMessages,
}

/// Run the deep dive for one tag: resolve its source, extract customer
/// messages, split out questions, and write the question list and keyword
/// table. Missing sources and empty extractions are normal skips; an
/// unreadable archive is an error.
pub fn run_tag(
    root: &Path,
    tag: &str,
    folder: &str,
    config: &PipelineConfig,
    cleaner: &TextCleaner,
) -> Result<TagOutcome> {
    let outcome = |status| TagOutcome {
        tag: tag.to_string(),
        status,
    };

    let Some(source) = resolve_source(root, folder, config)? else {
        tracing::warn!(tag, folder, "no transcript folder or zip found, skipping");
        return Ok(outcome(TagStatus::SourceMissing));
    };
    tracing::info!(tag, source = %source.label(), files = source.len(), "processing tag");

    let mut messages: Vec<UserMessage> = Vec::new();
    for (name, bytes) in source.read_all()? {
        match decode_transcript(&bytes) {
            Some(text) => messages.extend(extract_user_messages(&text, config)),
            None => tracing::warn!(file = %name, "undecodable transcript, skipping file"),
        }
    }

    if messages.is_empty() {
        tracing::warn!(tag, "no user messages extracted, skipping");
        return Ok(outcome(TagStatus::NoMessages));
    }

    let questions: Vec<String> = messages
        .iter()
        .filter(|message| message.is_question())
        .map(|message| message.text.clone())
        .collect();

    let question_tokens = questions
        .iter()
        .flat_map(|question| cleaner.clean(question));
    let keywords = top_keywords(question_tokens, KEYWORD_LIMIT);

    write_tag_outputs(root, tag, &questions, &keywords)?;

    Ok(outcome(TagStatus::Written {
        questions: questions.len(),
        keywords: keywords.len(),
    }))
}

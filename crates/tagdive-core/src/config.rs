//! Pipeline configuration: word lists, denylists, and source mappings
//!
//! Everything here is data, not logic. The reference deployment values live
//! in `Default`; a JSON file can override any subset of fields.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maps one tag key to the folder (or zip base name) holding its transcripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSource {
    pub tag: String,
    pub folder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// File name of the tag-count export, searched for anywhere under the working directory
    pub export_file_name: String,

    /// Subfolder also checked when resolving transcript sources
    pub source_prefix: String,

    /// Tags excluded from the summary (exact match)
    pub tag_denylist: Vec<String>,

    /// Deep-dive tags in processing order
    pub tag_sources: Vec<TagSource>,

    /// Sender substrings that mark a message as internally authored (case-insensitive)
    pub internal_identities: Vec<String>,

    /// Domain stopwords removed during keyword cleaning
    pub custom_stopwords: Vec<String>,

    /// Whether the standard English stopword list is applied
    pub english_stopwords: bool,
}

impl PipelineConfig {
    /// Load overrides from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn is_denylisted_tag(&self, tag: &str) -> bool {
        self.tag_denylist.iter().any(|t| t == tag)
    }

    /// Substring match, so a customer whose name embeds an internal identity
    /// is misclassified. Known limitation carried over from the source data.
    pub fn is_internal_sender(&self, sender: &str) -> bool {
        let sender = sender.to_lowercase();
        self.internal_identities
            .iter()
            .any(|id| sender.contains(&id.to_lowercase()))
    }

    /// Candidate paths for a tag's folder: the name itself, the name with
    /// en-dashes replaced by hyphens, and both under the source prefix
    pub fn folder_candidates(&self, folder: &str) -> Vec<String> {
        let dashed = folder.replace('\u{2013}', "-");
        let mut candidates = vec![
            folder.to_string(),
            dashed.clone(),
            format!("{}/{}", self.source_prefix, folder),
            format!("{}/{}", self.source_prefix, dashed),
        ];
        candidates.dedup();
        candidates
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            export_file_name: "custom_chart_2025-08-20_2025-09-16.csv".to_string(),
            source_prefix: "Aug-Sep 2025".to_string(),
            tag_denylist: to_strings(&[
                "Free",
                "Not tagged",
                "Conversation Rating - High Score",
                "District Premium",
                "Teacher Premium",
                "School Premium",
                "Conversation Rating - Low Score",
            ]),
            tag_sources: vec![
                tag_source("My Account", "My Account Aug\u{2013}Sep16"),
                tag_source("Manage Activities", "Manage Activities Aug\u{2013}Sep16"),
                tag_source("Assign PR", "Assign PR Aug\u{2013}Sep16"),
                tag_source("Manage Classes", "Manage Classes Aug\u{2013}Sep16"),
            ],
            internal_identities: to_strings(&[
                "Quill",
                "Nattalie",
                "Nikki",
                "Amanda",
                "Operator",
                "The Quill Team",
            ]),
            custom_stopwords: to_strings(CUSTOM_STOPWORDS),
            english_stopwords: true,
        }
    }
}

fn tag_source(tag: &str, folder: &str) -> TagSource {
    TagSource {
        tag: tag.to_string(),
        folder: folder.to_string(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Company, staff, boilerplate, and formatting terms that drown out real
/// keywords in support questions
const CUSTOM_STOPWORDS: &[&str] = &[
    // Company/agent/system words
    "quill", "support", "team", "operator", "article", "inserter", "diagnostic", "pack",
    "activity", "activities", "test", "class", "report", "practice", "lesson", "assign", "tab",
    "menu", "dashboard", "pre", "code", "survey", "feature", "invite", "update",
    // Company/agent names
    "nikki", "amanda", "nattalie", "shannon", "erika", "alex", "charlie",
    // Signatures and contact lines
    "best", "regards", "thank", "thanks", "sincerely", "please", "thank you", "welcome",
    "appreciate", "help", "let", "know", "pleasure", "contact", "assist", "further", "clarify",
    "additional", "follow", "question", "questions", "concerns", "grettings",
    // Greetings and fillers
    "hello", "hi", "hey", "good", "morning", "afternoon", "evening", "hope", "day", "back",
    "next",
    // System/meta
    "conversation", "started", "exported", "reply", "replies", "email", "recipient", "message",
    "system", "notice", "confidentiality", "transmitted", "error", "reading", "distribution",
    "copying", "strictly", "prohibited", "received", "immediately", "delete", "copies",
    "backups", "sent", "attached", "include", "time", "date", "gmt", "ed", "edt", "est", "am",
    "pm", "today", "yesterday", "tomorrow", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday",
    // URLs, emails, domains
    "mailto", "com", "org", "us", "kyschools", "net", "helpcenter", "supportquill", "quillorg",
    "classcode", "google", "clever", "schools", "questionfeedback",
    // Punctuation and formatting artifacts
    "\u{2014}", "\u{2013}", "\u{201c}", "\u{201d}", "\u{2026}", "(", ")", "[", "]", "{", "}",
    "\u{2019}", "\u{2018}",
];

/// Standard English stopword list applied when `english_stopwords` is set
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've",
    "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
    "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't",
    "won", "won't", "wouldn", "wouldn't",
];

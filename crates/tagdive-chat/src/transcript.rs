//! Customer message extraction from timestamped chat transcripts

use regex::Regex;
use std::sync::OnceLock;
use tagdive_core::{ChatMessage, PipelineConfig, UserMessage};

static MESSAGE_RE: OnceLock<Regex> = OnceLock::new();

/// `<hour>:<minute> <AM|PM> | <sender>: <message text>`
fn message_re() -> &'static Regex {
    MESSAGE_RE
        .get_or_init(|| Regex::new(r"^\d{1,2}:\d{2}\s*[AP]M\s*\|\s*([^:]+?):\s*(.*)$").unwrap())
}

/// Parse one transcript line. Free text, blank lines, and multi-line
/// continuations do not match and yield `None`; that content is dropped.
pub fn parse_line(line: &str) -> Option<ChatMessage> {
    let caps = message_re().captures(line)?;
    Some(ChatMessage {
        sender: caps[1].trim().to_string(),
        text: caps[2].trim().to_string(),
    })
}

/// All customer-authored messages in a transcript, in order. Messages from
/// senders matching an internal identity are dropped.
pub fn extract_user_messages(text: &str, config: &PipelineConfig) -> Vec<UserMessage> {
    text.lines()
        .filter_map(parse_line)
        .filter(|message| !config.is_internal_sender(&message.sender))
        .map(|message| UserMessage { text: message.text })
        .collect()
}

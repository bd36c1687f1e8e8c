//! Per-tag deep dive: transcript sources, message extraction, keyword cleaning

mod clean;
mod deepdive;
mod keywords;
mod source;
mod transcript;

pub use clean::{TextCleaner, Tokenizer, WordRunTokenizer};
pub use deepdive::{run_tag, TagOutcome, TagStatus};
pub use keywords::top_keywords;
pub use source::{decode_transcript, resolve_source, ChatSource};
pub use transcript::{extract_user_messages, parse_line};

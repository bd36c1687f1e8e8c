//! Question text cleaning and tokenization
//!
//! The tokenizer and stopword sets are injected rather than probed from the
//! environment, so cleaning is deterministic and testable. The default
//! tokenizer is the letter-run fallback; a caller with a linguistic
//! tokenizer plugs it in through the trait.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tagdive_core::{PipelineConfig, ENGLISH_STOPWORDS};

static WORD_RUN_RE: OnceLock<Regex> = OnceLock::new();
static TIME_RE: OnceLock<Regex> = OnceLock::new();
static YEAR_RE: OnceLock<Regex> = OnceLock::new();

/// Splits normalized text into candidate tokens
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Fallback tokenizer: maximal runs of three or more lowercase letters
#[derive(Debug, Default)]
pub struct WordRunTokenizer;

impl Tokenizer for WordRunTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let re = WORD_RUN_RE.get_or_init(|| Regex::new(r"[a-z]{3,}").unwrap());
        re.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Cleans question text into a keyword-ready token list
pub struct TextCleaner {
    tokenizer: Box<dyn Tokenizer>,
    english: HashSet<String>,
    custom: HashSet<String>,
}

impl TextCleaner {
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        english: HashSet<String>,
        custom: HashSet<String>,
    ) -> Self {
        Self {
            tokenizer,
            english,
            custom,
        }
    }

    /// Default tokenizer plus the configured stopword sets. An empty English
    /// set (toggle off) removes no English stopwords.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let english = if config.english_stopwords {
            ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect()
        } else {
            HashSet::new()
        };
        let custom = config.custom_stopwords.iter().cloned().collect();
        Self::new(Box::new(WordRunTokenizer), english, custom)
    }

    /// Lowercase, strip non-alphabetics to spaces, tokenize, filter
    pub fn clean(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        self.tokenizer
            .tokenize(&normalized)
            .into_iter()
            .filter(|token| self.keep(token))
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        if token.chars().count() < 3 {
            return false;
        }
        if self.english.contains(token) || self.custom.contains(token) {
            return false;
        }
        !is_unwanted(token)
    }
}

/// Every character that is not a lowercase ASCII letter or whitespace
/// becomes a space. Punctuation sitting between words without spacing
/// merges the neighbors, matching the source data's behavior.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Times, years, and address-like tokens carry no keyword signal
fn is_unwanted(token: &str) -> bool {
    let time_re = TIME_RE.get_or_init(|| Regex::new(r"^\d{1,2}:\d{2}").unwrap());
    let year_re = YEAR_RE.get_or_init(|| Regex::new(r"^20\d{2}").unwrap());
    time_re.is_match(token)
        || year_re.is_match(token)
        || token.contains('@')
        || token.contains("www.")
}

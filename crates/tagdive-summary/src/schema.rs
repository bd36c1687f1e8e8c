//! Fuzzy header resolution
//!
//! Export headers vary between exports (line breaks, casing, renames), so
//! semantic columns are resolved by ordered lists of named predicates over
//! normalized header text. The first matcher that hits any header wins;
//! precedence is the list order.

/// Collapse internal whitespace, trim, and lowercase a header name
pub fn normalize_header(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A named predicate over a normalized header name
pub struct Matcher {
    pub name: &'static str,
    pred: fn(&str) -> bool,
}

impl Matcher {
    pub fn matches(&self, normalized: &str) -> bool {
        (self.pred)(normalized)
    }
}

fn conversation_and_tag(name: &str) -> bool {
    name.contains("conversation") && name.contains("tag")
}

fn tag_word(name: &str) -> bool {
    name.contains("tag")
}

fn conversation_word(name: &str) -> bool {
    name.contains("conversation")
}

fn tag_or_conversation(name: &str) -> bool {
    name.contains("tag") || name.contains("conversation")
}

fn new_with_count_word(name: &str) -> bool {
    name.contains("new")
        && (name.contains("conversations") || name.contains("conversation") || name.contains("count"))
}

fn digit_or_count_word(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_digit())
        || name.contains("new")
        || name.contains("count")
        || name.contains("conversations")
}

/// Tag column over the whole-file header; no match here is a schema failure
pub const FILE_TAG_MATCHERS: &[Matcher] = &[
    Matcher {
        name: "conversation-and-tag",
        pred: conversation_and_tag,
    },
    Matcher {
        name: "tag",
        pred: tag_word,
    },
    Matcher {
        name: "conversation",
        pred: conversation_word,
    },
];

/// Tag column of the embedded two-column table
pub const TABLE_TAG_MATCHERS: &[Matcher] = &[
    Matcher {
        name: "conversation-and-tag",
        pred: conversation_and_tag,
    },
    Matcher {
        name: "tag-or-conversation",
        pred: tag_or_conversation,
    },
];

/// Count column of the embedded two-column table
pub const TABLE_COUNT_MATCHERS: &[Matcher] = &[
    Matcher {
        name: "new-conversations",
        pred: new_with_count_word,
    },
    Matcher {
        name: "digit-or-count-word",
        pred: digit_or_count_word,
    },
];

/// Resolve a column index: matchers are tried in priority order, each
/// scanned across all headers, returning the first header that matches
pub fn resolve_column(headers: &[String], matchers: &[Matcher]) -> Option<usize> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    for matcher in matchers {
        for (idx, header) in normalized.iter().enumerate() {
            if matcher.matches(header) {
                return Some(idx);
            }
        }
    }
    None
}

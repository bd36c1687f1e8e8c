//! Keyword frequency aggregation

use std::collections::HashMap;

/// Count tokens and keep the `limit` most frequent. Ties break by first
/// appearance in the token stream, matching counting-order semantics.
pub fn top_keywords<I>(tokens: I, limit: usize) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
    for token in tokens {
        let first_seen = counts.len();
        let entry = counts.entry(token).or_insert((0, first_seen));
        entry.0 += 1;
    }

    let mut rows: Vec<(String, u64, usize)> = counts
        .into_iter()
        .map(|(token, (count, order))| (token, count, order))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    rows.truncate(limit);
    rows.into_iter().map(|(token, count, _)| (token, count)).collect()
}

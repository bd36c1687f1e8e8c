//! Tag table extraction from the support-conversation export

mod discover;
mod schema;
mod table;

pub use discover::find_export;
pub use schema::{
    normalize_header, resolve_column, Matcher, FILE_TAG_MATCHERS, TABLE_COUNT_MATCHERS,
    TABLE_TAG_MATCHERS,
};
pub use table::extract_summary;

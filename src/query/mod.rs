//! Search-string parsing and the structured query it produces.

pub mod parser;
pub mod search_query;

pub use self::parser::QueryParser;
pub use self::search_query::{SearchQuery, filter_keys};

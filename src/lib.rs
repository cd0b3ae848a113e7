//! # Agora
//!
//! Question search for a community Q&A platform, in Rust.
//!
//! Agora parses free-form search strings into structured queries, runs them
//! against a question store and returns sorted, paginated result pages.
//!
//! ## Features
//!
//! - Search-string parser: quoted phrases, `key:value` filters, bare tags
//! - Tag, author, score, answer-count, view-count and age constraints
//! - Checkbox filters for unanswered questions
//! - Four sort orders with stable tie-breaking
//! - Zero-based pagination with platform-style page math
//!
//! ## Quick start
//!
//! ```
//! use agora::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let store = MemoryQuestionStore::new();
//!     store.insert(
//!         Question::builder(1)
//!             .author(7, "alice")
//!             .title("How do I fix a memory leak in Java?")
//!             .body("The heap keeps growing.")
//!             .tag(Tag::new(1, "java"))
//!             .build(),
//!     );
//!
//!     let engine = SearchEngine::new(store);
//!     let page = engine.search_str("\"memory leak\" java")?;
//!     assert_eq!(page.total_elements(), 1);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod model;
pub mod query;
pub mod search;
pub mod store;

/// Convenience re-exports for callers of the library API.
pub mod prelude {
    pub use crate::error::{AgoraError, Result};
    pub use crate::model::{Answer, Author, Question, QuestionBuilder, Tag};
    pub use crate::query::{QueryParser, SearchQuery};
    pub use crate::search::{
        CheckboxFilter, Page, PageRequest, QuestionSummary, SearchEngine, SearchPage,
        SearchRequest, SortMode,
    };
    pub use crate::store::{AuthorRef, MemoryQuestionStore, QuestionStore, VoteChoice};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

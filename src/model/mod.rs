//! Domain entities consumed by the search engine.

pub mod question;
pub mod tag;

pub use self::question::{Answer, Author, Question, QuestionBuilder};
pub use self::tag::Tag;

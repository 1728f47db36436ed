pub mod article;
pub mod verdict;

pub use article::{Article, InputTooShort, MIN_ARTICLE_CHARS};
pub use verdict::{DISCLAIMER, Probability, Verdict, classify};

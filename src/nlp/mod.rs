//! Text segmentation and tokenization shared by every downstream stage

pub mod splitter;
pub mod stopwords;
pub mod tokenizer;

pub use splitter::*;
pub use stopwords::*;
pub use tokenizer::*;

//! Filing text processing
//!
//! Markup stripping, tokenization and term-frequency vocabularies.

mod tokenizer;
mod vocab;

pub use tokenizer::Tokenizer;
pub use vocab::Vocabulary;

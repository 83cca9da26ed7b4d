//! src/mappers/mod.rs
mod tokenizer;
pub use tokenizer::Tokenizer;

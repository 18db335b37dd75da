//! Decoding side of the codec: line splitting and field tokenizing.

pub mod lines;
pub mod tokenizer;

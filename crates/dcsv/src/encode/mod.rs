//! Encoding side of the codec: per-cell escaping and row assembly.

pub mod escape;
pub mod writer;

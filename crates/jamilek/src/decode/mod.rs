//! Decoding pipeline: character stream -> classifier -> recursive-descent parser

pub mod class;
pub mod escape;
pub mod parser;
pub mod stream;

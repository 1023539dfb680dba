#![doc = include_str!("../README.md")]

pub mod decode;
pub mod error;
pub mod node;
pub mod options;

#[cfg(feature = "serde")]
pub mod de;

pub use crate::decode::parser::Parser;
pub use crate::decode::stream::{Char, Source, StrSource, Utf8Reader};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::node::Node;
pub use crate::options::Options;

use std::io::{BufReader, Read};

#[cfg(feature = "serde")]
use serde::de::DeserializeOwned;

/// Parse a document from any code-point source.
pub fn parse<S: Source>(source: S, options: &Options) -> Result<Node> {
    Parser::with_options(source, options).parse_document()
}

pub fn parse_str(s: &str) -> Result<Node> {
    parse(StrSource::new(s), &Options::default())
}

/// Parse a UTF-8 document from a byte reader without loading it into memory first.
pub fn parse_reader<R: Read>(reader: R, options: &Options) -> Result<Node> {
    parse(Utf8Reader::new(BufReader::new(reader)), options)
}

#[cfg(feature = "serde")]
pub fn from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    crate::de::from_str(s, options)
}

#[cfg(feature = "json")]
pub fn decode_to_json(s: &str, options: &Options) -> Result<serde_json::Value> {
    let node = parse(StrSource::new(s), options)?;
    Ok(node.into())
}

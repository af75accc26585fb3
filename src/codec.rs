//! Chunk codec: packs a batch of strings into one translation request payload
//! and splits the translated payload back into segments.
//!
//! Segments are separated by [`DELIMITER`]. The backend translates the whole
//! payload as one text, so the delimiter has to survive machine translation
//! untouched; three pipes do in practice, though the backend sometimes spaces
//! them out (`| | |`), which [`decode`] accepts.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::CodecError;

/// Token separating chunk entries inside one request payload
pub const DELIMITER: &str = "|||";

/// Delimiter as written between entries
const JOINER: &str = " ||| ";

/// RFC 3986 unreserved characters stay literal, everything else is escaped
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

static SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();

fn split_regex() -> &'static Regex {
    SPLIT_REGEX.get_or_init(|| Regex::new(r"\s*\|\s*\|\s*\|\s*").expect("delimiter regex is valid"))
}

/// Join the chunk into the raw (unescaped) payload.
///
/// Fails if an entry would be split by [`decode`]: it contains three pipes
/// (spaced or not), or starts or ends with a pipe that would merge with the
/// joiner.
pub fn join(chunk: &[String]) -> Result<String, CodecError> {
    if let Some(index) = chunk.iter().position(|s| collides(s)) {
        return Err(CodecError::DelimiterCollision { index });
    }
    Ok(chunk.join(JOINER))
}

fn collides(entry: &str) -> bool {
    let trimmed = entry.trim();
    split_regex().is_match(entry) || trimmed.starts_with('|') || trimmed.ends_with('|')
}

/// Join the chunk and percent-escape it for use as a query parameter value.
pub fn encode(chunk: &[String]) -> Result<String, CodecError> {
    let joined = join(chunk)?;
    Ok(utf8_percent_encode(&joined, QUERY_COMPONENT).to_string())
}

/// Split a translated payload on the delimiter and trim each segment.
pub fn decode(response_text: &str) -> Vec<String> {
    split_regex()
        .split(response_text)
        .map(|segment| segment.trim().to_string())
        .collect()
}

//! Syntactic URL checks and redirect target encoding.
//!
//! Submitted URLs are stored exactly as given. The check below only decides
//! whether the string parses; it never rewrites it and never requires a scheme
//! or host.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::{ParseError, Url};

/// Bytes escaped in a `Location` header: C0 controls, DEL and non-ASCII.
const LOCATION_SET: &AsciiSet = CONTROLS;

/// Base used to resolve URL references that carry no scheme.
static REFERENCE_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("http://reference.invalid/").expect("static base URL is valid")
});

/// Errors raised by [`check_url_syntax`].
#[derive(Debug, thiserror::Error)]
pub enum UrlSyntaxError {
    #[error("URL is empty")]
    Empty,

    #[error("URL contains a control character")]
    ControlCharacter,

    #[error("Invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("Missing protocol scheme")]
    MissingScheme,

    #[error("First path segment in URL cannot contain colon")]
    ColonInFirstSegment,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] ParseError),
}

/// Checks that `input` parses as an absolute URL or a URL reference.
///
/// Raw input is screened first: control bytes, malformed `%` escapes, an
/// empty scheme (`:foo`) and a colon in the first segment of a scheme-less
/// reference are rejected, since the parser would otherwise strip or tolerate
/// them. Relative references such as `/path` or `example.com/page` are then
/// accepted by resolving them against a throwaway base. Strings the parser
/// rejects outright (bad IPv6 literals, forbidden host code points,
/// out-of-range ports) fail.
///
/// # Errors
///
/// Returns [`UrlSyntaxError::Empty`] for an empty string, one of the screening
/// variants for malformed raw input, and [`UrlSyntaxError::InvalidFormat`]
/// when parsing fails.
pub fn check_url_syntax(input: &str) -> Result<(), UrlSyntaxError> {
    if input.is_empty() {
        return Err(UrlSyntaxError::Empty);
    }

    if input.bytes().any(|b| b < b' ' || b == 0x7f) {
        return Err(UrlSyntaxError::ControlCharacter);
    }

    check_escapes(input)?;

    if !has_scheme(input)? && first_segment(input).contains(':') {
        return Err(UrlSyntaxError::ColonInFirstSegment);
    }

    match Url::parse(input) {
        Ok(_) => Ok(()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            REFERENCE_BASE.join(input)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Every `%` must start a two-digit hex escape.
fn check_escapes(input: &str) -> Result<(), UrlSyntaxError> {
    let bytes = input.as_bytes();
    for (i, _) in input.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            let end = (i + 3).min(input.len());
            let shown = String::from_utf8_lossy(&bytes[i..end]).into_owned();
            return Err(UrlSyntaxError::InvalidEscape(shown));
        }
    }
    Ok(())
}

/// Whether `input` starts with `scheme:`.
///
/// A scheme is a letter followed by letters, digits, `+`, `-` or `.`. A
/// leading `:` is an empty scheme and is an error.
fn has_scheme(input: &str) -> Result<bool, UrlSyntaxError> {
    for (i, c) in input.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i == 0 => return Err(UrlSyntaxError::MissingScheme),
            ':' => return Ok(true),
            _ => return Ok(false),
        }
    }
    Ok(false)
}

/// Path segment before the first `/`, ignoring query and fragment.
fn first_segment(input: &str) -> &str {
    let end = input.find(['/', '?', '#']).unwrap_or(input.len());
    &input[..end]
}

/// Makes a stored URL safe to place in a `Location` header.
///
/// Control and non-ASCII bytes are percent-encoded. Everything else, spaces
/// included, is passed through untouched, so plain ASCII URLs come back
/// byte-for-byte identical.
pub fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION_SET).to_string()
}

//! Percent-escape decoding for body file fields.
//!
//! Body file producers write bytes that would break the line format (the `|`
//! delimiter, newlines, non-printable bytes) as `%XX` with upper-case hex
//! digits. Decoding is purely byte-oriented: the result is not required to be
//! valid UTF-8.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::bytes::{Captures, Regex};

lazy_static! {
    static ref ESCAPE_PATTERN: Regex = Regex::new(r"%([A-F0-9]{2})").unwrap();
}

/// Decode every `%XX` escape in `field` into the byte it names.
///
/// Returns the input unchanged (borrowed) when it contains no escapes.
pub fn decode_field(field: &[u8]) -> Cow<'_, [u8]> {
    ESCAPE_PATTERN.replace_all(field, |caps: &Captures<'_>| [hex_byte(&caps[1])])
}

fn hex_byte(digits: &[u8]) -> u8 {
    digits.iter().fold(0u8, |acc, digit| {
        let value = match digit {
            b'0'..=b'9' => digit - b'0',
            b'A'..=b'F' => digit - b'A' + 10,
            _ => 0,
        };
        (acc << 4) | value
    })
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Strict, section-aware FIX message tokenizer.
//!
//! Parses an SOH-delimited message into header, body, and trailer sections
//! without copying field values. Field values are returned as references to
//! the original input string.

use fixlens_core::error::DecodeError;
use memchr::memchr;
use smallvec::SmallVec;
use std::collections::HashMap;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// Standard header tags (FIX 4.x / FIXT 1.1 session header).
const HEADER_TAGS: [u32; 27] = [
    8, 9, 35, 49, 56, 115, 128, 90, 91, 34, 50, 142, 57, 143, 116, 144, 129, 145, 43, 97, 52,
    122, 212, 213, 347, 369, 1128,
];

/// Standard trailer tags.
const TRAILER_TAGS: [u32; 3] = [93, 89, 10];

/// One logical section of a parsed message, queryable by tag.
///
/// Within a section the first occurrence of a tag wins; repeated tags
/// (malformed input, unexpanded repeating groups) do not overwrite it.
#[derive(Debug, Default)]
pub struct Section<'a> {
    fields: HashMap<u32, &'a str>,
}

impl<'a> Section<'a> {
    /// Returns true if the section holds a value for the tag.
    #[must_use]
    pub fn is_set(&self, tag: u32) -> bool {
        self.fields.contains_key(&tag)
    }

    /// Returns the value for the tag, if set.
    #[must_use]
    pub fn get(&self, tag: u32) -> Option<&'a str> {
        self.fields.get(&tag).copied()
    }

    /// Returns the number of distinct tags in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the section holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert_first(&mut self, tag: u32, value: &'a str) {
        self.fields.entry(tag).or_insert(value);
    }
}

/// A FIX message parsed into header, body, and trailer sections.
///
/// Values are zero-copy references into the input string.
#[derive(Debug)]
pub struct ParsedMessage<'a> {
    header: Section<'a>,
    body: Section<'a>,
    trailer: Section<'a>,
}

impl<'a> ParsedMessage<'a> {
    /// Parses an SOH-delimited FIX message into sections.
    ///
    /// The input must start with a BeginString field (tag 8) and every
    /// field must have the `tag=value` shape with a numeric tag. A message
    /// whose final field lacks the trailing SOH is still accepted.
    ///
    /// # Arguments
    /// * `input` - The SOH-delimited message text
    ///
    /// # Errors
    /// Returns `DecodeError` if the input is empty, does not begin with
    /// tag 8, or contains a malformed field.
    pub fn parse(input: &'a str) -> Result<Self, DecodeError> {
        let fields = tokenize(input)?;

        let first = fields.first().ok_or(DecodeError::NoParsableFields)?;
        if first.0 != 8 {
            return Err(DecodeError::MissingBeginString);
        }

        let mut message = Self {
            header: Section::default(),
            body: Section::default(),
            trailer: Section::default(),
        };
        for (tag, value) in fields {
            message.section_for_mut(tag).insert_first(tag, value);
        }
        Ok(message)
    }

    /// Returns the header section.
    #[must_use]
    pub const fn header(&self) -> &Section<'a> {
        &self.header
    }

    /// Returns the body section.
    #[must_use]
    pub const fn body(&self) -> &Section<'a> {
        &self.body
    }

    /// Returns the trailer section.
    #[must_use]
    pub const fn trailer(&self) -> &Section<'a> {
        &self.trailer
    }

    /// Returns the sections in lookup priority order: header, body, trailer.
    #[must_use]
    pub const fn sections(&self) -> [&Section<'a>; 3] {
        [&self.header, &self.body, &self.trailer]
    }

    fn section_for_mut(&mut self, tag: u32) -> &mut Section<'a> {
        if HEADER_TAGS.contains(&tag) {
            &mut self.header
        } else if TRAILER_TAGS.contains(&tag) {
            &mut self.trailer
        } else {
            &mut self.body
        }
    }
}

/// Splits the input into `(tag, value)` pairs, strictly.
///
/// Every token must contain `=` with a valid numeric tag before it.
fn tokenize(input: &str) -> Result<SmallVec<[(u32, &str); 32]>, DecodeError> {
    let mut fields: SmallVec<[(u32, &str); 32]> = SmallVec::new();
    let bytes = input.as_bytes();
    let mut offset = 0;

    while offset < bytes.len() {
        let remaining = &bytes[offset..];

        // SIMD-accelerated delimiter search; SOH and '=' are ASCII so the
        // resulting offsets are valid str boundaries.
        let eq_pos = memchr(EQUALS, remaining)
            .ok_or(DecodeError::MalformedField { offset })?;
        let tag_text = &input[offset..offset + eq_pos];
        let tag = parse_tag(tag_text.as_bytes())
            .ok_or_else(|| DecodeError::InvalidTag(tag_text.to_string()))?;

        let value_start = offset + eq_pos + 1;
        let value_end = match memchr(SOH, &bytes[value_start..]) {
            Some(soh_pos) => value_start + soh_pos,
            None => bytes.len(),
        };
        fields.push((tag, &input[value_start..value_end]));

        offset = value_end + 1;
    }

    Ok(fields)
}

/// Parses a tag number from ASCII bytes.
///
/// # Returns
/// The parsed tag number, or `None` if invalid.
#[inline]
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut result: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add((b - b'0') as u32)?;
    }

    Some(result)
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Decoded output types.
//!
//! This module provides:
//! - [`DecodedField`]: One annotated tag=value pair
//! - [`DecodedMessage`]: The full result of decoding one raw message

use serde::{Deserialize, Serialize};

/// Sentinel tag for the synthetic version pseudo-field that leads every
/// successfully decoded message.
pub const VERSION_PSEUDO_TAG: &str = "VERSION";

/// One decoded and annotated FIX field.
///
/// Created fresh per decode call, owned by its [`DecodedMessage`], and
/// never mutated after creation. The `tag` is a string because the leading
/// pseudo-field uses the [`VERSION_PSEUDO_TAG`] sentinel rather than a
/// numeric tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedField {
    /// Tag as text; either a numeric FIX tag or the version sentinel.
    pub tag: String,
    /// Field name from the specification, or a synthetic `Tag<N>` name.
    pub name: String,
    /// Raw value exactly as it appeared in the message.
    pub raw_value: String,
    /// Human-readable meaning of the value; empty when the value needs no
    /// annotation.
    pub semantic_value: String,
    /// Multi-line descriptive text for display.
    pub description: String,
    /// Nesting depth for presentation (repeating groups); 0 for flat fields.
    pub indent_level: u32,
}

impl DecodedField {
    /// Creates a new decoded field with no annotation.
    ///
    /// # Arguments
    /// * `tag` - The tag text
    /// * `name` - The resolved field name
    /// * `raw_value` - The raw value from the message
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        name: impl Into<String>,
        raw_value: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            raw_value: raw_value.into(),
            semantic_value: String::new(),
            description: String::new(),
            indent_level: 0,
        }
    }

    /// Sets the semantic value.
    #[must_use]
    pub fn with_semantic_value(mut self, semantic_value: impl Into<String>) -> Self {
        self.semantic_value = semantic_value.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the tag parsed as a number, or `None` for non-numeric tags
    /// such as the version sentinel.
    #[must_use]
    pub fn numeric_tag(&self) -> Option<u32> {
        self.tag.parse().ok()
    }

    /// Returns true if this is the synthetic version pseudo-field.
    #[must_use]
    pub fn is_version_pseudo_field(&self) -> bool {
        self.tag == VERSION_PSEUDO_TAG
    }
}

/// The result of decoding one raw FIX message.
///
/// `error` set means `fields` is empty or partial; an error-free message
/// always has a non-empty field sequence starting with the synthetic
/// version pseudo-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedMessage {
    /// The raw input text, as supplied by the caller.
    pub raw_text: String,
    /// Decoded fields in display order.
    pub fields: Vec<DecodedField>,
    /// Decode failure description, if any.
    pub error: Option<String>,
}

impl DecodedMessage {
    /// Creates a successfully decoded message.
    ///
    /// # Arguments
    /// * `raw_text` - The original input
    /// * `fields` - The decoded fields in display order
    #[must_use]
    pub fn new(raw_text: impl Into<String>, fields: Vec<DecodedField>) -> Self {
        Self {
            raw_text: raw_text.into(),
            fields,
            error: None,
        }
    }

    /// Creates a failed decode result carrying an error description.
    #[must_use]
    pub fn with_error(raw_text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            fields: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Returns true if decoding succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_field_builder() {
        let field = DecodedField::new("54", "Side", "1")
            .with_semantic_value("Buy")
            .with_description("Side of order");
        assert_eq!(field.tag, "54");
        assert_eq!(field.name, "Side");
        assert_eq!(field.raw_value, "1");
        assert_eq!(field.semantic_value, "Buy");
        assert_eq!(field.description, "Side of order");
        assert_eq!(field.indent_level, 0);
    }

    #[test]
    fn test_numeric_tag() {
        assert_eq!(DecodedField::new("35", "MsgType", "D").numeric_tag(), Some(35));
        assert_eq!(
            DecodedField::new(VERSION_PSEUDO_TAG, "Version", "FIX 4.4").numeric_tag(),
            None
        );
    }

    #[test]
    fn test_version_pseudo_field() {
        let field = DecodedField::new(VERSION_PSEUDO_TAG, "Version", "FIX 4.4");
        assert!(field.is_version_pseudo_field());
        assert!(!DecodedField::new("8", "BeginString", "FIX.4.4").is_version_pseudo_field());
    }

    #[test]
    fn test_decoded_message_ok() {
        let msg = DecodedMessage::new("8=FIX.4.4", vec![]);
        assert!(msg.is_ok());
        assert!(msg.error.is_none());
    }

    #[test]
    fn test_decoded_message_error() {
        let msg = DecodedMessage::with_error("garbage", "no parsable fields");
        assert!(!msg.is_ok());
        assert!(msg.fields.is_empty());
        assert_eq!(msg.error.as_deref(), Some("no parsable fields"));
    }
}

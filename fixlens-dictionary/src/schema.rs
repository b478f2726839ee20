/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Schema definitions for FIX specifications.
//!
//! This module defines the structures that annotate decoded output:
//! - [`FieldSpec`]: Field definitions with tag, name, type, and enum values
//! - [`MessageSpec`]: Message definitions (kept for completeness, not
//!   consumed by the decoder)
//! - [`Specification`]: Complete per-version dictionary

use fixlens_core::FixVersion;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Tags that are structurally significant to every FIX message and always
/// present in the built-in minimal fallback specification.
pub const STRUCTURAL_TAGS: [u32; 8] = [8, 9, 10, 34, 35, 49, 52, 56];

/// Definition of a FIX field.
///
/// Owned exclusively by its parent [`Specification`]; immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Declared field type (e.g. `STRING`, `PRICE`).
    pub field_type: String,
    /// Free-text description.
    pub description: String,
    /// Enumerated value meanings, keyed by coded value. Ordered so that
    /// serialized cache artifacts are deterministic.
    pub values: BTreeMap<String, String>,
}

impl FieldSpec {
    /// Creates a new field specification with no enum values.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The declared field type
    /// * `description` - The field description
    #[must_use]
    pub fn new(
        tag: u32,
        name: impl Into<String>,
        field_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tag,
            name: name.into(),
            field_type: field_type.into(),
            description: description.into(),
            values: BTreeMap::new(),
        }
    }

    /// Adds enumerated value meanings.
    #[must_use]
    pub fn with_values(mut self, values: BTreeMap<String, String>) -> Self {
        self.values = values;
        self
    }

    /// Looks up the meaning of a coded value, exact match first, then
    /// case-insensitive.
    #[must_use]
    pub fn meaning_of(&self, value: &str) -> Option<&str> {
        if let Some(meaning) = self.values.get(value) {
            return Some(meaning);
        }
        self.values
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(value))
            .map(|(_, v)| v.as_str())
    }
}

/// Definition of a FIX message type.
///
/// Parsed from the specification document and kept for completeness and
/// extension; the decoder does not consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSpec {
    /// Message type value (tag 35).
    pub msg_type: String,
    /// Message name.
    pub name: String,
    /// Message category (admin or app).
    pub category: String,
    /// Message description.
    pub description: String,
}

/// Complete FIX specification for a single protocol version.
///
/// Read-only after construction and shared across decode calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    /// The protocol version this specification describes.
    pub version: FixVersion,
    /// Field definitions indexed by tag. Tags are unique.
    pub fields: HashMap<u32, FieldSpec>,
    /// Message definitions indexed by msg_type.
    pub messages: HashMap<String, MessageSpec>,
}

impl Specification {
    /// Creates a new empty specification for the given version.
    #[must_use]
    pub fn new(version: FixVersion) -> Self {
        Self {
            version,
            fields: HashMap::new(),
            messages: HashMap::new(),
        }
    }

    /// Creates the built-in minimal fallback specification.
    ///
    /// Contains only the eight structurally significant fields, with fixed
    /// name, type, and description and no enum values. Used when every
    /// other resolution tier has failed.
    #[must_use]
    pub fn minimal(version: FixVersion) -> Self {
        let mut spec = Self::new(version);
        for tag in STRUCTURAL_TAGS {
            // structural_field is total over STRUCTURAL_TAGS
            if let Some(field) = structural_field(tag) {
                spec.add_field(field);
            }
        }
        spec
    }

    /// Adds a field definition.
    pub fn add_field(&mut self, field: FieldSpec) {
        self.fields.insert(field.tag, field);
    }

    /// Adds a message definition.
    pub fn add_message(&mut self, message: MessageSpec) {
        self.messages.insert(message.msg_type.clone(), message);
    }

    /// Gets a field definition by tag.
    #[must_use]
    pub fn get_field(&self, tag: u32) -> Option<&FieldSpec> {
        self.fields.get(&tag)
    }

    /// Gets a message definition by type.
    #[must_use]
    pub fn get_message(&self, msg_type: &str) -> Option<&MessageSpec> {
        self.messages.get(msg_type)
    }

    /// Returns the number of field definitions.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Returns the built-in definition for a structurally significant tag.
#[must_use]
pub fn structural_field(tag: u32) -> Option<FieldSpec> {
    let (name, field_type, description) = match tag {
        8 => (
            "BeginString",
            "STRING",
            "Identifies beginning of new message and protocol version. Always first field in message.",
        ),
        9 => (
            "BodyLength",
            "LENGTH",
            "Message length, in bytes, forward to the CheckSum field. Always second field in message.",
        ),
        10 => (
            "CheckSum",
            "STRING",
            "Three byte, simple checksum. Always last field in message.",
        ),
        34 => ("MsgSeqNum", "SEQNUM", "Integer message sequence number."),
        35 => (
            "MsgType",
            "STRING",
            "Defines message type. Always third field in message.",
        ),
        49 => (
            "SenderCompID",
            "STRING",
            "Assigned value used to identify firm sending message.",
        ),
        52 => (
            "SendingTime",
            "UTCTIMESTAMP",
            "Time of message transmission in UTC.",
        ),
        56 => (
            "TargetCompID",
            "STRING",
            "Assigned value used to identify receiving firm.",
        ),
        _ => return None,
    };
    Some(FieldSpec::new(tag, name, field_type, description))
}

/// Returns the default description for a tag when the specification
/// document carries none: the built-in text for structural tags, else a
/// generic placeholder.
#[must_use]
pub fn default_description(tag: u32) -> String {
    structural_field(tag).map_or_else(|| format!("FIX field {tag}"), |f| f.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_specification() {
        let spec = Specification::minimal(FixVersion::Fix42);
        assert_eq!(spec.field_count(), 8);
        for tag in STRUCTURAL_TAGS {
            assert!(spec.get_field(tag).is_some(), "missing structural tag {tag}");
        }
        assert_eq!(spec.get_field(8).unwrap().name, "BeginString");
        assert_eq!(spec.get_field(10).unwrap().name, "CheckSum");
        assert!(spec.get_field(8).unwrap().values.is_empty());
    }

    #[test]
    fn test_meaning_of_case_insensitive() {
        let mut values = BTreeMap::new();
        values.insert("B".to_string(), "Buy".to_string());
        let field = FieldSpec::new(54, "Side", "CHAR", "Side of order").with_values(values);

        assert_eq!(field.meaning_of("B"), Some("Buy"));
        assert_eq!(field.meaning_of("b"), Some("Buy"));
        assert_eq!(field.meaning_of("X"), None);
    }

    #[test]
    fn test_default_description() {
        assert!(default_description(8).contains("protocol version"));
        assert_eq!(default_description(999), "FIX field 999");
    }

    #[test]
    fn test_specification_field_operations() {
        let mut spec = Specification::new(FixVersion::Fix44);
        spec.add_field(FieldSpec::new(55, "Symbol", "STRING", "Ticker symbol"));

        assert!(spec.get_field(55).is_some());
        assert!(spec.get_field(999).is_none());
        assert_eq!(spec.field_count(), 1);
    }

    #[test]
    fn test_specification_message_operations() {
        let mut spec = Specification::new(FixVersion::Fix44);
        spec.add_message(MessageSpec {
            msg_type: "D".to_string(),
            name: "NewOrderSingle".to_string(),
            category: "app".to_string(),
            description: String::new(),
        });

        assert_eq!(spec.get_message("D").unwrap().name, "NewOrderSingle");
        assert!(spec.get_message("Z9").is_none());
    }
}

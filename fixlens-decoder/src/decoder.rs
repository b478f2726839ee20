/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Two-strategy FIX message decoder.
//!
//! The structured strategy normalizes delimiters and hands the text to the
//! strict section-aware tokenizer; the manual strategy is a forgiving
//! split-based fallback. Each returns an explicit `Result` and the decoder
//! composes them: try structured, else manual, else fail with both causes.

use crate::{order, semantics};
use fixlens_core::{DecodeError, DecodedField};
use fixlens_dictionary::{FieldSpec, Specification};
use fixlens_tagvalue::ParsedMessage;
use tracing::debug;

/// Candidate field separators for manual tokenization, in priority order.
const DELIMITERS: [&str; 3] = ["\u{0001}", "|", "^A"];

/// Upper bound of the structured-strategy tag scan (exclusive).
const MAX_SCAN_TAG: u32 = 2000;

/// Decodes raw FIX text into annotated fields using a resolved
/// specification.
#[derive(Debug)]
pub struct MessageDecoder;

impl MessageDecoder {
    /// Decodes a raw message into an ordered sequence of annotated fields.
    ///
    /// # Arguments
    /// * `raw` - The raw message text, in any supported delimiter convention
    /// * `spec` - The resolved specification for the detected version
    ///
    /// # Errors
    /// Returns `DecodeError::Unparsable` only when both strategies fail to
    /// extract any field.
    pub fn decode(raw: &str, spec: &Specification) -> Result<Vec<DecodedField>, DecodeError> {
        let pairs = match structured_fields(raw) {
            Ok(pairs) => pairs,
            Err(structured_err) => {
                debug!(error = %structured_err, "structured strategy failed, falling back");
                match manual_fields(raw) {
                    Ok(pairs) => pairs,
                    Err(manual_err) => {
                        return Err(DecodeError::Unparsable {
                            structured: structured_err.to_string(),
                            manual: manual_err.to_string(),
                        });
                    }
                }
            }
        };

        let mut fields: Vec<DecodedField> = pairs
            .into_iter()
            .map(|(tag, value)| enrich(tag, &value, spec))
            .collect();
        order::sort_fields(&mut fields);
        Ok(fields)
    }
}

/// Structured extraction: normalize delimiters, parse into sections, scan
/// the bounded tag range.
///
/// For each tag the first non-empty value across header, body, and trailer
/// (in that priority) wins; once recorded the tag is processed and later
/// sections cannot overwrite it.
fn structured_fields(raw: &str) -> Result<Vec<(u32, String)>, DecodeError> {
    let normalized = normalize_delimiters(raw);
    let message = ParsedMessage::parse(&normalized)?;

    let mut pairs = Vec::new();
    for tag in 1..MAX_SCAN_TAG {
        for section in message.sections() {
            if !section.is_set(tag) {
                continue;
            }
            match section.get(tag) {
                Some(value) if !value.is_empty() => {
                    pairs.push((tag, value.to_string()));
                    break;
                }
                // Empty or unreadable value in this section: try the next.
                _ => {}
            }
        }
    }
    Ok(pairs)
}

/// Manual extraction: split on the first delimiter that yields more than
/// one token (space as last resort), keep well-formed `tag=value` tokens.
///
/// A token qualifies when `=` is neither its first nor last character and
/// the tag portion parses as a non-negative integer; everything else is
/// discarded silently.
fn manual_fields(raw: &str) -> Result<Vec<(u32, String)>, DecodeError> {
    let mut pairs = Vec::new();
    for token in split_tokens(raw) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let Some(eq) = token.find('=') else {
            continue;
        };
        if eq == 0 || eq == token.len() - 1 {
            continue;
        }
        let (tag_text, rest) = token.split_at(eq);
        let Ok(tag) = tag_text.trim().parse::<u32>() else {
            continue;
        };
        pairs.push((tag, rest[1..].to_string()));
    }

    if pairs.is_empty() {
        return Err(DecodeError::NoParsableFields);
    }
    Ok(pairs)
}

fn split_tokens(raw: &str) -> Vec<&str> {
    for delimiter in DELIMITERS {
        let tokens: Vec<&str> = raw.split(delimiter).collect();
        if tokens.len() > 1 {
            return tokens;
        }
    }
    raw.split(' ').collect()
}

/// Replaces `|` and the literal `^A` with the canonical SOH separator.
fn normalize_delimiters(raw: &str) -> String {
    raw.replace("^A", "\u{0001}").replace('|', "\u{0001}")
}

/// Enriches one extracted pair into an annotated field.
fn enrich(tag: u32, value: &str, spec: &Specification) -> DecodedField {
    let field_spec = spec.get_field(tag);

    let name = field_spec.map_or_else(|| format!("Tag{tag}"), |f| f.name.clone());
    let resolved = resolve_semantic(tag, value, field_spec);
    let semantic_value = if resolved == value {
        // No substitution happened: omit to avoid redundant display.
        String::new()
    } else {
        resolved
    };
    let description = compose_description(tag, value, field_spec, spec);

    DecodedField::new(tag.to_string(), name, value)
        .with_semantic_value(semantic_value)
        .with_description(description)
}

/// Resolves the semantic meaning of a value: specification enum lookup
/// (exact, then case-insensitive), then the built-in table, then the raw
/// value unchanged.
fn resolve_semantic(tag: u32, value: &str, field_spec: Option<&FieldSpec>) -> String {
    if let Some(meaning) = field_spec.and_then(|f| f.meaning_of(value)) {
        return meaning.to_string();
    }
    semantics::lookup(tag, value).map_or_else(|| value.to_string(), String::from)
}

/// Composes the multi-line description for one field.
fn compose_description(
    tag: u32,
    value: &str,
    field_spec: Option<&FieldSpec>,
    spec: &Specification,
) -> String {
    let Some(field) = field_spec else {
        return format!(
            "Unknown field: tag {tag} is not defined in the {} specification",
            spec.version
        );
    };

    let mut lines = vec![
        format!("Field: {} (tag {tag})", field.name),
        format!("Type: {}", field.field_type),
        format!("Value: {value}"),
    ];
    if !field.description.is_empty() {
        lines.push(field.description.clone());
    }

    if field.values.is_empty() {
        if let Some(label) = semantics::lookup(tag, value) {
            lines.push(format!("Meaning: {label}"));
        }
    } else {
        lines.push("Valid values:".to_string());
        for (key, meaning) in &field.values {
            let marker = if key == value || key.eq_ignore_ascii_case(value) {
                "  <-- current"
            } else {
                ""
            };
            lines.push(format!("  {key} = {meaning}{marker}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_core::FixVersion;
    use std::collections::BTreeMap;

    fn test_spec() -> Specification {
        let mut spec = Specification::minimal(FixVersion::Fix44);
        spec.add_field(FieldSpec::new(55, "Symbol", "STRING", "Ticker symbol"));
        spec.add_field(FieldSpec::new(11, "ClOrdID", "STRING", "Client order id"));

        let mut side_values = BTreeMap::new();
        side_values.insert("1".to_string(), "BUY".to_string());
        side_values.insert("2".to_string(), "SELL".to_string());
        spec.add_field(
            FieldSpec::new(54, "Side", "CHAR", "Side of order").with_values(side_values),
        );
        spec
    }

    const ORDER: &str = "8=FIX.4.4|9=100|35=D|49=SENDER|56=TARGET|34=1|11=ORDER1|54=1|55=MSFT|10=123";

    #[test]
    fn test_structured_path_decodes_pipe_delimited() {
        let spec = test_spec();
        let fields = MessageDecoder::decode(ORDER, &spec).unwrap();

        assert_eq!(fields.first().unwrap().tag, "8");
        assert_eq!(fields.last().unwrap().tag, "10");
        let side = fields.iter().find(|f| f.tag == "54").unwrap();
        assert_eq!(side.name, "Side");
        assert_eq!(side.semantic_value, "BUY");
    }

    #[test]
    fn test_builtin_semantics_when_spec_has_no_enum() {
        // Minimal spec knows nothing about OrdType; built-in table applies.
        let spec = Specification::minimal(FixVersion::Fix44);
        let fields =
            MessageDecoder::decode("8=FIX.4.4|35=D|40=2|10=000", &spec).unwrap();

        let ord_type = fields.iter().find(|f| f.tag == "40").unwrap();
        assert_eq!(ord_type.name, "Tag40");
        assert_eq!(ord_type.semantic_value, "Limit");
    }

    #[test]
    fn test_semantic_omitted_when_equal_to_raw() {
        let spec = test_spec();
        let fields = MessageDecoder::decode(ORDER, &spec).unwrap();
        let symbol = fields.iter().find(|f| f.tag == "55").unwrap();
        assert_eq!(symbol.semantic_value, "");
    }

    #[test]
    fn test_manual_fallback_without_begin_string() {
        // Tokenizer rejects a message not starting with tag 8; the manual
        // strategy still extracts fields.
        let spec = test_spec();
        let fields = MessageDecoder::decode("35=D|54=2|55=IBM", &spec).unwrap();

        assert_eq!(fields.len(), 3);
        let side = fields.iter().find(|f| f.tag == "54").unwrap();
        assert_eq!(side.semantic_value, "SELL");
    }

    #[test]
    fn test_manual_discards_malformed_tokens() {
        let spec = test_spec();
        let fields =
            MessageDecoder::decode("35=D|garbage|=5|54=|abc=1|55=IBM", &spec).unwrap();
        let tags: Vec<&str> = fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, ["35", "55"]);
    }

    #[test]
    fn test_unparsable_carries_both_causes() {
        let spec = test_spec();
        let err = MessageDecoder::decode("hello world", &spec).unwrap_err();
        match err {
            DecodeError::Unparsable { structured, manual } => {
                assert!(!structured.is_empty());
                assert!(manual.contains("no parsable fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_tags_preserve_extraction_order() {
        let spec = test_spec();
        // No tag 8, so the manual strategy runs and keeps both symbols.
        let fields = MessageDecoder::decode("35=D|55=MSFT|55=AAPL", &spec).unwrap();
        let symbols: Vec<&str> = fields
            .iter()
            .filter(|f| f.tag == "55")
            .map(|f| f.raw_value.as_str())
            .collect();
        assert_eq!(symbols, ["MSFT", "AAPL"]);
    }

    #[test]
    fn test_unknown_tag_description() {
        let spec = Specification::minimal(FixVersion::Fix44);
        let fields = MessageDecoder::decode("8=FIX.4.4|9999=x|10=000", &spec).unwrap();
        let unknown = fields.iter().find(|f| f.tag == "9999").unwrap();
        assert_eq!(unknown.name, "Tag9999");
        assert!(unknown.description.contains("not defined in the FIX.4.4 specification"));
    }

    #[test]
    fn test_enum_table_marks_current_value() {
        let spec = test_spec();
        let fields = MessageDecoder::decode(ORDER, &spec).unwrap();
        let side = fields.iter().find(|f| f.tag == "54").unwrap();
        assert!(side.description.contains("1 = BUY  <-- current"));
        assert!(side.description.contains("2 = SELL"));
        assert!(!side.description.contains("2 = SELL  <-- current"));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let spec = test_spec();
        let first = MessageDecoder::decode(ORDER, &spec).unwrap();
        let second = MessageDecoder::decode(ORDER, &spec).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_is_permutation_invariant() {
        let spec = test_spec();
        let a = MessageDecoder::decode("8=FIX.4.4|55=MSFT|54=1|11=X|10=123", &spec).unwrap();
        let b = MessageDecoder::decode("8=FIX.4.4|11=X|54=1|55=MSFT|10=123", &spec).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_caret_a_delimited_input() {
        let spec = test_spec();
        let fields = MessageDecoder::decode("8=FIX.4.4^A35=D^A54=1^A10=123", &spec).unwrap();
        let side = fields.iter().find(|f| f.tag == "54").unwrap();
        assert_eq!(side.semantic_value, "BUY");
    }
}

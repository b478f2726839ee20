/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! QuickFIX XML specification document parser.
//!
//! Extracts field definitions (`<field number=.. name=.. type=..>` with
//! nested `<value enum=.. description=../>` entries and an optional nested
//! `<description>` text node) and message definitions (`<message name=..
//! msgtype=.. msgcat=../>`). Field references inside message layouts carry
//! no `number` attribute and are ignored.

use crate::schema::{FieldSpec, MessageSpec, Specification, default_description};
use fixlens_core::{FixVersion, ProviderError};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::BTreeMap;

/// A field definition under construction.
struct PendingField {
    tag: u32,
    name: String,
    field_type: String,
    description: Option<String>,
    values: BTreeMap<String, String>,
}

/// Parses a specification document into a [`Specification`].
///
/// # Arguments
/// * `version` - The protocol version the document describes
/// * `document` - The XML document text
///
/// # Errors
/// Returns `ProviderError::Document` if the XML is malformed or contains
/// no field definitions.
pub fn parse_spec(version: FixVersion, document: &str) -> Result<Specification, ProviderError> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut spec = Specification::new(version);
    let mut current: Option<PendingField> = None;
    let mut in_description = false;

    loop {
        match reader.read_event().map_err(to_document_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"field" => {
                    if let Some(pending) = read_field_start(&e)? {
                        current = Some(pending);
                    }
                }
                b"value" => {
                    if let Some(pending) = current.as_mut() {
                        read_value(&e, pending)?;
                    }
                }
                b"description" if current.is_some() => in_description = true,
                b"message" => read_message(&e, &mut spec)?,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"field" => {
                    if let Some(pending) = read_field_start(&e)? {
                        spec.add_field(finalize(pending));
                    }
                }
                b"value" => {
                    if let Some(pending) = current.as_mut() {
                        read_value(&e, pending)?;
                    }
                }
                b"message" => read_message(&e, &mut spec)?,
                _ => {}
            },
            Event::Text(t) if in_description => {
                if let Some(pending) = current.as_mut() {
                    let text = t.unescape().map_err(to_document_error)?;
                    pending
                        .description
                        .get_or_insert_with(String::new)
                        .push_str(&text);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"description" => in_description = false,
                b"field" => {
                    if let Some(pending) = current.take() {
                        spec.add_field(finalize(pending));
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if spec.fields.is_empty() {
        return Err(ProviderError::Document(
            "no field definitions in document".to_string(),
        ));
    }
    Ok(spec)
}

/// Starts a field definition if the element carries a `number` attribute.
///
/// Message-layout field references have only `name`/`required` and yield
/// `None`.
fn read_field_start(e: &BytesStart<'_>) -> Result<Option<PendingField>, ProviderError> {
    let Some(number) = attr(e, b"number")? else {
        return Ok(None);
    };
    let tag: u32 = number
        .trim()
        .parse()
        .map_err(|_| ProviderError::Document(format!("invalid field number: {number}")))?;
    let Some(name) = attr(e, b"name")? else {
        return Ok(None);
    };
    let field_type = attr(e, b"type")?.unwrap_or_else(|| "STRING".to_string());

    Ok(Some(PendingField {
        tag,
        name,
        field_type,
        description: None,
        values: BTreeMap::new(),
    }))
}

/// Adds one enumerated value entry. Value nodes without an `enum` (or
/// legacy `value`) attribute are skipped.
fn read_value(e: &BytesStart<'_>, pending: &mut PendingField) -> Result<(), ProviderError> {
    let key = match attr(e, b"enum")? {
        Some(key) => key,
        None => match attr(e, b"value")? {
            Some(key) => key,
            None => return Ok(()),
        },
    };
    let meaning = attr(e, b"description")?.unwrap_or_default();
    pending.values.entry(key).or_insert(meaning);
    Ok(())
}

/// Adds one message definition. Elements missing `msgtype` are skipped.
fn read_message(e: &BytesStart<'_>, spec: &mut Specification) -> Result<(), ProviderError> {
    let Some(msg_type) = attr(e, b"msgtype")? else {
        return Ok(());
    };
    let name = attr(e, b"name")?.unwrap_or_default();
    let category = attr(e, b"msgcat")?.unwrap_or_default();
    spec.add_message(MessageSpec {
        msg_type,
        name,
        category,
        description: String::new(),
    });
    Ok(())
}

/// Completes a pending field, filling in the default description when the
/// document carried none.
fn finalize(pending: PendingField) -> FieldSpec {
    let description = match pending.description {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => default_description(pending.tag),
    };
    FieldSpec::new(pending.tag, pending.name, pending.field_type, description)
        .with_values(pending.values)
}

/// Reads a single attribute value by key.
fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, ProviderError> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(to_document_error)?;
        if attribute.key.as_ref() == key {
            let value = attribute.unescape_value().map_err(to_document_error)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn to_document_error(err: impl std::fmt::Display) -> ProviderError {
    ProviderError::Document(err.to_string())
}

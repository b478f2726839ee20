/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Local specification cache artifacts.
//!
//! One CSV file per version, named after the specification document:
//! a header row followed by one row per field with tag, name, type,
//! description (newlines collapsed to spaces), and semicolon-joined
//! `key=value` enum pairs. Standard CSV quoting applies, so embedded
//! commas and doubled quotes round-trip.
//!
//! Both operations return `Result`; the provider deliberately ignores
//! write failures (persistence is best-effort) and treats read failures
//! as a tier miss.

use crate::schema::{FieldSpec, Specification};
use fixlens_core::{FixVersion, ProviderError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const HEADER: [&str; 5] = ["tag", "name", "type", "description", "values"];

/// Returns the cache artifact path for a version under the given directory.
#[must_use]
pub fn cache_path(dir: &Path, version: FixVersion) -> PathBuf {
    dir.join(format!("{}.csv", version.spec_file_name()))
}

/// Writes the field table of a specification to a cache artifact.
///
/// Message definitions are not persisted; a cache-restored specification
/// carries fields only.
///
/// # Errors
/// Returns `ProviderError::CacheIo` on any I/O or serialization failure.
pub fn write_cache(path: &Path, spec: &Specification) -> Result<(), ProviderError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_cache_io)?;
    }

    // Quote every non-numeric column so embedded commas, doubled quotes,
    // and collapsed descriptions round-trip.
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_path(path)
        .map_err(to_cache_io)?;
    writer.write_record(HEADER).map_err(to_cache_io)?;

    // Sorted by tag so the artifact is byte-stable across writes.
    let mut fields: Vec<&FieldSpec> = spec.fields.values().collect();
    fields.sort_by_key(|f| f.tag);

    for field in fields {
        writer
            .write_record([
                field.tag.to_string(),
                field.name.clone(),
                field.field_type.clone(),
                collapse_newlines(&field.description),
                join_values(&field.values),
            ])
            .map_err(to_cache_io)?;
    }
    writer.flush().map_err(to_cache_io)?;
    Ok(())
}

/// Reads a specification back from a cache artifact.
///
/// # Errors
/// Returns `ProviderError::CacheIo` if the artifact cannot be read and
/// `ProviderError::CacheFormat` if a row is malformed.
pub fn read_cache(path: &Path, version: FixVersion) -> Result<Specification, ProviderError> {
    let mut reader = csv::Reader::from_path(path).map_err(to_cache_io)?;
    let mut spec = Specification::new(version);

    for record in reader.records() {
        let record = record.map_err(to_cache_io)?;
        if record.len() < 5 {
            return Err(ProviderError::CacheFormat(format!(
                "expected 5 columns, found {}",
                record.len()
            )));
        }
        let tag: u32 = record[0]
            .trim()
            .parse()
            .map_err(|_| ProviderError::CacheFormat(format!("invalid tag: {}", &record[0])))?;
        let field = FieldSpec::new(tag, &record[1], &record[2], &record[3])
            .with_values(split_values(&record[4]));
        spec.add_field(field);
    }

    if spec.fields.is_empty() {
        return Err(ProviderError::CacheFormat("empty cache artifact".to_string()));
    }
    Ok(spec)
}

/// Collapses newlines to spaces so descriptions stay single-row.
fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Joins enum values as `key=value` pairs separated by semicolons.
fn join_values(values: &BTreeMap<String, String>) -> String {
    values
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(";")
}

/// Parses a semicolon-joined `key=value` list back into a map.
fn split_values(text: &str) -> BTreeMap<String, String> {
    text.split(';')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (!key.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect()
}

fn to_cache_io(err: impl std::fmt::Display) -> ProviderError {
    ProviderError::CacheIo(err.to_string())
}

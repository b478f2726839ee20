/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! FIX protocol version catalog and detection.
//!
//! This module provides:
//! - [`FixVersion`]: Enumeration of supported FIX protocol versions
//! - Delimiter-agnostic BeginString extraction via [`FixVersion::detect`]
//! - Total mappings to specification file names and display names

use serde::{Deserialize, Serialize};

/// SOH (Start of Header), the canonical FIX field separator.
pub const SOH: char = '\u{0001}';

/// Candidate field separators, in detection priority order.
///
/// Real-world captures frequently substitute `|` or the literal two-character
/// sequence `^A` for SOH; plain space is the last resort.
const DELIMITERS: [&str; 4] = ["\u{0001}", "|", "^A", " "];

/// FIX protocol version.
///
/// Covers the fixed catalog of supported versions. [`FixVersion::detect`]
/// is total: any input maps to a catalog member, defaulting to
/// [`FixVersion::Fix44`] when the BeginString is absent or unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FixVersion {
    /// FIX 4.0
    Fix40,
    /// FIX 4.1
    Fix41,
    /// FIX 4.2
    Fix42,
    /// FIX 4.3
    Fix43,
    /// FIX 4.4
    #[default]
    Fix44,
    /// FIX 5.0
    Fix50,
    /// FIX 5.0 SP1
    Fix50Sp1,
    /// FIX 5.0 SP2
    Fix50Sp2,
    /// FIXT 1.1 (transport layer for FIX 5.0+)
    Fixt11,
}

impl FixVersion {
    /// All supported versions, in catalog order.
    pub const ALL: [Self; 9] = [
        Self::Fix40,
        Self::Fix41,
        Self::Fix42,
        Self::Fix43,
        Self::Fix44,
        Self::Fix50,
        Self::Fix50Sp1,
        Self::Fix50Sp2,
        Self::Fixt11,
    ];

    /// Major/minor series used for prefix matching of non-exact BeginStrings.
    ///
    /// Service-pack variants are only reachable by exact match; anything that
    /// merely starts with `FIX.5.0` resolves to the base series.
    const SERIES: [(&'static str, Self); 7] = [
        ("FIX.4.0", Self::Fix40),
        ("FIX.4.1", Self::Fix41),
        ("FIX.4.2", Self::Fix42),
        ("FIX.4.3", Self::Fix43),
        ("FIX.4.4", Self::Fix44),
        ("FIX.5.0", Self::Fix50),
        ("FIXT.1.1", Self::Fixt11),
    ];

    /// Returns the BeginString value for this version.
    #[must_use]
    pub const fn begin_string(&self) -> &'static str {
        match self {
            Self::Fix40 => "FIX.4.0",
            Self::Fix41 => "FIX.4.1",
            Self::Fix42 => "FIX.4.2",
            Self::Fix43 => "FIX.4.3",
            Self::Fix44 => "FIX.4.4",
            Self::Fix50 => "FIX.5.0",
            Self::Fix50Sp1 => "FIX.5.0SP1",
            Self::Fix50Sp2 => "FIX.5.0SP2",
            Self::Fixt11 => "FIXT.1.1",
        }
    }

    /// Returns the specification document file name for this version.
    ///
    /// Total over the catalog; callers holding an unknown version string
    /// should resolve it through [`FixVersion::detect`] first, which
    /// defaults to FIX 4.4.
    #[must_use]
    pub const fn spec_file_name(&self) -> &'static str {
        match self {
            Self::Fix40 => "FIX40.xml",
            Self::Fix41 => "FIX41.xml",
            Self::Fix42 => "FIX42.xml",
            Self::Fix43 => "FIX43.xml",
            Self::Fix44 => "FIX44.xml",
            Self::Fix50 => "FIX50.xml",
            Self::Fix50Sp1 => "FIX50SP1.xml",
            Self::Fix50Sp2 => "FIX50SP2.xml",
            Self::Fixt11 => "FIXT11.xml",
        }
    }

    /// Returns the human-readable display name for this version.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fix40 => "FIX 4.0",
            Self::Fix41 => "FIX 4.1",
            Self::Fix42 => "FIX 4.2",
            Self::Fix43 => "FIX 4.3",
            Self::Fix44 => "FIX 4.4",
            Self::Fix50 => "FIX 5.0",
            Self::Fix50Sp1 => "FIX 5.0 SP1",
            Self::Fix50Sp2 => "FIX 5.0 SP2",
            Self::Fixt11 => "FIXT 1.1",
        }
    }

    /// Looks up a version by exact BeginString.
    #[must_use]
    pub fn from_begin_string(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.begin_string() == s)
    }

    /// Returns the specification file name for a version id string.
    ///
    /// Total: unknown ids yield the default version's file name.
    #[must_use]
    pub fn spec_file_name_for(id: &str) -> &'static str {
        Self::from_begin_string(id)
            .unwrap_or_default()
            .spec_file_name()
    }

    /// Returns the display name for a version id string.
    ///
    /// Total: unknown ids yield the default version's display name.
    #[must_use]
    pub fn display_name_for(id: &str) -> &'static str {
        Self::from_begin_string(id)
            .unwrap_or_default()
            .display_name()
    }

    /// Detects the protocol version from raw message text.
    ///
    /// Splits the input on each candidate delimiter in priority order (SOH,
    /// `|`, literal `^A`, space), committing to the first delimiter that
    /// yields more than one field. The BeginString is taken from whichever
    /// of the first three fields has key `8`. Never fails: inputs with no
    /// usable tag-8 value yield [`FixVersion::Fix44`].
    ///
    /// # Arguments
    /// * `raw` - The raw message text
    #[must_use]
    pub fn detect(raw: &str) -> Self {
        match Self::extract_begin_string(raw) {
            Some(value) => Self::match_catalog(&value),
            None => Self::default(),
        }
    }

    /// Extracts the tag-8 value from raw text, if present.
    fn extract_begin_string(raw: &str) -> Option<String> {
        for delimiter in DELIMITERS {
            let parts: Vec<&str> = raw.split(delimiter).collect();
            if parts.len() <= 1 {
                continue;
            }
            return parts.iter().take(3).find_map(|part| {
                let (key, value) = part.split_once('=')?;
                (key.trim() == "8" && !value.trim().is_empty())
                    .then(|| value.trim().to_string())
            });
        }
        None
    }

    /// Maps a BeginString value onto the catalog.
    ///
    /// Exact matches win; otherwise the first major/minor series the value
    /// starts with; otherwise the default.
    fn match_catalog(begin_string: &str) -> Self {
        if let Some(version) = Self::from_begin_string(begin_string) {
            return version;
        }
        Self::SERIES
            .iter()
            .find(|(prefix, _)| begin_string.starts_with(prefix))
            .map_or_else(Self::default, |(_, version)| *version)
    }
}

impl std::fmt::Display for FixVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.begin_string())
    }
}

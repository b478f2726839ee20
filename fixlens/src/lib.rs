/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # FixLens
//!
//! A human-readable FIX protocol message decoder for Rust.
//!
//! FixLens turns raw tag=value FIX text into annotated output: tag number,
//! field name, raw value, semantic meaning, and a textual description per
//! field. It detects the protocol version from the message itself, resolves
//! the matching specification through a tiered cache (memory, remote
//! document, local artifact, built-in fallback), and tolerates the common
//! delimiter conventions (SOH, `|`, literal `^A`).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixlens::prelude::*;
//!
//! let engine = DecodeEngine::new();
//! let message = engine.decode("8=FIX.4.4|35=D|54=1|40=2|10=123");
//! for field in &message.fields {
//!     println!("{} {} = {} {}", field.tag, field.name, field.raw_value, field.semantic_value);
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Version catalog, decoded output types, and errors
//! - [`tagvalue`]: Strict section-aware tag=value tokenizer
//! - [`dictionary`]: Specification acquisition and dictionary management
//! - [`decoder`]: Two-strategy decoding and semantic enrichment
//! - [`engine`]: High-level decode engine facade

pub mod core {
    //! Version catalog, decoded output types, and errors.
    pub use fixlens_core::*;
}

pub mod tagvalue {
    //! Strict section-aware tag=value tokenizer.
    pub use fixlens_tagvalue::*;
}

pub mod dictionary {
    //! Specification acquisition and dictionary management.
    pub use fixlens_dictionary::*;
}

pub mod decoder {
    //! Two-strategy decoding and semantic enrichment.
    pub use fixlens_decoder::*;
}

pub mod engine {
    //! High-level decode engine facade.
    pub use fixlens_engine::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixlens_core::{
        DecodeError, DecodedField, DecodedMessage, FixLensError, FixVersion, ProviderError,
        Result, VERSION_PSEUDO_TAG,
    };

    // Tokenizer
    pub use fixlens_tagvalue::{ParsedMessage, Section};

    // Dictionary
    pub use fixlens_dictionary::{
        FieldSpec, HttpFetcher, MessageSpec, SpecFetcher, SpecProvider, Specification,
    };

    // Decoder
    pub use fixlens_decoder::MessageDecoder;

    // Engine
    pub use fixlens_engine::{DecodeEngine, EngineBuilder};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let version = FixVersion::detect("8=FIX.4.2|9=5|35=0");
        assert_eq!(version, FixVersion::Fix42);
        let _field = DecodedField::new("8", "BeginString", "FIX.4.2");
    }

    #[test]
    fn test_version_catalog() {
        assert_eq!(FixVersion::Fix44.display_name(), "FIX 4.4");
        assert_eq!(FixVersion::Fix44.spec_file_name(), "FIX44.xml");
    }
}

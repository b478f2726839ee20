/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # FixLens Core
//!
//! Core types, version detection, and error definitions for the FixLens
//! FIX message decoder.
//!
//! This crate provides the fundamental building blocks used across all
//! FixLens crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Version catalog**: `FixVersion` with delimiter-agnostic detection
//! - **Decoded output**: `DecodedField` and `DecodedMessage`

pub mod error;
pub mod field;
pub mod version;

pub use error::{DecodeError, FixLensError, ProviderError, Result};
pub use field::{DecodedField, DecodedMessage, VERSION_PSEUDO_TAG};
pub use version::FixVersion;

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # FixLens Decoder
//!
//! Two-strategy FIX message decoder with semantic annotation.
//!
//! This crate provides:
//! - **Structured strategy**: delimiter normalization plus the strict
//!   section-aware tokenizer from `fixlens-tagvalue`
//! - **Manual strategy**: forgiving split-based fallback for malformed input
//! - **Semantic enrichment**: specification enum lookups with a built-in
//!   semantic table for well-known tags
//! - **Display ordering**: a total, stable ordering key over decoded fields

pub mod decoder;
pub mod order;
pub mod semantics;

pub use decoder::MessageDecoder;

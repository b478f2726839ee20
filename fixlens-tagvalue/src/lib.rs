/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # FixLens TagValue
//!
//! Section-aware tag=value tokenizer for the FixLens FIX decoder.
//!
//! This crate parses a well-formed, SOH-delimited FIX message into three
//! logical sections (header, body, trailer), each queryable by tag. It is
//! strict by design: malformed input is rejected so that callers can fall
//! back to a more forgiving manual tokenization.

pub mod tokenizer;

pub use tokenizer::{EQUALS, ParsedMessage, SOH, Section};

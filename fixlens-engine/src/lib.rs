/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # FixLens Engine
//!
//! High-level decode engine facade for FixLens.
//!
//! This crate provides:
//! - **DecodeEngine**: raw text in, [`DecodedMessage`] out; never panics
//!   and never propagates an error to the caller
//! - **Builder API**: fluent configuration of the specification source

pub mod builder;
pub mod engine;

pub use builder::EngineBuilder;
pub use engine::DecodeEngine;

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! # FixLens Dictionary
//!
//! FIX specification acquisition and dictionary management for FixLens.
//!
//! This crate provides:
//! - **Schema definitions**: [`FieldSpec`], [`MessageSpec`], [`Specification`]
//! - **Document parsing**: QuickFIX XML format parser
//! - **Local caching**: Compact CSV cache artifacts on durable storage
//! - **Tiered resolution**: [`SpecProvider`] with memory cache, remote fetch,
//!   local cache, and a built-in minimal fallback

pub mod cache;
pub mod provider;
pub mod schema;
pub mod xml;

pub use provider::{HttpFetcher, SpecFetcher, SpecProvider};
pub use schema::{FieldSpec, MessageSpec, Specification};

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Engine builder for fluent configuration.
//!
//! This module provides a builder API for configuring a decode engine's
//! specification source: base URL, local cache directory, or a custom
//! fetcher.

use crate::engine::DecodeEngine;
use fixlens_dictionary::provider::DEFAULT_BASE_URL;
use fixlens_dictionary::{HttpFetcher, SpecFetcher, SpecProvider};
use std::path::PathBuf;

/// Builder for configuring a [`DecodeEngine`].
pub struct EngineBuilder {
    /// Base URL for remote specification documents.
    base_url: String,
    /// Local cache directory override.
    cache_dir: Option<PathBuf>,
    /// Custom fetcher override; wins over `base_url`.
    fetcher: Option<Box<dyn SpecFetcher>>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_dir: None,
            fetcher: None,
        }
    }

    /// Sets the base URL for remote specification documents.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the local cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    /// Sets a custom specification fetcher, overriding the base URL.
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Box<dyn SpecFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> DecodeEngine {
        let fetcher = self
            .fetcher
            .unwrap_or_else(|| Box::new(HttpFetcher::new(self.base_url)));
        let mut provider = SpecProvider::with_fetcher(fetcher);
        if let Some(cache_dir) = self.cache_dir {
            provider = provider.with_cache_dir(cache_dir);
        }
        DecodeEngine::with_provider(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = EngineBuilder::new()
            .with_base_url("http://localhost:8080/spec")
            .with_cache_dir("/tmp/fixlens-test");
        assert_eq!(builder.base_url(), "http://localhost:8080/spec");
        // build() must not touch the network.
        let _engine = builder.build();
    }
}

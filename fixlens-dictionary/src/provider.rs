/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Tiered specification resolution.
//!
//! [`SpecProvider::resolve`] never fails. Tiers, in order:
//! 1. Process-wide memory cache (first writer wins per version)
//! 2. Remote document fetch + parse, with best-effort CSV persistence
//! 3. Local CSV cache artifact from an earlier successful fetch
//! 4. Built-in minimal specification (eight structural tags)
//!
//! Each tier swallows its own failure and falls through; degradation is
//! logged, never surfaced.

use crate::cache;
use crate::schema::Specification;
use crate::xml;
use fixlens_core::{FixVersion, ProviderError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default location of versioned specification documents.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/quickfix/quickfix/master/spec";

/// Bound on remote fetch time before falling through to the local cache.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches a specification document for a version.
///
/// Behind a trait so tests can count collaborator calls and simulate
/// network failure.
pub trait SpecFetcher: Send + Sync {
    /// Fetches the raw specification document text.
    ///
    /// # Errors
    /// Returns `ProviderError` on any transport or status failure.
    fn fetch(&self, version: FixVersion) -> Result<String, ProviderError>;
}

/// HTTP fetcher for specification documents.
#[derive(Debug)]
pub struct HttpFetcher {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Creates a fetcher against the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL; the per-version file name is appended
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SpecFetcher for HttpFetcher {
    fn fetch(&self, version: FixVersion) -> Result<String, ProviderError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            version.spec_file_name()
        );
        debug!(url = %url, "fetching specification document");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ProviderError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }
        response.text().map_err(|e| ProviderError::Http(e.to_string()))
    }
}

/// Resolves protocol versions to shared, read-only specifications.
///
/// Thread-safe: the memory cache supports concurrent read/insert with
/// first-writer-wins semantics. Concurrent resolution of the same uncached
/// version may fetch redundantly but never corrupts the cache; no lock is
/// held across I/O.
pub struct SpecProvider {
    memory: RwLock<HashMap<FixVersion, Arc<Specification>>>,
    fetcher: Box<dyn SpecFetcher>,
    cache_dir: PathBuf,
}

impl SpecProvider {
    /// Creates a provider with the default HTTP fetcher and a cache
    /// directory under the system temp dir.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::default()))
    }

    /// Creates a provider with a custom fetcher.
    #[must_use]
    pub fn with_fetcher(fetcher: Box<dyn SpecFetcher>) -> Self {
        Self {
            memory: RwLock::new(HashMap::new()),
            fetcher,
            cache_dir: std::env::temp_dir().join("fixlens-spec-cache"),
        }
    }

    /// Overrides the local cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Resolves a version to a specification. Never fails: the worst case
    /// is the built-in minimal specification.
    pub fn resolve(&self, version: FixVersion) -> Arc<Specification> {
        if let Some(spec) = self.memory.read().get(&version) {
            return Arc::clone(spec);
        }

        let spec = Arc::new(self.resolve_uncached(version));

        let mut memory = self.memory.write();
        Arc::clone(memory.entry(version).or_insert(spec))
    }

    /// Returns the number of versions held in the memory cache.
    #[must_use]
    pub fn cached_version_count(&self) -> usize {
        self.memory.read().len()
    }

    fn resolve_uncached(&self, version: FixVersion) -> Specification {
        let remote_err = match self.fetch_and_persist(version) {
            Ok(spec) => return spec,
            Err(err) => err,
        };
        warn!(
            version = %version,
            error = %remote_err,
            "remote specification fetch failed, trying local cache"
        );

        let cache_err = match cache::read_cache(&self.cache_path(version), version) {
            Ok(spec) => return spec,
            Err(err) => err,
        };
        warn!(
            version = %version,
            error = %cache_err,
            "local cache unavailable, using built-in minimal specification"
        );

        Specification::minimal(version)
    }

    fn fetch_and_persist(&self, version: FixVersion) -> Result<Specification, ProviderError> {
        let document = self.fetcher.fetch(version)?;
        let spec = xml::parse_spec(version, &document)?;

        // Best-effort persistence: a failed write must never fail resolution.
        if let Err(err) = cache::write_cache(&self.cache_path(version), &spec) {
            debug!(version = %version, error = %err, "cache write skipped");
        }

        Ok(spec)
    }

    fn cache_path(&self, version: FixVersion) -> PathBuf {
        cache::cache_path(&self.cache_dir, version)
    }
}

impl Default for SpecProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpecProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecProvider")
            .field("cache_dir", &self.cache_dir)
            .field("cached_versions", &self.cached_version_count())
            .finish_non_exhaustive()
    }
}

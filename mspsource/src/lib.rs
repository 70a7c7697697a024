//! # MSPSource
//!
//! Common types and traits for MSProxy providers.
//!
//! Every music-service proxy (Spotify, Plex, TuneIn, ...) is split in two
//! halves: a provider adapter that knows how to talk to one service, and a
//! generic queue controller (`mspqueue`) that orders, filters and walks the
//! records the adapter produces. This crate is the contract between them:
//!
//! - [`MediaItem`]: the item record an adapter produces,
//! - [`SearchQuery`]: what the facade asks an adapter to find,
//! - [`ProviderAdapter`]: the search + resolve capability set,
//! - [`SourceError`] and [`FailureClass`]: how adapters report failures and
//!   how the controller reacts to them,
//! - [`ResolveCache`] and [`StreamProbe`]: helpers adapters use to cache
//!   resolved URLs and verify direct stream URLs.
//!
//! ## Implementing an adapter
//!
//! ```rust,no_run
//! use mspsource::{MediaItem, ProviderAdapter, Resolution, Result, SearchQuery, SourceError};
//!
//! #[derive(Debug)]
//! struct Jukebox {
//!     songs: Vec<MediaItem>,
//! }
//!
//! impl ProviderAdapter for Jukebox {
//!     fn name(&self) -> &str {
//!         "Jukebox"
//!     }
//!
//!     fn id(&self) -> &str {
//!         "jukebox"
//!     }
//!
//!     fn search(&self, query: &SearchQuery) -> Result<Vec<MediaItem>> {
//!         Ok(self
//!             .songs
//!             .iter()
//!             .filter(|s| s.title.contains(&query.text))
//!             .cloned()
//!             .collect())
//!     }
//!
//!     fn resolve(&self, item: &MediaItem) -> Result<Resolution> {
//!         if item.hint.is_empty() {
//!             return Err(SourceError::invalid(&item.id));
//!         }
//!         Ok(Resolution::url(item.hint.clone()))
//!     }
//! }
//! ```

pub mod cache;
pub mod error;
pub mod item;
pub mod probe;
pub mod query;

pub use cache::ResolveCache;
pub use error::{FailureClass, Result, SourceError};
pub use item::{MediaItem, MediaKind, Origin};
pub use probe::StreamProbe;
pub use query::{SearchKind, SearchQuery, SearchScope};

use std::fmt::Debug;

/// Outcome of a successful [`ProviderAdapter::resolve`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Playable stream URL
    pub url: String,
    /// Updated metadata learned while resolving, if any
    pub record: Option<MediaItem>,
}

impl Resolution {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            record: None,
        }
    }

    pub fn with_record(mut self, record: MediaItem) -> Self {
        self.record = Some(record);
        self
    }
}

/// Main trait for provider adapters
///
/// An adapter encapsulates one streaming service. The queue controller only
/// needs two capabilities from it:
///
/// - `search`: turn a query into a finite list of records. When nothing
///   matches, return an empty list; never fabricate results.
/// - `resolve`: turn one record into a playable URL. Failures must be
///   classified (see [`SourceError::class`]): transient and invalid failures
///   make the controller skip the record, anything else is reported to the
///   caller untouched.
///
/// Calls may block on network I/O. Adapters should bound them with a
/// timeout (5 seconds is the usual default) and report it as
/// [`SourceError::Timeout`]. Retries, if any, belong to the adapter.
pub trait ProviderAdapter: Debug {
    /// Returns the human-readable name of the provider
    fn name(&self) -> &str;

    /// Returns a unique identifier for the provider (e.g. "spotify")
    fn id(&self) -> &str;

    /// Runs a search and materializes the matching records.
    fn search(&self, query: &SearchQuery) -> Result<Vec<MediaItem>>;

    /// Produces a playable URL for `item`.
    fn resolve(&self, item: &MediaItem) -> Result<Resolution>;

    /// Fills display metadata unavailable at search time (current song on a
    /// radio station, episode notes, ...). `Ok(None)` when there is nothing
    /// to add.
    fn describe_now_playing(&self, _item: &MediaItem) -> Result<Option<MediaItem>> {
        Ok(None)
    }
}

impl<A: ProviderAdapter + ?Sized> ProviderAdapter for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn id(&self) -> &str {
        (**self).id()
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<MediaItem>> {
        (**self).search(query)
    }

    fn resolve(&self, item: &MediaItem) -> Result<Resolution> {
        (**self).resolve(item)
    }

    fn describe_now_playing(&self, item: &MediaItem) -> Result<Option<MediaItem>> {
        (**self).describe_now_playing(item)
    }
}

//! # MSPCatalog
//!
//! A [`ProviderAdapter`](mspsource::ProviderAdapter) serving records from a
//! static YAML catalog (see [`model`] for the document layout).
//!
//! It backs the `mspctl` player and the facade tests: every facade can run
//! over it without network access. Searches match case-insensitively and
//! fall back on the closest records when nothing matches exactly; records
//! resolve to their `hint` when it is an absolute URL.
//!
//! ```rust,no_run
//! use mspcatalog::StaticCatalog;
//! use mspsource::{ProviderAdapter, SearchQuery, StreamProbe};
//!
//! let catalog = StaticCatalog::from_file("jazz.yaml")?.with_probe(StreamProbe::default());
//! let found = catalog.search(&SearchQuery::artist("Miles Davis"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
mod matcher;
pub mod model;
mod source;

pub use error::{Error, Result};
pub use model::{CatalogFile, ProviderInfo};
pub use source::StaticCatalog;

//! # MSPQueue
//!
//! Provider-agnostic playback queue used by every MSProxy facade.
//!
//! A [`QueueController`] owns:
//! - the records a [`ProviderAdapter`](mspsource::ProviderAdapter) produced,
//!   in insertion order,
//! - a play order over them ([`PlayMode::Normal`] or [`PlayMode::Shuffle`]),
//! - a cursor into the play order,
//! - the explicit-content policy ([`ExplicitFilter`]).
//!
//! Navigation (`next_url`, `previous_url`, `get_url`) asks the adapter to
//! resolve the record under the cursor. Records that fail with a transient or
//! invalid error are dropped and the walk continues; authentication,
//! subscription and other fatal errors are handed back to the caller.
//!
//! ```rust,no_run
//! use mspqueue::{PlayMode, QueueController};
//! use mspsource::{ProviderAdapter, SearchQuery};
//!
//! fn play_all<A: ProviderAdapter>(adapter: A) -> mspqueue::Result<()> {
//!     let mut queue = QueueController::new(adapter);
//!     queue.set_mode(PlayMode::Shuffle);
//!     queue.enqueue_from(&SearchQuery::artist("Miles Davis"))?;
//!
//!     loop {
//!         let url = queue.next_url()?;
//!         if url.is_empty() {
//!             break;
//!         }
//!         println!("{} - {}: {url}", queue.current_artist(), queue.current_title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod errors;
pub mod mode;
pub mod snapshot;

pub use controller::QueueController;
pub use errors::{QueueError, Result};
pub use mode::{ExplicitFilter, PlayMode};
pub use snapshot::{QueueEntry, QueueSnapshot};

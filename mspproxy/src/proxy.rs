//! Provider-independent part of every facade.

use mspconfig::Config;
use mspqueue::{ExplicitFilter, PlayMode, QueueController, QueueSnapshot, Result};
use mspsource::{MediaItem, ProviderAdapter, SearchQuery};
use std::ops::{Deref, DerefMut};
use tracing::{debug, info};

/// A queue controller bound to one provider adapter.
///
/// Carries the names a player process calls (`set_play_mode`, `prev_url`,
/// `clear_queue`, ...). Everything else, such as `next_url`, `get_url` and
/// the `current_*` getters, is reached through `Deref` on the controller.
#[derive(Debug)]
pub struct Proxy<A: ProviderAdapter> {
    queue: QueueController<A>,
}

impl<A: ProviderAdapter> Proxy<A> {
    pub fn new(adapter: A) -> Self {
        Self::with_queue(QueueController::new(adapter))
    }

    pub fn with_queue(queue: QueueController<A>) -> Self {
        Self { queue }
    }

    /// Builds a proxy and applies the configured play mode and explicit
    /// filter.
    pub fn from_config(adapter: A, config: &Config) -> anyhow::Result<Self> {
        let mut proxy = Self::new(adapter);
        proxy.set_play_mode(&config.get_play_mode()?)?;
        proxy.set_explicit_track_filter(&config.get_explicit_filter()?)?;
        Ok(proxy)
    }

    pub fn into_queue(self) -> QueueController<A> {
        self.queue
    }

    pub fn provider_id(&self) -> &str {
        self.queue.adapter().id()
    }

    pub fn provider_name(&self) -> &str {
        self.queue.adapter().name()
    }

    /// Runs `query` against the adapter and queues the admitted records.
    pub fn enqueue(&mut self, query: SearchQuery) -> Result<usize> {
        debug!(provider = self.provider_id(), query = %query, "Enqueue request");
        self.queue.enqueue_from(&query)
    }

    /// Accepts `NORMAL` or `SHUFFLE`, in any case.
    pub fn set_play_mode(&mut self, name: &str) -> Result<()> {
        let mode: PlayMode = name.parse()?;
        self.queue.set_mode(mode);
        Ok(())
    }

    /// Accepts `ALLOW` or `DISALLOW`, in any case.
    pub fn set_explicit_track_filter(&mut self, name: &str) -> Result<()> {
        let filter: ExplicitFilter = name.parse()?;
        self.queue.set_explicit_filter(filter);
        Ok(())
    }

    pub fn prev_url(&mut self) -> Result<String> {
        self.queue.previous_url()
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    pub fn remove_current_url(&mut self) -> Option<MediaItem> {
        self.queue.remove_current()
    }

    /// Logs the queue in play order and returns the logged lines.
    pub fn print_queue(&self) -> Vec<String> {
        let snapshot: QueueSnapshot = self.queue.snapshot();
        info!(
            provider = self.provider_id(),
            len = snapshot.len(),
            mode = %snapshot.mode,
            filter = %snapshot.explicit_filter,
            "Queue"
        );

        let lines = snapshot.lines();
        for line in &lines {
            info!("{line}");
        }
        lines
    }
}

impl<A: ProviderAdapter> Deref for Proxy<A> {
    type Target = QueueController<A>;

    fn deref(&self) -> &Self::Target {
        &self.queue
    }
}

impl<A: ProviderAdapter> DerefMut for Proxy<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.queue
    }
}

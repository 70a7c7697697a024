//! HTTP probe for direct stream URLs.
//!
//! Some providers hand out plain HTTP(S) stream URLs. Before giving such a
//! URL to the player, an adapter may check that the server still answers for
//! it; the probe turns the outcome into a [`SourceError`] of the right class.

use crate::{Result, SourceError};
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

/// Default deadline for provider HTTP calls
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct StreamProbe {
    agent: Agent,
    timeout: Duration,
}

impl StreamProbe {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        Self {
            agent: config.into(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a HEAD request to `url` and classifies the outcome.
    pub fn check(&self, url: &str) -> Result<()> {
        debug!(url, timeout_ms = self.timeout.as_millis() as u64, "Probing stream URL");

        match self.agent.head(url).call() {
            Ok(_) => Ok(()),
            Err(err) => Err(classify(url, err)),
        }
    }
}

impl Default for StreamProbe {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_TIMEOUT)
    }
}

fn classify(url: &str, err: ureq::Error) -> SourceError {
    match err {
        ureq::Error::StatusCode(code) => SourceError::from_status_code(code, url),
        ureq::Error::Timeout(_) => SourceError::Timeout(url.to_string()),
        ureq::Error::BadUri(reason) => SourceError::invalid(format!("{url}: {reason}")),
        other => SourceError::transient(format!("{url}: {other}")),
    }
}

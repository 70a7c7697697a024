//! Plex: the user's own media server, so every search is library-scoped.

use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchQuery};

facade! {
    /// Plex facade.
    Plex
}

impl<A: ProviderAdapter> Plex<A> {
    pub fn enqueue_tracks(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::tracks(query).owned())
    }

    pub fn enqueue_artist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::artist(query).owned())
    }

    pub fn enqueue_album(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::album(query).owned())
    }

    pub fn enqueue_playlist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::playlist(query).owned())
    }
}

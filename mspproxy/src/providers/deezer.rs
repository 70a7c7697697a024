//! Deezer: catalog search, playlists and genre radios.

use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// Deezer facade.
    Deezer
}

impl<A: ProviderAdapter> Deezer<A> {
    pub fn enqueue_tracks(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::tracks(query))
    }

    pub fn enqueue_artist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::artist(query))
    }

    pub fn enqueue_album(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::album(query))
    }

    pub fn enqueue_playlist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::playlist(query))
    }

    pub fn enqueue_playlist_by_id(&mut self, id: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::PlaylistById, id))
    }

    /// Deezer "radios" are genre-seeded mixes.
    pub fn enqueue_radio(&mut self, genre: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::Genre, genre))
    }
}

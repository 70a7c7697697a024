use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// SoundCloud facade.
    ///
    /// Tracks carry `permalink` and `license` in their extra fields
    /// (`current_extra("permalink")`).
    SoundCloud
}

impl<A: ProviderAdapter> SoundCloud<A> {
    pub fn enqueue_tracks(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::tracks(query))
    }

    pub fn enqueue_artist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::artist(query))
    }

    pub fn enqueue_playlist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::playlist(query))
    }

    pub fn enqueue_track_by_id(&mut self, id: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::TrackById, id))
    }
}

use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// YouTube facade (audio streams of videos and playlists).
    YouTube
}

impl<A: ProviderAdapter> YouTube<A> {
    pub fn enqueue_tracks(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::tracks(query))
    }

    pub fn enqueue_playlist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::playlist(query))
    }

    pub fn enqueue_track_by_id(&mut self, id: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::TrackById, id))
    }
}

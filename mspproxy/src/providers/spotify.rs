//! Spotify: catalog search, editorial categories and recommendations.

use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// Spotify facade.
    ///
    /// Besides text searches it can seed a queue from recommendations (by
    /// artist, track or genre) and from Spotify ids.
    Spotify
}

impl<A: ProviderAdapter> Spotify<A> {
    pub fn enqueue_tracks(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::tracks(query))
    }

    pub fn enqueue_artist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::artist(query))
    }

    pub fn enqueue_album(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::album(query))
    }

    /// Searches public playlists, or only the user's own with `owned`.
    pub fn enqueue_playlist(&mut self, query: &str, owned: bool) -> Result<usize> {
        let search = SearchQuery::playlist(query);
        self.enqueue(if owned { search.owned() } else { search })
    }

    pub fn enqueue_category(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::Category, query))
    }

    pub fn enqueue_recommendations_by_artist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::RecommendationsByArtist, query))
    }

    pub fn enqueue_recommendations_by_track(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::RecommendationsByTrack, query))
    }

    pub fn enqueue_recommendations_by_genre(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::RecommendationsByGenre, query))
    }

    pub fn enqueue_track_by_id(&mut self, id: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::TrackById, id))
    }

    pub fn enqueue_playlist_by_id(&mut self, id: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::PlaylistById, id))
    }
}

//! Google Play Music.

use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// Google Play Music facade.
    ///
    /// Station and recommendation searches need an All Access subscription;
    /// without one the adapter fails them with `SubscriptionRequired`.
    GoogleMusic
}

impl<A: ProviderAdapter> GoogleMusic<A> {
    pub fn enqueue_tracks(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::tracks(query))
    }

    pub fn enqueue_artist(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::artist(query))
    }

    pub fn enqueue_album(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::album(query))
    }

    pub fn enqueue_playlist(&mut self, query: &str, owned: bool) -> Result<usize> {
        let search = SearchQuery::playlist(query);
        self.enqueue(if owned { search.owned() } else { search })
    }

    pub fn enqueue_station(&mut self, genre: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::Genre, genre))
    }

    pub fn enqueue_recommendations_by_track(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::RecommendationsByTrack, query))
    }
}

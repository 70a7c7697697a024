use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// iHeartRadio facade: live stations, artist radios and podcasts.
    IHeart
}

impl<A: ProviderAdapter> IHeart<A> {
    pub fn enqueue_stations(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::stations(query))
    }

    /// Custom station built around an artist.
    pub fn enqueue_artist_radio(&mut self, artist: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::RecommendationsByArtist, artist))
    }

    pub fn enqueue_podcast(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::Podcast, query))
    }
}

//! TuneIn: radio directory and podcasts.

use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// TuneIn facade.
    ///
    /// Station records expose their location through the
    /// `current_station_*` getters.
    TuneIn
}

impl<A: ProviderAdapter> TuneIn<A> {
    pub fn enqueue_stations(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::stations(query))
    }

    pub fn enqueue_podcast(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::Podcast, query))
    }

    pub fn enqueue_station_by_id(&mut self, id: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::StationById, id))
    }
}

use mspqueue::Result;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};

facade! {
    /// Dirble radio directory facade.
    Dirble
}

impl<A: ProviderAdapter> Dirble<A> {
    pub fn enqueue_stations(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::stations(query))
    }

    pub fn enqueue_category(&mut self, query: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::Category, query))
    }

    pub fn enqueue_station_by_id(&mut self, id: &str) -> Result<usize> {
        self.enqueue(SearchQuery::new(SearchKind::StationById, id))
    }
}

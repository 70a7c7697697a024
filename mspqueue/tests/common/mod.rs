#![allow(dead_code)]

use mspsource::{MediaItem, ProviderAdapter, Resolution, Result, SearchQuery, SourceError};
use std::cell::RefCell;
use std::collections::HashMap;

/// How `resolve` should fail for a given id.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Transient,
    Invalid,
    Timeout,
    Auth,
    Subscription,
}

/// In-memory adapter with scripted search results and resolve failures.
#[derive(Debug, Default)]
pub struct ScriptedAdapter {
    results: HashMap<String, Vec<MediaItem>>,
    failures: RefCell<HashMap<String, Failure>>,
    search_failures: HashMap<String, Failure>,
    resolved: RefCell<Vec<String>>,
}

impl ScriptedAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, text: &str, items: Vec<MediaItem>) -> Self {
        self.results.insert(text.to_string(), items);
        self
    }

    pub fn fail(self, id: &str, failure: Failure) -> Self {
        self.failures.borrow_mut().insert(id.to_string(), failure);
        self
    }

    /// Makes `search` fail for the query text `text`.
    pub fn fail_search(mut self, text: &str, failure: Failure) -> Self {
        self.search_failures.insert(text.to_string(), failure);
        self
    }

    pub fn heal(&self, id: &str) {
        self.failures.borrow_mut().remove(id);
    }

    /// Ids passed to `resolve`, in call order.
    pub fn resolved(&self) -> Vec<String> {
        self.resolved.borrow().clone()
    }
}

impl ProviderAdapter for ScriptedAdapter {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn id(&self) -> &str {
        "scripted"
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<MediaItem>> {
        if let Some(&failure) = self.search_failures.get(&query.text) {
            return Err(failure.into_error());
        }
        Ok(self.results.get(&query.text).cloned().unwrap_or_default())
    }

    fn resolve(&self, item: &MediaItem) -> Result<Resolution> {
        self.resolved.borrow_mut().push(item.id.clone());
        match self.failures.borrow().get(&item.id) {
            Some(&failure) => Err(failure.into_error()),
            None => Ok(Resolution::url(url(&item.id))),
        }
    }
}

impl Failure {
    fn into_error(self) -> SourceError {
        match self {
            Failure::Transient => SourceError::transient("upstream hiccup"),
            Failure::Invalid => SourceError::invalid("no such track"),
            Failure::Timeout => SourceError::Timeout("5s elapsed".into()),
            Failure::Auth => SourceError::AuthenticationFailed("token expired".into()),
            Failure::Subscription => SourceError::SubscriptionRequired("premium only".into()),
        }
    }
}

pub fn url(id: &str) -> String {
    format!("https://stream.test/{id}")
}

pub fn track(id: &str) -> MediaItem {
    MediaItem::new(id, format!("Song {id}"), "The Testers").with_hint(id)
}

pub fn tracks(ids: &[&str]) -> Vec<MediaItem> {
    ids.iter().map(|id| track(id)).collect()
}

pub fn explicit(id: &str) -> MediaItem {
    track(id).with_explicit(true)
}

//! [`ProviderAdapter`] over an in-memory catalog.

use crate::error::{Error, Result};
use crate::matcher::{closest, matches};
use crate::model::{CatalogFile, ProviderInfo};
use mspsource::{
    MediaItem, MediaKind, ProviderAdapter, ResolveCache, Resolution, SearchKind, SearchQuery,
    SearchScope, SourceError, StreamProbe,
};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Provider adapter serving records from a YAML catalog.
///
/// Searches never leave the process. Resolution hands back the record's
/// `hint` when it is an absolute URL, after an optional HTTP probe.
#[derive(Debug)]
pub struct StaticCatalog {
    provider: ProviderInfo,
    items: Vec<MediaItem>,
    playlists: BTreeMap<String, Vec<usize>>,
    categories: BTreeMap<String, Vec<usize>>,
    library: HashSet<String>,
    unavailable: HashSet<String>,
    now_playing: BTreeMap<String, MediaItem>,
    cache: ResolveCache,
    probe: Option<StreamProbe>,
}

impl StaticCatalog {
    /// Builds a catalog from a parsed document.
    ///
    /// Playlists and categories must only refer to ids present in `items`.
    pub fn new(file: CatalogFile) -> Result<Self> {
        if file.provider.id.trim().is_empty() {
            return Err(Error::InvalidProvider(file.provider.name));
        }

        let mut by_id: BTreeMap<&str, usize> = BTreeMap::new();
        for (index, item) in file.items.iter().enumerate() {
            by_id.entry(item.id.as_str()).or_insert(index);
        }

        let playlists = index_collection("playlist", &file.playlists, &by_id)?;
        let categories = index_collection("category", &file.categories, &by_id)?;

        info!(
            provider = file.provider.id.as_str(),
            items = file.items.len(),
            playlists = playlists.len(),
            categories = categories.len(),
            "Loaded catalog"
        );

        Ok(Self {
            provider: file.provider,
            items: file.items,
            playlists,
            categories,
            library: file.library.into_iter().collect(),
            unavailable: file
                .unavailable
                .iter()
                .map(|hint| hint.trim().to_string())
                .collect(),
            now_playing: file.now_playing,
            cache: ResolveCache::new(),
            probe: None,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::new(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading catalog file");
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }

    /// Shares `cache` with other adapters instead of a private one.
    pub fn with_cache(mut self, cache: ResolveCache) -> Self {
        self.cache = cache;
        self
    }

    /// Checks every URL with `probe` before handing it out.
    pub fn with_probe(mut self, probe: StreamProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn cache(&self) -> &ResolveCache {
        &self.cache
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indexes of the records visible under `scope`.
    fn visible(&self, scope: SearchScope) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&i| scope == SearchScope::Global || self.library.contains(&self.items[i].id))
            .collect()
    }

    fn of_kind(&self, pool: &[usize], kind: MediaKind) -> Vec<usize> {
        pool.iter()
            .copied()
            .filter(|&i| self.items[i].kind == kind)
            .collect()
    }

    fn by_id(&self, pool: &[usize], kind: MediaKind, id: &str) -> Vec<usize> {
        let id = id.trim();
        pool.iter()
            .copied()
            .filter(|&i| self.items[i].kind == kind && self.items[i].id == id)
            .collect()
    }

    /// Records of `pool` whose `field` matches `text`, falling back on the
    /// closest ones when none does.
    fn lookup(
        &self,
        pool: &[usize],
        text: &str,
        field: impl Fn(&MediaItem) -> Option<&str>,
    ) -> Vec<usize> {
        let exact: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|&i| field(&self.items[i]).is_some_and(|f| matches(f, text)))
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        let close = closest(
            text,
            pool.iter()
                .filter_map(|&i| field(&self.items[i]).map(|f| (i, f.to_string()))),
        );
        if !close.is_empty() {
            debug!(text, found = close.len(), "No exact match, using closest records");
        }
        close
    }

    /// Records of the named collection(s) matching `text`.
    fn lookup_collection(
        &self,
        collection: &BTreeMap<String, Vec<usize>>,
        pool: &[usize],
        text: &str,
        exact_name: bool,
    ) -> Vec<usize> {
        let mut names: Vec<&String> = collection
            .keys()
            .filter(|name| {
                if exact_name {
                    name.as_str() == text.trim()
                } else {
                    matches(name, text)
                }
            })
            .collect();
        if names.is_empty() && !exact_name {
            names = closest(text, collection.keys().map(|name| (name, name.clone())));
        }

        names
            .into_iter()
            .flat_map(|name| collection[name].iter().copied())
            .filter(|i| pool.contains(i))
            .collect()
    }

    /// Records sharing a genre or an artist with `seeds`, seeds excluded.
    fn related(&self, pool: &[usize], seeds: &[usize]) -> Vec<usize> {
        let genres: HashSet<String> = seeds
            .iter()
            .filter_map(|&i| self.items[i].genre.as_deref())
            .map(str::to_lowercase)
            .collect();
        let artists: HashSet<String> = seeds
            .iter()
            .map(|&i| self.items[i].artist.to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();

        pool.iter()
            .copied()
            .filter(|i| !seeds.contains(i))
            .filter(|&i| {
                let item = &self.items[i];
                item.genre
                    .as_deref()
                    .is_some_and(|g| genres.contains(&g.to_lowercase()))
                    || artists.contains(&item.artist.to_lowercase())
            })
            .collect()
    }

    fn select(&self, query: &SearchQuery) -> mspsource::Result<Vec<usize>> {
        let pool = self.visible(query.scope);
        let text = query.text.as_str();

        let found = match query.kind {
            SearchKind::Tracks => {
                let tracks = self.of_kind(&pool, MediaKind::Track);
                self.lookup(&tracks, text, |item| Some(item.title.as_str()))
            }
            SearchKind::Artist => self.lookup(&pool, text, |item| Some(item.artist.as_str())),
            SearchKind::Album => {
                let tracks = self.of_kind(&pool, MediaKind::Track);
                self.lookup(&tracks, text, |item| item.container.as_deref())
            }
            SearchKind::Playlist => self.lookup_collection(&self.playlists, &pool, text, false),
            SearchKind::PlaylistById => self.lookup_collection(&self.playlists, &pool, text, true),
            SearchKind::Category => self.lookup_collection(&self.categories, &pool, text, false),
            SearchKind::Genre | SearchKind::RecommendationsByGenre => {
                self.lookup(&pool, text, |item| item.genre.as_deref())
            }
            SearchKind::Stations => {
                let stations = self.of_kind(&pool, MediaKind::Station);
                let by_name = self.lookup(&stations, text, |item| Some(item.title.as_str()));
                if by_name.is_empty() {
                    self.lookup(&stations, text, |item| item.genre.as_deref())
                } else {
                    by_name
                }
            }
            SearchKind::Podcast => {
                let episodes = self.of_kind(&pool, MediaKind::Episode);
                let by_show = self.lookup(&episodes, text, |item| item.container.as_deref());
                if by_show.is_empty() {
                    self.lookup(&episodes, text, |item| Some(item.title.as_str()))
                } else {
                    by_show
                }
            }
            SearchKind::RecommendationsByArtist => {
                let seeds = self.lookup(&pool, text, |item| Some(item.artist.as_str()));
                let mut found = seeds.clone();
                found.extend(self.related(&pool, &seeds));
                found
            }
            SearchKind::RecommendationsByTrack => {
                let tracks = self.of_kind(&pool, MediaKind::Track);
                let seeds = self.lookup(&tracks, text, |item| Some(item.title.as_str()));
                self.related(&tracks, &seeds)
            }
            SearchKind::TrackById => self.by_id(&pool, MediaKind::Track, text),
            SearchKind::StationById => self.by_id(&pool, MediaKind::Station, text),
        };

        Ok(found)
    }
}

fn index_collection(
    collection: &'static str,
    named: &BTreeMap<String, Vec<String>>,
    by_id: &BTreeMap<&str, usize>,
) -> Result<BTreeMap<String, Vec<usize>>> {
    named
        .iter()
        .map(|(name, ids)| {
            let indexes = ids
                .iter()
                .map(|id| {
                    by_id.get(id.as_str()).copied().ok_or_else(|| Error::UnknownReference {
                        collection,
                        name: name.clone(),
                        id: id.clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((name.clone(), indexes))
        })
        .collect()
}

fn is_absolute_url(hint: &str) -> bool {
    match hint.split_once("://") {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                && !rest.is_empty()
        }
        None => false,
    }
}

impl ProviderAdapter for StaticCatalog {
    fn name(&self) -> &str {
        &self.provider.name
    }

    fn id(&self) -> &str {
        &self.provider.id
    }

    fn search(&self, query: &SearchQuery) -> mspsource::Result<Vec<MediaItem>> {
        let mut found = self.select(query)?;
        if let Some(limit) = query.limit {
            found.truncate(limit);
        }

        debug!(
            provider = self.provider.id.as_str(),
            query = %query,
            found = found.len(),
            "Catalog search"
        );
        Ok(found.into_iter().map(|i| self.items[i].clone()).collect())
    }

    fn resolve(&self, item: &MediaItem) -> mspsource::Result<Resolution> {
        if let Some(url) = self.cache.get(item) {
            debug!(id = item.id.as_str(), "Resolved from cache");
            return Ok(Resolution::url(url));
        }

        let hint = item.hint.trim();
        if hint.is_empty() {
            return Err(SourceError::invalid(format!("{} has no stream", item.id)));
        }
        if self.unavailable.contains(hint) {
            return Err(SourceError::invalid(format!("{} is no longer available", item.id)));
        }
        if !is_absolute_url(hint) {
            return Err(SourceError::invalid(format!(
                "{}: '{hint}' is not a stream URL",
                item.id
            )));
        }

        if let Some(probe) = &self.probe {
            probe.check(hint)?;
        }

        self.cache.put(item, hint);
        Ok(Resolution::url(hint))
    }

    fn describe_now_playing(&self, item: &MediaItem) -> mspsource::Result<Option<MediaItem>> {
        Ok(self.now_playing.get(&item.id).cloned())
    }
}

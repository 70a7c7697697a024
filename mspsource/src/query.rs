//! Search requests sent to provider adapters.

use std::fmt;

/// What a search is looking for.
///
/// Facades map each of their `enqueue_*` names onto one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Tracks,
    Artist,
    Album,
    Playlist,
    Category,
    Genre,
    Stations,
    Podcast,
    RecommendationsByArtist,
    RecommendationsByTrack,
    RecommendationsByGenre,
    TrackById,
    PlaylistById,
    StationById,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Tracks => "tracks",
            SearchKind::Artist => "artist",
            SearchKind::Album => "album",
            SearchKind::Playlist => "playlist",
            SearchKind::Category => "category",
            SearchKind::Genre => "genre",
            SearchKind::Stations => "stations",
            SearchKind::Podcast => "podcast",
            SearchKind::RecommendationsByArtist => "recommendations_by_artist",
            SearchKind::RecommendationsByTrack => "recommendations_by_track",
            SearchKind::RecommendationsByGenre => "recommendations_by_genre",
            SearchKind::TrackById => "track_by_id",
            SearchKind::PlaylistById => "playlist_by_id",
            SearchKind::StationById => "station_by_id",
        }
    }

    /// True for lookups addressed by provider identifier rather than text.
    pub fn is_by_id(&self) -> bool {
        matches!(
            self,
            SearchKind::TrackById | SearchKind::PlaylistById | SearchKind::StationById
        )
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a search covers the whole service or only the user's library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    Global,
    Owner,
}

/// A search request handed to [`crate::ProviderAdapter::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub kind: SearchKind,
    pub text: String,
    pub scope: SearchScope,
    /// Maximum number of records to return, `None` for the adapter default.
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(kind: SearchKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            scope: SearchScope::Global,
            limit: None,
        }
    }

    pub fn tracks(text: impl Into<String>) -> Self {
        Self::new(SearchKind::Tracks, text)
    }

    pub fn artist(text: impl Into<String>) -> Self {
        Self::new(SearchKind::Artist, text)
    }

    pub fn album(text: impl Into<String>) -> Self {
        Self::new(SearchKind::Album, text)
    }

    pub fn playlist(text: impl Into<String>) -> Self {
        Self::new(SearchKind::Playlist, text)
    }

    pub fn stations(text: impl Into<String>) -> Self {
        Self::new(SearchKind::Stations, text)
    }

    pub fn owned(mut self) -> Self {
        self.scope = SearchScope::Owner;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.text)?;
        if self.scope == SearchScope::Owner {
            f.write_str(" (library)")?;
        }
        Ok(())
    }
}

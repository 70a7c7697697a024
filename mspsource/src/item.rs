//! Item records produced by provider adapters.
//!
//! A [`MediaItem`] describes one playable entry (a track, a radio station or
//! a podcast episode). Adapters build them from search results; the queue
//! controller stores them as values and only ever writes back the resolved
//! URL and the metadata an adapter hands over after resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

/// What kind of entry an item record stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Track,
    Station,
    Episode,
}

/// Where a record comes from (used by radio directories).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Origin {
    pub fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.state.is_none()
            && self.city.is_none()
            && self.website.is_none()
    }
}

/// A single playable entry as produced by a provider adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Provider-scoped identifier. Duplicates are allowed inside a queue.
    pub id: String,
    #[serde(default)]
    pub kind: MediaKind,
    pub title: String,
    /// Primary artist, creator or broadcaster.
    #[serde(default)]
    pub artist: String,
    /// Album, station group or podcast show.
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// Free-form release date ("1999", "1999-04-12", ...).
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Origin::is_empty")]
    pub origin: Origin,
    #[serde(default)]
    pub codec: Option<String>,
    #[serde(default)]
    pub bitrate_kbps: Option<u32>,
    /// Provider-specific display fields (permalink, license, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default = "default_true")]
    pub streamable: bool,
    /// Opaque payload the adapter uses to produce a stream URL later on.
    #[serde(default)]
    pub hint: String,
    /// Set by the controller once the adapter resolved this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
}

impl MediaItem {
    /// Creates a streamable, non-explicit track record with only the
    /// identifying fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: MediaKind::Track,
            title: title.into(),
            artist: artist.into(),
            container: None,
            duration_ms: None,
            release_date: None,
            thumbnail_url: None,
            description: None,
            genre: None,
            origin: Origin::default(),
            codec: None,
            bitrate_kbps: None,
            extra: BTreeMap::new(),
            explicit: false,
            streamable: true,
            hint: String::new(),
            resolved_url: None,
        }
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn with_streamable(mut self, streamable: bool) -> Self {
        self.streamable = streamable;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Leading four-digit year of `release_date`, if any.
    pub fn year(&self) -> Option<u32> {
        let date = self.release_date.as_deref()?.trim();
        let digits: String = date.chars().take(4).collect();
        if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
            digits.parse().ok()
        } else {
            None
        }
    }

    /// Name of the station this record plays, for radio-style providers.
    pub fn station_name(&self) -> Option<&str> {
        match self.kind {
            MediaKind::Station => Some(self.title.as_str()),
            _ => self.container.as_deref(),
        }
    }

    /// Copies display metadata from `update` into `self`.
    ///
    /// Identity, policy flags and the resolution hint are kept: an adapter may
    /// enrich a record, not turn it into another one. Fields the update leaves
    /// empty do not erase known values.
    pub fn merge_display(&mut self, update: &MediaItem) {
        if !update.title.is_empty() {
            self.title = update.title.clone();
        }
        if !update.artist.is_empty() {
            self.artist = update.artist.clone();
        }
        merge_option(&mut self.container, &update.container);
        merge_option(&mut self.duration_ms, &update.duration_ms);
        merge_option(&mut self.release_date, &update.release_date);
        merge_option(&mut self.thumbnail_url, &update.thumbnail_url);
        merge_option(&mut self.description, &update.description);
        merge_option(&mut self.genre, &update.genre);
        merge_option(&mut self.origin.country, &update.origin.country);
        merge_option(&mut self.origin.state, &update.origin.state);
        merge_option(&mut self.origin.city, &update.origin.city);
        merge_option(&mut self.origin.website, &update.origin.website);
        merge_option(&mut self.codec, &update.codec);
        merge_option(&mut self.bitrate_kbps, &update.bitrate_kbps);
        for (key, value) in &update.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

fn merge_option<T: Clone>(target: &mut Option<T>, update: &Option<T>) {
    if update.is_some() {
        target.clone_from(update);
    }
}

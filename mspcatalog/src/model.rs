//! On-disk catalog document.
//!
//! ```yaml
//! provider:
//!   id: jazzclub
//!   name: Jazz Club
//! items:
//!   - id: t1
//!     title: So What
//!     artist: Miles Davis
//!     container: Kind of Blue
//!     genre: jazz
//!     hint: https://cdn.example.org/t1.flac
//! playlists:
//!   Late Night: [t1]
//! categories:
//!   Chill: [t1]
//! library: [t1]
//! unavailable:
//!   - https://cdn.example.org/gone.mp3
//! now_playing:
//!   fip:
//!     id: fip
//!     title: Nardis
//!     artist: Bill Evans
//! ```

use mspsource::MediaItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_provider_id() -> String {
    "catalog".to_string()
}

fn default_provider_name() -> String {
    "Catalog".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    #[serde(default = "default_provider_id")]
    pub id: String,
    #[serde(default = "default_provider_name")]
    pub name: String,
}

impl Default for ProviderInfo {
    fn default() -> Self {
        Self {
            id: default_provider_id(),
            name: default_provider_name(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub provider: ProviderInfo,
    #[serde(default)]
    pub items: Vec<MediaItem>,
    /// Playlist name -> item ids, in play order
    #[serde(default)]
    pub playlists: BTreeMap<String, Vec<String>>,
    /// Category (mood, editorial shelf) name -> item ids
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    /// Ids of the records in the user's own library
    #[serde(default)]
    pub library: Vec<String>,
    /// Stream hints that no longer resolve
    #[serde(default)]
    pub unavailable: Vec<String>,
    /// Live metadata per station or episode id
    #[serde(default)]
    pub now_playing: BTreeMap<String, MediaItem>,
}

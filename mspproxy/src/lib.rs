//! # MSPProxy
//!
//! Music-service facades for audio players.
//!
//! Each facade pairs one provider adapter with a queue controller and
//! exposes what a player process calls: `enqueue_*` to fill the queue,
//! `next_url` / `prev_url` / `get_url` to obtain stream URLs, editing and
//! `current_*` getters for display.
//!
//! | Facade          | `enqueue_*` names                                                   |
//! |-----------------|---------------------------------------------------------------------|
//! | [`Spotify`]     | tracks, artist, album, playlist, category, recommendations, by id   |
//! | [`Deezer`]      | tracks, artist, album, playlist, playlist by id, radio              |
//! | [`SoundCloud`]  | tracks, artist, playlist, track by id                               |
//! | [`Plex`]        | tracks, artist, album, playlist (library only)                      |
//! | [`TuneIn`]      | stations, podcast, station by id                                    |
//! | [`IHeart`]      | stations, artist radio, podcast                                     |
//! | [`GoogleMusic`] | tracks, artist, album, playlist, station, recommendations by track  |
//! | [`Dirble`]      | stations, category, station by id                                   |
//! | [`YouTube`]     | tracks, playlist, track by id                                       |
//!
//! Facades hold no state of their own; a host that shares one between
//! threads must put it behind a mutex.
//!
//! ```rust,no_run
//! use mspproxy::Spotify;
//! # fn adapter() -> Box<dyn mspsource::ProviderAdapter> { unimplemented!() }
//!
//! let mut spotify = Spotify::new(adapter());
//! spotify.set_play_mode("SHUFFLE")?;
//! spotify.enqueue_artist("Nina Simone")?;
//! let url = spotify.next_url()?;
//! println!("{} - {}: {url}", spotify.current_artist(), spotify.current_title());
//! # Ok::<(), mspqueue::QueueError>(())
//! ```

pub mod providers;
mod proxy;

pub use providers::{
    Deezer, Dirble, GoogleMusic, IHeart, Plex, SoundCloud, Spotify, TuneIn, YouTube,
};
pub use proxy::Proxy;

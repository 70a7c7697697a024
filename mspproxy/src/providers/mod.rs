//! One facade per streaming service.
//!
//! A facade is a [`Proxy`](crate::Proxy) under the service's name, plus the
//! `enqueue_*` methods that service offers. Each `enqueue_*` method only
//! builds the matching [`SearchQuery`](mspsource::SearchQuery).

/// Declares a facade newtype over `Proxy<A>` with its constructors and
/// `Deref` to the proxy.
macro_rules! facade {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<A: ::mspsource::ProviderAdapter>($crate::Proxy<A>);

        impl<A: ::mspsource::ProviderAdapter> $name<A> {
            pub fn new(adapter: A) -> Self {
                Self($crate::Proxy::new(adapter))
            }

            /// Builds the facade with the configured play mode and explicit
            /// filter.
            pub fn from_config(adapter: A, config: &::mspconfig::Config) -> ::anyhow::Result<Self> {
                Ok(Self($crate::Proxy::from_config(adapter, config)?))
            }

            pub fn into_proxy(self) -> $crate::Proxy<A> {
                self.0
            }
        }

        impl<A: ::mspsource::ProviderAdapter> From<$crate::Proxy<A>> for $name<A> {
            fn from(proxy: $crate::Proxy<A>) -> Self {
                Self(proxy)
            }
        }

        impl<A: ::mspsource::ProviderAdapter> ::std::ops::Deref for $name<A> {
            type Target = $crate::Proxy<A>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<A: ::mspsource::ProviderAdapter> ::std::ops::DerefMut for $name<A> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

pub mod deezer;
pub mod dirble;
pub mod gmusic;
pub mod iheart;
pub mod plex;
pub mod soundcloud;
pub mod spotify;
pub mod tunein;
pub mod youtube;

pub use deezer::Deezer;
pub use dirble::Dirble;
pub use gmusic::GoogleMusic;
pub use iheart::IHeart;
pub use plex::Plex;
pub use soundcloud::SoundCloud;
pub use spotify::Spotify;
pub use tunein::TuneIn;
pub use youtube::YouTube;

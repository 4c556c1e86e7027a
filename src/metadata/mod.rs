//! BetterTTV emote owner lookup and its in-process cache.
//!
//! [`BttvClient`] resolves an emote id to the display name of the user who uploaded it.
//! [`MetadataCache`] sits in front of any [`MetadataSource`], bounding memory with a
//! max capacity and a time-to-live, and coalescing concurrent lookups of the same id
//! into one upstream call.

pub mod cache;
pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use cache::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL, MetadataCache, MetadataCacheConfig};
pub use client::{BttvClient, BttvEmote, BttvUser, MetadataSource};
pub use error::MetadataError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockMetadataSource;

//! Boundary with the Kodi library.
//!
//! The real connector lives outside this crate. The routing core only sees a
//! [`LibrarySnapshot`] behind a shared handle, a stream of [`LibraryChange`]s
//! coming back through the event bus, and the [`LibraryActions`] it can fire.

pub mod memory;
pub mod snapshot;

pub use memory::MemoryLibrary;
pub use snapshot::LibrarySnapshot;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{LibraryStatus, MediaItem, MediaKey};
use crate::sorting::SortSettings;
use crate::utils::AppResult;

pub type LibraryHandle = Arc<RwLock<LibrarySnapshot>>;

pub fn new_handle(snapshot: LibrarySnapshot) -> LibraryHandle {
    Arc::new(RwLock::new(snapshot))
}

/// A change the library reports after it happened
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryChange {
    /// An entity was edited; carries the new value
    Updated(MediaItem),
    Deleted(MediaKey),
    /// The whole library was loaded again
    Reloaded,
    StatusChanged(LibraryStatus),
}

/// Requests the UI sends to the library. Completion is observed through the
/// resulting change notifications, never by awaiting these in the router.
#[async_trait]
pub trait LibraryActions: Send + Sync {
    async fn set_watched(&self, key: MediaKey, watched: bool) -> AppResult<()>;

    async fn reload(&self) -> AppResult<()>;

    async fn sort_changed(&self, list: &str, settings: SortSettings) -> AppResult<()>;
}

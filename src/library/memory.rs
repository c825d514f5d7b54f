use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{LibraryActions, LibraryHandle, LibrarySnapshot};
use crate::events::EventBus;
use crate::models::{LibraryStatus, MediaItem, MediaKey};
use crate::sorting::SortSettings;
use crate::utils::{AppError, AppResult};

/// Library kept in memory, publishing a change event for every mutation.
///
/// Stands in for the Kodi connector in the headless binary and in tests.
#[derive(Debug, Clone)]
pub struct MemoryLibrary {
    handle: LibraryHandle,
    event_bus: Arc<EventBus>,
    /// Snapshot restored by `reload`
    pristine: Arc<LibrarySnapshot>,
}

impl MemoryLibrary {
    pub fn new(snapshot: LibrarySnapshot, event_bus: Arc<EventBus>) -> Self {
        Self {
            handle: super::new_handle(snapshot.clone()),
            event_bus,
            pristine: Arc::new(snapshot),
        }
    }

    /// Load a snapshot from a JSON file
    pub fn from_json_file(path: &Path, event_bus: Arc<EventBus>) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let snapshot: LibrarySnapshot = serde_json::from_str(&contents)?;
        info!(
            "Loaded library from {:?}: {} movies, {} shows, {} music videos",
            path,
            snapshot.movies.len(),
            snapshot.tvshows.len(),
            snapshot.music_videos.len()
        );
        Ok(Self::new(snapshot, event_bus))
    }

    pub fn handle(&self) -> LibraryHandle {
        self.handle.clone()
    }

    /// Replace an entity and notify subscribers
    pub async fn update(&self, item: MediaItem) -> AppResult<()> {
        self.handle.write().await.upsert(item.clone());
        self.event_bus.emit_media_updated(item).await
    }

    /// Remove an entity and notify subscribers
    pub async fn delete(&self, key: MediaKey) -> AppResult<()> {
        let removed = self.handle.write().await.remove(key);
        if !removed {
            return Err(AppError::MediaNotFound(format!("{:?}", key)));
        }
        self.event_bus.emit_media_deleted(key).await
    }

    pub async fn set_status(&self, status: LibraryStatus) -> AppResult<()> {
        self.handle.write().await.status = status;
        self.event_bus.emit_status_changed(status).await
    }

    /// Apply a watched toggle to one item, returning every item it touched
    fn mark(snapshot: &mut LibrarySnapshot, key: MediaKey, watched: bool) -> AppResult<Vec<MediaItem>> {
        let item = snapshot
            .lookup(key)
            .ok_or_else(|| AppError::MediaNotFound(format!("{:?}", key)))?;
        let playcount = |current: u32| match (watched, current) {
            (true, 0) => 1,
            (true, n) => n,
            (false, _) => 0,
        };

        let mut touched = Vec::new();
        match item {
            MediaItem::Movie(mut movie) => {
                movie.playcount = playcount(movie.playcount);
                touched.push(MediaItem::Movie(movie));
            }
            MediaItem::Episode(mut episode) => {
                episode.playcount = playcount(episode.playcount);
                let tvshow_id = episode.tvshow_id;
                touched.push(MediaItem::Episode(episode));
                for item in &touched {
                    snapshot.upsert(item.clone());
                }
                touched.extend(Self::refresh_show(snapshot, tvshow_id));
                return Ok(touched);
            }
            MediaItem::TvShow(show) => {
                for episode in snapshot.episodes.iter_mut().filter(|e| e.tvshow_id == show.id) {
                    episode.playcount = playcount(episode.playcount);
                    touched.push(MediaItem::Episode(episode.clone()));
                }
                touched.extend(Self::refresh_show(snapshot, show.id));
                return Ok(touched);
            }
            MediaItem::MusicVideo(mut video) => {
                video.playcount = playcount(video.playcount);
                touched.push(MediaItem::MusicVideo(video));
            }
            MediaItem::MovieSet(set) => {
                for movie in snapshot.movies.iter_mut().filter(|m| m.set_id == Some(set.id)) {
                    movie.playcount = playcount(movie.playcount);
                    touched.push(MediaItem::Movie(movie.clone()));
                }
            }
            MediaItem::Artist(_) => {
                return Err(AppError::Library("artists have no watched state".to_string()));
            }
        }

        for item in &touched {
            snapshot.upsert(item.clone());
        }
        Ok(touched)
    }

    /// Recount watched episodes of a show after one of them changed
    fn refresh_show(snapshot: &mut LibrarySnapshot, tvshow_id: crate::models::TvShowId) -> Option<MediaItem> {
        let episodes: Vec<_> = snapshot
            .episodes
            .iter()
            .filter(|e| e.tvshow_id == tvshow_id)
            .collect();
        let total = episodes.len() as u32;
        let watched = episodes.iter().filter(|e| e.playcount > 0).count() as u32;

        let show = snapshot.tvshows.iter_mut().find(|s| s.id == tvshow_id)?;
        show.episode_count = total;
        show.watched_episode_count = watched;
        Some(MediaItem::TvShow(show.clone()))
    }
}

#[async_trait]
impl LibraryActions for MemoryLibrary {
    async fn set_watched(&self, key: MediaKey, watched: bool) -> AppResult<()> {
        let touched = {
            let mut snapshot = self.handle.write().await;
            Self::mark(&mut snapshot, key, watched)?
        };
        debug!("Marked {:?} watched={} ({} items changed)", key, watched, touched.len());
        for item in touched {
            self.event_bus.emit_media_updated(item).await?;
        }
        Ok(())
    }

    async fn reload(&self) -> AppResult<()> {
        self.set_status(LibraryStatus::Loading).await?;
        {
            let mut snapshot = self.handle.write().await;
            *snapshot = (*self.pristine).clone();
            snapshot.status = LibraryStatus::Loaded;
        }
        info!("Library reloaded");
        self.event_bus.emit_status_changed(LibraryStatus::Loaded).await?;
        self.event_bus.emit_library_reloaded().await
    }

    async fn sort_changed(&self, list: &str, settings: SortSettings) -> AppResult<()> {
        self.event_bus
            .emit_sort_changed(list.to_string(), settings)
            .await
    }
}

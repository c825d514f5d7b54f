use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{
    Artist, Episode, Genre, LibraryStatus, MediaItem, MediaKey, MediaKind, Movie, MovieSet,
    MovieSetId, MusicVideo, PlaylistFile, TvShow, TvShowId,
};
use crate::router::{ArtistAlbum, SeasonEpisodes};

/// In-memory copy of the Kodi library as last loaded by the connector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    #[serde(default)]
    pub status: LibraryStatus,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub movie_sets: Vec<MovieSet>,
    #[serde(default)]
    pub tvshows: Vec<TvShow>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub music_videos: Vec<MusicVideo>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub playlists: Vec<PlaylistFile>,
}

impl LibrarySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look an entity up by its stable identity
    pub fn lookup(&self, key: MediaKey) -> Option<MediaItem> {
        match key {
            MediaKey::Movie(id) => self
                .movies
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .map(MediaItem::Movie),
            MediaKey::MovieSet(id) => self
                .movie_sets
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .map(MediaItem::MovieSet),
            MediaKey::TvShow(id) => self
                .tvshows
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .map(MediaItem::TvShow),
            MediaKey::Episode(id) => self
                .episodes
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .map(MediaItem::Episode),
            MediaKey::Artist(id) => self
                .artists
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .map(MediaItem::Artist),
            MediaKey::MusicVideo(id) => self
                .music_videos
                .iter()
                .find(|v| v.id == id)
                .cloned()
                .map(MediaItem::MusicVideo),
        }
    }

    /// Insert or replace an entity, keeping its position when it exists
    pub fn upsert(&mut self, item: MediaItem) {
        fn put<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T) -> bool) {
            match items.iter().position(same) {
                Some(index) => items[index] = item,
                None => items.push(item),
            }
        }

        match item {
            MediaItem::Movie(movie) => {
                let id = movie.id;
                put(&mut self.movies, movie, |m| m.id == id)
            }
            MediaItem::MovieSet(set) => {
                let id = set.id;
                put(&mut self.movie_sets, set, |s| s.id == id)
            }
            MediaItem::TvShow(show) => {
                let id = show.id;
                put(&mut self.tvshows, show, |s| s.id == id)
            }
            MediaItem::Episode(episode) => {
                let id = episode.id;
                put(&mut self.episodes, episode, |e| e.id == id)
            }
            MediaItem::Artist(artist) => {
                let id = artist.id;
                put(&mut self.artists, artist, |a| a.id == id)
            }
            MediaItem::MusicVideo(video) => {
                let id = video.id;
                put(&mut self.music_videos, video, |v| v.id == id)
            }
        }
    }

    /// Remove an entity, returning whether it was present
    pub fn remove(&mut self, key: MediaKey) -> bool {
        fn take<T>(items: &mut Vec<T>, same: impl Fn(&T) -> bool) -> bool {
            let before = items.len();
            items.retain(|item| !same(item));
            items.len() != before
        }

        match key {
            MediaKey::Movie(id) => take(&mut self.movies, |m| m.id == id),
            MediaKey::MovieSet(id) => take(&mut self.movie_sets, |s| s.id == id),
            MediaKey::TvShow(id) => take(&mut self.tvshows, |s| s.id == id),
            MediaKey::Episode(id) => take(&mut self.episodes, |e| e.id == id),
            MediaKey::Artist(id) => take(&mut self.artists, |a| a.id == id),
            MediaKey::MusicVideo(id) => take(&mut self.music_videos, |v| v.id == id),
        }
    }

    pub fn items_of_kind(&self, kind: MediaKind) -> Vec<MediaItem> {
        match kind {
            MediaKind::Movie => self.movies.iter().cloned().map(MediaItem::Movie).collect(),
            MediaKind::MovieSet => self
                .movie_sets
                .iter()
                .cloned()
                .map(MediaItem::MovieSet)
                .collect(),
            MediaKind::TvShow => self.tvshows.iter().cloned().map(MediaItem::TvShow).collect(),
            MediaKind::Episode => self
                .episodes
                .iter()
                .cloned()
                .map(MediaItem::Episode)
                .collect(),
            MediaKind::Artist => self.artists.iter().cloned().map(MediaItem::Artist).collect(),
            MediaKind::MusicVideo => self
                .music_videos
                .iter()
                .cloned()
                .map(MediaItem::MusicVideo)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn unwatched_movies(&self) -> Vec<MediaItem> {
        self.movies
            .iter()
            .filter(|m| m.playcount == 0)
            .cloned()
            .map(MediaItem::Movie)
            .collect()
    }

    pub fn movies_in_set(&self, set_id: MovieSetId) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| m.set_id == Some(set_id))
            .cloned()
            .collect()
    }

    /// Season numbers of a show, specials last
    pub fn seasons(&self, tvshow_id: TvShowId) -> Vec<u32> {
        let seasons: BTreeSet<u32> = self
            .episodes
            .iter()
            .filter(|e| e.tvshow_id == tvshow_id)
            .map(|e| e.season)
            .collect();
        let (specials, regular): (Vec<u32>, Vec<u32>) = seasons.into_iter().partition(|s| *s == 0);
        regular.into_iter().chain(specials).collect()
    }

    /// Episodes of one season in episode order, `None` when the season is empty
    pub fn season_episodes(&self, tvshow_id: TvShowId, season: u32) -> Option<SeasonEpisodes> {
        let mut episodes: Vec<Episode> = self
            .episodes
            .iter()
            .filter(|e| e.tvshow_id == tvshow_id && e.season == season)
            .cloned()
            .collect();
        if episodes.is_empty() {
            return None;
        }
        episodes.sort_by_key(|e| e.episode);

        let show_title = self
            .tvshows
            .iter()
            .find(|s| s.id == tvshow_id)
            .map(|s| s.title.clone())
            .unwrap_or_else(|| episodes[0].show_title.clone());

        Some(SeasonEpisodes {
            tvshow_id,
            show_title,
            season,
            episodes,
        })
    }

    /// First unwatched episode of every show that still has one
    pub fn up_next_episodes(&self) -> Vec<MediaItem> {
        self.tvshows
            .iter()
            .filter_map(|show| {
                self.episodes
                    .iter()
                    .filter(|e| e.tvshow_id == show.id && e.playcount == 0)
                    .min_by_key(|e| (e.season == 0, e.season, e.episode))
                    .cloned()
                    .map(MediaItem::Episode)
            })
            .collect()
    }

    /// Music videos of an artist grouped by album, in album title order
    pub fn artist_albums(&self, artist: &Artist) -> Vec<ArtistAlbum> {
        let mut albums: Vec<ArtistAlbum> = Vec::new();
        for video in self.music_videos.iter().filter(|v| v.artist == artist.name) {
            match albums.iter_mut().find(|a| a.album == video.album) {
                Some(album) => album.music_videos.push(video.clone()),
                None => albums.push(ArtistAlbum {
                    artist: artist.clone(),
                    album: video.album.clone(),
                    music_videos: vec![video.clone()],
                }),
            }
        }
        albums.sort_by(|a, b| a.album.to_lowercase().cmp(&b.album.to_lowercase()));
        albums
    }

    pub fn album(&self, artist: &Artist, album: &str) -> Option<ArtistAlbum> {
        self.artist_albums(artist)
            .into_iter()
            .find(|a| a.album == album)
    }

    /// Movies, shows and music videos tagged with a genre
    pub fn genre_items(&self, genre: &Genre) -> Vec<MediaItem> {
        match genre.kind {
            MediaKind::Movie => self
                .movies
                .iter()
                .filter(|m| m.genres.iter().any(|g| g == &genre.label))
                .cloned()
                .map(MediaItem::Movie)
                .collect(),
            MediaKind::TvShow => self
                .tvshows
                .iter()
                .filter(|s| s.genres.iter().any(|g| g == &genre.label))
                .cloned()
                .map(MediaItem::TvShow)
                .collect(),
            _ => Vec::new(),
        }
    }
}

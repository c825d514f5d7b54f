use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{
    Artist, ArtistId, Episode, Genre, GenreId, HostItem, MediaItem, MediaKey, MediaKind, Movie,
    MovieSet, MusicVideo, PlaylistFile, SettingCategory, SettingSection, TvShow, TvShowId,
};

/// All episodes of one season of a TV show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonEpisodes {
    pub tvshow_id: TvShowId,
    pub show_title: String,
    pub season: u32,
    pub episodes: Vec<Episode>,
}

impl SeasonEpisodes {
    /// Label shown for the season, "Specials" for season 0
    pub fn label(&self) -> String {
        if self.season == 0 {
            "Specials".to_string()
        } else {
            format!("Season {}", self.season)
        }
    }

    pub fn contains(&self, episode: &Episode) -> bool {
        episode.tvshow_id == self.tvshow_id && episode.season == self.season
    }
}

/// Music videos of one artist grouped under an album title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistAlbum {
    pub artist: Artist,
    pub album: String,
    pub music_videos: Vec<MusicVideo>,
}

/// Every navigable destination of the app.
///
/// Payload variants carry an immutable snapshot of the entity they point at,
/// so a route can be rendered without a further lookup. Equality and hashing
/// only look at identity (see [`RouteKey`]); use [`Route::same_content`] to
/// compare payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Route {
    Start,
    Movies,
    UnwatchedMovies,
    MovieSets,
    MoviesPlaylists,
    MoviesPlaylist(PlaylistFile),
    Movie(Movie),
    MovieSet(MovieSet),
    TvShows,
    UnwatchedEpisodes,
    TvShow(TvShow),
    Season(SeasonEpisodes),
    Episode(Episode),
    MusicVideos,
    MusicVideoArtist(Artist),
    MusicVideoAlbum(ArtistAlbum),
    MusicVideo(MusicVideo),
    Genres,
    GenreItems(Genre),
    Search,
    Favourites,
    KodiSettings,
    KodiSettingsDetails(SettingSection, SettingCategory),
    AppSettings,
    HostItemSettings(HostItem),
    Fallback,
}

/// Payload-free discriminant of a [`Route`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteKind {
    Start,
    Movies,
    UnwatchedMovies,
    MovieSets,
    MoviesPlaylists,
    MoviesPlaylist,
    Movie,
    MovieSet,
    TvShows,
    UnwatchedEpisodes,
    TvShow,
    Season,
    Episode,
    MusicVideos,
    MusicVideoArtist,
    MusicVideoAlbum,
    MusicVideo,
    Genres,
    GenreItems,
    Search,
    Favourites,
    KodiSettings,
    KodiSettingsDetails,
    AppSettings,
    HostItemSettings,
    Fallback,
}

impl RouteKind {
    pub const ALL: [RouteKind; 26] = [
        RouteKind::Start,
        RouteKind::Movies,
        RouteKind::UnwatchedMovies,
        RouteKind::MovieSets,
        RouteKind::MoviesPlaylists,
        RouteKind::MoviesPlaylist,
        RouteKind::Movie,
        RouteKind::MovieSet,
        RouteKind::TvShows,
        RouteKind::UnwatchedEpisodes,
        RouteKind::TvShow,
        RouteKind::Season,
        RouteKind::Episode,
        RouteKind::MusicVideos,
        RouteKind::MusicVideoArtist,
        RouteKind::MusicVideoAlbum,
        RouteKind::MusicVideo,
        RouteKind::Genres,
        RouteKind::GenreItems,
        RouteKind::Search,
        RouteKind::Favourites,
        RouteKind::KodiSettings,
        RouteKind::KodiSettingsDetails,
        RouteKind::AppSettings,
        RouteKind::HostItemSettings,
        RouteKind::Fallback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Start => "start",
            RouteKind::Movies => "movies",
            RouteKind::UnwatchedMovies => "unwatched_movies",
            RouteKind::MovieSets => "movie_sets",
            RouteKind::MoviesPlaylists => "movies_playlists",
            RouteKind::MoviesPlaylist => "movies_playlist",
            RouteKind::Movie => "movie",
            RouteKind::MovieSet => "movie_set",
            RouteKind::TvShows => "tvshows",
            RouteKind::UnwatchedEpisodes => "unwatched_episodes",
            RouteKind::TvShow => "tvshow",
            RouteKind::Season => "season",
            RouteKind::Episode => "episode",
            RouteKind::MusicVideos => "music_videos",
            RouteKind::MusicVideoArtist => "music_video_artist",
            RouteKind::MusicVideoAlbum => "music_video_album",
            RouteKind::MusicVideo => "music_video",
            RouteKind::Genres => "genres",
            RouteKind::GenreItems => "genre_items",
            RouteKind::Search => "search",
            RouteKind::Favourites => "favourites",
            RouteKind::KodiSettings => "kodi_settings",
            RouteKind::KodiSettingsDetails => "kodi_settings_details",
            RouteKind::AppSettings => "app_settings",
            RouteKind::HostItemSettings => "host_item_settings",
            RouteKind::Fallback => "fallback",
        }
    }
}

impl FromStr for RouteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown route '{}'", s))
    }
}

impl Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a route: the variant plus the stable id of its payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Static(RouteKind),
    Media(MediaKey),
    Season { tvshow_id: TvShowId, season: u32 },
    Album { artist_id: ArtistId, album: String },
    Playlist(String),
    Genre(MediaKind, GenreId),
    Setting { section: String, category: String },
    Host(String),
}

impl Route {
    /// Routes without a payload, in sidebar order
    pub const STATIC: [Route; 14] = [
        Route::Start,
        Route::Movies,
        Route::UnwatchedMovies,
        Route::MovieSets,
        Route::MoviesPlaylists,
        Route::TvShows,
        Route::UnwatchedEpisodes,
        Route::MusicVideos,
        Route::Genres,
        Route::Search,
        Route::Favourites,
        Route::KodiSettings,
        Route::AppSettings,
        Route::Fallback,
    ];

    /// Build the payload-free route for `kind`, if it has none
    pub fn from_static(kind: RouteKind) -> Option<Route> {
        Some(match kind {
            RouteKind::Start => Route::Start,
            RouteKind::Movies => Route::Movies,
            RouteKind::UnwatchedMovies => Route::UnwatchedMovies,
            RouteKind::MovieSets => Route::MovieSets,
            RouteKind::MoviesPlaylists => Route::MoviesPlaylists,
            RouteKind::TvShows => Route::TvShows,
            RouteKind::UnwatchedEpisodes => Route::UnwatchedEpisodes,
            RouteKind::MusicVideos => Route::MusicVideos,
            RouteKind::Genres => Route::Genres,
            RouteKind::Search => Route::Search,
            RouteKind::Favourites => Route::Favourites,
            RouteKind::KodiSettings => Route::KodiSettings,
            RouteKind::AppSettings => Route::AppSettings,
            RouteKind::Fallback => Route::Fallback,
            _ => return None,
        })
    }

    /// Detail route for a library item
    pub fn for_item(item: &MediaItem) -> Route {
        match item {
            MediaItem::Movie(movie) => Route::Movie(movie.clone()),
            MediaItem::MovieSet(set) => Route::MovieSet(set.clone()),
            MediaItem::TvShow(show) => Route::TvShow(show.clone()),
            MediaItem::Episode(episode) => Route::Episode(episode.clone()),
            MediaItem::Artist(artist) => Route::MusicVideoArtist(artist.clone()),
            MediaItem::MusicVideo(video) => Route::MusicVideo(video.clone()),
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Start => RouteKind::Start,
            Route::Movies => RouteKind::Movies,
            Route::UnwatchedMovies => RouteKind::UnwatchedMovies,
            Route::MovieSets => RouteKind::MovieSets,
            Route::MoviesPlaylists => RouteKind::MoviesPlaylists,
            Route::MoviesPlaylist(_) => RouteKind::MoviesPlaylist,
            Route::Movie(_) => RouteKind::Movie,
            Route::MovieSet(_) => RouteKind::MovieSet,
            Route::TvShows => RouteKind::TvShows,
            Route::UnwatchedEpisodes => RouteKind::UnwatchedEpisodes,
            Route::TvShow(_) => RouteKind::TvShow,
            Route::Season(_) => RouteKind::Season,
            Route::Episode(_) => RouteKind::Episode,
            Route::MusicVideos => RouteKind::MusicVideos,
            Route::MusicVideoArtist(_) => RouteKind::MusicVideoArtist,
            Route::MusicVideoAlbum(_) => RouteKind::MusicVideoAlbum,
            Route::MusicVideo(_) => RouteKind::MusicVideo,
            Route::Genres => RouteKind::Genres,
            Route::GenreItems(_) => RouteKind::GenreItems,
            Route::Search => RouteKind::Search,
            Route::Favourites => RouteKind::Favourites,
            Route::KodiSettings => RouteKind::KodiSettings,
            Route::KodiSettingsDetails(..) => RouteKind::KodiSettingsDetails,
            Route::AppSettings => RouteKind::AppSettings,
            Route::HostItemSettings(_) => RouteKind::HostItemSettings,
            Route::Fallback => RouteKind::Fallback,
        }
    }

    pub fn key(&self) -> RouteKey {
        if let Some(media) = self.media_key() {
            return RouteKey::Media(media);
        }
        match self {
            Route::Season(season) => RouteKey::Season {
                tvshow_id: season.tvshow_id,
                season: season.season,
            },
            Route::MusicVideoAlbum(album) => RouteKey::Album {
                artist_id: album.artist.id,
                album: album.album.clone(),
            },
            Route::MoviesPlaylist(playlist) => RouteKey::Playlist(playlist.file.clone()),
            Route::GenreItems(genre) => RouteKey::Genre(genre.kind, genre.id),
            Route::KodiSettingsDetails(section, category) => RouteKey::Setting {
                section: section.id.clone(),
                category: category.id.clone(),
            },
            Route::HostItemSettings(host) => RouteKey::Host(host.ip.clone()),
            _ => RouteKey::Static(self.kind()),
        }
    }

    /// Library entity backing this route, when it is a single entity that
    /// can be updated or deleted upstream
    pub fn media_key(&self) -> Option<MediaKey> {
        match self {
            Route::Movie(movie) => Some(MediaKey::Movie(movie.id)),
            Route::MovieSet(set) => Some(MediaKey::MovieSet(set.id)),
            Route::TvShow(show) => Some(MediaKey::TvShow(show.id)),
            Route::Episode(episode) => Some(MediaKey::Episode(episode.id)),
            Route::MusicVideoArtist(artist) => Some(MediaKey::Artist(artist.id)),
            Route::MusicVideo(video) => Some(MediaKey::MusicVideo(video.id)),
            _ => None,
        }
    }

    /// Whether rendering this route needs library content
    pub fn needs_library(&self) -> bool {
        !matches!(
            self,
            Route::Start
                | Route::Search
                | Route::Favourites
                | Route::KodiSettings
                | Route::KodiSettingsDetails(..)
                | Route::AppSettings
                | Route::HostItemSettings(_)
                | Route::Fallback
        )
    }

    /// Structural comparison including payload content
    pub fn same_content(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::MoviesPlaylist(a), Route::MoviesPlaylist(b)) => a == b,
            (Route::Movie(a), Route::Movie(b)) => a == b,
            (Route::MovieSet(a), Route::MovieSet(b)) => a == b,
            (Route::TvShow(a), Route::TvShow(b)) => a == b,
            (Route::Season(a), Route::Season(b)) => a == b,
            (Route::Episode(a), Route::Episode(b)) => a == b,
            (Route::MusicVideoArtist(a), Route::MusicVideoArtist(b)) => a == b,
            (Route::MusicVideoAlbum(a), Route::MusicVideoAlbum(b)) => a == b,
            (Route::MusicVideo(a), Route::MusicVideo(b)) => a == b,
            (Route::GenreItems(a), Route::GenreItems(b)) => a == b,
            (Route::KodiSettingsDetails(sa, ca), Route::KodiSettingsDetails(sb, cb)) => {
                sa == sb && ca == cb
            }
            (Route::HostItemSettings(a), Route::HostItemSettings(b)) => a == b,
            _ => self.kind() == other.kind() && Route::from_static(self.kind()).is_some(),
        }
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Start
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            RouteKey::Static(kind) => write!(f, "{}", kind),
            key => write!(f, "{}({:?})", self.kind(), key),
        }
    }
}

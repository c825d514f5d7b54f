pub mod host;
mod identifiers;
pub mod settings;

pub use host::{HostItem, HostMedia, HostStatus};
pub use identifiers::{ArtistId, EpisodeId, GenreId, MovieId, MovieSetId, MusicVideoId, TvShowId};
pub use settings::{SettingCategory, SettingSection};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Kind of library collection an entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Movie,
    MovieSet,
    TvShow,
    Season,
    Episode,
    Artist,
    MusicVideo,
    Genre,
    Playlist,
    Setting,
    Host,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::MovieSet => "movieset",
            MediaKind::TvShow => "tvshow",
            MediaKind::Season => "season",
            MediaKind::Episode => "episode",
            MediaKind::Artist => "artist",
            MediaKind::MusicVideo => "musicvideo",
            MediaKind::Genre => "genre",
            MediaKind::Playlist => "playlist",
            MediaKind::Setting => "setting",
            MediaKind::Host => "host",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub sort_title: String,
    pub year: Option<u32>,
    pub rating: Option<f32>,
    #[serde(default)]
    pub playcount: u32,
    pub last_played: Option<DateTime<Utc>>,
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub runtime: Duration,
    /// Set this movie belongs to, if any
    pub set_id: Option<MovieSetId>,
    pub set_title: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSet {
    pub id: MovieSetId,
    pub title: String,
    #[serde(default)]
    pub sort_title: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub movie_ids: Vec<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvShow {
    pub id: TvShowId,
    pub title: String,
    #[serde(default)]
    pub sort_title: String,
    pub year: Option<u32>,
    pub rating: Option<f32>,
    #[serde(default)]
    pub season_count: u32,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub watched_episode_count: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub plot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub tvshow_id: TvShowId,
    #[serde(default)]
    pub show_title: String,
    pub title: String,
    pub season: u32,
    pub episode: u32,
    #[serde(default)]
    pub playcount: u32,
    pub first_aired: Option<DateTime<Utc>>,
    pub date_added: Option<DateTime<Utc>>,
    pub last_played: Option<DateTime<Utc>>,
    #[serde(default)]
    pub runtime: Duration,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default)]
    pub sort_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicVideo {
    pub id: MusicVideoId,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    pub year: Option<u32>,
    #[serde(default)]
    pub playcount: u32,
    pub last_played: Option<DateTime<Utc>>,
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub runtime: Duration,
    #[serde(default)]
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub label: String,
    pub kind: MediaKind,
}

/// A smart playlist file on the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistFile {
    pub file: String,
    pub label: String,
    pub kind: MediaKind,
}

/// Connection status of the library as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LibraryStatus {
    #[default]
    Offline,
    Connecting,
    Loading,
    Loaded,
    Outdated,
}

impl LibraryStatus {
    /// Whether library content can be shown; an outdated library is still browsable
    pub fn is_browsable(&self) -> bool {
        matches!(self, LibraryStatus::Loaded | LibraryStatus::Outdated)
    }
}

/// Stable identity of a library entity that can change upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKey {
    Movie(MovieId),
    MovieSet(MovieSetId),
    TvShow(TvShowId),
    Episode(EpisodeId),
    Artist(ArtistId),
    MusicVideo(MusicVideoId),
}

impl MediaKey {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaKey::Movie(_) => MediaKind::Movie,
            MediaKey::MovieSet(_) => MediaKind::MovieSet,
            MediaKey::TvShow(_) => MediaKind::TvShow,
            MediaKey::Episode(_) => MediaKind::Episode,
            MediaKey::Artist(_) => MediaKind::Artist,
            MediaKey::MusicVideo(_) => MediaKind::MusicVideo,
        }
    }
}

/// Generic library item that can hold any entity with a stable identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaItem {
    Movie(Movie),
    MovieSet(MovieSet),
    TvShow(TvShow),
    Episode(Episode),
    Artist(Artist),
    MusicVideo(MusicVideo),
}

impl MediaItem {
    pub fn key(&self) -> MediaKey {
        match self {
            MediaItem::Movie(m) => MediaKey::Movie(m.id),
            MediaItem::MovieSet(s) => MediaKey::MovieSet(s.id),
            MediaItem::TvShow(s) => MediaKey::TvShow(s.id),
            MediaItem::Episode(e) => MediaKey::Episode(e.id),
            MediaItem::Artist(a) => MediaKey::Artist(a.id),
            MediaItem::MusicVideo(v) => MediaKey::MusicVideo(v.id),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.key().kind()
    }

    pub fn title(&self) -> &str {
        match self {
            MediaItem::Movie(m) => &m.title,
            MediaItem::MovieSet(s) => &s.title,
            MediaItem::TvShow(s) => &s.title,
            MediaItem::Episode(e) => &e.title,
            MediaItem::Artist(a) => &a.name,
            MediaItem::MusicVideo(v) => &v.title,
        }
    }

    /// Title used for sorting: Kodi's sort title when set, otherwise the
    /// title without a leading article
    pub fn sort_title(&self) -> String {
        let explicit = match self {
            MediaItem::Movie(m) => &m.sort_title,
            MediaItem::MovieSet(s) => &s.sort_title,
            MediaItem::TvShow(s) => &s.sort_title,
            MediaItem::Artist(a) => &a.sort_name,
            MediaItem::Episode(_) | MediaItem::MusicVideo(_) => "",
        };
        if explicit.is_empty() {
            strip_article(self.title()).to_lowercase()
        } else {
            explicit.to_lowercase()
        }
    }

    pub fn year(&self) -> Option<u32> {
        match self {
            MediaItem::Movie(m) => m.year,
            MediaItem::TvShow(s) => s.year,
            MediaItem::MusicVideo(v) => v.year,
            MediaItem::Episode(e) => e.first_aired.map(|d| {
                use chrono::Datelike;
                d.year().max(0) as u32
            }),
            MediaItem::MovieSet(_) | MediaItem::Artist(_) => None,
        }
    }

    pub fn rating(&self) -> Option<f32> {
        match self {
            MediaItem::Movie(m) => m.rating,
            MediaItem::TvShow(s) => s.rating,
            _ => None,
        }
    }

    pub fn playcount(&self) -> u32 {
        match self {
            MediaItem::Movie(m) => m.playcount,
            MediaItem::Episode(e) => e.playcount,
            MediaItem::MusicVideo(v) => v.playcount,
            MediaItem::TvShow(s) => u32::from(
                s.episode_count > 0 && s.watched_episode_count == s.episode_count,
            ),
            MediaItem::MovieSet(_) | MediaItem::Artist(_) => 0,
        }
    }

    pub fn is_watched(&self) -> bool {
        self.playcount() > 0
    }

    pub fn date_added(&self) -> Option<DateTime<Utc>> {
        match self {
            MediaItem::Movie(m) => m.date_added,
            MediaItem::TvShow(s) => s.date_added,
            MediaItem::Episode(e) => e.date_added,
            MediaItem::MusicVideo(v) => v.date_added,
            MediaItem::MovieSet(_) | MediaItem::Artist(_) => None,
        }
    }

    pub fn last_played(&self) -> Option<DateTime<Utc>> {
        match self {
            MediaItem::Movie(m) => m.last_played,
            MediaItem::Episode(e) => e.last_played,
            MediaItem::MusicVideo(v) => v.last_played,
            _ => None,
        }
    }

    pub fn runtime(&self) -> Option<Duration> {
        match self {
            MediaItem::Movie(m) => Some(m.runtime),
            MediaItem::Episode(e) => Some(e.runtime),
            MediaItem::MusicVideo(v) => Some(v.runtime),
            _ => None,
        }
    }
}

const ARTICLES: [&str; 3] = ["the ", "a ", "an "];

fn strip_article(title: &str) -> &str {
    let trimmed = title.trim_start();
    for article in ARTICLES {
        if trimmed.len() > article.len()
            && trimmed.is_char_boundary(article.len())
            && trimmed[..article.len()].eq_ignore_ascii_case(article)
        {
            return &trimmed[article.len()..];
        }
    }
    trimmed
}

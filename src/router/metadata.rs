use serde::{Deserialize, Serialize};

use super::route::Route;
use crate::models::{SettingCategory, SettingSection};

/// RGB accent color used to tint a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl AccentColor {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const GRAY: AccentColor = AccentColor::rgb(142, 142, 147);
    pub const BLUE: AccentColor = AccentColor::rgb(0, 122, 255);
    pub const INDIGO: AccentColor = AccentColor::rgb(88, 86, 214);
    pub const PURPLE: AccentColor = AccentColor::rgb(175, 82, 222);
    pub const TEAL: AccentColor = AccentColor::rgb(48, 176, 199);
    pub const GREEN: AccentColor = AccentColor::rgb(52, 199, 89);
    pub const ORANGE: AccentColor = AccentColor::rgb(255, 149, 0);
    pub const RED: AccentColor = AccentColor::rgb(255, 59, 48);

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Presentation facts about a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetadata {
    pub title: String,
    pub description: String,
    /// Symbolic icon name
    pub icon: String,
    pub accent_color: AccentColor,
    pub loading_message: String,
    pub empty_message: String,
}

impl RouteMetadata {
    /// Entry for routes without bespoke copy
    pub fn details() -> Self {
        entry(
            "Details",
            "Details of the selected item",
            "info.circle",
            AccentColor::GRAY,
            "Loading details",
            "Nothing selected",
        )
    }

    /// Entry for a route that has nothing to render
    pub fn navigation_error() -> Self {
        entry(
            "Navigation Error",
            "This destination is not available",
            "exclamationmark.triangle",
            AccentColor::RED,
            "Loading",
            "There is nothing to show here",
        )
    }
}

/// Presentation metadata for `route`. Total over every variant.
pub fn metadata(route: &Route) -> RouteMetadata {
    match route {
        Route::Start => entry(
            "Komodio",
            "Play your own movies, TV shows and music videos",
            "sparkles.tv",
            AccentColor::BLUE,
            "Loading your library",
            "Your library is empty",
        ),
        Route::Movies => entry(
            "Movies",
            "All the movies in your library",
            "film",
            AccentColor::TEAL,
            "Loading your movies",
            "There are no movies in your library",
        ),
        Route::UnwatchedMovies => entry(
            "Unwatched Movies",
            "Movies that you have not seen yet",
            "eye",
            AccentColor::TEAL,
            "Loading your unwatched movies",
            "You have seen all your movies",
        ),
        Route::MovieSets => entry(
            "Movie Sets",
            "Movies grouped in sets",
            "square.stack",
            AccentColor::TEAL,
            "Loading your movie sets",
            "There are no movie sets in your library",
        ),
        Route::MoviesPlaylists => entry(
            "Movie Playlists",
            "Smart playlists with movies",
            "list.bullet.rectangle",
            AccentColor::TEAL,
            "Loading your playlists",
            "There are no movie playlists",
        ),
        Route::MoviesPlaylist(playlist) => entry(
            playlist_title(&playlist.label),
            "Movies in this playlist",
            "list.bullet.rectangle",
            AccentColor::TEAL,
            "Loading playlist",
            "This playlist is empty",
        ),
        Route::Movie(movie) => entry(
            non_empty(&movie.title),
            movie.plot.clone(),
            "film",
            AccentColor::TEAL,
            "Loading movie",
            "This movie is not available",
        ),
        Route::MovieSet(set) => entry(
            non_empty(&set.title),
            set.plot.clone(),
            "square.stack",
            AccentColor::TEAL,
            "Loading movie set",
            "There are no movies in this set",
        ),
        Route::TvShows => entry(
            "TV shows",
            "All the TV shows in your library",
            "tv",
            AccentColor::INDIGO,
            "Loading your TV shows",
            "There are no TV shows in your library",
        ),
        Route::UnwatchedEpisodes => entry(
            "Up Next",
            "The next episode of the TV shows you are watching",
            "tv",
            AccentColor::INDIGO,
            "Loading your episodes",
            "There are no episodes waiting for you",
        ),
        Route::TvShow(show) => entry(
            non_empty(&show.title),
            show.plot.clone(),
            "tv",
            AccentColor::INDIGO,
            "Loading TV show",
            "This TV show has no episodes",
        ),
        Route::Season(season) => entry(
            season.label(),
            season.show_title.clone(),
            "tv",
            AccentColor::INDIGO,
            "Loading episodes",
            "This season has no episodes",
        ),
        Route::Episode(episode) => entry(
            non_empty(&episode.title),
            episode.show_title.clone(),
            "tv",
            AccentColor::INDIGO,
            "Loading episode",
            "This episode is not available",
        ),
        Route::MusicVideos => entry(
            "Music Videos",
            "All the music videos in your library",
            "music.note.tv",
            AccentColor::PURPLE,
            "Loading your music videos",
            "There are no music videos in your library",
        ),
        Route::MusicVideoArtist(artist) => entry(
            non_empty(&artist.name),
            artist.description.clone(),
            "music.mic",
            AccentColor::PURPLE,
            "Loading artist",
            "This artist has no music videos",
        ),
        Route::MusicVideoAlbum(album) => entry(
            non_empty(&album.album),
            album.artist.name.clone(),
            "square.stack",
            AccentColor::PURPLE,
            "Loading album",
            "This album has no music videos",
        ),
        Route::MusicVideo(video) => entry(
            non_empty(&video.title),
            video.artist.clone(),
            "music.note.tv",
            AccentColor::PURPLE,
            "Loading music video",
            "This music video is not available",
        ),
        Route::Genres => entry(
            "Genres",
            "All genres in your library",
            "tag",
            AccentColor::ORANGE,
            "Loading genres",
            "There are no genres in your library",
        ),
        Route::GenreItems(genre) => entry(
            non_empty(&genre.label),
            "Everything in this genre",
            "tag",
            AccentColor::ORANGE,
            "Loading genre",
            "There is nothing in this genre",
        ),
        Route::Search => entry(
            "Search",
            "Search your library",
            "magnifyingglass",
            AccentColor::GRAY,
            "Searching your library",
            "Nothing found",
        ),
        Route::Favourites => entry(
            "Favourites",
            "Your Kodi favourites",
            "heart",
            AccentColor::RED,
            "Loading your favourites",
            "You have no favourites",
        ),
        Route::KodiSettings => entry(
            "Kodi Settings",
            "Settings of the selected Kodi host",
            "gear",
            AccentColor::GRAY,
            "Loading settings",
            "There are no settings",
        ),
        Route::KodiSettingsDetails(section, category) => entry(
            non_empty(&category.label),
            setting_description(section, category),
            "gear",
            AccentColor::GRAY,
            "Loading settings",
            "There are no settings in this category",
        ),
        Route::AppSettings => entry(
            "Settings",
            "Settings of Komodio",
            "gearshape",
            AccentColor::GRAY,
            "Loading settings",
            "There are no settings",
        ),
        Route::HostItemSettings(host) => entry(
            non_empty(&host.name),
            host.ip.clone(),
            "globe",
            AccentColor::GREEN,
            "Connecting to host",
            "This host is not available",
        ),
        Route::Fallback => RouteMetadata::navigation_error(),
    }
}

fn entry(
    title: impl Into<String>,
    description: impl Into<String>,
    icon: &str,
    accent_color: AccentColor,
    loading_message: &str,
    empty_message: &str,
) -> RouteMetadata {
    RouteMetadata {
        title: title.into(),
        description: description.into(),
        icon: icon.to_string(),
        accent_color,
        loading_message: loading_message.to_string(),
        empty_message: empty_message.to_string(),
    }
}

fn setting_description(section: &SettingSection, category: &SettingCategory) -> String {
    if category.help.is_empty() {
        section.label.clone()
    } else {
        category.help.clone()
    }
}

fn non_empty(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        RouteMetadata::details().title
    } else {
        trimmed.to_string()
    }
}

/// Playlist labels come from file names, drop the extension
fn playlist_title(label: &str) -> String {
    let label = label.strip_suffix(".xsp").unwrap_or(label);
    non_empty(label)
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::library::LibrarySnapshot;
use crate::models::{
    Genre, HostItem, LibraryStatus, MediaItem, MediaKind, PlaylistFile, SettingCategory,
    SettingSection,
};
use crate::router::{ArtistAlbum, Route, SeasonEpisodes, metadata};
use crate::sorting::{
    ItemGroup, SortMethod, SortOrder, SortSettings, group_items, sort_items, swap_movies_for_set,
};

/// Sorted, grouped list of library items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<MediaItem>,
    pub groups: Vec<ItemGroup>,
}

impl ItemList {
    pub fn new(mut items: Vec<MediaItem>, sort: SortSettings) -> Self {
        sort_items(&mut items, sort);
        let groups = group_items(&items, sort.method);
        Self { items, groups }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsPanel {
    Kodi,
    KodiCategory(SettingSection, SettingCategory),
    App,
    Host(HostItem),
}

/// What the detail column shows for a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetailContent {
    Home {
        up_next: Vec<MediaItem>,
        recently_added: Vec<MediaItem>,
    },
    List(ItemList),
    /// An entity together with its children (set members, show episodes,
    /// artist videos)
    Collection { parent: MediaItem, children: ItemList },
    Item(MediaItem),
    Season(SeasonEpisodes),
    Album(ArtistAlbum),
    Playlists(Vec<PlaylistFile>),
    Playlist(PlaylistFile),
    Genres(Vec<Genre>),
    Search,
    Settings(SettingsPanel),
    /// Library content is not available yet
    Status { status: LibraryStatus, message: String },
    /// Destination without a dedicated view
    Fallback {
        title: String,
        description: String,
        icon: String,
    },
}

const RECENTLY_ADDED_LIMIT: usize = 20;

/// Resolve the content for `route` from the current library snapshot.
///
/// Never fails: routes that need the library while it is not browsable
/// resolve to [`DetailContent::Status`], and destinations without a view to
/// [`DetailContent::Fallback`].
pub fn resolve(route: &Route, library: &LibrarySnapshot, sort: SortSettings) -> DetailContent {
    if route.needs_library() && !library.status.is_browsable() {
        return DetailContent::Status {
            status: library.status,
            message: metadata(route).loading_message,
        };
    }

    match route {
        Route::Start => {
            if !library.status.is_browsable() {
                return DetailContent::Home {
                    up_next: Vec::new(),
                    recently_added: Vec::new(),
                };
            }
            let mut recently_added = library.items_of_kind(MediaKind::Movie);
            recently_added.extend(library.items_of_kind(MediaKind::Episode));
            recently_added.retain(|item| item.date_added().is_some());
            sort_items(&mut recently_added, SortSettings::default_for("recently_added"));
            recently_added.truncate(RECENTLY_ADDED_LIMIT);

            DetailContent::Home {
                up_next: library.up_next_episodes(),
                recently_added,
            }
        }
        Route::Movies => {
            let mut movies = library.items_of_kind(MediaKind::Movie);
            sort_items(&mut movies, sort);
            let items = swap_movies_for_set(&movies, &library.movie_sets);
            let groups = group_items(&items, sort.method);
            DetailContent::List(ItemList { items, groups })
        }
        Route::UnwatchedMovies => DetailContent::List(ItemList::new(library.unwatched_movies(), sort)),
        Route::MovieSets => {
            DetailContent::List(ItemList::new(library.items_of_kind(MediaKind::MovieSet), sort))
        }
        Route::MoviesPlaylists => DetailContent::Playlists(
            library
                .playlists
                .iter()
                .filter(|p| p.kind == MediaKind::Movie)
                .cloned()
                .collect(),
        ),
        Route::MoviesPlaylist(playlist) => DetailContent::Playlist(playlist.clone()),
        Route::Movie(movie) => DetailContent::Item(MediaItem::Movie(movie.clone())),
        Route::MovieSet(set) => DetailContent::Collection {
            parent: MediaItem::MovieSet(set.clone()),
            children: ItemList::new(
                library
                    .movies_in_set(set.id)
                    .into_iter()
                    .map(MediaItem::Movie)
                    .collect(),
                SortSettings::new(SortMethod::Year, SortOrder::Ascending),
            ),
        },
        Route::TvShows => {
            DetailContent::List(ItemList::new(library.items_of_kind(MediaKind::TvShow), sort))
        }
        Route::UnwatchedEpisodes => DetailContent::List(ItemList::new(
            library.up_next_episodes(),
            SortSettings::default_for("unwatched_episodes"),
        )),
        Route::TvShow(show) => DetailContent::Collection {
            parent: MediaItem::TvShow(show.clone()),
            children: ItemList::new(
                library
                    .episodes
                    .iter()
                    .filter(|e| e.tvshow_id == show.id)
                    .cloned()
                    .map(MediaItem::Episode)
                    .collect(),
                SortSettings::default_for("season"),
            ),
        },
        Route::Season(season) => {
            let mut season = season.clone();
            season.episodes.sort_by_key(|e| e.episode);
            DetailContent::Season(season)
        }
        Route::Episode(episode) => DetailContent::Item(MediaItem::Episode(episode.clone())),
        Route::MusicVideos => DetailContent::List(ItemList::new(
            library.items_of_kind(MediaKind::Artist),
            sort,
        )),
        Route::MusicVideoArtist(artist) => DetailContent::Collection {
            parent: MediaItem::Artist(artist.clone()),
            children: ItemList::new(
                library
                    .music_videos
                    .iter()
                    .filter(|v| v.artist == artist.name)
                    .cloned()
                    .map(MediaItem::MusicVideo)
                    .collect(),
                SortSettings::default_for("music_videos"),
            ),
        },
        Route::MusicVideoAlbum(album) => DetailContent::Album(album.clone()),
        Route::MusicVideo(video) => DetailContent::Item(MediaItem::MusicVideo(video.clone())),
        Route::Genres => {
            let mut genres = library.genres.clone();
            genres.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
            DetailContent::Genres(genres)
        }
        Route::GenreItems(genre) => DetailContent::List(ItemList::new(library.genre_items(genre), sort)),
        Route::Search => DetailContent::Search,
        Route::KodiSettings => DetailContent::Settings(SettingsPanel::Kodi),
        Route::KodiSettingsDetails(section, category) => DetailContent::Settings(
            SettingsPanel::KodiCategory(section.clone(), category.clone()),
        ),
        Route::AppSettings => DetailContent::Settings(SettingsPanel::App),
        Route::HostItemSettings(host) => DetailContent::Settings(SettingsPanel::Host(host.clone())),
        Route::Favourites | Route::Fallback => {
            debug!("No dedicated view for {}, showing fallback", route);
            let entry = metadata(route);
            DetailContent::Fallback {
                title: entry.title,
                description: entry.description,
                icon: entry.icon,
            }
        }
    }
}

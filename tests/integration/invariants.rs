use crate::common::fixtures::Fixtures;
use komodio::library::{LibraryChange, LibrarySnapshot};
use komodio::metadata;
use komodio::models::*;
use komodio::router::{Route, RouteKind};
use komodio::scene::{Platform, SceneState};

/// Small deterministic generator so failures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

fn routes(library: &LibrarySnapshot) -> Vec<Route> {
    let mut routes: Vec<Route> = Route::STATIC.to_vec();
    routes.extend(library.movies.iter().cloned().map(Route::Movie));
    routes.extend(library.movie_sets.iter().cloned().map(Route::MovieSet));
    routes.extend(library.tvshows.iter().cloned().map(Route::TvShow));
    routes.extend(library.episodes.iter().cloned().map(Route::Episode));
    routes.extend(library.music_videos.iter().cloned().map(Route::MusicVideo));
    routes.extend(library.genres.iter().cloned().map(Route::GenreItems));
    routes.extend(library.playlists.iter().cloned().map(Route::MoviesPlaylist));
    for show in &library.tvshows {
        for season in library.seasons(show.id) {
            routes.extend(library.season_episodes(show.id, season).map(Route::Season));
        }
    }
    for artist in &library.artists {
        routes.push(Route::MusicVideoArtist(artist.clone()));
        routes.extend(
            library
                .artist_albums(artist)
                .into_iter()
                .map(Route::MusicVideoAlbum),
        );
    }
    routes
}

fn changes(library: &LibrarySnapshot) -> Vec<LibraryChange> {
    let mut changes = Vec::new();
    for movie in &library.movies {
        let mut edited = movie.clone();
        edited.playcount += 1;
        changes.push(LibraryChange::Updated(MediaItem::Movie(edited)));
        changes.push(LibraryChange::Deleted(MediaKey::Movie(movie.id)));
    }
    for episode in &library.episodes {
        let mut edited = episode.clone();
        edited.title.push_str(" (Director's Cut)");
        changes.push(LibraryChange::Updated(MediaItem::Episode(edited)));
        changes.push(LibraryChange::Deleted(MediaKey::Episode(episode.id)));
    }
    changes.push(LibraryChange::Reloaded);
    changes
}

#[test]
fn test_metadata_is_total_with_titles() {
    let library = Fixtures::library();
    let routes = routes(&library);
    let mut kinds: Vec<RouteKind> = routes.iter().map(|r| r.kind()).collect();
    kinds.sort_by_key(|k| k.as_str());
    kinds.dedup();
    // Everything but settings detail and host pages is covered by the fixtures
    assert_eq!(kinds.len(), RouteKind::ALL.len() - 2);

    for route in &routes {
        let entry = metadata(route);
        assert!(!entry.title.trim().is_empty(), "{} has no title", route);
        assert!(!entry.icon.is_empty(), "{} has no icon", route);
    }
}

#[test]
fn test_random_walk_keeps_invariants() {
    let library = Fixtures::library();
    let routes = routes(&library);
    let changes = changes(&library);

    for seed in 0..8u64 {
        let mut rng = Lcg(seed);
        let platform = [Platform::MacOs, Platform::TvOs, Platform::Ios][rng.next(3)];
        let mut state = SceneState::new(platform);

        for step in 0..400 {
            let context = format!("seed {} step {}", seed, step);
            match rng.next(10) {
                0 | 1 => {
                    let route = routes[rng.next(routes.len())].clone();
                    state.select_primary(route.clone());
                    assert!(state.stack().is_empty(), "{}", context);
                    assert_eq!(state.detail(), &route, "{}", context);
                }
                2..=4 => {
                    let route = routes[rng.next(routes.len())].clone();
                    let depth = state.stack().len();
                    let grew = state.push(route.clone());
                    assert_eq!(state.stack().len(), depth + grew as usize, "{}", context);
                    assert!(!state.push(route.clone()), "{}", context);
                    assert_eq!(state.stack().len(), depth + grew as usize, "{}", context);
                    assert_eq!(state.detail(), &route, "{}", context);
                }
                5 | 6 => {
                    let depth = state.stack().len();
                    let popped = state.pop();
                    assert_eq!(popped.is_some(), depth > 0, "{}", context);
                    assert!(!state.is_detail_overridden(), "{}", context);
                }
                7 => {
                    let route = routes[rng.next(routes.len())].clone();
                    let stack = state.stack().to_vec();
                    state.override_detail(route.clone());
                    assert_eq!(state.stack(), stack.as_slice(), "{}", context);
                    assert_eq!(state.detail(), &route, "{}", context);
                }
                _ => {
                    let change = &changes[rng.next(changes.len())];
                    let stack = state.stack().to_vec();
                    let primary = state.primary().clone();
                    state.reconcile(change);
                    assert_eq!(state.stack(), stack.as_slice(), "{}", context);
                    assert_eq!(state.primary(), &primary, "{}", context);
                }
            }
        }
    }
}

#[test]
fn test_pop_to_root_from_any_depth() {
    let library = Fixtures::library();
    let routes = routes(&library);
    let mut state = SceneState::default();
    state.select_primary(Route::Movies);
    for route in routes.iter().skip(Route::STATIC.len()).take(10) {
        state.push(route.clone());
    }

    while state.pop().is_some() {}
    assert_eq!(state.detail(), &Route::Movies);
    assert!(state.stack().is_empty());
}

#[test]
fn test_deletion_falls_back_to_ancestor() {
    let library = Fixtures::library();
    let mut state = SceneState::default();
    state.select_primary(Route::MovieSets);
    state.push(Route::MovieSet(library.movie_sets[0].clone()));
    state.push(Route::Movie(library.movies[1].clone()));

    state.reconcile(&LibraryChange::Deleted(MediaKey::Movie(MovieId::new(2))));
    assert_eq!(
        state.detail(),
        &Route::MovieSet(library.movie_sets[0].clone())
    );
}

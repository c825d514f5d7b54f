use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::library::{LibraryChange, LibrarySnapshot};
use crate::models::{EpisodeId, MediaItem, MediaKey};
use crate::router::{Route, SeasonEpisodes};
use crate::sorting::SortSettings;

/// Platform the scene is presented on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    MacOs,
    TvOs,
    Ios,
}

impl Platform {
    /// The sidebar is drawn on top of the content and has to be collapsed
    /// after a selection
    pub fn sidebar_overlays(&self) -> bool {
        matches!(self, Platform::TvOs | Platform::Ios)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::TvOs => "tvos",
            Platform::Ios => "ios",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStyle {
    #[default]
    Grid,
    List,
    Plain,
}

/// Presentation side effect of a navigation transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEffect {
    CollapseSidebar,
    ExitSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The detail now shows the new content of the same entity
    Refreshed,
    /// The detail entity is gone; an ancestor is shown instead
    FellBack,
    Ignored,
}

/// Navigation state of one scene (window).
///
/// `detail` follows `stack.last()`, or `primary` on an empty stack, except
/// after [`SceneState::override_detail`] or a reconcile replaced it.
#[derive(Debug, Clone)]
pub struct SceneState {
    platform: Platform,
    primary: Route,
    stack: Vec<Route>,
    detail: Route,
    collection_style: CollectionStyle,
    sort: SortSettings,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl SceneState {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            primary: Route::Start,
            stack: Vec::new(),
            detail: Route::Start,
            collection_style: CollectionStyle::default(),
            sort: SortSettings::default(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn primary(&self) -> &Route {
        &self.primary
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn detail(&self) -> &Route {
        &self.detail
    }

    pub fn collection_style(&self) -> CollectionStyle {
        self.collection_style
    }

    pub fn set_collection_style(&mut self, style: CollectionStyle) {
        self.collection_style = style;
    }

    pub fn sort(&self) -> SortSettings {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortSettings) {
        self.sort = sort;
    }

    /// What the detail would show without an override
    pub fn expected_detail(&self) -> &Route {
        self.stack.last().unwrap_or(&self.primary)
    }

    pub fn is_detail_overridden(&self) -> bool {
        self.detail != *self.expected_detail()
    }

    /// Switch the sidebar selection. Always resets the stack.
    pub fn select_primary(&mut self, route: Route) -> Vec<SceneEffect> {
        let mut effects = Vec::new();
        if self.platform.sidebar_overlays() {
            effects.push(SceneEffect::CollapseSidebar);
        }
        if self.primary == Route::Search && route != Route::Search {
            effects.push(SceneEffect::ExitSearch);
        }

        debug!("Primary selection {} -> {}", self.primary, route);
        self.stack.clear();
        self.detail = route.clone();
        self.primary = route;
        effects
    }

    /// Drill down into `route`. Pushing the route already on top only
    /// updates the detail; returns whether the stack grew.
    pub fn push(&mut self, route: Route) -> bool {
        let grew = self.stack.last() != Some(&route);
        if grew {
            trace!("Push {} (depth {})", route, self.stack.len() + 1);
            self.stack.push(route.clone());
        }
        self.detail = route;
        grew
    }

    /// Go back one level. On an empty stack this only drops an override.
    pub fn pop(&mut self) -> Option<Route> {
        let popped = self.stack.pop();
        self.detail = self.expected_detail().clone();
        popped
    }

    /// Show `route` in the detail column without touching the stack
    pub fn override_detail(&mut self, route: Route) {
        trace!("Detail override {}", route);
        self.detail = route;
    }

    /// Bring the detail in line with a library change. The stack is never
    /// modified; stale entries are refreshed when they become the detail.
    pub fn reconcile(&mut self, change: &LibraryChange) -> ReconcileOutcome {
        match change {
            LibraryChange::Updated(item) => self.reconcile_update(item),
            LibraryChange::Deleted(key) => self.reconcile_delete(*key),
            LibraryChange::Reloaded | LibraryChange::StatusChanged(_) => ReconcileOutcome::Ignored,
        }
    }

    /// Re-look up the detail after the library was reloaded
    pub fn reconcile_snapshot(&mut self, snapshot: &LibrarySnapshot) -> ReconcileOutcome {
        if !snapshot.status.is_browsable() {
            return ReconcileOutcome::Ignored;
        }

        match current_in(&self.detail, snapshot) {
            None => ReconcileOutcome::Ignored,
            Some(None) => {
                let key = self.detail.media_key();
                self.fall_back(key, Some(snapshot))
            }
            Some(Some(route)) => self.refresh(route),
        }
    }

    fn reconcile_update(&mut self, item: &MediaItem) -> ReconcileOutcome {
        if self.detail.media_key() == Some(item.key()) {
            return self.refresh(Route::for_item(item));
        }

        if let MediaItem::Episode(episode) = item
            && let Route::Season(season) = &self.detail
            && (season.contains(episode) || season.episodes.iter().any(|e| e.id == episode.id))
        {
            let mut season = season.clone();
            season.episodes.retain(|e| e.id != episode.id);
            if season.contains(episode) {
                season.episodes.push(episode.clone());
                season.episodes.sort_by_key(|e| e.episode);
            }
            if season.episodes.is_empty() {
                return self.fall_back(Some(item.key()), None);
            }
            return self.refresh(Route::Season(season));
        }

        ReconcileOutcome::Ignored
    }

    fn reconcile_delete(&mut self, key: MediaKey) -> ReconcileOutcome {
        if self.detail.media_key() == Some(key) {
            return self.fall_back(Some(key), None);
        }

        if let MediaKey::Episode(id) = key
            && let Route::Season(season) = &self.detail
            && season.episodes.iter().any(|e| e.id == id)
        {
            let mut season = season.clone();
            season.episodes.retain(|e| e.id != id);
            if season.episodes.is_empty() {
                return self.fall_back(Some(key), None);
            }
            return self.refresh(Route::Season(season));
        }

        ReconcileOutcome::Ignored
    }

    fn refresh(&mut self, route: Route) -> ReconcileOutcome {
        if route == self.detail && route.same_content(&self.detail) {
            return ReconcileOutcome::Ignored;
        }
        debug!("Refreshing detail {}", route);
        self.detail = route;
        ReconcileOutcome::Refreshed
    }

    /// Replace the detail by its nearest surviving ancestor. An override
    /// starts from the route it overrode, a stacked detail from the entry
    /// below its own, and primary is the last resort. With a snapshot every
    /// candidate must still resolve in it.
    fn fall_back(
        &mut self,
        removed: Option<MediaKey>,
        library: Option<&LibrarySnapshot>,
    ) -> ReconcileOutcome {
        let depth = if self.is_detail_overridden() {
            self.stack.len()
        } else {
            self.stack
                .iter()
                .rposition(|route| *route == self.detail)
                .unwrap_or(0)
        };

        let target = self.stack[..depth]
            .iter()
            .rev()
            .chain(std::iter::once(&self.primary))
            .find_map(|route| surviving(route, removed, library))
            .unwrap_or(Route::Fallback);

        debug!("Detail {} is gone, falling back to {}", self.detail, target);
        self.detail = target;
        ReconcileOutcome::FellBack
    }
}

/// Current version of a library-backed route. `None` when the route does
/// not depend on library entities, `Some(None)` when its entity is gone.
fn current_in(route: &Route, snapshot: &LibrarySnapshot) -> Option<Option<Route>> {
    match route {
        Route::Season(season) => Some(
            snapshot
                .season_episodes(season.tvshow_id, season.season)
                .map(Route::Season),
        ),
        Route::MusicVideoAlbum(album) => Some(
            snapshot
                .album(&album.artist, &album.album)
                .map(Route::MusicVideoAlbum),
        ),
        route => route
            .media_key()
            .map(|key| snapshot.lookup(key).map(|item| Route::for_item(&item))),
    }
}

/// `route` as a fallback candidate, or `None` when it is backed by the
/// removed entity or missing from the snapshot
fn surviving(
    route: &Route,
    removed: Option<MediaKey>,
    library: Option<&LibrarySnapshot>,
) -> Option<Route> {
    if removed.is_some() && route.media_key() == removed {
        return None;
    }

    let route = match (route, removed) {
        (Route::Season(season), Some(MediaKey::Episode(id))) => {
            let season = without_episode(season.clone(), id);
            if season.episodes.is_empty() {
                return None;
            }
            Route::Season(season)
        }
        (route, _) => route.clone(),
    };

    match library.map(|snapshot| current_in(&route, snapshot)) {
        Some(Some(current)) => current,
        _ => Some(route),
    }
}

fn without_episode(mut season: SeasonEpisodes, id: EpisodeId) -> SeasonEpisodes {
    season.episodes.retain(|e| e.id != id);
    season
}

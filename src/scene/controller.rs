use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use super::state::{CollectionStyle, Platform, ReconcileOutcome, SceneEffect, SceneState};
use crate::cache::{SettingsCache, load_settings, store_settings};
use crate::core::Property;
use crate::detail::{RenderStrategy, resolve};
use crate::events::{EventBus, EventSubscriber, LibraryEvent};
use crate::library::{LibraryActions, LibraryChange, LibraryHandle};
use crate::router::{Route, metadata};
use crate::sorting::SortSettings;

/// User intent reaching a scene
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationCommand {
    SelectPrimary(Route),
    Push(Route),
    Pop,
    OverrideDetail(Route),
    /// Flip the watched state of the entity shown in the detail column
    ToggleWatched,
    ReloadLibrary,
    /// Sort preference for the list selected in the sidebar
    SetSort(SortSettings),
    SetCollectionStyle(CollectionStyle),
}

/// Published navigation state of a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub primary: Route,
    pub stack: Vec<Route>,
    pub detail: Route,
    pub sort: SortSettings,
    pub collection_style: CollectionStyle,
}

impl SceneSnapshot {
    fn of(state: &SceneState) -> Self {
        Self {
            primary: state.primary().clone(),
            stack: state.stack().to_vec(),
            detail: state.detail().clone(),
            sort: state.sort(),
            collection_style: state.collection_style(),
        }
    }
}

/// Cache key of the sort preference for a list
pub fn sort_key(list: &str) -> String {
    format!("sort:{}", list)
}

/// Drives one scene: applies commands, dispatches library actions and keeps
/// the detail in sync with library change notifications.
pub struct SceneController {
    state: SceneState,
    library: LibraryHandle,
    actions: Arc<dyn LibraryActions>,
    settings: Arc<dyn SettingsCache>,
    events: EventSubscriber,
    snapshot: Property<SceneSnapshot>,
    dispatched: Vec<JoinHandle<()>>,
}

impl std::fmt::Debug for SceneController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneController")
            .field("state", &self.state)
            .field("library", &"LibraryHandle")
            .field("actions", &"Arc<dyn LibraryActions>")
            .field("settings", &"Arc<dyn SettingsCache>")
            .field("dispatched", &self.dispatched.len())
            .finish()
    }
}

impl SceneController {
    pub fn new(
        platform: Platform,
        library: LibraryHandle,
        actions: Arc<dyn LibraryActions>,
        settings: Arc<dyn SettingsCache>,
        event_bus: &EventBus,
    ) -> Self {
        let state = SceneState::new(platform);
        let snapshot = Property::new(SceneSnapshot::of(&state), "scene");
        let mut controller = Self {
            state,
            library,
            actions,
            settings,
            events: event_bus.subscribe(),
            snapshot,
            dispatched: Vec::new(),
        };
        let sort = controller.load_sort(controller.state.primary().kind().as_str());
        controller.state.set_sort(sort);
        controller
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Observable navigation state for renderers
    pub fn snapshot(&self) -> &Property<SceneSnapshot> {
        &self.snapshot
    }

    pub async fn apply(&mut self, command: NavigationCommand) -> Vec<SceneEffect> {
        trace!("Applying {:?}", command);
        let mut effects = Vec::new();
        match command {
            NavigationCommand::SelectPrimary(route) => {
                let sort = self.load_sort(route.kind().as_str());
                effects = self.state.select_primary(route);
                self.state.set_sort(sort);
            }
            NavigationCommand::Push(route) => {
                self.state.push(route);
            }
            NavigationCommand::Pop => {
                // Stack entries keep the content they were pushed with
                if self.state.pop().is_some() {
                    self.resync().await;
                }
            }
            NavigationCommand::OverrideDetail(route) => self.state.override_detail(route),
            NavigationCommand::ToggleWatched => self.toggle_watched().await,
            NavigationCommand::ReloadLibrary => {
                let actions = self.actions.clone();
                self.dispatch("reload", async move { actions.reload().await });
            }
            NavigationCommand::SetSort(sort) => self.set_sort(sort),
            NavigationCommand::SetCollectionStyle(style) => self.state.set_collection_style(style),
        }
        self.publish().await;
        effects
    }

    /// Feed one library notification through the reconcile rules
    pub async fn handle_event(&mut self, event: &LibraryEvent) -> ReconcileOutcome {
        let outcome = match event.change() {
            Some(LibraryChange::Reloaded) | Some(LibraryChange::StatusChanged(_)) => {
                self.resync().await
            }
            Some(change) => match self.state.reconcile(&change) {
                // The ancestor may be gone as well; only the snapshot can tell
                ReconcileOutcome::FellBack => {
                    self.resync().await;
                    ReconcileOutcome::FellBack
                }
                outcome => outcome,
            },
            None => ReconcileOutcome::Ignored,
        };

        if outcome != ReconcileOutcome::Ignored {
            debug!("{:?} after {}", outcome, event.event_type.as_str());
            self.publish().await;
        }
        outcome
    }

    /// Handle every notification already queued without waiting for more
    pub async fn pump_events(&mut self) -> Vec<ReconcileOutcome> {
        let mut outcomes = Vec::new();
        while let Some(event) = self.events.try_recv() {
            outcomes.push(self.handle_event(&event).await);
        }
        let missed = self.events.take_missed();
        if missed > 0 {
            warn!("Missed {} library events, resynchronising", missed);
            outcomes.push(self.resync().await);
            self.publish().await;
        }
        outcomes
    }

    /// Process notifications until the event bus is dropped
    pub async fn run(&mut self) {
        info!("Scene controller running on {}", self.state.platform().as_str());
        loop {
            match self.events.recv().await {
                Ok(event) => {
                    self.handle_event(&event).await;
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!("Missed {} library events, resynchronising", missed);
                    self.resync().await;
                    self.publish().await;
                }
                Err(RecvError::Closed) => break,
            }
        }
        info!("Event bus closed, scene controller stopped");
    }

    /// Wait for dispatched library actions to finish
    pub async fn settle(&mut self) {
        for handle in self.dispatched.drain(..) {
            if let Err(e) = handle.await {
                warn!("Library action task failed: {}", e);
            }
        }
    }

    /// Resolve the current detail and hand it to `renderer`
    pub async fn present(&self, renderer: &mut dyn RenderStrategy) {
        let detail = self.state.detail();
        let content = {
            let library = self.library.read().await;
            resolve(detail, &library, self.state.sort())
        };
        renderer.render(&metadata(detail), &content);
    }

    async fn resync(&mut self) -> ReconcileOutcome {
        let library = self.library.read().await;
        self.state.reconcile_snapshot(&library)
    }

    async fn toggle_watched(&mut self) {
        let Some(key) = self.state.detail().media_key() else {
            debug!("{} has no watched state", self.state.detail());
            return;
        };
        let watched = match self.library.read().await.lookup(key) {
            Some(item) => item.is_watched(),
            None => {
                warn!("{:?} is not in the library, ignoring toggle", key);
                return;
            }
        };

        let actions = self.actions.clone();
        self.dispatch("set_watched", async move {
            actions.set_watched(key, !watched).await
        });
    }

    fn set_sort(&mut self, sort: SortSettings) {
        let list = self.state.primary().kind().as_str();
        self.state.set_sort(sort);
        if let Err(e) = store_settings(self.settings.as_ref(), &sort_key(list), &sort) {
            warn!("Failed to store sort for {}: {}", list, e);
        }

        let actions = self.actions.clone();
        self.dispatch("sort_changed", async move {
            actions.sort_changed(list, sort).await
        });
    }

    fn load_sort(&self, list: &str) -> SortSettings {
        match load_settings(self.settings.as_ref(), &sort_key(list)) {
            Ok(Some(sort)) => sort,
            Ok(None) => SortSettings::default_for(list),
            Err(e) => {
                warn!("Failed to load sort for {}, using defaults: {}", list, e);
                SortSettings::default_for(list)
            }
        }
    }

    /// Spawn a library action; failures are logged, never returned
    fn dispatch<F>(&mut self, name: &'static str, action: F)
    where
        F: std::future::Future<Output = crate::utils::AppResult<()>> + Send + 'static,
    {
        self.dispatched.retain(|handle| !handle.is_finished());
        self.dispatched.push(tokio::spawn(async move {
            if let Err(e) = action.await {
                warn!("Library action {} failed: {}", name, e);
            }
        }));
    }

    async fn publish(&self) {
        let next = SceneSnapshot::of(&self.state);
        if self.snapshot.get_sync() != next {
            self.snapshot.set(next).await;
        }
    }
}

use crate::common::fixtures::Fixtures;
use crate::common::mocks::{ActionCall, MockActions};
use komodio::cache::{JsonFileCache, SettingsCache, load_settings};
use komodio::events::{EventBus, EventType};
use komodio::library::{MemoryLibrary, new_handle};
use komodio::models::*;
use komodio::router::Route;
use komodio::scene::{NavigationCommand, Platform, SceneController, sort_key};
use komodio::sorting::{SortMethod, SortOrder, SortSettings};
use std::sync::Arc;
use tempfile::TempDir;

fn controller_with(
    actions: MockActions,
    cache: Arc<dyn SettingsCache>,
    bus: &EventBus,
) -> SceneController {
    SceneController::new(
        Platform::MacOs,
        new_handle(Fixtures::library()),
        Arc::new(actions),
        cache,
        bus,
    )
}

#[tokio::test]
async fn test_actions_are_dispatched() {
    let bus = EventBus::new(16);
    let actions = MockActions::new();
    let dir = TempDir::new().unwrap();
    let cache = Arc::new(JsonFileCache::new(dir.path()).unwrap());
    let mut controller = controller_with(actions.clone(), cache.clone(), &bus);
    let by_rating = SortSettings::new(SortMethod::Rating, SortOrder::Descending);

    controller
        .apply(NavigationCommand::SelectPrimary(Route::Movies))
        .await;
    controller
        .apply(NavigationCommand::Push(Route::Movie(Fixtures::movies()[0].clone())))
        .await;
    controller.apply(NavigationCommand::ToggleWatched).await;
    controller.apply(NavigationCommand::ReloadLibrary).await;
    controller.apply(NavigationCommand::SetSort(by_rating)).await;
    controller.settle().await;

    let calls = actions.calls();
    assert_eq!(calls.len(), 3);
    // The Matrix is watched in the fixtures, so the toggle clears it
    assert!(calls.contains(&ActionCall::SetWatched(
        MediaKey::Movie(MovieId::new(1)),
        false
    )));
    assert!(calls.contains(&ActionCall::Reload));
    assert!(calls.contains(&ActionCall::SortChanged("movies".to_string(), by_rating)));

    let stored: Option<SortSettings> = load_settings(cache.as_ref(), &sort_key("movies")).unwrap();
    assert_eq!(stored, Some(by_rating));
}

#[tokio::test]
async fn test_failing_actions_leave_scene_usable() {
    let bus = EventBus::new(16);
    let actions = MockActions::new();
    actions.set_error_mode(Some("host unreachable".to_string()));
    let mut controller = controller_with(
        actions.clone(),
        Arc::new(komodio::cache::MemoryCache::new()),
        &bus,
    );

    controller
        .apply(NavigationCommand::SelectPrimary(Route::MovieSets))
        .await;
    controller.apply(NavigationCommand::ReloadLibrary).await;
    controller.settle().await;

    assert_eq!(actions.calls(), vec![ActionCall::Reload]);
    assert_eq!(controller.state().detail(), &Route::MovieSets);
}

#[tokio::test]
async fn test_toggle_without_entity_dispatches_nothing() {
    let bus = EventBus::new(16);
    let actions = MockActions::new();
    let mut controller =
        controller_with(actions.clone(), Arc::new(komodio::cache::MemoryCache::new()), &bus);

    controller
        .apply(NavigationCommand::SelectPrimary(Route::Genres))
        .await;
    controller.apply(NavigationCommand::ToggleWatched).await;
    controller.settle().await;

    assert!(actions.calls().is_empty());
}

#[tokio::test]
async fn test_sort_survives_restart_through_file_cache() {
    let dir = TempDir::new().unwrap();
    let by_year = SortSettings::new(SortMethod::Year, SortOrder::Ascending);

    {
        let bus = EventBus::new(16);
        let cache = Arc::new(JsonFileCache::new(dir.path()).unwrap());
        let mut controller = controller_with(MockActions::new(), cache, &bus);
        controller
            .apply(NavigationCommand::SelectPrimary(Route::TvShows))
            .await;
        controller.apply(NavigationCommand::SetSort(by_year)).await;
        controller.settle().await;
    }

    let bus = EventBus::new(16);
    let cache = Arc::new(JsonFileCache::new(dir.path()).unwrap());
    let mut controller = controller_with(MockActions::new(), cache, &bus);
    controller
        .apply(NavigationCommand::SelectPrimary(Route::TvShows))
        .await;
    assert_eq!(controller.state().sort(), by_year);
}

#[tokio::test]
async fn test_reload_resynchronises_detail() {
    let bus = Arc::new(EventBus::new(16));
    let library = MemoryLibrary::new(Fixtures::library(), bus.clone());
    let mut controller = SceneController::new(
        Platform::MacOs,
        library.handle(),
        Arc::new(library.clone()),
        Arc::new(komodio::cache::MemoryCache::new()),
        &bus,
    );

    controller
        .apply(NavigationCommand::SelectPrimary(Route::Movies))
        .await;
    let mut renamed = Fixtures::movies()[3].clone();
    controller
        .apply(NavigationCommand::Push(Route::Movie(renamed.clone())))
        .await;

    // Edit the snapshot behind the scene's back, then reload restores it
    renamed.title = "Pulp Fiction (Remastered)".to_string();
    library.update(MediaItem::Movie(renamed)).await.unwrap();
    controller.pump_events().await;
    match controller.state().detail() {
        Route::Movie(movie) => assert_eq!(movie.title, "Pulp Fiction (Remastered)"),
        other => panic!("unexpected detail {}", other),
    }

    controller.apply(NavigationCommand::ReloadLibrary).await;
    controller.settle().await;
    controller.pump_events().await;

    match controller.state().detail() {
        Route::Movie(movie) => assert_eq!(movie.title, "Pulp Fiction"),
        other => panic!("unexpected detail {}", other),
    }
    let history = bus.get_history().await;
    assert_eq!(history.last().unwrap().event_type, EventType::LibraryReloaded);
}

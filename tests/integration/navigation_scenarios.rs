use crate::common::TestContext;
use crate::common::fixtures::Fixtures;
use komodio::detail::{DetailContent, RecordingRenderer, RenderStrategy};
use komodio::models::*;
use komodio::router::Route;
use komodio::scene::{NavigationCommand, Platform, ReconcileOutcome, SceneEffect};

fn season_route(library: &komodio::library::LibrarySnapshot, show: i64, season: u32) -> Route {
    Route::Season(
        library
            .season_episodes(TvShowId::new(show), season)
            .expect("season exists"),
    )
}

#[tokio::test]
async fn test_browse_and_drill_down() {
    let mut ctx = TestContext::new(Platform::MacOs);
    let library = Fixtures::library();
    let show = library.tvshows[0].clone();
    let season = season_route(&library, 1, 1);
    let episode = library.episodes[1].clone();

    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::TvShows))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::TvShow(show.clone())))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(season.clone()))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::Episode(episode.clone())))
        .await;

    let state = ctx.controller.state();
    assert_eq!(state.primary(), &Route::TvShows);
    assert_eq!(
        state.stack(),
        &[Route::TvShow(show), season.clone(), Route::Episode(episode)]
    );

    ctx.controller.apply(NavigationCommand::Pop).await;
    assert_eq!(ctx.controller.state().detail(), &season);

    let mut renderer = RecordingRenderer::new(Platform::MacOs);
    ctx.controller.present(&mut renderer).await;
    let frame = renderer.last_frame().unwrap();
    assert!(frame.contains("Breaking Bad Season 1"));
    assert!(frame.contains("[x] 1. Pilot"));
    assert!(frame.contains("[ ] 2. Cat's in the Bag"));
}

#[tokio::test]
async fn test_settings_peek() {
    let mut ctx = TestContext::new(Platform::MacOs);
    let details = Route::KodiSettingsDetails(
        SettingSection {
            id: "system".to_string(),
            label: "System".to_string(),
        },
        SettingCategory {
            id: "audio".to_string(),
            label: "Audio".to_string(),
            help: "Audio output".to_string(),
        },
    );

    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::KodiSettings))
        .await;
    ctx.controller
        .apply(NavigationCommand::OverrideDetail(details.clone()))
        .await;

    let state = ctx.controller.state();
    assert!(state.stack().is_empty());
    assert_eq!(state.detail(), &details);
    assert!(state.is_detail_overridden());

    let mut renderer = RecordingRenderer::default();
    ctx.controller.present(&mut renderer).await;
    assert!(renderer.last_frame().unwrap().contains("System / Audio"));

    // Back closes the peek
    ctx.controller.apply(NavigationCommand::Pop).await;
    assert_eq!(ctx.controller.state().detail(), &Route::KodiSettings);
}

#[tokio::test]
async fn test_stale_detail_on_deletion() {
    let mut ctx = TestContext::new(Platform::MacOs);
    let inception = Fixtures::movies()[2].clone();

    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::Movies))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::Movie(inception)))
        .await;

    ctx.library
        .delete(MediaKey::Movie(MovieId::new(3)))
        .await
        .unwrap();
    ctx.sync().await;

    let state = ctx.controller.state();
    assert_eq!(state.detail(), &Route::Movies);
    // The stack is left alone
    assert_eq!(state.stack().len(), 1);

    let mut renderer = RecordingRenderer::default();
    ctx.controller.present(&mut renderer).await;
    let frame = renderer.last_frame().unwrap();
    assert!(!frame.contains("Inception"));
    assert!(frame.contains("The Matrix Collection"));
}

#[tokio::test]
async fn test_cancellation_after_primary_switch() {
    let mut ctx = TestContext::new(Platform::MacOs);
    let inception = Fixtures::movies()[2].clone();

    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::Movies))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::Movie(inception)))
        .await;
    ctx.controller.apply(NavigationCommand::ToggleWatched).await;
    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::Genres))
        .await;

    ctx.controller.settle().await;
    let outcomes = ctx.controller.pump_events().await;

    assert!(outcomes.iter().all(|o| *o == ReconcileOutcome::Ignored));
    assert_eq!(ctx.controller.state().detail(), &Route::Genres);
    // The action itself still went through
    let handle = ctx.library.handle();
    let snapshot = handle.read().await;
    assert_eq!(snapshot.movies[2].playcount, 1);
}

#[tokio::test]
async fn test_season_refresh_on_episode_update() {
    let mut ctx = TestContext::new(Platform::MacOs);
    let library = Fixtures::library();
    let season = season_route(&library, 1, 1);

    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::TvShows))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::TvShow(library.tvshows[0].clone())))
        .await;
    ctx.controller.apply(NavigationCommand::Push(season)).await;

    let mut episode = library.episodes[1].clone();
    episode.playcount = 2;
    ctx.library
        .update(MediaItem::Episode(episode))
        .await
        .unwrap();
    let outcomes = ctx.controller.pump_events().await;

    assert_eq!(outcomes, vec![ReconcileOutcome::Refreshed]);
    match ctx.controller.state().detail() {
        Route::Season(season) => assert_eq!(season.episodes[1].playcount, 2),
        other => panic!("unexpected detail {}", other),
    }
}

#[tokio::test]
async fn test_pop_refreshes_stale_stack_entry() {
    let mut ctx = TestContext::new(Platform::MacOs);
    let library = Fixtures::library();
    let season = season_route(&library, 1, 1);
    let episode = library.episodes[1].clone();

    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::TvShows))
        .await;
    ctx.controller.apply(NavigationCommand::Push(season)).await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::Episode(episode)))
        .await;
    ctx.controller.apply(NavigationCommand::ToggleWatched).await;
    ctx.sync().await;

    ctx.controller.apply(NavigationCommand::Pop).await;
    match ctx.controller.state().detail() {
        Route::Season(season) => assert!(season.episodes.iter().all(|e| e.playcount > 0)),
        other => panic!("unexpected detail {}", other),
    }
    // The stack entry itself keeps its original payload
    match &ctx.controller.state().stack()[0] {
        Route::Season(season) => assert_eq!(season.episodes[1].playcount, 0),
        other => panic!("unexpected stack entry {}", other),
    }
}

#[tokio::test]
async fn test_offline_library_shows_loading_status() {
    let mut library = Fixtures::library();
    library.status = LibraryStatus::Connecting;
    let mut ctx = TestContext::with_library(Platform::TvOs, library);
    let mut renderer = RecordingRenderer::new(Platform::TvOs);

    let effects = ctx
        .controller
        .apply(NavigationCommand::SelectPrimary(Route::Movies))
        .await;
    for effect in &effects {
        renderer.apply_effect(effect);
    }
    ctx.controller.present(&mut renderer).await;

    assert_eq!(renderer.effects(), &[SceneEffect::CollapseSidebar]);
    let frame = renderer.last_frame().unwrap();
    assert!(frame.contains(&komodio::metadata(&Route::Movies).loading_message));

    ctx.library.set_status(LibraryStatus::Loaded).await.unwrap();
    ctx.sync().await;
    let content = {
        let handle = ctx.library.handle();
        let snapshot = handle.read().await;
        komodio::detail::resolve(&Route::Movies, &snapshot, ctx.controller.state().sort())
    };
    assert!(matches!(content, DetailContent::List(_)));
}

#[tokio::test]
async fn test_deletion_skips_ancestor_removed_earlier() {
    let mut ctx = TestContext::new(Platform::MacOs);
    let library = Fixtures::library();

    ctx.controller
        .apply(NavigationCommand::SelectPrimary(Route::TvShows))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::TvShow(library.tvshows[0].clone())))
        .await;
    ctx.controller
        .apply(NavigationCommand::Push(Route::Episode(library.episodes[0].clone())))
        .await;

    ctx.library
        .delete(MediaKey::TvShow(TvShowId::new(1)))
        .await
        .unwrap();
    ctx.library
        .delete(MediaKey::Episode(EpisodeId::new(101)))
        .await
        .unwrap();
    let outcomes = ctx.controller.pump_events().await;

    assert_eq!(
        outcomes,
        vec![ReconcileOutcome::Ignored, ReconcileOutcome::FellBack]
    );
    assert_eq!(ctx.controller.state().detail(), &Route::TvShows);
    assert_eq!(ctx.controller.state().stack().len(), 2);
}

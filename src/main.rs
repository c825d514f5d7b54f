use anyhow::{Context, Result, anyhow, bail};
use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use komodio::cache;
use komodio::config::Config;
use komodio::detail::{RecordingRenderer, RenderStrategy};
use komodio::events::EventBus;
use komodio::library::{LibrarySnapshot, MemoryLibrary};
use komodio::models::{
    ArtistId, EpisodeId, LibraryStatus, MediaKey, MovieId, MovieSetId, MusicVideoId, TvShowId,
};
use komodio::router::{Route, RouteKind};
use komodio::scene::{CollectionStyle, NavigationCommand, SceneController};
use komodio::sorting::{SortMethod, SortOrder, SortSettings};

/// One line of driver input
#[derive(Debug, Clone, PartialEq)]
enum DriverCommand {
    Navigate(NavigationCommand),
    /// Simulate an upstream deletion
    Delete(MediaKey),
    Show,
    Quit,
}

fn parse_arg<T>(arg: Option<&str>, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.ok_or_else(|| anyhow!("missing {}", what))?;
    arg.parse().with_context(|| format!("invalid {} '{}'", what, arg))
}

fn parse_id(arg: Option<&str>) -> Result<i64> {
    parse_arg(arg, "id")
}

fn media_key(kind: RouteKind, id: i64) -> Result<MediaKey> {
    Ok(match kind {
        RouteKind::Movie => MediaKey::Movie(MovieId::new(id)),
        RouteKind::MovieSet => MediaKey::MovieSet(MovieSetId::new(id)),
        RouteKind::TvShow => MediaKey::TvShow(TvShowId::new(id)),
        RouteKind::Episode => MediaKey::Episode(EpisodeId::new(id)),
        RouteKind::MusicVideoArtist => MediaKey::Artist(ArtistId::new(id)),
        RouteKind::MusicVideo => MediaKey::MusicVideo(MusicVideoId::new(id)),
        other => bail!("{} is not a library item", other),
    })
}

/// Build the route named by `args` from the library content
fn route_from_args(args: &[&str], library: &LibrarySnapshot) -> Result<Route> {
    let (name, rest) = args.split_first().ok_or_else(|| anyhow!("missing route"))?;
    let kind: RouteKind = name.parse().map_err(|e: String| anyhow!(e))?;
    if let Some(route) = Route::from_static(kind) {
        return Ok(route);
    }

    match kind {
        RouteKind::Season => {
            let tvshow_id = TvShowId::new(parse_id(rest.first().copied())?);
            let season: u32 = parse_arg(rest.get(1).copied(), "season number")?;
            library
                .season_episodes(tvshow_id, season)
                .map(Route::Season)
                .ok_or_else(|| anyhow!("season {} of show {} is empty", season, tvshow_id))
        }
        RouteKind::GenreItems => {
            let label = rest.join(" ");
            library
                .genres
                .iter()
                .find(|g| g.label.eq_ignore_ascii_case(&label))
                .map(|g| Route::GenreItems(g.clone()))
                .ok_or_else(|| anyhow!("unknown genre '{}'", label))
        }
        _ => {
            let key = media_key(kind, parse_id(rest.first().copied())?)?;
            library
                .lookup(key)
                .map(|item| Route::for_item(&item))
                .ok_or_else(|| anyhow!("{:?} is not in the library", key))
        }
    }
}

fn parse_sort(args: &[&str]) -> Result<SortSettings> {
    let name = args.first().ok_or_else(|| anyhow!("missing sort method"))?;
    let method = SortMethod::ALL
        .into_iter()
        .find(|m| m.label().to_lowercase().replace(' ', "_") == *name)
        .ok_or_else(|| anyhow!("unknown sort method '{}'", name))?;
    let order = match args.get(1).copied() {
        None | Some("asc") => SortOrder::Ascending,
        Some("desc") => SortOrder::Descending,
        Some(other) => bail!("unknown sort order '{}'", other),
    };
    Ok(SortSettings::new(method, order))
}

fn parse_command(line: &str, library: &LibrarySnapshot) -> Result<DriverCommand> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((command, args)) = words.split_first() else {
        return Ok(DriverCommand::Show);
    };

    let navigate = DriverCommand::Navigate;
    Ok(match *command {
        "select" => navigate(NavigationCommand::SelectPrimary(route_from_args(args, library)?)),
        "push" => navigate(NavigationCommand::Push(route_from_args(args, library)?)),
        "peek" => navigate(NavigationCommand::OverrideDetail(route_from_args(args, library)?)),
        "pop" | "back" => navigate(NavigationCommand::Pop),
        "watched" => navigate(NavigationCommand::ToggleWatched),
        "reload" => navigate(NavigationCommand::ReloadLibrary),
        "sort" => navigate(NavigationCommand::SetSort(parse_sort(args)?)),
        "style" => navigate(NavigationCommand::SetCollectionStyle(match args.first().copied() {
            Some("grid") => CollectionStyle::Grid,
            Some("list") => CollectionStyle::List,
            Some("plain") => CollectionStyle::Plain,
            _ => bail!("style must be grid, list or plain"),
        })),
        "delete" => {
            let (name, rest) = args.split_first().ok_or_else(|| anyhow!("missing item"))?;
            let kind: RouteKind = name.parse().map_err(|e: String| anyhow!(e))?;
            DriverCommand::Delete(media_key(kind, parse_id(rest.first().copied())?)?)
        }
        "show" => DriverCommand::Show,
        "quit" | "exit" => DriverCommand::Quit,
        other => bail!("unknown command '{}'", other),
    })
}

fn load_library(path: Option<PathBuf>, event_bus: Arc<EventBus>) -> Result<MemoryLibrary> {
    match path {
        Some(path) => MemoryLibrary::from_json_file(&path, event_bus)
            .with_context(|| format!("Failed to load library from {:?}", path)),
        None => {
            info!("No library given, starting with an empty one");
            let mut snapshot = LibrarySnapshot::new();
            snapshot.status = LibraryStatus::Loaded;
            Ok(MemoryLibrary::new(snapshot, event_bus))
        }
    }
}

async fn drive(config: Config, library_path: Option<PathBuf>) -> Result<()> {
    let event_bus = Arc::new(EventBus::new(config.library.event_capacity));
    let library = load_library(library_path, event_bus.clone())?;
    let settings = cache::open(&config.library.settings_cache)
        .context("Failed to open settings cache")?;

    let mut controller = SceneController::new(
        config.scene.platform,
        library.handle(),
        Arc::new(library.clone()),
        settings,
        &event_bus,
    );
    let mut renderer = RecordingRenderer::new(config.scene.platform);

    let start: RouteKind = config
        .scene
        .start_route
        .parse()
        .map_err(|e: String| anyhow!(e))
        .context("Invalid start route in config")?;
    if let Some(route) = Route::from_static(start) {
        controller
            .apply(NavigationCommand::SelectPrimary(route))
            .await;
    }
    controller
        .apply(NavigationCommand::SetCollectionStyle(config.scene.collection_style))
        .await;
    controller.present(&mut renderer).await;
    print_frames(&mut renderer);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        let command = {
            let snapshot = library.handle();
            let snapshot = snapshot.read().await;
            parse_command(&line, &snapshot)
        };

        match command {
            Ok(DriverCommand::Quit) => break,
            Ok(DriverCommand::Show) => {}
            Ok(DriverCommand::Navigate(command)) => {
                for effect in controller.apply(command).await {
                    renderer.apply_effect(&effect);
                    println!("~ {:?}", effect);
                }
            }
            Ok(DriverCommand::Delete(key)) => {
                if let Err(e) = library.delete(key).await {
                    warn!("Delete failed: {}", e);
                }
            }
            Err(e) => {
                println!("! {:#}", e);
                continue;
            }
        }

        controller.settle().await;
        let outcomes = controller.pump_events().await;
        debug!("Reconcile outcomes: {:?}", outcomes);
        controller.present(&mut renderer).await;
        print_frames(&mut renderer);
    }

    info!("Driver finished");
    Ok(())
}

fn print_frames(renderer: &mut RecordingRenderer) {
    for frame in renderer.drain_frames() {
        print!("{}", frame);
    }
}

fn main() -> Result<()> {
    let config = Config::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Komodio navigation driver");

    let library_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.library.snapshot_path.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(drive(config, library_path))
}

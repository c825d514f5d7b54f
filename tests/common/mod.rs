pub mod builders;
pub mod fixtures;

use komodio::cache::MemoryCache;
use komodio::events::EventBus;
use komodio::library::{LibrarySnapshot, MemoryLibrary};
use komodio::scene::{Platform, SceneController};
use std::sync::Arc;

pub struct TestContext {
    pub bus: Arc<EventBus>,
    pub library: MemoryLibrary,
    pub controller: SceneController,
}

impl TestContext {
    pub fn new(platform: Platform) -> Self {
        Self::with_library(platform, fixtures::Fixtures::library())
    }

    pub fn with_library(platform: Platform, snapshot: LibrarySnapshot) -> Self {
        let bus = Arc::new(EventBus::new(64));
        let library = MemoryLibrary::new(snapshot, bus.clone());
        let controller = SceneController::new(
            platform,
            library.handle(),
            Arc::new(library.clone()),
            Arc::new(MemoryCache::new()),
            &bus,
        );
        Self {
            bus,
            library,
            controller,
        }
    }

    /// Wait for dispatched actions and apply the notifications they caused
    pub async fn sync(&mut self) {
        self.controller.settle().await;
        self.controller.pump_events().await;
    }
}

// Navigation core shared by every platform front-end.
// The headless driver in src/main.rs exercises it from a terminal.

pub mod cache;
pub mod config;
pub mod core;
pub mod detail;
pub mod events;
pub mod library;
pub mod models;
pub mod router;
pub mod scene;
pub mod sorting;
pub mod utils;

pub use router::{Route, RouteKind, RouteMetadata, metadata};
pub use scene::{NavigationCommand, SceneController, SceneState};

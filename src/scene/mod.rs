pub mod controller;
pub mod state;

pub use controller::{NavigationCommand, SceneController, SceneSnapshot, sort_key};
pub use state::{CollectionStyle, Platform, ReconcileOutcome, SceneEffect, SceneState};

pub mod metadata;
pub mod route;

pub use metadata::{AccentColor, RouteMetadata, metadata};
pub use route::{ArtistAlbum, Route, RouteKey, RouteKind, SeasonEpisodes};

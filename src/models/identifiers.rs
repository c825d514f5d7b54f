use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Kodi library ids are plain integers scoped to their collection, so a
/// movie and an episode can share the same number. Each collection gets its
/// own newtype to keep them apart at compile time.
macro_rules! impl_kodi_id {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

impl_kodi_id!(MovieId);
impl_kodi_id!(MovieSetId);
impl_kodi_id!(TvShowId);
impl_kodi_id!(EpisodeId);
impl_kodi_id!(ArtistId);
impl_kodi_id!(MusicVideoId);
impl_kodi_id!(GenreId);

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::MediaItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMethod {
    #[default]
    Title,
    Year,
    DateAdded,
    Rating,
    PlayCount,
    LastPlayed,
    Duration,
    /// Season and episode number, for episode lists
    Episode,
}

impl SortMethod {
    pub const ALL: [SortMethod; 8] = [
        SortMethod::Title,
        SortMethod::Year,
        SortMethod::DateAdded,
        SortMethod::Rating,
        SortMethod::PlayCount,
        SortMethod::LastPlayed,
        SortMethod::Duration,
        SortMethod::Episode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortMethod::Title => "Title",
            SortMethod::Year => "Year",
            SortMethod::DateAdded => "Date added",
            SortMethod::Rating => "Rating",
            SortMethod::PlayCount => "Play count",
            SortMethod::LastPlayed => "Last played",
            SortMethod::Duration => "Duration",
            SortMethod::Episode => "Episode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort preference for one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortSettings {
    pub method: SortMethod,
    pub order: SortOrder,
}

impl SortSettings {
    pub fn new(method: SortMethod, order: SortOrder) -> Self {
        Self { method, order }
    }

    /// Default sorting for a list identifier
    pub fn default_for(list: &str) -> Self {
        match list {
            "recently_added" => Self::new(SortMethod::DateAdded, SortOrder::Descending),
            "recently_played" => Self::new(SortMethod::LastPlayed, SortOrder::Descending),
            "season" | "unwatched_episodes" => {
                Self::new(SortMethod::Episode, SortOrder::Ascending)
            }
            "music_videos" => Self::new(SortMethod::Year, SortOrder::Ascending),
            _ => Self::default(),
        }
    }
}

/// Sort `items` in place. The primary key follows `settings`; ties are
/// broken by sort title and then id so the result is stable across reloads.
pub fn sort_items(items: &mut [MediaItem], settings: SortSettings) {
    items.sort_by(|a, b| compare(a, b, settings));
}

pub fn compare(a: &MediaItem, b: &MediaItem, settings: SortSettings) -> Ordering {
    let primary = primary_key(a, b, settings.method);
    let primary = match settings.order {
        SortOrder::Ascending => primary,
        SortOrder::Descending => primary.reverse(),
    };
    primary
        .then_with(|| a.sort_title().cmp(&b.sort_title()))
        .then_with(|| item_id(a).cmp(&item_id(b)))
}

fn primary_key(a: &MediaItem, b: &MediaItem, method: SortMethod) -> Ordering {
    match method {
        SortMethod::Title => a.sort_title().cmp(&b.sort_title()),
        SortMethod::Year => a.year().cmp(&b.year()),
        SortMethod::DateAdded => a.date_added().cmp(&b.date_added()),
        SortMethod::Rating => a
            .rating()
            .unwrap_or(0.0)
            .total_cmp(&b.rating().unwrap_or(0.0)),
        SortMethod::PlayCount => a.playcount().cmp(&b.playcount()),
        SortMethod::LastPlayed => a.last_played().cmp(&b.last_played()),
        SortMethod::Duration => a.runtime().cmp(&b.runtime()),
        SortMethod::Episode => episode_number(a).cmp(&episode_number(b)),
    }
}

/// Season/episode position, specials after the regular seasons
fn episode_number(item: &MediaItem) -> Option<(bool, u32, u32)> {
    match item {
        MediaItem::Episode(e) => Some((e.season == 0, e.season, e.episode)),
        _ => None,
    }
}

fn item_id(item: &MediaItem) -> i64 {
    match item {
        MediaItem::Movie(m) => m.id.get(),
        MediaItem::MovieSet(s) => s.id.get(),
        MediaItem::TvShow(s) => s.id.get(),
        MediaItem::Episode(e) => e.id.get(),
        MediaItem::Artist(a) => a.id.get(),
        MediaItem::MusicVideo(v) => v.id.get(),
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::list_sort::SortMethod;
use crate::models::{MediaItem, MovieSet, MovieSetId};

/// Section of a sorted list, e.g. all titles starting with "B"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub label: String,
    pub items: Vec<MediaItem>,
}

/// Split an already sorted list into consecutive groups for the given method.
///
/// Grouping is by adjacency, so the list order is preserved exactly; a label
/// only appears twice if the input was not sorted by `method`.
pub fn group_items(items: &[MediaItem], method: SortMethod) -> Vec<ItemGroup> {
    let mut groups: Vec<ItemGroup> = Vec::new();
    for item in items {
        let label = group_label(item, method);
        match groups.last_mut() {
            Some(group) if group.label == label => group.items.push(item.clone()),
            _ => groups.push(ItemGroup {
                label,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

fn group_label(item: &MediaItem, method: SortMethod) -> String {
    match method {
        SortMethod::Title => first_letter(&item.sort_title()),
        SortMethod::Year => item
            .year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        SortMethod::DateAdded => item
            .date_added()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        SortMethod::Rating => match item.rating() {
            Some(rating) => format!("Rated {}", rating.floor().clamp(0.0, 10.0) as u8),
            None => "Not rated".to_string(),
        },
        SortMethod::PlayCount | SortMethod::LastPlayed => {
            if item.is_watched() {
                "Watched".to_string()
            } else {
                "Unwatched".to_string()
            }
        }
        SortMethod::Duration => match item.runtime() {
            Some(runtime) if runtime.as_secs() >= 2 * 3600 => "Over two hours".to_string(),
            Some(runtime) if runtime.as_secs() >= 3600 => "One to two hours".to_string(),
            Some(_) => "Under an hour".to_string(),
            None => "Unknown".to_string(),
        },
        SortMethod::Episode => match item {
            MediaItem::Episode(e) if e.season == 0 => "Specials".to_string(),
            MediaItem::Episode(e) => format!("Season {}", e.season),
            _ => "Other".to_string(),
        },
    }
}

fn first_letter(sort_title: &str) -> String {
    match sort_title.chars().next() {
        Some(c) if c.is_alphabetic() => c.to_uppercase().collect(),
        _ => "#".to_string(),
    }
}

/// Replace movies that belong to a set by the set itself.
///
/// Only sets with at least two movies in `movies` are collapsed; the set takes
/// the position of its first member. Movies of unknown sets stay as they are.
pub fn swap_movies_for_set(movies: &[MediaItem], sets: &[MovieSet]) -> Vec<MediaItem> {
    let mut members: HashMap<MovieSetId, usize> = HashMap::new();
    for item in movies {
        if let MediaItem::Movie(movie) = item
            && let Some(set_id) = movie.set_id
        {
            *members.entry(set_id).or_insert(0) += 1;
        }
    }

    let mut placed: Vec<MovieSetId> = Vec::new();
    let mut result = Vec::with_capacity(movies.len());
    for item in movies {
        let collapsible = match item {
            MediaItem::Movie(movie) => movie.set_id.and_then(|set_id| {
                let set = sets.iter().find(|s| s.id == set_id)?;
                (members.get(&set_id).copied().unwrap_or(0) >= 2).then_some(set)
            }),
            _ => None,
        };

        match collapsible {
            Some(set) if placed.contains(&set.id) => {}
            Some(set) => {
                placed.push(set.id);
                result.push(MediaItem::MovieSet(set.clone()));
            }
            None => result.push(item.clone()),
        }
    }
    result
}

use std::fmt::Write as _;

use super::resolver::{DetailContent, ItemList, SettingsPanel};
use crate::router::RouteMetadata;
use crate::scene::{Platform, SceneEffect};

/// Platform-specific drawing of the detail column. The navigation core only
/// talks to this trait.
pub trait RenderStrategy: Send {
    fn platform(&self) -> Platform;

    fn render(&mut self, metadata: &RouteMetadata, content: &DetailContent);

    fn apply_effect(&mut self, effect: &SceneEffect);
}

/// Renders frames as plain text and keeps them for inspection
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    platform: Platform,
    frames: Vec<String>,
    effects: Vec<SceneEffect>,
}

impl RecordingRenderer {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Default::default()
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn effects(&self) -> &[SceneEffect] {
        &self.effects
    }

    /// Hand out everything recorded since the last call
    pub fn drain_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }
}

impl RenderStrategy for RecordingRenderer {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn render(&mut self, metadata: &RouteMetadata, content: &DetailContent) {
        let mut frame = format!("[{}] {}\n", metadata.icon, metadata.title);
        write_content(&mut frame, metadata, content);
        self.frames.push(frame);
    }

    fn apply_effect(&mut self, effect: &SceneEffect) {
        self.effects.push(*effect);
    }
}

fn write_list(frame: &mut String, list: &ItemList, empty_message: &str) {
    if list.is_empty() {
        let _ = writeln!(frame, "  {}", empty_message);
        return;
    }
    for group in &list.groups {
        let _ = writeln!(frame, "  {}", group.label);
        for item in &group.items {
            let _ = writeln!(frame, "    {}", item.title());
        }
    }
}

fn write_content(frame: &mut String, metadata: &RouteMetadata, content: &DetailContent) {
    match content {
        DetailContent::Home {
            up_next,
            recently_added,
        } => {
            let _ = writeln!(frame, "  Up next: {}", up_next.len());
            for item in up_next {
                let _ = writeln!(frame, "    {}", item.title());
            }
            let _ = writeln!(frame, "  Recently added: {}", recently_added.len());
            for item in recently_added {
                let _ = writeln!(frame, "    {}", item.title());
            }
        }
        DetailContent::List(list) => write_list(frame, list, &metadata.empty_message),
        DetailContent::Collection { parent, children } => {
            let _ = writeln!(frame, "  {}", parent.title());
            write_list(frame, children, &metadata.empty_message);
        }
        DetailContent::Item(item) => {
            let _ = writeln!(frame, "  {}", item.title());
            if let Some(year) = item.year() {
                let _ = writeln!(frame, "  Year: {}", year);
            }
            let state = if item.is_watched() { "watched" } else { "unwatched" };
            let _ = writeln!(frame, "  {}", state);
        }
        DetailContent::Season(season) => {
            let _ = writeln!(frame, "  {} {}", season.show_title, season.label());
            for episode in &season.episodes {
                let mark = if episode.playcount > 0 { "x" } else { " " };
                let _ = writeln!(frame, "    [{}] {}. {}", mark, episode.episode, episode.title);
            }
        }
        DetailContent::Album(album) => {
            let _ = writeln!(frame, "  {} - {}", album.artist.name, album.album);
            for video in &album.music_videos {
                let _ = writeln!(frame, "    {}", video.title);
            }
        }
        DetailContent::Playlists(playlists) if playlists.is_empty() => {
            let _ = writeln!(frame, "  {}", metadata.empty_message);
        }
        DetailContent::Playlists(playlists) => {
            for playlist in playlists {
                let _ = writeln!(frame, "  {}", playlist.label);
            }
        }
        DetailContent::Playlist(playlist) => {
            let _ = writeln!(frame, "  {}", playlist.file);
        }
        DetailContent::Genres(genres) => {
            for genre in genres {
                let _ = writeln!(frame, "  {} ({})", genre.label, genre.kind.as_str());
            }
        }
        DetailContent::Search => {
            let _ = writeln!(frame, "  {}", metadata.description);
        }
        DetailContent::Settings(panel) => match panel {
            SettingsPanel::Kodi | SettingsPanel::App => {
                let _ = writeln!(frame, "  {}", metadata.description);
            }
            SettingsPanel::KodiCategory(section, category) => {
                let _ = writeln!(frame, "  {} / {}", section.label, category.label);
            }
            SettingsPanel::Host(host) => {
                let _ = writeln!(frame, "  {} at {}", host.name, host.http_url());
            }
        },
        DetailContent::Status { message, .. } => {
            let _ = writeln!(frame, "  {}", message);
        }
        DetailContent::Fallback { description, .. } => {
            let _ = writeln!(frame, "  {}", description);
        }
    }
}

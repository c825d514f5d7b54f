use chrono::{DateTime, TimeZone, Utc};
use komodio::models::*;
use std::time::Duration;

pub struct MovieBuilder {
    id: i64,
    title: String,
    year: Option<u32>,
    rating: Option<f32>,
    playcount: u32,
    date_added: Option<DateTime<Utc>>,
    runtime: Duration,
    set: Option<(i64, String)>,
    genres: Vec<String>,
}

impl MovieBuilder {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            year: Some(2024),
            rating: Some(7.5),
            playcount: 0,
            date_added: None,
            runtime: Duration::from_secs(120 * 60),
            set: None,
            genres: vec![],
        }
    }

    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn watched(mut self) -> Self {
        self.playcount = 1;
        self
    }

    pub fn added_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date_added = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single();
        self
    }

    pub fn in_set(mut self, set_id: i64, set_title: &str) -> Self {
        self.set = Some((set_id, set_title.to_string()));
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genres.push(genre.to_string());
        self
    }

    pub fn build(self) -> Movie {
        Movie {
            id: MovieId::new(self.id),
            title: self.title,
            sort_title: String::new(),
            year: self.year,
            rating: self.rating,
            playcount: self.playcount,
            last_played: None,
            date_added: self.date_added,
            runtime: self.runtime,
            set_id: self.set.as_ref().map(|(id, _)| MovieSetId::new(*id)),
            set_title: self.set.map(|(_, title)| title),
            genres: self.genres,
            plot: String::new(),
            file: String::new(),
        }
    }
}

pub struct ShowBuilder {
    id: i64,
    title: String,
    year: Option<u32>,
    genres: Vec<String>,
}

impl ShowBuilder {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            year: Some(2024),
            genres: vec![],
        }
    }

    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genres.push(genre.to_string());
        self
    }

    pub fn build(self) -> TvShow {
        TvShow {
            id: TvShowId::new(self.id),
            title: self.title,
            sort_title: String::new(),
            year: self.year,
            rating: Some(8.0),
            season_count: 0,
            episode_count: 0,
            watched_episode_count: 0,
            genres: self.genres,
            date_added: None,
            plot: String::new(),
        }
    }
}

pub struct EpisodeBuilder {
    id: i64,
    tvshow_id: i64,
    show_title: String,
    title: String,
    season: u32,
    episode: u32,
    playcount: u32,
}

impl EpisodeBuilder {
    pub fn new(id: i64, title: &str, season: u32, episode: u32) -> Self {
        Self {
            id,
            tvshow_id: 1,
            show_title: String::new(),
            title: title.to_string(),
            season,
            episode,
            playcount: 0,
        }
    }

    pub fn of_show(mut self, show: &TvShow) -> Self {
        self.tvshow_id = show.id.get();
        self.show_title = show.title.clone();
        self
    }

    pub fn watched(mut self) -> Self {
        self.playcount = 1;
        self
    }

    pub fn build(self) -> Episode {
        Episode {
            id: EpisodeId::new(self.id),
            tvshow_id: TvShowId::new(self.tvshow_id),
            show_title: self.show_title,
            title: self.title,
            season: self.season,
            episode: self.episode,
            playcount: self.playcount,
            first_aired: None,
            date_added: None,
            last_played: None,
            runtime: Duration::from_secs(45 * 60),
            plot: String::new(),
            file: String::new(),
        }
    }
}

pub struct MusicVideoBuilder {
    id: i64,
    title: String,
    artist: String,
    album: String,
    year: Option<u32>,
}

impl MusicVideoBuilder {
    pub fn new(id: i64, title: &str, artist: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: String::new(),
            year: None,
        }
    }

    pub fn on_album(mut self, album: &str) -> Self {
        self.album = album.to_string();
        self
    }

    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn build(self) -> MusicVideo {
        MusicVideo {
            id: MusicVideoId::new(self.id),
            title: self.title,
            artist: self.artist,
            album: self.album,
            year: self.year,
            playcount: 0,
            last_played: None,
            date_added: None,
            runtime: Duration::from_secs(4 * 60),
            file: String::new(),
        }
    }
}

pub fn artist(id: i64, name: &str) -> Artist {
    Artist {
        id: ArtistId::new(id),
        name: name.to_string(),
        sort_name: String::new(),
        description: String::new(),
    }
}

pub fn movie_set(id: i64, title: &str, movies: &[&Movie]) -> MovieSet {
    MovieSet {
        id: MovieSetId::new(id),
        title: title.to_string(),
        sort_title: String::new(),
        plot: String::new(),
        movie_ids: movies.iter().map(|m| m.id).collect(),
    }
}

pub fn genre(id: i64, label: &str, kind: MediaKind) -> Genre {
    Genre {
        id: GenreId::new(id),
        label: label.to_string(),
        kind,
    }
}

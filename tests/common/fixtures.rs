use super::builders::*;
use komodio::library::LibrarySnapshot;
use komodio::models::*;

pub struct Fixtures;

impl Fixtures {
    pub fn movies() -> Vec<Movie> {
        vec![
            MovieBuilder::new(1, "The Matrix")
                .with_year(1999)
                .with_rating(8.7)
                .in_set(10, "The Matrix Collection")
                .with_genre("Science Fiction")
                .added_on(2023, 1, 5)
                .watched()
                .build(),
            MovieBuilder::new(2, "The Matrix Reloaded")
                .with_year(2003)
                .with_rating(7.2)
                .in_set(10, "The Matrix Collection")
                .with_genre("Science Fiction")
                .added_on(2023, 1, 6)
                .build(),
            MovieBuilder::new(3, "Inception")
                .with_year(2010)
                .with_rating(8.8)
                .with_genre("Science Fiction")
                .added_on(2024, 3, 1)
                .build(),
            MovieBuilder::new(4, "Pulp Fiction")
                .with_year(1994)
                .with_rating(8.9)
                .with_genre("Crime")
                .added_on(2022, 7, 14)
                .watched()
                .build(),
        ]
    }

    pub fn shows() -> Vec<TvShow> {
        vec![
            ShowBuilder::new(1, "Breaking Bad")
                .with_year(2008)
                .with_genre("Crime")
                .build(),
            ShowBuilder::new(2, "The Office").with_year(2005).build(),
        ]
    }

    pub fn episodes(show: &TvShow) -> Vec<Episode> {
        let base = show.id.get() * 100;
        vec![
            EpisodeBuilder::new(base + 1, "Pilot", 1, 1)
                .of_show(show)
                .watched()
                .build(),
            EpisodeBuilder::new(base + 2, "Cat's in the Bag", 1, 2)
                .of_show(show)
                .build(),
            EpisodeBuilder::new(base + 3, "Seven Thirty-Seven", 2, 1)
                .of_show(show)
                .build(),
            EpisodeBuilder::new(base + 4, "Behind the Scenes", 0, 1)
                .of_show(show)
                .build(),
        ]
    }

    pub fn music_videos() -> Vec<MusicVideo> {
        vec![
            MusicVideoBuilder::new(1, "Around the World", "Daft Punk")
                .on_album("Homework")
                .with_year(1997)
                .build(),
            MusicVideoBuilder::new(2, "Da Funk", "Daft Punk")
                .on_album("Homework")
                .with_year(1995)
                .build(),
            MusicVideoBuilder::new(3, "One More Time", "Daft Punk")
                .on_album("Discovery")
                .with_year(2000)
                .build(),
        ]
    }

    /// Fully loaded library with every collection populated
    pub fn library() -> LibrarySnapshot {
        let movies = Self::movies();
        let shows = Self::shows();
        let mut library = LibrarySnapshot::new();
        library.status = LibraryStatus::Loaded;
        library.movie_sets = vec![movie_set(
            10,
            "The Matrix Collection",
            &[&movies[0], &movies[1]],
        )];
        library.movies = movies;
        library.episodes = shows.iter().flat_map(Self::episodes).collect();
        library.tvshows = shows;
        library.artists = vec![artist(1, "Daft Punk")];
        library.music_videos = Self::music_videos();
        library.genres = vec![
            genre(1, "Science Fiction", MediaKind::Movie),
            genre(2, "Crime", MediaKind::Movie),
            genre(3, "Crime", MediaKind::TvShow),
        ];
        library.playlists = vec![PlaylistFile {
            file: "special://profile/playlists/video/Unwatched.xsp".to_string(),
            label: "Unwatched".to_string(),
            kind: MediaKind::Movie,
        }];
        library
    }
}

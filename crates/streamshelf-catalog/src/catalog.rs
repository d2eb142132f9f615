use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use streamshelf_models::{Book, ContentKind, Movie, Reel, Series};

const SAMPLE_MOVIES: &str = include_str!("../data/movies.json");
const SAMPLE_SERIES: &str = include_str!("../data/series.json");
const SAMPLE_BOOKS: &str = include_str!("../data/books.json");
const SAMPLE_REELS: &str = include_str!("../data/reels.json");

/// The full in-memory catalog: one typed collection per variant. Loaded once
/// at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub series: Vec<Series>,
    pub books: Vec<Book>,
    pub reels: Vec<Reel>,
}

impl Catalog {
    /// Parses the embedded sample data.
    pub fn load_sample() -> Result<Self> {
        let catalog = Self {
            movies: serde_json::from_str(SAMPLE_MOVIES).context("parse embedded movies data")?,
            series: serde_json::from_str(SAMPLE_SERIES).context("parse embedded series data")?,
            books: serde_json::from_str(SAMPLE_BOOKS).context("parse embedded books data")?,
            reels: serde_json::from_str(SAMPLE_REELS).context("parse embedded reels data")?,
        };
        debug!(
            "Loaded sample catalog: {} movies, {} series, {} books, {} reels",
            catalog.movies.len(),
            catalog.series.len(),
            catalog.books.len(),
            catalog.reels.len()
        );
        Ok(catalog)
    }

    /// Loads collections from `movies.json`, `series.json`, `books.json` and
    /// `reels.json` in `dir`. A missing file falls back to the embedded
    /// sample for that collection; an unparsable file is an error.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let sample = Self::load_sample()?;
        let catalog = Self {
            movies: load_collection(dir, "movies.json")?.unwrap_or(sample.movies),
            series: load_collection(dir, "series.json")?.unwrap_or(sample.series),
            books: load_collection(dir, "books.json")?.unwrap_or(sample.books),
            reels: load_collection(dir, "reels.json")?.unwrap_or(sample.reels),
        };
        info!(
            "Loaded catalog from {:?}: {} movies, {} series, {} books, {} reels",
            dir,
            catalog.movies.len(),
            catalog.series.len(),
            catalog.books.len(),
            catalog.reels.len()
        );
        Ok(catalog)
    }

    /// First `n` movies, for shelf previews.
    pub fn movie_shelf(&self, n: usize) -> &[Movie] {
        &self.movies[..self.movies.len().min(n)]
    }

    pub fn series_shelf(&self, n: usize) -> &[Series] {
        &self.series[..self.series.len().min(n)]
    }

    pub fn book_shelf(&self, n: usize) -> &[Book] {
        &self.books[..self.books.len().min(n)]
    }

    pub fn reel_shelf(&self, n: usize) -> &[Reel] {
        &self.reels[..self.reels.len().min(n)]
    }
}

fn load_collection<T>(dir: &Path, file: &str) -> Result<Option<Vec<T>>>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let path = dir.join(file);
    if !path.exists() {
        debug!("No {} in {:?}, using embedded sample", file, dir);
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("read catalog file {:?}", path))?;
    let data = serde_json::from_str(&content)
        .with_context(|| format!("parse catalog file {:?}", path))?;
    Ok(Some(data))
}

/// Per-kind genre vocabulary offered as filter choices.
#[derive(Debug, Clone)]
pub struct GenreIndex {
    pub movies: Vec<String>,
    pub series: Vec<String>,
    pub books: Vec<String>,
    pub reels: Vec<String>,
}

impl GenreIndex {
    pub fn for_kind(&self, kind: ContentKind) -> &[String] {
        match kind {
            ContentKind::Movie => &self.movies,
            ContentKind::Series => &self.series,
            ContentKind::Book => &self.books,
            ContentKind::Reel => &self.reels,
        }
    }
}

impl Default for GenreIndex {
    fn default() -> Self {
        let to_vec = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            movies: to_vec(&[
                "Action",
                "Comedy",
                "Drama",
                "Horror",
                "Sci-Fi",
                "Thriller",
                "Romance",
                "Adventure",
            ]),
            series: to_vec(&[
                "Action",
                "Adventure",
                "Comedy",
                "Drama",
                "Fantasy",
                "Romance",
                "Sci-Fi",
                "Slice of Life",
            ]),
            books: to_vec(&[
                "Fiction",
                "Non-Fiction",
                "Mystery",
                "Romance",
                "Sci-Fi",
                "Biography",
                "History",
                "Self-Help",
            ]),
            reels: to_vec(&[
                "Entertainment",
                "Educational",
                "Comedy",
                "Music",
                "Gaming",
                "Lifestyle",
                "News",
                "Sports",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamshelf_models::SeriesStatus;

    #[test]
    fn test_load_sample_collections() {
        let catalog = Catalog::load_sample().unwrap();
        assert_eq!(catalog.movies.len(), 4);
        assert_eq!(catalog.series.len(), 3);
        assert_eq!(catalog.books.len(), 3);
        assert_eq!(catalog.reels.len(), 3);

        let one_piece = catalog.series.iter().find(|s| s.id == 3).unwrap();
        assert_eq!(one_piece.status, SeriesStatus::Ongoing);
        assert!(catalog.movies[0].featured);
        assert!(!catalog.movies[1].featured);
    }

    #[test]
    fn test_from_dir_overrides_one_collection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("movies.json"),
            r#"[{
                "id": 10,
                "title": "Local Movie",
                "year": 2020,
                "genre": "Drama",
                "rating": 7.0,
                "duration": "1h 30m",
                "thumbnail": "",
                "backdrop": "",
                "description": "A locally provided movie.",
                "trailer": ""
            }]"#,
        )
        .unwrap();

        let catalog = Catalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.movies.len(), 1);
        assert_eq!(catalog.movies[0].title, "Local Movie");
        // Missing files fall back to the embedded sample.
        assert_eq!(catalog.books.len(), 3);
    }

    #[test]
    fn test_from_dir_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("books.json"), "not json").unwrap();
        assert!(Catalog::from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_shelf_clamps_to_collection_size() {
        let catalog = Catalog::load_sample().unwrap();
        assert_eq!(catalog.movie_shelf(2).len(), 2);
        assert_eq!(catalog.reel_shelf(100).len(), 3);
    }
}

use std::str::FromStr;

use streamshelf_models::SeriesStatus;

/// Transient search/filter/sort parameters for one catalog view. Owned by
/// the presentation layer and rebuilt on every input change; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub search: String,
    pub genre: GenreFilter,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = GenreFilter::Genre(genre.into());
        self
    }

    pub fn with_status(mut self, status: SeriesStatus) -> Self {
        self.status = StatusFilter::Status(status);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum StatusFilter {
    #[default]
    All,
    Status(SeriesStatus),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        SeriesStatus::from_str(s).map(StatusFilter::Status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive ascending title. The default, and the fallback for
    /// keys that do not apply to a variant.
    #[default]
    Title,
    /// Numeric rating, descending. Unrated items sort last.
    Rating,
    /// Release year, descending.
    Year,
    /// Episode or page count, descending.
    Count,
    /// Case-insensitive ascending author (books).
    Author,
    /// View count, descending (reels).
    Views,
    /// Like count, descending (reels).
    Likes,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" | "name" => Ok(SortKey::Title),
            "rating" => Ok(SortKey::Rating),
            "year" => Ok(SortKey::Year),
            "count" | "episodes" | "pages" => Ok(SortKey::Count),
            "author" => Ok(SortKey::Author),
            "views" => Ok(SortKey::Views),
            "likes" => Ok(SortKey::Likes),
            _ => Err(format!(
                "Invalid sort key: {}. Use 'title', 'rating', 'year', 'count', 'author', 'views', or 'likes'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_matches_everything_shape() {
        let q = CatalogQuery::default();
        assert_eq!(q.search, "");
        assert_eq!(q.genre, GenreFilter::All);
        assert_eq!(q.status, StatusFilter::All);
        assert_eq!(q.sort, SortKey::Title);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Title);
        assert_eq!("episodes".parse::<SortKey>().unwrap(), SortKey::Count);
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "ongoing".parse::<StatusFilter>().unwrap(),
            StatusFilter::Status(SeriesStatus::Ongoing)
        );
    }
}

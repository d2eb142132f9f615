use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::book::Book;
use crate::movie::Movie;
use crate::reel::Reel;
use crate::series::Series;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
    Book,
    Reel,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "movie"),
            ContentKind::Series => write!(f, "series"),
            ContentKind::Book => write!(f, "book"),
            ContentKind::Reel => write!(f, "reel"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" => Ok(ContentKind::Movie),
            "series" | "anime" => Ok(ContentKind::Series),
            "book" | "books" => Ok(ContentKind::Book),
            "reel" | "reels" => Ok(ContentKind::Reel),
            _ => Err(format!(
                "Invalid content kind: {}. Use 'movie', 'series', 'book', or 'reel'",
                s
            )),
        }
    }
}

/// Tagged union over the four content variants. Ids are only unique within a
/// variant collection, so mixed lists must keep the kind tag alongside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentItem {
    Movie(Movie),
    Series(Series),
    Book(Book),
    Reel(Reel),
}

impl From<Movie> for ContentItem {
    fn from(movie: Movie) -> Self {
        ContentItem::Movie(movie)
    }
}

impl From<Series> for ContentItem {
    fn from(series: Series) -> Self {
        ContentItem::Series(series)
    }
}

impl From<Book> for ContentItem {
    fn from(book: Book) -> Self {
        ContentItem::Book(book)
    }
}

impl From<Reel> for ContentItem {
    fn from(reel: Reel) -> Self {
        ContentItem::Reel(reel)
    }
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Movie(_) => ContentKind::Movie,
            ContentItem::Series(_) => ContentKind::Series,
            ContentItem::Book(_) => ContentKind::Book,
            ContentItem::Reel(_) => ContentKind::Reel,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            ContentItem::Movie(m) => m.id,
            ContentItem::Series(s) => s.id,
            ContentItem::Book(b) => b.id,
            ContentItem::Reel(r) => r.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Movie(m) => &m.title,
            ContentItem::Series(s) => &s.title,
            ContentItem::Book(b) => &b.title,
            ContentItem::Reel(r) => &r.title,
        }
    }

    /// Reels have no synopsis.
    pub fn description(&self) -> Option<&str> {
        match self {
            ContentItem::Movie(m) => Some(&m.description),
            ContentItem::Series(s) => Some(&s.description),
            ContentItem::Book(b) => Some(&b.description),
            ContentItem::Reel(_) => None,
        }
    }

    /// Reels have no genre label.
    pub fn genre(&self) -> Option<&str> {
        match self {
            ContentItem::Movie(m) => Some(&m.genre),
            ContentItem::Series(s) => Some(&s.genre),
            ContentItem::Book(b) => Some(&b.genre),
            ContentItem::Reel(_) => None,
        }
    }

    /// Reels are unrated.
    pub fn rating(&self) -> Option<f32> {
        match self {
            ContentItem::Movie(m) => Some(m.rating),
            ContentItem::Series(s) => Some(s.rating),
            ContentItem::Book(b) => Some(b.rating),
            ContentItem::Reel(_) => None,
        }
    }

    pub fn thumbnail(&self) -> &str {
        match self {
            ContentItem::Movie(m) => &m.thumbnail,
            ContentItem::Series(s) => &s.thumbnail,
            ContentItem::Book(b) => &b.thumbnail,
            ContentItem::Reel(r) => &r.thumbnail,
        }
    }

    pub fn featured(&self) -> bool {
        match self {
            ContentItem::Movie(m) => m.featured,
            ContentItem::Series(s) => s.featured,
            ContentItem::Book(b) => b.featured,
            ContentItem::Reel(r) => r.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_accepts_plural_aliases() {
        assert_eq!("movies".parse::<ContentKind>().unwrap(), ContentKind::Movie);
        assert_eq!("anime".parse::<ContentKind>().unwrap(), ContentKind::Series);
        assert!("music".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trip() {
        for kind in [
            ContentKind::Movie,
            ContentKind::Series,
            ContentKind::Book,
            ContentKind::Reel,
        ] {
            assert_eq!(kind.to_string().parse::<ContentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_content_item_serializes_with_kind_tag() {
        let reel = Reel {
            id: 1,
            title: "Clip".to_string(),
            creator: "Someone".to_string(),
            duration: "0:30".to_string(),
            views: 10,
            likes: 2,
            thumbnail: String::new(),
            video: String::new(),
            featured: false,
        };
        let json = serde_json::to_value(ContentItem::from(reel)).unwrap();
        assert_eq!(json["kind"], "reel");
        assert_eq!(json["title"], "Clip");
    }
}

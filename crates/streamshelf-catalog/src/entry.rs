use streamshelf_models::{
    Book, ContentItem, ContentKind, ContentRef, Movie, Reel, Series, SeriesStatus,
};

/// Uniform read access over the four content variants so the filter and sort
/// code stays generic. Accessors that do not apply to a variant keep the
/// `None` default.
pub trait CatalogEntry {
    fn id(&self) -> u32;
    fn kind(&self) -> ContentKind;
    fn title(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }
    fn genre(&self) -> Option<&str> {
        None
    }
    fn author(&self) -> Option<&str> {
        None
    }
    fn creator(&self) -> Option<&str> {
        None
    }
    fn status(&self) -> Option<SeriesStatus> {
        None
    }
    fn rating(&self) -> Option<f32> {
        None
    }
    fn year(&self) -> Option<u32> {
        None
    }
    /// Episode or page count, depending on variant.
    fn count(&self) -> Option<u32> {
        None
    }
    fn views(&self) -> Option<u64> {
        None
    }
    fn likes(&self) -> Option<u64> {
        None
    }
    fn featured(&self) -> bool {
        false
    }

    fn content_ref(&self) -> ContentRef {
        ContentRef::new(self.kind(), self.id())
    }
}

impl CatalogEntry for Movie {
    fn id(&self) -> u32 {
        self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Movie
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
    fn genre(&self) -> Option<&str> {
        Some(&self.genre)
    }
    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }
    fn year(&self) -> Option<u32> {
        Some(self.year)
    }
    fn featured(&self) -> bool {
        self.featured
    }
}

impl CatalogEntry for Series {
    fn id(&self) -> u32 {
        self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Series
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
    fn genre(&self) -> Option<&str> {
        Some(&self.genre)
    }
    fn status(&self) -> Option<SeriesStatus> {
        Some(self.status)
    }
    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }
    fn year(&self) -> Option<u32> {
        Some(self.year)
    }
    fn count(&self) -> Option<u32> {
        Some(self.episodes)
    }
    fn featured(&self) -> bool {
        self.featured
    }
}

impl CatalogEntry for Book {
    fn id(&self) -> u32 {
        self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Book
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
    fn genre(&self) -> Option<&str> {
        Some(&self.genre)
    }
    fn author(&self) -> Option<&str> {
        Some(&self.author)
    }
    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }
    fn year(&self) -> Option<u32> {
        Some(self.year)
    }
    fn count(&self) -> Option<u32> {
        Some(self.pages)
    }
    fn featured(&self) -> bool {
        self.featured
    }
}

impl CatalogEntry for Reel {
    fn id(&self) -> u32 {
        self.id
    }
    fn kind(&self) -> ContentKind {
        ContentKind::Reel
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn creator(&self) -> Option<&str> {
        Some(&self.creator)
    }
    fn views(&self) -> Option<u64> {
        Some(self.views)
    }
    fn likes(&self) -> Option<u64> {
        Some(self.likes)
    }
    fn featured(&self) -> bool {
        self.featured
    }
}

impl CatalogEntry for ContentItem {
    fn id(&self) -> u32 {
        self.id()
    }
    fn kind(&self) -> ContentKind {
        self.kind()
    }
    fn title(&self) -> &str {
        self.title()
    }
    fn description(&self) -> Option<&str> {
        self.description()
    }
    fn genre(&self) -> Option<&str> {
        self.genre()
    }
    fn author(&self) -> Option<&str> {
        match self {
            ContentItem::Book(b) => Some(&b.author),
            _ => None,
        }
    }
    fn creator(&self) -> Option<&str> {
        match self {
            ContentItem::Reel(r) => Some(&r.creator),
            _ => None,
        }
    }
    fn status(&self) -> Option<SeriesStatus> {
        match self {
            ContentItem::Series(s) => Some(s.status),
            _ => None,
        }
    }
    fn rating(&self) -> Option<f32> {
        self.rating()
    }
    fn year(&self) -> Option<u32> {
        match self {
            ContentItem::Movie(m) => Some(m.year),
            ContentItem::Series(s) => Some(s.year),
            ContentItem::Book(b) => Some(b.year),
            ContentItem::Reel(_) => None,
        }
    }
    fn count(&self) -> Option<u32> {
        match self {
            ContentItem::Series(s) => Some(s.episodes),
            ContentItem::Book(b) => Some(b.pages),
            _ => None,
        }
    }
    fn views(&self) -> Option<u64> {
        match self {
            ContentItem::Reel(r) => Some(r.views),
            _ => None,
        }
    }
    fn likes(&self) -> Option<u64> {
        match self {
            ContentItem::Reel(r) => Some(r.likes),
            _ => None,
        }
    }
    fn featured(&self) -> bool {
        self.featured()
    }
}

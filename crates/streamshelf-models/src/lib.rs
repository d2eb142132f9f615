pub mod book;
pub mod content;
pub mod content_ref;
pub mod movie;
pub mod profile;
pub mod reel;
pub mod series;

pub use book::Book;
pub use content::{ContentItem, ContentKind};
pub use content_ref::ContentRef;
pub use movie::Movie;
pub use profile::{UserProfile, WatchHistoryEntry};
pub use reel::Reel;
pub use series::{Series, SeriesStatus};

pub mod catalog;
pub mod entry;
pub mod featured;
pub mod filter;
pub mod lookup;
pub mod query;

pub use catalog::{Catalog, GenreIndex};
pub use entry::CatalogEntry;
pub use featured::{featured_items, FeaturedRotation};
pub use filter::filter_collection;
pub use lookup::{resolve_history, resolve_ref, resolve_refs};
pub use query::{CatalogQuery, GenreFilter, SortKey, StatusFilter};

// Cross-collection resolution of user-list references into displayable
// items. References to ids that no longer exist are dropped silently.

use tracing::debug;

use streamshelf_models::{ContentItem, ContentKind, ContentRef, WatchHistoryEntry};

use crate::catalog::Catalog;

/// Resolves one reference against the collection its kind names.
pub fn resolve_ref(catalog: &Catalog, content: ContentRef) -> Option<ContentItem> {
    match content.kind {
        ContentKind::Movie => catalog
            .movies
            .iter()
            .find(|m| m.id == content.id)
            .cloned()
            .map(ContentItem::Movie),
        ContentKind::Series => catalog
            .series
            .iter()
            .find(|s| s.id == content.id)
            .cloned()
            .map(ContentItem::Series),
        ContentKind::Book => catalog
            .books
            .iter()
            .find(|b| b.id == content.id)
            .cloned()
            .map(ContentItem::Book),
        ContentKind::Reel => catalog
            .reels
            .iter()
            .find(|r| r.id == content.id)
            .cloned()
            .map(ContentItem::Reel),
    }
}

/// Materializes a list of references, preserving order and skipping unknown
/// ids.
pub fn resolve_refs(catalog: &Catalog, refs: &[ContentRef]) -> Vec<ContentItem> {
    let resolved: Vec<ContentItem> = refs
        .iter()
        .filter_map(|r| resolve_ref(catalog, *r))
        .collect();
    if resolved.len() != refs.len() {
        debug!(
            "resolve_refs: dropped {} unresolvable references",
            refs.len() - resolved.len()
        );
    }
    resolved
}

/// Pairs each history entry with its catalog item; entries pointing at
/// unknown content are skipped.
pub fn resolve_history(
    catalog: &Catalog,
    entries: &[WatchHistoryEntry],
) -> Vec<(WatchHistoryEntry, ContentItem)> {
    entries
        .iter()
        .filter_map(|entry| resolve_ref(catalog, entry.content).map(|item| (entry.clone(), item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_resolve_disambiguates_by_kind() {
        let catalog = Catalog::load_sample().unwrap();
        // Movie id 1 and book id 1 are different items.
        let movie = resolve_ref(&catalog, ContentRef::new(ContentKind::Movie, 1)).unwrap();
        let book = resolve_ref(&catalog, ContentRef::new(ContentKind::Book, 1)).unwrap();
        assert_eq!(movie.title(), "The Dark Knight");
        assert_eq!(book.title(), "The Great Gatsby");
    }

    #[test]
    fn test_resolve_refs_drops_unknown_ids() {
        let catalog = Catalog::load_sample().unwrap();
        let refs = vec![
            ContentRef::new(ContentKind::Movie, 1),
            ContentRef::new(ContentKind::Movie, 999),
            ContentRef::new(ContentKind::Reel, 2),
        ];
        let items = resolve_refs(&catalog, &refs);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), "The Dark Knight");
        assert_eq!(items[1].title(), "Anime Fight Scenes");
    }

    #[test]
    fn test_resolve_history_keeps_entry_data() {
        let catalog = Catalog::load_sample().unwrap();
        let entries = vec![
            WatchHistoryEntry {
                content: ContentRef::new(ContentKind::Series, 2),
                watched_at: Utc::now(),
                progress: 75,
            },
            WatchHistoryEntry {
                content: ContentRef::new(ContentKind::Series, 404),
                watched_at: Utc::now(),
                progress: 10,
            },
        ];
        let resolved = resolve_history(&catalog, &entries);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.progress, 75);
        assert_eq!(resolved[0].1.title(), "Death Note");
    }
}

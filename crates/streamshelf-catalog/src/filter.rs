// Filtering and ordering for one variant collection. Pure and stateless:
// safe to recompute on every input change.

use std::cmp::Ordering;

use tracing::debug;

use crate::entry::CatalogEntry;
use crate::query::{CatalogQuery, GenreFilter, SortKey, StatusFilter};


/// Applies the query's predicate and sort to a collection, returning matching
/// items in query order. `sort_by` is stable, so items with equal sort keys
/// keep their input order.
pub fn filter_collection<T>(items: &[T], query: &CatalogQuery) -> Vec<T>
where
    T: CatalogEntry + Clone,
{
    let mut matched: Vec<T> = items
        .iter()
        .filter(|item| matches_query(*item, query))
        .cloned()
        .collect();

    sort_entries(&mut matched, query.sort);

    debug!(
        "filter_collection: matched {} of {} items (search={:?}, sort={:?})",
        matched.len(),
        items.len(),
        query.search,
        query.sort
    );

    matched
}

/// All conditions combined with logical AND.
pub fn matches_query<T: CatalogEntry>(item: &T, query: &CatalogQuery) -> bool {
    matches_search(item, &query.search)
        && matches_genre(item, &query.genre)
        && matches_status(item, &query.status)
}

/// Case-insensitive substring match against title, description, author or
/// creator. An empty term matches everything.
fn matches_search<T: CatalogEntry>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();

    let mut haystacks = vec![item.title()];
    if let Some(description) = item.description() {
        haystacks.push(description);
    }
    if let Some(author) = item.author() {
        haystacks.push(author);
    }
    if let Some(creator) = item.creator() {
        haystacks.push(creator);
    }

    haystacks
        .iter()
        .any(|text| text.to_lowercase().contains(&term))
}

/// Genre labels are multi-valued comma-separated text, so the contract is
/// containment, not equality. Entries without a genre label (reels) always
/// pass.
fn matches_genre<T: CatalogEntry>(item: &T, filter: &GenreFilter) -> bool {
    match filter {
        GenreFilter::All => true,
        GenreFilter::Genre(genre) => item
            .genre()
            .map(|labels| labels.to_lowercase().contains(&genre.to_lowercase()))
            .unwrap_or(true),
    }
}

/// Exact status equality for series; entries without a status always pass.
fn matches_status<T: CatalogEntry>(item: &T, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Status(status) => item
            .status()
            .map(|item_status| item_status == *status)
            .unwrap_or(true),
    }
}

/// Sorts in place by the given key. Keys that do not apply to the variant
/// (author on a movie, count on a reel) fall back to the title ordering so
/// the result stays deterministic.
pub fn sort_entries<T: CatalogEntry>(items: &mut [T], key: SortKey) {
    match key {
        SortKey::Title => items.sort_by(|a, b| cmp_titles(a, b)),
        SortKey::Rating => items.sort_by(|a, b| {
            b.rating()
                .unwrap_or(0.0)
                .total_cmp(&a.rating().unwrap_or(0.0))
        }),
        SortKey::Year => items.sort_by(|a, b| b.year().cmp(&a.year())),
        SortKey::Count => items.sort_by(|a, b| match (a.count(), b.count()) {
            (Some(x), Some(y)) => y.cmp(&x),
            _ => cmp_titles(a, b),
        }),
        SortKey::Author => items.sort_by(|a, b| match (a.author(), b.author()) {
            (Some(x), Some(y)) => cmp_ci(x, y),
            _ => cmp_titles(a, b),
        }),
        SortKey::Views => items.sort_by(|a, b| match (a.views(), b.views()) {
            (Some(x), Some(y)) => y.cmp(&x),
            _ => cmp_titles(a, b),
        }),
        SortKey::Likes => items.sort_by(|a, b| match (a.likes(), b.likes()) {
            (Some(x), Some(y)) => y.cmp(&x),
            _ => cmp_titles(a, b),
        }),
    }
}

fn cmp_titles<T: CatalogEntry>(a: &T, b: &T) -> Ordering {
    cmp_ci(a.title(), b.title())
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

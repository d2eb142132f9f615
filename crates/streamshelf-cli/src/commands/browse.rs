use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;

use streamshelf_catalog::{filter_collection, CatalogQuery, GenreFilter, GenreIndex, SortKey, StatusFilter};
use streamshelf_models::{ContentItem, ContentKind};

use crate::commands::{content_table, items_json, AppContext, KindArg};
use crate::output::{Output, OutputFormat};

pub fn run_browse(
    ctx: &AppContext,
    kind: KindArg,
    search: Option<String>,
    genre: Option<String>,
    status: Option<String>,
    sort: Option<String>,
    output: &Output,
) -> Result<()> {
    let query = build_query(search, genre, status, sort)?;

    let (items, total): (Vec<ContentItem>, usize) = match kind {
        KindArg::Movie => (
            filter_collection(&ctx.catalog.movies, &query)
                .into_iter()
                .map(ContentItem::from)
                .collect(),
            ctx.catalog.movies.len(),
        ),
        KindArg::Series => (
            filter_collection(&ctx.catalog.series, &query)
                .into_iter()
                .map(ContentItem::from)
                .collect(),
            ctx.catalog.series.len(),
        ),
        KindArg::Book => (
            filter_collection(&ctx.catalog.books, &query)
                .into_iter()
                .map(ContentItem::from)
                .collect(),
            ctx.catalog.books.len(),
        ),
        KindArg::Reel => (
            filter_collection(&ctx.catalog.reels, &query)
                .into_iter()
                .map(ContentItem::from)
                .collect(),
            ctx.catalog.reels.len(),
        ),
    };

    match output.format() {
        OutputFormat::Human => {
            if items.is_empty() {
                output.info("No matching items. Try adjusting your search or filter criteria.");
            } else {
                println!("{}", content_table(&items));
                output.info(format!("Showing {} of {} items", items.len(), total));
            }
        }
        _ => output.json(&items_json(&items)),
    }

    Ok(())
}

pub fn run_genres(kind: KindArg, output: &Output) -> Result<()> {
    let index = GenreIndex::default();
    let genres = index.for_kind(ContentKind::from(kind));

    match output.format() {
        OutputFormat::Human => {
            for genre in genres {
                println!("{}", genre);
            }
        }
        _ => output.json(&json!({ "genres": genres })),
    }

    Ok(())
}

fn build_query(
    search: Option<String>,
    genre: Option<String>,
    status: Option<String>,
    sort: Option<String>,
) -> Result<CatalogQuery> {
    let mut query = CatalogQuery {
        search: search.unwrap_or_default(),
        ..CatalogQuery::default()
    };

    if let Some(genre) = genre {
        if !genre.eq_ignore_ascii_case("all") {
            query.genre = GenreFilter::Genre(genre);
        }
    }

    if let Some(status) = status {
        query.status = status.parse::<StatusFilter>().map_err(|e| eyre!(e))?;
    }

    if let Some(sort) = sort {
        query.sort = sort.parse::<SortKey>().map_err(|e| eyre!(e))?;
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_defaults() {
        let query = build_query(None, None, None, None).unwrap();
        assert_eq!(query, CatalogQuery::default());
    }

    #[test]
    fn test_build_query_all_genre_means_no_filter() {
        let query = build_query(None, Some("All".to_string()), None, None).unwrap();
        assert_eq!(query.genre, GenreFilter::All);
    }

    #[test]
    fn test_build_query_rejects_unknown_sort() {
        assert!(build_query(None, None, None, Some("bogus".to_string())).is_err());
    }
}

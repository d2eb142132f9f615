use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;

use streamshelf_catalog::FeaturedRotation;
use streamshelf_models::ContentItem;

use crate::commands::{content_table, AppContext};
use crate::output::{Output, OutputFormat};

const SHELF_SIZE: usize = 6;

/// The landing view: the featured spotlight followed by a short shelf from
/// each collection.
pub fn run_home(ctx: &AppContext, output: &Output) -> Result<()> {
    let rotation = FeaturedRotation::from_catalog(&ctx.catalog);

    let movies: Vec<ContentItem> = ctx
        .catalog
        .movie_shelf(SHELF_SIZE)
        .iter()
        .cloned()
        .map(ContentItem::from)
        .collect();
    let series: Vec<ContentItem> = ctx
        .catalog
        .series_shelf(SHELF_SIZE)
        .iter()
        .cloned()
        .map(ContentItem::from)
        .collect();
    let books: Vec<ContentItem> = ctx
        .catalog
        .book_shelf(SHELF_SIZE)
        .iter()
        .cloned()
        .map(ContentItem::from)
        .collect();
    let reels: Vec<ContentItem> = ctx
        .catalog
        .reel_shelf(4)
        .iter()
        .cloned()
        .map(ContentItem::from)
        .collect();

    match output.format() {
        OutputFormat::Human => {
            if let Some(spotlight) = rotation.current() {
                println!("{} {}\n", "Featured:".red().bold(), spotlight.title());
            }
            for (heading, shelf) in [
                ("Trending Movies", &movies),
                ("Popular Series", &series),
                ("Featured Books", &books),
                ("Trending Reels", &reels),
            ] {
                println!("{}", heading.cyan().bold());
                println!("{}", content_table(shelf));
            }
        }
        _ => {
            output.json(&json!({
                "spotlight": rotation.current(),
                "movies": movies,
                "series": series,
                "books": books,
                "reels": reels,
            }));
        }
    }

    Ok(())
}

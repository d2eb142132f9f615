use color_eyre::Result;
use serde_json::json;

use streamshelf_catalog::{featured_items, FeaturedRotation};

use crate::commands::{content_table, AppContext};
use crate::output::{Output, OutputFormat};

/// Shows the featured lineup and the spotlight item after stepping the
/// rotation `rotate` positions (negative steps backwards).
pub fn run_featured(ctx: &AppContext, rotate: i64, output: &Output) -> Result<()> {
    let lineup = featured_items(&ctx.catalog);
    let mut rotation = FeaturedRotation::new(lineup.clone());

    if rotate >= 0 {
        for _ in 0..rotate {
            rotation.next_featured();
        }
    } else {
        for _ in 0..rotate.abs() {
            rotation.prev_featured();
        }
    }

    match output.format() {
        OutputFormat::Human => {
            if rotation.is_empty() {
                output.info("Nothing is featured right now.");
                return Ok(());
            }
            println!("{}", content_table(&lineup));
            if let Some(spotlight) = rotation.current() {
                output.success(format!(
                    "Spotlight ({}/{}): {}",
                    rotation.position() + 1,
                    rotation.len(),
                    spotlight.title()
                ));
            }
        }
        _ => {
            output.json(&json!({
                "position": rotation.position(),
                "count": rotation.len(),
                "lineup": lineup,
                "spotlight": rotation.current(),
            }));
        }
    }

    Ok(())
}

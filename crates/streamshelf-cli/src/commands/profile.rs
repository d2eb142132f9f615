use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;

use streamshelf_catalog::{resolve_history, resolve_refs};

use crate::commands::{content_table, AppContext};
use crate::output::{Output, OutputFormat};

/// Shows the signed-in profile with its lists materialized against the
/// catalog.
pub fn run_profile(ctx: &AppContext, output: &Output) -> Result<()> {
    let Some(profile) = ctx.session.current() else {
        output.info("Not logged in. Use 'streamshelf login' first.");
        return Ok(());
    };

    let favorites = resolve_refs(&ctx.catalog, &profile.favorites);
    let watch_later = resolve_refs(&ctx.catalog, &profile.watch_later);
    let history = resolve_history(&ctx.catalog, &profile.watch_history);

    match output.format() {
        OutputFormat::Human => {
            println!("{} <{}>", profile.name.bold(), profile.email);
            println!(
                "{} favorites, {} watch later, {} watched",
                profile.favorites.len(),
                profile.watch_later.len(),
                profile.watch_history.len()
            );

            if !favorites.is_empty() {
                println!("\n{}", "Favorites".cyan().bold());
                println!("{}", content_table(&favorites));
            }
            if !watch_later.is_empty() {
                println!("\n{}", "Watch Later".cyan().bold());
                println!("{}", content_table(&watch_later));
            }
            if !history.is_empty() {
                println!("\n{}", "History".cyan().bold());
                for (entry, item) in &history {
                    println!(
                        "  {} — {}% on {}",
                        item.title(),
                        entry.progress,
                        entry.watched_at.format("%Y-%m-%d")
                    );
                }
            }
        }
        _ => {
            let history_json: Vec<_> = history
                .iter()
                .map(|(entry, item)| {
                    json!({
                        "entry": entry,
                        "item": item,
                    })
                })
                .collect();
            output.json(&json!({
                "profile": profile,
                "favorites": favorites,
                "watch_later": watch_later,
                "history": history_json,
            }));
        }
    }

    Ok(())
}

use color_eyre::Result;
use serde_json::json;

use streamshelf_catalog::resolve_ref;
use streamshelf_models::{ContentKind, ContentRef};

use crate::commands::{AppContext, KindArg, ListAction};
use crate::output::Output;

pub fn run_favorite(
    ctx: &mut AppContext,
    action: ListAction,
    kind: KindArg,
    id: u32,
    output: &Output,
) -> Result<()> {
    let content = ContentRef::new(ContentKind::from(kind), id);
    let title = item_title(ctx, content);

    let updated = match action {
        ListAction::Add => ctx.session.add_to_favorites(content),
        ListAction::Remove => ctx.session.remove_from_favorites(content),
    };

    match updated {
        Some(profile) => {
            let verb = match action {
                ListAction::Add => "Added to",
                ListAction::Remove => "Removed from",
            };
            output.success(format!(
                "{} favorites: {} ({} total)",
                verb,
                title,
                profile.favorites.len()
            ));
            output.json(&json!({ "favorites": profile.favorites }));
        }
        None => output.info("Not logged in; favorites unchanged."),
    }

    Ok(())
}

pub fn run_watch_later(ctx: &mut AppContext, kind: KindArg, id: u32, output: &Output) -> Result<()> {
    let content = ContentRef::new(ContentKind::from(kind), id);
    let title = item_title(ctx, content);

    match ctx.session.add_to_watch_later(content) {
        Some(profile) => {
            output.success(format!(
                "Added to watch later: {} ({} total)",
                title,
                profile.watch_later.len()
            ));
            output.json(&json!({ "watch_later": profile.watch_later }));
        }
        None => output.info("Not logged in; watch later unchanged."),
    }

    Ok(())
}

/// Catalog title for feedback messages. A reference that does not resolve is
/// still accepted by the lists; it just reads as its raw ref.
fn item_title(ctx: &AppContext, content: ContentRef) -> String {
    resolve_ref(&ctx.catalog, content)
        .map(|item| item.title().to_string())
        .unwrap_or_else(|| content.to_string())
}

pub mod auth;
pub mod browse;
pub mod featured;
pub mod home;
pub mod lists;
pub mod profile;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use serde_json::json;
use tracing::debug;

use streamshelf_catalog::{Catalog, CatalogEntry};
use streamshelf_config::{Config, PathManager};
use streamshelf_models::{ContentItem, ContentKind};
use streamshelf_session::{SessionStorage, SessionStore};

/// Everything a command needs: the loaded catalog and the restored session.
pub struct AppContext {
    pub catalog: Catalog,
    pub session: SessionStore,
}

pub fn init_context() -> Result<AppContext> {
    let paths = PathManager::default();
    paths.ensure_directories()?;
    let config = Config::load_or_default(&paths);

    let catalog = match config.catalog_data_dir() {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::load_sample()?,
    };

    let storage = SessionStorage::new(config.session_file(&paths));
    let mut session = SessionStore::new(storage);
    if session.restore_session().is_some() {
        debug!("Restored saved session");
    }

    Ok(AppContext { catalog, session })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Movie,
    Series,
    Book,
    Reel,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => ContentKind::Movie,
            KindArg::Series => ContentKind::Series,
            KindArg::Book => ContentKind::Book,
            KindArg::Reel => ContentKind::Reel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListAction {
    Add,
    Remove,
}

/// Renders a mixed item list as a table for human output.
pub fn content_table(items: &[ContentItem]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Kind").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Genre").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Details").add_attribute(comfy_table::Attribute::Bold),
    ]);

    for item in items {
        table.add_row(vec![
            item.id().to_string(),
            item.kind().to_string(),
            item.title().to_string(),
            CatalogEntry::year(item)
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            item.rating()
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string()),
            item.genre().unwrap_or("-").to_string(),
            item_details(item),
        ]);
    }

    table
}

fn item_details(item: &ContentItem) -> String {
    match item {
        ContentItem::Movie(m) => m.duration.clone(),
        ContentItem::Series(s) => format!("{} episodes, {}", s.episodes, s.status),
        ContentItem::Book(b) => format!("{}, {} pages", b.author, b.pages),
        ContentItem::Reel(r) => format!("by {}, {} views", r.creator, r.views),
    }
}

/// JSON payload for a list of items.
pub fn items_json(items: &[ContentItem]) -> serde_json::Value {
    json!({
        "count": items.len(),
        "items": items,
    })
}

use streamshelf_models::ContentItem;

use crate::catalog::Catalog;

/// Items flagged for promotional display, concatenated in fixed collection
/// order: movies, series, books, reels.
pub fn featured_items(catalog: &Catalog) -> Vec<ContentItem> {
    let mut items = Vec::new();
    items.extend(
        catalog
            .movies
            .iter()
            .filter(|m| m.featured)
            .cloned()
            .map(ContentItem::Movie),
    );
    items.extend(
        catalog
            .series
            .iter()
            .filter(|s| s.featured)
            .cloned()
            .map(ContentItem::Series),
    );
    items.extend(
        catalog
            .books
            .iter()
            .filter(|b| b.featured)
            .cloned()
            .map(ContentItem::Book),
    );
    items.extend(
        catalog
            .reels
            .iter()
            .filter(|r| r.featured)
            .cloned()
            .map(ContentItem::Reel),
    );
    items
}

/// Cyclic cursor over the featured lineup with wraparound in both
/// directions. An empty lineup has no current item and stepping is a no-op.
#[derive(Debug, Clone)]
pub struct FeaturedRotation {
    items: Vec<ContentItem>,
    index: usize,
}

impl FeaturedRotation {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items, index: 0 }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(featured_items(catalog))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&ContentItem> {
        self.items.get(self.index)
    }

    pub fn next_featured(&mut self) -> Option<&ContentItem> {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.current()
    }

    pub fn prev_featured(&mut self) -> Option<&ContentItem> {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamshelf_models::ContentKind;

    fn rotation() -> FeaturedRotation {
        let catalog = Catalog::load_sample().unwrap();
        FeaturedRotation::from_catalog(&catalog)
    }

    #[test]
    fn test_featured_lineup_fixed_collection_order() {
        let catalog = Catalog::load_sample().unwrap();
        let items = featured_items(&catalog);
        // One featured item per sample collection.
        let kinds: Vec<ContentKind> = items.iter().map(|i| i.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ContentKind::Movie,
                ContentKind::Series,
                ContentKind::Book,
                ContentKind::Reel
            ]
        );
        assert!(items.iter().all(|i| i.featured()));
    }

    #[test]
    fn test_rotation_wraps_forward() {
        let mut rotation = rotation();
        let len = rotation.len();
        assert_eq!(rotation.position(), 0);
        for _ in 0..len {
            rotation.next_featured();
        }
        assert_eq!(rotation.position(), 0);
    }

    #[test]
    fn test_rotation_wraps_backward() {
        let mut rotation = rotation();
        let len = rotation.len();
        rotation.prev_featured();
        assert_eq!(rotation.position(), len - 1);
    }

    #[test]
    fn test_empty_rotation() {
        let mut rotation = FeaturedRotation::new(Vec::new());
        assert!(rotation.is_empty());
        assert!(rotation.current().is_none());
        assert!(rotation.next_featured().is_none());
        assert!(rotation.prev_featured().is_none());
    }
}

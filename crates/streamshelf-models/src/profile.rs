use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content_ref::ContentRef;

/// The authenticated session record. Favorites and watch-later are
/// duplicate-free and insertion-ordered; mutation helpers keep them that way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub favorites: Vec<ContentRef>,
    #[serde(default)]
    pub watch_later: Vec<ContentRef>,
    #[serde(default)]
    pub watch_history: Vec<WatchHistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchHistoryEntry {
    pub content: ContentRef,
    pub watched_at: DateTime<Utc>,
    pub progress: u8, // 0-100 percent
}

impl UserProfile {
    pub fn is_favorite(&self, content: ContentRef) -> bool {
        self.favorites.contains(&content)
    }

    pub fn in_watch_later(&self, content: ContentRef) -> bool {
        self.watch_later.contains(&content)
    }

    /// Appends to favorites unless already present. Returns whether the set
    /// changed.
    pub fn add_favorite(&mut self, content: ContentRef) -> bool {
        if self.is_favorite(content) {
            return false;
        }
        self.favorites.push(content);
        true
    }

    pub fn remove_favorite(&mut self, content: ContentRef) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|c| *c != content);
        self.favorites.len() != before
    }

    pub fn add_watch_later(&mut self, content: ContentRef) -> bool {
        if self.in_watch_later(content) {
            return false;
        }
        self.watch_later.push(content);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            avatar: String::new(),
            favorites: Vec::new(),
            watch_later: Vec::new(),
            watch_history: Vec::new(),
        }
    }

    #[test]
    fn test_add_favorite_is_idempotent() {
        let mut p = profile();
        let movie = ContentRef::new(ContentKind::Movie, 1);
        assert!(p.add_favorite(movie));
        assert!(!p.add_favorite(movie));
        assert_eq!(p.favorites, vec![movie]);
    }

    #[test]
    fn test_same_id_different_kind_do_not_collide() {
        let mut p = profile();
        assert!(p.add_favorite(ContentRef::new(ContentKind::Movie, 1)));
        assert!(p.add_favorite(ContentRef::new(ContentKind::Book, 1)));
        assert_eq!(p.favorites.len(), 2);
    }

    #[test]
    fn test_remove_favorite_missing_is_noop() {
        let mut p = profile();
        assert!(!p.remove_favorite(ContentRef::new(ContentKind::Movie, 9)));
        assert!(p.favorites.is_empty());
    }

    #[test]
    fn test_profile_json_round_trip() {
        let mut p = profile();
        p.add_favorite(ContentRef::new(ContentKind::Movie, 3));
        p.watch_history.push(WatchHistoryEntry {
            content: ContentRef::new(ContentKind::Series, 2),
            watched_at: chrono::Utc::now(),
            progress: 75,
        });

        let json = serde_json::to_string(&p).unwrap();
        let restored: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use streamshelf_models::{ContentKind, ContentRef, UserProfile, WatchHistoryEntry};

use crate::error::AuthError;
use crate::storage::SessionStorage;

/// Fixed identity template used by the mock authentication flow. Login and
/// signup overlay the supplied email (and name) on top of this.
pub fn profile_template() -> UserProfile {
    UserProfile {
        id: 1,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face"
            .to_string(),
        favorites: vec![
            ContentRef::new(ContentKind::Movie, 1),
            ContentRef::new(ContentKind::Movie, 3),
        ],
        watch_later: vec![
            ContentRef::new(ContentKind::Movie, 2),
            ContentRef::new(ContentKind::Movie, 4),
        ],
        watch_history: vec![
            WatchHistoryEntry {
                content: ContentRef::new(ContentKind::Movie, 1),
                watched_at: Utc::now() - Duration::days(1),
                progress: 100,
            },
            WatchHistoryEntry {
                content: ContentRef::new(ContentKind::Series, 2),
                watched_at: Utc::now() - Duration::days(2),
                progress: 75,
            },
        ],
    }
}

/// Single authoritative holder of the current identity. Explicitly owned and
/// injectable; callers construct it over a [`SessionStorage`] handle and call
/// [`SessionStore::restore_session`] once at startup.
///
/// Two states: anonymous (no profile) and authenticated. List mutations are
/// silent no-ops while anonymous. Every effective mutation replaces the whole
/// profile value and is persisted before the call returns; mutators hand back
/// a snapshot of the new profile so callers can propagate the change by
/// return value.
pub struct SessionStore {
    storage: SessionStorage,
    current: Option<UserProfile>,
    loading: bool,
}

impl SessionStore {
    pub fn new(storage: SessionStorage) -> Self {
        Self {
            storage,
            current: None,
            loading: true,
        }
    }

    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// True until `restore_session` has run.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reads the durable record once at startup and adopts it if present.
    /// A malformed record has already been discarded by the storage layer,
    /// so this only ever yields a valid profile or the anonymous state.
    pub fn restore_session(&mut self) -> Option<UserProfile> {
        let restored = match self.storage.load() {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Failed to restore session: {}", e);
                None
            }
        };
        self.current = restored;
        self.loading = false;
        self.current.clone()
    }

    /// Mock authentication: any non-empty email/password pair is accepted.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let mut profile = profile_template();
        profile.email = email.to_string();
        info!("Logged in as {}", profile.email);
        Ok(self.adopt(profile))
    }

    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let mut profile = profile_template();
        profile.name = name.to_string();
        profile.email = email.to_string();
        info!("Signed up as {} <{}>", profile.name, profile.email);
        Ok(self.adopt(profile))
    }

    /// Clears the identity from memory and durable storage. Idempotent.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            info!("Logged out");
        }
        if let Err(e) = self.storage.clear() {
            warn!("Failed to clear session record on logout: {}", e);
        }
    }

    /// Adds to favorites. No-op when anonymous or already present.
    pub fn add_to_favorites(&mut self, content: ContentRef) -> Option<UserProfile> {
        self.mutate(|profile| profile.add_favorite(content))
    }

    pub fn remove_from_favorites(&mut self, content: ContentRef) -> Option<UserProfile> {
        self.mutate(|profile| profile.remove_favorite(content))
    }

    /// Adds to watch-later. Duplicate adds are silently ignored.
    pub fn add_to_watch_later(&mut self, content: ContentRef) -> Option<UserProfile> {
        self.mutate(|profile| profile.add_watch_later(content))
    }

    /// Applies `op` to a copy of the current profile and adopts the copy when
    /// it reports a change. Returns the post-mutation snapshot, or None while
    /// anonymous.
    fn mutate<F>(&mut self, op: F) -> Option<UserProfile>
    where
        F: FnOnce(&mut UserProfile) -> bool,
    {
        let mut profile = self.current.clone()?;
        if op(&mut profile) {
            Some(self.adopt(profile))
        } else {
            debug!("List mutation was a no-op");
            self.current.clone()
        }
    }

    fn adopt(&mut self, profile: UserProfile) -> UserProfile {
        if let Err(e) = self.storage.save(&profile) {
            // The session stays usable in memory; only durability is lost.
            warn!("Failed to persist session: {}", e);
        }
        self.current = Some(profile.clone());
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path().join("session.json"));
        (dir, SessionStore::new(storage))
    }

    fn movie(id: u32) -> ContentRef {
        ContentRef::new(ContentKind::Movie, id)
    }

    #[test]
    fn test_login_returns_supplied_email() {
        let (_dir, mut store) = store();
        let profile = store.login("jane@example.com", "secret").unwrap();
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(profile.name, "John Doe");
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_login_empty_fields_rejected() {
        let (_dir, mut store) = store();
        assert_eq!(store.login("", "x"), Err(AuthError::InvalidCredentials));
        assert_eq!(store.login("x", ""), Err(AuthError::InvalidCredentials));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_signup_requires_all_fields() {
        let (_dir, mut store) = store();
        assert_eq!(store.signup("", "a@b.c", "pw"), Err(AuthError::MissingFields));
        assert_eq!(store.signup("Jane", "", "pw"), Err(AuthError::MissingFields));
        assert_eq!(store.signup("Jane", "a@b.c", ""), Err(AuthError::MissingFields));

        let profile = store.signup("Jane", "jane@example.com", "pw").unwrap();
        assert_eq!(profile.name, "Jane");
        assert_eq!(profile.email, "jane@example.com");
    }

    #[test]
    fn test_favorite_add_is_idempotent() {
        let (_dir, mut store) = store();
        store.login("a@b.c", "pw").unwrap();

        let after_first = store.add_to_favorites(movie(42)).unwrap();
        let after_second = store.add_to_favorites(movie(42)).unwrap();
        assert_eq!(after_first.favorites, after_second.favorites);
        assert_eq!(
            after_second.favorites.iter().filter(|c| c.id == 42).count(),
            1
        );
    }

    #[test]
    fn test_watch_later_duplicate_ignored() {
        let (_dir, mut store) = store();
        store.login("a@b.c", "pw").unwrap();

        let before = store.current().unwrap().watch_later.len();
        store.add_to_watch_later(movie(99));
        let after = store.add_to_watch_later(movie(99)).unwrap();
        assert_eq!(after.watch_later.len(), before + 1);
    }

    #[test]
    fn test_mutations_are_noops_while_anonymous() {
        let (_dir, mut store) = store();
        assert!(store.add_to_favorites(movie(1)).is_none());
        assert!(store.remove_from_favorites(movie(1)).is_none());
        assert!(store.add_to_watch_later(movie(1)).is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_remove_favorite_persists() {
        let (dir, mut store) = store();
        store.login("a@b.c", "pw").unwrap();
        let target = store.current().unwrap().favorites[0];
        let after = store.remove_from_favorites(target).unwrap();
        assert!(!after.favorites.contains(&target));

        // A fresh store over the same file sees the removal.
        let storage = SessionStorage::new(dir.path().join("session.json"));
        let mut fresh = SessionStore::new(storage);
        let restored = fresh.restore_session().unwrap();
        assert!(!restored.favorites.contains(&target));
    }

    #[test]
    fn test_restore_round_trip_deep_equal() {
        let (dir, mut store) = store();
        let logged_in = store.login("jane@example.com", "pw").unwrap();
        store.add_to_favorites(movie(7));
        let snapshot = store.current().unwrap().clone();
        assert_ne!(snapshot, logged_in);

        let storage = SessionStorage::new(dir.path().join("session.json"));
        let mut fresh = SessionStore::new(storage);
        assert!(fresh.is_loading());
        let restored = fresh.restore_session().unwrap();
        assert!(!fresh.is_loading());
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_logout_then_restore_is_anonymous() {
        let (dir, mut store) = store();
        store.login("a@b.c", "pw").unwrap();
        store.logout();
        assert!(!store.is_authenticated());
        // Idempotent.
        store.logout();

        let storage = SessionStorage::new(dir.path().join("session.json"));
        let mut fresh = SessionStore::new(storage);
        assert!(fresh.restore_session().is_none());
        assert!(!fresh.is_authenticated());
    }

    #[test]
    fn test_restore_with_no_prior_write_is_anonymous() {
        let (_dir, mut store) = store();
        assert!(store.restore_session().is_none());
        assert!(!store.is_loading());
    }
}

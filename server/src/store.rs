use crate::error::ApiError;
use dashmap::DashMap;
use showcase_core::{BrowsingSession, Catalog};
use std::time::{Duration, Instant};
use uuid::Uuid;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct SessionEntry {
    session: BrowsingSession,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(session: BrowsingSession) -> Self {
        Self {
            session,
            last_seen: Instant::now(),
        }
    }

    fn is_idle(&self, timeout: Duration) -> bool {
        self.last_seen.elapsed() >= timeout
    }
}

/// Live browsing sessions keyed by id. Each session is only ever touched
/// through its own map entry.
///
/// Visitors rarely delete their session, so entries idle for longer than
/// `idle_timeout` are dropped on the next `create` and treated as missing on
/// lookup.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, SessionEntry>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    pub fn create(&self, catalog: &Catalog) -> (Uuid, BrowsingSession) {
        self.evict_idle();

        let id = Uuid::new_v4();
        let session = BrowsingSession::new(catalog);
        self.sessions.insert(id, SessionEntry::new(session.clone()));
        tracing::debug!("Created browsing session {} ({} live)", id, self.len());
        (id, session)
    }

    pub fn get(&self, id: Uuid) -> Result<BrowsingSession, ApiError> {
        self.update(id, |_| Ok(())).map(|((), session)| session)
    }

    /// Applies `f` to the session and returns its result along with a
    /// snapshot of the updated state. Refreshes the idle clock.
    pub fn update<F, R>(&self, id: Uuid, f: F) -> Result<(R, BrowsingSession), ApiError>
    where
        F: FnOnce(&mut BrowsingSession) -> Result<R, ApiError>,
    {
        let mut entry = self
            .sessions
            .get_mut(&id)
            .filter(|entry| !entry.is_idle(self.idle_timeout))
            .ok_or(ApiError::SessionNotFound(id))?;
        let result = f(&mut entry.session)?;
        entry.last_seen = Instant::now();
        Ok((result, entry.session.clone()))
    }

    pub fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::SessionNotFound(id))
    }

    /// Drops every session idle for at least the timeout.
    pub fn evict_idle(&self) {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| !entry.is_idle(self.idle_timeout));
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            tracing::info!("Evicted {} idle browsing sessions", evicted);
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::types::Sector;

    #[test]
    fn test_session_lifecycle() {
        let catalog = Catalog::builtin().unwrap();
        let store = SessionStore::new();
        assert_eq!(store.len(), 0);

        let (id, session) = store.create(&catalog);
        assert_eq!(store.len(), 1);
        assert_eq!(session.visible_ids().len(), 4);

        let (_, updated) = store
            .update(id, |session| {
                session.toggle_sector(&catalog, Sector::Branding);
                Ok(())
            })
            .unwrap();
        assert_eq!(updated.visible_ids(), ["p4"]);
        assert_eq!(store.get(id).unwrap(), updated);

        store.remove(id).unwrap();
        assert!(matches!(store.get(id), Err(ApiError::SessionNotFound(_))));
        assert!(store.remove(id).is_err());
    }

    #[test]
    fn test_failed_update_keeps_state() {
        let catalog = Catalog::builtin().unwrap();
        let store = SessionStore::new();
        let (id, before) = store.create(&catalog);

        let result = store.update(id, |session| {
            session.open_detail(&catalog, "missing")?;
            Ok(())
        });
        assert!(matches!(
            result,
            Err(ApiError::Catalog(showcase_core::CatalogError::ProjectNotFound(_)))
        ));
        assert_eq!(store.get(id).unwrap(), before);
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let catalog = Catalog::builtin().unwrap();
        let store = SessionStore::with_idle_timeout(Duration::from_millis(200));
        let (stale, _) = store.create(&catalog);

        std::thread::sleep(Duration::from_millis(300));
        assert!(matches!(store.get(stale), Err(ApiError::SessionNotFound(_))));
        assert_eq!(store.len(), 1);

        let (fresh, _) = store.create(&catalog);
        assert_eq!(store.len(), 1);
        assert!(store.get(fresh).is_ok());
        assert!(store.remove(stale).is_err());
    }
}

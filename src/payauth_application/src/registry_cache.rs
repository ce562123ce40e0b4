use std::sync::{
    Arc, LazyLock, Weak,
    atomic::{AtomicU32, Ordering},
};

use dashmap::DashMap;
use payauth_core::SessionId;

use crate::registry::DefaultAuthenticatorRegistry;

static SHARED: LazyLock<Arc<RegistryCache>> = LazyLock::new(|| Arc::new(RegistryCache::new()));

/// Process-wide index of live registries by session id.
///
/// Entries are weak: the cache never keeps a registry alive. A registry disappears
/// from lookups as soon as its last strong reference is dropped, and its dead entry
/// is pruned lazily.
#[derive(Debug)]
pub struct RegistryCache {
    entries: DashMap<SessionId, Weak<DefaultAuthenticatorRegistry>>,
    next_session_id: AtomicU32,
}

impl Default for RegistryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_session_id: AtomicU32::new(1),
        }
    }

    /// The instance shared by every host in the process.
    pub fn shared() -> Arc<RegistryCache> {
        Arc::clone(&SHARED)
    }

    /// Next unused session id. Ids start at 1 and are never handed out twice.
    pub fn next_session_id(&self) -> SessionId {
        SessionId::new(self.next_session_id.fetch_add(1, Ordering::Relaxed))
    }

    pub fn register(&self, registry: &Arc<DefaultAuthenticatorRegistry>) {
        let session_id = registry.session_id();
        let previous = self
            .entries
            .insert(session_id, Arc::downgrade(registry));
        if previous.is_some_and(|entry| entry.strong_count() > 0) {
            tracing::warn!(%session_id, "Replaced a live registry with the same session id");
        }
    }

    pub fn lookup(&self, session_id: SessionId) -> Option<Arc<DefaultAuthenticatorRegistry>> {
        let upgraded = self.entries.get(&session_id)?.upgrade();
        if upgraded.is_none() {
            self.entries
                .remove_if(&session_id, |_, entry| entry.strong_count() == 0);
        }
        upgraded
    }

    /// Drop entries whose registry is gone. Returns how many were removed.
    pub fn prune(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.strong_count() > 0);
        before.saturating_sub(self.entries.len())
    }

    /// Number of entries, dead ones included until pruned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

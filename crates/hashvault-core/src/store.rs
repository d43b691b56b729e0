//! Shared ID-to-digest mapping.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Concurrent mapping from submission ID to encoded digest.
///
/// Each entry is written exactly once, by the computation task owning that
/// ID; the store itself does not enforce that discipline. Absence is a
/// normal outcome, covering both IDs that were never allocated and IDs whose
/// computation has not finished yet.
#[derive(Debug, Default)]
pub struct DigestStore {
    inner: RwLock<HashMap<u64, String>>,
}

impl DigestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the digest for `id`.
    pub fn put(&self, id: u64, digest: String) {
        self.inner.write().insert(id, digest);
    }

    /// Returns the digest for `id`, or `None` if no computation has
    /// completed for it. Safe to call concurrently with any number of
    /// `put` calls.
    pub fn get(&self, id: u64) -> Option<String> {
        self.inner.read().get(&id).cloned()
    }

    /// Number of completed digests.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread::scope;

    #[test]
    fn get_on_missing_id_is_none() {
        let store = DigestStore::new();
        assert_eq!(store.get(4), None);
        assert!(store.is_empty());
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = DigestStore::new();
        store.put(1, "digest-one".into());
        store.put(2, "digest-two".into());
        assert_eq!(store.get(2).as_deref(), Some("digest-two"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_writers_to_distinct_keys() {
        const THREADS: u64 = 8;
        const KEYS_PER_THREAD: u64 = 256;

        let store = Arc::new(DigestStore::new());
        scope(|s| {
            for t in 0..THREADS {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    for k in 0..KEYS_PER_THREAD {
                        let id = t * KEYS_PER_THREAD + k;
                        store.put(id, format!("digest-{id}"));
                    }
                });
            }
        });

        assert_eq!(store.len() as u64, THREADS * KEYS_PER_THREAD);
        assert_eq!(store.get(517).as_deref(), Some("digest-517"));
    }
}

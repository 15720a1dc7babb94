// src/favorites/store.rs

use crate::favorites::kv::{KeyValueStore, PersistenceError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Storage key holding the JSON array of favorite listing ids.
pub const FAVORITES_KEY: &str = "estatehub_favorites";

/// Per-browser key, so each visitor keeps their own set.
pub fn session_key(session_id: &str) -> String {
    format!("{FAVORITES_KEY}:{session_id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesEvent {
    Added(String),
    Removed(String),
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&FavoritesEvent)>;

/// The favorite listing ids for one browsing session.
///
/// Built once per session with [`FavoritesStore::hydrate_with_key`] and handed out as
/// an `Rc` so every consumer sees the same set. Each mutation is written back
/// to storage before observers are notified, so a read inside an observer
/// (or right after the call returns) already reflects it.
///
/// Writes replay the mutation against the currently stored set instead of
/// overwriting it, so concurrent sessions over the same key do not drop
/// each other's changes.
pub struct FavoritesStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
    /// Insertion order, no duplicates.
    ids: RefCell<Vec<String>>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_subscription: Cell<u64>,
}

impl FavoritesStore {
    /// Hydrate under the bare [`FAVORITES_KEY`].
    #[cfg(test)]
    pub fn hydrate(storage: Rc<dyn KeyValueStore>) -> Rc<Self> {
        Self::hydrate_with_key(storage, FAVORITES_KEY)
    }

    /// Load the set stored under `key`. Missing or unreadable data starts an
    /// empty set.
    pub fn hydrate_with_key(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Rc<Self> {
        let key = key.into();
        let ids = match load_ids(storage.as_ref(), &key) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "discarding stored favorites");
                Vec::new()
            }
        };

        tracing::debug!(count = ids.len(), "favorites hydrated");

        Rc::new(Self {
            storage,
            key,
            ids: RefCell::new(ids),
            observers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        })
    }

    /// Flip membership. Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        if self.is_favorite(id) {
            self.remove_favorite(id);
            false
        } else {
            self.add_favorite(id);
            true
        }
    }

    /// No-op when already present.
    pub fn add_favorite(&self, id: &str) {
        if self.is_favorite(id) {
            return;
        }
        self.commit(FavoritesEvent::Added(id.to_string()));
    }

    /// No-op when absent.
    pub fn remove_favorite(&self, id: &str) {
        if !self.is_favorite(id) {
            return;
        }
        self.commit(FavoritesEvent::Removed(id.to_string()));
    }

    pub fn clear_all_favorites(&self) {
        self.commit(FavoritesEvent::Cleared);
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.borrow().iter().any(|existing| existing == id)
    }

    pub fn count(&self) -> usize {
        self.ids.borrow().len()
    }

    /// Snapshot in the order ids were added.
    pub fn favorites(&self) -> Vec<String> {
        self.ids.borrow().clone()
    }

    /// Register a callback run after every mutation.
    pub fn subscribe(&self, observer: impl Fn(&FavoritesEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(sub, _)| *sub != id);
        observers.len() != before
    }

    fn commit(&self, event: FavoritesEvent) {
        apply_event(&mut self.ids.borrow_mut(), &event);

        match self.persist(&event) {
            // Picks up whatever other sessions stored in the meantime.
            Ok(stored) => *self.ids.borrow_mut() = stored,
            // The in-memory set stays authoritative for this session.
            Err(e) => tracing::warn!(error = %e, "failed to persist favorites"),
        }

        tracing::debug!(?event, count = self.count(), "favorites changed");

        // Clone the list so observers may subscribe/unsubscribe while running.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        for observer in observers {
            observer(&event);
        }
    }

    /// Apply `event` to the stored set in one read-modify-write and return
    /// the result.
    fn persist(&self, event: &FavoritesEvent) -> Result<Vec<String>, PersistenceError> {
        let mut stored_ids = Vec::new();

        self.storage.update(&self.key, &mut |current: Option<String>| {
            let mut ids = match current.as_deref().map(parse_ids) {
                Some(Ok(ids)) => ids,
                Some(Err(e)) => {
                    tracing::warn!(error = %e, key = %self.key, "overwriting unreadable favorites");
                    Vec::new()
                }
                None => Vec::new(),
            };
            apply_event(&mut ids, event);

            let json = serde_json::Value::from(ids.clone()).to_string();
            stored_ids = ids;
            json
        })?;

        Ok(stored_ids)
    }
}

fn apply_event(ids: &mut Vec<String>, event: &FavoritesEvent) {
    match event {
        FavoritesEvent::Added(id) => {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        FavoritesEvent::Removed(id) => ids.retain(|existing| existing != id),
        FavoritesEvent::Cleared => ids.clear(),
    }
}

fn load_ids(storage: &dyn KeyValueStore, key: &str) -> Result<Vec<String>, PersistenceError> {
    match storage.get(key)? {
        Some(raw) => Ok(parse_ids(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Stored JSON array to ids, duplicates collapsed.
fn parse_ids(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    let stored: Vec<String> = serde_json::from_str(raw)?;

    let mut ids: Vec<String> = Vec::with_capacity(stored.len());
    for id in stored {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::kv::MemoryKvStore;
    use std::collections::HashSet;

    fn fresh() -> (Rc<MemoryKvStore>, Rc<FavoritesStore>) {
        let storage = Rc::new(MemoryKvStore::new());
        let store = FavoritesStore::hydrate(storage.clone());
        (storage, store)
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
            Err(PersistenceError::Read("disk on fire".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::Write("disk on fire".into()))
        }
    }

    #[test]
    fn starts_empty_without_stored_value() {
        let (_, store) = fresh();
        assert_eq!(store.count(), 0);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn double_toggle_restores_membership_and_count() {
        let (_, store) = fresh();
        store.add_favorite("a");
        let count_before = store.count();

        assert!(store.toggle_favorite("b"));
        assert!(store.is_favorite("b"));
        assert!(!store.toggle_favorite("b"));

        assert!(!store.is_favorite("b"));
        assert_eq!(store.count(), count_before);
        assert!(store.is_favorite("a"));
    }

    #[test]
    fn reads_reflect_the_latest_mutation() {
        let (_, store) = fresh();

        store.toggle_favorite("x");
        assert!(store.is_favorite("x"));

        store.remove_favorite("x");
        assert!(!store.is_favorite("x"));

        store.toggle_favorite("y");
        store.toggle_favorite("z");
        store.clear_all_favorites();
        assert!(!store.is_favorite("y"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn remove_absent_is_a_no_op() {
        let (storage, store) = fresh();
        store.remove_favorite("ghost");
        assert_eq!(store.count(), 0);
        // Nothing to flush, so nothing was written.
        assert_eq!(storage.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn every_mutation_is_persisted_as_a_json_array() {
        let (storage, store) = fresh();

        store.toggle_favorite("1");
        store.toggle_favorite("2");
        assert_eq!(
            storage.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["1","2"]"#)
        );

        store.clear_all_favorites();
        assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn rehydrating_reproduces_the_same_set() {
        let (storage, store) = fresh();
        for id in ["3", "1", "2"] {
            store.toggle_favorite(id);
        }

        let rehydrated = FavoritesStore::hydrate(storage.clone());

        let original: HashSet<String> = store.favorites().into_iter().collect();
        let restored: HashSet<String> = rehydrated.favorites().into_iter().collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn corrupt_value_hydrates_as_empty() {
        let storage = Rc::new(MemoryKvStore::with_value(FAVORITES_KEY, "{not json"));
        let store = FavoritesStore::hydrate(storage);
        assert_eq!(store.count(), 0);

        // The store stays usable.
        store.toggle_favorite("a");
        assert!(store.is_favorite("a"));
    }

    #[test]
    fn duplicate_stored_ids_are_collapsed() {
        let storage = Rc::new(MemoryKvStore::with_value(FAVORITES_KEY, r#"["a","b","a"]"#));
        let store = FavoritesStore::hydrate(storage);
        assert_eq!(store.favorites(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn failing_storage_is_not_fatal() {
        let store = FavoritesStore::hydrate(Rc::new(FailingStore));
        assert_eq!(store.count(), 0);

        assert!(store.toggle_favorite("a"));
        assert!(store.is_favorite("a"));
    }

    #[test]
    fn interleaved_sessions_keep_both_changes() {
        let storage = Rc::new(MemoryKvStore::new());
        let first = FavoritesStore::hydrate(storage.clone());
        let second = FavoritesStore::hydrate(storage.clone());

        first.toggle_favorite("1");
        second.toggle_favorite("2");
        assert_eq!(second.favorites(), vec!["1".to_string(), "2".to_string()]);

        let reloaded = FavoritesStore::hydrate(storage);
        assert!(reloaded.is_favorite("1"));
        assert!(reloaded.is_favorite("2"));
    }

    #[test]
    fn keys_are_independent() {
        let storage = Rc::new(MemoryKvStore::new());
        let alice = FavoritesStore::hydrate_with_key(storage.clone(), session_key("alice"));
        let bob = FavoritesStore::hydrate_with_key(storage.clone(), session_key("bob"));

        alice.toggle_favorite("3");
        assert!(!bob.is_favorite("3"));
        assert_eq!(
            storage.get("estatehub_favorites:alice").unwrap().as_deref(),
            Some(r#"["3"]"#)
        );
        assert_eq!(storage.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_value_is_replaced_on_next_write() {
        let storage = Rc::new(MemoryKvStore::with_value(FAVORITES_KEY, "{not json"));
        let store = FavoritesStore::hydrate(storage.clone());

        store.toggle_favorite("a");
        assert_eq!(
            storage.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["a"]"#)
        );
    }

    #[test]
    fn shared_consumers_see_each_others_changes() {
        let (_, store) = fresh();
        let card = Rc::clone(&store);
        let header = Rc::clone(&store);

        let seen_counts = Rc::new(RefCell::new(Vec::new()));
        {
            let header = Rc::clone(&header);
            let seen_counts = Rc::clone(&seen_counts);
            store.subscribe(move |_| seen_counts.borrow_mut().push(header.count()));
        }

        card.toggle_favorite("7");
        assert!(header.is_favorite("7"));

        card.toggle_favorite("8");
        card.toggle_favorite("7");

        assert_eq!(*seen_counts.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn observers_receive_events_until_unsubscribed() {
        let (_, store) = fresh();
        let events = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&events);
        let sub = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.toggle_favorite("a");
        store.remove_favorite("a");
        store.clear_all_favorites();

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.toggle_favorite("b");

        assert_eq!(
            *events.borrow(),
            vec![
                FavoritesEvent::Added("a".into()),
                FavoritesEvent::Removed("a".into()),
                FavoritesEvent::Cleared,
            ]
        );
    }
}

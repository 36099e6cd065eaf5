//! In-memory implementation of [`EntityStore`].

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use homehub_app::ports::EntityStore;
use homehub_domain::error::{DuplicateKeyError, NotFoundError};
use homehub_domain::key::Keyed;

struct Inner<V: Keyed> {
    next_seq: u64,
    /// Key to insertion sequence number.
    index: HashMap<V::Key, u64>,
    /// Values ordered by insertion sequence number.
    entries: BTreeMap<u64, V>,
}

impl<V: Keyed> Default for Inner<V> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            index: HashMap::new(),
            entries: BTreeMap::new(),
        }
    }
}

/// Insertion-ordered store for one entity kind, held entirely in memory.
///
/// Reads share the lock, writes take it exclusively. A replaced value keeps
/// the sequence number of the value it replaces, so updates never move an
/// entry in [`EntityStore::list`].
pub struct InMemoryStore<V: Keyed> {
    inner: RwLock<Inner<V>>,
}

impl<V: Keyed> InMemoryStore<V> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl<V: Keyed> Default for InMemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> EntityStore<V> for InMemoryStore<V>
where
    V: Keyed + Clone + Send + Sync,
{
    fn create(&self, value: V) -> Result<V, DuplicateKeyError> {
        let key = value.key();
        let mut inner = self.inner.write();
        if inner.index.contains_key(&key) {
            return Err(DuplicateKeyError::for_key::<V>(&key));
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        tracing::trace!(kind = %V::KIND, %key, seq, "insert");
        inner.index.insert(key, seq);
        inner.entries.insert(seq, value.clone());
        Ok(value)
    }

    fn read(&self, key: &V::Key) -> Result<V, NotFoundError> {
        let inner = self.inner.read();
        inner
            .index
            .get(key)
            .and_then(|seq| inner.entries.get(seq))
            .cloned()
            .ok_or_else(|| NotFoundError::for_key::<V>(key))
    }

    fn update(&self, value: V) -> Result<V, NotFoundError> {
        let key = value.key();
        let mut inner = self.inner.write();
        let Some(&seq) = inner.index.get(&key) else {
            return Err(NotFoundError::for_key::<V>(&key));
        };
        inner.entries.insert(seq, value.clone());
        Ok(value)
    }

    fn delete(&self, key: &V::Key) -> Result<V, NotFoundError> {
        let mut inner = self.inner.write();
        inner
            .index
            .remove(key)
            .and_then(|seq| inner.entries.remove(&seq))
            .ok_or_else(|| NotFoundError::for_key::<V>(key))
    }

    fn list(&self) -> Vec<V> {
        self.inner.read().entries.values().cloned().collect()
    }

    fn contains(&self, key: &V::Key) -> bool {
        self.inner.read().index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.inner.read().entries.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use homehub_domain::house::House;
    use homehub_domain::key::{EntityKind, HouseKey, RoomKey};
    use homehub_domain::room::Room;

    use super::*;

    fn house(name: &str) -> House {
        House::builder().name(name).build().unwrap()
    }

    fn room(house_name: &str, name: &str, floor: i64) -> Room {
        Room::builder()
            .house_name(house_name)
            .name(name)
            .floor(floor)
            .size("Medium")
            .build()
            .unwrap()
    }

    #[test]
    fn should_return_stored_value_when_created() {
        let store = InMemoryStore::new();
        let created = store.create(house("Smart Home")).unwrap();

        assert_eq!(created, house("Smart Home"));
        assert_eq!(store.read(&HouseKey::new("Smart Home")).unwrap(), created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_reject_duplicate_and_keep_original() {
        let store = InMemoryStore::new();
        store.create(room("Smart Home", "Kitchen", 0)).unwrap();

        let err = store.create(room("Smart Home", "Kitchen", 3)).unwrap_err();
        assert_eq!(err.entity, EntityKind::Room);
        assert_eq!(err.key, "Smart Home/Kitchen");

        let stored = store.read(&RoomKey::new("Smart Home", "Kitchen")).unwrap();
        assert_eq!(stored.floor, 0);
    }

    #[test]
    fn should_return_not_found_when_key_missing() {
        let store: InMemoryStore<House> = InMemoryStore::new();
        let err = store.read(&HouseKey::new("Nowhere")).unwrap_err();
        assert_eq!(err.entity, EntityKind::House);
        assert_eq!(err.key, "Nowhere");
        assert!(store.update(house("Nowhere")).is_err());
        assert!(store.delete(&HouseKey::new("Nowhere")).is_err());
    }

    #[test]
    fn should_list_in_insertion_order() {
        let store = InMemoryStore::new();
        for name in ["Cabin", "Apartment", "Beach House"] {
            store.create(house(name)).unwrap();
        }

        let names: Vec<String> = store.list().into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["Cabin", "Apartment", "Beach House"]);
    }

    #[test]
    fn should_keep_position_when_updated() {
        let store = InMemoryStore::new();
        store.create(room("Smart Home", "Kitchen", 0)).unwrap();
        store.create(room("Smart Home", "Attic", 2)).unwrap();

        store.update(room("Smart Home", "Kitchen", 1)).unwrap();

        let rooms = store.list();
        assert_eq!(rooms[0].name, "Kitchen");
        assert_eq!(rooms[0].floor, 1);
        assert_eq!(rooms[1].name, "Attic");
    }

    #[test]
    fn should_append_when_recreated_after_delete() {
        let store = InMemoryStore::new();
        store.create(house("Smart Home")).unwrap();
        store.create(house("Cabin")).unwrap();

        let removed = store.delete(&HouseKey::new("Smart Home")).unwrap();
        assert_eq!(removed.name, "Smart Home");
        assert!(!store.contains(&HouseKey::new("Smart Home")));
        assert!(store.read(&HouseKey::new("Smart Home")).is_err());

        store.create(house("Smart Home")).unwrap();
        let names: Vec<String> = store.list().into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["Cabin", "Smart Home"]);
    }

    #[test]
    fn should_hand_out_snapshots() {
        let store = InMemoryStore::new();
        store.create(room("Smart Home", "Kitchen", 0)).unwrap();

        let mut snapshot = store.read(&RoomKey::new("Smart Home", "Kitchen")).unwrap();
        snapshot.floor = 9;

        let stored = store.read(&RoomKey::new("Smart Home", "Kitchen")).unwrap();
        assert_eq!(stored.floor, 0);
    }

    #[test]
    fn should_accept_exactly_one_of_concurrent_duplicate_creates() {
        let store = Arc::new(InMemoryStore::new());

        let successes: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || store.create(house("Smart Home")).is_ok())
                })
                .collect();
            handles
                .into_iter()
                .map(|h| usize::from(h.join().unwrap()))
                .sum()
        });

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_keep_every_distinct_key_under_concurrent_creates() {
        let store = Arc::new(InMemoryStore::new());

        thread::scope(|scope| {
            for i in 0..8 {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    for j in 0..25 {
                        store.create(house(&format!("house-{i}-{j}"))).unwrap();
                    }
                });
            }
        });

        assert_eq!(store.len(), 200);
        assert_eq!(store.list().len(), 200);
    }
}

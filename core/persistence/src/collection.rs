//! FILENAME: core/persistence/src/collection.rs
//! PURPOSE: A record collection mirrored to one storage key.
//! CONTEXT: Every mutation rewrites the whole collection. Both stores are
//! thin typed layers over this.

use std::collections::HashSet;

use records::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::Storage;
use crate::PersistenceError;

/// A record type that can live in a `Collection`.
pub trait StoredRecord: Serialize + DeserializeOwned + Clone {
    /// Storage key and the name used in error messages.
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;
}

impl StoredRecord for records::Employee {
    const COLLECTION: &'static str = "employees";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl StoredRecord for records::AttendanceRecord {
    const COLLECTION: &'static str = "attendance";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug)]
pub struct Collection<T, S> {
    items: Vec<T>,
    storage: S,
}

impl<T: StoredRecord, S: Storage> Collection<T, S> {
    /// Starts empty without touching `storage`; the first mutation writes.
    pub fn empty(storage: S) -> Self {
        Collection {
            items: Vec::new(),
            storage,
        }
    }

    /// Reads the stored collection. A missing key falls back to `seed`,
    /// which is written back immediately.
    pub fn load_or_seed(storage: S, seed: Vec<T>) -> Result<Self, PersistenceError> {
        match storage.get(T::COLLECTION)? {
            Some(text) => {
                let items = decode::<T>(&text)?;
                Ok(Collection { items, storage })
            }
            None => Self::replace(storage, seed),
        }
    }

    /// Overwrites whatever is stored with `items`.
    pub fn replace(mut storage: S, items: Vec<T>) -> Result<Self, PersistenceError> {
        check_unique(&items)?;
        write(&mut storage, &items)?;
        Ok(Collection { items, storage })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn find(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn position(&self, id: &RecordId) -> Result<usize, PersistenceError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| PersistenceError::NotFound {
                collection: T::COLLECTION,
                id: id.to_string(),
            })
    }

    pub fn push(&mut self, item: T) -> Result<(), PersistenceError> {
        if self.find(item.id()).is_some() {
            return Err(PersistenceError::DuplicateId {
                collection: T::COLLECTION,
                id: item.id().to_string(),
            });
        }
        let mut next = self.items.clone();
        next.push(item);
        self.commit(next)
    }

    /// Applies `edit` to the record with `id` and persists. `edit` may
    /// reject the change; nothing is written then.
    pub fn modify<F>(&mut self, id: &RecordId, edit: F) -> Result<T, PersistenceError>
    where
        F: FnOnce(&T) -> Result<T, PersistenceError>,
    {
        let pos = self.position(id)?;
        let updated = edit(&self.items[pos])?;
        let mut next = self.items.clone();
        next[pos] = updated.clone();
        self.commit(next)?;
        Ok(updated)
    }

    pub fn remove(&mut self, id: &RecordId) -> Result<T, PersistenceError> {
        let pos = self.position(id)?;
        let mut next = self.items.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        Ok(removed)
    }

    /// In-memory items only change once `next` is stored.
    fn commit(&mut self, next: Vec<T>) -> Result<(), PersistenceError> {
        write(&mut self.storage, &next)?;
        self.items = next;
        Ok(())
    }
}

fn write<T: StoredRecord, S: Storage>(storage: &mut S, items: &[T]) -> Result<(), PersistenceError> {
    let text = serde_json::to_string(items)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;
    storage.set(T::COLLECTION, &text)
}

fn decode<T: StoredRecord>(text: &str) -> Result<Vec<T>, PersistenceError> {
    let items: Vec<T> = serde_json::from_str(text)
        .map_err(|e| PersistenceError::InvalidFormat(format!("{}: {}", T::COLLECTION, e)))?;
    check_unique(&items)?;
    Ok(items)
}

fn check_unique<T: StoredRecord>(items: &[T]) -> Result<(), PersistenceError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(PersistenceError::InvalidFormat(format!(
                "duplicate {} id {}",
                T::COLLECTION,
                item.id()
            )));
        }
    }
    Ok(())
}

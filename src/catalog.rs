// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("item not found")]
    NotFound,
    #[error("item already exists")]
    AlreadyExists,
}

/// A named, priced entity. Both fields are always set together; a key that
/// exists in the catalog always maps to a fully populated record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemRecord {
    pub name: String,
    pub price: f64,
}

/// In-memory id -> item mapping. Keys are numeric-looking but stored as
/// strings so the table round-trips through JSON unchanged.
#[derive(Default, Debug)]
pub struct CatalogStore {
    items: HashMap<String, ItemRecord>,
}

impl CatalogStore {
    pub fn from_map(items: HashMap<String, ItemRecord>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &HashMap<String, ItemRecord> {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&ItemRecord, StoreError> {
        self.items.get(id).ok_or(StoreError::NotFound)
    }

    /// Insert a new item. Existing ids are never overwritten here.
    pub fn insert(&mut self, id: String, record: ItemRecord) -> Result<(), StoreError> {
        if self.items.contains_key(&id) {
            return Err(StoreError::AlreadyExists);
        }
        self.items.insert(id, record);
        Ok(())
    }

    /// Wholesale replacement of an existing record. No upsert: an absent id
    /// is an error and the catalog is left untouched.
    pub fn replace(&mut self, id: &str, record: ItemRecord) -> Result<(), StoreError> {
        match self.items.get_mut(id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Remove and return the record for `id`.
    pub fn remove(&mut self, id: &str) -> Result<ItemRecord, StoreError> {
        self.items.remove(id).ok_or(StoreError::NotFound)
    }
}

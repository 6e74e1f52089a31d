// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::ItemRecord;

/// Item id as it arrives in a POST body. Clients send either a JSON integer
/// or a string; both canonicalize to the string key the catalog uses.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ItemKey {
    Int(i64),
    Text(String),
}

impl ItemKey {
    pub fn into_key(self) -> String {
        match self {
            ItemKey::Int(n) => n.to_string(),
            ItemKey::Text(s) => s,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CreateItemRequest {
    pub id: ItemKey,
    pub name: String,
    pub price: f64,
}

#[derive(Deserialize, Debug)]
pub struct UpdateItemRequest {
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, Debug)]
pub struct CatalogResponse {
    pub catalog: HashMap<String, ItemRecord>,
}

#[derive(Serialize, Debug)]
pub struct ItemResponse {
    pub item: ItemRecord,
}

/// Shared shape of POST/PUT/DELETE success bodies.
#[derive(Serialize, Debug)]
pub struct MutationResponse {
    pub message: &'static str,
    pub item: ItemRecord,
}

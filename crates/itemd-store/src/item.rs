// ABOUTME: The Item record, the sole entity managed by itemd.
// ABOUTME: Ids are assigned by the store at insert time and never change afterward.

use serde::{Deserialize, Serialize};

/// A persisted item record. `id` is assigned by the store on insert and is
/// immutable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

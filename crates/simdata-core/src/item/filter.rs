//! Domain predicates for selecting trinket records.

use std::collections::HashSet;

use super::record::ItemRecord;

/// Inventory slot value of the trinket accessory slot.
pub const TRINKET_INV_TYPE: i64 = 12;

/// Lowest accepted quality tier (rare).
pub const MIN_QUALITY: i64 = 3;

/// Lowest accepted item level: normal dungeon items at character level 50.
pub const MIN_ITEM_LEVEL: i64 = 155;

/// First character level of the current expansion (the last possible level
/// of the previous one).
pub const MIN_REQUIRED_LEVEL: i64 = 50;

/// Explicit overrides that bypass the threshold predicates entirely.
/// Matches by numeric identifier or by exact name.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    ids: HashSet<i64>,
    names: HashSet<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.ids.insert(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn contains(&self, item: &ItemRecord) -> bool {
        item.id().is_some_and(|id| self.ids.contains(&id))
            || item.name().is_some_and(|name| self.names.contains(name))
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.names.is_empty()
    }
}

/// Selects trinket records worth carrying into the merged artifact.
#[derive(Debug, Clone, Default)]
pub struct TrinketFilter {
    allow_list: AllowList,
}

impl TrinketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_list(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    /// Whether a record qualifies for the artifact.
    ///
    /// The allow-list disjunct spans the whole conjunction: an allow-listed
    /// record qualifies even if it is not a trinket at all.
    pub fn qualifies(&self, item: &ItemRecord) -> bool {
        (self.is_trinket(item) && self.is_min_quality(item) && self.is_min_ilevel(item))
            || self.allow_list.contains(item)
    }

    pub fn filter(&self, records: Vec<ItemRecord>) -> Vec<ItemRecord> {
        records
            .into_iter()
            .filter(|item| self.qualifies(item))
            .collect()
    }

    pub fn is_trinket(&self, item: &ItemRecord) -> bool {
        item.inv_type() == Some(TRINKET_INV_TYPE)
    }

    pub fn is_min_quality(&self, item: &ItemRecord) -> bool {
        item.quality().is_some_and(|quality| quality >= MIN_QUALITY)
    }

    pub fn is_min_ilevel(&self, item: &ItemRecord) -> bool {
        item.ilevel().is_some_and(|ilevel| ilevel >= MIN_ITEM_LEVEL)
    }

    /// Not part of [`qualifies`](Self::qualifies): at least one trinket
    /// (Unbound Changeling) is available at character level 1.
    pub fn is_min_req_level(&self, item: &ItemRecord) -> bool {
        item.req_level().is_some_and(|level| level >= MIN_REQUIRED_LEVEL)
    }
}

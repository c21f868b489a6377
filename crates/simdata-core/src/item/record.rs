//! Item records as decoded from one locale's table dump.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The attribute names a merged record carries, in output order. Everything
/// else the table dump contains is dropped during projection.
pub const ITEM_KEYS: [&str; 34] = [
    "id",
    "race_mask",
    "desc",
    "name",
    "duration",
    "bag_family",
    "ranged_mod_range",
    "ilevel",
    "class_mask",
    "id_expansion",
    "req_level",
    "inv_type",
    "quality",
    "translations",
    "stat_alloc_1",
    "stat_type_1",
    "stat_alloc_2",
    "stat_type_2",
    "stat_alloc_3",
    "stat_type_3",
    "stat_alloc_4",
    "stat_type_4",
    "stat_alloc_5",
    "stat_type_5",
    "stat_alloc_6",
    "stat_type_6",
    "stat_alloc_7",
    "stat_type_7",
    "stat_alloc_8",
    "stat_type_8",
    "stat_alloc_9",
    "stat_type_9",
    "stat_alloc_10",
    "stat_type_10",
];

/// One decoded item row: a JSON object with typed accessors for the fields
/// the filter and merge passes inspect. Exists only in memory during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord(Map<String, Value>);

impl ItemRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<i64> {
        self.int("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name")?.as_str()
    }

    pub fn inv_type(&self) -> Option<i64> {
        self.int("inv_type")
    }

    pub fn quality(&self) -> Option<i64> {
        self.int("quality")
    }

    pub fn ilevel(&self) -> Option<i64> {
        self.int("ilevel")
    }

    pub fn req_level(&self) -> Option<i64> {
        self.int("req_level")
    }

    /// Project the record through `keys`, yielding a JSON object with
    /// exactly that key set in exactly that order. Keys the record does not
    /// carry come out as `null`.
    pub fn project(&self, keys: &[&str]) -> Map<String, Value> {
        let mut projected = Map::with_capacity(keys.len());
        for &key in keys {
            let value = self.0.get(key).cloned().unwrap_or(Value::Null);
            projected.insert(key.to_string(), value);
        }
        projected
    }

    fn int(&self, key: &str) -> Option<i64> {
        self.0.get(key)?.as_i64()
    }
}

impl From<Map<String, Value>> for ItemRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Load one compiled table dump (a JSON array of objects) from disk.
///
/// A missing file is reported as [`Error::CompiledTableMissing`]; that is
/// the fatal downstream symptom of an earlier skipped extraction.
pub fn load_records(path: &Path) -> Result<Vec<ItemRecord>> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::CompiledTableMissing {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    let rows: Vec<Map<String, Value>> = serde_json::from_slice(&bytes)?;
    Ok(rows.into_iter().map(ItemRecord::new).collect())
}

//! Multi-locale merge of filtered item records.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::item::{ITEM_KEYS, ItemRecord};
use crate::locale::Locale;

/// Key of the per-record locale → name mapping.
pub const TRANSLATIONS_KEY: &str = "translations";

/// A merged, locale-agnostic record: the projected attribute set of one
/// item plus its accumulated name translations.
pub type MergedRecord = Map<String, Value>;

/// Merge per-locale filtered record sets into one locale-agnostic set.
///
/// The first input locale seeds the output: each of its records is
/// projected through [`ITEM_KEYS`] and gets a `translations` object holding
/// its own name under its own locale key. Every later locale only enriches:
/// records matched by identifier contribute their name under that locale's
/// key, and records whose identifier is unknown to the seed set are dropped.
///
/// Deterministic for a fixed input ordering; no records are created after
/// seeding.
pub fn merge_locales(inputs: &[(Locale, Vec<ItemRecord>)]) -> Vec<MergedRecord> {
    let mut merged: Vec<MergedRecord> = Vec::new();
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();

    let mut locales = inputs.iter();

    if let Some((seed_locale, records)) = locales.next() {
        for record in records {
            let mut fields = record.project(&ITEM_KEYS);
            let mut translations = Map::new();
            if let Some(name) = record.name() {
                translations.insert(seed_locale.as_str().to_string(), Value::String(name.into()));
            }
            // replaces the null placeholder projected for the key,
            // preserving its position
            fields.insert(TRANSLATIONS_KEY.to_string(), Value::Object(translations));

            if let Some(id) = record.id() {
                index_by_id.insert(id, merged.len());
            }
            merged.push(fields);
        }
    }

    for (locale, records) in locales {
        for record in records {
            let Some(id) = record.id() else { continue };
            let Some(&index) = index_by_id.get(&id) else {
                // not in the seed locale's set: dropped from enrichment
                continue;
            };
            if let Some(name) = record.name()
                && let Some(Value::Object(translations)) = merged[index].get_mut(TRANSLATIONS_KEY)
            {
                translations.insert(locale.as_str().to_string(), Value::String(name.into()));
            }
        }
    }

    merged
}

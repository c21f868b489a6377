//! Item records, filter predicates, and the output attribute allow-list.

mod filter;
mod record;

pub use filter::{
    AllowList, MIN_ITEM_LEVEL, MIN_QUALITY, MIN_REQUIRED_LEVEL, TRINKET_INV_TYPE, TrinketFilter,
};
pub use record::{ITEM_KEYS, ItemRecord, load_records};

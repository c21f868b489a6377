//! Content-origin tags for items.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Where an item drops from. Used downstream to classify filtered items;
/// the serialized form is the human-readable label (note the spaces).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize,
    Deserialize,
)]
pub enum Source {
    Dungeon,
    Profession,
    #[strum(serialize = "PvP")]
    #[serde(rename = "PvP")]
    PvP,
    Raid,
    #[strum(serialize = "World Boss")]
    #[serde(rename = "World Boss")]
    WorldBoss,
    #[strum(serialize = "World Drop")]
    #[serde(rename = "World Drop")]
    WorldDrop,
    #[strum(serialize = "World Quest")]
    #[serde(rename = "World Quest")]
    WorldQuest,
}

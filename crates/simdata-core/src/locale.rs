//! The fixed set of game client locales.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// A regional/language variant of the distributed game content.
///
/// The variant order is the canonical processing order: `EnUs` comes first
/// and acts as both the version-detection locale and the seed locale for
/// translation merging.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize,
    Deserialize,
)]
pub enum Locale {
    #[strum(serialize = "en_US")]
    #[serde(rename = "en_US")]
    EnUs,
    #[strum(serialize = "ko_KR")]
    #[serde(rename = "ko_KR")]
    KoKr,
    #[strum(serialize = "fr_FR")]
    #[serde(rename = "fr_FR")]
    FrFr,
    #[strum(serialize = "de_DE")]
    #[serde(rename = "de_DE")]
    DeDe,
    #[strum(serialize = "zh_CN")]
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[strum(serialize = "es_ES")]
    #[serde(rename = "es_ES")]
    EsEs,
    #[strum(serialize = "ru_RU")]
    #[serde(rename = "ru_RU")]
    RuRu,
    #[strum(serialize = "it_IT")]
    #[serde(rename = "it_IT")]
    ItIt,
    #[strum(serialize = "pt_PT")]
    #[serde(rename = "pt_PT")]
    PtPt,
}

impl Locale {
    /// All locales in processing order.
    pub const ALL: [Locale; 9] = [
        Locale::EnUs,
        Locale::KoKr,
        Locale::FrFr,
        Locale::DeDe,
        Locale::ZhCn,
        Locale::EsEs,
        Locale::RuRu,
        Locale::ItIt,
        Locale::PtPt,
    ];

    /// The locale that seeds the merged record set and whose fetched
    /// directory is used for game version detection.
    pub const SEED: Locale = Locale::ALL[0];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

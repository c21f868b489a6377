//! Core logic for refreshing the simulation data files.
//!
//! The pipeline has two sequential stages, each driving an external
//! SimulationCraft tool per locale:
//!
//! - [`fetch`] pulls per-locale game content from the CDN via
//!   `casc_extract.py`.
//! - [`extract`] converts db2 tables to JSON via `dbc_extract.py` and hands
//!   out [`extract::CompiledTable`] handles.
//!
//! [`trinkets`] wires both stages together with the [`item`] filter and the
//! [`merge`] pass to produce the multi-locale trinket artifact.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod item;
pub mod locale;
pub mod merge;
pub mod process;
pub mod source;
pub mod trinkets;

pub use config::{Branch, DATA_PATH, RefreshConfig};
pub use error::{Error, Result};
pub use extract::{CompiledTable, extract_tables};
pub use fetch::{FetchReport, detect_game_version, fetch_all};
pub use item::{AllowList, ITEM_KEYS, ItemRecord, TrinketFilter, load_records};
pub use locale::Locale;
pub use merge::{MergedRecord, TRANSLATIONS_KEY, merge_locales};
pub use process::{BufferSink, CapturedOutput, LineSink, ToolCommand, TracingSink, find_python};
pub use source::Source;
pub use trinkets::{TRINKET_TABLES, update_trinkets};

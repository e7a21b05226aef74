use once_cell::sync::Lazy;

pub const DEFAULT_OUTPUT_FILE: &str = "items_data.json";

pub const HTTP_TIMEOUT_SECONDS: u64 = 10;
pub const HTTP_CONNECT_TIMEOUT: u64 = 10;
pub const MAX_FETCH_ATTEMPTS: u32 = 3;
pub const RETRY_BACKOFF_BASE: f32 = 2.0;

// Pauses between upstream requests so we do not hammer the public API.
pub const CATEGORY_PAUSE_MS: u64 = 100;
pub const ITEM_PAUSE_MS: u64 = 200;

const BASE_API_URL: &str = "https://pokeapi.co/api/v2";

pub static CATEGORY_INDEX_URL: Lazy<String> =
    Lazy::new(|| format!("{}/item-category", BASE_API_URL));

/// Must stay at 1 for compatibility with the app's bundled reader.
pub const SCHEMA_VERSION: u32 = 1;

pub const LANG_JA: &str = "ja";
pub const LANG_EN: &str = "en";

pub const SAMPLE_NAMES_PER_CATEGORY: usize = 5;

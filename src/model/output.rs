use crate::config;
use serde::{Deserialize, Serialize};

/// One deduplicated item as the app consumes it. Field names on the wire
/// are camelCase (`nameJa`, `spriteUrl`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub name_ja: String,
    pub category: String,
    pub description: String,
    pub description_ja: String,
    pub sprite_url: String,
    pub cost: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItemsDocument {
    pub schema_version: u32,
    pub items: Vec<ItemRecord>,
}

impl ItemsDocument {
    /// Wraps the aggregated records, sorted ascending by id. The sort is
    /// stable, so records sharing an id keep their first-seen order.
    pub fn new(mut items: Vec<ItemRecord>) -> Self {
        items.sort_by_key(|record| record.id);
        ItemsDocument {
            schema_version: config::SCHEMA_VERSION,
            items,
        }
    }
}

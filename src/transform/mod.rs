use crate::api::model::{EffectEntry, FlavorTextEntry, ItemDetail, LocalizedName};
use crate::config;
use crate::model::output::ItemRecord;

/// First localized name matching `lang`, empty string if none.
pub fn localized_name(names: &[LocalizedName], lang: &str) -> String {
    names
        .iter()
        .find(|entry| entry.language.name == lang)
        .map(|entry| entry.name.clone())
        .unwrap_or_default()
}

/// First effect entry matching `lang`, preferring the short effect and
/// falling back to the full effect text when no short form exists.
pub fn localized_effect(entries: &[EffectEntry], lang: &str) -> String {
    entries
        .iter()
        .find(|entry| entry.language.name == lang)
        .map(|entry| {
            entry
                .short_effect
                .clone()
                .unwrap_or_else(|| entry.effect.clone())
        })
        .unwrap_or_default()
}

pub fn localized_flavor_text(entries: &[FlavorTextEntry], lang: &str) -> String {
    entries
        .iter()
        .find(|entry| entry.language.name == lang)
        .map(|entry| entry.text.clone())
        .unwrap_or_default()
}

fn description_for(detail: &ItemDetail, lang: &str) -> String {
    let effect = localized_effect(&detail.effect_entries, lang);
    if effect.is_empty() {
        localized_flavor_text(&detail.flavor_text_entries, lang)
    } else {
        effect
    }
}

/// Builds the persisted record for one item. `canonical_name` is the name
/// the category listing carried (the dedup key); `category_name` is the
/// category under which the item was first encountered.
pub fn build_record(detail: &ItemDetail, canonical_name: &str, category_name: &str) -> ItemRecord {
    ItemRecord {
        id: detail.id,
        name: canonical_name.to_string(),
        name_ja: localized_name(&detail.names, config::LANG_JA),
        category: category_name.to_string(),
        description: description_for(detail, config::LANG_EN),
        description_ja: description_for(detail, config::LANG_JA),
        sprite_url: detail.sprites.default_sprite.clone().unwrap_or_default(),
        cost: detail.cost,
    }
}

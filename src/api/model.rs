use serde::Deserialize;

/// A `{name, url}` pair as the API embeds it in index and category
/// responses. The url is absolute.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NamedRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ResourceIndex {
    #[serde(default)]
    pub results: Vec<NamedRef>,
}

/// Category detail. Some categories carry no `items` field at all;
/// they simply contribute nothing.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CategoryDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<NamedRef>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ItemDetail {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LanguageRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LocalizedName {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub language: LanguageRef,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: Option<String>,
    #[serde(default)]
    pub language: LanguageRef,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FlavorTextEntry {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: LanguageRef,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Sprites {
    #[serde(rename = "default")]
    pub default_sprite: Option<String>,
}

use item_update::api::fetchers::fetch_categories;
use item_update::api::model::{CategoryDetail, ItemDetail, LanguageRef, LocalizedName, NamedRef, ResourceIndex};
use item_update::api::ItemSource;
use item_update::core::aggregate::aggregate_items;
use item_update::core::processor;
use item_update::core::stats::CategoryStats;
use item_update::error::{AppError, AppResult};
use item_update::io;
use item_update::model::output::ItemsDocument;
use std::collections::HashMap;

/// Canned API: detail lookups go through the same urls the index and
/// category listings carry; a url absent from the map fails like an
/// exhausted retry budget.
#[derive(Default)]
struct StubSource {
    index: Option<ResourceIndex>,
    categories: HashMap<String, CategoryDetail>,
    items: HashMap<String, ItemDetail>,
}

impl ItemSource for StubSource {
    async fn category_index(&self) -> AppResult<ResourceIndex> {
        self.index
            .clone()
            .ok_or_else(|| AppError::Unexpected("index unreachable".to_string()))
    }

    async fn category_detail(&self, url: &str) -> AppResult<CategoryDetail> {
        self.categories
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::Unexpected(format!("no category at {}", url)))
    }

    async fn item_detail(&self, url: &str) -> AppResult<ItemDetail> {
        self.items
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::Unexpected(format!("no item at {}", url)))
    }
}

fn item_url(name: &str) -> String {
    format!("stub://item/{}", name)
}

fn category_url(name: &str) -> String {
    format!("stub://category/{}", name)
}

fn item_ref(name: &str) -> NamedRef {
    NamedRef {
        name: name.to_string(),
        url: item_url(name),
    }
}

fn category(name: &str, item_names: &[&str]) -> CategoryDetail {
    CategoryDetail {
        name: name.to_string(),
        items: item_names.iter().map(|n| item_ref(n)).collect(),
    }
}

fn detail(id: i64, name: &str, name_ja: &str) -> ItemDetail {
    ItemDetail {
        id,
        name: name.to_string(),
        names: vec![LocalizedName {
            name: name_ja.to_string(),
            language: LanguageRef {
                name: "ja".to_string(),
            },
        }],
        ..Default::default()
    }
}

fn with_items(details: Vec<ItemDetail>) -> StubSource {
    let items = details
        .into_iter()
        .map(|d| (item_url(&d.name), d))
        .collect();
    StubSource {
        items,
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
async fn shared_item_recorded_once_under_first_seen_category() {
    let source = with_items(vec![
        detail(3, "a", "あ"),
        detail(1, "b", "い"),
        detail(2, "c", "う"),
    ]);
    let categories = vec![category("cat-a", &["a", "b"]), category("cat-b", &["b", "c"])];
    let mut stats = CategoryStats::default();

    let records = aggregate_items(&source, &categories, &mut stats).await;

    assert_eq!(records.len(), 3);
    let b = records.iter().find(|r| r.name == "b").unwrap();
    assert_eq!(b.category, "cat-a");
    assert_eq!(stats.ok, 3);
    assert_eq!(stats.skip_or_dup, 1);
}

#[tokio::test(start_paused = true)]
async fn failed_item_detail_drops_only_that_item() {
    // "b" is missing from the stub, as if its retries were exhausted.
    let source = with_items(vec![detail(1, "a", ""), detail(3, "c", "")]);
    let categories = vec![category("medicine", &["a", "b", "c"])];
    let mut stats = CategoryStats::default();

    let records = aggregate_items(&source, &categories, &mut stats).await;

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
    assert_eq!(stats.fail, 1);
}

#[tokio::test(start_paused = true)]
async fn category_without_items_contributes_nothing() {
    let source = with_items(vec![detail(1, "a", "")]);
    let categories = vec![
        CategoryDetail {
            name: "empty-cat".to_string(),
            items: Vec::new(),
        },
        category("other", &["a"]),
    ];
    let mut stats = CategoryStats::default();

    let records = aggregate_items(&source, &categories, &mut stats).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "other");
}

#[tokio::test(start_paused = true)]
async fn index_outage_yields_empty_category_list() {
    let source = StubSource::default();
    let mut stats = CategoryStats::default();

    let categories = fetch_categories(&source, &mut stats).await;
    assert!(categories.is_empty());
}

#[tokio::test(start_paused = true)]
async fn unreachable_category_detail_is_skipped() {
    let ok_cat = category("loot", &[]);
    let source = StubSource {
        index: Some(ResourceIndex {
            results: vec![
                NamedRef {
                    name: "loot".to_string(),
                    url: category_url("loot"),
                },
                NamedRef {
                    name: "broken".to_string(),
                    url: category_url("broken"),
                },
            ],
        }),
        categories: HashMap::from([(category_url("loot"), ok_cat)]),
        ..Default::default()
    };
    let mut stats = CategoryStats::default();

    let categories = fetch_categories(&source, &mut stats).await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "loot");
    assert_eq!(stats.ok, 1);
    assert_eq!(stats.fail, 1);
}

#[tokio::test(start_paused = true)]
async fn duplicate_category_listings_collapse_via_name_dedup() {
    // The upstream index is known to list some categories twice; items
    // keyed by name make the second pass a no-op.
    let source = with_items(vec![detail(7, "z-ring", "")]);
    let categories = vec![
        category("z-crystals", &["z-ring"]),
        category("z-crystals", &["z-ring"]),
    ];
    let mut stats = CategoryStats::default();

    let records = aggregate_items(&source, &categories, &mut stats).await;
    assert_eq!(records.len(), 1);
    assert_eq!(stats.skip_or_dup, 1);
}

#[tokio::test(start_paused = true)]
async fn index_outage_aborts_run_without_output_file() {
    let source = StubSource::default();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items_data.json");

    let exit_code = processor::run(&source, path.clone()).await.unwrap();

    assert_eq!(exit_code, 1);
    assert!(!path.exists());
}

#[tokio::test(start_paused = true)]
async fn run_with_no_aggregated_items_writes_nothing() {
    // The category resolves but every item detail fetch fails.
    let source = StubSource {
        index: Some(ResourceIndex {
            results: vec![NamedRef {
                name: "loot".to_string(),
                url: category_url("loot"),
            }],
        }),
        categories: HashMap::from([(category_url("loot"), category("loot", &["rusted-shield"]))]),
        ..Default::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items_data.json");

    let exit_code = processor::run(&source, path.clone()).await.unwrap();

    assert_eq!(exit_code, 1);
    assert!(!path.exists());
}

#[tokio::test(start_paused = true)]
async fn run_writes_versioned_file_on_success() {
    let source = StubSource {
        index: Some(ResourceIndex {
            results: vec![NamedRef {
                name: "medicine".to_string(),
                url: category_url("medicine"),
            }],
        }),
        categories: HashMap::from([(
            category_url("medicine"),
            category("medicine", &["potion"]),
        )]),
        items: HashMap::from([(item_url("potion"), detail(17, "potion", "キズぐすり"))]),
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items_data.json");

    let exit_code = processor::run(&source, path.clone()).await.unwrap();

    assert_eq!(exit_code, 0);
    let loaded: ItemsDocument = io::load_json(&path).await.unwrap();
    assert_eq!(loaded.schema_version, 1);
    assert_eq!(loaded.items[0].name, "potion");
}

#[tokio::test(start_paused = true)]
async fn pipeline_writes_sorted_versioned_document() {
    let source = with_items(vec![
        detail(30, "leftovers", "たべのこし"),
        detail(10, "potion", "キズぐすり"),
        detail(20, "lum-berry", "ラムのみ"),
    ]);
    let categories = vec![
        category("held-items", &["leftovers"]),
        category("medicine", &["potion"]),
        category("in-a-pinch", &["lum-berry"]),
    ];
    let mut stats = CategoryStats::default();

    let records = aggregate_items(&source, &categories, &mut stats).await;
    let document = ItemsDocument::new(records);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items_data.json");
    io::save_json(path.clone(), document, "test".to_string())
        .await
        .unwrap();

    let loaded: ItemsDocument = io::load_json(&path).await.unwrap();
    assert_eq!(loaded.schema_version, 1);
    let ids: Vec<i64> = loaded.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
    assert_eq!(loaded.items[0].name_ja, "キズぐすり");
}

use crate::config;
use crate::error::AppResult;
use crate::io;
use crate::model::output::ItemsDocument;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

/// Reads a previously written items document and prints per-category
/// counts plus sample Japanese names. Read-only.
pub async fn run(input_path: &Path) -> AppResult<i32> {
    let document: ItemsDocument = io::load_json(input_path).await?;
    print!("{}", render_report(&document));
    Ok(0)
}

/// The report format follows the app team's original tooling: Japanese
/// labels, categories in lexicographic order, up to 5 samples each.
pub fn render_report(document: &ItemsDocument) -> String {
    let mut by_category: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for item in &document.items {
        by_category
            .entry(item.category.as_str())
            .or_default()
            .push(item.name_ja.as_str());
    }

    let mut out = String::new();
    let _ = writeln!(out, "総アイテム数: {}", document.items.len());
    let _ = writeln!(out, "\nカテゴリ別アイテム数:");
    for (category, names) in &by_category {
        let _ = writeln!(out, "  {}: {}個", category, names.len());
    }

    let _ = writeln!(out, "\n各カテゴリのアイテム例:");
    for (category, names) in &by_category {
        let _ = writeln!(out, "\n{}:", category);
        for name in names.iter().take(config::SAMPLE_NAMES_PER_CATEGORY) {
            let _ = writeln!(out, "  - {}", name);
        }
    }
    out
}

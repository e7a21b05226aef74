use crate::api::model::CategoryDetail;
use crate::api::ItemSource;
use crate::config;
use crate::core::stats::CategoryStats;
use crate::logging::{log, LogLevel};
use crate::model::output::ItemRecord;
use crate::transform;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;

/// Walks every category's item list in order and fetches detail for each
/// name not seen before. The returned records keep first-seen order, one
/// per canonical name; the category recorded is the one that listed the
/// name first. Items whose detail fetch fails are dropped for this run.
pub async fn aggregate_items<S: ItemSource>(
    source: &S,
    categories: &[CategoryDetail],
    stats: &mut CategoryStats,
) -> Vec<ItemRecord> {
    log(LogLevel::Info, "Fetching items from categories...");

    let mut seen: HashSet<String> = HashSet::new();
    let mut records: Vec<ItemRecord> = Vec::new();

    for category in categories {
        log(
            LogLevel::Info,
            &format!(
                "Category: {} ({} items)",
                category.name,
                category.items.len()
            ),
        );

        for reference in &category.items {
            if seen.contains(&reference.name) {
                stats.add_skip();
                continue;
            }

            log(
                LogLevel::Info,
                &format!("Fetching item '{}'...", reference.name),
            );
            let fetch_result = source.item_detail(&reference.url).await;

            match fetch_result {
                Ok(detail) => {
                    seen.insert(reference.name.clone());
                    records.push(transform::build_record(
                        &detail,
                        &reference.name,
                        &category.name,
                    ));
                    stats.add_ok();
                }
                Err(e) => {
                    log(
                        LogLevel::Warning,
                        &format!("Skipping item '{}': {:?}", reference.name, e),
                    );
                    stats.add_fail();
                }
            }

            // Pause after every attempted fetch, success or failure.
            sleep(Duration::from_millis(config::ITEM_PAUSE_MS)).await;
        }
    }

    stats.set_total(stats.ok + stats.fail + stats.skip_or_dup);
    records
}

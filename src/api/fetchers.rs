use crate::api::model::CategoryDetail;
use crate::api::ItemSource;
use crate::config;
use crate::core::stats::CategoryStats;
use crate::logging::{log, LogLevel};
use std::time::Duration;
use tokio::time::sleep;

/// Fetches the category index, then the detail record for each entry.
/// Entries whose detail fetch fails are skipped; an index fetch failure
/// returns an empty list, which the caller treats as fatal.
pub async fn fetch_categories<S: ItemSource>(
    source: &S,
    stats: &mut CategoryStats,
) -> Vec<CategoryDetail> {
    log(LogLevel::Info, "Fetching item categories...");

    let index = match source.category_index().await {
        Ok(index) => index,
        Err(e) => {
            log(
                LogLevel::Error,
                &format!("Category index fetch failed: {:?}", e),
            );
            return Vec::new();
        }
    };

    stats.set_total(index.results.len());
    let mut categories = Vec::with_capacity(index.results.len());

    for reference in &index.results {
        match source.category_detail(&reference.url).await {
            Ok(detail) => {
                categories.push(detail);
                stats.add_ok();
                sleep(Duration::from_millis(config::CATEGORY_PAUSE_MS)).await;
            }
            Err(e) => {
                log(
                    LogLevel::Warning,
                    &format!("Skipping category '{}': {:?}", reference.name, e),
                );
                stats.add_fail();
            }
        }
    }

    log(
        LogLevel::Success,
        &format!("Found {} categories", categories.len()),
    );
    categories
}

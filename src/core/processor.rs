use crate::api::fetchers;
use crate::api::ItemSource;
use crate::core::aggregate;
use crate::core::stats::{self, RunStats};
use crate::error::AppResult;
use crate::io;
use crate::logging::{log, LogLevel};
use crate::model::output::ItemsDocument;
use chrono::Utc;
use std::path::PathBuf;
use std::time::Instant;

/// The full fetch pipeline: category discovery, item aggregation, write.
/// Returns the process exit code; fatal conditions (no categories, no
/// items) log an error and write nothing.
pub async fn run<S: ItemSource>(source: &S, out_path: PathBuf) -> AppResult<i32> {
    let overall_start_time = Instant::now();
    let start_ts_str = Utc::now().format("%Y-%m-%d %H:%M:%S %Z").to_string();

    log(
        LogLevel::Step,
        &format!("Starting item data fetch at {}", start_ts_str),
    );
    log(
        LogLevel::Info,
        &format!("Output file: {}", out_path.display()),
    );

    let mut run_stats = RunStats::default();

    log(LogLevel::Step, "--- Phase 1: Category Fetch ---");
    let categories = fetchers::fetch_categories(source, &mut run_stats.categories).await;
    if categories.is_empty() {
        log(
            LogLevel::Error,
            "Failed to fetch categories. Nothing to write.",
        );
        stats::print_summary(&run_stats, overall_start_time.elapsed());
        return Ok(1);
    }

    log(LogLevel::Step, "--- Phase 2: Item Aggregation ---");
    let records = aggregate::aggregate_items(source, &categories, &mut run_stats.items).await;
    if records.is_empty() {
        log(LogLevel::Error, "No items fetched. Nothing to write.");
        stats::print_summary(&run_stats, overall_start_time.elapsed());
        return Ok(1);
    }
    log(
        LogLevel::Info,
        &format!("Total items fetched: {}", records.len()),
    );

    log(LogLevel::Step, "--- Phase 3: Write Output ---");
    let document = ItemsDocument::new(records);
    let total_items = document.items.len();
    run_stats.save.set_total(1);

    match io::save_json(out_path.clone(), document, "items".to_string()).await {
        Ok(()) => {
            run_stats.save.add_ok();
            log(
                LogLevel::Success,
                &format!("Saved {} items to {}", total_items, out_path.display()),
            );
        }
        Err(e) => {
            run_stats.save.add_fail();
            stats::print_summary(&run_stats, overall_start_time.elapsed());
            return Err(e);
        }
    }

    stats::print_summary(&run_stats, overall_start_time.elapsed());
    Ok(0)
}

use crate::logging::{log, LogLevel};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct CategoryStats {
    pub ok: usize,
    pub fail: usize,
    pub skip_or_dup: usize,
    pub total_tasks: usize,
}

impl CategoryStats {
    pub fn add_ok(&mut self) {
        self.ok += 1;
    }
    pub fn add_fail(&mut self) {
        self.fail += 1;
    }
    pub fn add_skip(&mut self) {
        self.skip_or_dup += 1;
    }
    pub fn set_total(&mut self, total: usize) {
        self.total_tasks = total;
    }
}

/// One counter block per pipeline phase.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub categories: CategoryStats,
    pub items: CategoryStats,
    pub save: CategoryStats,
}

pub fn print_summary(stats: &RunStats, duration: Duration) {
    let sep = "=".repeat(60);
    println!("\n{}\n{:^60}\n{}", sep, "Run Summary", sep);
    println!("Total Run Time:    {:.3?}", duration);
    println!("{}", "-".repeat(60));
    println!(
        "{:<17} {:<8} {:<12} {:<8} {:<8}",
        "Phase", "OK", "Skip/Dup", "Fail", "Total"
    );
    println!("{}", "-".repeat(60));

    let rows = [
        ("Category Fetch", &stats.categories),
        ("Item Fetch", &stats.items),
        ("Save File", &stats.save),
    ];
    for (phase, s) in rows {
        println!(
            "{:<17} {:<8} {:<12} {:<8} {:<8}",
            phase, s.ok, s.skip_or_dup, s.fail, s.total_tasks
        );
    }
    println!("{}", sep);

    let fetch_failures = stats.categories.fail + stats.items.fail;
    if fetch_failures > 0 {
        log(
            LogLevel::Warning,
            &format!(
                "Run completed with {} resource(s) skipped after failed fetches.",
                fetch_failures
            ),
        );
    } else {
        log(LogLevel::Success, "Run completed successfully.");
    }

    let end_ts_str = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string();
    log(
        LogLevel::Step,
        &format!("--- Run Finished at {} ---", end_ts_str),
    );
}

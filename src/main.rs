use clap::{CommandFactory, Parser};
use item_update::api::client::ApiClient;
use item_update::cli::{CliArgs, Command};
use item_update::core::{processor, summary};
use item_update::error::AppResult;
use item_update::logging::{log, setup_logging, LogLevel};
use std::process::ExitCode;
use tokio::runtime::Builder;

fn main() -> ExitCode {
    setup_logging();

    let cli_args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.use_stderr() {
                log(LogLevel::Error, &format!("CLI Argument Error: {}", e));
                let _ = CliArgs::command().print_help();
                return ExitCode::from(2);
            }
            // --help / --version land here.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    // Sequential, network-bound pipeline; a single-threaded runtime is all
    // the upstream rate limits allow us to use anyway.
    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            log(
                LogLevel::Error,
                &format!("FATAL: Failed to build Tokio runtime: {}", e),
            );
            return ExitCode::FAILURE;
        }
    };

    let main_result: AppResult<i32> = runtime.block_on(async {
        match cli_args.command {
            Command::Fetch { output } => {
                let client = ApiClient::new()?;
                processor::run(&client, output).await
            }
            Command::Summarize { input } => summary::run(&input).await,
        }
    });

    match main_result {
        Ok(exit_code) => ExitCode::from(exit_code as u8),
        Err(e) => {
            log(LogLevel::Error, &format!("FATAL UNEXPECTED ERROR: {:?}", e));
            ExitCode::FAILURE
        }
    }
}

use crate::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fetches item data from PokeAPI and formats it for the app.",
    long_about = None,
    arg_required_else_help = true
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch categories and items from PokeAPI and write the items JSON file
    Fetch {
        #[arg(
            long,
            default_value = config::DEFAULT_OUTPUT_FILE,
            value_name = "FILE_PATH",
            help = "Output JSON file path (overwritten unconditionally)"
        )]
        output: PathBuf,
    },
    /// Print per-category counts and sample names from an items JSON file
    Summarize {
        #[arg(
            default_value = config::DEFAULT_OUTPUT_FILE,
            value_name = "FILE_PATH",
            help = "Items JSON file to summarize"
        )]
        input: PathBuf,
    },
}

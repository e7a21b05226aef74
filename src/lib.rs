pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod transform;
pub mod utils;

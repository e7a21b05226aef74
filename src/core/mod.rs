pub mod aggregate;
pub mod processor;
pub mod stats;
pub mod summary;

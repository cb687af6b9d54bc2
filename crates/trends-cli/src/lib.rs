//! CLI library components for the trends ETL.

pub mod logging;
pub mod pipeline;
pub mod types;

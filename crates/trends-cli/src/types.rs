use std::path::PathBuf;

use trends_load::LoadReport;

/// Outcome of one ETL run, consumed by the summary printer.
#[derive(Debug)]
pub struct EtlResult {
    pub input: PathBuf,
    pub input_rows: usize,
    pub customer_rows: usize,
    pub item_rows: usize,
    pub purchase_rows: usize,
    /// `None` on a dry run; otherwise the per-table load counts.
    pub load: Option<LoadReport>,
}

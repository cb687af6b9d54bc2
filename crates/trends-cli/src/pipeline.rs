//! ETL pipeline with explicit stages.
//!
//! The stages run in order:
//! 1. **Normalize**: read the CSV, canonicalize headers, assign surrogate keys
//! 2. **Decompose**: split records into the three star-schema collections
//! 3. **Load**: recreate the target schema and bulk-insert each collection
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. A failure in any stage aborts the remainder of the run; a
//! normalization failure stops before any database work.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use trends_load::{DbConfig, LoadReport};
use trends_model::{NormalizedRecord, StarSchema};

/// Stage 1: read and normalize the input file.
pub fn normalize(input: &Path) -> Result<Vec<NormalizedRecord>> {
    let span = info_span!("normalize", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = trends_ingest::read_transactions(input).context("normalize input")?;

    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(records)
}

/// Stage 2: decompose normalized records into the star schema.
pub fn decompose(records: &[NormalizedRecord]) -> StarSchema {
    let span = info_span!("decompose");
    let _guard = span.enter();
    let start = Instant::now();

    let star = trends_transform::decompose(records);

    info!(
        customer_count = star.customers.len(),
        item_count = star.items.len(),
        purchase_count = star.purchases.len(),
        duration_ms = start.elapsed().as_millis(),
        "decomposition complete"
    );
    star
}

/// Stage 3: recreate the target schema and load all collections.
///
/// The async database driver is driven by a current-thread runtime so the
/// run stays single-threaded and strictly sequential.
pub fn load(config: &DbConfig, star: &StarSchema) -> Result<LoadReport> {
    let span = info_span!("load", database = %config.database);
    let _guard = span.enter();
    let start = Instant::now();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;
    let report = runtime
        .block_on(trends_load::run(config, star))
        .context("load star schema")?;

    info!(
        table_count = report.tables.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(report)
}

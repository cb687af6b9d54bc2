use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use trends_cli::pipeline;
use trends_cli::types::EtlResult;
use trends_load::DbConfig;
use trends_model::CREATE_ORDER;

use crate::cli::LoadArgs;
use crate::summary::apply_table_style;

pub fn run_load(args: &LoadArgs) -> Result<EtlResult> {
    let run_span = info_span!("etl", input = %args.input.display());
    let _run_guard = run_span.enter();

    let records = pipeline::normalize(&args.input)?;
    let star = pipeline::decompose(&records);

    let load = if args.dry_run {
        info!("dry run: skipping database operations");
        None
    } else {
        let config = DbConfig::from_env();
        Some(pipeline::load(&config, &star)?)
    };

    Ok(EtlResult {
        input: args.input.clone(),
        input_rows: records.len(),
        customer_rows: star.customers.len(),
        item_rows: star.items.len(),
        purchase_rows: star.purchases.len(),
        load,
    })
}

pub fn run_tables() {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Columns", "Key"]);
    apply_table_style(&mut table);
    for def in CREATE_ORDER {
        let mut key = format!("PK ({})", def.primary_key.join(", "));
        for fk in def.foreign_keys {
            key.push_str(&format!(
                "; FK ({}) -> {}",
                fk.columns.join(", "),
                fk.references_table
            ));
        }
        table.add_row(vec![
            def.name.to_string(),
            def.insert_columns.join(", "),
            key,
        ]);
    }
    println!("{table}");
}

//! One-shot load of a decomposed star schema.
//!
//! The connection is acquired once, held exclusively for the run, and closed
//! unconditionally afterwards. Entity loads run in dependency order
//! (customers -> items -> purchases); each batch commits when its statement
//! completes, so a failure leaves earlier tables loaded, skips the remaining
//! ones, and surfaces the cause.

use sqlx::mysql::MySqlConnection;
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info, warn};

use trends_model::{
    CREATE_ORDER, DIM_CUSTOMER, DIM_ITEM, DROP_ORDER, FACT_PURCHASE, StarSchema, TableDef,
};

use crate::config::DbConfig;
use crate::error::{LoadError, Result};
use crate::insert::{customer_insert, item_insert, purchase_insert};

/// Row counts per target table, in load order.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
}

#[derive(Debug, Clone)]
pub struct TableLoad {
    pub table: &'static str,
    pub rows: usize,
}

/// Recreates the target schema and loads all three collections.
pub async fn run(config: &DbConfig, star: &StarSchema) -> Result<LoadReport> {
    let mut conn = config
        .connect_options()
        .connect()
        .await
        .map_err(LoadError::Connect)?;
    debug!(host = %config.host, database = %config.database, "connected");

    let result = load_all(&mut conn, star).await;

    // Release the connection on both the success and the error path.
    if let Err(error) = conn.close().await {
        warn!(error = %error, "closing the database connection failed");
    }
    result
}

async fn load_all(conn: &mut MySqlConnection, star: &StarSchema) -> Result<LoadReport> {
    setup_schema(conn).await?;

    let mut report = LoadReport::default();
    report.tables.push(
        insert_batch(conn, &DIM_CUSTOMER, star.customers.len(), || {
            customer_insert(&star.customers)
        })
        .await?,
    );
    report.tables.push(
        insert_batch(conn, &DIM_ITEM, star.items.len(), || {
            item_insert(&star.items)
        })
        .await?,
    );
    report.tables.push(
        insert_batch(conn, &FACT_PURCHASE, star.purchases.len(), || {
            purchase_insert(&star.purchases)
        })
        .await?,
    );
    Ok(report)
}

/// Drops existing tables in reverse dependency order and creates the schema
/// fresh. `IF EXISTS` makes an absent table a non-event; any other DDL
/// failure is fatal.
async fn setup_schema(conn: &mut MySqlConnection) -> Result<()> {
    for table in DROP_ORDER {
        let sql = format!("DROP TABLE IF EXISTS {}", table.name);
        sqlx::query(&sql)
            .execute(&mut *conn)
            .await
            .map_err(|source| schema_error(table, source))?;
    }
    for table in CREATE_ORDER {
        sqlx::query(table.create_sql)
            .execute(&mut *conn)
            .await
            .map_err(|source| schema_error(table, source))?;
    }
    info!(table_count = CREATE_ORDER.len(), "schema recreated");
    Ok(())
}

async fn insert_batch<'a>(
    conn: &mut MySqlConnection,
    table: &TableDef,
    rows: usize,
    build: impl FnOnce() -> sqlx::QueryBuilder<'a, sqlx::MySql>,
) -> Result<TableLoad> {
    if rows > 0 {
        let mut builder = build();
        builder
            .build()
            .execute(&mut *conn)
            .await
            .map_err(|source| LoadError::Insert {
                table: table.name.to_string(),
                source,
            })?;
    }
    info!(table = table.name, rows, "table load complete");
    Ok(TableLoad {
        table: table.name,
        rows,
    })
}

fn schema_error(table: &TableDef, source: sqlx::Error) -> LoadError {
    LoadError::SchemaSetup {
        table: table.name.to_string(),
        source,
    }
}

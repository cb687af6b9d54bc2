//! Batched multi-row INSERT statement builders.
//!
//! One statement per entity carries all of its rows; callers must skip empty
//! collections since `push_values` over nothing leaves a dangling `VALUES`.

use sqlx::{MySql, QueryBuilder};

use trends_model::{
    CustomerDim, DIM_CUSTOMER, DIM_ITEM, FACT_PURCHASE, ItemDim, PurchaseFact, TableDef,
};

fn insert_prefix(table: &TableDef) -> String {
    format!(
        "INSERT INTO {} ({}) ",
        table.name,
        table.insert_columns.join(", ")
    )
}

pub fn customer_insert<'a>(rows: &'a [CustomerDim]) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::new(insert_prefix(&DIM_CUSTOMER));
    builder.push_values(rows, |mut b, row| {
        b.push_bind(row.customer_id);
        b.push_bind(row.age);
        b.push_bind(row.gender.as_deref());
        b.push_bind(row.location.as_deref());
        b.push_bind(row.subscription_status.as_deref());
        b.push_bind(row.frequency_of_purchases.as_deref());
    });
    builder
}

pub fn item_insert<'a>(rows: &'a [ItemDim]) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::new(insert_prefix(&DIM_ITEM));
    builder.push_values(rows, |mut b, row| {
        b.push_bind(row.item_name.as_str());
        b.push_bind(row.category.as_str());
        b.push_bind(row.size.as_deref());
        b.push_bind(row.color.as_deref());
        b.push_bind(row.season.as_deref());
    });
    builder
}

pub fn purchase_insert<'a>(rows: &'a [PurchaseFact]) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::new(insert_prefix(&FACT_PURCHASE));
    builder.push_values(rows, |mut b, row| {
        b.push_bind(row.transaction_id);
        b.push_bind(row.customer_id);
        b.push_bind(row.item_name.as_str());
        b.push_bind(row.category.as_str());
        b.push_bind(row.purchase_amount_usd);
        b.push_bind(row.review_rating);
        b.push_bind(row.payment_method.as_deref());
        b.push_bind(row.shipping_type.as_deref());
        b.push_bind(row.discount_applied.as_deref());
        b.push_bind(row.promo_code_used.as_deref());
        b.push_bind(row.previous_purchases);
    });
    builder
}

//! Splits the normalized record stream into the three star-schema
//! collections.

use std::collections::BTreeSet;

use tracing::debug;

use trends_model::{CustomerDim, ItemDim, NormalizedRecord, PurchaseFact, StarSchema};

/// Decomposes normalized records into customer and item dimensions plus the
/// purchase fact set.
///
/// Dimensions deduplicate on their keys, keeping the first occurrence in
/// input order; facts keep one row per input record. No cross-entity
/// validation happens here: orphan keys in inconsistent source data surface
/// as constraint violations at load time. The output is loadable in
/// customers -> items -> purchases order.
pub fn decompose(records: &[NormalizedRecord]) -> StarSchema {
    let mut star = StarSchema::default();
    let mut seen_customers: BTreeSet<i64> = BTreeSet::new();
    let mut seen_items: BTreeSet<(String, String)> = BTreeSet::new();

    for record in records {
        let source = &record.source;

        if seen_customers.insert(source.customer_id) {
            star.customers.push(CustomerDim {
                customer_id: source.customer_id,
                age: source.age,
                gender: source.gender.clone(),
                location: source.location.clone(),
                subscription_status: source.subscription_status.clone(),
                frequency_of_purchases: source.frequency_of_purchases.clone(),
            });
        }

        let item_key = (source.item_purchased.clone(), source.category.clone());
        if seen_items.insert(item_key) {
            star.items.push(ItemDim {
                item_name: source.item_purchased.clone(),
                category: source.category.clone(),
                size: source.size.clone(),
                color: source.color.clone(),
                season: source.season.clone(),
            });
        }

        star.purchases.push(PurchaseFact {
            transaction_id: record.transaction_id,
            customer_id: source.customer_id,
            item_name: source.item_purchased.clone(),
            category: source.category.clone(),
            purchase_amount_usd: source.purchase_amount_usd,
            review_rating: source.review_rating,
            // Only the customer's preferred method is authoritative for the
            // fact row; the transaction-level payment_method field is dropped.
            payment_method: source.preferred_payment_method.clone(),
            shipping_type: source.shipping_type.clone(),
            discount_applied: source.discount_applied.clone(),
            promo_code_used: source.promo_code_used.clone(),
            previous_purchases: source.previous_purchases,
        });
    }

    debug!(
        customer_count = star.customers.len(),
        item_count = star.items.len(),
        purchase_count = star.purchases.len(),
        "decomposition complete"
    );
    star
}

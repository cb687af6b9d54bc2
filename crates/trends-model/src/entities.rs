//! Star-schema entity rows produced by the decomposer.

use serde::{Deserialize, Serialize};

/// One row of `Dim_Customer`. Unique by `customer_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDim {
    pub customer_id: i64,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub subscription_status: Option<String>,
    pub frequency_of_purchases: Option<String>,
}

/// One row of `Dim_Item`. Unique by the `(item_name, category)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDim {
    pub item_name: String,
    pub category: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub season: Option<String>,
}

impl ItemDim {
    /// The composite dimension key.
    pub fn key(&self) -> (&str, &str) {
        (&self.item_name, &self.category)
    }
}

/// One row of `Fact_Purchase`. One per input record, unique by
/// `transaction_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseFact {
    pub transaction_id: i64,
    pub customer_id: i64,
    pub item_name: String,
    pub category: String,
    pub purchase_amount_usd: Option<f64>,
    pub review_rating: Option<f64>,
    pub payment_method: Option<String>,
    pub shipping_type: Option<String>,
    pub discount_applied: Option<String>,
    pub promo_code_used: Option<String>,
    pub previous_purchases: Option<i64>,
}

/// The decomposer's complete output.
///
/// Postcondition consumed by the loader: the collections are loadable in
/// customers -> items -> purchases order without violating the fact table's
/// foreign keys, provided the source data is internally consistent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarSchema {
    pub customers: Vec<CustomerDim>,
    pub items: Vec<ItemDim>,
    pub purchases: Vec<PurchaseFact>,
}

//! Typed source records as they leave the normalizer.
//!
//! Field names are the canonical (snake_case) header names, so one struct
//! doubles as the deserialization target for the rewritten CSV headers and
//! as the compile-time-checked column set: the two payment-related source
//! columns are distinct named fields here, never positional lookups.

use serde::{Deserialize, Serialize};

/// The canonical column set the input file must provide.
///
/// Optional columns still have to be present; only their values may be empty.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "customer_id",
    "age",
    "gender",
    "item_purchased",
    "category",
    "purchase_amount_usd",
    "location",
    "size",
    "color",
    "season",
    "review_rating",
    "subscription_status",
    "payment_method",
    "shipping_type",
    "discount_applied",
    "promo_code_used",
    "previous_purchases",
    "preferred_payment_method",
    "frequency_of_purchases",
];

/// One input row after header canonicalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub customer_id: i64,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    pub item_purchased: String,
    pub category: String,
    #[serde(default)]
    pub purchase_amount_usd: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub review_rating: Option<f64>,
    #[serde(default)]
    pub subscription_status: Option<String>,
    /// Payment method recorded on the transaction. Not authoritative for the
    /// fact table; see [`preferred_payment_method`](Self::preferred_payment_method).
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub shipping_type: Option<String>,
    #[serde(default)]
    pub discount_applied: Option<String>,
    #[serde(default)]
    pub promo_code_used: Option<String>,
    #[serde(default)]
    pub previous_purchases: Option<i64>,
    /// The customer's preferred payment method, the only payment field that
    /// flows into `Fact_Purchase.payment_method`.
    #[serde(default)]
    pub preferred_payment_method: Option<String>,
    #[serde(default)]
    pub frequency_of_purchases: Option<String>,
}

/// A source record with its run-scoped surrogate key.
///
/// `transaction_id` is the zero-based ordinal of the record in the input and
/// is only stable within a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub transaction_id: i64,
    pub source: SourceRecord,
}

impl NormalizedRecord {
    pub fn new(transaction_id: i64, source: SourceRecord) -> Self {
        Self {
            transaction_id,
            source,
        }
    }
}

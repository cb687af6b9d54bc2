pub mod entities;
pub mod record;
pub mod schema;

pub use entities::{CustomerDim, ItemDim, PurchaseFact, StarSchema};
pub use record::{EXPECTED_COLUMNS, NormalizedRecord, SourceRecord};
pub use schema::{
    CREATE_ORDER, DIM_CUSTOMER, DIM_ITEM, DROP_ORDER, FACT_PURCHASE, ForeignKeyDef, TableDef,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_record_deserializes_with_missing_optionals() {
        let json = r#"{
            "customer_id": 5,
            "item_purchased": "Blouse",
            "category": "Clothing"
        }"#;
        let record: SourceRecord = serde_json::from_str(json).expect("deserialize record");
        assert_eq!(record.customer_id, 5);
        assert_eq!(record.item_purchased, "Blouse");
        assert!(record.age.is_none());
        assert!(record.preferred_payment_method.is_none());
    }

    #[test]
    fn star_schema_round_trips() {
        let star = StarSchema {
            customers: vec![CustomerDim {
                customer_id: 1,
                age: Some(34),
                gender: Some("Female".to_string()),
                location: None,
                subscription_status: None,
                frequency_of_purchases: None,
            }],
            items: vec![],
            purchases: vec![],
        };
        let json = serde_json::to_string(&star).expect("serialize star schema");
        let round: StarSchema = serde_json::from_str(&json).expect("deserialize star schema");
        assert_eq!(round.customers.len(), 1);
        assert_eq!(round.customers[0].customer_id, 1);
    }
}

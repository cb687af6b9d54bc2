use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use trends_ingest::{IngestError, read_transactions};

const HEADER: &str = "Customer ID,Age,Gender,Item Purchased,Category,\
Purchase Amount (USD),Location,Size,Color,Season,Review Rating,\
Subscription Status,Payment Method,Shipping Type,Discount Applied,\
Promo Code Used,Previous Purchases,Preferred Payment Method,\
Frequency of Purchases";

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv fixture");
    path
}

#[test]
fn reads_rows_and_assigns_ordinal_transaction_ids() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!(
        "{HEADER}\n\
         1,55,Male,Blouse,Clothing,53,Kentucky,L,Gray,Winter,3.1,Yes,Credit Card,Express,Yes,Yes,14,Venmo,Fortnightly\n\
         2,19,Male,Sweater,Clothing,64,Maine,L,Maroon,Winter,3.1,Yes,Bank Transfer,Express,Yes,Yes,2,Cash,Fortnightly\n\
         3,50,Male,Jeans,Clothing,73,Massachusetts,S,Maroon,Spring,3.1,Yes,Cash,Free Shipping,Yes,Yes,23,Credit Card,Weekly\n"
    );
    let path = write_csv(&dir, "trends.csv", &contents);

    let records = read_transactions(&path).expect("read transactions");

    assert_eq!(records.len(), 3);
    let ids: Vec<i64> = records.iter().map(|r| r.transaction_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(records[0].source.customer_id, 1);
    assert_eq!(records[0].source.item_purchased, "Blouse");
    assert_eq!(records[2].source.category, "Clothing");
    // The legacy currency header resolves onto the canonical field.
    assert_eq!(records[1].source.purchase_amount_usd, Some(64.0));
}

#[test]
fn mixed_case_punctuated_headers_are_canonicalized() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!(
        "{HEADER}\n\
         7,31,Female,Handbag,Accessories,38,Ohio,M,White,Summer,4.3,No,PayPal,Standard,No,No,5,PayPal,Monthly\n"
    );
    let path = write_csv(&dir, "trends.csv", &contents);

    let records = read_transactions(&path).expect("read transactions");

    // "Item Purchased" -> item_purchased, "Preferred Payment Method" ->
    // preferred_payment_method, both land on their typed fields.
    assert_eq!(records[0].source.item_purchased, "Handbag");
    assert_eq!(
        records[0].source.preferred_payment_method.as_deref(),
        Some("PayPal")
    );
    assert_eq!(records[0].source.payment_method.as_deref(), Some("PayPal"));
    assert_eq!(records[0].source.review_rating, Some(4.3));
}

#[test]
fn empty_optional_values_become_none() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!(
        "{HEADER}\n\
         9,,,Scarf,Accessories,,Texas,,,,,,,,,,,,\n"
    );
    let path = write_csv(&dir, "trends.csv", &contents);

    let records = read_transactions(&path).expect("read transactions");

    let source = &records[0].source;
    assert_eq!(source.customer_id, 9);
    assert!(source.age.is_none());
    assert!(source.gender.is_none());
    assert!(source.purchase_amount_usd.is_none());
    assert!(source.preferred_payment_method.is_none());
    assert!(source.previous_purchases.is_none());
}

#[test]
fn missing_file_reports_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("no_such_file.csv");

    let error = read_transactions(&path).expect_err("missing input must fail");

    assert!(matches!(error, IngestError::NotFound { .. }));
}

#[test]
fn missing_expected_column_is_reported_by_name() {
    let dir = TempDir::new().expect("temp dir");
    // Header without the preferred payment method column.
    let contents = "Customer ID,Age,Gender,Item Purchased,Category,\
Purchase Amount (USD),Location,Size,Color,Season,Review Rating,\
Subscription Status,Payment Method,Shipping Type,Discount Applied,\
Promo Code Used,Previous Purchases,Frequency of Purchases\n\
1,55,Male,Blouse,Clothing,53,Kentucky,L,Gray,Winter,3.1,Yes,Credit Card,Express,Yes,Yes,14,Fortnightly\n";
    let path = write_csv(&dir, "trends.csv", contents);

    let error = read_transactions(&path).expect_err("missing column must fail");

    match error {
        IngestError::MissingColumn { column, .. } => {
            assert_eq!(column, "preferred_payment_method");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn malformed_row_aborts_with_cause() {
    let dir = TempDir::new().expect("temp dir");
    let contents = format!(
        "{HEADER}\n\
         not-a-number,55,Male,Blouse,Clothing,53,Kentucky,L,Gray,Winter,3.1,Yes,Credit Card,Express,Yes,Yes,14,Venmo,Fortnightly\n"
    );
    let path = write_csv(&dir, "trends.csv", &contents);

    let error = read_transactions(&path).expect_err("malformed row must fail");

    assert!(matches!(error, IngestError::Malformed { .. }));
}

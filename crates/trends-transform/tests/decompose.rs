use std::collections::BTreeSet;

use trends_model::{NormalizedRecord, SourceRecord};
use trends_transform::decompose;

fn source(customer_id: i64, item: &str, category: &str) -> SourceRecord {
    SourceRecord {
        customer_id,
        age: Some(40),
        gender: Some("Female".to_string()),
        item_purchased: item.to_string(),
        category: category.to_string(),
        purchase_amount_usd: Some(25.0),
        location: Some("Vermont".to_string()),
        size: Some("M".to_string()),
        color: Some("Blue".to_string()),
        season: Some("Fall".to_string()),
        review_rating: Some(4.0),
        subscription_status: Some("Yes".to_string()),
        payment_method: Some("Credit Card".to_string()),
        shipping_type: Some("Standard".to_string()),
        discount_applied: Some("No".to_string()),
        promo_code_used: Some("No".to_string()),
        previous_purchases: Some(3),
        preferred_payment_method: Some("Venmo".to_string()),
        frequency_of_purchases: Some("Weekly".to_string()),
    }
}

fn records(sources: Vec<SourceRecord>) -> Vec<NormalizedRecord> {
    sources
        .into_iter()
        .enumerate()
        .map(|(idx, source)| NormalizedRecord::new(idx as i64, source))
        .collect()
}

#[test]
fn shared_customer_id_collapses_to_one_dimension_row() {
    // Three purchases, two of them by customer 5 with identical demographics.
    let input = records(vec![
        source(5, "Blouse", "Clothing"),
        source(8, "Boots", "Footwear"),
        source(5, "Scarf", "Accessories"),
    ]);

    let star = decompose(&input);

    assert_eq!(star.customers.len(), 2);
    assert_eq!(
        star.customers
            .iter()
            .filter(|c| c.customer_id == 5)
            .count(),
        1
    );
    assert_eq!(star.purchases.len(), 3);
    let ids: Vec<i64> = star.purchases.iter().map(|p| p.transaction_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn first_seen_customer_attributes_win() {
    let mut later = source(5, "Boots", "Footwear");
    later.age = Some(71);
    later.location = Some("Alaska".to_string());
    let input = records(vec![source(5, "Blouse", "Clothing"), later]);

    let star = decompose(&input);

    assert_eq!(star.customers.len(), 1);
    assert_eq!(star.customers[0].age, Some(40));
    assert_eq!(star.customers[0].location.as_deref(), Some("Vermont"));
}

#[test]
fn items_deduplicate_on_name_and_category_pair() {
    let input = records(vec![
        source(1, "Belt", "Accessories"),
        source(2, "Belt", "Clothing"),
        source(3, "Belt", "Accessories"),
    ]);

    let star = decompose(&input);

    assert_eq!(star.items.len(), 2);
    let keys: BTreeSet<(&str, &str)> = star.items.iter().map(|i| i.key()).collect();
    assert!(keys.contains(&("Belt", "Accessories")));
    assert!(keys.contains(&("Belt", "Clothing")));
}

#[test]
fn collections_have_expected_cardinalities_and_unique_keys() {
    let input = records(vec![
        source(1, "Hat", "Accessories"),
        source(2, "Hat", "Accessories"),
        source(1, "Coat", "Outerwear"),
        source(3, "Hat", "Clothing"),
    ]);

    let star = decompose(&input);

    assert_eq!(star.purchases.len(), input.len());
    assert_eq!(star.customers.len(), 3);
    assert_eq!(star.items.len(), 3);

    let customer_ids: BTreeSet<i64> = star.customers.iter().map(|c| c.customer_id).collect();
    assert_eq!(customer_ids.len(), star.customers.len());
    let item_keys: BTreeSet<(&str, &str)> = star.items.iter().map(|i| i.key()).collect();
    assert_eq!(item_keys.len(), star.items.len());
}

#[test]
fn fact_rows_reference_existing_dimension_rows() {
    let input = records(vec![
        source(1, "Hat", "Accessories"),
        source(2, "Coat", "Outerwear"),
        source(1, "Coat", "Outerwear"),
    ]);

    let star = decompose(&input);

    let customer_ids: BTreeSet<i64> = star.customers.iter().map(|c| c.customer_id).collect();
    let item_keys: BTreeSet<(&str, &str)> = star.items.iter().map(|i| i.key()).collect();
    for fact in &star.purchases {
        assert!(customer_ids.contains(&fact.customer_id));
        assert!(item_keys.contains(&(fact.item_name.as_str(), fact.category.as_str())));
    }
}

#[test]
fn fact_payment_method_comes_from_preferred_field_only() {
    let mut diverging = source(4, "Jeans", "Clothing");
    diverging.payment_method = Some("Debit Card".to_string());
    diverging.preferred_payment_method = Some("Cash".to_string());
    let input = records(vec![diverging]);

    let star = decompose(&input);

    assert_eq!(star.purchases[0].payment_method.as_deref(), Some("Cash"));
}

#[test]
fn item_label_is_renamed_to_item_name_in_both_projections() {
    let input = records(vec![source(6, "Sunglasses", "Accessories")]);

    let star = decompose(&input);

    assert_eq!(star.items[0].item_name, "Sunglasses");
    assert_eq!(star.purchases[0].item_name, "Sunglasses");
}

#[test]
fn empty_input_yields_empty_collections() {
    let star = decompose(&[]);

    assert!(star.customers.is_empty());
    assert!(star.items.is_empty());
    assert!(star.purchases.is_empty());
}

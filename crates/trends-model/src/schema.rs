//! Static declaration of the target star schema.
//!
//! Pure data: table names, DDL, key relationships, and the column order used
//! by the loader's batched inserts. Creation order puts dimensions before the
//! fact table; drop order is the reverse.

/// A foreign-key relationship from one table's columns to another's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub columns: &'static [&'static str],
    pub references_table: &'static str,
    pub references_columns: &'static [&'static str],
}

/// One target table: its DDL, keys, and the columns the loader inserts, in
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub create_sql: &'static str,
    pub insert_columns: &'static [&'static str],
    pub primary_key: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKeyDef],
}

pub const DIM_CUSTOMER: TableDef = TableDef {
    name: "Dim_Customer",
    create_sql: "\
CREATE TABLE Dim_Customer (
    customer_id INT NOT NULL,
    age INT,
    gender VARCHAR(10),
    location VARCHAR(50),
    subscription_status VARCHAR(10),
    frequency_of_purchases VARCHAR(50),
    PRIMARY KEY (customer_id)
)",
    insert_columns: &[
        "customer_id",
        "age",
        "gender",
        "location",
        "subscription_status",
        "frequency_of_purchases",
    ],
    primary_key: &["customer_id"],
    foreign_keys: &[],
};

pub const DIM_ITEM: TableDef = TableDef {
    name: "Dim_Item",
    create_sql: "\
CREATE TABLE Dim_Item (
    item_name VARCHAR(50) NOT NULL,
    category VARCHAR(50) NOT NULL,
    size VARCHAR(5),
    color VARCHAR(20),
    season VARCHAR(20),
    PRIMARY KEY (item_name, category)
)",
    insert_columns: &["item_name", "category", "size", "color", "season"],
    primary_key: &["item_name", "category"],
    foreign_keys: &[],
};

pub const FACT_PURCHASE: TableDef = TableDef {
    name: "Fact_Purchase",
    create_sql: "\
CREATE TABLE Fact_Purchase (
    purchase_transaction_id INT NOT NULL,
    customer_id INT NOT NULL,
    item_name VARCHAR(50) NOT NULL,
    category VARCHAR(50) NOT NULL,
    purchase_amount_usd DECIMAL(10, 2),
    review_rating DECIMAL(3, 2),
    payment_method VARCHAR(50),
    shipping_type VARCHAR(50),
    discount_applied VARCHAR(5),
    promo_code_used VARCHAR(5),
    previous_purchases INT,
    PRIMARY KEY (purchase_transaction_id),
    FOREIGN KEY (customer_id) REFERENCES Dim_Customer(customer_id),
    FOREIGN KEY (item_name, category) REFERENCES Dim_Item(item_name, category)
)",
    insert_columns: &[
        "purchase_transaction_id",
        "customer_id",
        "item_name",
        "category",
        "purchase_amount_usd",
        "review_rating",
        "payment_method",
        "shipping_type",
        "discount_applied",
        "promo_code_used",
        "previous_purchases",
    ],
    primary_key: &["purchase_transaction_id"],
    foreign_keys: &[
        ForeignKeyDef {
            columns: &["customer_id"],
            references_table: "Dim_Customer",
            references_columns: &["customer_id"],
        },
        ForeignKeyDef {
            columns: &["item_name", "category"],
            references_table: "Dim_Item",
            references_columns: &["item_name", "category"],
        },
    ],
};

/// Dependency order: dimensions first, then the fact table.
pub const CREATE_ORDER: [&TableDef; 3] = [&DIM_CUSTOMER, &DIM_ITEM, &FACT_PURCHASE];

/// Reverse dependency order for teardown.
pub const DROP_ORDER: [&TableDef; 3] = [&FACT_PURCHASE, &DIM_ITEM, &DIM_CUSTOMER];

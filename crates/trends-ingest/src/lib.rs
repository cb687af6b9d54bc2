pub mod canonical;
pub mod csv_ingest;
pub mod error;

pub use canonical::{HEADER_ALIASES, canonical_field_name, canonical_header};
pub use csv_ingest::read_transactions;
pub use error::{IngestError, Result};

mod aggregates;
mod datetime_utils;
mod filter;
mod price_range;
mod transaction;

pub use aggregates::{
    BucketCount, CategoryCount, CombinedReport, RawBucketCount, SalesTotals, Statistics,
    TransactionPage,
};
pub use filter::Filter;
pub use price_range::PriceRange;
#[cfg(test)]
pub use price_range::bucket_id_for_price;
pub use transaction::{SeedTransaction, Transaction, TransactionView};

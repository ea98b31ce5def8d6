use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

use super::transaction::TransactionView;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<TransactionView>,
    pub total_pages: u64,
}

impl TransactionPage {
    pub fn empty() -> Self {
        TransactionPage {
            transactions: Vec::new(),
            total_pages: 0,
        }
    }
}

/// Output of the `$group` stage over sold records.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SalesTotals {
    pub total: f64,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sales: f64,
    pub sold_items: u64,
    pub not_sold_items: u64,
}

/// One `$bucket` output document. `_id` is the lower boundary, or the default label.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawBucketCount {
    #[serde(rename = "_id")]
    pub boundary: Bson,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BucketCount {
    #[serde(rename = "_id")]
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CombinedReport {
    pub statistics: Statistics,
    pub bar_chart: Vec<BucketCount>,
    pub pie_chart: Vec<CategoryCount>,
}

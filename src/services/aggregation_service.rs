use std::collections::BTreeMap;

use log::warn;

use crate::error::StoreError;
use crate::models::{BucketCount, CategoryCount, CombinedReport, PriceRange, Statistics};
use crate::repositories::TransactionStore;

/// Sum and count of sold items plus the count of unsold items for `month`.
pub async fn statistics(
    store: &dyn TransactionStore,
    month: Option<u32>,
) -> Result<Statistics, StoreError> {
    let Some(month) = month else {
        return Ok(Statistics::default());
    };

    let totals = store.sales_totals(month).await?;
    let not_sold_items = store.count_unsold(month).await?;

    Ok(Statistics {
        total_sales: totals.as_ref().map_or(0.0, |t| t.total),
        sold_items: totals.as_ref().map_or(0, |t| t.count),
        not_sold_items,
    })
}

/// Item counts for every price bucket, in ascending order. Buckets the store leaves out
/// are reported with a zero count.
pub async fn price_histogram(
    store: &dyn TransactionStore,
    month: Option<u32>,
) -> Result<Vec<BucketCount>, StoreError> {
    let mut counts: BTreeMap<PriceRange, u64> = PriceRange::all().map(|r| (r, 0)).collect();

    if let Some(month) = month {
        for bucket in store.price_buckets(month).await? {
            match PriceRange::from_boundary(&bucket.boundary) {
                Some(range) => *counts.entry(range).or_default() += bucket.count,
                None => warn!("Ignoring unknown price bucket {:?}", bucket.boundary),
            }
        }
    }

    Ok(counts
        .into_iter()
        .map(|(range, count)| BucketCount {
            label: range.label(),
            count,
        })
        .collect())
}

/// Item counts per distinct category, ordered by category name.
pub async fn category_breakdown(
    store: &dyn TransactionStore,
    month: Option<u32>,
) -> Result<Vec<CategoryCount>, StoreError> {
    let Some(month) = month else {
        return Ok(Vec::new());
    };

    let mut categories = store.category_counts(month).await?;
    categories.sort_by(|a, b| a.category.cmp(&b.category));
    Ok(categories)
}

/// Runs the three aggregations concurrently. Any failure fails the whole report.
pub async fn combined(
    store: &dyn TransactionStore,
    month: Option<u32>,
) -> Result<CombinedReport, StoreError> {
    let (statistics, bar_chart, pie_chart) = futures::try_join!(
        statistics(store, month),
        price_histogram(store, month),
        category_breakdown(store, month),
    )?;

    Ok(CombinedReport {
        statistics,
        bar_chart,
        pie_chart,
    })
}

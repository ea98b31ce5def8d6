use crate::error::StoreError;
use crate::models::{Filter, TransactionPage, TransactionView};
use crate::repositories::TransactionStore;
use crate::utils::helpers::total_pages;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Listing request after query-string parsing. `page` and `per_page` are at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u64,
    pub per_page: u64,
    pub search: String,
    pub month: Option<u32>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            month: None,
        }
    }
}

pub async fn list_transactions(
    store: &dyn TransactionStore,
    query: &ListQuery,
) -> Result<TransactionPage, StoreError> {
    // Without a month nothing can match.
    let Some(month) = query.month else {
        return Ok(TransactionPage::empty());
    };

    let filter = Filter::from_search(month, &query.search);
    let per_page = query.per_page.max(1);
    let skip = query.page.saturating_sub(1).saturating_mul(per_page);

    let total_count = store.count(&filter).await?;
    let limit = i64::try_from(per_page).unwrap_or(i64::MAX);
    let transactions = store.find_page(&filter, skip, limit).await?;

    Ok(TransactionPage {
        transactions: transactions.into_iter().map(TransactionView::from).collect(),
        total_pages: total_pages(total_count, per_page),
    })
}

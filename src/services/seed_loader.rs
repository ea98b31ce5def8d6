use async_trait::async_trait;
use log::info;

use crate::error::SeedError;
use crate::models::{SeedTransaction, Transaction};
use crate::repositories::TransactionStore;

/// Where the initial dataset comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<SeedTransaction>, SeedError>;
}

pub struct HttpSeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<SeedTransaction>, SeedError> {
        info!("Fetching seed data from URL: {}", self.url);
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(u64),
    AlreadyInitialized,
}

/// Loads the seed data if the collection is empty.
///
/// This is at-most-once and not atomic: a failed bulk insert can leave a partial
/// collection behind, and two concurrent first calls may both see it empty, in which
/// case the unique `id` index rejects the second insert.
pub async fn initialize(
    store: &dyn TransactionStore,
    source: &dyn SeedSource,
) -> Result<SeedOutcome, SeedError> {
    if !store.is_empty().await? {
        info!("Transaction collection already populated, skipping seed");
        return Ok(SeedOutcome::AlreadyInitialized);
    }

    let records = source.fetch().await?;
    info!("Fetched {} seed records", records.len());

    let transactions: Vec<Transaction> = records.into_iter().map(Transaction::from).collect();
    let inserted = store.insert_many(transactions).await?;
    info!("Saved {} seed transactions to the database", inserted);

    Ok(SeedOutcome::Inserted(inserted))
}

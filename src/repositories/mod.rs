pub mod transaction_repository;

pub use transaction_repository::{MongoTransactionRepository, TransactionStore};

#[cfg(test)]
pub use transaction_repository::MockTransactionStore;

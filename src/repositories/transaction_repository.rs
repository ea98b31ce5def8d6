use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::error::StoreError;
use crate::models::{CategoryCount, Filter, PriceRange, RawBucketCount, SalesTotals, Transaction};
use crate::utils::helpers::escape_regex;

/// Read and seed operations the services need from the transaction collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn is_empty(&self) -> Result<bool, StoreError>;
    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<u64, StoreError>;
    async fn count(&self, filter: &Filter) -> Result<u64, StoreError>;
    async fn find_page(
        &self,
        filter: &Filter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Transaction>, StoreError>;
    async fn sales_totals(&self, month: u32) -> Result<Option<SalesTotals>, StoreError>;
    async fn count_unsold(&self, month: u32) -> Result<u64, StoreError>;
    async fn price_buckets(&self, month: u32) -> Result<Vec<RawBucketCount>, StoreError>;
    async fn category_counts(&self, month: u32) -> Result<Vec<CategoryCount>, StoreError>;
}

#[derive(Clone)]
pub struct MongoTransactionRepository {
    collection: Collection<Transaction>,
}

impl MongoTransactionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    /// Enforces uniqueness of the externally assigned `id`.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    async fn aggregate<T>(&self, pipeline: Vec<Document>) -> Result<Vec<T>, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let cursor = self.collection.aggregate(pipeline).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        documents
            .into_iter()
            .map(|d| bson::from_document(d).map_err(StoreError::from))
            .collect()
    }
}

#[async_trait]
impl TransactionStore for MongoTransactionRepository {
    async fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.collection.count_documents(doc! {}).await? == 0)
    }

    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<u64, StoreError> {
        if transactions.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(transactions).await?;
        Ok(result.inserted_ids.len() as u64)
    }

    async fn count(&self, filter: &Filter) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(filter_document(filter)).await?)
    }

    async fn find_page(
        &self,
        filter: &Filter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Transaction>, StoreError> {
        let cursor = self
            .collection
            .find(filter_document(filter))
            .sort(doc! { "id": 1 })
            .skip(skip)
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn sales_totals(&self, month: u32) -> Result<Option<SalesTotals>, StoreError> {
        let mut totals: Vec<SalesTotals> = self.aggregate(sales_pipeline(month)).await?;
        Ok(totals.pop())
    }

    async fn count_unsold(&self, month: u32) -> Result<u64, StoreError> {
        let mut filter = month_match(month);
        filter.insert("sold", false);
        Ok(self.collection.count_documents(filter).await?)
    }

    async fn price_buckets(&self, month: u32) -> Result<Vec<RawBucketCount>, StoreError> {
        self.aggregate(bucket_pipeline(month)).await
    }

    async fn category_counts(&self, month: u32) -> Result<Vec<CategoryCount>, StoreError> {
        self.aggregate(category_pipeline(month)).await
    }
}

/// Matches documents whose `dateOfSale` falls in `month`, regardless of year.
pub fn month_match(month: u32) -> Document {
    doc! {
        "$expr": { "$eq": [{ "$month": "$dateOfSale" }, month as i32] }
    }
}

pub fn filter_document(filter: &Filter) -> Document {
    let mut document = month_match(filter.month());
    match filter {
        Filter::MonthOnly { .. } => {}
        Filter::MonthAndPrice { price, .. } => {
            document.insert("price", *price);
        }
        Filter::MonthAndText { pattern, .. } => {
            let regex = doc! { "$regex": escape_regex(pattern), "$options": "i" };
            document.insert(
                "$or",
                vec![
                    Bson::Document(doc! { "title": regex.clone() }),
                    Bson::Document(doc! { "description": regex }),
                ],
            );
        }
    }
    document
}

pub fn sales_pipeline(month: u32) -> Vec<Document> {
    let mut matcher = month_match(month);
    matcher.insert("sold", true);
    vec![
        doc! { "$match": matcher },
        doc! {
            "$group": {
                "_id": Bson::Null,
                "total": { "$sum": "$price" },
                "count": { "$sum": 1 },
            }
        },
    ]
}

pub fn bucket_pipeline(month: u32) -> Vec<Document> {
    vec![
        doc! { "$match": month_match(month) },
        doc! {
            "$bucket": {
                "groupBy": "$price",
                "boundaries": PriceRange::store_boundaries(),
                "default": PriceRange::overflow().label(),
                "output": { "count": { "$sum": 1 } },
            }
        },
    ]
}

pub fn category_pipeline(month: u32) -> Vec<Document> {
    vec![
        doc! { "$match": month_match(month) },
        doc! {
            "$group": {
                "_id": "$category",
                "count": { "$sum": 1 },
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_only_filter_is_a_month_expression() {
        let document = filter_document(&Filter::MonthOnly { month: 3 });
        assert_eq!(
            document,
            doc! { "$expr": { "$eq": [{ "$month": "$dateOfSale" }, 3] } }
        );
    }

    #[test]
    fn price_filter_is_exact_equality() {
        let document = filter_document(&Filter::MonthAndPrice {
            month: 3,
            price: 100.0,
        });
        assert_eq!(document.get_f64("price").unwrap(), 100.0);
        assert!(document.get("$or").is_none());
    }

    #[test]
    fn text_filter_matches_title_or_description_case_insensitively() {
        let document = filter_document(&Filter::MonthAndText {
            month: 6,
            pattern: "phone".to_string(),
        });
        let regex = doc! { "$regex": "phone", "$options": "i" };
        assert_eq!(
            document.get_array("$or").unwrap(),
            &vec![
                Bson::Document(doc! { "title": regex.clone() }),
                Bson::Document(doc! { "description": regex }),
            ]
        );
        assert!(document.get("price").is_none());
    }

    #[test]
    fn text_filter_escapes_pattern() {
        let document = filter_document(&Filter::MonthAndText {
            month: 6,
            pattern: "4.5 (inch)".to_string(),
        });
        let clauses = document.get_array("$or").unwrap();
        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "4\\.5 \\(inch\\)");
    }

    #[test]
    fn sales_pipeline_restricts_to_sold_records() {
        let pipeline = sales_pipeline(9);
        let matcher = pipeline[0].get_document("$match").unwrap();
        assert!(matcher.get_bool("sold").unwrap());
        assert!(matcher.contains_key("$expr"));
        assert!(pipeline[1].contains_key("$group"));
    }

    #[test]
    fn bucket_pipeline_uses_fixed_boundaries_and_overflow_default() {
        let pipeline = bucket_pipeline(1);
        let bucket = pipeline[1].get_document("$bucket").unwrap();
        let boundaries = bucket.get_array("boundaries").unwrap();

        assert_eq!(boundaries.first(), Some(&Bson::Int32(0)));
        assert_eq!(boundaries.last(), Some(&Bson::Double(f64::INFINITY)));
        assert_eq!(boundaries.len(), 11);
        assert_eq!(bucket.get_str("default").unwrap(), "901+");
    }

    #[test]
    fn category_pipeline_groups_by_category() {
        let pipeline = category_pipeline(2);
        let group = pipeline[1].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$category");
    }
}

use chrono::{DateTime, FixedOffset, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::datetime_utils::{from_bson_datetime, to_bson_datetime};

/// A transaction as stored in the collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub sold: bool,
    pub date_of_sale: bson::DateTime,
}

/// A record as published by the seed source, with `dateOfSale` in RFC 3339 form.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeedTransaction {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub sold: bool,
    pub date_of_sale: DateTime<FixedOffset>,
}

impl From<SeedTransaction> for Transaction {
    fn from(seed: SeedTransaction) -> Self {
        Transaction {
            object_id: None,
            id: seed.id,
            title: seed.title,
            price: seed.price,
            description: seed.description,
            category: seed.category,
            image: seed.image,
            sold: seed.sold,
            date_of_sale: to_bson_datetime(&seed.date_of_sale),
        }
    }
}

/// The JSON shape returned by the listing endpoint.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

impl From<Transaction> for TransactionView {
    fn from(tx: Transaction) -> Self {
        TransactionView {
            object_id: tx.object_id.map(|oid| oid.to_hex()),
            id: tx.id,
            title: tx.title,
            price: tx.price,
            description: tx.description,
            category: tx.category,
            image: tx.image,
            sold: tx.sold,
            date_of_sale: from_bson_datetime(tx.date_of_sale),
        }
    }
}

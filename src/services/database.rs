use log::info;
use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::Config;

/// Owned connection to the document store. Opened once at startup and shut down on exit.
pub struct Store {
    client: Client,
    db: Database,
}

impl Store {
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn close(self) {
        self.client.shutdown().await;
        info!("Disconnected from MongoDB");
    }
}

pub async fn connect_to_database(config: &Config) -> mongodb::error::Result<Store> {
    let client = Client::with_uri_str(&config.mongo_uri).await?;
    let db = client.database(&config.db_name);
    // The driver connects lazily; ping so an unreachable server fails startup.
    db.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB database {}", config.db_name);
    Ok(Store { client, db })
}

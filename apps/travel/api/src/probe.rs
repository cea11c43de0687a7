//! Startup check that the travel-sample dataset looks loaded.

use mongodb::{
    Database,
    bson::{Document, doc},
};
use tracing::{info, warn};

/// One well-known document per collection
const SAMPLE_DOCUMENTS: [(&str, &str); 3] = [
    ("airline", "airline_10"),
    ("airport", "airport_1254"),
    ("route", "route_10000"),
];

/// Look up each sample document and log whether it exists.
///
/// Never fails startup; an empty database is a valid state.
pub async fn log_sample_documents(db: &Database) {
    for (collection, id) in SAMPLE_DOCUMENTS {
        let found = db
            .collection::<Document>(collection)
            .find_one(doc! { "_id": id })
            .await;

        match found {
            Ok(Some(_)) => info!(collection, id, "Sample document found"),
            Ok(None) => warn!(collection, id, "Sample document missing, dataset may not be loaded"),
            Err(e) => warn!(collection, id, error = %e, "Sample document lookup failed"),
        }
    }
}

//! MongoDB implementation of RouteRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
    options::FindOptions,
};
use pagination::{Page, PageRequest};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{RouteError, RouteResult};
use crate::models::{Route, Schedule};
use crate::repository::RouteRepository;

pub const ROUTE_COLLECTION: &str = "route";

/// Stored route; airport and airline references use the dataset's
/// lower-case field names.
#[derive(Debug, Serialize, Deserialize)]
struct RouteDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    airline: Option<String>,
    #[serde(rename = "airlineid", default)]
    airline_id: Option<String>,
    #[serde(rename = "sourceairport", default)]
    source_airport: Option<String>,
    #[serde(rename = "destinationairport", default)]
    destination_airport: Option<String>,
    #[serde(default)]
    stops: Option<i32>,
    #[serde(default)]
    equipment: Option<String>,
    #[serde(default)]
    schedule: Option<Vec<Schedule>>,
    #[serde(default)]
    distance: Option<f64>,
}

impl From<Route> for RouteDocument {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            kind: Some(route.kind),
            airline: Some(route.airline),
            airline_id: Some(route.airline_id),
            source_airport: Some(route.source_airport),
            destination_airport: Some(route.destination_airport),
            stops: Some(route.stops),
            equipment: Some(route.equipment),
            schedule: Some(route.schedule),
            distance: Some(route.distance),
        }
    }
}

impl From<RouteDocument> for Route {
    fn from(doc: RouteDocument) -> Self {
        Self {
            id: doc.id,
            kind: doc.kind.unwrap_or_default(),
            airline: doc.airline.unwrap_or_default(),
            airline_id: doc.airline_id.unwrap_or_default(),
            source_airport: doc.source_airport.unwrap_or_default(),
            destination_airport: doc.destination_airport.unwrap_or_default(),
            stops: doc.stops.unwrap_or_default(),
            equipment: doc.equipment.unwrap_or_default(),
            schedule: doc.schedule.unwrap_or_default(),
            distance: doc.distance.unwrap_or_default(),
        }
    }
}

pub struct MongoRouteRepository {
    collection: Collection<RouteDocument>,
}

impl MongoRouteRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(ROUTE_COLLECTION),
        }
    }

    fn id_filter(id: &str) -> Document {
        doc! { "_id": id }
    }
}

#[async_trait]
impl RouteRepository for MongoRouteRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> RouteResult<Option<Route>> {
        let doc = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(doc.map(Route::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RouteResult<Page<Route>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(page.limit())
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let docs: Vec<RouteDocument> = cursor.try_collect().await?;
        let total = self.collection.count_documents(doc! {}).await?;

        Ok(Page::new(
            docs.into_iter().map(Route::from).collect(),
            page,
            total,
        ))
    }

    #[instrument(skip(self, route), fields(route_id = %route.id))]
    async fn create(&self, route: Route) -> RouteResult<Route> {
        let document = RouteDocument::from(route.clone());

        match self.collection.insert_one(&document).await {
            Ok(_) => {
                tracing::info!(route_id = %route.id, "Route created");
                Ok(route)
            }
            Err(e) if is_duplicate_key(&e) => Err(RouteError::AlreadyExists(route.id)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, route), fields(route_id = %route.id))]
    async fn update(&self, route: Route) -> RouteResult<Route> {
        let document = RouteDocument::from(route.clone());
        let result = self
            .collection
            .replace_one(Self::id_filter(&route.id), &document)
            .await?;

        if result.matched_count == 0 {
            return Err(RouteError::NotFound(route.id));
        }

        tracing::info!(route_id = %route.id, "Route updated");
        Ok(route)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> RouteResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(RouteError::NotFound(id.to_string()));
        }

        tracing::info!(route_id = %id, "Route deleted");
        Ok(())
    }
}

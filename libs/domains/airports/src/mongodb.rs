//! MongoDB implementation of AirportRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
    options::FindOptions,
};
use pagination::{Page, PageRequest, Slice};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AirportError, AirportResult};
use crate::models::{Airport, Geo};
use crate::repository::AirportRepository;

pub const AIRPORT_COLLECTION: &str = "airport";
pub const ROUTE_COLLECTION: &str = "route";

#[derive(Debug, Serialize, Deserialize)]
struct AirportDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(rename = "airportname", default)]
    airport_name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    faa: Option<String>,
    #[serde(default)]
    icao: Option<String>,
    #[serde(default)]
    tz: Option<String>,
    #[serde(default)]
    geo: Option<Geo>,
}

impl From<Airport> for AirportDocument {
    fn from(airport: Airport) -> Self {
        Self {
            id: airport.id,
            kind: Some(airport.kind),
            airport_name: Some(airport.airport_name),
            city: Some(airport.city),
            country: Some(airport.country),
            faa: airport.faa,
            icao: Some(airport.icao),
            tz: Some(airport.tz),
            geo: airport.geo,
        }
    }
}

impl From<AirportDocument> for Airport {
    fn from(doc: AirportDocument) -> Self {
        Self {
            id: doc.id,
            kind: doc.kind.unwrap_or_default(),
            airport_name: doc.airport_name.unwrap_or_default(),
            city: doc.city.unwrap_or_default(),
            country: doc.country.unwrap_or_default(),
            faa: doc.faa,
            icao: doc.icao.unwrap_or_default(),
            tz: doc.tz.unwrap_or_default(),
            geo: doc.geo,
        }
    }
}

pub struct MongoAirportRepository {
    airports: Collection<AirportDocument>,
    routes: Collection<Document>,
}

impl MongoAirportRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            airports: db.collection(AIRPORT_COLLECTION),
            routes: db.collection(ROUTE_COLLECTION),
        }
    }

    fn id_filter(id: &str) -> Document {
        doc! { "_id": id }
    }

    /// Distinct non-stop destinations of `airport`, one page plus a probe row
    fn direct_connections_pipeline(airport: &str, page: PageRequest) -> Vec<Document> {
        let skip = i64::try_from(page.offset()).unwrap_or(i64::MAX);

        vec![
            doc! { "$match": {
                "sourceairport": airport,
                "stops": 0,
                "destinationairport": { "$ne": null },
            } },
            doc! { "$group": { "_id": "$destinationairport" } },
            doc! { "$sort": { "_id": 1 } },
            doc! { "$skip": skip },
            doc! { "$limit": Slice::<String>::probe_limit(page) },
        ]
    }
}

#[async_trait]
impl AirportRepository for MongoAirportRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> AirportResult<Option<Airport>> {
        let doc = self.airports.find_one(Self::id_filter(id)).await?;
        Ok(doc.map(Airport::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> AirportResult<Page<Airport>> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(page.limit())
            .build();

        let cursor = self.airports.find(doc! {}).with_options(options).await?;
        let docs: Vec<AirportDocument> = cursor.try_collect().await?;
        let total = self.airports.count_documents(doc! {}).await?;

        Ok(Page::new(
            docs.into_iter().map(Airport::from).collect(),
            page,
            total,
        ))
    }

    #[instrument(skip(self))]
    async fn direct_connections(
        &self,
        airport: &str,
        page: PageRequest,
    ) -> AirportResult<Slice<String>> {
        let cursor = self
            .routes
            .aggregate(Self::direct_connections_pipeline(airport, page))
            .await?;
        let groups: Vec<Document> = cursor.try_collect().await?;

        let codes = groups
            .iter()
            .filter_map(|group| group.get_str("_id").ok())
            .map(str::to_string)
            .collect();

        Ok(Slice::from_probe(codes, page))
    }

    #[instrument(skip(self, airport), fields(airport_id = %airport.id))]
    async fn create(&self, airport: Airport) -> AirportResult<Airport> {
        let document = AirportDocument::from(airport.clone());

        match self.airports.insert_one(&document).await {
            Ok(_) => {
                tracing::info!(airport_id = %airport.id, "Airport created");
                Ok(airport)
            }
            Err(e) if is_duplicate_key(&e) => Err(AirportError::AlreadyExists(airport.id)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, airport), fields(airport_id = %airport.id))]
    async fn update(&self, airport: Airport) -> AirportResult<Airport> {
        let document = AirportDocument::from(airport.clone());
        let result = self
            .airports
            .replace_one(Self::id_filter(&airport.id), &document)
            .await?;

        if result.matched_count == 0 {
            return Err(AirportError::NotFound(airport.id));
        }

        tracing::info!(airport_id = %airport.id, "Airport updated");
        Ok(airport)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> AirportResult<()> {
        let result = self.airports.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(AirportError::NotFound(id.to_string()));
        }

        tracing::info!(airport_id = %id, "Airport deleted");
        Ok(())
    }
}

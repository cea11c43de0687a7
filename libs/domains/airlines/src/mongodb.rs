//! MongoDB implementation of AirlineRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
    options::FindOptions,
};
use pagination::{Page, PageRequest};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AirlineError, AirlineResult};
use crate::models::Airline;
use crate::repository::AirlineRepository;

pub const AIRLINE_COLLECTION: &str = "airline";
pub const ROUTE_COLLECTION: &str = "route";

/// Stored form of an airline. Older documents may carry nulls, which read
/// back as empty strings.
#[derive(Debug, Serialize, Deserialize)]
struct AirlineDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    iata: Option<String>,
    #[serde(default)]
    icao: Option<String>,
    #[serde(default)]
    callsign: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl From<Airline> for AirlineDocument {
    fn from(airline: Airline) -> Self {
        Self {
            id: airline.id,
            kind: Some(airline.kind),
            name: Some(airline.name),
            iata: Some(airline.iata),
            icao: Some(airline.icao),
            callsign: Some(airline.callsign),
            country: Some(airline.country),
        }
    }
}

impl From<AirlineDocument> for Airline {
    fn from(doc: AirlineDocument) -> Self {
        Self {
            id: doc.id,
            kind: doc.kind.unwrap_or_default(),
            name: doc.name.unwrap_or_default(),
            iata: doc.iata.unwrap_or_default(),
            icao: doc.icao.unwrap_or_default(),
            callsign: doc.callsign.unwrap_or_default(),
            country: doc.country.unwrap_or_default(),
        }
    }
}

/// MongoDB implementation of the AirlineRepository
///
/// Destination lookups read the `route` collection of the same database.
pub struct MongoAirlineRepository {
    airlines: Collection<AirlineDocument>,
    routes: Collection<Document>,
}

impl MongoAirlineRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            airlines: db.collection(AIRLINE_COLLECTION),
            routes: db.collection(ROUTE_COLLECTION),
        }
    }

    fn id_filter(id: &str) -> Document {
        doc! { "_id": id }
    }

    fn country_filter(country: &str) -> Document {
        doc! { "country": country }
    }

    /// Routes arriving at `airport`
    fn destination_route_filter(airport: &str) -> Document {
        doc! { "destinationairport": airport }
    }

    fn ids_filter(ids: Vec<Bson>) -> Document {
        doc! { "_id": { "$in": ids } }
    }

    fn page_options(page: PageRequest) -> FindOptions {
        FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(page.limit())
            .build()
    }

    async fn find_page(&self, filter: Document, page: PageRequest) -> AirlineResult<Page<Airline>> {
        let options = Self::page_options(page);

        let cursor = self
            .airlines
            .find(filter.clone())
            .with_options(options)
            .await?;
        let docs: Vec<AirlineDocument> = cursor.try_collect().await?;
        let total = self.airlines.count_documents(filter).await?;

        Ok(Page::new(
            docs.into_iter().map(Airline::from).collect(),
            page,
            total,
        ))
    }
}

#[async_trait]
impl AirlineRepository for MongoAirlineRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> AirlineResult<Option<Airline>> {
        let doc = self.airlines.find_one(Self::id_filter(id)).await?;
        Ok(doc.map(Airline::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> AirlineResult<Page<Airline>> {
        self.find_page(doc! {}, page).await
    }

    #[instrument(skip(self))]
    async fn find_by_country(
        &self,
        country: &str,
        page: PageRequest,
    ) -> AirlineResult<Page<Airline>> {
        self.find_page(Self::country_filter(country), page).await
    }

    #[instrument(skip(self))]
    async fn find_by_destination_airport(
        &self,
        airport: &str,
        page: PageRequest,
    ) -> AirlineResult<Page<Airline>> {
        let airline_ids = self
            .routes
            .distinct("airlineid", Self::destination_route_filter(airport))
            .await?;

        if airline_ids.is_empty() {
            return Ok(Page::new(Vec::new(), page, 0));
        }

        self.find_page(Self::ids_filter(airline_ids), page).await
    }

    #[instrument(skip(self, airline), fields(airline_id = %airline.id))]
    async fn create(&self, airline: Airline) -> AirlineResult<Airline> {
        let document = AirlineDocument::from(airline.clone());

        match self.airlines.insert_one(&document).await {
            Ok(_) => {
                tracing::info!(airline_id = %airline.id, "Airline created");
                Ok(airline)
            }
            Err(e) if is_duplicate_key(&e) => Err(AirlineError::AlreadyExists(airline.id)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, airline), fields(airline_id = %airline.id))]
    async fn update(&self, airline: Airline) -> AirlineResult<Airline> {
        let document = AirlineDocument::from(airline.clone());
        let result = self
            .airlines
            .replace_one(Self::id_filter(&airline.id), &document)
            .await?;

        if result.matched_count == 0 {
            return Err(AirlineError::NotFound(airline.id));
        }

        tracing::info!(airline_id = %airline.id, "Airline updated");
        Ok(airline)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> AirlineResult<()> {
        let result = self.airlines.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(AirlineError::NotFound(id.to_string()));
        }

        tracing::info!(airline_id = %id, "Airline deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_country_filter() {
        let filter = MongoAirlineRepository::country_filter("France");
        assert_eq!(filter, doc! { "country": "France" });
    }

    #[test]
    fn test_destination_route_filter_uses_stored_field_name() {
        let filter = MongoAirlineRepository::destination_route_filter("SFO");
        assert_eq!(filter.get_str("destinationairport").unwrap(), "SFO");
        assert!(!filter.contains_key("destinationAirport"));
    }

    #[test]
    fn test_ids_filter() {
        let ids = vec![Bson::from("airline_10"), Bson::from("airline_137")];
        let filter = MongoAirlineRepository::ids_filter(ids);
        let in_list = filter
            .get_document("_id")
            .unwrap()
            .get_array("$in")
            .unwrap();
        assert_eq!(in_list.len(), 2);
    }

    #[test]
    fn test_page_options_for_huge_page_still_serialize() {
        let options = MongoAirlineRepository::page_options(PageRequest::new(u64::MAX / 5, 10));
        let encoded = bson::to_document(&options).unwrap();
        assert_eq!(encoded.get_i64("skip").unwrap(), i64::MAX);
        assert_eq!(encoded.get_i64("limit").unwrap(), 10);
    }

    #[test]
    fn test_document_maps_type_and_key() {
        let airline = Airline {
            id: "airline_10".into(),
            kind: "airline".into(),
            name: "40-Mile Air".into(),
            iata: "Q5".into(),
            icao: "MLA".into(),
            callsign: "MILE-AIR".into(),
            country: "United States".into(),
        };
        let stored = bson::to_document(&AirlineDocument::from(airline)).unwrap();
        assert_eq!(stored.get_str("_id").unwrap(), "airline_10");
        assert_eq!(stored.get_str("type").unwrap(), "airline");
        assert!(!stored.contains_key("id"));
    }

    #[test]
    fn test_document_with_nulls_reads_back() {
        let stored = doc! { "_id": "airline_1", "type": "airline", "name": "Legacy", "iata": Bson::Null };
        let doc: AirlineDocument = bson::from_document(stored).unwrap();
        let airline = Airline::from(doc);
        assert_eq!(airline.name, "Legacy");
        assert_eq!(airline.iata, "");
        assert_eq!(airline.country, "");
    }
}

//! Repository tests against a real MongoDB started with testcontainers.
//!
//! Run with `cargo test -p domain_airlines -- --ignored` (requires Docker).

use domain_airlines::{Airline, AirlineError, AirlineRepository, MongoAirlineRepository};
use mongodb::bson::{Document, doc};
use pagination::PageRequest;
use test_utils::{TestDataBuilder, TestMongo};

fn airline(id: &str, name: &str, country: &str) -> Airline {
    Airline {
        id: id.to_string(),
        kind: "airline".into(),
        name: name.to_string(),
        iata: "Q5".into(),
        icao: "MLA".into(),
        callsign: "MILE-AIR".into(),
        country: country.to_string(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_crud_lifecycle() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("airline_crud_lifecycle");
    let db = mongo.database(&builder.database_name());
    let repo = MongoAirlineRepository::new(&db);
    let id = builder.document_id("airline", "main");

    let created = repo
        .create(airline(&id, "40-Mile Air", "United States"))
        .await
        .unwrap();
    assert_eq!(repo.get_by_id(&id).await.unwrap(), Some(created));

    let err = repo
        .create(airline(&id, "Other Air", "France"))
        .await
        .unwrap_err();
    assert!(matches!(err, AirlineError::AlreadyExists(_)));
    assert_eq!(repo.get_by_id(&id).await.unwrap().unwrap().name, "40-Mile Air");

    let updated = repo
        .update(airline(&id, "Forty Mile Air", "United States"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Forty Mile Air");

    repo.delete(&id).await.unwrap();
    assert!(repo.get_by_id(&id).await.unwrap().is_none());
    assert!(matches!(
        repo.delete(&id).await.unwrap_err(),
        AirlineError::NotFound(_)
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_is_not_found() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("airline_update_missing");
    let repo = MongoAirlineRepository::new(&mongo.database(&builder.database_name()));

    let err = repo
        .update(airline("airline_404", "Nobody", "Nowhere"))
        .await
        .unwrap_err();
    assert!(matches!(err, AirlineError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_country_paging_is_ordered_by_id() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("airline_country_paging");
    let repo = MongoAirlineRepository::new(&mongo.database(&builder.database_name()));

    for n in [3, 1, 2] {
        repo.create(airline(&format!("airline_{n}"), "Air", "France"))
            .await
            .unwrap();
    }
    repo.create(airline("airline_9", "Air", "Germany"))
        .await
        .unwrap();

    let first = repo
        .find_by_country("France", PageRequest::new(0, 2))
        .await
        .unwrap();
    assert_eq!(first.total_elements, 3);
    assert_eq!(first.total_pages, 2);
    let ids: Vec<_> = first.content.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["airline_1", "airline_2"]);

    let beyond = repo
        .find_by_country("France", PageRequest::new(5, 2))
        .await
        .unwrap();
    assert!(beyond.content.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_destination_airport() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("airline_destination");
    let db = mongo.database(&builder.database_name());
    let repo = MongoAirlineRepository::new(&db);

    repo.create(airline("airline_1", "One", "France")).await.unwrap();
    repo.create(airline("airline_2", "Two", "France")).await.unwrap();
    repo.create(airline("airline_3", "Three", "France")).await.unwrap();

    db.collection::<Document>("route")
        .insert_many([
            doc! { "_id": "route_1", "airlineid": "airline_1", "destinationairport": "SFO" },
            doc! { "_id": "route_2", "airlineid": "airline_1", "destinationairport": "SFO" },
            doc! { "_id": "route_3", "airlineid": "airline_3", "destinationairport": "SFO" },
            doc! { "_id": "route_4", "airlineid": "airline_2", "destinationairport": "LAX" },
        ])
        .await
        .unwrap();

    let page = repo
        .find_by_destination_airport("SFO", PageRequest::default())
        .await
        .unwrap();
    let ids: Vec<_> = page.content.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["airline_1", "airline_3"]);

    let none = repo
        .find_by_destination_airport("JFK", PageRequest::default())
        .await
        .unwrap();
    assert!(none.empty);
}

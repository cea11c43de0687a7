//! Requires Docker: `cargo test -p domain_routes -- --ignored`

use domain_routes::{MongoRouteRepository, Route, RouteError, RouteRepository, Schedule};
use pagination::PageRequest;
use test_utils::{TestDataBuilder, TestMongo};

fn route(id: &str, destination: &str) -> Route {
    Route {
        id: id.to_string(),
        kind: "route".into(),
        airline: "AF".into(),
        airline_id: "airline_137".into(),
        source_airport: "TLV".into(),
        destination_airport: destination.to_string(),
        stops: 0,
        equipment: "320".into(),
        schedule: vec![
            Schedule { day: 3, flight: "AF198".into(), utc: "10:13:00".into() },
            Schedule { day: 1, flight: "AF547".into(), utc: "19:14:00".into() },
        ],
        distance: 2881.617376098415,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_route_crud() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("route_crud");
    let repo = MongoRouteRepository::new(&mongo.database(&builder.database_name()));
    let id = builder.document_id("route", "tlv_mrs");

    let created = repo.create(route(&id, "MRS")).await.unwrap();
    let fetched = repo.get_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.schedule[0].day, 3);

    assert!(matches!(
        repo.create(route(&id, "CDG")).await,
        Err(RouteError::AlreadyExists(_))
    ));

    repo.update(route(&id, "CDG")).await.unwrap();
    assert_eq!(
        repo.get_by_id(&id).await.unwrap().unwrap().destination_airport,
        "CDG"
    );

    repo.delete(&id).await.unwrap();
    assert!(repo.get_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_pages() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("route_list_pages");
    let repo = MongoRouteRepository::new(&mongo.database(&builder.database_name()));

    for n in 1..=12 {
        repo.create(route(&format!("route_{n:02}"), "MRS")).await.unwrap();
    }

    let first = repo.list(PageRequest::default()).await.unwrap();
    assert_eq!(first.content.len(), 10);
    assert_eq!(first.content[0].id, "route_01");
    assert_eq!(first.total_pages, 2);

    let second = repo.list(PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(second.content.len(), 2);
    assert!(second.last);
}

use axum_helpers::validation::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Document key; taken from the path on writes
    #[serde(default)]
    #[schema(example = "route_10000")]
    pub id: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "route")]
    pub kind: String,

    /// IATA code of the operating airline
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "AF")]
    pub airline: String,

    /// Id of the operating airline document
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "airline_137")]
    pub airline_id: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "TLV")]
    pub source_airport: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "MRS")]
    pub destination_airport: String,

    #[schema(example = 0)]
    pub stops: i32,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "320")]
    pub equipment: String,

    /// Weekly departures, kept in the order given
    #[serde(default)]
    #[validate(nested)]
    pub schedule: Vec<Schedule>,

    /// Great-circle distance in kilometres
    #[schema(example = 2881.617376098415)]
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Schedule {
    /// Day of week, 0 = Sunday
    #[schema(example = 0)]
    pub day: i32,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "AF198")]
    pub flight: String,

    /// Departure time, `HH:MM:SS`
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "10:13:00")]
    pub utc: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn route_json() -> serde_json::Value {
        json!({
            "type": "route",
            "airline": "AF",
            "airlineId": "airline_137",
            "sourceAirport": "TLV",
            "destinationAirport": "MRS",
            "stops": 0,
            "equipment": "320",
            "schedule": [
                { "day": 0, "flight": "AF198", "utc": "10:13:00" },
                { "day": 0, "flight": "AF547", "utc": "19:14:00" }
            ],
            "distance": 2881.617376098415
        })
    }

    #[test]
    fn test_parse_and_validate() {
        let route: Route = serde_json::from_value(route_json()).unwrap();
        assert_eq!(route.airline_id, "airline_137");
        assert_eq!(route.schedule[1].flight, "AF547");
        assert!(route.validate().is_ok());
    }

    #[test]
    fn test_missing_stops_does_not_parse() {
        let mut value = route_json();
        value.as_object_mut().unwrap().remove("stops");
        assert!(serde_json::from_value::<Route>(value).is_err());
    }

    #[test]
    fn test_blank_schedule_flight_rejected() {
        let mut route: Route = serde_json::from_value(route_json()).unwrap();
        route.schedule[0].flight = " ".into();
        assert!(route.validate().is_err());
    }

    #[test]
    fn test_empty_schedule_allowed() {
        let mut value = route_json();
        value.as_object_mut().unwrap().remove("schedule");
        let route: Route = serde_json::from_value(value).unwrap();
        assert!(route.schedule.is_empty());
        assert!(route.validate().is_ok());
    }
}

use axum_helpers::validation::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Airline document as exposed over HTTP
///
/// `id` is the document key (`airline_10`). On writes the key always comes
/// from the request path, so the body may omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    #[serde(default)]
    #[schema(example = "airline_10")]
    pub id: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "airline")]
    pub kind: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "40-Mile Air")]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Q5")]
    pub iata: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "MLA")]
    pub icao: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "MILE-AIR")]
    pub callsign: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "United States")]
    pub country: String,
}

/// `?country=` filter for `GET /country`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryQuery {
    /// Exact country name, e.g. `United States`
    pub country: String,
}

/// `?destinationAirport=` filter for `GET /destination`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DestinationQuery {
    /// FAA code of the destination airport, e.g. `SFO`
    pub destination_airport: String,
}

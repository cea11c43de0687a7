use axum_helpers::validation::not_blank;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

static FAA_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());
static ICAO_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{4}$").unwrap());

/// Airport document as exposed over HTTP
///
/// Some stored airports have no FAA code; those read back with `faa: null`
/// but cannot be written that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    #[serde(default)]
    #[schema(example = "airport_1254")]
    pub id: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "airport")]
    pub kind: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Calais Dunkerque")]
    pub airport_name: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Calais")]
    pub city: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "France")]
    pub country: String,

    /// Three upper-case letters
    #[validate(required, regex(path = *FAA_CODE))]
    #[schema(example = "CQF")]
    pub faa: Option<String>,

    /// Four upper-case letters
    #[validate(regex(path = *ICAO_CODE))]
    #[schema(example = "LFAC")]
    pub icao: String,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Europe/Paris")]
    pub tz: String,

    #[serde(default)]
    pub geo: Option<Geo>,
}

/// Coordinates; all three are required when `geo` is present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Geo {
    #[schema(example = 12.0)]
    pub alt: f64,
    #[schema(example = 50.962097)]
    pub lat: f64,
    #[schema(example = 1.954764)]
    pub lon: f64,
}

/// `?airportCode=` filter for `GET /direct-connections`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DirectConnectionsQuery {
    /// FAA code of the departure airport, e.g. `LAX`
    pub airport_code: String,
}

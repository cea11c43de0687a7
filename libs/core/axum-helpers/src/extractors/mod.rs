//! Extractors whose rejections go through [`AppError`](crate::AppError),
//! so malformed input always yields a bare `400 Bad Request`.

pub mod query_params;
pub mod uuid_path;
pub mod validated_json;

pub use query_params::QueryParams;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;

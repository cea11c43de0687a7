use mongodb::{Client, bson::doc};
use std::time::{Duration, Instant};

use crate::common::{DatabaseError, DatabaseResult};

/// Round-trip a `ping` to the server and report how long it took
pub async fn ping(client: &Client) -> DatabaseResult<Duration> {
    let start = Instant::now();
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;
    Ok(start.elapsed())
}

pub mod telemetry;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;
use crate::sink::MeasurementSink;

pub fn router<S>() -> Router<AppState<S>>
where
    S: MeasurementSink,
{
    Router::new()
        .route("/point/{id}", post(telemetry::ingest_point))
        .route("/burst/{id}", post(telemetry::ingest_burst))
        .route("/config/{id}", get(telemetry::fetch_config))
}

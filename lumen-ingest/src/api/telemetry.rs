use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use lumen_core::{DeviceId, Measurement, MeasurementBurst};

use crate::AppState;
use crate::sink::MeasurementSink;

// Measurement uploads are fire-and-forget: decode failures are logged with
// the device id and the request is dropped, no error status goes back to
// the sensor.

/// Point upload: one big-endian `u16` in the body.
pub async fn ingest_point<S>(
    Path(id): Path<String>,
    State(state): State<AppState<S>>,
    body: Bytes,
) -> StatusCode
where
    S: MeasurementSink,
{
    let device = DeviceId::from(id);

    match Measurement::from_bytes(&body) {
        Ok(measurement) => state.sink.record_point(&device, measurement).await,
        Err(e) => {
            error!(
                device_id = %device,
                endpoint = "POST /point/{id}",
                error = %e,
                "rejected point payload"
            );
        }
    }

    StatusCode::OK
}

/// Burst upload: N consecutive big-endian `u16`s in the body.
pub async fn ingest_burst<S>(
    Path(id): Path<String>,
    State(state): State<AppState<S>>,
    body: Bytes,
) -> StatusCode
where
    S: MeasurementSink,
{
    let device = DeviceId::from(id);

    match MeasurementBurst::from_bytes(&body) {
        Ok(burst) => state.sink.record_burst(&device, &burst).await,
        Err(e) => {
            error!(
                device_id = %device,
                endpoint = "POST /burst/{id}",
                error = %e,
                "rejected burst payload"
            );
        }
    }

    StatusCode::OK
}

/// Serves the current sampling config as its 36-byte wire encoding.
pub async fn fetch_config<S>(
    Path(id): Path<String>,
    State(state): State<AppState<S>>,
) -> Response
where
    S: MeasurementSink,
{
    let device = DeviceId::from(id);
    let body = state.sensor_config.to_bytes().to_vec();

    info!(
        device_id = %device,
        config = ?state.sensor_config,
        "wrote config"
    );

    body.into_response()
}

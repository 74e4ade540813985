use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use lumen_core::{DeviceId, Measurement, MeasurementBurst};

/// Receives successfully decoded telemetry.
///
/// Decoding stays pure; everything observable about a measurement happens
/// through a sink implementation.
#[async_trait]
pub trait MeasurementSink: Clone + Send + Sync + 'static {
    async fn record_point(&self, device: &DeviceId, measurement: Measurement);
    async fn record_burst(&self, device: &DeviceId, burst: &MeasurementBurst);
}

/// Production sink: telemetry goes to the structured log and nowhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl MeasurementSink for TracingSink {
    async fn record_point(&self, device: &DeviceId, measurement: Measurement) {
        info!(
            device_id = %device,
            measurement = measurement.0,
            "point measurement"
        );
    }

    async fn record_burst(&self, device: &DeviceId, burst: &MeasurementBurst) {
        let measurements: Vec<u16> = burst.values().collect();
        info!(
            device_id = %device,
            n_samples = burst.len(),
            measurements = ?measurements,
            "burst measurement"
        );
    }
}

/// Captures everything it is handed. Test backend.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    records: Arc<tokio::sync::RwLock<InMemoryRecords>>,
}

#[derive(Debug, Default)]
struct InMemoryRecords {
    points: Vec<(DeviceId, Measurement)>,
    bursts: Vec<(DeviceId, MeasurementBurst)>,
}

impl InMemorySink {
    pub async fn points(&self) -> Vec<(DeviceId, Measurement)> {
        self.records.read().await.points.clone()
    }

    pub async fn bursts(&self) -> Vec<(DeviceId, MeasurementBurst)> {
        self.records.read().await.bursts.clone()
    }
}

#[async_trait]
impl MeasurementSink for InMemorySink {
    async fn record_point(&self, device: &DeviceId, measurement: Measurement) {
        self.records
            .write()
            .await
            .points
            .push((device.clone(), measurement));
    }

    async fn record_burst(&self, device: &DeviceId, burst: &MeasurementBurst) {
        self.records
            .write()
            .await
            .bursts
            .push((device.clone(), burst.clone()));
    }
}

pub mod api;
pub mod config;
pub mod sink;

use lumen_core::SensorConfig;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState<S> {
    /// Config served to any device that asks. Constructed once at startup
    /// and immutable afterwards.
    pub sensor_config: SensorConfig,
    pub sink: S,
}

use serde::{Deserialize, Serialize};

pub mod protocol;

pub use protocol::{Measurement, MeasurementBurst, ProtocolError, SensorConfig};

/// Identifier a sensor device reports itself as.
///
/// Device ids are opaque: the server attributes telemetry and config
/// fetches to them but never parses or interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub Box<str>);

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value.into_boxed_str())
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

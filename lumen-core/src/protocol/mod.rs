mod config;
mod error;
mod measurement;

pub use config::SensorConfig;
pub use error::{ProtocolError, ProtocolResult};
pub use measurement::{Measurement, MeasurementBurst};

// All wire integers are big-endian and unsigned.

/// Width of one config field on the wire.
pub const CONFIG_FIELD_SIZE: usize = 4;
/// Number of fields in a config record.
pub const CONFIG_FIELD_COUNT: usize = 9;
/// Total wire size of an encoded config record.
pub const CONFIG_WIRE_SIZE: usize = CONFIG_FIELD_SIZE * CONFIG_FIELD_COUNT;
/// Width of one encoded measurement.
pub const MEASUREMENT_WIRE_SIZE: usize = 2;

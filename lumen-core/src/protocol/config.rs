use serde::{Deserialize, Serialize};

use super::{CONFIG_FIELD_COUNT, CONFIG_FIELD_SIZE, CONFIG_WIRE_SIZE, ProtocolError, ProtocolResult};

/// Sampling parameters a sensor device fetches to learn its cadence and
/// averaging behavior.
///
/// The record is fixed-layout on the wire: nine unsigned 32-bit fields in
/// declaration order, big-endian, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Number of samples averaged into one point measurement.
    pub point_n_averaged: u32,
    /// Microseconds between averaged point sub-samples.
    pub point_delay_us: u32,
    /// Milliseconds between point measurements.
    pub point_interval_ms: u32,
    /// Reserved.
    pub point_reserved0: u32,
    /// Number of samples collected in one burst.
    pub burst_n_samples: u32,
    /// Microseconds between burst samples.
    pub burst_delay_us: u32,
    /// Milliseconds between bursts.
    pub burst_interval_ms: u32,
    /// Reserved.
    pub burst_reserved0: u32,
    /// Seconds until the device should treat this config as stale.
    pub expiration: u32,
}

impl SensorConfig {
    // Encode and decode both go through this list; it is the single place
    // that fixes the wire field order.
    fn to_fields(self) -> [u32; CONFIG_FIELD_COUNT] {
        [
            self.point_n_averaged,
            self.point_delay_us,
            self.point_interval_ms,
            self.point_reserved0,
            self.burst_n_samples,
            self.burst_delay_us,
            self.burst_interval_ms,
            self.burst_reserved0,
            self.expiration,
        ]
    }

    fn from_fields(
        [
            point_n_averaged,
            point_delay_us,
            point_interval_ms,
            point_reserved0,
            burst_n_samples,
            burst_delay_us,
            burst_interval_ms,
            burst_reserved0,
            expiration,
        ]: [u32; CONFIG_FIELD_COUNT],
    ) -> Self {
        Self {
            point_n_averaged,
            point_delay_us,
            point_interval_ms,
            point_reserved0,
            burst_n_samples,
            burst_delay_us,
            burst_interval_ms,
            burst_reserved0,
            expiration,
        }
    }

    /// Encodes the record into its fixed wire layout.
    pub fn to_bytes(&self) -> [u8; CONFIG_WIRE_SIZE] {
        let mut bytes = [0u8; CONFIG_WIRE_SIZE];

        for (i, field) in self.to_fields().into_iter().enumerate() {
            let at = i * CONFIG_FIELD_SIZE;
            bytes[at..at + CONFIG_FIELD_SIZE].copy_from_slice(&field.to_be_bytes());
        }

        bytes
    }

    /// Decodes a record from its fixed wire layout.
    pub fn from_bytes(bytes: &[u8]) -> ProtocolResult<Self> {
        if bytes.len() != CONFIG_WIRE_SIZE {
            return Err(ProtocolError::MalformedLength {
                expected: CONFIG_WIRE_SIZE,
                actual: bytes.len(),
            });
        }

        let mut fields = [0u32; CONFIG_FIELD_COUNT];
        for (i, field) in fields.iter_mut().enumerate() {
            let at = i * CONFIG_FIELD_SIZE;
            *field = u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        }

        Ok(Self::from_fields(fields))
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            point_n_averaged: 64,
            point_delay_us: 0,
            point_interval_ms: 1000,
            point_reserved0: 0,
            burst_n_samples: 512,
            burst_delay_us: 100,
            burst_interval_ms: 10_000,
            burst_reserved0: 0,
            expiration: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_config() -> SensorConfig {
        SensorConfig {
            point_n_averaged: 1,
            point_delay_us: 2,
            point_interval_ms: 3,
            point_reserved0: 4,
            burst_n_samples: 5,
            burst_delay_us: 6,
            burst_interval_ms: 7,
            burst_reserved0: 8,
            expiration: 9,
        }
    }

    #[test]
    fn default_config_encodes_point_n_averaged_first() {
        let bytes = SensorConfig::default().to_bytes();

        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[..4], &[0x00, 0x00, 0x00, 0x40]);
    }

    #[test]
    fn encoding_preserves_field_order() {
        let bytes = distinct_config().to_bytes();

        for (i, expected) in (1u32..=9).enumerate() {
            let at = i * 4;
            let field = u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
            assert_eq!(field, expected, "field {i} out of order");
        }
    }

    #[test]
    fn round_trip_is_identity() {
        let config = distinct_config();
        assert_eq!(SensorConfig::from_bytes(&config.to_bytes()), Ok(config));

        let config = SensorConfig::default();
        assert_eq!(SensorConfig::from_bytes(&config.to_bytes()), Ok(config));
    }

    #[test]
    fn reserved_fields_round_trip_unchanged() {
        let config = SensorConfig {
            point_reserved0: 0xDEAD_BEEF,
            burst_reserved0: 0xCAFE_F00D,
            ..SensorConfig::default()
        };

        let decoded = SensorConfig::from_bytes(&config.to_bytes()).unwrap();
        assert_eq!(decoded.point_reserved0, 0xDEAD_BEEF);
        assert_eq!(decoded.burst_reserved0, 0xCAFE_F00D);
    }

    #[test]
    fn decode_rejects_any_other_length() {
        for len in [0, 1, 35, 37, 72] {
            let bytes = vec![0u8; len];
            assert_eq!(
                SensorConfig::from_bytes(&bytes),
                Err(ProtocolError::MalformedLength {
                    expected: 36,
                    actual: len,
                }),
            );
        }
    }

    #[test]
    fn expiration_sits_in_the_last_field() {
        let config = SensorConfig {
            expiration: 0x0102_0304,
            ..SensorConfig::default()
        };

        let bytes = config.to_bytes();
        assert_eq!(&bytes[32..], &[0x01, 0x02, 0x03, 0x04]);
    }
}

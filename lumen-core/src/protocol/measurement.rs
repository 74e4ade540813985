use serde::{Deserialize, Serialize};

use super::{MEASUREMENT_WIRE_SIZE, ProtocolError, ProtocolResult};

/// One raw sensor count. No scaling is applied at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurement(pub u16);

impl Measurement {
    /// Decodes a point payload: exactly one big-endian `u16`.
    pub fn from_bytes(bytes: &[u8]) -> ProtocolResult<Self> {
        if bytes.len() != MEASUREMENT_WIRE_SIZE {
            return Err(ProtocolError::WrongBodySize {
                expected: MEASUREMENT_WIRE_SIZE,
                actual: bytes.len(),
            });
        }

        Ok(Self(u16::from_be_bytes([bytes[0], bytes[1]])))
    }
}

/// An ordered batch of raw samples collected in one burst upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementBurst(pub Box<[Measurement]>);

impl MeasurementBurst {
    /// Decodes a burst payload: N consecutive big-endian `u16`s, arrival
    /// order preserved. An empty payload is a valid empty burst.
    pub fn from_bytes(bytes: &[u8]) -> ProtocolResult<Self> {
        if bytes.len() % MEASUREMENT_WIRE_SIZE != 0 {
            return Err(ProtocolError::OddBodySize { len: bytes.len() });
        }

        let samples: Box<[Measurement]> = bytes
            .chunks_exact(MEASUREMENT_WIRE_SIZE)
            .map(|pair| Measurement(u16::from_be_bytes([pair[0], pair[1]])))
            .collect();

        // The decode must account for every input byte.
        let consumed = samples.len() * MEASUREMENT_WIRE_SIZE;
        if consumed != bytes.len() {
            return Err(ProtocolError::DecodeShortRead {
                expected: bytes.len(),
                actual: consumed,
            });
        }

        Ok(Self(samples))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw counts in arrival order.
    pub fn values(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().map(|m| m.0)
    }
}

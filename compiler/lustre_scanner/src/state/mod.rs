//! Persistent scanner state and its snapshot encoding.
//!
//! The only state that survives between scans is whether a pragma header
//! has just been opened. The parser may suspend and resume scanning at any
//! token boundary (incremental reparsing), so the mode is saved to a byte
//! buffer after every token and restored before the next scan.
//!
//! # Encoding
//!
//! One byte: `0` for [`PragmaMode::Idle`], `1` for
//! [`PragmaMode::AwaitingValue`]. An empty buffer means "no state" and
//! restores `Idle`.

use thiserror::Error;

/// Number of bytes [`PragmaMode::encode`] writes.
pub const SERIALIZED_LEN: usize = 1;

/// Where the scanner is in the two-phase pragma protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PragmaMode {
    /// Ordinary scanning.
    #[default]
    Idle,
    /// A pragma start matched; the next pragma value scan consumes the payload.
    AwaitingValue,
}

/// Failure to save or restore a scanner snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The target buffer cannot hold the encoded state.
    #[error("snapshot needs {needed} bytes but the buffer holds {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// The mode byte is not one this scanner writes.
    #[error("unknown pragma mode tag 0x{0:02X}")]
    UnknownMode(u8),

    /// The snapshot is longer than any encoding this scanner writes.
    #[error("snapshot has {len} bytes, expected at most {max}", max = SERIALIZED_LEN)]
    TrailingBytes { len: usize },
}

impl PragmaMode {
    const IDLE_TAG: u8 = 0;
    const AWAITING_VALUE_TAG: u8 = 1;

    #[inline]
    pub const fn is_awaiting_value(self) -> bool {
        matches!(self, PragmaMode::AwaitingValue)
    }

    /// The snapshot byte for this mode.
    #[inline]
    pub const fn tag(self) -> u8 {
        match self {
            PragmaMode::Idle => Self::IDLE_TAG,
            PragmaMode::AwaitingValue => Self::AWAITING_VALUE_TAG,
        }
    }

    /// Write the mode into `buffer`, returning the number of bytes written.
    pub fn encode(self, buffer: &mut [u8]) -> Result<usize, StateError> {
        let Some(slot) = buffer.first_mut() else {
            return Err(StateError::BufferTooSmall {
                needed: SERIALIZED_LEN,
                available: 0,
            });
        };
        *slot = self.tag();
        Ok(SERIALIZED_LEN)
    }

    /// Read a mode back from a snapshot produced by [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        match bytes {
            [] => Ok(PragmaMode::Idle),
            [Self::IDLE_TAG] => Ok(PragmaMode::Idle),
            [Self::AWAITING_VALUE_TAG] => Ok(PragmaMode::AwaitingValue),
            [tag] => Err(StateError::UnknownMode(*tag)),
            _ => Err(StateError::TrailingBytes { len: bytes.len() }),
        }
    }
}

//! Error taxonomy shared by every component.
//!
//! Nothing here is retried or recovered internally. Each variant reaches the
//! caller unchanged.

use crate::repr::Representation;

/// Errors raised by bit reading, representation handling and the ALU.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The host's signed-integer behavior matches none of the supported
    /// representations, or the detected candidate failed verification.
    #[error("unsupported architecture: {reason} (candidate: {candidate:?})")]
    UnsupportedArchitecture {
        /// Representation suggested by the probe, if any.
        candidate: Option<Representation>,
        /// What the verification step observed.
        reason: &'static str,
    },

    /// A representation with no implemented conversion was requested.
    #[error("unsupported format: {0} has no conversion")]
    UnsupportedFormat(Representation),

    /// Division or modulus by zero.
    #[error("divide by zero (dividend {dividend:#010x})")]
    DivideByZero {
        /// The dividend that was being divided.
        dividend: u32,
    },

    /// A logarithm base below 2.
    #[error("invalid logarithm base {0}, expected at least 2")]
    InvalidLogBase(u32),

    /// A bit window extends past the end of its buffer.
    #[error(
        "bit window out of range: {count} bits from byte {byte_offset} bit {bit_offset} \
         exceeds buffer of {len} bytes"
    )]
    IndexOutOfRange {
        /// Starting byte offset (after folding the bit offset).
        byte_offset: usize,
        /// Starting bit offset within the byte.
        bit_offset: usize,
        /// Number of bits requested.
        count: usize,
        /// Buffer length in bytes.
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

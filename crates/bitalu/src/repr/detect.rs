//! One-time probe of the host's signed-integer representation.
//!
//! The probe trusts only the host's bitwise AND, which behaves the same under
//! every representation:
//!
//! ```text
//!                       -1 bits    1 & -1   3 & -1
//! two's complement      ...1111    1        3
//! one's complement      ...1110    0        2
//! sign-magnitude        1...0001   1        1
//! ```
//!
//! The candidate is then cross-checked by an independent observation of
//! single-byte conversions. A disagreement is fatal: every conversion built
//! on the detected representation would be unsound.

use std::hint::black_box;
use std::sync::OnceLock;

use log::{debug, error};

use super::Representation;
use crate::error::{Error, Result};

/// Observations the detector needs from a host.
///
/// [`HostProbe`] reads them from the machine running this code. Other
/// implementations let the detection logic be exercised for hosts that
/// cannot be run directly.
pub trait ArchitectureProbe {
    /// `value AND -1`, using the host's native AND on `i32`.
    fn and_minus_one(&self, value: i32) -> i32;

    /// `u8::MAX` reinterpreted as a signed byte.
    fn max_unsigned_byte_as_signed(&self) -> i8;

    /// The maximum signed single-byte value as the host stores it.
    fn max_signed_byte(&self) -> i8;
}

/// Probe backed by the current host.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl ArchitectureProbe for HostProbe {
    #[inline]
    fn and_minus_one(&self, value: i32) -> i32 {
        black_box(value) & black_box(-1i32)
    }

    #[inline]
    fn max_unsigned_byte_as_signed(&self) -> i8 {
        black_box(u8::MAX) as i8
    }

    #[inline]
    fn max_signed_byte(&self) -> i8 {
        black_box(i8::MAX)
    }
}

/// Runs the detection algorithm against `probe`.
///
/// # Errors
///
/// [`Error::UnsupportedArchitecture`] when no candidate fits or the
/// candidate fails its verification check.
pub fn detect<P: ArchitectureProbe + ?Sized>(probe: &P) -> Result<Representation> {
    let bit0 = probe.and_minus_one(1);
    let candidate = if bit0 == 0 {
        Representation::OnesComplement
    } else {
        match probe.and_minus_one(3) {
            1 => Representation::SignedMagnitude,
            3 => Representation::TwosComplement,
            _ => {
                return Err(Error::UnsupportedArchitecture {
                    candidate: None,
                    reason: "3 AND -1 matches no supported representation",
                })
            }
        }
    };

    if !verify(probe, candidate) {
        return Err(Error::UnsupportedArchitecture {
            candidate: Some(candidate),
            reason: "verification probe disagrees with candidate",
        });
    }
    Ok(candidate)
}

fn verify<P: ArchitectureProbe + ?Sized>(probe: &P, candidate: Representation) -> bool {
    match candidate {
        Representation::TwosComplement => probe.max_unsigned_byte_as_signed() == -1,
        Representation::OnesComplement => probe.max_signed_byte() == -1,
        Representation::SignedMagnitude => probe.and_minus_one(3) == 1,
        _ => false,
    }
}

static DETECTED: OnceLock<Result<Representation>> = OnceLock::new();

/// The host representation, probed on first call and cached for the
/// lifetime of the process.
///
/// Concurrent first callers block until a single probe completes and all
/// observe its result.
///
/// # Errors
///
/// The cached [`Error::UnsupportedArchitecture`] if the probe failed.
pub fn try_current_representation() -> Result<Representation> {
    DETECTED
        .get_or_init(|| {
            let detected = detect(&HostProbe);
            match &detected {
                Ok(repr) => debug!("detected signed representation: {repr}"),
                Err(err) => error!("signed representation probe failed: {err}"),
            }
            detected
        })
        .clone()
}

/// The host representation.
///
/// # Panics
///
/// Panics if the host uses none of the supported representations. No
/// representation-aware conversion is sound on such a host.
#[must_use]
pub fn current_representation() -> Representation {
    match try_current_representation() {
        Ok(repr) => repr,
        Err(err) => panic!("{err}"),
    }
}

//! Conversions between one's-complement, two's-complement and
//! sign-magnitude words.
//!
//! All functions are pure and operate on 32-bit words. Negative inputs are
//! selected with a sign mask (`v >> 31` as an arithmetic shift, all ones
//! when negative) rather than a branch.
//!
//! # Minimum value
//!
//! `0x8000_0000` is `i32::MIN` in two's complement, which has no positive
//! counterpart. In sign-magnitude the same bits denote negative zero, so
//! [`twos_complement_to_signed_magnitude`] maps `i32::MIN` to negative zero
//! and back. The bits round-trip; the value `-2^31` does not survive.

use super::Representation;
use crate::error::{Error, Result};

/// The sign bit of a 32-bit word.
pub const SIGN_BIT: u32 = 0x8000_0000;

/// Every bit except the sign bit.
pub const MAGNITUDE_MASK: u32 = 0x7FFF_FFFF;

/// All ones if the sign bit of `v` is set, otherwise zero.
#[inline]
const fn sign_mask(v: u32) -> u32 {
    ((v as i32) >> 31) as u32
}

/// One's-complement negation: `!v`.
#[inline]
#[must_use]
pub const fn ones_complement(v: u32) -> u32 {
    !v
}

/// Two's-complement negation: `!v + 1`, wrapping.
///
/// Zero is its own negation, as is `0x8000_0000`.
#[inline]
#[must_use]
pub const fn twos_complement(v: u32) -> u32 {
    (!v).wrapping_add(1)
}

/// Splits a value into `(magnitude, sign)` with `sign` in `{-1, 0, 1}`.
///
/// ```
/// use bitalu::repr::signed_magnitude;
///
/// assert_eq!(signed_magnitude(-42), (42, -1));
/// assert_eq!(signed_magnitude(0), (0, 0));
/// assert_eq!(signed_magnitude(i32::MIN), (0x8000_0000, -1));
/// ```
#[must_use]
pub const fn signed_magnitude(v: i32) -> (u32, i32) {
    let sign = v.signum();
    let bits = v as u32;
    let magnitude = if sign == -1 { twos_complement(bits) } else { bits };
    (magnitude, sign)
}

/// Two's-complement word to sign-magnitude word.
///
/// `((v + s) ^ s) | (v & SIGN_BIT)` with `s` the sign mask.
#[inline]
#[must_use]
pub const fn twos_complement_to_signed_magnitude(v: u32) -> u32 {
    let sign = sign_mask(v);
    (v.wrapping_add(sign) ^ sign) | (v & SIGN_BIT)
}

/// Sign-magnitude word to two's-complement word.
///
/// Negative words have their magnitude negated (`!m + 1`) and the sign bit
/// restored; non-negative words pass through. Negative zero maps to
/// `0x8000_0000`.
#[inline]
#[must_use]
pub const fn signed_magnitude_to_twos_complement(v: u32) -> u32 {
    let sign = sign_mask(v);
    let magnitude = v & MAGNITUDE_MASK;
    ((magnitude ^ sign).wrapping_add(sign & 1)) | (v & SIGN_BIT)
}

/// One's-complement word to two's-complement word.
///
/// Negative zero (`0xFFFF_FFFF`) becomes zero.
#[inline]
#[must_use]
pub const fn ones_complement_to_twos_complement(v: u32) -> u32 {
    v.wrapping_add(sign_mask(v) & 1)
}

/// Two's-complement word to one's-complement word.
///
/// `i32::MIN` has no one's-complement form and lands on `0x7FFF_FFFF`.
#[inline]
#[must_use]
pub const fn twos_complement_to_ones_complement(v: u32) -> u32 {
    v.wrapping_sub(sign_mask(v) & 1)
}

/// Bit pattern of `value` in the requested representation.
///
/// `value` is a native `i32`, which Rust stores in two's complement.
/// `NoSign` reinterprets the bits without conversion.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] for representations with no conversion.
///
/// ```
/// use bitalu::Representation;
/// use bitalu::repr::encode;
///
/// assert_eq!(encode(-1, Representation::TwosComplement).unwrap(), 0xFFFF_FFFF);
/// assert_eq!(encode(-1, Representation::OnesComplement).unwrap(), 0xFFFF_FFFE);
/// assert_eq!(encode(-1, Representation::SignedMagnitude).unwrap(), 0x8000_0001);
/// assert!(encode(-1, Representation::ZigZag).is_err());
/// ```
pub fn encode(value: i32, format: Representation) -> Result<u32> {
    let bits = value as u32;
    match format {
        Representation::NoSign | Representation::TwosComplement => Ok(bits),
        Representation::OnesComplement => Ok(twos_complement_to_ones_complement(bits)),
        Representation::SignedMagnitude => Ok(twos_complement_to_signed_magnitude(bits)),
        other => Err(Error::UnsupportedFormat(other)),
    }
}

/// Inverse of [`encode`]: reads `bits` as a value stored in `format`.
///
/// `NoSign` reinterprets the bits.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] for representations with no conversion.
pub fn decode(bits: u32, format: Representation) -> Result<i32> {
    let twos = match format {
        Representation::NoSign | Representation::TwosComplement => bits,
        Representation::OnesComplement => ones_complement_to_twos_complement(bits),
        Representation::SignedMagnitude => signed_magnitude_to_twos_complement(bits),
        other => return Err(Error::UnsupportedFormat(other)),
    };
    Ok(twos as i32)
}

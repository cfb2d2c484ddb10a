//! Arithmetic logic unit built from bitwise operations.
//!
//! This module splits the ALU into three layers:
//!
//! - [`BitPrimitives`]: NOT, AND, OR, XOR and logical shifts
//! - [`CarryPropagateAdder`]: the single arithmetic primitive
//! - [`AluOps`]: subtraction, multiplication, division, modulus, square
//!   root and logarithms, all reduced to the adder
//!
//! Backends implement `BitPrimitives` and get every derived operation by
//! implementing the empty `AluOps`. [`NativeBits`] is the reference
//! backend, and the free functions here delegate to it.
//!
//! # Example
//!
//! ```
//! use bitalu::alu;
//!
//! assert_eq!(alu::add(0xFFFF_FFFF, 1), 0);
//! assert_eq!(alu::mul(7, 6), 42);
//! assert_eq!(alu::div(10, 3).unwrap(), 3);
//! assert_eq!(alu::rem(10, 3).unwrap(), 1);
//! assert_eq!(alu::isqrt(26), 5);
//! ```

pub mod adder;
pub mod ops;
pub mod primitives;

pub use adder::CarryPropagateAdder;
pub use ops::AluOps;
pub use primitives::{BitPrimitives, NativeBits};

use crate::error::Result;

/// `a + b` mod 2^32.
#[inline]
#[must_use]
pub fn add(a: u32, b: u32) -> u32 {
    NativeBits.add(a, b)
}

/// `a - b` mod 2^32.
#[inline]
#[must_use]
pub fn sub(a: u32, b: u32) -> u32 {
    NativeBits.sub(a, b)
}

/// `a * b` mod 2^32.
#[inline]
#[must_use]
pub fn mul(a: u32, b: u32) -> u32 {
    NativeBits.mul(a, b)
}

/// `a / b`, truncated.
///
/// # Errors
///
/// [`Error::DivideByZero`](crate::Error::DivideByZero) when `b` is zero.
#[inline]
pub fn div(a: u32, b: u32) -> Result<u32> {
    NativeBits.div(a, b)
}

/// `a % b`.
///
/// # Errors
///
/// [`Error::DivideByZero`](crate::Error::DivideByZero) when `b` is zero.
#[inline]
pub fn rem(a: u32, b: u32) -> Result<u32> {
    NativeBits.rem(a, b)
}

/// Quotient and remainder in one pass.
///
/// # Errors
///
/// [`Error::DivideByZero`](crate::Error::DivideByZero) when `b` is zero.
#[inline]
pub fn div_rem(a: u32, b: u32) -> Result<(u32, u32)> {
    NativeBits.div_rem(a, b)
}

/// `floor(sqrt(n))`.
#[inline]
#[must_use]
pub fn isqrt(n: u32) -> u32 {
    NativeBits.isqrt(n)
}

/// Floor logarithm of `n` in `base`.
///
/// # Errors
///
/// [`Error::InvalidLogBase`](crate::Error::InvalidLogBase) when `base < 2`.
#[inline]
pub fn log(n: u32, base: u32) -> Result<u32> {
    NativeBits.log(n, base)
}

/// Floor binary logarithm of `n`.
#[inline]
#[must_use]
pub fn log2(n: u32) -> u32 {
    NativeBits.log2(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_matches_backend() {
        let p = NativeBits;
        for (a, b) in [(0u32, 0u32), (10, 3), (0xDEAD_BEEF, 0x1234), (u32::MAX, 7)] {
            assert_eq!(add(a, b), p.add(a, b));
            assert_eq!(sub(a, b), p.sub(a, b));
            assert_eq!(mul(a, b), p.mul(a, b));
            assert_eq!(div_rem(a, b), p.div_rem(a, b));
        }
    }

    #[test]
    fn test_concrete_values() {
        assert_eq!(add(0xFFFF_FFFF, 1), 0);
        assert_eq!(div(10, 3), Ok(3));
        assert_eq!(rem(10, 3), Ok(1));
        assert_eq!(isqrt(26), 5);
        assert_eq!(mul(7, 6), 42);
        assert_eq!(log(1024, 2), Ok(10));
        assert_eq!(log2(1024), 10);
    }
}

//! Carry propagate adder.
//!
//! Addition of two words `a` and `b` splits into
//!
//! - partial sum: `a XOR b` (bits where exactly one input is set)
//! - carry: `(a AND b) << 1` (bits where both are set, moved up one place)
//!
//! and the carry is folded back into the partial sum until none remains.
//! Each round clears at least the lowest set bit of the carry, so the loop
//! runs at most 32 times. Carries out of bit 31 are dropped, which gives
//! arithmetic mod 2^32.

use super::primitives::BitPrimitives;

/// Iterative carry propagate adder.
///
/// Stateless; all operations are associated functions.
pub struct CarryPropagateAdder;

impl CarryPropagateAdder {
    /// `a + b` mod 2^32 using only `xor`, `and` and `shl`.
    #[inline]
    pub fn add<P>(prims: &P, mut a: u32, mut b: u32) -> u32
    where
        P: BitPrimitives + ?Sized,
    {
        while b != 0 {
            let carry = prims.and(a, b);
            a = prims.xor(a, b);
            b = prims.shl(carry, 1);
        }
        a
    }

    /// Number of carry rounds `add(a, b)` needs.
    ///
    /// Zero when `b` is zero, one when the operands share no set bits.
    pub fn rounds<P>(prims: &P, mut a: u32, mut b: u32) -> u32
    where
        P: BitPrimitives + ?Sized,
    {
        let mut rounds = 0;
        while b != 0 {
            let carry = prims.and(a, b);
            a = prims.xor(a, b);
            b = prims.shl(carry, 1);
            rounds = Self::add(prims, rounds, 1);
        }
        rounds
    }
}

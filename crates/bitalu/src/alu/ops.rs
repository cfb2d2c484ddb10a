//! Arithmetic synthesized from the bitwise basis.
//!
//! The carry propagate adder is the only arithmetic primitive. Everything
//! else reduces to it:
//!
//! | Operation | Derivation |
//! |-----------|------------|
//! | `inc` | `add(a, 1)` |
//! | `neg` | `add(bnot(a), 1)` |
//! | `sub` | `add(a, neg(b))` |
//! | `mul` | shift-and-add over the set bits of `b` |
//! | `div_rem` | restoring long division, `sub` per quotient bit |
//! | `isqrt` | digit-by-digit root over descending powers of four |
//! | `log` | repeated `div` by the base |
//! | `log2` | repeated `shr` by one |
//!
//! Comparisons (`<`, `>=`, `!= 0`) and loop bounds use native operators;
//! no native `+`, `-`, `*`, `/` or `%` appears.

use super::adder::CarryPropagateAdder;
use super::primitives::BitPrimitives;
use crate::error::{Error, Result};

/// Top bit of a word.
const TOP_BIT: u32 = 0x8000_0000;

/// Highest power of four representable in a word.
const TOP_POWER_OF_FOUR: u32 = 1 << 30;

/// Derived arithmetic over any [`BitPrimitives`] backend.
///
/// All operations treat operands as unsigned 32-bit words and wrap mod
/// 2^32, matching native `wrapping_*` arithmetic bit for bit.
pub trait AluOps: BitPrimitives {
    // -------------------------------------------------------------------------
    // Additive operations
    // -------------------------------------------------------------------------

    /// Addition: `a + b` mod 2^32.
    #[inline]
    fn add(&self, a: u32, b: u32) -> u32 {
        CarryPropagateAdder::add(self, a, b)
    }

    /// Increment: `a + 1`
    #[inline]
    fn inc(&self, a: u32) -> u32 {
        self.add(a, 1)
    }

    /// Decrement: `a - 1`
    #[inline]
    fn dec(&self, a: u32) -> u32 {
        self.add(a, u32::MAX)
    }

    /// Two's complement negation: `bnot(a) + 1`
    #[inline]
    fn neg(&self, a: u32) -> u32 {
        self.add(self.bnot(a), 1)
    }

    /// Subtraction: `a - b` mod 2^32, as `add(a, neg(b))`.
    #[inline]
    fn sub(&self, a: u32, b: u32) -> u32 {
        self.add(a, self.neg(b))
    }

    // -------------------------------------------------------------------------
    // Multiplicative operations
    // -------------------------------------------------------------------------

    /// Multiplication: `a * b` mod 2^32.
    ///
    /// For each set bit of `b`, low to high, the correspondingly shifted
    /// `a` is added into the product.
    fn mul(&self, mut a: u32, mut b: u32) -> u32 {
        let mut product = 0;
        while b != 0 && a != 0 {
            if self.and(b, 1) != 0 {
                product = self.add(product, a);
            }
            a = self.shl(a, 1);
            b = self.shr(b, 1);
        }
        product
    }

    /// Quotient and remainder of `a / b` by restoring long division.
    ///
    /// The divisor is aligned by shifting it left while it is below the
    /// dividend and its top bit is clear. Each round then shifts the
    /// quotient left and, if the aligned divisor fits, subtracts it and sets
    /// the quotient's low bit. The aligned divisor moves right one place per
    /// round until it drops below `b`.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] when `b` is zero.
    fn div_rem(&self, a: u32, b: u32) -> Result<(u32, u32)> {
        if b == 0 {
            return Err(Error::DivideByZero { dividend: a });
        }

        let mut hold = b;
        while hold < a && self.and(hold, TOP_BIT) == 0 {
            hold = self.shl(hold, 1);
        }

        let mut remainder = a;
        let mut quotient = 0;
        while hold >= b {
            quotient = self.shl(quotient, 1);
            if remainder >= hold {
                remainder = self.sub(remainder, hold);
                quotient = self.or(quotient, 1);
            }
            hold = self.shr(hold, 1);
        }
        Ok((quotient, remainder))
    }

    /// Division: `a / b`, truncated.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] when `b` is zero.
    #[inline]
    fn div(&self, a: u32, b: u32) -> Result<u32> {
        self.div_rem(a, b).map(|(quotient, _)| quotient)
    }

    /// Modulus: `a % b`.
    ///
    /// # Errors
    ///
    /// [`Error::DivideByZero`] when `b` is zero.
    #[inline]
    fn rem(&self, a: u32, b: u32) -> Result<u32> {
        self.div_rem(a, b).map(|(_, remainder)| remainder)
    }

    // -------------------------------------------------------------------------
    // Roots and logarithms
    // -------------------------------------------------------------------------

    /// Integer square root, `floor(sqrt(n))`.
    fn isqrt(&self, mut n: u32) -> u32 {
        let mut one = TOP_POWER_OF_FOUR;
        while one > n {
            one = self.shr(one, 2);
        }

        let mut root = 0;
        while one != 0 {
            let trial = self.add(root, one);
            root = self.shr(root, 1);
            if n >= trial {
                n = self.sub(n, trial);
                root = self.add(root, one);
            }
            one = self.shr(one, 2);
        }
        root
    }

    /// Floor logarithm of `n` in `base`.
    ///
    /// `log(0, base)` is 0.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLogBase`] when `base < 2`.
    fn log(&self, mut n: u32, base: u32) -> Result<u32> {
        if base < 2 {
            return Err(Error::InvalidLogBase(base));
        }
        let mut exponent = 0;
        while n >= base {
            n = self.div(n, base)?;
            exponent = self.inc(exponent);
        }
        Ok(exponent)
    }

    /// Floor binary logarithm of `n`. `log2(0)` is 0.
    fn log2(&self, mut n: u32) -> u32 {
        let mut exponent = 0;
        while n >= 2 {
            n = self.shr(n, 1);
            exponent = self.inc(exponent);
        }
        exponent
    }
}

impl AluOps for super::primitives::NativeBits {}

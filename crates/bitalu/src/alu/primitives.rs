//! The bitwise basis every ALU operation is built from.
//!
//! - `bnot`: bitwise NOT (unary)
//! - `and`, `or`, `xor`: bitwise combination (binary)
//! - `shl`, `shr`: logical shifts
//!
//! No primitive adds, subtracts, multiplies or divides. Arithmetic is
//! synthesized on top of these by [`AluOps`](super::AluOps).
//!
//! # Identities
//!
//! ```text
//! bnot(bnot(x)) = x
//! xor(x, x)     = 0
//! nand(x, x)    = bnot(x)
//! ```

/// The bitwise operations the ALU is allowed to use.
///
/// # Example Implementation
///
/// ```
/// use bitalu::alu::{AluOps, BitPrimitives};
///
/// struct Tracing;
///
/// impl BitPrimitives for Tracing {
///     fn bnot(&self, a: u32) -> u32 { !a }
///     fn and(&self, a: u32, b: u32) -> u32 { a & b }
///     fn or(&self, a: u32, b: u32) -> u32 { a | b }
///     fn xor(&self, a: u32, b: u32) -> u32 { a ^ b }
///     fn shl(&self, a: u32, n: u32) -> u32 { a << n }
///     fn shr(&self, a: u32, n: u32) -> u32 { a >> n }
/// }
///
/// impl AluOps for Tracing {}
///
/// assert_eq!(Tracing.mul(7, 6), 42);
/// ```
pub trait BitPrimitives {
    /// Bitwise NOT: `!a`
    fn bnot(&self, a: u32) -> u32;

    /// Bitwise AND: `a & b`
    fn and(&self, a: u32, b: u32) -> u32;

    /// Bitwise OR: `a | b`
    fn or(&self, a: u32, b: u32) -> u32;

    /// Bitwise XOR: `a ^ b`
    fn xor(&self, a: u32, b: u32) -> u32;

    /// Logical shift left. `n` is below 32.
    fn shl(&self, a: u32, n: u32) -> u32;

    /// Logical shift right. `n` is below 32.
    fn shr(&self, a: u32, n: u32) -> u32;

    // -------------------------------------------------------------------------
    // Derived gates
    // -------------------------------------------------------------------------

    /// NAND: `!(a & b)`
    #[inline(always)]
    fn nand(&self, a: u32, b: u32) -> u32 {
        self.bnot(self.and(a, b))
    }

    /// NOR: `!(a | b)`
    #[inline(always)]
    fn nor(&self, a: u32, b: u32) -> u32 {
        self.bnot(self.or(a, b))
    }

    /// XOR without the XOR gate: `(!a & b) | (a & !b)`
    #[inline(always)]
    fn exclusive_xor(&self, a: u32, b: u32) -> u32 {
        self.or(self.and(self.bnot(a), b), self.and(a, self.bnot(b)))
    }
}

/// Reference implementation on native `u32` bit operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBits;

impl BitPrimitives for NativeBits {
    #[inline(always)]
    fn bnot(&self, a: u32) -> u32 {
        !a
    }
    #[inline(always)]
    fn and(&self, a: u32, b: u32) -> u32 {
        a & b
    }
    #[inline(always)]
    fn or(&self, a: u32, b: u32) -> u32 {
        a | b
    }
    #[inline(always)]
    fn xor(&self, a: u32, b: u32) -> u32 {
        a ^ b
    }
    #[inline(always)]
    fn shl(&self, a: u32, n: u32) -> u32 {
        a << n
    }
    #[inline(always)]
    fn shr(&self, a: u32, n: u32) -> u32 {
        a >> n
    }
}

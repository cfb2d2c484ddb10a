//! Bit-level arithmetic and signed-number representation engine.
//!
//! `bitalu` rebuilds integer arithmetic from logical bit operations and
//! layers signed-number semantics on top of plain 32-bit words.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`bits`] | Forward and reverse bit sequences over byte buffers |
//! | [`repr`] | Host representation probe and conversions between one's-complement, two's-complement and sign-magnitude |
//! | [`logic`] | AND, OR, XOR, NAND, NOR on operands converted by a chosen representation |
//! | [`alu`] | Add, subtract, multiply, divide, modulus, square root and logarithms from the carry propagate adder |
//!
//! The ALU stores nothing but `u32`. Signed interpretation is a conversion
//! applied before or after, never built into the arithmetic.
//!
//! # Example
//!
//! ```
//! use bitalu::{alu, repr, Representation};
//!
//! // Wrapping arithmetic without native +, -, *, /
//! assert_eq!(alu::sub(3, 5), 3u32.wrapping_sub(5));
//! assert_eq!(alu::div_rem(100, 7).unwrap(), (14, 2));
//!
//! // Feed a signed value through the ALU and read it back
//! let minus_seven = repr::encode(-7, Representation::TwosComplement).unwrap();
//! let product = alu::mul(minus_seven, 6);
//! assert_eq!(repr::decode(product, Representation::TwosComplement).unwrap(), -42);
//! ```
//!
//! # Concurrency
//!
//! Every operation is a pure function. The host representation is probed
//! once per process behind a [`std::sync::OnceLock`]; later reads take no
//! lock.

pub mod alu;
pub mod bits;
mod error;
pub mod logic;
pub mod repr;

pub use alu::{AluOps, BitPrimitives, CarryPropagateAdder, NativeBits};
pub use bits::{read, word_bits, BitSequence};
pub use error::{Error, Result};
pub use repr::{current_representation, try_current_representation, Representation};

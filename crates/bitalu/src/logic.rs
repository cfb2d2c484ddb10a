//! Representation-aware logical operators.
//!
//! Each operator first passes both operands through the single-value
//! conversion for the requested [`Representation`] with [`prepare`], then
//! combines the resulting words through the ALU's bitwise basis. The
//! combination itself does not depend on the representation; only the
//! conversion applied to the operands does.
//!
//! | Format | Conversion per operand |
//! |--------|------------------------|
//! | `TwosComplement` | [`twos_complement`](repr::twos_complement) |
//! | `OnesComplement` | [`ones_complement`](repr::ones_complement) |
//! | `SignedMagnitude` | magnitude of [`signed_magnitude`](repr::signed_magnitude) |
//! | `NoSign` | none, bits reinterpreted as unsigned |
//!
//! ```
//! use bitalu::logic;
//! use bitalu::Representation;
//!
//! // (-1, 3) becomes (1, 0xFFFF_FFFD) under two's-complement negation
//! assert_eq!(logic::and(-1, 3, Representation::TwosComplement).unwrap(), 1);
//! // (-1, 3) becomes (0, 0xFFFF_FFFC) under one's-complement negation
//! assert_eq!(logic::and(-1, 3, Representation::OnesComplement).unwrap(), 0);
//! // magnitudes (1, 3)
//! assert_eq!(logic::and(-1, 3, Representation::SignedMagnitude).unwrap(), 1);
//! assert_eq!(logic::and(-1, 3, Representation::NoSign).unwrap(), 3);
//! ```

use crate::alu::{BitPrimitives, NativeBits};
use crate::error::{Error, Result};
use crate::repr::{self, Representation};

/// Applies the single-value conversion for `format` to each operand.
///
/// Each operand is converted independently. `NoSign` reinterprets the
/// operands as unsigned words without sign extension.
///
/// ```
/// use bitalu::logic::prepare;
/// use bitalu::Representation;
///
/// assert_eq!(prepare(-2, 2, Representation::TwosComplement), Ok((2, 0xFFFF_FFFE)));
/// assert_eq!(prepare(-2, 2, Representation::SignedMagnitude), Ok((2, 2)));
/// ```
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] for `Excess`, `Base`, `Biased`, `ZigZag`,
/// `Any` and `All`.
pub fn prepare(left: i32, right: i32, format: Representation) -> Result<(u32, u32)> {
    let convert: fn(i32) -> u32 = match format {
        Representation::NoSign => |v| v as u32,
        Representation::OnesComplement => |v| repr::ones_complement(v as u32),
        Representation::TwosComplement => |v| repr::twos_complement(v as u32),
        Representation::SignedMagnitude => |v| repr::signed_magnitude(v).0,
        other => return Err(Error::UnsupportedFormat(other)),
    };
    Ok((convert(left), convert(right)))
}

/// `left AND right` in `format`.
///
/// # Errors
///
/// See [`prepare`].
pub fn and(left: i32, right: i32, format: Representation) -> Result<u32> {
    let (l, r) = prepare(left, right, format)?;
    Ok(NativeBits.and(l, r))
}

/// `left OR right` in `format`.
///
/// # Errors
///
/// See [`prepare`].
pub fn or(left: i32, right: i32, format: Representation) -> Result<u32> {
    let (l, r) = prepare(left, right, format)?;
    Ok(NativeBits.or(l, r))
}

/// `left XOR right` in `format`.
///
/// # Errors
///
/// See [`prepare`].
pub fn xor(left: i32, right: i32, format: Representation) -> Result<u32> {
    let (l, r) = prepare(left, right, format)?;
    Ok(NativeBits.xor(l, r))
}

/// `NOT (left AND right)` in `format`.
///
/// # Errors
///
/// See [`prepare`].
pub fn nand(left: i32, right: i32, format: Representation) -> Result<u32> {
    let (l, r) = prepare(left, right, format)?;
    Ok(NativeBits.nand(l, r))
}

/// `NOT (left OR right)` in `format`.
///
/// # Errors
///
/// See [`prepare`].
pub fn nor(left: i32, right: i32, format: Representation) -> Result<u32> {
    let (l, r) = prepare(left, right, format)?;
    Ok(NativeBits.nor(l, r))
}

/// XOR in `format`, computed as `(NOT l AND r) OR (l AND NOT r)` without
/// the XOR gate.
///
/// # Errors
///
/// See [`prepare`].
pub fn exclusive_xor(left: i32, right: i32, format: Representation) -> Result<u32> {
    let (l, r) = prepare(left, right, format)?;
    Ok(NativeBits.exclusive_xor(l, r))
}

/// Boolean XOR: `(NOT left AND right) OR (left AND NOT right)`.
#[inline]
#[must_use]
pub const fn bool_xor(left: bool, right: bool) -> bool {
    (!left && right) || (left && !right)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONCRETE: [Representation; 4] = [
        Representation::NoSign,
        Representation::OnesComplement,
        Representation::SignedMagnitude,
        Representation::TwosComplement,
    ];

    #[test]
    fn test_prepare_conversions() {
        assert_eq!(
            prepare(-2, 2, Representation::TwosComplement),
            Ok((2, 0xFFFF_FFFE))
        );
        assert_eq!(
            prepare(-2, 2, Representation::OnesComplement),
            Ok((1, 0xFFFF_FFFD))
        );
        assert_eq!(prepare(-2, 2, Representation::SignedMagnitude), Ok((2, 2)));
        assert_eq!(prepare(-2, 2, Representation::NoSign), Ok((0xFFFF_FFFE, 2)));
    }

    #[test]
    fn test_and_minus_one_three() {
        assert_eq!(and(-1, 3, Representation::TwosComplement), Ok(1));
        assert_eq!(and(-1, 3, Representation::OnesComplement), Ok(0));
        assert_eq!(and(-1, 3, Representation::SignedMagnitude), Ok(1));
        assert_eq!(and(-1, 3, Representation::NoSign), Ok(3));
        assert_eq!(
            prepare(-1, 3, Representation::OnesComplement),
            Ok((0, 0xFFFF_FFFC))
        );
    }

    #[test]
    fn test_unsupported_prepare() {
        assert_eq!(
            prepare(1, 2, Representation::Excess),
            Err(Error::UnsupportedFormat(Representation::Excess))
        );
    }

    #[test]
    fn test_unsupported_formats() {
        for format in [
            Representation::Excess,
            Representation::Base,
            Representation::Biased,
            Representation::ZigZag,
            Representation::Any,
            Representation::All,
        ] {
            assert_eq!(and(1, 2, format), Err(Error::UnsupportedFormat(format)));
            assert_eq!(nor(1, 2, format), Err(Error::UnsupportedFormat(format)));
            assert_eq!(
                exclusive_xor(1, 2, format),
                Err(Error::UnsupportedFormat(format))
            );
        }
    }

    #[test]
    fn test_gates_agree() {
        for format in CONCRETE {
            for (l, r) in [(0, 0), (5, -3), (-1, i32::MAX), (12_345, -67_890)] {
                let and_ = and(l, r, format).unwrap();
                let or_ = or(l, r, format).unwrap();
                assert_eq!(nand(l, r, format).unwrap(), !and_);
                assert_eq!(nor(l, r, format).unwrap(), !or_);
                assert_eq!(
                    exclusive_xor(l, r, format).unwrap(),
                    xor(l, r, format).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_signed_magnitude_combines_magnitudes() {
        // 5 | 3
        assert_eq!(or(-5, 3, Representation::SignedMagnitude), Ok(7));
        assert_eq!(xor(-5, 5, Representation::SignedMagnitude), Ok(0));
        assert_eq!(and(i32::MIN, -1, Representation::SignedMagnitude), Ok(0));
    }

    #[test]
    fn test_bool_xor_truth_table() {
        assert!(!bool_xor(false, false));
        assert!(bool_xor(true, false));
        assert!(bool_xor(false, true));
        assert!(!bool_xor(true, true));
    }
}

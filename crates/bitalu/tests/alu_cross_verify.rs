//! Cross-verification of the ALU against native arithmetic.
//!
//! Exhaustive over every 8-bit operand pair, plus a grid of edge-case 32-bit
//! words.

use bitalu::alu::{self, AluOps, NativeBits};
use bitalu::bits;

// =============================================================================
// Exhaustive u8 Tests
// =============================================================================

#[test]
fn cross_verify_mul_exhaustive_u8_pairs() {
    let p = NativeBits;
    for a in 0u32..=255 {
        for b in 0u32..=255 {
            assert_eq!(p.mul(a, b), a * b, "MUL mismatch at ({a}, {b})");
        }
    }
}

#[test]
fn cross_verify_div_rem_exhaustive_u8_pairs() {
    let p = NativeBits;
    for a in 0u32..=255 {
        for b in 1u32..=255 {
            assert_eq!(
                p.div_rem(a, b),
                Ok((a / b, a % b)),
                "DIV/REM mismatch at ({a}, {b})"
            );
        }
    }
}

#[test]
fn cross_verify_sub_exhaustive_u8_pairs() {
    let p = NativeBits;
    for a in 0u32..=255 {
        for b in 0u32..=255 {
            assert_eq!(p.sub(a, b), a.wrapping_sub(b), "SUB mismatch at ({a}, {b})");
        }
    }
}

#[test]
fn cross_verify_isqrt_exhaustive_u16() {
    let p = NativeBits;
    for n in 0u32..=0xFFFF {
        let root = p.isqrt(n);
        assert!(root * root <= n, "isqrt({n}) = {root} too large");
        assert!((root + 1) * (root + 1) > n, "isqrt({n}) = {root} too small");
    }
}

// =============================================================================
// Representative u32 Tests
// =============================================================================

const TEST_VALUES_U32: [u32; 16] = [
    0,
    1,
    2,
    3,
    42,
    255,
    256,
    0x7FFF_FFFF,
    0x8000_0000,
    0xDEAD_BEEF,
    0xCAFE_BABE,
    0xFFFF_0000,
    0x0000_FFFF,
    0xAAAA_AAAA,
    u32::MAX - 1,
    u32::MAX,
];

#[test]
fn cross_verify_u32_representative() {
    for &a in &TEST_VALUES_U32 {
        for &b in &TEST_VALUES_U32 {
            assert_eq!(alu::add(a, b), a.wrapping_add(b), "ADD ({a:#x}, {b:#x})");
            assert_eq!(alu::sub(a, b), a.wrapping_sub(b), "SUB ({a:#x}, {b:#x})");
            assert_eq!(alu::mul(a, b), a.wrapping_mul(b), "MUL ({a:#x}, {b:#x})");
            if b != 0 {
                assert_eq!(alu::div(a, b), Ok(a / b), "DIV ({a:#x}, {b:#x})");
                assert_eq!(alu::rem(a, b), Ok(a % b), "REM ({a:#x}, {b:#x})");
            }
        }
    }
}

#[test]
fn cross_verify_log2_powers_of_two() {
    assert_eq!(alu::log2(1), 0);
    for k in 0..32 {
        assert_eq!(alu::log2(1 << k), k, "log2(2^{k})");
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(alu::add(0xFFFF_FFFF, 1), 0);
    assert_eq!(alu::div(10, 3), Ok(3));
    assert_eq!(alu::rem(10, 3), Ok(1));
    assert_eq!(alu::isqrt(26), 5);
    assert_eq!(alu::mul(7, 6), 42);
}

// =============================================================================
// Bit Walking
// =============================================================================

#[test]
fn cross_verify_mul_by_walking_operand_bits() {
    // Rebuild a * b from the set bits of b read through a bit sequence
    let p = NativeBits;
    for &a in &TEST_VALUES_U32 {
        for &b in &TEST_VALUES_U32 {
            let product = bits::word_bits(b, false)
                .enumerate()
                .filter(|&(_, bit)| bit)
                .fold(0u32, |acc, (i, _)| p.add(acc, a << i));
            assert_eq!(product, p.mul(a, b), "walk MUL ({a:#x}, {b:#x})");
        }
    }
}

//! Lazy bit sequences over byte buffers.
//!
//! A [`BitSequence`] walks `count` bits starting at a `(byte, bit)` cursor.
//! Bit 0 of a byte is its least significant bit. After bit 7 the cursor
//! moves to bit 0 of the next byte.
//!
//! In reverse mode each position reads the mirrored bit of the same byte:
//! position `p` reads bit `7 - p`. Byte order is unchanged.
//!
//! ```
//! use bitalu::bits;
//!
//! let forward: Vec<bool> = bits::read(&[0b1000_0000], 0, 0, 2, false).unwrap().collect();
//! let reverse: Vec<bool> = bits::read(&[0b1000_0000], 0, 0, 2, true).unwrap().collect();
//! assert_eq!(forward, [false, false]);
//! assert_eq!(reverse, [true, false]);
//! ```

use core::iter::FusedIterator;

use crate::error::{Error, Result};

/// Bits per byte.
pub const BYTE_BITS: usize = 8;

/// A finite sequence of bits read from a buffer.
///
/// Consumption is one-way. Calling [`read`] again with the same offsets
/// yields a fresh, independent sequence.
#[derive(Debug)]
pub struct BitSequence<B> {
    buffer: B,
    byte_offset: usize,
    bit_offset: usize,
    remaining: usize,
    reverse: bool,
}

/// Reads `count` bits from `buffer` starting at `byte_offset`, `bit_offset`.
///
/// A `bit_offset` of 8 or more is folded into `byte_offset`. A `count` of
/// zero yields an empty sequence regardless of the offsets.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if any of the `count` bits lies past the end
/// of `buffer`. The window is checked before any bit is produced.
pub fn read(
    buffer: &[u8],
    byte_offset: usize,
    bit_offset: usize,
    count: usize,
    reverse: bool,
) -> Result<BitSequence<&[u8]>> {
    BitSequence::new(buffer, byte_offset, bit_offset, count, reverse)
}

/// The 32 bits of `word`, least significant byte first.
///
/// ```
/// use bitalu::bits;
///
/// let set: Vec<usize> = bits::word_bits(0x0000_0105, false)
///     .enumerate()
///     .filter_map(|(i, bit)| bit.then_some(i))
///     .collect();
/// assert_eq!(set, [0, 2, 8]);
/// ```
#[must_use]
pub fn word_bits(word: u32, reverse: bool) -> BitSequence<[u8; 4]> {
    BitSequence {
        buffer: word.to_le_bytes(),
        byte_offset: 0,
        bit_offset: 0,
        remaining: 32,
        reverse,
    }
}

impl<B: AsRef<[u8]>> BitSequence<B> {
    /// Creates a sequence over any byte container.
    ///
    /// # Errors
    ///
    /// See [`read`].
    pub fn new(
        buffer: B,
        byte_offset: usize,
        bit_offset: usize,
        count: usize,
        reverse: bool,
    ) -> Result<Self> {
        let byte_offset = byte_offset.saturating_add(bit_offset / BYTE_BITS);
        let bit_offset = bit_offset % BYTE_BITS;
        if count == 0 {
            return Ok(Self {
                buffer,
                byte_offset,
                bit_offset,
                remaining: 0,
                reverse,
            });
        }

        let len = buffer.as_ref().len();
        let available = len
            .checked_sub(byte_offset)
            .and_then(|bytes| bytes.checked_mul(BYTE_BITS))
            .and_then(|bits| bits.checked_sub(bit_offset));

        match available {
            Some(bits) if bits >= count => Ok(Self {
                buffer,
                byte_offset,
                bit_offset,
                remaining: count,
                reverse,
            }),
            _ => Err(Error::IndexOutOfRange {
                byte_offset,
                bit_offset,
                count,
                len,
            }),
        }
    }

    /// Cursor of the next bit as `(byte_offset, bit_offset)`.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.byte_offset, self.bit_offset)
    }

    /// Whether bits are read mirrored within each byte.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reverse
    }
}

impl<B: AsRef<[u8]>> Iterator for BitSequence<B> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        // The window was validated on construction.
        let byte = *self.buffer.as_ref().get(self.byte_offset)?;
        let index = if self.reverse {
            BYTE_BITS - 1 - self.bit_offset
        } else {
            self.bit_offset
        };
        let bit = (byte >> index) & 1 == 1;

        self.remaining -= 1;
        self.bit_offset += 1;
        if self.bit_offset == BYTE_BITS {
            self.bit_offset = 0;
            self.byte_offset += 1;
        }
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<B: AsRef<[u8]>> ExactSizeIterator for BitSequence<B> {}

impl<B: AsRef<[u8]>> FusedIterator for BitSequence<B> {}

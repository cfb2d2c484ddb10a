//! The signed-number representation enumeration.

use core::fmt;

/// A signed-number representation, stored as a flag value.
///
/// Only [`NoSign`](Self::NoSign), [`OnesComplement`](Self::OnesComplement),
/// [`SignedMagnitude`](Self::SignedMagnitude) and
/// [`TwosComplement`](Self::TwosComplement) carry conversions. The remaining
/// single flags are reserved so encoders can name them; asking for a
/// conversion into one of them fails with
/// [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat).
///
/// | Variant | Flag |
/// |---------|------|
/// | `NoSign` | `0x00` |
/// | `OnesComplement` | `0x01` |
/// | `SignedMagnitude` | `0x02` |
/// | `TwosComplement` | `0x04` |
/// | `Excess` | `0x08` |
/// | `Base` | `0x10` |
/// | `Biased` | `0x20` |
/// | `ZigZag` | `0x40` |
/// | `Any` | `0x7F` (union of all flags) |
/// | `All` | `0xFFFF` (wildcard) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Representation {
    /// Unsigned: bits are read as a plain magnitude.
    NoSign = 0x00,
    /// Negation flips every bit; two zeros.
    OnesComplement = 0x01,
    /// Top bit is the sign, the rest the magnitude; two zeros.
    SignedMagnitude = 0x02,
    /// Negation is NOT plus one.
    TwosComplement = 0x04,
    /// Reserved.
    Excess = 0x08,
    /// Reserved.
    Base = 0x10,
    /// Reserved.
    Biased = 0x20,
    /// Reserved.
    ZigZag = 0x40,
    /// Union of every flag above.
    Any = 0x7F,
    /// Wildcard sentinel.
    All = 0xFFFF,
}

impl Representation {
    /// Every variant, in flag order.
    pub const VARIANTS: [Self; 10] = [
        Self::NoSign,
        Self::OnesComplement,
        Self::SignedMagnitude,
        Self::TwosComplement,
        Self::Excess,
        Self::Base,
        Self::Biased,
        Self::ZigZag,
        Self::Any,
        Self::All,
    ];

    /// The flag value.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Whether a conversion into this representation exists.
    #[inline]
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(
            self,
            Self::NoSign | Self::OnesComplement | Self::SignedMagnitude | Self::TwosComplement
        )
    }

    /// Whether a signed value can be stored in this representation.
    #[inline]
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::OnesComplement | Self::SignedMagnitude | Self::TwosComplement
        )
    }

    /// Flag containment: every flag of `other` is set in `self`.
    ///
    /// `NoSign` has no flags, so every representation contains it.
    ///
    /// ```
    /// use bitalu::Representation;
    ///
    /// assert!(Representation::Any.contains(Representation::ZigZag));
    /// assert!(Representation::All.contains(Representation::Any));
    /// assert!(!Representation::TwosComplement.contains(Representation::OnesComplement));
    /// ```
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.bits() & other.bits() == other.bits()
    }

    /// Looks up the variant with exactly this flag value.
    #[must_use]
    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::VARIANTS.into_iter().find(|r| r.bits() == bits)
    }

    /// Variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoSign => "NoSign",
            Self::OnesComplement => "OnesComplement",
            Self::SignedMagnitude => "SignedMagnitude",
            Self::TwosComplement => "TwosComplement",
            Self::Excess => "Excess",
            Self::Base => "Base",
            Self::Biased => "Biased",
            Self::ZigZag => "ZigZag",
            Self::Any => "Any",
            Self::All => "All",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

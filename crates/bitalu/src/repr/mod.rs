//! Signed-number representations: detection and conversion.
//!
//! - [`Representation`]: the enumeration of known representations
//! - [`current_representation`]: process-wide, lazily probed host form
//! - conversion functions between one's-complement, two's-complement and
//!   sign-magnitude 32-bit words
//!
//! Conversions are pure. The only shared state is the cached probe result.
//!
//! # Example
//!
//! ```
//! use bitalu::repr::{self, Representation};
//!
//! assert_eq!(repr::current_representation(), Representation::TwosComplement);
//!
//! let sm = repr::twos_complement_to_signed_magnitude((-9i32) as u32);
//! assert_eq!(sm, 0x8000_0009);
//! assert_eq!(repr::signed_magnitude_to_twos_complement(sm) as i32, -9);
//! ```

pub mod convert;
pub mod detect;
mod representation;

pub use convert::{
    decode, encode, ones_complement, ones_complement_to_twos_complement, signed_magnitude,
    signed_magnitude_to_twos_complement, twos_complement, twos_complement_to_ones_complement,
    twos_complement_to_signed_magnitude, MAGNITUDE_MASK, SIGN_BIT,
};
pub use detect::{
    current_representation, detect, try_current_representation, ArchitectureProbe, HostProbe,
};
pub use representation::Representation;

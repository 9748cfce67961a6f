//! Decoder trait for type-safe conversions.
//!
//! `Decoder<T, D>` converts a source `T` into a destination `D`. The
//! destination opts in with the `DecodableFrom<T>` marker, so a pair that
//! was never declared is rejected at compile time.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use codec::decoder::{DecodableFrom, Decoder};
//!
//! struct Units(Vec<u16>);
//! struct Words(String);
//!
//! impl DecodableFrom<Units> for Words {}
//!
//! impl Decoder<Units, Words> for Units {
//!     type Error = std::convert::Infallible;
//!
//!     fn decode(&self) -> Result<Words, Self::Error> {
//!         Ok(Words(String::from_utf16_lossy(&self.0)))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. Conversions that cannot fail use
/// [`std::convert::Infallible`] as their error.
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// ```no_run
/// use codec::decoder::DecodableFrom;
///
/// struct Source;
/// struct Dest;
///
/// impl DecodableFrom<Source> for Dest {}
/// ```
pub trait DecodableFrom<T> {}

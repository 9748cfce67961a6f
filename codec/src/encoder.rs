//! Encoder trait, the reverse direction of [`crate::decoder::Decoder`].

/// Encoder trait for converting from type `T` into the representation `E`.
///
/// The target representation is chosen by the caller's type annotation:
///
/// ```ignore
/// let bytes: Vec<u8> = text.encode()?;
/// let units: Vec<u16> = text.encode()?;
/// ```
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be produced by encoding `T`.
pub trait EncodableTo<T> {}

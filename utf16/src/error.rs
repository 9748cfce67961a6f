use thiserror::Error;

/// Errors raised at the edges of the codec.
///
/// `encode` and `decode` themselves never fail. These errors come from
/// turning a [`crate::Text`] into a Rust `String` and from parsing width
/// configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A surrogate code unit without its partner, which a `String` cannot hold
    #[error("unpaired surrogate 0x{unit:04x} at index {index}")]
    UnpairedSurrogate { index: usize, unit: u16 },

    /// Element widths other than 8, 16 and 32 bits
    #[error("unsupported width: {0} bits")]
    UnsupportedWidth(u32),

    /// A width selector other than `generic`, `8`, `16`, `32`, `u8`, `u16` or `u32`
    #[error("invalid width selector: {0}")]
    InvalidWidthSelector(String),
}

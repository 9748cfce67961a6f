//! # utf16
//!
//! Converts between text and sequences of UTF-16 code units.
//!
//! [`decode`] reads any [`CodeUnitSource`] (slices, arrays and `Vec`s of
//! integers, or a [`CodeUnits`]) into a [`Text`]. [`encode`] writes a
//! [`Text`] into the container shape picked by a [`WidthSelector`].
//!
//! Neither operation validates its input. Surrogates are copied through
//! unchanged, integers wider than 16 bits are cut to their low 16 bits on
//! decode, and fixed-width views narrower than 16 bits keep only their low
//! bits on encode.
//!
//! ```
//! use utf16::{CodeUnits, Text, Width, WidthSelector, decode, encode};
//!
//! let text = decode(&[55358_i64, 57052]);
//! assert_eq!(text, "\u{1fadc}");
//!
//! let bytes = encode(&Text::from("\u{ff}\u{100}"), WidthSelector::FixedWidth(Width::Bits8));
//! assert_eq!(bytes, CodeUnits::Fixed8(vec![255, 0]));
//! ```

#![forbid(unsafe_code)]

pub mod error;
mod text;
mod units;
mod width;

use std::convert::Infallible;

use codec::decoder::{DecodableFrom, Decoder};
use codec::encoder::{EncodableTo, Encoder};

pub use error::Error;
pub use text::Text;
pub use units::{CodeUnit, CodeUnitSource, CodeUnits};
pub use width::{Width, WidthSelector};

/// Reads each element of `sequence` as one UTF-16 code unit.
///
/// Elements are masked to 16 bits (see [`CodeUnit`]); lone surrogates are
/// kept in the resulting [`Text`].
pub fn decode<S: CodeUnitSource + ?Sized>(sequence: &S) -> Text {
    let mut units = Vec::with_capacity(sequence.unit_count());
    sequence.extend_units(&mut units);
    tracing::trace!(units = units.len(), "decoded code units");
    Text::from_units(units)
}

/// Writes the code units of `text` into the shape chosen by `selector`.
///
/// The result always has `text.len()` elements.
pub fn encode(text: &Text, selector: WidthSelector) -> CodeUnits {
    let units = match selector {
        WidthSelector::Generic => CodeUnits::Generic(encode_as(text)),
        WidthSelector::FixedWidth(Width::Bits8) => CodeUnits::Fixed8(encode_as(text)),
        WidthSelector::FixedWidth(Width::Bits16) => CodeUnits::Fixed16(encode_as(text)),
        WidthSelector::FixedWidth(Width::Bits32) => CodeUnits::Fixed32(encode_as(text)),
    };
    tracing::trace!(units = units.len(), %selector, "encoded text");
    units
}

/// Writes the code units of `text` into a `Vec` of any [`CodeUnit`] type.
pub fn encode_as<U: CodeUnit>(text: &Text) -> Vec<U> {
    text.as_units()
        .iter()
        .map(|&unit| U::from_code_unit(unit))
        .collect()
}

impl<U: CodeUnit> DecodableFrom<Vec<U>> for Text {}

impl<U: CodeUnit> Decoder<Vec<U>, Text> for Vec<U> {
    type Error = Infallible;

    fn decode(&self) -> Result<Text, Self::Error> {
        Ok(crate::decode(self))
    }
}

impl<'a, U: CodeUnit> DecodableFrom<&'a [U]> for Text {}

impl<'a, U: CodeUnit> Decoder<&'a [U], Text> for &'a [U] {
    type Error = Infallible;

    fn decode(&self) -> Result<Text, Self::Error> {
        Ok(crate::decode(*self))
    }
}

impl DecodableFrom<CodeUnits> for Text {}

impl Decoder<CodeUnits, Text> for CodeUnits {
    type Error = Infallible;

    fn decode(&self) -> Result<Text, Self::Error> {
        Ok(crate::decode(self))
    }
}

impl<U: CodeUnit> EncodableTo<Text> for Vec<U> {}

impl<U: CodeUnit> Encoder<Text, Vec<U>> for Text {
    type Error = Infallible;

    fn encode(&self) -> Result<Vec<U>, Self::Error> {
        Ok(encode_as(self))
    }
}

impl EncodableTo<Text> for CodeUnits {}

impl Encoder<Text, CodeUnits> for Text {
    type Error = Infallible;

    fn encode(&self) -> Result<CodeUnits, Self::Error> {
        Ok(crate::encode(self, WidthSelector::Generic))
    }
}

#[cfg(test)]
mod tests {
    use codec::decoder::Decoder;
    use codec::encoder::Encoder;
    use rstest::rstest;

    use crate::{CodeUnits, Text, Width, WidthSelector, decode, encode, encode_as};

    #[rstest(
        input,
        expected,
        case(vec![], ""),
        case(vec![97, 115, 100, 102], "asdf"),
        case(vec![55358, 57052], "\u{1fadc}"),
        case(vec![0x61, 0xd83d, 0xde00, 0x62], "a\u{1f600}b")
    )]
    fn test_decode_generic(input: Vec<i64>, expected: &str) {
        let text = decode(&input);
        assert_eq!(expected, text.to_string_checked().unwrap());
    }

    #[test]
    fn test_decode_plain_and_binary_view_agree() {
        let plain = decode(&[97_i64, 115, 100, 102]);
        let view = decode(&[97_u8, 115, 100, 102]);
        assert_eq!(plain, view);
        assert_eq!(plain, "asdf");
    }

    #[rstest]
    #[case::generic(CodeUnits::Generic(vec![97, 115, 100, 102]))]
    #[case::fixed8(CodeUnits::Fixed8(vec![97, 115, 100, 102]))]
    #[case::fixed16(CodeUnits::Fixed16(vec![97, 115, 100, 102]))]
    #[case::fixed32(CodeUnits::Fixed32(vec![97, 115, 100, 102]))]
    fn test_decode_every_shape(#[case] units: CodeUnits) {
        assert_eq!(decode(&units), "asdf");
    }

    #[rstest(
        input,
        expected_units,
        case(vec![0xd83e], vec![0xd83e]),
        case(vec![0xdedc, 0xd83e], vec![0xdedc, 0xd83e]),
        case(vec![0x10061, -1], vec![0x61, 0xffff])
    )]
    fn test_decode_does_not_validate(input: Vec<i64>, expected_units: Vec<u16>) {
        let text = decode(&input);
        assert_eq!(expected_units.as_slice(), text.as_units());
    }

    #[rstest]
    #[case::generic(WidthSelector::Generic, CodeUnits::Generic(vec![97, 115, 100, 102]))]
    #[case::fixed8(WidthSelector::FixedWidth(Width::Bits8), CodeUnits::Fixed8(vec![97, 115, 100, 102]))]
    #[case::fixed16(WidthSelector::FixedWidth(Width::Bits16), CodeUnits::Fixed16(vec![97, 115, 100, 102]))]
    #[case::fixed32(WidthSelector::FixedWidth(Width::Bits32), CodeUnits::Fixed32(vec![97, 115, 100, 102]))]
    fn test_encode_selects_shape(#[case] selector: WidthSelector, #[case] expected: CodeUnits) {
        let units = encode(&Text::from("asdf"), selector);
        assert_eq!(expected, units);
        assert_eq!(selector, units.selector());
    }

    #[test]
    fn test_encode_default_selector_is_generic() {
        let units = encode(&Text::from("asdf"), WidthSelector::default());
        assert_eq!(CodeUnits::Generic(vec![97, 115, 100, 102]), units);
    }

    #[rstest]
    #[case::pair("\u{1fadc}", WidthSelector::Generic, CodeUnits::Generic(vec![55358, 57052]))]
    #[case::truncate8("\u{ff}\u{100}", WidthSelector::FixedWidth(Width::Bits8), CodeUnits::Fixed8(vec![255, 0]))]
    #[case::pair8("\u{1fadc}", WidthSelector::FixedWidth(Width::Bits8), CodeUnits::Fixed8(vec![0x3e, 0xdc]))]
    #[case::pair32("\u{1fadc}", WidthSelector::FixedWidth(Width::Bits32), CodeUnits::Fixed32(vec![55358, 57052]))]
    fn test_encode_code_units(
        #[case] input: &str,
        #[case] selector: WidthSelector,
        #[case] expected: CodeUnits,
    ) {
        assert_eq!(expected, encode(&Text::from(input), selector));
    }

    #[test]
    fn test_encode_keeps_lone_surrogates() {
        let text = Text::from_units(vec![0xd800, 0x61, 0xdfff]);
        assert_eq!(
            CodeUnits::Generic(vec![0xd800, 0x61, 0xdfff]),
            encode(&text, WidthSelector::Generic)
        );
        assert_eq!(text, decode(&encode(&text, WidthSelector::Generic)));
    }

    #[test]
    fn test_encode_empty() {
        let units = encode(&Text::new(), WidthSelector::FixedWidth(Width::Bits8));
        assert_eq!(CodeUnits::Fixed8(vec![]), units);
    }

    #[test]
    fn test_encode_as() {
        let text = Text::from("\u{100}a");
        assert_eq!(vec![0_u8, 97], encode_as::<u8>(&text));
        assert_eq!(vec![0x100_i32, 97], encode_as::<i32>(&text));
    }

    #[test]
    fn test_decoder_trait() {
        let units = vec![55358_u16, 57052];
        let text: Text = units.decode().unwrap();
        assert_eq!(text, "\u{1fadc}");

        let bytes: &[u8] = &[97, 115, 100, 102];
        let text: Text = bytes.decode().unwrap();
        assert_eq!(text, "asdf");

        let text: Text = CodeUnits::Fixed32(vec![97]).decode().unwrap();
        assert_eq!(text, "a");
    }

    #[test]
    fn test_encoder_trait() {
        let text = Text::from("asdf");

        let bytes: Vec<u8> = text.encode().unwrap();
        assert_eq!(vec![97, 115, 100, 102], bytes);

        let units: Vec<u16> = text.encode().unwrap();
        assert_eq!(vec![97, 115, 100, 102], units);

        let units: CodeUnits = text.encode().unwrap();
        assert_eq!(CodeUnits::Generic(vec![97, 115, 100, 102]), units);
    }
}

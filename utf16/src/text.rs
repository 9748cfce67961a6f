use std::fmt::{Display, Formatter, Write};

use serde::{Serialize, Serializer};

use crate::error::Error;

/// Text held as UTF-16 code units.
///
/// Unlike `String`, a `Text` may contain unpaired surrogates. They are kept
/// as-is and only surface when the text is turned into a `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text {
    units: Vec<u16>,
}

impl Text {
    pub fn new() -> Self {
        Text { units: Vec::new() }
    }

    pub fn from_units(units: Vec<u16>) -> Self {
        Text { units }
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Length in UTF-16 code units. A supplementary-plane character counts twice.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn has_unpaired_surrogates(&self) -> bool {
        char::decode_utf16(self.units.iter().copied()).any(|c| c.is_err())
    }

    /// Converts to a `String`, replacing each unpaired surrogate with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Converts to a `String`, failing on the first unpaired surrogate.
    pub fn to_string_checked(&self) -> Result<String, Error> {
        let mut out = String::with_capacity(self.units.len());
        let mut index = 0;
        for decoded in char::decode_utf16(self.units.iter().copied()) {
            match decoded {
                Ok(c) => {
                    out.push(c);
                    index += c.len_utf16();
                }
                Err(e) => {
                    return Err(Error::UnpairedSurrogate {
                        index,
                        unit: e.unpaired_surrogate(),
                    });
                }
            }
        }
        Ok(out)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::from(s.as_str())
    }
}

impl From<Vec<u16>> for Text {
    fn from(units: Vec<u16>) -> Self {
        Text::from_units(units)
    }
}

impl TryFrom<&Text> for String {
    type Error = Error;

    fn try_from(text: &Text) -> Result<Self, Self::Error> {
        text.to_string_checked()
    }
}

impl TryFrom<Text> for String {
    type Error = Error;

    fn try_from(text: Text) -> Result<Self, Self::Error> {
        text.to_string_checked()
    }
}

impl AsRef<[u16]> for Text {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

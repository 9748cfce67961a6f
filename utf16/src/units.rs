use serde::Serialize;

use crate::width::{Width, WidthSelector};

/// An integer type that can carry a UTF-16 code unit.
///
/// Conversions use plain integer casts and never validate:
/// - `to_code_unit` keeps the low 16 bits, so `-1` reads as `0xffff` and
///   `0x10061` reads as `0x61`.
/// - `from_code_unit` keeps as many low bits as the type holds, so `0x100`
///   stored in a `u8` becomes `0`.
pub trait CodeUnit: Copy {
    fn to_code_unit(self) -> u16;
    fn from_code_unit(unit: u16) -> Self;
}

macro_rules! impl_code_unit {
    ($($t:ty),*) => {
        $(
            impl CodeUnit for $t {
                #[inline]
                fn to_code_unit(self) -> u16 {
                    self as u16
                }

                #[inline]
                fn from_code_unit(unit: u16) -> Self {
                    unit as $t
                }
            }
        )*
    };
}

impl_code_unit!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Anything [`crate::decode`] can read code units from: a sequence of known
/// length whose elements convert to code units.
pub trait CodeUnitSource {
    fn unit_count(&self) -> usize;

    /// Appends every element, in order, as a code unit.
    fn extend_units(&self, out: &mut Vec<u16>);
}

impl<U: CodeUnit> CodeUnitSource for [U] {
    fn unit_count(&self) -> usize {
        self.len()
    }

    fn extend_units(&self, out: &mut Vec<u16>) {
        out.extend(self.iter().map(|u| u.to_code_unit()));
    }
}

impl<U: CodeUnit, const N: usize> CodeUnitSource for [U; N] {
    fn unit_count(&self) -> usize {
        N
    }

    fn extend_units(&self, out: &mut Vec<u16>) {
        self.as_slice().extend_units(out)
    }
}

impl<U: CodeUnit> CodeUnitSource for Vec<U> {
    fn unit_count(&self) -> usize {
        self.len()
    }

    fn extend_units(&self, out: &mut Vec<u16>) {
        self.as_slice().extend_units(out)
    }
}

/// A code unit sequence in one of the supported container shapes.
///
/// Serializes as a plain array of numbers whatever the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum CodeUnits {
    /// Generic ordered sequence with no element width
    Generic(Vec<i64>),
    Fixed8(Vec<u8>),
    Fixed16(Vec<u16>),
    Fixed32(Vec<u32>),
}

impl CodeUnits {
    pub fn len(&self) -> usize {
        match self {
            CodeUnits::Generic(v) => v.len(),
            CodeUnits::Fixed8(v) => v.len(),
            CodeUnits::Fixed16(v) => v.len(),
            CodeUnits::Fixed32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element width, or `None` for the generic shape.
    pub fn width(&self) -> Option<Width> {
        match self {
            CodeUnits::Generic(_) => None,
            CodeUnits::Fixed8(_) => Some(Width::Bits8),
            CodeUnits::Fixed16(_) => Some(Width::Bits16),
            CodeUnits::Fixed32(_) => Some(Width::Bits32),
        }
    }

    /// Selector that produces this shape from [`crate::encode`].
    pub fn selector(&self) -> WidthSelector {
        self.width()
            .map_or(WidthSelector::Generic, WidthSelector::FixedWidth)
    }

    /// Element values widened to `i64`, independent of the shape.
    pub fn to_vec_i64(&self) -> Vec<i64> {
        match self {
            CodeUnits::Generic(v) => v.clone(),
            CodeUnits::Fixed8(v) => v.iter().map(|&u| i64::from(u)).collect(),
            CodeUnits::Fixed16(v) => v.iter().map(|&u| i64::from(u)).collect(),
            CodeUnits::Fixed32(v) => v.iter().map(|&u| i64::from(u)).collect(),
        }
    }
}

impl Default for CodeUnits {
    fn default() -> Self {
        CodeUnits::Generic(Vec::new())
    }
}

impl CodeUnitSource for CodeUnits {
    fn unit_count(&self) -> usize {
        self.len()
    }

    fn extend_units(&self, out: &mut Vec<u16>) {
        match self {
            CodeUnits::Generic(v) => v.extend_units(out),
            CodeUnits::Fixed8(v) => v.extend_units(out),
            CodeUnits::Fixed16(v) => v.extend_units(out),
            CodeUnits::Fixed32(v) => v.extend_units(out),
        }
    }
}

impl From<Vec<i64>> for CodeUnits {
    fn from(v: Vec<i64>) -> Self {
        CodeUnits::Generic(v)
    }
}

impl From<Vec<u8>> for CodeUnits {
    fn from(v: Vec<u8>) -> Self {
        CodeUnits::Fixed8(v)
    }
}

impl From<Vec<u16>> for CodeUnits {
    fn from(v: Vec<u16>) -> Self {
        CodeUnits::Fixed16(v)
    }
}

impl From<Vec<u32>> for CodeUnits {
    fn from(v: Vec<u32>) -> Self {
        CodeUnits::Fixed32(v)
    }
}

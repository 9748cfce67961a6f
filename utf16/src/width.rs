use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::Error;

/// Element width of a fixed-width binary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Bits8,
    Bits16,
    Bits32,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::Bits8 => 8,
            Width::Bits16 => 16,
            Width::Bits32 => 32,
        }
    }

    /// Mask an element of this width applies to a stored value.
    pub fn mask(self) -> u32 {
        u32::MAX >> (32 - self.bits())
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Width::Bits8),
            16 => Ok(Width::Bits16),
            32 => Ok(Width::Bits32),
            _ => Err(Error::UnsupportedWidth(bits)),
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Output shape requested from [`crate::encode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WidthSelector {
    /// Unconstrained integer sequence
    #[default]
    Generic,
    /// Binary view whose elements are truncated to the given width
    FixedWidth(Width),
}

impl Display for WidthSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WidthSelector::Generic => write!(f, "generic"),
            WidthSelector::FixedWidth(width) => write!(f, "{}", width),
        }
    }
}

impl From<Width> for WidthSelector {
    fn from(width: Width) -> Self {
        WidthSelector::FixedWidth(width)
    }
}

impl FromStr for WidthSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "generic" => Ok(WidthSelector::Generic),
            "8" | "u8" => Ok(WidthSelector::FixedWidth(Width::Bits8)),
            "16" | "u16" => Ok(WidthSelector::FixedWidth(Width::Bits16)),
            "32" | "u32" => Ok(WidthSelector::FixedWidth(Width::Bits32)),
            other => {
                // a plain bit count outside the supported set
                let digits = other.strip_prefix('u').unwrap_or(other);
                let is_bit_count = !digits.is_empty()
                    && !digits.starts_with('0')
                    && digits.bytes().all(|b| b.is_ascii_digit());
                match digits.parse::<u32>() {
                    Ok(bits) if is_bit_count => Err(Error::UnsupportedWidth(bits)),
                    _ => Err(Error::InvalidWidthSelector(s.clone())),
                }
            }
        }
    }
}

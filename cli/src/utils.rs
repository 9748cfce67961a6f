use std::fs;
use std::io::{self, Read};

use utf16::CodeUnits;

use crate::error::{Error, Result};

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Parse a list of code unit values.
///
/// Values are separated by commas and/or whitespace and may be wrapped in
/// `[` `]`. Each value is decimal or `0x`-prefixed hexadecimal, optionally
/// negative. Values are not range checked.
pub(crate) fn parse_code_units(input: &str) -> Result<Vec<i64>> {
    let input = input.trim();
    let input = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(input);

    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_code_unit)
        .collect()
}

fn parse_code_unit(token: &str) -> Result<i64> {
    let invalid = || Error::InvalidInput(format!("invalid code unit: {token}"));

    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (radix, digits) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // from_str_radix accepts its own sign, so the digits are checked first
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    let value = i64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(if negative { -value } else { value })
}

/// Format code units as space separated decimal values
pub(crate) fn format_code_units(units: &CodeUnits) -> String {
    units
        .to_vec_i64()
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

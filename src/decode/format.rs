//! Data flash field format tags
//!
//! The device reference manual defines a small vocabulary of formats:
//! unsigned integers (`U1`/`U2`/`U4`), two's-complement signed integers
//! (`I1`/`I2`/`I4`), IEEE-754 single precision (`F4`), bit registers
//! rendered in hex and binary (`H1`/`H2`), and length-prefixed strings
//! (`S{n}`, where `n` is the buffer size including the length byte).
//! All multi-byte values are stored in little-endian order.

use super::record::DecodeError;
use std::fmt;
use std::str::FromStr;

/// A field's binary encoding and width, parsed from a schema format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    U1,
    U2,
    U4,
    I1,
    I2,
    I4,
    F4,
    H1,
    H2,
    /// Length-prefixed string occupying `n` bytes total
    Str(usize),
}

impl DataFormat {
    /// Number of consecutive dump bytes this format occupies
    pub fn width(&self) -> usize {
        match self {
            DataFormat::U1 | DataFormat::I1 | DataFormat::H1 => 1,
            DataFormat::U2 | DataFormat::I2 | DataFormat::H2 => 2,
            DataFormat::U4 | DataFormat::I4 | DataFormat::F4 => 4,
            DataFormat::Str(n) => *n,
        }
    }
}

impl FromStr for DataFormat {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U1" => Ok(DataFormat::U1),
            "U2" => Ok(DataFormat::U2),
            "U4" => Ok(DataFormat::U4),
            "I1" => Ok(DataFormat::I1),
            "I2" => Ok(DataFormat::I2),
            "I4" => Ok(DataFormat::I4),
            "F4" => Ok(DataFormat::F4),
            "H1" => Ok(DataFormat::H1),
            "H2" => Ok(DataFormat::H2),
            _ => {
                let size = s
                    .strip_prefix('S')
                    .and_then(|digits| digits.parse::<usize>().ok())
                    .filter(|&n| n > 0);
                match size {
                    Some(n) => Ok(DataFormat::Str(n)),
                    None => Err(DecodeError::UnknownFormat(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::U1 => write!(f, "U1"),
            DataFormat::U2 => write!(f, "U2"),
            DataFormat::U4 => write!(f, "U4"),
            DataFormat::I1 => write!(f, "I1"),
            DataFormat::I2 => write!(f, "I2"),
            DataFormat::I4 => write!(f, "I4"),
            DataFormat::F4 => write!(f, "F4"),
            DataFormat::H1 => write!(f, "H1"),
            DataFormat::H2 => write!(f, "H2"),
            DataFormat::Str(n) => write!(f, "S{}", n),
        }
    }
}

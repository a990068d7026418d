use std::fmt;
use std::str::FromStr;

use thiserror::Error as ThisError;

/// Integer layout of a bit-field range: signedness plus bit width.
///
/// Renders to the form the server expects, a sign marker followed by the
/// width in decimal (`i8`, `u16`). Widths are rendered as given; the server
/// rejects the ones outside its legal range.
///
/// Ref: <https://redis.io/docs/latest/commands/bitfield/>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    pub signed: bool,
    pub bits: u8,
}

impl Encoding {
    pub fn signed(bits: u8) -> Encoding {
        Encoding { signed: true, bits }
    }

    pub fn unsigned(bits: u8) -> Encoding {
        Encoding {
            signed: false,
            bits,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{}", sign, self.bits)
    }
}

#[derive(Debug, ThisError, PartialEq)]
pub enum ParseEncodingError {
    #[error("empty encoding token")]
    Empty,
    #[error("invalid sign marker {0}, expected 'i' or 'u'")]
    InvalidSign(char),
    #[error("invalid bit width {0}")]
    InvalidBits(String),
}

impl FromStr for Encoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let signed = match chars.next() {
            Some('i') => true,
            Some('u') => false,
            Some(other) => return Err(ParseEncodingError::InvalidSign(other)),
            None => return Err(ParseEncodingError::Empty),
        };

        let bits = chars.as_str();
        let bits = bits
            .parse::<u8>()
            .map_err(|_| ParseEncodingError::InvalidBits(bits.to_string()))?;

        Ok(Encoding { signed, bits })
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error as ThisError;

/// Bit position a subcommand targets. An absolute offset addresses a bit
/// directly; a relative offset (`#` prefix on the wire) is a multiple of the
/// encoding's width, so `#2` against `u16` addresses bit 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub relative: bool,
    pub value: i64,
}

impl Offset {
    pub fn absolute(value: i64) -> Offset {
        Offset {
            relative: false,
            value,
        }
    }

    pub fn relative(value: i64) -> Offset {
        Offset {
            relative: true,
            value,
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            write!(f, "#{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

#[derive(Debug, ThisError, PartialEq)]
#[error("invalid bit offset {0}")]
pub struct ParseOffsetError(String);

impl FromStr for Offset {
    type Err = ParseOffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (relative, digits) = match s.strip_prefix('#') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let value = digits
            .parse::<i64>()
            .map_err(|_| ParseOffsetError(s.to_string()))?;

        Ok(Offset { relative, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_absolute() {
        assert_eq!(Offset::absolute(5).to_string(), "5");
        assert_eq!(Offset::absolute(0).to_string(), "0");
    }

    #[test]
    fn render_relative() {
        assert_eq!(Offset::relative(2).to_string(), "#2");
    }

    // Negative offsets are representable and render as-is; the server
    // rejects them.
    #[test]
    fn render_negative() {
        assert_eq!(Offset::absolute(-3).to_string(), "-3");
        assert_eq!(Offset::relative(-1).to_string(), "#-1");
    }

    #[test]
    fn parse_absolute() {
        assert_eq!("5".parse(), Ok(Offset::absolute(5)));
        assert_eq!("-3".parse(), Ok(Offset::absolute(-3)));
    }

    #[test]
    fn parse_relative() {
        assert_eq!("#2".parse(), Ok(Offset::relative(2)));
        assert_eq!("#-1".parse(), Ok(Offset::relative(-1)));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "abc".parse::<Offset>(),
            Err(ParseOffsetError("abc".to_string()))
        );
        assert_eq!("#".parse::<Offset>(), Err(ParseOffsetError("#".to_string())));
        assert_eq!("".parse::<Offset>(), Err(ParseOffsetError(String::new())));
    }
}

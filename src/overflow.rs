use strum_macros::{Display, EnumString};

/// Behavior when an INCRBY result no longer fits the encoded integer's
/// range.
///
/// `Wrap` is the server default: subcommands never emit its keyword, the
/// absence of an `OVERFLOW` directive already means wrap-around. The keyword
/// spellings are fixed by the protocol.
///
/// Ref: <https://redis.io/docs/latest/commands/bitfield/>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
pub enum Overflow {
    #[default]
    #[strum(serialize = "WRAP")]
    Wrap,
    #[strum(serialize = "SAT")]
    Saturate,
    #[strum(serialize = "FAIL")]
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_keywords() {
        assert_eq!(Overflow::Wrap.to_string(), "WRAP");
        assert_eq!(Overflow::Saturate.to_string(), "SAT");
        assert_eq!(Overflow::Fail.to_string(), "FAIL");
    }

    #[test]
    fn parse_keywords() {
        assert_eq!("WRAP".parse(), Ok(Overflow::Wrap));
        assert_eq!("SAT".parse(), Ok(Overflow::Saturate));
        assert_eq!("FAIL".parse(), Ok(Overflow::Fail));
    }

    // The protocol fixes the spelling; lowercase is not a keyword.
    #[test]
    fn parse_rejects_lowercase() {
        assert!("sat".parse::<Overflow>().is_err());
        assert!("Saturate".parse::<Overflow>().is_err());
    }

    #[test]
    fn wrap_is_default() {
        assert_eq!(Overflow::default(), Overflow::Wrap);
    }
}

use bytes::Bytes;

use crate::encoding::Encoding;
use crate::offset::Offset;
use crate::ops::subcommand::Subcommand;
use crate::ops::OpParser;
use crate::overflow::Overflow;
use crate::Error;

/// Increments the integer at `offset`, interpreted with `encoding`, by
/// `increment`.
///
/// A non-default overflow policy is emitted as an `OVERFLOW` directive ahead
/// of the increment directive, since the server grammar wants modifiers
/// before the subcommand they modify. The default `Wrap` policy is elided.
///
/// Ref: <https://redis.io/docs/latest/commands/bitfield/>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrBy {
    pub encoding: Encoding,
    pub offset: Offset,
    pub increment: i64,
    pub overflow: Overflow,
}

impl Subcommand for IncrBy {
    fn token_count(&self) -> usize {
        if self.overflow == Overflow::Wrap {
            4
        } else {
            6
        }
    }

    fn is_readonly(&self) -> bool {
        false
    }

    fn append_tokens(&self, buf: &mut Vec<Bytes>) {
        if self.overflow != Overflow::Wrap {
            buf.push(Bytes::from_static(b"OVERFLOW"));
            buf.push(Bytes::from(self.overflow.to_string()));
        }

        buf.push(Bytes::from_static(b"INCRBY"));
        buf.push(Bytes::from(self.encoding.to_string()));
        buf.push(Bytes::from(self.offset.to_string()));
        buf.push(Bytes::from(self.increment.to_string()));
    }
}

impl TryFrom<&mut OpParser> for IncrBy {
    type Error = Error;

    fn try_from(parser: &mut OpParser) -> Result<Self, Self::Error> {
        let encoding = parser.next_encoding()?;
        let offset = parser.next_offset()?;
        let increment = parser.next_integer()?;

        Ok(Self {
            encoding,
            offset,
            increment,
            overflow: Overflow::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{self, Op};

    #[test]
    fn wrap_renders_four_tokens() {
        let op = IncrBy {
            encoding: Encoding::signed(8),
            offset: Offset::absolute(0),
            increment: 10,
            overflow: Overflow::Wrap,
        };

        assert_eq!(op.token_count(), 4);

        let mut buf = Vec::new();
        op.append_tokens(&mut buf);

        assert_eq!(
            buf,
            vec![
                Bytes::from("INCRBY"),
                Bytes::from("i8"),
                Bytes::from("0"),
                Bytes::from("10"),
            ]
        );
    }

    #[test]
    fn saturate_renders_six_tokens() {
        let op = IncrBy {
            encoding: Encoding::unsigned(16),
            offset: Offset::relative(2),
            increment: 5,
            overflow: Overflow::Saturate,
        };

        assert_eq!(op.token_count(), 6);

        let mut buf = Vec::new();
        op.append_tokens(&mut buf);

        assert_eq!(
            buf,
            vec![
                Bytes::from("OVERFLOW"),
                Bytes::from("SAT"),
                Bytes::from("INCRBY"),
                Bytes::from("u16"),
                Bytes::from("#2"),
                Bytes::from("5"),
            ]
        );
    }

    // Toggling the policy on the same subcommand must move both the count
    // and the token order.
    #[test]
    fn policy_toggle_changes_count_and_order() {
        let mut op = IncrBy {
            encoding: Encoding::signed(8),
            offset: Offset::absolute(0),
            increment: 1,
            overflow: Overflow::Wrap,
        };

        let mut wrapped = Vec::new();
        op.append_tokens(&mut wrapped);
        assert_eq!(wrapped.len(), op.token_count());
        assert_eq!(wrapped[0], Bytes::from("INCRBY"));

        op.overflow = Overflow::Fail;

        let mut failing = Vec::new();
        op.append_tokens(&mut failing);
        assert_eq!(failing.len(), op.token_count());
        assert_eq!(failing[0], Bytes::from("OVERFLOW"));
        assert_eq!(failing[1], Bytes::from("FAIL"));
        assert_eq!(failing[2], Bytes::from("INCRBY"));
    }

    #[test]
    fn is_not_readonly() {
        let op = IncrBy {
            encoding: Encoding::signed(8),
            offset: Offset::absolute(0),
            increment: 1,
            overflow: Overflow::Wrap,
        };

        assert!(!op.is_readonly());
    }

    #[test]
    fn parse_without_overflow() {
        let tokens = vec![
            Bytes::from("INCRBY"),
            Bytes::from("i8"),
            Bytes::from("0"),
            Bytes::from("10"),
        ];
        let parsed = ops::parse(tokens).unwrap();

        assert_eq!(
            parsed,
            vec![Op::IncrBy(IncrBy {
                encoding: Encoding::signed(8),
                offset: Offset::absolute(0),
                increment: 10,
                overflow: Overflow::Wrap,
            })]
        );
    }

    #[test]
    fn parse_with_overflow() {
        let tokens = vec![
            Bytes::from("OVERFLOW"),
            Bytes::from("SAT"),
            Bytes::from("INCRBY"),
            Bytes::from("u16"),
            Bytes::from("#2"),
            Bytes::from("5"),
        ];
        let parsed = ops::parse(tokens).unwrap();

        assert_eq!(
            parsed,
            vec![Op::IncrBy(IncrBy {
                encoding: Encoding::unsigned(16),
                offset: Offset::relative(2),
                increment: 5,
                overflow: Overflow::Saturate,
            })]
        );
    }

    #[test]
    fn parse_invalid_policy() {
        let tokens = vec![
            Bytes::from("OVERFLOW"),
            Bytes::from("CLAMP"),
            Bytes::from("INCRBY"),
            Bytes::from("i8"),
            Bytes::from("0"),
            Bytes::from("1"),
        ];

        assert!(ops::parse(tokens).is_err());
    }
}

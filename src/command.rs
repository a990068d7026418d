use bytes::Bytes;
use tracing::trace;

use crate::ops::subcommand::Subcommand;
use crate::ops::{self, Op, OpParser};
use crate::Error;

/// A full BITFIELD invocation: the target key plus the subcommands to run
/// against it, in caller order.
///
/// The command only assembles tokens; handing them to a transport (and
/// reading the reply) is the caller's business.
///
/// Ref: <https://redis.io/docs/latest/commands/bitfield/>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitfield {
    pub key: String,
    pub ops: Vec<Op>,
}

impl Bitfield {
    pub fn new(key: impl Into<String>, ops: Vec<Op>) -> Bitfield {
        Bitfield {
            key: key.into(),
            ops,
        }
    }

    /// Total number of wire tokens `tokens` will produce, command name and
    /// key included.
    pub fn token_count(&self) -> usize {
        2 + self
            .ops
            .iter()
            .map(Subcommand::token_count)
            .sum::<usize>()
    }

    /// True when no subcommand writes. Such a command may be served by a
    /// replica.
    pub fn is_readonly(&self) -> bool {
        self.ops.iter().all(Subcommand::is_readonly)
    }

    /// Renders the command to its wire token sequence, sized up front from
    /// the subcommands' declared token counts.
    pub fn tokens(&self) -> Vec<Bytes> {
        let count = self.token_count();
        let mut buf = Vec::with_capacity(count);

        buf.push(Bytes::from_static(b"BITFIELD"));
        buf.push(Bytes::from(self.key.clone()));
        for op in &self.ops {
            op.append_tokens(&mut buf);
        }

        // A declared count that disagrees with the emitted tokens is a bug
        // in a Subcommand impl, not a runtime condition.
        debug_assert_eq!(buf.len(), count);

        trace!(
            key = %self.key,
            subcommands = self.ops.len(),
            tokens = count,
            "encoded BITFIELD command"
        );

        buf
    }
}

impl TryFrom<Vec<Bytes>> for Bitfield {
    type Error = Error;

    fn try_from(tokens: Vec<Bytes>) -> Result<Self, Self::Error> {
        let parser = &mut OpParser::new(tokens);

        let name = parser.next_keyword()?;
        if name != "BITFIELD" {
            return Err(format!("protocol error; expected BITFIELD, got {}", name).into());
        }

        let key = parser.next_string()?;
        let ops = ops::parse_with(parser)?;

        Ok(Bitfield { key, ops })
    }
}

use bytes::Bytes;

use crate::encoding::Encoding;
use crate::offset::Offset;
use crate::ops::subcommand::Subcommand;
use crate::ops::OpParser;
use crate::Error;

/// Stores `value` at `offset`, interpreted with `encoding`, and has the
/// server reply with the previous value.
///
/// Ref: <https://redis.io/docs/latest/commands/bitfield/>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Set {
    pub encoding: Encoding,
    pub offset: Offset,
    pub value: i64,
}

impl Subcommand for Set {
    fn token_count(&self) -> usize {
        4
    }

    fn is_readonly(&self) -> bool {
        false
    }

    fn append_tokens(&self, buf: &mut Vec<Bytes>) {
        buf.push(Bytes::from_static(b"SET"));
        buf.push(Bytes::from(self.encoding.to_string()));
        buf.push(Bytes::from(self.offset.to_string()));
        buf.push(Bytes::from(self.value.to_string()));
    }
}

impl TryFrom<&mut OpParser> for Set {
    type Error = Error;

    fn try_from(parser: &mut OpParser) -> Result<Self, Self::Error> {
        let encoding = parser.next_encoding()?;
        let offset = parser.next_offset()?;
        let value = parser.next_integer()?;

        Ok(Self {
            encoding,
            offset,
            value,
        })
    }
}

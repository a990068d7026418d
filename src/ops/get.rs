use bytes::Bytes;

use crate::encoding::Encoding;
use crate::offset::Offset;
use crate::ops::subcommand::Subcommand;
use crate::ops::OpParser;
use crate::Error;

/// Returns the integer stored at `offset`, interpreted with `encoding`.
///
/// Ref: <https://redis.io/docs/latest/commands/bitfield/>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Get {
    pub encoding: Encoding,
    pub offset: Offset,
}

impl Subcommand for Get {
    fn token_count(&self) -> usize {
        3
    }

    fn is_readonly(&self) -> bool {
        true
    }

    fn append_tokens(&self, buf: &mut Vec<Bytes>) {
        buf.push(Bytes::from_static(b"GET"));
        buf.push(Bytes::from(self.encoding.to_string()));
        buf.push(Bytes::from(self.offset.to_string()));
    }
}

impl TryFrom<&mut OpParser> for Get {
    type Error = Error;

    fn try_from(parser: &mut OpParser) -> Result<Self, Self::Error> {
        let encoding = parser.next_encoding()?;
        let offset = parser.next_offset()?;

        Ok(Self { encoding, offset })
    }
}

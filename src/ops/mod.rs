pub mod get;
pub mod incrby;
pub mod set;
pub mod subcommand;

use std::{str, vec};

use bytes::Bytes;
use thiserror::Error as ThisError;

use crate::encoding::{Encoding, ParseEncodingError};
use crate::offset::{Offset, ParseOffsetError};
use crate::ops::subcommand::Subcommand;
use crate::overflow::Overflow;
use crate::Error;

use get::Get;
use incrby::IncrBy;
use set::Set;

/// One directive inside a BITFIELD invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Get(Get),
    Set(Set),
    IncrBy(IncrBy),
}

impl Subcommand for Op {
    fn token_count(&self) -> usize {
        match self {
            Op::Get(op) => op.token_count(),
            Op::Set(op) => op.token_count(),
            Op::IncrBy(op) => op.token_count(),
        }
    }

    fn is_readonly(&self) -> bool {
        match self {
            Op::Get(op) => op.is_readonly(),
            Op::Set(op) => op.is_readonly(),
            Op::IncrBy(op) => op.is_readonly(),
        }
    }

    fn append_tokens(&self, buf: &mut Vec<Bytes>) {
        match self {
            Op::Get(op) => op.append_tokens(buf),
            Op::Set(op) => op.append_tokens(buf),
            Op::IncrBy(op) => op.append_tokens(buf),
        }
    }
}

impl TryFrom<&mut OpParser> for Op {
    type Error = Error;

    fn try_from(parser: &mut OpParser) -> Result<Self, Self::Error> {
        let keyword = parser.next_keyword()?;

        match &keyword[..] {
            "GET" => Get::try_from(parser).map(Op::Get),
            "SET" => Set::try_from(parser).map(Op::Set),
            "INCRBY" => IncrBy::try_from(parser).map(Op::IncrBy),
            // An overflow directive only makes sense attached to the INCRBY
            // it precedes.
            "OVERFLOW" => {
                let overflow = parser.next_overflow()?;
                let next = parser.next_keyword()?;
                if next != "INCRBY" {
                    return Err(ParserError::DanglingOverflow { keyword: next }.into());
                }

                let op = IncrBy::try_from(parser)?;
                Ok(Op::IncrBy(IncrBy { overflow, ..op }))
            }
            _ => Err(ParserError::UnknownSubcommand { keyword }.into()),
        }
    }
}

/// Parses a full subcommand token sequence: everything after the command
/// name and key.
pub fn parse(tokens: Vec<Bytes>) -> crate::Result<Vec<Op>> {
    parse_with(&mut OpParser::new(tokens))
}

pub(crate) fn parse_with(parser: &mut OpParser) -> crate::Result<Vec<Op>> {
    let mut ops = Vec::new();
    while !parser.finished() {
        ops.push(Op::try_from(&mut *parser)?);
    }

    Ok(ops)
}

pub(crate) struct OpParser {
    parts: vec::IntoIter<Bytes>,
}

impl OpParser {
    pub(crate) fn new(tokens: Vec<Bytes>) -> OpParser {
        OpParser {
            parts: tokens.into_iter(),
        }
    }

    fn finished(&self) -> bool {
        self.parts.as_slice().is_empty()
    }

    // Subcommand keywords are matched case-insensitively; the wire spelling
    // is uppercase.
    pub(crate) fn next_keyword(&mut self) -> Result<String, ParserError> {
        self.next_string().map(|s| s.to_uppercase())
    }

    pub(crate) fn next_string(&mut self) -> Result<String, ParserError> {
        let token = self.parts.next().ok_or(ParserError::EndOfStream)?;

        str::from_utf8(&token)
            .map(|s| s.to_string())
            .map_err(ParserError::InvalidUtf8Token)
    }

    fn next_integer(&mut self) -> Result<i64, ParserError> {
        let token = self.next_string()?;

        token
            .parse::<i64>()
            .map_err(|_| ParserError::InvalidInteger(token))
    }

    fn next_encoding(&mut self) -> Result<Encoding, ParserError> {
        let token = self.next_string()?;
        let encoding = token.parse()?;

        Ok(encoding)
    }

    fn next_offset(&mut self) -> Result<Offset, ParserError> {
        let token = self.next_string()?;
        let offset = token.parse()?;

        Ok(offset)
    }

    fn next_overflow(&mut self) -> Result<Overflow, ParserError> {
        let token = self.next_string()?;

        token
            .parse::<Overflow>()
            .map_err(|_| ParserError::InvalidOverflow(token))
    }
}

#[derive(Debug, ThisError, PartialEq)]
pub(crate) enum ParserError {
    #[error("protocol error; unknown subcommand {keyword}")]
    UnknownSubcommand { keyword: String },
    #[error("protocol error; OVERFLOW must be followed by INCRBY, got {keyword}")]
    DanglingOverflow { keyword: String },
    #[error("protocol error; invalid UTF-8 token")]
    InvalidUtf8Token(#[from] str::Utf8Error),
    #[error("protocol error; {0}")]
    InvalidEncoding(#[from] ParseEncodingError),
    #[error("protocol error; {0}")]
    InvalidOffset(#[from] ParseOffsetError),
    #[error("protocol error; invalid overflow policy {0}")]
    InvalidOverflow(String),
    #[error("protocol error; {0} is not an integer")]
    InvalidInteger(String),
    #[error("protocol error; attempting to extract a value failed due to the token stream being fully consumed")]
    EndOfStream,
}

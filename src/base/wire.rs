//! Creating and consuming data in wire format.
//!
//! All decoding goes through [`WireBuffer`] and [`Parser`], both of which
//! check every access against the bounds of the underlying data and fail
//! with a [`ParseError`] instead of reading past its end. Encoding goes
//! through the [`Composer`] trait which is implemented by plain vecs and by
//! the message renderer, the latter adding name compression.

use super::name::Name;
use crate::tsig::TsigError;
use core::fmt;

//------------ compose functions ---------------------------------------------

/// Composes some data prefixed by its length as a 16 bit integer.
///
/// If `op` fails or the composed data is longer than 0xFFFF octets, the
/// target is truncated to where it was before and an error is returned.
pub fn compose_len_prefixed<Target, F>(
    target: &mut Target,
    op: F,
) -> Result<(), ComposeError>
where
    Target: Composer + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), ComposeError>,
{
    let start = target.len();
    target.append_slice(&[0; 2]);
    let pos = target.len();
    if let Err(err) = op(target) {
        target.truncate(start);
        return Err(err);
    }
    let len = match u16::try_from(target.len() - pos) {
        Ok(len) => len,
        Err(_) => {
            target.truncate(start);
            return Err(ComposeError::LongData);
        }
    };
    target.as_mut_slice()[start..pos].copy_from_slice(&len.to_be_bytes());
    Ok(())
}

//------------ Composer ------------------------------------------------------

/// A target for composing wire format data.
pub trait Composer {
    /// Appends a slice of octets to the end of the target.
    fn append_slice(&mut self, slice: &[u8]);

    /// Returns the octets composed so far.
    fn as_slice(&self) -> &[u8];

    /// Returns the octets composed so far for patching.
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Drops everything from the target beyond `len` octets.
    fn truncate(&mut self, len: usize);

    /// Returns the number of octets composed so far.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether the target is still empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a domain name using name compression if supported.
    ///
    /// Domain name compression attempts to lower the size of a DNS message
    /// by avoiding to include repeated domain name suffixes. Instead of
    /// adding the full suffix, a pointer to the location of the previous
    /// occurence is added.
    ///
    /// The trait provides a default implementation which simply appends the
    /// name uncompressed.
    fn append_compressed_name(
        &mut self,
        name: &Name,
    ) -> Result<(), ComposeError> {
        self.append_slice(name.as_wire());
        Ok(())
    }

    fn append_u8(&mut self, value: u8) {
        self.append_slice(&[value])
    }

    fn append_u16(&mut self, value: u16) {
        self.append_slice(&value.to_be_bytes())
    }

    fn append_u32(&mut self, value: u32) {
        self.append_slice(&value.to_be_bytes())
    }
}

impl Composer for Vec<u8> {
    fn append_slice(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice)
    }

    fn as_slice(&self) -> &[u8] {
        Vec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        Vec::as_mut_slice(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}

//------------ WireBuffer ----------------------------------------------------

/// A bounds-checked view of wire format data.
///
/// Every access checks its index or range against the length of the data
/// and returns [`ParseError::ShortInput`] if it falls outside.
#[derive(Clone, Copy, Debug)]
pub struct WireBuffer<'a> {
    data: &'a [u8],
}

impl<'a> WireBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        WireBuffer { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the octet at position `index`.
    pub fn byte_at(&self, index: usize) -> Result<u8, ParseError> {
        self.data.get(index).copied().ok_or(ParseError::ShortInput)
    }

    /// Returns the octets from `start` up to but excluding `end`.
    pub fn slice(
        &self,
        start: usize,
        end: usize,
    ) -> Result<&'a [u8], ParseError> {
        if start > end {
            return Err(ParseError::ShortInput);
        }
        self.data.get(start..end).ok_or(ParseError::ShortInput)
    }

    /// Returns an iterator over the octets from `start` to the end.
    pub fn iter_from(
        &self,
        start: usize,
    ) -> Result<impl Iterator<Item = u8> + 'a, ParseError> {
        Ok(self.slice(start, self.len())?.iter().copied())
    }
}

//------------ Parser --------------------------------------------------------

/// A cursor moving forward through a [`WireBuffer`].
///
/// The parser can be restricted to a limit smaller than the end of the
/// buffer via [`Parser::parse_limited`] which is how record data is kept
/// within its rdlength. The full buffer stays available through
/// [`Parser::buffer`] for following compression pointers.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    buf: WireBuffer<'a>,
    pos: usize,
    limit: usize,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_buffer(WireBuffer::new(data))
    }

    pub fn from_buffer(buf: WireBuffer<'a>) -> Self {
        Parser {
            buf,
            pos: 0,
            limit: buf.len(),
        }
    }

    /// Returns the underlying buffer disregarding any limit.
    pub fn buffer(&self) -> WireBuffer<'a> {
        self.buf
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the number of octets left before the current limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    /// Moves to an absolute position which must be within the limit.
    pub fn seek(&mut self, pos: usize) -> Result<(), ParseError> {
        if pos > self.limit {
            return Err(ParseError::ShortInput);
        }
        self.pos = pos;
        Ok(())
    }

    pub fn advance(&mut self, len: usize) -> Result<(), ParseError> {
        self.parse_octets(len).map(|_| ())
    }

    pub fn peek_u8(&self) -> Result<u8, ParseError> {
        if self.remaining() < 1 {
            return Err(ParseError::ShortInput);
        }
        self.buf.byte_at(self.pos)
    }

    pub fn parse_octets(
        &mut self,
        len: usize,
    ) -> Result<&'a [u8], ParseError> {
        if len > self.remaining() {
            return Err(ParseError::ShortInput);
        }
        let res = self.buf.slice(self.pos, self.pos + len)?;
        self.pos += len;
        Ok(res)
    }

    /// Takes all octets up to the limit.
    pub fn parse_remaining(&mut self) -> Result<&'a [u8], ParseError> {
        self.parse_octets(self.remaining())
    }

    pub fn parse_array<const N: usize>(
        &mut self,
    ) -> Result<[u8; N], ParseError> {
        let mut res = [0u8; N];
        res.copy_from_slice(self.parse_octets(N)?);
        Ok(res)
    }

    pub fn parse_u8(&mut self) -> Result<u8, ParseError> {
        self.parse_array::<1>().map(|res| res[0])
    }

    pub fn parse_u16(&mut self) -> Result<u16, ParseError> {
        self.parse_array().map(u16::from_be_bytes)
    }

    pub fn parse_u32(&mut self) -> Result<u32, ParseError> {
        self.parse_array().map(u32::from_be_bytes)
    }

    /// Parses the 48 bit unsigned integer used for TSIG time stamps.
    pub fn parse_u48(&mut self) -> Result<u64, ParseError> {
        let data: [u8; 6] = self.parse_array()?;
        Ok(data
            .iter()
            .fold(0u64, |acc, octet| (acc << 8) | u64::from(*octet)))
    }

    /// Runs `op` with the limit set to the next `len` octets.
    ///
    /// The closure has to consume exactly `len` octets. If it leaves some
    /// of them, the function fails with [`ParseError::BadRdlength`].
    pub fn parse_limited<T, F>(
        &mut self,
        len: usize,
        op: F,
    ) -> Result<T, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<T, ParseError>,
    {
        if len > self.remaining() {
            return Err(ParseError::ShortInput);
        }
        let old_limit = self.limit;
        self.limit = self.pos + len;
        let res = op(self);
        let complete = self.pos == self.limit;
        self.limit = old_limit;
        let res = res?;
        if !complete {
            return Err(ParseError::BadRdlength);
        }
        Ok(res)
    }
}

//============ Error Types ===================================================

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// The message would exceed its maximum size.
    TooBig,

    /// Length-prefixed data exceeded 0xFFFF octets.
    LongData,

    /// A relative name was composed without an origin.
    RelativeName,

    /// A renderer was asked to move back to an earlier section.
    SectionOrder,

    /// Signing the message with TSIG failed.
    Tsig(TsigError),
}

impl From<TsigError> for ComposeError {
    fn from(err: TsigError) -> Self {
        ComposeError::Tsig(err)
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::TooBig => f.write_str("message too big"),
            ComposeError::LongData => f.write_str("data too long"),
            ComposeError::RelativeName => {
                f.write_str("relative name without origin")
            }
            ComposeError::SectionOrder => {
                f.write_str("sections must be rendered in order")
            }
            ComposeError::Tsig(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ComposeError {}

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing wire format data.
///
/// All variants but `Tsig` indicate malformed data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the data.
    ShortInput,

    /// The message is shorter than the twelve octet header.
    ShortHeader,

    /// A compression pointer does not point backwards.
    BadPointer,

    /// A label type other than normal or pointer was found.
    BadLabelType,

    /// A name is longer than 255 octets.
    NameTooLong,

    /// Record data did not use up exactly its rdlength.
    BadRdlength,

    /// There is data after the last record.
    TrailingJunk,

    /// An OPT record appeared where it is not allowed.
    BadEdns,

    /// A TSIG record appeared where it is not allowed.
    BadTsig,

    /// A TSIG record was present but could not be verified.
    Tsig(TsigError),

    /// Some other formatting error occurred.
    Form(&'static str),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        ParseError::Form(msg)
    }
}

//--- From

impl From<TsigError> for ParseError {
    fn from(err: TsigError) -> Self {
        ParseError::Tsig(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::ShortHeader => {
                f.write_str("message shorter than header")
            }
            ParseError::BadPointer => f.write_str("bad compression pointer"),
            ParseError::BadLabelType => f.write_str("bad label type"),
            ParseError::NameTooLong => f.write_str("name too long"),
            ParseError::BadRdlength => {
                f.write_str("record data length mismatch")
            }
            ParseError::TrailingJunk => {
                f.write_str("trailing data after message")
            }
            ParseError::BadEdns => f.write_str("misplaced OPT record"),
            ParseError::BadTsig => f.write_str("misplaced TSIG record"),
            ParseError::Tsig(ref err) => err.fmt(f),
            ParseError::Form(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn buffer_fails_closed() {
        let buf = WireBuffer::new(b"abc");
        assert_eq!(buf.byte_at(2), Ok(b'c'));
        assert_eq!(buf.byte_at(3), Err(ParseError::ShortInput));
        assert_eq!(buf.slice(1, 3), Ok(&b"bc"[..]));
        assert_eq!(buf.slice(1, 4), Err(ParseError::ShortInput));
        assert_eq!(buf.slice(2, 1), Err(ParseError::ShortInput));
        assert_eq!(buf.iter_from(1).unwrap().collect::<Vec<_>>(), b"bc");
        assert!(buf.iter_from(4).is_err());
    }

    #[test]
    fn parse_ints() {
        let mut parser = Parser::new(b"\x01\x02\x03\x04\x05\x06\x07\x08");
        assert_eq!(parser.parse_u8(), Ok(1));
        assert_eq!(parser.parse_u16(), Ok(0x0203));
        assert_eq!(parser.parse_u32(), Ok(0x04050607));
        assert_eq!(parser.parse_u16(), Err(ParseError::ShortInput));
        assert_eq!(parser.parse_u8(), Ok(8));
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn limited() {
        let mut parser = Parser::new(b"\x00\x01\x02\x03");
        assert_eq!(
            parser.parse_limited(2, |parser| parser.parse_u16()),
            Ok(1)
        );
        assert_eq!(
            parser.parse_limited(2, |parser| parser.parse_u8()),
            Err(ParseError::BadRdlength)
        );
        let mut parser = Parser::new(b"\x00\x01\x02\x03");
        assert_eq!(
            parser.parse_limited(1, |parser| parser.parse_u16()),
            Err(ParseError::ShortInput)
        );
        assert_eq!(
            parser.parse_limited(5, |parser| parser.parse_u8()),
            Err(ParseError::ShortInput)
        );
    }

    #[test]
    fn len_prefixed() {
        let mut target = vec![0xFFu8];
        compose_len_prefixed(&mut target, |target| {
            target.append_slice(b"foo");
            Ok(())
        })
        .unwrap();
        assert_eq!(target, b"\xFF\x00\x03foo");
        assert_eq!(
            compose_len_prefixed(&mut target, |target| {
                target.append_slice(b"bar");
                Err(ComposeError::TooBig)
            }),
            Err(ComposeError::TooBig)
        );
        assert_eq!(target, b"\xFF\x00\x03foo");
    }
}

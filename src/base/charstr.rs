//! Character strings.
//!
//! The somewhat ill-named `<character-string>` is defined in [RFC 1035] as
//! binary information of up to 255 octets. As such, it doesn’t necessarily
//! contain (ASCII-) characters nor is it a string in a Rust-sense.
//!
//! In wire format, character strings are preceded by a length octet. In
//! presentation format they are either a single word or enclosed in double
//! quotes and always written quoted.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::scan::{Symbol, SyntaxError, Tokenizer};
use super::wire::{Composer, ParseError, Parser};
use core::{fmt, hash, ops};

//------------ CharStr -------------------------------------------------------

/// The content of a DNS character string.
#[derive(Clone, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct CharStr(Vec<u8>);

impl CharStr {
    pub const MAX_LEN: usize = 255;

    /// Creates a character string from octets.
    pub fn from_octets(octets: Vec<u8>) -> Result<Self, CharStrError> {
        if octets.len() > Self::MAX_LEN {
            Err(CharStrError)
        } else {
            Ok(CharStr(octets))
        }
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, CharStrError> {
        Self::from_octets(slice.to_vec())
    }

    pub fn empty() -> Self {
        CharStr(Vec::new())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_octets(self) -> Vec<u8> {
        self.0
    }

    /// Reads a length-prefixed character string.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let len = parser.parse_u8()?;
        Ok(CharStr(parser.parse_octets(usize::from(len))?.to_vec()))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_u8(self.0.len() as u8);
        target.append_slice(&self.0)
    }

    /// Reads a character string from the next token.
    pub fn scan(tok: &mut Tokenizer) -> Result<Self, SyntaxError> {
        Self::from_octets(tok.get_string()?)
            .map_err(|_| SyntaxError::Custom("character string too long"))
    }

    /// Returns a displayable value that writes the string in quotes.
    pub fn display_quoted(&self) -> DisplayQuoted {
        DisplayQuoted(self)
    }
}

//--- Deref and AsRef

impl ops::Deref for CharStr {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for CharStr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

//--- Hash

impl hash::Hash for CharStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

//--- Display and Debug

impl fmt::Display for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.0.iter() {
            fmt::Display::fmt(&Symbol::from_quoted_octet(ch), f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("CharStr")
            .field(&format_args!("{}", self))
            .finish()
    }
}

//------------ DisplayQuoted -------------------------------------------------

/// Helper to display a character string in double quotes.
#[derive(Clone, Copy, Debug)]
pub struct DisplayQuoted<'a>(&'a CharStr);

impl<'a> fmt::Display for DisplayQuoted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

/// Displays octets of any length in double quotes.
///
/// This is used for record data that has a quoted string without the
/// length limit of a character string.
pub fn display_quoted_octets(octets: &[u8]) -> impl fmt::Display + '_ {
    struct Quoted<'a>(&'a [u8]);

    impl<'a> fmt::Display for Quoted<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("\"")?;
            for &ch in self.0 {
                fmt::Display::fmt(&Symbol::from_quoted_octet(ch), f)?;
            }
            f.write_str("\"")
        }
    }

    Quoted(octets)
}

//============ Error Types ===================================================

//------------ CharStrError --------------------------------------------------

/// A byte sequence does not represent a valid character string.
///
/// This can only mean that the sequence is longer than 255 bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharStrError;

impl fmt::Display for CharStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long character string")
    }
}

impl std::error::Error for CharStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_octets() {
        assert!(CharStr::from_slice(&[0u8; 255]).is_ok());
        assert_eq!(CharStr::from_slice(&[0u8; 256]), Err(CharStrError));
    }

    #[test]
    fn wire() {
        let mut parser = Parser::new(b"\x03foo\x02");
        let s = CharStr::parse(&mut parser).unwrap();
        assert_eq!(s.as_slice(), b"foo");
        assert_eq!(CharStr::parse(&mut parser), Err(ParseError::ShortInput));
        let mut target = Vec::new();
        s.compose(&mut target);
        assert_eq!(target, b"\x03foo");
    }

    #[test]
    fn text() {
        let mut tok = Tokenizer::new("\"a \\\"b\\\" \\255\" plain");
        let s = CharStr::scan(&mut tok).unwrap();
        assert_eq!(s.as_slice(), b"a \"b\" \xff");
        assert_eq!(s.display_quoted().to_string(), "\"a \\\"b\\\" \\255\"");
        assert_eq!(CharStr::scan(&mut tok).unwrap().as_slice(), b"plain");
    }
}

//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{unescape, SyntaxError, Token, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Txt ----------------------------------------------------------

/// Txt record data.
///
/// Txt records hold descriptive text. The record data is a sequence of
/// character strings of up to 255 octets each. The SPF type of [RFC 4408]
/// uses the same layout.
///
/// The Txt record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
/// [RFC 4408]: https://tools.ietf.org/html/rfc4408
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Txt {
    strings: Vec<CharStr>,
}

impl Txt {
    pub fn new(strings: Vec<CharStr>) -> Self {
        Txt { strings }
    }

    /// Creates record data from a single string.
    ///
    /// Text longer than 255 octets is split into several character strings.
    pub fn build_from_slice(text: &[u8]) -> Self {
        Txt {
            strings: text
                .chunks(CharStr::MAX_LEN)
                .filter_map(|chunk| CharStr::from_slice(chunk).ok())
                .collect(),
        }
    }

    /// Returns an iterator over the character strings.
    pub fn iter(&self) -> impl Iterator<Item = &CharStr> {
        self.strings.iter()
    }

    /// Returns the content of all strings concatenated.
    pub fn text(&self) -> Vec<u8> {
        self.strings
            .iter()
            .flat_map(|s| s.as_slice().iter().copied())
            .collect()
    }
}

//--- RecordData

impl RecordData for Txt {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut strings = Vec::new();
        while parser.remaining() > 0 {
            strings.push(CharStr::parse(parser)?);
        }
        Ok(Txt { strings })
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let mut strings = Vec::new();
        loop {
            match tok.get()? {
                Token::Identifier(value) | Token::QuotedString(value) => {
                    strings.push(CharStr::from_octets(unescape(&value)?).map_err(
                        |_| SyntaxError::Custom("character string too long"),
                    )?)
                }
                token if token.is_eol_or_eof() => {
                    tok.unget(token)?;
                    break;
                }
                _ => return Err(SyntaxError::UnexpectedToken("string")),
            }
        }
        if strings.is_empty() {
            return Err(SyntaxError::UnexpectedEnd);
        }
        Ok(Txt { strings })
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        for s in &self.strings {
            s.compose(target)
        }
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Txt {
    fn present(&self, p: &mut Presenter) {
        for s in &self.strings {
            p.write_token(s.display_quoted())
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn txt_text() {
        let txt = Txt::scan_rdata(
            &mut Tokenizer::new("\"v=spf1 -all\" second \"\\\"q\\\"\""),
            None,
        )
        .unwrap();
        assert_eq!(txt.iter().count(), 3);
        assert_eq!(
            txt.to_text(None, false),
            "\"v=spf1 -all\" \"second\" \"\\\"q\\\"\""
        );
        assert_eq!(
            Txt::scan_rdata(&mut Tokenizer::new(""), None),
            Err(SyntaxError::UnexpectedEnd)
        );
    }

    #[test]
    fn txt_wire() {
        let data = b"\x03foo\x00\x03bar";
        let txt = Txt::parse_rdata(&mut Parser::new(data)).unwrap();
        assert_eq!(txt.text(), b"foobar");
        let mut target = Vec::new();
        txt.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(target, data);
        assert!(Txt::parse_rdata(&mut Parser::new(b"\x04foo")).is_err());
    }

    #[test]
    fn build_long() {
        let txt = Txt::build_from_slice(&[b'a'; 300]);
        assert_eq!(txt.iter().count(), 2);
        assert_eq!(txt.text().len(), 300);
    }
}

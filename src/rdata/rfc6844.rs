//! Record data from [RFC 6844]: the CAA record.
//!
//! [RFC 6844]: https://tools.ietf.org/html/rfc6844

use crate::base::charstr::{display_quoted_octets, CharStr};
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Caa -----------------------------------------------------------

/// Caa record data.
///
/// The record names the certification authorities permitted to issue
/// certificates for the domain.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Caa {
    flags: u8,
    tag: CharStr,
    value: Vec<u8>,
}

impl Caa {
    /// The Issuer Critical flag.
    pub const CRITICAL: u8 = 0x80;

    /// Creates new record data.
    ///
    /// Returns `None` if the tag is empty or contains anything but ASCII
    /// letters and digits.
    pub fn new(flags: u8, tag: CharStr, value: Vec<u8>) -> Option<Self> {
        if tag.is_empty() || !tag.iter().all(u8::is_ascii_alphanumeric) {
            return None;
        }
        Some(Caa { flags, tag, value })
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn is_critical(&self) -> bool {
        self.flags & Self::CRITICAL != 0
    }

    pub fn tag(&self) -> &CharStr {
        &self.tag
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl RecordData for Caa {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let flags = parser.parse_u8()?;
        let tag = CharStr::parse(parser)?;
        let value = parser.parse_remaining()?.to_vec();
        Caa::new(flags, tag, value)
            .ok_or(ParseError::form_error("invalid CAA tag"))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let flags = tok.get_u8()?;
        let tag = CharStr::from_octets(tok.get_identifier()?.into_bytes())
            .map_err(|_| SyntaxError::Custom("CAA tag too long"))?;
        let value = tok.get_string()?;
        Caa::new(flags, tag, value)
            .ok_or(SyntaxError::Custom("invalid CAA tag"))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u8(self.flags);
        self.tag.compose(target);
        target.append_slice(&self.value);
        Ok(())
    }
}

impl ZonefileFmt for Caa {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.flags);
        p.write_token(&self.tag);
        p.write_token(display_quoted_octets(&self.value));
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn caa_text() {
        let text = "128 issue \"ca.example.net; account=230123\"";
        let caa = Caa::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert!(caa.is_critical());
        assert_eq!(caa.tag().as_slice(), b"issue");
        assert_eq!(caa.to_text(None, false), text);

        let mut target = Vec::new();
        caa.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(&target[..7], b"\x80\x05issue");
        assert_eq!(Caa::parse_rdata(&mut Parser::new(&target)).unwrap(), caa);
    }

    #[test]
    fn caa_bad_tag() {
        assert!(Caa::scan_rdata(
            &mut Tokenizer::new("0 is-sue \"ca.example.net\""),
            None
        )
        .is_err());
        assert!(Caa::parse_rdata(&mut Parser::new(b"\x00\x00")).is_err());
    }
}

//! Record data from [RFC 1183]: experimental record types.
//!
//! Of the types defined by this RFC, AFSDB and RT share the layout of MX
//! and use [`Mx`][super::Mx].
//!
//! [RFC 1183]: https://tools.ietf.org/html/rfc1183

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Rp ------------------------------------------------------------

/// Rp record data.
///
/// The Rp record names the mailbox of the responsible person and a domain
/// name for which TXT records with further information exist.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rp {
    mbox: Name,
    txt: Name,
}

impl Rp {
    pub fn new(mbox: Name, txt: Name) -> Self {
        Rp { mbox, txt }
    }

    pub fn mbox(&self) -> &Name {
        &self.mbox
    }

    pub fn txt(&self) -> &Name {
        &self.txt
    }
}

impl RecordData for Rp {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Rp::new(Name::parse(parser)?, Name::parse(parser)?))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Rp::new(tok.get_name(origin)?, tok.get_name(origin)?))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        mode.compose_name(&self.mbox, target)?;
        mode.compose_name(&self.txt, target)
    }
}

impl ZonefileFmt for Rp {
    fn present(&self, p: &mut Presenter) {
        p.write_name(&self.mbox);
        p.write_name(&self.txt);
    }
}

//------------ X25 -----------------------------------------------------------

/// X25 record data.
///
/// Holds a PSDN address as a single character string.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct X25 {
    address: CharStr,
}

impl X25 {
    pub fn new(address: CharStr) -> Self {
        X25 { address }
    }

    pub fn address(&self) -> &CharStr {
        &self.address
    }
}

impl RecordData for X25 {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        CharStr::parse(parser).map(X25::new)
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        CharStr::scan(tok).map(X25::new)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.address.compose(target);
        Ok(())
    }
}

impl ZonefileFmt for X25 {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.address.display_quoted())
    }
}

//------------ Isdn ----------------------------------------------------------

/// Isdn record data.
///
/// Holds an ISDN address and an optional subaddress.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Isdn {
    address: CharStr,
    subaddress: Option<CharStr>,
}

impl Isdn {
    pub fn new(address: CharStr, subaddress: Option<CharStr>) -> Self {
        Isdn {
            address,
            subaddress,
        }
    }

    pub fn address(&self) -> &CharStr {
        &self.address
    }

    pub fn subaddress(&self) -> Option<&CharStr> {
        self.subaddress.as_ref()
    }
}

impl RecordData for Isdn {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let address = CharStr::parse(parser)?;
        let subaddress = if parser.remaining() > 0 {
            Some(CharStr::parse(parser)?)
        } else {
            None
        };
        Ok(Isdn::new(address, subaddress))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let address = CharStr::scan(tok)?;
        let subaddress = if tok.at_eol()? {
            None
        } else {
            Some(CharStr::scan(tok)?)
        };
        Ok(Isdn::new(address, subaddress))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.address.compose(target);
        if let Some(ref subaddress) = self.subaddress {
            subaddress.compose(target)
        }
        Ok(())
    }
}

impl ZonefileFmt for Isdn {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.address.display_quoted());
        if let Some(ref subaddress) = self.subaddress {
            p.write_token(subaddress.display_quoted())
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn isdn_optional_subaddress() {
        let isdn =
            Isdn::scan_rdata(&mut Tokenizer::new("\"150862028003217\""), None)
                .unwrap();
        assert!(isdn.subaddress().is_none());
        let isdn = Isdn::scan_rdata(
            &mut Tokenizer::new("\"150862028003217\" \"004\""),
            None,
        )
        .unwrap();
        assert_eq!(isdn.to_text(None, false), "\"150862028003217\" \"004\"");
        let mut target = Vec::new();
        isdn.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(Isdn::parse_rdata(&mut Parser::new(&target)).unwrap(), isdn);
    }

    #[test]
    fn rp_text() {
        let origin: Name = "example.".parse().unwrap();
        let rp = Rp::scan_rdata(&mut Tokenizer::new("admin info"), Some(&origin))
            .unwrap();
        assert_eq!(rp.to_text(None, false), "admin.example. info.example.");
    }
}

//! Record data for record types that consist of a single domain name.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ NameRdata -----------------------------------------------------

/// Record data consisting of a single domain name.
///
/// This layout is shared by the CNAME, MB, MD, MF, MG, MR, NS, and PTR
/// types of [RFC 1035] as well as by DNAME ([RFC 6672]) and NSAP-PTR
/// ([RFC 1348]). Whether the name may be compressed or is lowercased in
/// canonical form depends on the record type.
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 1348]: https://tools.ietf.org/html/rfc1348
/// [RFC 6672]: https://tools.ietf.org/html/rfc6672
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NameRdata {
    target: Name,
}

impl NameRdata {
    pub fn new(target: Name) -> Self {
        NameRdata { target }
    }

    /// Returns the domain name of the record data.
    pub fn target(&self) -> &Name {
        &self.target
    }

    pub fn into_target(self) -> Name {
        self.target
    }
}

impl From<Name> for NameRdata {
    fn from(target: Name) -> Self {
        NameRdata::new(target)
    }
}

//--- RecordData

impl RecordData for NameRdata {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Name::parse(parser).map(NameRdata::new)
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        tok.get_name(origin).map(NameRdata::new)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        mode.compose_name(&self.target, target)
    }
}

//--- ZonefileFmt

impl ZonefileFmt for NameRdata {
    fn present(&self, p: &mut Presenter) {
        p.write_name(&self.target)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relative_text() {
        let origin: Name = "example.".parse().unwrap();
        let data =
            NameRdata::scan_rdata(&mut Tokenizer::new("ns1"), Some(&origin))
                .unwrap();
        assert_eq!(data.target().to_text(false), "ns1.example.");
        assert_eq!(data.to_text(Some(&origin), true), "ns1");
        assert_eq!(data.to_text(None, false), "ns1.example.");
    }

    #[test]
    fn compressed_target() {
        // The target is a pointer to the name at offset 0.
        let msg = b"\x07example\x00\x03ns1\xc0\x00";
        let mut parser = Parser::new(msg);
        parser.seek(9).unwrap();
        let data = NameRdata::parse_rdata(&mut parser).unwrap();
        assert_eq!(data.target().to_text(false), "ns1.example.");
        assert_eq!(parser.remaining(), 0);
    }
}

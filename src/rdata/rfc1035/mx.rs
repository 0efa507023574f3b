//! Record data for the MX record and types sharing its layout.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The same layout of a 16 bit integer followed by a domain name is used by
/// the AFSDB ([RFC 1183]), RT ([RFC 1183]), and KX ([RFC 2230]) types. For
/// AFSDB, the integer is the subtype.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
/// [RFC 1183]: https://tools.ietf.org/html/rfc1183
/// [RFC 2230]: https://tools.ietf.org/html/rfc2230
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }
}

//--- RecordData

impl RecordData for Mx {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(parser.parse_u16()?, Name::parse(parser)?))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Self::new(tok.get_u16()?, tok.get_name(origin)?))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.preference);
        mode.compose_name(&self.exchange, target)
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Mx {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.preference);
        p.write_name(&self.exchange);
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mx_text() {
        let mx = Mx::scan_rdata(&mut Tokenizer::new("10 mail.example."), None)
            .unwrap();
        assert_eq!(mx.preference(), 10);
        assert_eq!(mx.to_text(None, false), "10 mail.example.");
        assert!(Mx::scan_rdata(&mut Tokenizer::new("65536 mail."), None)
            .is_err());
    }

    #[test]
    fn mx_canonical() {
        let mx = Mx::new(1, "MAIL.Example.".parse().unwrap());
        let mut target = Vec::new();
        mx.compose_rdata(
            &mut target,
            ComposeMode {
                canonical: true,
                ..ComposeMode::new(None)
            },
        )
        .unwrap();
        assert_eq!(target, b"\x00\x01\x04mail\x07example\x00");
    }
}

//! Record data for the A record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use core::str::FromStr;
use std::net::Ipv4Addr;

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the 32
/// bit IPv4 address in network byte order. The presentation format is the
/// usual dotted notation.
///
/// The A record type is defined in [RFC 1035, section 3.4.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.1
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// Creates a new A record data from an IPv4 address.
    pub fn new(addr: Ipv4Addr) -> A {
        A { addr }
    }

    /// Creates a new A record from the IPv4 address components.
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn set_addr(&mut self, addr: Ipv4Addr) {
        self.addr = addr
    }
}

//--- From and FromStr

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl From<A> for Ipv4Addr {
    fn from(data: A) -> Self {
        data.addr
    }
}

impl FromStr for A {
    type Err = <Ipv4Addr as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Addr::from_str(s).map(A::new)
    }
}

//--- RecordData

impl RecordData for A {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        parser.parse_array::<4>().map(|octets| A::new(octets.into()))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        A::from_str(&tok.get_identifier()?)
            .map_err(|_| SyntaxError::Custom("invalid IPv4 address"))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_slice(&self.addr.octets());
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for A {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.addr)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_wire_and_text() {
        let a = A::parse_rdata(&mut Parser::new(b"\xc0\x00\x02\x01")).unwrap();
        assert_eq!(a, A::from_octets(192, 0, 2, 1));
        assert_eq!(a.to_text(None, false), "192.0.2.1");

        let mut target = Vec::new();
        a.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(target, b"\xc0\x00\x02\x01");

        assert_eq!(
            A::parse_rdata(&mut Parser::new(b"\xc0\x00\x02")),
            Err(ParseError::ShortInput)
        );
        assert!(A::scan_rdata(&mut Tokenizer::new("1.2.3"), None).is_err());
        assert!(A::scan_rdata(&mut Tokenizer::new("1.2.3.256"), None).is_err());
    }
}

//! Record data from [RFC 3596]: the AAAA record.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use core::str::FromStr;
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

/// Aaaa record data.
///
/// Aaaa records convey the IPv6 address of a host.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn set_addr(&mut self, addr: Ipv6Addr) {
        self.addr = addr
    }
}

//--- From and FromStr

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl From<Aaaa> for Ipv6Addr {
    fn from(data: Aaaa) -> Self {
        data.addr
    }
}

impl FromStr for Aaaa {
    type Err = <Ipv6Addr as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Addr::from_str(s).map(Aaaa::new)
    }
}

//--- RecordData

impl RecordData for Aaaa {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        parser.parse_array::<16>().map(|octets| Aaaa::new(octets.into()))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Aaaa::from_str(&tok.get_identifier()?)
            .map_err(|_| SyntaxError::Custom("invalid IPv6 address"))
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

impl ZonefileFmt for Aaaa {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.addr)
    }
}

//! Record data for the WKS record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use core::str::FromStr;
use std::net::Ipv4Addr;

//------------ Wks ----------------------------------------------------------

/// Wks record data.
///
/// The Wks record describes the well known services supported by a
/// particular protocol on a particular internet address. The services are
/// given as a bitmap over port numbers.
///
/// In presentation format, the protocol can be given as a number or as
/// `tcp` or `udp`. Services are always given as port numbers.
///
/// The Wks record type is defined in [RFC 1035, section 3.4.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.2
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Wks {
    address: Ipv4Addr,
    protocol: u8,
    bitmap: Vec<u8>,
}

impl Wks {
    pub fn new(address: Ipv4Addr, protocol: u8, bitmap: Vec<u8>) -> Self {
        Wks {
            address,
            protocol,
            bitmap,
        }
    }

    /// Creates record data from a list of port numbers.
    pub fn from_ports(
        address: Ipv4Addr,
        protocol: u8,
        ports: impl IntoIterator<Item = u16>,
    ) -> Self {
        let mut bitmap = Vec::new();
        for port in ports {
            let byte = usize::from(port / 8);
            if bitmap.len() <= byte {
                bitmap.resize(byte + 1, 0);
            }
            bitmap[byte] |= 0x80 >> (port % 8);
        }
        Wks::new(address, protocol, bitmap)
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Returns an iterator over the port numbers set in the bitmap.
    pub fn ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.bitmap.iter().enumerate().flat_map(|(i, &byte)| {
            (0..8u16)
                .filter(move |bit| byte & (0x80 >> bit) != 0)
                .map(move |bit| (i as u16) * 8 + bit)
        })
    }
}

//--- RecordData

impl RecordData for Wks {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let address = parser.parse_array::<4>()?.into();
        let protocol = parser.parse_u8()?;
        let bitmap = parser.parse_remaining()?;
        if bitmap.len() > 8192 {
            return Err(ParseError::form_error("WKS bitmap too long"));
        }
        Ok(Wks::new(address, protocol, bitmap.to_vec()))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let address = Ipv4Addr::from_str(&tok.get_identifier()?)
            .map_err(|_| SyntaxError::Custom("invalid IPv4 address"))?;
        let protocol = tok.get_identifier()?;
        let protocol = if protocol.eq_ignore_ascii_case("tcp") {
            6
        } else if protocol.eq_ignore_ascii_case("udp") {
            17
        } else {
            u8::from_str(&protocol).map_err(|_| SyntaxError::BadNumber)?
        };
        let mut ports = Vec::new();
        while !tok.at_eol()? {
            ports.push(tok.get_u16()?);
        }
        Ok(Wks::from_ports(address, protocol, ports))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_slice(&self.address.octets());
        target.append_u8(self.protocol);
        target.append_slice(&self.bitmap);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Wks {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.address);
        p.write_token(self.protocol);
        for port in self.ports() {
            p.write_token(port)
        }
    }
}

//============ Testing =======================================================

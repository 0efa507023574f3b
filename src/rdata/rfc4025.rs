//! Record data from [RFC 4025]: the IPSECKEY record.
//!
//! [RFC 4025]: https://tools.ietf.org/html/rfc4025

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base64;
use core::str::FromStr;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Ipseckey ------------------------------------------------------

/// Ipseckey record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ipseckey {
    precedence: u8,
    algorithm: u8,
    gateway: Gateway,
    key: Vec<u8>,
}

impl Ipseckey {
    pub fn new(
        precedence: u8,
        algorithm: u8,
        gateway: Gateway,
        key: Vec<u8>,
    ) -> Self {
        Ipseckey {
            precedence,
            algorithm,
            gateway,
            key,
        }
    }

    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

impl RecordData for Ipseckey {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let precedence = parser.parse_u8()?;
        let gateway_type = parser.parse_u8()?;
        let algorithm = parser.parse_u8()?;
        let gateway = match gateway_type {
            0 => Gateway::None,
            1 => Gateway::Ipv4(parser.parse_array::<4>()?.into()),
            2 => Gateway::Ipv6(parser.parse_array::<16>()?.into()),
            3 => Gateway::Name(Name::parse(parser)?),
            _ => return Err(ParseError::form_error("invalid IPSECKEY gateway type")),
        };
        let key = parser.parse_remaining()?.to_vec();
        Ok(Ipseckey::new(precedence, algorithm, gateway, key))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let precedence = tok.get_u8()?;
        let gateway_type = tok.get_u8()?;
        let algorithm = tok.get_u8()?;
        let bad_gateway = |_| SyntaxError::Custom("invalid IPSECKEY gateway");
        let gateway = match gateway_type {
            0 => {
                if tok.get_identifier()? != "." {
                    return Err(SyntaxError::Custom("invalid IPSECKEY gateway"));
                }
                Gateway::None
            }
            1 => Gateway::Ipv4(
                Ipv4Addr::from_str(&tok.get_identifier()?).map_err(bad_gateway)?,
            ),
            2 => Gateway::Ipv6(
                Ipv6Addr::from_str(&tok.get_identifier()?).map_err(bad_gateway)?,
            ),
            3 => Gateway::Name(tok.get_name(origin)?),
            _ => return Err(SyntaxError::Custom("invalid IPSECKEY gateway type")),
        };
        let key = base64::decode(&tok.concatenate_remaining_identifiers()?)?;
        Ok(Ipseckey::new(precedence, algorithm, gateway, key))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u8(self.precedence);
        target.append_u8(self.gateway.gateway_type());
        target.append_u8(self.algorithm);
        match self.gateway {
            Gateway::None => {}
            Gateway::Ipv4(addr) => target.append_slice(&addr.octets()),
            Gateway::Ipv6(addr) => target.append_slice(&addr.octets()),
            Gateway::Name(ref name) => mode.compose_name(name, target)?,
        }
        target.append_slice(&self.key);
        Ok(())
    }
}

impl ZonefileFmt for Ipseckey {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.precedence);
        p.write_token(self.gateway.gateway_type());
        p.write_token(self.algorithm);
        match self.gateway {
            Gateway::None => p.write_token("."),
            Gateway::Ipv4(addr) => p.write_token(addr),
            Gateway::Ipv6(addr) => p.write_token(addr),
            Gateway::Name(ref name) => p.write_name(name),
        }
        p.write_token(base64::encode_display(&self.key));
    }
}

//------------ Gateway -------------------------------------------------------

/// The gateway of an IPSECKEY record.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Gateway {
    None,
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Name(Name),
}

impl Gateway {
    /// Returns the gateway type value used in the record.
    pub fn gateway_type(&self) -> u8 {
        match *self {
            Gateway::None => 0,
            Gateway::Ipv4(_) => 1,
            Gateway::Ipv6(_) => 2,
            Gateway::Name(_) => 3,
        }
    }
}

//============ Testing =======================================================

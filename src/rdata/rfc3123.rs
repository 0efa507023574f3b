//! Record data from [RFC 3123]: the APL record.
//!
//! [RFC 3123]: https://tools.ietf.org/html/rfc3123

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Token, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base16;
use core::fmt;
use core::str::FromStr;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Apl -----------------------------------------------------------

/// Apl record data.
///
/// A list of address prefixes.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Apl {
    items: Vec<AplItem>,
}

impl Apl {
    pub fn new(items: Vec<AplItem>) -> Self {
        Apl { items }
    }

    pub fn items(&self) -> &[AplItem] {
        &self.items
    }
}

impl RecordData for Apl {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut items = Vec::new();
        while parser.remaining() > 0 {
            items.push(AplItem::parse(parser)?);
        }
        Ok(Apl { items })
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let mut items = Vec::new();
        for token in tok.get_remaining()? {
            match token {
                Token::Identifier(value) => items.push(AplItem::from_str(&value)?),
                _ => return Err(SyntaxError::UnexpectedToken("APL item")),
            }
        }
        Ok(Apl { items })
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        for item in &self.items {
            item.compose(target)
        }
        Ok(())
    }
}

impl ZonefileFmt for Apl {
    fn present(&self, p: &mut Presenter) {
        for item in &self.items {
            p.write_token(item)
        }
    }
}

//------------ AplItem -------------------------------------------------------

/// A single address prefix of an APL record.
///
/// The address is kept with trailing zero octets removed as it appears in
/// wire format.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AplItem {
    family: u16,
    negation: bool,
    prefix: u8,
    address: Vec<u8>,
}

impl AplItem {
    /// The address family for IPv4.
    pub const IPV4: u16 = 1;

    /// The address family for IPv6.
    pub const IPV6: u16 = 2;

    /// Creates an item, removing trailing zero octets from the address.
    ///
    /// Returns `None` if the address is longer than 127 octets.
    pub fn new(
        family: u16,
        negation: bool,
        prefix: u8,
        mut address: Vec<u8>,
    ) -> Option<Self> {
        while address.last() == Some(&0) {
            address.pop();
        }
        if address.len() > 0x7F {
            return None;
        }
        Some(AplItem {
            family,
            negation,
            prefix,
            address,
        })
    }

    pub fn family(&self) -> u16 {
        self.family
    }

    pub fn negation(&self) -> bool {
        self.negation
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn address(&self) -> &[u8] {
        &self.address
    }

    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let family = parser.parse_u16()?;
        let prefix = parser.parse_u8()?;
        let len = parser.parse_u8()?;
        let address = parser.parse_octets(usize::from(len & 0x7F))?.to_vec();
        Ok(AplItem {
            family,
            negation: len & 0x80 != 0,
            prefix,
            address,
        })
    }

    fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_u16(self.family);
        target.append_u8(self.prefix);
        let negation = if self.negation { 0x80 } else { 0 };
        target.append_u8(negation | self.address.len() as u8);
        target.append_slice(&self.address);
    }

    /// Returns the address padded to the full length of its family.
    fn padded<const N: usize>(&self) -> [u8; N] {
        let mut res = [0u8; N];
        for (dst, src) in res.iter_mut().zip(self.address.iter()) {
            *dst = *src
        }
        res
    }
}

impl FromStr for AplItem {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negation, s) = match s.strip_prefix('!') {
            Some(s) => (true, s),
            None => (false, s),
        };
        let (family, s) = s
            .split_once(':')
            .ok_or(SyntaxError::Custom("missing APL family"))?;
        let (address, prefix) = s
            .split_once('/')
            .ok_or(SyntaxError::Custom("missing APL prefix"))?;
        let family = u16::from_str(family).map_err(|_| SyntaxError::BadNumber)?;
        let prefix = u8::from_str(prefix).map_err(|_| SyntaxError::BadNumber)?;
        let bad_address = |_| SyntaxError::Custom("bad APL address");
        let address = match family {
            Self::IPV4 => {
                if prefix > 32 {
                    return Err(SyntaxError::Custom("bad APL prefix"));
                }
                Ipv4Addr::from_str(address).map_err(bad_address)?.octets().to_vec()
            }
            Self::IPV6 => {
                if prefix > 128 {
                    return Err(SyntaxError::Custom("bad APL prefix"));
                }
                Ipv6Addr::from_str(address).map_err(bad_address)?.octets().to_vec()
            }
            _ => base16::decode_vec(address)?,
        };
        AplItem::new(family, negation, prefix, address)
            .ok_or(SyntaxError::Custom("APL address too long"))
    }
}

impl fmt::Display for AplItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negation {
            f.write_str("!")?;
        }
        write!(f, "{}:", self.family)?;
        match self.family {
            Self::IPV4 => write!(f, "{}", Ipv4Addr::from(self.padded::<4>()))?,
            Self::IPV6 => write!(f, "{}", Ipv6Addr::from(self.padded::<16>()))?,
            _ => base16::display(&self.address, f)?,
        }
        write!(f, "/{}", self.prefix)
    }
}

//============ Testing =======================================================

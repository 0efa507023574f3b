//! Record data from [RFC 7043]: EUI48 and EUI64 records.
//!
//! [RFC 7043]: https://tools.ietf.org/html/rfc7043

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use core::fmt;

//------------ Eui -----------------------------------------------------------

/// An extended unique identifier of `N` octets.
///
/// In presentation format, the octets are written as pairs of hex digits
/// separated by hyphens.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Eui<const N: usize>([u8; N]);

/// Eui48 record data.
pub type Eui48 = Eui<6>;

/// Eui64 record data.
pub type Eui64 = Eui<8>;

impl<const N: usize> Eui<N> {
    pub fn new(octets: [u8; N]) -> Self {
        Eui(octets)
    }

    pub fn as_array(&self) -> &[u8; N] {
        &self.0
    }

    fn from_text(text: &str) -> Result<Self, SyntaxError> {
        let mut res = [0u8; N];
        let mut parts = text.split('-');
        for octet in res.iter_mut() {
            let part = parts
                .next()
                .filter(|part| {
                    part.len() == 2
                        && part.bytes().all(|ch| ch.is_ascii_hexdigit())
                })
                .ok_or(SyntaxError::Custom("invalid EUI"))?;
            *octet = u8::from_str_radix(part, 16)
                .map_err(|_| SyntaxError::Custom("invalid EUI"))?;
        }
        if parts.next().is_some() {
            return Err(SyntaxError::Custom("invalid EUI"));
        }
        Ok(Eui(res))
    }
}

impl<const N: usize> RecordData for Eui<N> {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        parser.parse_array::<N>().map(Eui)
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Self::from_text(&tok.get_identifier()?)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_slice(&self.0);
        Ok(())
    }
}

impl<const N: usize> fmt::Display for Eui<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{:02x}", octet)?;
        }
        Ok(())
    }
}

impl<const N: usize> ZonefileFmt for Eui<N> {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self)
    }
}

//============ Testing =======================================================

//! Record data from [RFC 2163]: the PX record.
//!
//! [RFC 2163]: https://tools.ietf.org/html/rfc2163

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Px ------------------------------------------------------------

/// Px record data.
///
/// Maps between RFC 822 and X.400 mail domains.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Px {
    preference: u16,
    map822: Name,
    mapx400: Name,
}

impl Px {
    pub fn new(preference: u16, map822: Name, mapx400: Name) -> Self {
        Px {
            preference,
            map822,
            mapx400,
        }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn map822(&self) -> &Name {
        &self.map822
    }

    pub fn mapx400(&self) -> &Name {
        &self.mapx400
    }
}

impl RecordData for Px {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Px::new(
            parser.parse_u16()?,
            Name::parse(parser)?,
            Name::parse(parser)?,
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Px::new(
            tok.get_u16()?,
            tok.get_name(origin)?,
            tok.get_name(origin)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.preference);
        mode.compose_name(&self.map822, target)?;
        mode.compose_name(&self.mapx400, target)
    }
}

impl ZonefileFmt for Px {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.preference);
        p.write_name(&self.map822);
        p.write_name(&self.mapx400);
    }
}

//! Record data from [RFC 2782]: the SRV record.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Srv ---------------------------------------------------------

/// Srv record data.
///
/// The Srv record specifies the location of the server(s) for a specific
/// protocol and domain.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name,
}

impl Srv {
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn target(&self) -> &Name {
        &self.target
    }
}

//--- RecordData

impl RecordData for Srv {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u16()?,
            parser.parse_u16()?,
            parser.parse_u16()?,
            Name::parse(parser)?,
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Self::new(
            tok.get_u16()?,
            tok.get_u16()?,
            tok.get_u16()?,
            tok.get_name(origin)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.priority);
        target.append_u16(self.weight);
        target.append_u16(self.port);
        mode.compose_name(&self.target, target)
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Srv {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.priority);
        p.write_token(self.weight);
        p.write_token(self.port);
        p.write_name(&self.target);
    }
}

//============ Testing =======================================================

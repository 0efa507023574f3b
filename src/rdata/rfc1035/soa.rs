//! Record data for the SOA record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::serial::Serial;
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The Soa record type is defined in [RFC 1035, section 3.3.13][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.13
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    mname: Name,
    rname: Name,
    serial: Serial,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// Creates new Soa record data from content.
    pub fn new(
        mname: Name,
        rname: Name,
        serial: Serial,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// The serial number of the original copy of the zone.
    pub fn serial(&self) -> Serial {
        self.serial
    }

    /// The time interval before the zone should be refreshed.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// The time before a failed refresh is retried.
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The upper limit of time the zone is authoritative.
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn set_serial(&mut self, serial: Serial) {
        self.serial = serial
    }
}

//--- RecordData

impl RecordData for Soa {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Soa::new(
            Name::parse(parser)?,
            Name::parse(parser)?,
            Serial::parse(parser)?,
            parser.parse_u32()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Soa::new(
            tok.get_name(origin)?,
            tok.get_name(origin)?,
            Serial(tok.get_u32()?),
            tok.get_ttl()?,
            tok.get_ttl()?,
            tok.get_ttl()?,
            tok.get_ttl()?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        mode.compose_name(&self.mname, target)?;
        mode.compose_name(&self.rname, target)?;
        self.serial.compose(target);
        target.append_u32(self.refresh);
        target.append_u32(self.retry);
        target.append_u32(self.expire);
        target.append_u32(self.minimum);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Soa {
    fn present(&self, p: &mut Presenter) {
        p.write_name(&self.mname);
        p.write_name(&self.rname);
        p.write_token(self.serial);
        p.write_token(self.refresh);
        p.write_token(self.retry);
        p.write_token(self.expire);
        p.write_token(self.minimum);
    }
}

//============ Testing =======================================================

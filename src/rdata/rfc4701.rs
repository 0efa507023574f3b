//! Record data from [RFC 4701]: the DHCID record.
//!
//! [RFC 4701]: https://tools.ietf.org/html/rfc4701

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base64;

//------------ Dhcid ---------------------------------------------------------

/// Dhcid record data.
///
/// The data is an opaque digest identifying a DHCP client.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Dhcid {
    data: Vec<u8>,
}

impl Dhcid {
    pub fn new(data: Vec<u8>) -> Self {
        Dhcid { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl RecordData for Dhcid {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Dhcid::new(parser.parse_remaining()?.to_vec()))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Dhcid::new(base64::decode(
            &tok.concatenate_remaining_identifiers()?,
        )?))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_slice(&self.data);
        Ok(())
    }
}

impl ZonefileFmt for Dhcid {
    fn present(&self, p: &mut Presenter) {
        p.write_token(base64::encode_display(&self.data))
    }
}

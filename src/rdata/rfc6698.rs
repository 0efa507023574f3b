//! Record data from [RFC 6698]: the TLSA record.
//!
//! [RFC 6698]: https://tools.ietf.org/html/rfc6698

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base16;

//------------ Tlsa ----------------------------------------------------------

/// Tlsa record data.
///
/// The record associates a TLS server certificate or public key with the
/// domain name where it is found.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tlsa {
    usage: u8,
    selector: u8,
    matching_type: u8,
    data: Vec<u8>,
}

impl Tlsa {
    pub fn new(usage: u8, selector: u8, matching_type: u8, data: Vec<u8>) -> Self {
        Tlsa {
            usage,
            selector,
            matching_type,
            data,
        }
    }

    pub fn usage(&self) -> u8 {
        self.usage
    }

    pub fn selector(&self) -> u8 {
        self.selector
    }

    pub fn matching_type(&self) -> u8 {
        self.matching_type
    }

    /// Returns the certificate association data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl RecordData for Tlsa {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Tlsa::new(
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Tlsa::new(
            tok.get_u8()?,
            tok.get_u8()?,
            tok.get_u8()?,
            base16::decode_vec(&tok.concatenate_remaining_identifiers()?)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_slice(&[self.usage, self.selector, self.matching_type]);
        target.append_slice(&self.data);
        Ok(())
    }
}

impl ZonefileFmt for Tlsa {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.usage);
        p.write_token(self.selector);
        p.write_token(self.matching_type);
        p.write_token(base16::encode_display(&self.data));
    }
}

//! Record data from [RFC 4255]: the SSHFP record.
//!
//! [RFC 4255]: https://tools.ietf.org/html/rfc4255

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base16;

//------------ Sshfp ---------------------------------------------------------

/// Sshfp record data.
///
/// The record carries the fingerprint of the SSH host key of the owner.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Sshfp {
    algorithm: u8,
    fingerprint_type: u8,
    fingerprint: Vec<u8>,
}

impl Sshfp {
    pub fn new(algorithm: u8, fingerprint_type: u8, fingerprint: Vec<u8>) -> Self {
        Sshfp {
            algorithm,
            fingerprint_type,
            fingerprint,
        }
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn fingerprint_type(&self) -> u8 {
        self.fingerprint_type
    }

    pub fn fingerprint(&self) -> &[u8] {
        &self.fingerprint
    }
}

impl RecordData for Sshfp {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Sshfp::new(
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Sshfp::new(
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
        target.append_u8(self.algorithm);
        target.append_u8(self.fingerprint_type);
        target.append_slice(&self.fingerprint);
        Ok(())
    }
}

impl ZonefileFmt for Sshfp {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.algorithm);
        p.write_token(self.fingerprint_type);
        p.write_token(base16::encode_display(&self.fingerprint));
    }
}

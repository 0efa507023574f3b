//! Record data from [RFC 2845]: TSIG records.
//!
//! The record data only describes the fields of the record. Signing and
//! verifying messages is done by the [`tsig`][crate::tsig] module.
//!
//! [RFC 2845]: https://tools.ietf.org/html/rfc2845

use crate::base::iana::TsigRcode;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, LongRecordData, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base64;
use core::str::FromStr;

//------------ Tsig ----------------------------------------------------------

/// TSIG record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tsig {
    /// The signature algorithm as a domain name.
    algorithm: Name,

    /// The Unix epoch time at which the signature was created.
    ///
    /// Only the lower 48 bits are used.
    time_signed: u64,

    /// Seconds of error permitted in time signed.
    fudge: u16,

    /// MAC.
    mac: Vec<u8>,

    /// Original message ID.
    original_id: u16,

    /// TSIG response code.
    error: TsigRcode,

    /// Other data.
    ///
    /// Contains the server time for BADTIME errors.
    other: Vec<u8>,
}

impl Tsig {
    /// The largest value of the time signed field.
    pub const MAX_TIME: u64 = 0xFFFF_FFFF_FFFF;

    /// Creates new TSIG record data from its components.
    pub fn new(
        algorithm: Name,
        time_signed: u64,
        fudge: u16,
        mac: Vec<u8>,
        original_id: u16,
        error: TsigRcode,
        other: Vec<u8>,
    ) -> Result<Self, LongRecordData> {
        LongRecordData::check_len(mac.len())?;
        LongRecordData::check_len(other.len())?;
        if time_signed > Self::MAX_TIME {
            return Err(LongRecordData);
        }
        Ok(Tsig {
            algorithm,
            time_signed,
            fudge,
            mac,
            original_id,
            error,
            other,
        })
    }

    pub fn algorithm(&self) -> &Name {
        &self.algorithm
    }

    pub fn time_signed(&self) -> u64 {
        self.time_signed
    }

    pub fn fudge(&self) -> u16 {
        self.fudge
    }

    pub fn mac(&self) -> &[u8] {
        &self.mac
    }

    pub fn original_id(&self) -> u16 {
        self.original_id
    }

    pub fn error(&self) -> TsigRcode {
        self.error
    }

    pub fn other(&self) -> &[u8] {
        &self.other
    }

    /// Returns whether `now` is within the fudge window of the record.
    pub fn is_valid_at(&self, now: u64) -> bool {
        let fudge = u64::from(self.fudge);
        now.saturating_add(fudge) >= self.time_signed
            && now <= self.time_signed.saturating_add(fudge)
    }

    fn scan_base64(
        tok: &mut Tokenizer,
        len: u16,
    ) -> Result<Vec<u8>, SyntaxError> {
        let data = if len == 0 {
            Vec::new()
        } else {
            base64::decode(&tok.get_identifier()?)?
        };
        if data.len() != usize::from(len) {
            return Err(SyntaxError::Custom("TSIG data has incorrect length"));
        }
        Ok(data)
    }
}

//--- RecordData

impl RecordData for Tsig {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let algorithm = Name::parse(parser)?;
        let time_signed = parser.parse_u48()?;
        let fudge = parser.parse_u16()?;
        let mac_len = parser.parse_u16()?;
        let mac = parser.parse_octets(usize::from(mac_len))?.to_vec();
        let original_id = parser.parse_u16()?;
        let error = TsigRcode::parse(parser)?;
        let other_len = parser.parse_u16()?;
        let other = parser.parse_octets(usize::from(other_len))?.to_vec();
        Ok(Tsig {
            algorithm,
            time_signed,
            fudge,
            mac,
            original_id,
            error,
            other,
        })
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let algorithm = tok.get_name(origin)?;
        let time_signed = tok.get_int::<u64>()?;
        if time_signed > Self::MAX_TIME {
            return Err(SyntaxError::BadNumber);
        }
        let fudge = tok.get_u16()?;
        let mac_len = tok.get_u16()?;
        let mac = Self::scan_base64(tok, mac_len)?;
        let original_id = tok.get_u16()?;
        let error = tok.get_mnemonic(|value| {
            TsigRcode::from_mnemonic(value).or_else(|| {
                core::str::from_utf8(value)
                    .ok()
                    .and_then(|value| u16::from_str(value).ok())
                    .map(TsigRcode::from_int)
            })
        })?;
        let other_len = tok.get_u16()?;
        let other = Self::scan_base64(tok, other_len)?;
        Ok(Tsig {
            algorithm,
            time_signed,
            fudge,
            mac,
            original_id,
            error,
            other,
        })
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        mode.compose_name(&self.algorithm, target)?;
        target.append_u16((self.time_signed >> 32) as u16);
        target.append_u32(self.time_signed as u32);
        target.append_u16(self.fudge);
        target.append_u16(self.mac.len() as u16);
        target.append_slice(&self.mac);
        target.append_u16(self.original_id);
        self.error.compose(target);
        target.append_u16(self.other.len() as u16);
        target.append_slice(&self.other);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Tsig {
    fn present(&self, p: &mut Presenter) {
        p.write_name(&self.algorithm);
        p.write_token(self.time_signed);
        p.write_token(self.fudge);
        p.write_token(self.mac.len());
        if !self.mac.is_empty() {
            p.write_token(base64::encode_display(&self.mac));
        }
        p.write_token(self.original_id);
        p.write_token(self.error);
        p.write_token(self.other.len());
        if !self.other.is_empty() {
            p.write_token(base64::encode_display(&self.other));
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tsig_roundtrip() {
        let text = "hmac-sha256. 1600000000 300 4 AQIDBA== 4660 BADTIME 6 \
                    AABfXhAA";
        let tsig = Tsig::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert_eq!(tsig.mac(), b"\x01\x02\x03\x04");
        assert_eq!(tsig.error(), TsigRcode::BADTIME);
        assert_eq!(tsig.to_text(None, false), text);

        let mut target = Vec::new();
        tsig.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(Tsig::parse_rdata(&mut Parser::new(&target)).unwrap(), tsig);
    }

    #[test]
    fn time_window() {
        let tsig = Tsig::new(
            "hmac-sha256.".parse().unwrap(),
            1000,
            300,
            Vec::new(),
            0,
            TsigRcode::NOERROR,
            Vec::new(),
        )
        .unwrap();
        assert!(tsig.is_valid_at(1300));
        assert!(tsig.is_valid_at(700));
        assert!(!tsig.is_valid_at(1301));
        assert!(!tsig.is_valid_at(699));
    }
}

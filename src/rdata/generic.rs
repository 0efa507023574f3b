//! Record data of unknown types.
//!
//! [RFC 3597] defines a generic presentation format for record data: the
//! token `\#`, the length of the data in octets, and the data as hex
//! digits. It can be used for all record types and is the only available
//! format for types without a dedicated implementation.
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597

use crate::base::iana::Rtype;
use crate::base::rdata::LongRecordData;
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base16;

//------------ UnknownRdata --------------------------------------------------

/// Record data of a type without a dedicated implementation.
///
/// The data is kept as an opaque sequence of octets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnknownRdata {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Vec<u8>,
}

impl UnknownRdata {
    /// Creates generic record data from the octets of the data.
    pub fn from_octets(
        rtype: Rtype,
        data: Vec<u8>,
    ) -> Result<Self, LongRecordData> {
        LongRecordData::check_len(data.len())?;
        Ok(UnknownRdata { rtype, data })
    }

    /// Returns the record type this data is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Takes all remaining data of the parser.
    pub fn parse(rtype: Rtype, parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(UnknownRdata {
            rtype,
            data: parser.parse_remaining()?.to_vec(),
        })
    }

    /// Scans the generic format assuming that the `\#` has been taken.
    pub fn scan_without_marker(
        rtype: Rtype,
        tok: &mut Tokenizer,
    ) -> Result<Self, SyntaxError> {
        let len = tok.get_u16()?;
        let data = base16::decode_vec(&tok.concatenate_remaining_identifiers()?)?;
        if data.len() != usize::from(len) {
            return Err(SyntaxError::Custom(
                "generic data has incorrect length",
            ));
        }
        Ok(UnknownRdata { rtype, data })
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.data)
    }
}

//--- ZonefileFmt

impl ZonefileFmt for UnknownRdata {
    fn present(&self, p: &mut Presenter) {
        present_generic(&self.data, p)
    }
}

/// Writes data in the generic format.
pub(crate) fn present_generic(data: &[u8], p: &mut Presenter) {
    p.write_token("\\#");
    p.write_token(data.len());
    if !data.is_empty() {
        p.write_token(base16::encode_display(data));
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scan_and_present() {
        let mut tok = Tokenizer::new("3 0a0B 0c");
        let data =
            UnknownRdata::scan_without_marker(Rtype::from_int(999), &mut tok)
                .unwrap();
        assert_eq!(data.data(), b"\x0a\x0b\x0c");
        assert_eq!(data.to_text(None, false), "\\# 3 0a0b0c");

        let empty = UnknownRdata::from_octets(Rtype::NULL, Vec::new()).unwrap();
        assert_eq!(empty.to_text(None, false), "\\# 0");
    }

    #[test]
    fn scan_wrong_length() {
        let mut tok = Tokenizer::new("2 0a0b0c");
        assert!(
            UnknownRdata::scan_without_marker(Rtype::NULL, &mut tok).is_err()
        );
        let mut tok = Tokenizer::new("1 0");
        assert_eq!(
            UnknownRdata::scan_without_marker(Rtype::NULL, &mut tok),
            Err(SyntaxError::BadEncoding)
        );
    }
}

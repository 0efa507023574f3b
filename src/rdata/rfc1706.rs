//! Record data from [RFC 1706]: the NSAP record.
//!
//! The NSAP-PTR type of the same RFC is a plain domain name and uses
//! [`NameRdata`][super::NameRdata].
//!
//! [RFC 1706]: https://tools.ietf.org/html/rfc1706

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base16;

//------------ Nsap ----------------------------------------------------------

/// Nsap record data.
///
/// The address is written as hex digits prefixed by `0x`. Dots may be
/// used as separators between digits in presentation format.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsap {
    address: Vec<u8>,
}

impl Nsap {
    pub fn new(address: Vec<u8>) -> Self {
        Nsap { address }
    }

    pub fn address(&self) -> &[u8] {
        &self.address
    }
}

impl RecordData for Nsap {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Nsap::new(parser.parse_remaining()?.to_vec()))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let text = tok.get_identifier()?;
        let digits = match text.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &text[2..],
            _ => return Err(SyntaxError::Custom("string does not start with 0x")),
        };
        let digits: String = digits.chars().filter(|&ch| ch != '.').collect();
        Ok(Nsap::new(base16::decode_vec(&digits)?))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_slice(&self.address);
        Ok(())
    }
}

impl ZonefileFmt for Nsap {
    fn present(&self, p: &mut Presenter) {
        p.write_token(format_args!(
            "0x{}",
            base16::encode_display(&self.address)
        ))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nsap_text() {
        let nsap = Nsap::scan_rdata(
            &mut Tokenizer::new("0x47.0005.80.005a00"),
            None,
        )
        .unwrap();
        assert_eq!(nsap.address(), b"\x47\x00\x05\x80\x00\x5a\x00");
        assert_eq!(nsap.to_text(None, false), "0x47000580005a00");
        assert!(Nsap::scan_rdata(&mut Tokenizer::new("47"), None).is_err());
        assert!(Nsap::scan_rdata(&mut Tokenizer::new("0x4"), None).is_err());
    }
}

//! Record data from [RFC 4398]: the CERT record.
//!
//! [RFC 4398]: https://tools.ietf.org/html/rfc4398

use crate::base::iana::{CertType, SecAlg};
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::base64;

//------------ Cert ----------------------------------------------------------

/// Cert record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cert {
    cert_type: CertType,
    key_tag: u16,
    algorithm: SecAlg,
    certificate: Vec<u8>,
}

impl Cert {
    pub fn new(
        cert_type: CertType,
        key_tag: u16,
        algorithm: SecAlg,
        certificate: Vec<u8>,
    ) -> Self {
        Cert {
            cert_type,
            key_tag,
            algorithm,
            certificate,
        }
    }

    pub fn cert_type(&self) -> CertType {
        self.cert_type
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }
}

impl RecordData for Cert {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Cert::new(
            CertType::parse(parser)?,
            parser.parse_u16()?,
            SecAlg::parse(parser)?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Cert::new(
            tok.get_mnemonic(CertType::from_bytes)?,
            tok.get_u16()?,
            tok.get_mnemonic(SecAlg::from_bytes)?,
            base64::decode(&tok.concatenate_remaining_identifiers()?)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.cert_type.compose(target);
        target.append_u16(self.key_tag);
        self.algorithm.compose(target);
        target.append_slice(&self.certificate);
        Ok(())
    }
}

impl ZonefileFmt for Cert {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.cert_type);
        p.write_token(self.key_tag);
        p.write_token(self.algorithm);
        p.write_token(base64::encode_display(&self.certificate));
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cert_mnemonics() {
        let cert =
            Cert::scan_rdata(&mut Tokenizer::new("1 12345 8 AQID"), None)
                .unwrap();
        assert_eq!(cert.cert_type(), CertType::PKIX);
        assert_eq!(cert.certificate(), b"\x01\x02\x03");
        assert_eq!(cert.to_text(None, false), "PKIX 12345 RSASHA256 AQID");

        let cert =
            Cert::scan_rdata(&mut Tokenizer::new("65000 1 250 AQID"), None)
                .unwrap();
        assert_eq!(cert.to_text(None, false), "65000 1 250 AQID");
    }
}

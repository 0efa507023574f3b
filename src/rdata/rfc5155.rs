//! Record data from [RFC 5155]: NSEC3 and NSEC3PARAM records.
//!
//! This RFC defines the NSEC3 and NSEC3PARAM resource records.
//!
//! [RFC 5155]: https://tools.ietf.org/html/rfc5155

use super::rfc4034::RtypeBitmap;
use crate::base::charstr::CharStr;
use crate::base::iana::Nsec3HashAlg;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::{base16, base32};
use core::fmt;

//------------ Nsec3 ---------------------------------------------------------

/// Nsec3 record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsec3 {
    hash_algorithm: Nsec3HashAlg,
    flags: u8,
    iterations: u16,
    salt: Nsec3Salt,
    next_owner: CharStr,
    types: RtypeBitmap,
}

impl Nsec3 {
    /// The Opt-Out flag.
    pub const OPT_OUT: u8 = 0x01;

    pub fn new(
        hash_algorithm: Nsec3HashAlg,
        flags: u8,
        iterations: u16,
        salt: Nsec3Salt,
        next_owner: CharStr,
        types: RtypeBitmap,
    ) -> Self {
        Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        }
    }

    pub fn hash_algorithm(&self) -> Nsec3HashAlg {
        self.hash_algorithm
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn opt_out(&self) -> bool {
        self.flags & Self::OPT_OUT != 0
    }

    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    pub fn salt(&self) -> &Nsec3Salt {
        &self.salt
    }

    /// Returns the hashed name of the next owner in hash order.
    pub fn next_owner(&self) -> &[u8] {
        self.next_owner.as_slice()
    }

    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }
}

//--- RecordData

impl RecordData for Nsec3 {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Nsec3::new(
            Nsec3HashAlg::parse(parser)?,
            parser.parse_u8()?,
            parser.parse_u16()?,
            Nsec3Salt::parse(parser)?,
            CharStr::parse(parser)?,
            RtypeBitmap::parse(parser)?,
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let hash_algorithm = tok.get_mnemonic(Nsec3HashAlg::from_bytes)?;
        let flags = tok.get_u8()?;
        let iterations = tok.get_u16()?;
        let salt = Nsec3Salt::scan(tok)?;
        let next_owner = CharStr::from_octets(base32::decode_hex(
            &tok.get_identifier()?,
        )?)
        .map_err(|_| SyntaxError::Custom("NSEC3 next owner too long"))?;
        Ok(Nsec3::new(
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            RtypeBitmap::scan(tok)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.hash_algorithm.compose(target);
        target.append_u8(self.flags);
        target.append_u16(self.iterations);
        self.salt.compose(target);
        self.next_owner.compose(target);
        self.types.compose(target);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Nsec3 {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.hash_algorithm.to_int());
        p.write_token(self.flags);
        p.write_token(self.iterations);
        p.write_token(&self.salt);
        p.write_token(
            base32::encode_string_hex(self.next_owner.as_slice())
                .to_ascii_lowercase(),
        );
        self.types.present(p);
    }
}

//------------ Nsec3param ----------------------------------------------------

/// Nsec3param record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsec3param {
    hash_algorithm: Nsec3HashAlg,
    flags: u8,
    iterations: u16,
    salt: Nsec3Salt,
}

impl Nsec3param {
    pub fn new(
        hash_algorithm: Nsec3HashAlg,
        flags: u8,
        iterations: u16,
        salt: Nsec3Salt,
    ) -> Self {
        Nsec3param {
            hash_algorithm,
            flags,
            iterations,
            salt,
        }
    }

    pub fn hash_algorithm(&self) -> Nsec3HashAlg {
        self.hash_algorithm
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    pub fn salt(&self) -> &Nsec3Salt {
        &self.salt
    }
}

//--- RecordData

impl RecordData for Nsec3param {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Nsec3param::new(
            Nsec3HashAlg::parse(parser)?,
            parser.parse_u8()?,
            parser.parse_u16()?,
            Nsec3Salt::parse(parser)?,
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Nsec3param::new(
            tok.get_mnemonic(Nsec3HashAlg::from_bytes)?,
            tok.get_u8()?,
            tok.get_u16()?,
            Nsec3Salt::scan(tok)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.hash_algorithm.compose(target);
        target.append_u8(self.flags);
        target.append_u16(self.iterations);
        self.salt.compose(target);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Nsec3param {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.hash_algorithm.to_int());
        p.write_token(self.flags);
        p.write_token(self.iterations);
        p.write_token(&self.salt);
    }
}

//------------ Nsec3Salt -----------------------------------------------------

/// The salt value of an NSEC3 hash.
///
/// In presentation format, the salt is given in hex with an empty salt
/// written as a single `-`.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsec3Salt(CharStr);

impl Nsec3Salt {
    pub fn empty() -> Self {
        Nsec3Salt(CharStr::empty())
    }

    pub fn from_octets(octets: Vec<u8>) -> Result<Self, SyntaxError> {
        CharStr::from_octets(octets)
            .map(Nsec3Salt)
            .map_err(|_| SyntaxError::Custom("NSEC3 salt too long"))
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        CharStr::parse(parser).map(Nsec3Salt)
    }

    pub fn scan(tok: &mut Tokenizer) -> Result<Self, SyntaxError> {
        let value = tok.get_identifier()?;
        if value == "-" {
            Ok(Self::empty())
        } else {
            Self::from_octets(base16::decode_vec(&value)?)
        }
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.0.compose(target)
    }
}

//--- Display

impl fmt::Display for Nsec3Salt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("-")
        } else {
            base16::display(self.0.as_slice(), f)
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;

    #[test]
    fn nsec3_text() {
        // Example from RFC 5155, Appendix A.
        let text = "1 1 12 aabbccdd 2t7b4g4vsa5smi47k61mv5bv1a22bojr MX DNSKEY \
                    NS SOA NSEC3PARAM RRSIG";
        let nsec3 = Nsec3::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert!(nsec3.opt_out());
        assert_eq!(nsec3.iterations(), 12);
        assert_eq!(nsec3.salt().as_slice(), b"\xaa\xbb\xcc\xdd");
        assert_eq!(nsec3.next_owner().len(), 20);
        assert!(nsec3.types().contains(Rtype::NSEC3PARAM));
        assert_eq!(
            nsec3.to_text(None, false),
            "1 1 12 aabbccdd 2t7b4g4vsa5smi47k61mv5bv1a22bojr NS SOA MX \
             RRSIG DNSKEY NSEC3PARAM"
        );

        let mut target = Vec::new();
        nsec3.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(Nsec3::parse_rdata(&mut Parser::new(&target)).unwrap(), nsec3);
    }

    #[test]
    fn nsec3param_empty_salt() {
        let param =
            Nsec3param::scan_rdata(&mut Tokenizer::new("1 0 0 -"), None)
                .unwrap();
        assert!(param.salt().as_slice().is_empty());
        assert_eq!(param.to_text(None, false), "1 0 0 -");
        let mut target = Vec::new();
        param.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(target, b"\x01\x00\x00\x00\x00");
    }
}

//! Record data from [RFC 4034]: DS, DNSKEY, RRSIG, and NSEC records.
//!
//! This RFC defines the record types for DNSSEC. The same layouts are used
//! by a few more record types: CDS and DLV share the DS layout, CDNSKEY and
//! KEY the DNSKEY layout, and SIG the RRSIG layout.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::{DigestAlg, Rtype, SecAlg};
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::serial::Serial;
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::{base16, base64};
use core::fmt;
use std::collections::BTreeSet;

//------------ Dnskey --------------------------------------------------------

/// Dnskey record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Dnskey {
    flags: u16,
    protocol: u8,
    algorithm: SecAlg,
    public_key: Vec<u8>,
}

impl Dnskey {
    /// The Zone Key flag.
    pub const ZONE: u16 = 0x0100;

    /// The Revoke flag from RFC 5011.
    pub const REVOKE: u16 = 0x0080;

    /// The Secure Entry Point flag.
    pub const SEP: u16 = 0x0001;

    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: SecAlg,
        public_key: Vec<u8>,
    ) -> Self {
        Dnskey {
            flags,
            protocol,
            algorithm,
            public_key,
        }
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Returns whether the Revoke flag is set.
    ///
    /// See [RFC 5011, Section 3].
    ///
    /// [RFC 5011, Section 3]: https://tools.ietf.org/html/rfc5011#section-3
    pub fn is_revoked(&self) -> bool {
        self.flags & Self::REVOKE != 0
    }

    /// Returns whether the the Secure Entry Point (SEP) flag is set.
    ///
    /// See [RFC 4034, Section 2.1.1]:
    ///
    /// > This flag is only intended to be a hint to zone signing or
    /// > debugging software as to the intended use of this DNSKEY record;
    /// > validators MUST NOT alter their behavior during the signature
    /// > validation process in any way based on the setting of this bit.
    ///
    /// [RFC 4034, Section 2.1.1]: https://tools.ietf.org/html/rfc4034#section-2.1.1
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & Self::SEP != 0
    }

    /// Returns whether the Zone Key flag is set.
    ///
    /// If the flag is not set, the key MUST NOT be used to verify RRSIGs
    /// that cover RRsets. See [RFC 4034, Section 2.1.1].
    ///
    /// [RFC 4034, Section 2.1.1]: https://tools.ietf.org/html/rfc4034#section-2.1.1
    pub fn is_zone_key(&self) -> bool {
        self.flags & Self::ZONE != 0
    }

    /// Returns the key tag for this DNSKEY data.
    ///
    /// The algorithm is described in [RFC 4034, Appendix B].
    ///
    /// [RFC 4034, Appendix B]: https://tools.ietf.org/html/rfc4034#appendix-B
    pub fn key_tag(&self) -> u16 {
        if self.algorithm == SecAlg::RSAMD5 {
            // The key tag is third-to-last and second-to-last octets of the
            // key as a big-endian u16. If we don’t have enough octets in the
            // key, we return 0.
            let len = self.public_key.len();
            if len > 2 {
                u16::from_be_bytes([
                    self.public_key[len - 3],
                    self.public_key[len - 2],
                ])
            } else {
                0
            }
        } else {
            // Treat record data as a octet sequence. Add octets at odd
            // indexes as they are, add octets at even indexes shifted left
            // by 8 bits.
            let mut res = u32::from(self.flags);
            res += u32::from(self.protocol) << 8;
            res += u32::from(self.algorithm.to_int());
            let mut iter = self.public_key.iter();
            loop {
                match iter.next() {
                    Some(&x) => res += u32::from(x) << 8,
                    None => break,
                }
                match iter.next() {
                    Some(&x) => res += u32::from(x),
                    None => break,
                }
            }
            res += (res >> 16) & 0xFFFF;
            (res & 0xFFFF) as u16
        }
    }
}

//--- RecordData

impl RecordData for Dnskey {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Dnskey::new(
            parser.parse_u16()?,
            parser.parse_u8()?,
            SecAlg::parse(parser)?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Dnskey::new(
            tok.get_u16()?,
            tok.get_u8()?,
            tok.get_mnemonic(SecAlg::from_bytes)?,
            base64::decode(&tok.concatenate_remaining_identifiers()?)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.flags);
        target.append_u8(self.protocol);
        self.algorithm.compose(target);
        target.append_slice(&self.public_key);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Dnskey {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.flags);
        p.write_token(self.protocol);
        p.write_token(self.algorithm.to_int());
        p.write_token(base64::encode_display(&self.public_key));
    }
}

//------------ Ds -----------------------------------------------------------

/// Ds record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ds {
    key_tag: u16,
    algorithm: SecAlg,
    digest_type: DigestAlg,
    digest: Vec<u8>,
}

impl Ds {
    pub fn new(
        key_tag: u16,
        algorithm: SecAlg,
        digest_type: DigestAlg,
        digest: Vec<u8>,
    ) -> Self {
        Ds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    pub fn digest_type(&self) -> DigestAlg {
        self.digest_type
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn into_digest(self) -> Vec<u8> {
        self.digest
    }
}

//--- RecordData

impl RecordData for Ds {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Ds::new(
            parser.parse_u16()?,
            SecAlg::parse(parser)?,
            DigestAlg::parse(parser)?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Ds::new(
            tok.get_u16()?,
            tok.get_mnemonic(SecAlg::from_bytes)?,
            tok.get_mnemonic(DigestAlg::from_bytes)?,
            base16::decode_vec(&tok.concatenate_remaining_identifiers()?)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.key_tag);
        self.algorithm.compose(target);
        self.digest_type.compose(target);
        target.append_slice(&self.digest);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Ds {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.key_tag);
        p.write_token(self.algorithm.to_int());
        p.write_token(self.digest_type.to_int());
        p.write_token(base16::encode_display(&self.digest));
    }
}

//------------ Rrsig ---------------------------------------------------------

/// Rrsig record data.
///
/// This type is also used for the data of the older SIG record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rrsig {
    type_covered: Rtype,
    algorithm: SecAlg,
    labels: u8,
    original_ttl: u32,
    expiration: Serial,
    inception: Serial,
    key_tag: u16,
    signer_name: Name,
    signature: Vec<u8>,
}

impl Rrsig {
    #[allow(clippy::too_many_arguments)] // XXX Consider changing.
    pub fn new(
        type_covered: Rtype,
        algorithm: SecAlg,
        labels: u8,
        original_ttl: u32,
        expiration: Serial,
        inception: Serial,
        key_tag: u16,
        signer_name: Name,
        signature: Vec<u8>,
    ) -> Self {
        Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        }
    }

    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    pub fn labels(&self) -> u8 {
        self.labels
    }

    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    pub fn expiration(&self) -> Serial {
        self.expiration
    }

    pub fn inception(&self) -> Serial {
        self.inception
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn signer_name(&self) -> &Name {
        &self.signer_name
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn set_signature(&mut self, signature: Vec<u8>) {
        self.signature = signature
    }

    /// Appends all fields but the signature with the signer in canonical
    /// form.
    ///
    /// This is the start of the data a signature is calculated over.
    pub fn compose_signed_fields<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        origin: Option<&Name>,
    ) -> Result<(), ComposeError> {
        self.type_covered.compose(target);
        self.algorithm.compose(target);
        target.append_u8(self.labels);
        target.append_u32(self.original_ttl);
        self.expiration.compose(target);
        self.inception.compose(target);
        target.append_u16(self.key_tag);
        self.signer_name.compose_canonical(target, origin)
    }
}

//--- RecordData

impl RecordData for Rrsig {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Rrsig::new(
            Rtype::parse(parser)?,
            SecAlg::parse(parser)?,
            parser.parse_u8()?,
            parser.parse_u32()?,
            Serial::parse(parser)?,
            Serial::parse(parser)?,
            parser.parse_u16()?,
            Name::parse(parser)?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Rrsig::new(
            tok.get_mnemonic(Rtype::from_bytes)?,
            tok.get_mnemonic(SecAlg::from_bytes)?,
            tok.get_u8()?,
            tok.get_ttl()?,
            Serial::rrsig_from_str(&tok.get_identifier()?)?,
            Serial::rrsig_from_str(&tok.get_identifier()?)?,
            tok.get_u16()?,
            tok.get_name(origin)?,
            base64::decode(&tok.concatenate_remaining_identifiers()?)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.type_covered.compose(target);
        self.algorithm.compose(target);
        target.append_u8(self.labels);
        target.append_u32(self.original_ttl);
        self.expiration.compose(target);
        self.inception.compose(target);
        target.append_u16(self.key_tag);
        mode.compose_name(&self.signer_name, target)?;
        target.append_slice(&self.signature);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Rrsig {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.type_covered);
        p.write_token(self.algorithm.to_int());
        p.write_token(self.labels);
        p.write_token(self.original_ttl);
        p.write_token(self.expiration.rrsig_to_string());
        p.write_token(self.inception.rrsig_to_string());
        p.write_token(self.key_tag);
        p.write_name(&self.signer_name);
        p.write_token(base64::encode_display(&self.signature));
    }
}

//------------ Nsec ----------------------------------------------------------

/// Nsec record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nsec {
    next_name: Name,
    types: RtypeBitmap,
}

impl Nsec {
    pub fn new(next_name: Name, types: RtypeBitmap) -> Self {
        Nsec { next_name, types }
    }

    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }
}

//--- RecordData

impl RecordData for Nsec {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Nsec::new(Name::parse(parser)?, RtypeBitmap::parse(parser)?))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Nsec::new(tok.get_name(origin)?, RtypeBitmap::scan(tok)?))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        mode.compose_name(&self.next_name, target)?;
        self.types.compose(target);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Nsec {
    fn present(&self, p: &mut Presenter) {
        p.write_name(&self.next_name);
        self.types.present(p);
    }
}

//------------ RtypeBitmap ---------------------------------------------------

/// The set of record types present at a name.
///
/// The bitmap is kept in its wire format: a sequence of windows, each
/// starting with the window number and the length of the bitmap for the
/// 256 record types of the window. Only windows with at least one type
/// present are included and they appear in ascending order.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RtypeBitmap(Vec<u8>);

impl RtypeBitmap {
    /// Creates a bitmap from its wire format.
    pub fn from_octets(octets: Vec<u8>) -> Result<Self, RtypeBitmapError> {
        {
            let mut data = octets.as_slice();
            let mut last_window = None;
            while !data.is_empty() {
                // At least bitmap number and length must be present.
                if data.len() < 2 {
                    return Err(RtypeBitmapError::ShortBuf);
                }
                let window = data[0];
                if last_window.map_or(false, |last| window <= last) {
                    return Err(RtypeBitmapError::BadWindowOrder);
                }
                last_window = Some(window);

                let len = usize::from(data[1]);
                // https://tools.ietf.org/html/rfc4034#section-4.1.2:
                //  Blocks with no types present MUST NOT be included.
                if len == 0 || len > 32 {
                    return Err(RtypeBitmapError::BadWindowLength);
                }
                if data.len() < len + 2 {
                    return Err(RtypeBitmapError::ShortBuf);
                }
                data = &data[len + 2..];
            }
        }
        Ok(RtypeBitmap(octets))
    }

    /// Creates a bitmap containing the given record types.
    pub fn from_types(types: impl IntoIterator<Item = Rtype>) -> Self {
        let types: BTreeSet<u16> =
            types.into_iter().map(Rtype::to_int).collect();
        let mut res = Vec::new();
        let mut current: Option<(u8, [u8; 32], usize)> = None;
        for value in types {
            let (window, octet, mask) = split_rtype(value);
            match current {
                Some((number, ref mut bitmap, ref mut len))
                    if number == window =>
                {
                    bitmap[octet] |= mask;
                    *len = octet + 1;
                }
                _ => {
                    if let Some((number, bitmap, len)) = current.take() {
                        push_window(&mut res, number, &bitmap[..len]);
                    }
                    let mut bitmap = [0u8; 32];
                    bitmap[octet] |= mask;
                    current = Some((window, bitmap, octet + 1));
                }
            }
        }
        if let Some((number, bitmap, len)) = current {
            push_window(&mut res, number, &bitmap[..len]);
        }
        RtypeBitmap(res)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the record types in ascending order.
    pub fn iter(&self) -> RtypeBitmapIter {
        RtypeBitmapIter {
            data: &self.0,
            window: 0,
            bitmap: &[],
            index: 0,
        }
    }

    pub fn contains(&self, rtype: Rtype) -> bool {
        let (block, octet, mask) = split_rtype(rtype.to_int());
        let mut data = self.0.as_slice();
        while data.len() >= 2 {
            let len = usize::from(data[1]);
            let window = match data.get(2..len + 2) {
                Some(window) => window,
                None => return false,
            };
            if data[0] == block {
                return window.get(octet).map_or(false, |x| x & mask != 0);
            }
            data = &data[len + 2..];
        }
        false
    }

    /// Takes the remaining data of the parser as a bitmap.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Self::from_octets(parser.parse_remaining()?.to_vec())
            .map_err(|_| ParseError::form_error("invalid record type bitmap"))
    }

    /// Scans the remaining tokens of the entry as record types.
    pub fn scan(tok: &mut Tokenizer) -> Result<Self, SyntaxError> {
        let mut types = Vec::new();
        while !tok.at_eol()? {
            types.push(tok.get_mnemonic(Rtype::from_bytes)?);
        }
        if types.iter().any(|rtype| rtype.to_int() == 0) {
            return Err(SyntaxError::Custom("type NONE in type bitmap"));
        }
        Ok(Self::from_types(types))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.0)
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a RtypeBitmap {
    type Item = Rtype;
    type IntoIter = RtypeBitmapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- ZonefileFmt

impl ZonefileFmt for RtypeBitmap {
    fn present(&self, p: &mut Presenter) {
        for rtype in self {
            p.write_token(rtype)
        }
    }
}

fn split_rtype(value: u16) -> (u8, usize, u8) {
    let [window, low] = value.to_be_bytes();
    (window, usize::from(low >> 3), 0b1000_0000 >> (low & 0x07))
}

fn push_window(target: &mut Vec<u8>, number: u8, bitmap: &[u8]) {
    target.push(number);
    target.push(bitmap.len() as u8);
    target.extend_from_slice(bitmap);
}

//------------ RtypeBitmapIter -----------------------------------------------

pub struct RtypeBitmapIter<'a> {
    /// The windows not yet started.
    data: &'a [u8],

    /// The number of the current window.
    window: u8,

    /// The bitmap of the current window.
    bitmap: &'a [u8],

    /// Index of the next bit in the current bitmap.
    index: usize,
}

impl<'a> Iterator for RtypeBitmapIter<'a> {
    type Item = Rtype;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.index < self.bitmap.len() * 8 {
                let index = self.index;
                self.index += 1;
                if self.bitmap[index >> 3] & (0b1000_0000 >> (index & 0x07))
                    != 0
                {
                    return Some(Rtype::from_int(
                        (u16::from(self.window) << 8) | index as u16,
                    ));
                }
            }
            if self.data.len() < 2 {
                return None;
            }
            let len = usize::from(self.data[1]);
            self.window = self.data[0];
            self.bitmap = self.data.get(2..len + 2)?;
            self.data = &self.data[len + 2..];
            self.index = 0;
        }
    }
}

//============ Error Types ===================================================

//------------ RtypeBitmapError ----------------------------------------------

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RtypeBitmapError {
    ShortBuf,
    BadWindowOrder,
    BadWindowLength,
}

//--- Display and Error

impl fmt::Display for RtypeBitmapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RtypeBitmapError::ShortBuf => f.write_str("short bitmap"),
            RtypeBitmapError::BadWindowOrder => {
                f.write_str("bitmap windows out of order")
            }
            RtypeBitmapError::BadWindowLength => {
                f.write_str("invalid bitmap window length")
            }
        }
    }
}

impl std::error::Error for RtypeBitmapError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    // Taken from RFC 4034, Section 5.4.
    const DNSKEY: &str = "256 3 5 AQOeiiR0GOMYkDshWoSKz9XzfwJr1AYtsmx3TGkJaNXVbfi/\
        2pHm822aJ5iI9BMzNXxeYCmZDRD99WYwYqUSdjMmmAphXdvxegXd/M5+X7OrzKBaM\
        bCVdFLUUh6DhweJBjEVv5f2wwjM9XzcnOf+EPbtG9DMBmADjFDc2w/rljwvFw==";

    #[test]
    fn dnskey_key_tag() {
        let key = Dnskey::scan_rdata(&mut Tokenizer::new(DNSKEY), None)
            .unwrap();
        assert_eq!(key.key_tag(), 60485);
        assert!(key.is_zone_key());
        assert!(!key.is_secure_entry_point());
        assert_eq!(key.algorithm(), SecAlg::RSASHA1);
    }

    #[test]
    fn dnskey_rsamd5_key_tag() {
        let key = Dnskey::new(256, 3, SecAlg::RSAMD5, vec![1, 2, 3, 4, 5]);
        assert_eq!(key.key_tag(), 0x0304);
        let key = Dnskey::new(256, 3, SecAlg::RSAMD5, vec![1, 2]);
        assert_eq!(key.key_tag(), 0);
    }

    #[test]
    fn ds_text() {
        let text = "60485 5 1 2bb183af5f22588179a53b0a98631fad1a292118";
        let ds = Ds::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert_eq!(ds.digest_type(), DigestAlg::SHA1);
        assert_eq!(ds.digest().len(), 20);
        assert_eq!(ds.to_text(None, false), text);

        let split = "60485 RSASHA1 1 2BB183AF5F22588179A5 \
                     3B0A98631FAD1A292118";
        assert_eq!(
            Ds::scan_rdata(&mut Tokenizer::new(split), None).unwrap(),
            ds
        );
    }

    #[test]
    fn rrsig_text() {
        let text = "A 5 3 86400 20030322173103 20030220173103 2642 \
                    example.com. oJB1W6WNGv+ldvQ3WDG0MQkg5IEhjRip8WTr\
                    PYGv07h108dUKGMeDPKijVCHX3DDKdfb+v6oB9wfuh3DTJXUAfI/M0zmO/zz8bW0\
                    Rznl8O3tGNazPwQKkRN20XPXV6nwwfoXmJQbsLNrLfkGJ5D6fwFm8nN+6pBzeDQf\
                    sS3Ap3o=";
        let sig = Rrsig::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert_eq!(sig.type_covered(), Rtype::A);
        assert_eq!(sig.expiration(), Serial(1048354263));
        assert_eq!(sig.key_tag(), 2642);
        let again = Rrsig::scan_rdata(
            &mut Tokenizer::new(&sig.to_text(None, false)),
            None,
        )
        .unwrap();
        assert_eq!(again, sig);

        let mut target = Vec::new();
        sig.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(Rrsig::parse_rdata(&mut Parser::new(&target)).unwrap(), sig);
    }

    #[test]
    fn rrsig_signed_fields() {
        let sig = Rrsig::new(
            Rtype::A,
            SecAlg::RSASHA256,
            2,
            3600,
            Serial(2),
            Serial(1),
            12345,
            "Example.".parse().unwrap(),
            vec![1, 2, 3],
        );
        let mut target = Vec::new();
        sig.compose_signed_fields(&mut target, None).unwrap();
        assert_eq!(
            target,
            b"\x00\x01\x08\x02\x00\x00\x0e\x10\x00\x00\x00\x02\
              \x00\x00\x00\x01\x30\x39\x07example\x00"
        );
    }

    #[test]
    fn nsec_text() {
        let text = "host.example.com. A MX RRSIG NSEC TYPE1234";
        let nsec = Nsec::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert_eq!(nsec.to_text(None, false), text);
        let mut target = Vec::new();
        nsec.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        // Example from RFC 4034, Section 4.3.
        assert_eq!(
            &target[18..],
            b"\x00\x06\x40\x01\x00\x00\x00\x03\x04\x1b\
              \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
              \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x20"
        );
    }

    #[test]
    fn bitmap_from_octets() {
        assert!(RtypeBitmap::from_octets(Vec::new()).is_ok());
        assert_eq!(
            RtypeBitmap::from_octets(vec![0, 0]),
            Err(RtypeBitmapError::BadWindowLength)
        );
        assert_eq!(
            RtypeBitmap::from_octets(vec![1, 1, 0x40, 0, 1, 0x40]),
            Err(RtypeBitmapError::BadWindowOrder)
        );
        assert_eq!(
            RtypeBitmap::from_octets(vec![0, 2, 0x40]),
            Err(RtypeBitmapError::ShortBuf)
        );
        let bitmap = RtypeBitmap::from_octets(vec![0, 1, 0x40]).unwrap();
        assert!(bitmap.contains(Rtype::A));
        assert!(!bitmap.contains(Rtype::NS));
        assert!(!bitmap.contains(Rtype::CAA));
        assert_eq!(bitmap.iter().collect::<Vec<_>>(), vec![Rtype::A]);
    }
}

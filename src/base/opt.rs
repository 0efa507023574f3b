//! EDNS, the extension mechanism for DNS.
//!
//! Since DNS message headers are relatively short, the amount of
//! information that can be conveyed through them is very limited. In order
//! to provide an extensible means to transmit additional information,
//! [RFC 6891] introduces a pseudo resource record called OPT that can be
//! added to the additional section of a message.
//!
//! The OPT record re-purposes the fields of a record: the class carries the
//! UDP payload size the sender can receive, the TTL holds the upper eight
//! bits of the extended response code, the EDNS version, and sixteen bits
//! of flags. The record data is a sequence of options. A message carries
//! all of this as an [`Edns`] value.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use super::header::EdnsFlags;
use super::iana::OptionCode;
use super::rdata::LongRecordData;
use super::scan::SyntaxError;
use super::wire::{Composer, ParseError, Parser};
use crate::utils::base16;
use crate::utils::config::DefMinMax;
use core::{fmt, str};

//------------ Configuration Constants ---------------------------------------

/// The limits for the advertised UDP payload size.
pub const PAYLOAD_SIZE: DefMinMax<u16> = DefMinMax::new(1280, 512, 65535);

//------------ Edns ----------------------------------------------------------

/// The EDNS information of a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edns {
    /// The EDNS version.
    pub version: u8,

    /// The sixteen EDNS flag bits.
    pub flags: u16,

    /// The UDP payload size advertised by the sender.
    pub payload: u16,

    /// The EDNS options.
    pub options: Vec<EdnsOption>,
}

impl Edns {
    /// Creates EDNS information for the given version.
    ///
    /// The payload size is limited to the range accepted by
    /// [`PAYLOAD_SIZE`].
    pub fn new(version: u8, flags: u16, payload: u16) -> Self {
        Edns {
            version,
            flags,
            payload: PAYLOAD_SIZE.limit(payload),
            options: Vec::new(),
        }
    }

    /// Creates the value from the class and TTL fields of an OPT record.
    ///
    /// The extended response code bits in the TTL are ignored. They are
    /// combined with the header by [`Rcode::from_flags`].
    ///
    /// [`Rcode::from_flags`]: super::iana::Rcode::from_flags
    pub fn from_record(
        class: u16,
        ttl: u32,
        options: Vec<EdnsOption>,
    ) -> Self {
        Edns {
            version: (ttl >> 16) as u8,
            flags: ttl as u16,
            payload: class,
            options,
        }
    }

    /// Returns the TTL field of an OPT record for this value.
    ///
    /// The `rcode_bits` are the extended response code bits as returned
    /// by [`Rcode::to_flags`].
    ///
    /// [`Rcode::to_flags`]: super::iana::Rcode::to_flags
    pub fn ttl(&self, rcode_bits: u32) -> u32 {
        (rcode_bits & 0xFF00_0000)
            | (u32::from(self.version) << 16)
            | u32::from(self.flags)
    }

    /// Returns the flags as an [`EdnsFlags`] value.
    pub fn edns_flags(&self) -> EdnsFlags {
        EdnsFlags::from_bits(u32::from(self.flags))
    }

    pub fn dnssec_ok(&self) -> bool {
        self.edns_flags().dnssec_ok
    }

    pub fn set_dnssec_ok(&mut self, value: bool) {
        if value {
            self.flags |= EdnsFlags::DO as u16;
        } else {
            self.flags &= !(EdnsFlags::DO as u16);
        }
    }

    /// Returns the first option with the given code.
    pub fn option(&self, code: OptionCode) -> Option<&EdnsOption> {
        self.options.iter().find(|opt| opt.code() == code)
    }

    /// Parses the options in the record data of an OPT record.
    pub fn parse_options(
        parser: &mut Parser,
    ) -> Result<Vec<EdnsOption>, ParseError> {
        let mut res = Vec::new();
        while parser.remaining() > 0 {
            res.push(EdnsOption::parse(parser)?);
        }
        Ok(res)
    }

    /// Appends the options as the record data of an OPT record.
    pub fn compose_options<Target: Composer + ?Sized>(
        options: &[EdnsOption],
        target: &mut Target,
    ) {
        for option in options {
            option.compose(target)
        }
    }
}

impl Default for Edns {
    fn default() -> Self {
        Edns::new(0, 0, PAYLOAD_SIZE.default())
    }
}

//------------ EdnsOption ----------------------------------------------------

/// A single EDNS option.
///
/// The option data is kept as raw octets.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdnsOption {
    code: OptionCode,
    data: Vec<u8>,
}

impl EdnsOption {
    pub fn new(code: OptionCode, data: Vec<u8>) -> Result<Self, LongRecordData> {
        LongRecordData::check_len(data.len())?;
        Ok(EdnsOption { code, data })
    }

    pub fn code(&self) -> OptionCode {
        self.code
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the length of the option in wire format.
    pub fn wire_len(&self) -> usize {
        self.data.len() + 4
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let code = OptionCode::parse(parser)?;
        let len = parser.parse_u16()?;
        let data = parser.parse_octets(usize::from(len))?.to_vec();
        Ok(EdnsOption { code, data })
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.code.compose(target);
        target.append_u16(self.data.len() as u16);
        target.append_slice(&self.data)
    }
}

//--- Display

impl fmt::Display for EdnsOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        base16::display(&self.data, f)
    }
}

//--- FromStr

impl str::FromStr for EdnsOption {
    type Err = SyntaxError;

    /// Parses the `CODE:hex` format produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, data) =
            s.split_once(':').ok_or(SyntaxError::Custom("missing colon"))?;
        let code = OptionCode::from_bytes(code.as_bytes())
            .ok_or(SyntaxError::UnknownMnemonic)?;
        let data =
            base16::decode_vec(data).map_err(|_| SyntaxError::BadEncoding)?;
        Self::new(code, data)
            .map_err(|_| SyntaxError::Custom("option data too long"))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ttl_fields() {
        let edns = Edns::from_record(4096, 0x0100_8000, Vec::new());
        assert_eq!(edns.version, 0);
        assert_eq!(edns.payload, 4096);
        assert!(edns.dnssec_ok());
        assert_eq!(edns.ttl(0x0100_0000), 0x0100_8000);

        let mut edns = Edns::new(1, 0, 100);
        assert_eq!(edns.payload, 512);
        edns.set_dnssec_ok(true);
        assert_eq!(edns.ttl(0), 0x0001_8000);
        edns.set_dnssec_ok(false);
        assert_eq!(edns.flags, 0);
    }

    #[test]
    fn options() {
        let data = b"\x00\x03\x00\x02ab\x00\x0c\x00\x00";
        let options = Edns::parse_options(&mut Parser::new(data)).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].code(), OptionCode::NSID);
        assert_eq!(options[0].data(), b"ab");
        assert_eq!(options[1].to_string(), "PADDING:");
        assert_eq!(options[0].to_string().parse(), Ok(options[0].clone()));
        let mut target = Vec::new();
        Edns::compose_options(&options, &mut target);
        assert_eq!(target, data);

        let short = b"\x00\x03\x00\x05ab";
        assert_eq!(
            Edns::parse_options(&mut Parser::new(short)),
            Err(ParseError::ShortInput)
        );
    }
}

//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the
//! header. Its content and format are defined in section 4.1.1 of
//! [RFC 1035]:
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|Z |AD|CD|   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |          QDCOUNT, ANCOUNT, NSCOUNT, ARCOUNT   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! The flags word is kept as a raw `u16` by [`Message`] since it also
//! holds the opcode and the lower bits of the rcode. The [`Flags`] type
//! provides convenient access to the flag bits alone and their text
//! format. The EDNS flags carried in the OPT record have their own
//! [`EdnsFlags`] type.
//!
//! [`Message`]: super::message::Message
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::wire::{Composer, ParseError, Parser};
use core::{fmt, str::FromStr};

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a message in decoded form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderSection {
    pub id: u16,
    pub flags: u16,
    pub counts: HeaderCounts,
}

impl HeaderSection {
    /// The length of the header section in wire format.
    pub const LEN: usize = 12;

    /// Reads the header section from the start of a message.
    ///
    /// Fails with [`ParseError::ShortHeader`] if there are fewer than
    /// twelve octets left.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        if parser.remaining() < Self::LEN {
            return Err(ParseError::ShortHeader);
        }
        Ok(HeaderSection {
            id: parser.parse_u16()?,
            flags: parser.parse_u16()?,
            counts: HeaderCounts {
                qdcount: parser.parse_u16()?,
                ancount: parser.parse_u16()?,
                nscount: parser.parse_u16()?,
                arcount: parser.parse_u16()?,
            },
        })
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_u16(self.id);
        target.append_u16(self.flags);
        self.counts.compose(target)
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The section counts of the header.
///
/// [RFC 2136] reuses the four sections for UPDATE messages as zone,
/// prerequisite, update, and additional sections.
///
/// [RFC 2136]: https://tools.ietf.org/html/rfc2136
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl HeaderCounts {
    /// Returns the counts as an array in section order.
    pub fn as_array(&self) -> [u16; 4] {
        [self.qdcount, self.ancount, self.nscount, self.arcount]
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        for count in self.as_array() {
            target.append_u16(count)
        }
    }
}

//------------ Flags ---------------------------------------------------------

/// The flags contained in the DNS message header.
///
/// This type has a text notation and can be created from it as well. Each
/// flag that is set is represented by a two-letter token, which is the
/// uppercase version of the flag name. If multiple flags are set, the
/// tokens are separated by space.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    pub qr: bool,

    /// Using the `AA` bit, a name server generating a response states
    /// whether it is authoritative for the requested domain name.
    pub aa: bool,

    /// The *truncation* (`TC`) bit is set if there was more data available
    /// then fit into the message.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit may be set in a query to ask the
    /// name server to try and recursively gather a response.
    pub rd: bool,

    /// In a response, the *recursion available* (`RA`) bit denotes whether
    /// the responding name server supports recursion.
    pub ra: bool,

    /// The *authentic data* (`AD`) bit states that all data in a response
    /// has passed DNSSEC validation.
    pub ad: bool,

    /// The *checking disabled* (`CD`) bit asks upstream servers not to
    /// perform DNSSEC validation.
    pub cd: bool,
}

impl Flags {
    pub const QR: u16 = 0x8000;
    pub const AA: u16 = 0x0400;
    pub const TC: u16 = 0x0200;
    pub const RD: u16 = 0x0100;
    pub const RA: u16 = 0x0080;
    pub const AD: u16 = 0x0020;
    pub const CD: u16 = 0x0010;

    /// Creates new flags with all flags unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the flags from a header flags word.
    pub fn from_bits(bits: u16) -> Self {
        Flags {
            qr: bits & Self::QR != 0,
            aa: bits & Self::AA != 0,
            tc: bits & Self::TC != 0,
            rd: bits & Self::RD != 0,
            ra: bits & Self::RA != 0,
            ad: bits & Self::AD != 0,
            cd: bits & Self::CD != 0,
        }
    }

    /// Returns the flag bits of a header flags word.
    pub fn to_bits(self) -> u16 {
        [
            (self.qr, Self::QR),
            (self.aa, Self::AA),
            (self.tc, Self::TC),
            (self.rd, Self::RD),
            (self.ra, Self::RA),
            (self.ad, Self::AD),
            (self.cd, Self::CD),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .fold(0, |res, (_, bit)| res | bit)
    }
}

//--- Display & FromStr

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, text) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
            (self.ad, "AD"),
            (self.cd, "CD"),
        ] {
            if set {
                write!(f, "{}{}", sep, text)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = FlagsFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::new();
        for token in s.to_uppercase().split_whitespace() {
            match token {
                "QR" => flags.qr = true,
                "AA" => flags.aa = true,
                "TC" => flags.tc = true,
                "RD" => flags.rd = true,
                "RA" => flags.ra = true,
                "AD" => flags.ad = true,
                "CD" => flags.cd = true,
                _ => return Err(FlagsFromStrError),
            }
        }
        Ok(flags)
    }
}

//------------ EdnsFlags -----------------------------------------------------

/// The flags carried in the lower 16 bits of the TTL of an OPT record.
///
/// Only the `DO` flag of [RFC 3225] is defined.
///
/// [RFC 3225]: https://tools.ietf.org/html/rfc3225
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct EdnsFlags {
    /// The *DNSSEC OK* bit asks for DNSSEC records to be included.
    pub dnssec_ok: bool,
}

impl EdnsFlags {
    pub const DO: u32 = 0x8000;

    pub fn from_bits(bits: u32) -> Self {
        EdnsFlags {
            dnssec_ok: bits & Self::DO != 0,
        }
    }

    pub fn to_bits(self) -> u32 {
        if self.dnssec_ok {
            Self::DO
        } else {
            0
        }
    }
}

impl fmt::Display for EdnsFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.dnssec_ok {
            f.write_str("DO")?;
        }
        Ok(())
    }
}

impl FromStr for EdnsFlags {
    type Err = FlagsFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = EdnsFlags::default();
        for token in s.split_whitespace() {
            if token.eq_ignore_ascii_case("DO") {
                flags.dnssec_ok = true;
            } else {
                return Err(FlagsFromStrError);
            }
        }
        Ok(flags)
    }
}

//============ Error Types ===================================================

//------------ FlagsFromStrError --------------------------------------------

/// An error happened when converting string to flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagsFromStrError;

impl fmt::Display for FlagsFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal flags token")
    }
}

impl std::error::Error for FlagsFromStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn short_header() {
        let mut parser = Parser::new(&[0u8; 11]);
        assert_eq!(
            HeaderSection::parse(&mut parser),
            Err(ParseError::ShortHeader)
        );
    }

    #[test]
    fn header_roundtrip() {
        let data = b"\x04\xd2\x81\x80\x00\x01\x00\x02\x00\x03\x00\x04";
        let header = HeaderSection::parse(&mut Parser::new(data)).unwrap();
        assert_eq!(header.id, 0x04d2);
        assert_eq!(header.counts.as_array(), [1, 2, 3, 4]);
        let mut target = Vec::new();
        header.compose(&mut target);
        assert_eq!(target, data);
    }

    #[test]
    fn flags_display() {
        let flags = Flags::from_bits(0x8180);
        assert_eq!(flags.to_string(), "QR RD RA");
        assert_eq!(flags.to_bits(), 0x8180);
        assert_eq!(Flags::new().to_string(), "");
        let all = Flags::from_bits(0xFFFF);
        assert_eq!(all.to_string(), "QR AA TC RD RA AD CD");
    }

    #[test]
    fn flags_from_str() {
        let flags = Flags::from_str("qr  AA cd").unwrap();
        assert_eq!(flags.to_bits(), 0x8410);
        assert!(Flags::from_str("QR XX").is_err());
        assert_eq!(Flags::from_str("").unwrap(), Flags::new());
    }

    #[test]
    fn edns_flags() {
        assert_eq!(EdnsFlags::from_bits(0x8000).to_string(), "DO");
        assert_eq!(EdnsFlags::from_str("do").unwrap().to_bits(), 0x8000);
        assert!(EdnsFlags::from_str("XX").is_err());
    }
}

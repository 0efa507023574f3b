//! Resource data implementations.
//!
//! This module contains implementations for the record data of the record
//! types supported by the crate and the [`Rdata`] enum collecting them.
//!
//! The types are named after the record type they implement. They are
//! grouped into submodules for the RFCs they are defined in. All types are
//! also re-exported at the top level here. Ie., for the AAAA record type,
//! you can simple `use dnskit::rdata::Aaaa` instead of
//! `use dnskit::rdata::rfc3596::Aaaa` which nobody could possibly remember.
//! Several record types share the same layout and thus the same type. The
//! NS, CNAME, PTR, and DNAME types, for instance, all use [`NameRdata`].
//!
//! Record types without a dedicated implementation are represented by
//! [`UnknownRdata`] which keeps the raw octets of the data. The same is true
//! for the types that are only defined for the IN class when they appear
//! in a different class.

#[macro_use]
mod macros;

pub mod generic;
pub mod rfc1035;
pub mod rfc1183;
pub mod rfc1706;
pub mod rfc1712;
pub mod rfc1876;
pub mod rfc2163;
pub mod rfc2535;
pub mod rfc2782;
pub mod rfc2845;
pub mod rfc3123;
pub mod rfc3403;
pub mod rfc3596;
pub mod rfc4025;
pub mod rfc4034;
pub mod rfc4255;
pub mod rfc4398;
pub mod rfc4701;
pub mod rfc5155;
pub mod rfc5205;
pub mod rfc6698;
pub mod rfc6844;
pub mod rfc6891;
pub mod rfc7043;
pub mod rfc7553;

pub use self::generic::UnknownRdata;
pub use self::rfc1035::{A, Hinfo, Minfo, Mx, NameRdata, Soa, Txt, Wks};
pub use self::rfc1183::{Isdn, Rp, X25};
pub use self::rfc1706::Nsap;
pub use self::rfc1712::Gpos;
pub use self::rfc1876::Loc;
pub use self::rfc2163::Px;
pub use self::rfc2535::Nxt;
pub use self::rfc2782::Srv;
pub use self::rfc2845::Tsig;
pub use self::rfc3123::{Apl, AplItem};
pub use self::rfc3403::Naptr;
pub use self::rfc3596::Aaaa;
pub use self::rfc4025::{Gateway, Ipseckey};
pub use self::rfc4034::{Dnskey, Ds, Nsec, Rrsig, RtypeBitmap};
pub use self::rfc4255::Sshfp;
pub use self::rfc4398::Cert;
pub use self::rfc4701::Dhcid;
pub use self::rfc5155::{Nsec3, Nsec3Salt, Nsec3param};
pub use self::rfc5205::Hip;
pub use self::rfc6698::Tlsa;
pub use self::rfc6844::Caa;
pub use self::rfc6891::Opt;
pub use self::rfc7043::{Eui48, Eui64};
pub use self::rfc7553::Uri;

use crate::base::cmp::CanonicalOrd;
use crate::base::iana::{Class, Rtype};
use crate::base::name::Name;
use crate::base::rdata::ComposeMode;
use crate::base::scan::{SyntaxError, Token, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser, WireBuffer};
use crate::base::zonefile_fmt::ZonefileFmt;
use core::cmp::Ordering;
use core::{fmt, hash};

//------------ Record Data Types ---------------------------------------------

// The flags following the record type are: names lowercased in canonical
// form, names compressed, and only defined for class IN.
rdata_types! {
    A(A) => A, false, false, true;
    Ns(NameRdata) => NS, true, true, false;
    Md(NameRdata) => MD, true, true, false;
    Mf(NameRdata) => MF, true, true, false;
    Cname(NameRdata) => CNAME, true, true, false;
    Soa(Soa) => SOA, true, false, false;
    Mb(NameRdata) => MB, true, true, false;
    Mg(NameRdata) => MG, true, true, false;
    Mr(NameRdata) => MR, true, true, false;
    Wks(Wks) => WKS, false, false, true;
    Ptr(NameRdata) => PTR, true, true, false;
    Hinfo(Hinfo) => HINFO, false, false, false;
    Minfo(Minfo) => MINFO, true, true, false;
    Mx(Mx) => MX, true, true, false;
    Txt(Txt) => TXT, false, false, false;
    Rp(Rp) => RP, true, false, false;
    Afsdb(Mx) => AFSDB, true, false, false;
    X25(X25) => X25, false, false, false;
    Isdn(Isdn) => ISDN, false, false, false;
    Rt(Mx) => RT, true, false, false;
    Nsap(Nsap) => NSAP, false, false, true;
    NsapPtr(NameRdata) => NSAPPTR, false, false, true;
    Sig(Rrsig) => SIG, true, false, false;
    Key(Dnskey) => KEY, false, false, false;
    Px(Px) => PX, true, false, true;
    Gpos(Gpos) => GPOS, false, false, false;
    Aaaa(Aaaa) => AAAA, false, false, true;
    Loc(Loc) => LOC, false, false, false;
    Nxt(Nxt) => NXT, true, false, false;
    Srv(Srv) => SRV, true, false, true;
    Naptr(Naptr) => NAPTR, true, false, true;
    Kx(Mx) => KX, true, false, true;
    Cert(Cert) => CERT, false, false, false;
    Dname(NameRdata) => DNAME, true, false, false;
    Opt(Opt) => OPT, false, false, false;
    Apl(Apl) => APL, false, false, true;
    Ds(Ds) => DS, false, false, false;
    Sshfp(Sshfp) => SSHFP, false, false, false;
    Ipseckey(Ipseckey) => IPSECKEY, false, false, true;
    Rrsig(Rrsig) => RRSIG, true, false, false;
    // Next names keep their case, see RFC 6840, section 5.1.
    Nsec(Nsec) => NSEC, false, false, false;
    Dnskey(Dnskey) => DNSKEY, false, false, false;
    Dhcid(Dhcid) => DHCID, false, false, true;
    Nsec3(Nsec3) => NSEC3, false, false, false;
    Nsec3param(Nsec3param) => NSEC3PARAM, false, false, false;
    Tlsa(Tlsa) => TLSA, false, false, false;
    Hip(Hip) => HIP, false, false, false;
    Cds(Ds) => CDS, false, false, false;
    Cdnskey(Dnskey) => CDNSKEY, false, false, false;
    Spf(Txt) => SPF, false, false, false;
    Eui48(Eui48) => EUI48, false, false, false;
    Eui64(Eui64) => EUI64, false, false, false;
    Tsig(Tsig) => TSIG, false, false, false;
    Uri(Uri) => URI, false, false, false;
    Caa(Caa) => CAA, false, false, false;
    Ta(Ds) => TA, false, false, false;
    Dlv(Ds) => DLV, false, false, false;
}

impl Rdata {
    /// Returns whether data of the given class and type uses a dedicated
    /// variant.
    pub fn uses_variant(class: Class, rtype: Rtype) -> bool {
        Self::is_known_type(rtype)
            && (!Self::is_class_specific(rtype) || class == Class::IN)
    }

    /// Scans record data from presentation format.
    ///
    /// Both the type specific format and the generic format of [RFC 3597]
    /// are accepted. Data given in generic format for a type with a
    /// dedicated variant is converted into that variant. The tokenizer
    /// must be at the end of the entry afterwards.
    ///
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    pub fn scan(
        class: Class,
        rtype: Rtype,
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let token = tok.get()?;
        let res = if matches!(token, Token::Identifier(ref value) if value == "\\#")
        {
            let generic = UnknownRdata::scan_without_marker(rtype, tok)?;
            Self::from_generic(class, generic)?
        } else {
            tok.unget(token)?;
            Self::scan_specific(class, rtype, tok, origin)?
        };
        tok.get_eol()?;
        Ok(res)
    }

    /// Creates record data from a string in presentation format.
    pub fn from_text(
        class: Class,
        rtype: Rtype,
        text: &str,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Self::scan(class, rtype, &mut Tokenizer::new(text), origin)
    }

    /// Converts generic data into the dedicated variant if there is one.
    fn from_generic(
        class: Class,
        generic: UnknownRdata,
    ) -> Result<Self, SyntaxError> {
        let rtype = generic.rtype();
        if !Self::uses_variant(class, rtype) {
            return Ok(Rdata::Unknown(generic));
        }
        let mut parser = Parser::new(generic.data());
        let len = parser.remaining();
        parser
            .parse_limited(len, |parser| Self::parse(class, rtype, parser))
            .map_err(|_| SyntaxError::Custom("invalid generic record data"))
    }

    /// Parses record data from a message.
    ///
    /// The data is `rdlen` octets starting at `offset` in `msg`.
    /// Compressed names are resolved against all of `msg`.
    pub fn from_wire(
        class: Class,
        rtype: Rtype,
        msg: &[u8],
        offset: usize,
        rdlen: usize,
    ) -> Result<Self, ParseError> {
        let mut parser = Parser::from_buffer(WireBuffer::new(msg));
        parser.seek(offset)?;
        parser.parse_limited(rdlen, |parser| Self::parse(class, rtype, parser))
    }

    /// Appends the wire format of the data.
    ///
    /// Relative names are made absolute with `origin`. Names are only
    /// compressed if `compress` is true and the record type allows it.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        origin: Option<&Name>,
        compress: bool,
    ) -> Result<(), ComposeError> {
        self.compose_with(
            target,
            ComposeMode {
                origin,
                compress,
                canonical: false,
            },
        )
    }

    /// Appends the canonical wire format of the data.
    ///
    /// Names are never compressed and are lowercased for the record types
    /// listed in section 6.2 of RFC 4034.
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        origin: Option<&Name>,
    ) -> Result<(), ComposeError> {
        self.compose_with(
            target,
            ComposeMode {
                origin,
                compress: false,
                canonical: true,
            },
        )
    }

    /// Returns the uncompressed wire format of the data.
    pub fn to_wire(&self, origin: Option<&Name>) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::new();
        self.compose(&mut res, origin, false)?;
        Ok(res)
    }

    /// Returns the canonical wire format of the data.
    pub fn to_digestable(
        &self,
        origin: Option<&Name>,
    ) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::new();
        self.compose_canonical(&mut res, origin)?;
        Ok(res)
    }

    /// Returns the type covered by a signature.
    ///
    /// For all types other than SIG and RRSIG this is [`Rtype::NONE`].
    pub fn covers(&self) -> Rtype {
        match *self {
            Rdata::Sig(ref sig) | Rdata::Rrsig(ref sig) => sig.type_covered(),
            _ => Rtype::NONE,
        }
    }

    /// Returns the record type and the covered type.
    pub fn extended_rtype(&self) -> (Rtype, Rtype) {
        (self.rtype(), self.covers())
    }

    /// Returns the presentation format.
    ///
    /// Names are relativized to `origin` if `relativize` is true.
    pub fn to_text(&self, origin: Option<&Name>, relativize: bool) -> String {
        ZonefileFmt::to_text(self, origin, relativize)
    }

    /// Returns the key used for comparing and hashing.
    ///
    /// Relative names are made absolute with the root. Data that still
    /// fails to compose, such as a relative name of maximum length, is
    /// keyed by its presentation format and sorts after everything else.
    fn cmp_key(&self) -> Result<Vec<u8>, String> {
        self.to_digestable(Some(&Name::root()))
            .map_err(|_| self.to_text(None, false))
    }
}

//--- PartialEq and Eq

impl PartialEq for Rdata {
    fn eq(&self, other: &Self) -> bool {
        self.rtype() == other.rtype() && self.cmp_key() == other.cmp_key()
    }
}

impl Eq for Rdata {}

//--- PartialOrd, Ord, and CanonicalOrd

impl PartialOrd for Rdata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rdata {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rtype()
            .cmp(&other.rtype())
            .then_with(|| self.cmp_key().cmp(&other.cmp_key()))
    }
}

impl CanonicalOrd for Rdata {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

//--- Hash

impl hash::Hash for Rdata {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rtype().hash(state);
        self.cmp_key().hash(state);
    }
}

//--- Display

impl fmt::Display for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&ZonefileFmt::to_text(self, None, false))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn text_round_trip_known_types() {
        for (rtype, text) in [
            (Rtype::A, "192.0.2.1"),
            (Rtype::NS, "ns1.example."),
            (Rtype::MX, "10 mail.example."),
            (Rtype::SOA, "ns.example. hostmaster.example. 1 7200 3600 1209600 3600"),
            (Rtype::TXT, "\"hello\" \"world\""),
            (Rtype::AAAA, "2001:db8::1"),
            (Rtype::CAA, "0 issue \"letsencrypt.org\""),
        ] {
            let rdata = Rdata::from_text(Class::IN, rtype, text, None).unwrap();
            assert_eq!(rdata.rtype(), rtype);
            assert_eq!(rdata.to_string(), text);
        }
    }

    #[test]
    fn generic_syntax() {
        let a = Rdata::from_text(Class::IN, Rtype::A, "\\# 4 c0000201", None)
            .unwrap();
        assert!(matches!(a, Rdata::A(_)));
        assert_eq!(a.to_string(), "192.0.2.1");

        let unknown =
            Rdata::from_text(Class::IN, Rtype::from_int(65280), "\\# 2 abcd", None)
                .unwrap();
        assert!(matches!(unknown, Rdata::Unknown(_)));
        assert_eq!(unknown.to_string(), "\\# 2 abcd");

        assert!(Rdata::from_text(
            Class::IN,
            Rtype::from_int(65280),
            "abcd",
            None
        )
        .is_err());
        assert!(
            Rdata::from_text(Class::IN, Rtype::A, "\\# 5 c000020100", None)
                .is_err()
        );
    }

    #[test]
    fn class_specific_types() {
        let a = Rdata::from_text(Class::CH, Rtype::A, "\\# 2 0102", None)
            .unwrap();
        assert!(matches!(a, Rdata::Unknown(_)));
        assert!(Rdata::from_text(Class::CH, Rtype::A, "10.0.0.1", None)
            .is_err());
        let wire = Rdata::from_wire(Class::CH, Rtype::A, b"\x01\x02", 0, 2)
            .unwrap();
        assert!(matches!(wire, Rdata::Unknown(_)));
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(
            Rdata::from_text(Class::IN, Rtype::A, "10.0.0.1 extra", None),
            Err(SyntaxError::TrailingTokens)
        );
    }

    #[test]
    fn wire_with_compression() {
        // A message fragment with example. at 0 and an MX pointing at it.
        let msg = b"\x07example\x00\x00\x0a\x04mail\xc0\x00";
        let mx = Rdata::from_wire(Class::IN, Rtype::MX, msg, 9, 9).unwrap();
        assert_eq!(mx.to_string(), "10 mail.example.");
        assert_eq!(
            Rdata::from_wire(Class::IN, Rtype::MX, msg, 9, 8),
            Err(ParseError::ShortInput)
        );
        assert_eq!(
            Rdata::from_wire(Class::IN, Rtype::A, b"\x01\x02\x03\x04\x05", 0, 5),
            Err(ParseError::BadRdlength)
        );
    }

    #[test]
    fn canonical_form() {
        let origin = name("Example.");
        let mx = Rdata::from_text(Class::IN, Rtype::MX, "10 Mail", Some(&origin))
            .unwrap();
        assert_eq!(
            mx.to_digestable(None).unwrap(),
            b"\x00\x0a\x04mail\x07example\x00"
        );
        let nsec = Rdata::from_text(Class::IN, Rtype::NSEC, "Host.Example. A", None)
            .unwrap();
        assert_eq!(
            &nsec.to_digestable(None).unwrap()[..6],
            b"\x04Host\x07"
        );
    }

    #[test]
    fn compare_and_covers() {
        let a1 = Rdata::from_text(Class::IN, Rtype::A, "10.0.0.1", None).unwrap();
        let a2 = Rdata::from_text(Class::IN, Rtype::A, "10.0.0.2", None).unwrap();
        assert!(a1 < a2);
        assert_eq!(a1.covers(), Rtype::NONE);

        let ns1 = Rdata::from_text(Class::IN, Rtype::NS, "NS.example.", None)
            .unwrap();
        let ns2 = Rdata::from_text(Class::IN, Rtype::NS, "ns.example.", None)
            .unwrap();
        assert_eq!(ns1, ns2);

        let sig = Rdata::from_text(
            Class::IN,
            Rtype::RRSIG,
            "NSEC 8 2 3600 20230101000000 20221201000000 1 example. AQID",
            None,
        )
        .unwrap();
        assert_eq!(sig.covers(), Rtype::NSEC);
        assert_eq!(sig.extended_rtype(), (Rtype::RRSIG, Rtype::NSEC));
    }

    #[test]
    fn relative_names() {
        let ns = Rdata::from_text(Class::IN, Rtype::NS, "ns1", None).unwrap();
        assert_eq!(ns.to_wire(None), Err(ComposeError::RelativeName));
        assert_eq!(
            ns.to_wire(Some(&name("example."))).unwrap(),
            b"\x03ns1\x07example\x00"
        );
        let origin = name("example.");
        let ns = Rdata::from_text(Class::IN, Rtype::NS, "ns1", Some(&origin))
            .unwrap();
        assert_eq!(ns.to_text(Some(&origin), true), "ns1");
        assert_eq!(ns.to_text(None, false), "ns1.example.");
    }

    #[test]
    fn compare_unencodable() {
        use std::collections::HashSet;

        // Relative names of 255 octets cannot take the root label.
        let long = |last: &str| {
            let text = vec!["a".repeat(63); 3].join(".") + "." + last;
            Rdata::from_text(Class::IN, Rtype::NS, &text, None).unwrap()
        };
        let ns1 = long(&"b".repeat(62));
        let ns2 = long(&"c".repeat(62));
        assert!(ns1.to_digestable(Some(&Name::root())).is_err());
        assert_ne!(ns1, ns2);
        assert!(ns1 < ns2);
        assert_eq!(ns1, long(&"b".repeat(62)));

        let short = Rdata::from_text(Class::IN, Rtype::NS, "ns.", None).unwrap();
        assert!(short < ns1);

        let set: HashSet<_> = [ns1, ns2].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}

//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Normal query includes the
    /// type of record information is requested for. A few aditional types,
    /// called query types or meta types, are defined as well and can only be
    /// used in questions or as pseudo records. This type represents all of
    /// them.
    ///
    /// Values without a mnemonic are shown as `TYPE` followed by the
    /// decimal value as defined in [RFC 3597].
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    =>
    Rtype, u16, parse_u16, append_u16;

    /// No type.
    ///
    /// Used as the `covers` value of record sets that aren’t signatures.
    (NONE => 0, "NONE")

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination.
    ///
    /// (Obsolete – use MX)
    (MD => 3, "MD")

    /// A mail forwarder.
    ///
    /// (Obsolete – use MX)
    (MF => 4, "MF")

    /// The canonical name for an alias
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name.
    (MB =>  7, "MB")

    /// A mail group member
    (MG => 8, "MG")

    /// A mail rename domain name.
    (MR => 9, "MR")

    /// A null resource record.
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// For Responsible Person.
    ///
    /// See RFC 1183
    (RP => 17, "RP")

    /// For AFS Data Base location.
    ///
    /// See RFC 1183 and RFC 5864.
    (AFSDB => 18, "AFSDB")

    /// For X.25 PSDN address.
    ///
    /// See RFC 1183.
    (X25 => 19, "X25")

    /// For ISDN address.
    ///
    /// See RFC 1183.
    (ISDN => 20, "ISDN")

    /// For Route Through.
    ///
    /// See RFC 1183
    (RT => 21, "RT")

    /// For SNAP address, NSAP style A record.
    ///
    /// See RFC 1706.
    (NSAP => 22, "NSAP")

    /// For domain name pointer, NSAP style.
    ///
    /// See RFC 1348, RFC 1637, RFC 1706.
    (NSAPPTR => 23, "NSAP-PTR")

    /// For security signature.
    (SIG => 24, "SIG")

    /// For security key.
    (KEY => 25, "KEY")

    /// X.400 mail mapping information.
    ///
    /// See RFC 2163.
    (PX => 26, "PX")

    /// Geographical position.
    ///
    /// See RFC 1712
    (GPOS => 27, "GPOS")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Location information.
    ///
    /// See RFC 1876.
    (LOC => 29, "LOC")

    /// Next domain (obsolete).
    ///
    /// See RFC 3755 and RFC 2535.
    (NXT => 30, "NXT")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// Naming authority pointer.
    ///
    /// See RFC 2915, RFC 2168, and RFC 3403.
    (NAPTR => 35, "NAPTR")

    /// Key exchanger.
    ///
    /// See RFC 2230.
    (KX => 36, "KX")

    /// CERT
    ///
    /// See RFC 4398.
    (CERT => 37, "CERT")

    /// DNAME.
    ///
    /// See RFC 6672.
    (DNAME => 39, "DNAME")

    /// OPT.
    ///
    /// See RFC 6891 and RFC 3225.
    (OPT => 41, "OPT")

    /// APL.
    ///
    /// See RFC 3123.
    (APL => 42, "APL")

    /// Delegation signer.
    ///
    /// See RFC 4034 and RFC 3658.
    (DS => 43, "DS")

    /// SSH key fingerprint.
    ///
    /// See RFC 4255.
    (SSHFP => 44, "SSHFP")

    /// IPSECKEY
    ///
    /// See RFC 4025.
    (IPSECKEY => 45, "IPSECKEY")

    /// RRSIG.
    ///
    /// See RFC 4034 and RFC 3755.
    (RRSIG => 46, "RRSIG")

    /// NSEC.
    ///
    /// See RFC 4034 and RFC 3755.
    (NSEC => 47, "NSEC")

    /// DNSKEY.
    ///
    /// See RFC 4034 and RFC 3755.
    (DNSKEY => 48, "DNSKEY")

    /// DHCID.
    ///
    /// See RFC 4701.
    (DHCID => 49, "DHCID")

    /// NSEC3
    ///
    /// See RFC 5155.
    (NSEC3 => 50, "NSEC3")

    /// NSEC3PARAM.
    ///
    /// See RFC 5155.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLSA.
    ///
    /// See RFC 6698.
    (TLSA => 52, "TLSA")

    /// Host Identity Protocol.
    ///
    /// See RFC 8005.
    (HIP => 55, "HIP")

    /// Child DS.
    ///
    /// See RFC 7344.
    (CDS => 59, "CDS")

    /// DNSKEY(s) the child wants reflected in DS.
    ///
    /// See RFC 7344.
    (CDNSKEY => 60, "CDNSKEY")

    /// Sender Policy Framework.
    ///
    /// See RFC 7208.
    (SPF => 99, "SPF")

    /// An EUI-48 address.
    ///
    /// See RFC 7043.
    (EUI48 => 108, "EUI48")

    /// An EUI-64 address.
    ///
    /// See RFC 7043.
    (EUI64 => 109, "EUI64")

    /// Transaction key.
    ///
    /// See RFC 2930.
    (TKEY => 249, "TKEY")

    /// Transaction signature.
    ///
    /// See RFC 2845.
    (TSIG => 250, "TSIG")

    /// Incremental transfer.
    ///
    /// See RFC 1995.
    (IXFR => 251, "IXFR")

    /// Transfer of entire zone.
    ///
    /// See RFC 1035 and RFC 5936.
    (AXFR => 252, "AXFR")

    /// Mailbox-related RRs (MB, MG, or MR).
    (MAILB => 253, "MAILB")

    /// Mail agent RRS.
    ///
    /// (Obsolete – see MX.)
    (MAILA => 254, "MAILA")

    /// A request for all records the server/cache has available.
    ///
    /// See RFC 1035 and RFC 6895.
    (ANY => 255, "ANY")

    /// URI
    ///
    /// See RFC 7553.
    (URI => 256, "URI")

    /// Certification Authority Restriction.
    ///
    /// See RFC 6844.
    (CAA => 257, "CAA")

    /// DNSSEC Trust Authorities.
    (TA => 32768, "TA")

    /// DNSSEC Lookaside Validation.
    ///
    /// See RFC 4431
    (DLV => 32769, "DLV")
}

int_enum_str_with_prefix!(Rtype, "TYPE", b"TYPE", u16, "unknown record type");

impl Rtype {
    /// Returns whether the type is a meta type.
    ///
    /// Meta types may appear in messages but never in record sets that are
    /// stored anywhere.
    #[must_use]
    pub fn is_metatype(self) -> bool {
        matches!(
            self,
            Rtype::OPT
                | Rtype::TKEY
                | Rtype::TSIG
                | Rtype::IXFR
                | Rtype::AXFR
                | Rtype::MAILB
                | Rtype::MAILA
                | Rtype::ANY
        )
    }

    /// Returns whether a record set of this type holds at most one record.
    #[must_use]
    pub fn is_singleton(self) -> bool {
        matches!(self, Rtype::SOA | Rtype::NXT | Rtype::DNAME | Rtype::NSEC)
    }

    /// Returns whether the type is one of the signature types.
    ///
    /// Record sets of these types carry the type they cover as part of
    /// their identity.
    #[must_use]
    pub fn is_signature(self) -> bool {
        matches!(self, Rtype::RRSIG | Rtype::SIG)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Rtype;
    use core::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(Rtype::from_str("A").unwrap(), Rtype::A);
        assert_eq!(Rtype::from_str("nsap-ptr").unwrap(), Rtype::NSAPPTR);
        assert_eq!(Rtype::from_str("TYPE1").unwrap(), Rtype::A);
        assert_eq!(Rtype::from_str("type999").unwrap(), Rtype::from_int(999));
        assert!(Rtype::from_str("TYPE65536").is_err());
        assert!(Rtype::from_str("TYPE").is_err());
        assert!(Rtype::from_str("TYPE-1").is_err());
        assert!(Rtype::from_str("BOGUS").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Rtype::DNSKEY.to_string(), "DNSKEY");
        assert_eq!(Rtype::from_int(999).to_string(), "TYPE999");
    }

    #[test]
    fn predicates() {
        assert!(Rtype::OPT.is_metatype());
        assert!(Rtype::ANY.is_metatype());
        assert!(!Rtype::A.is_metatype());
        assert!(Rtype::SOA.is_singleton());
        assert!(Rtype::NSEC.is_singleton());
        assert!(!Rtype::NS.is_singleton());
    }
}

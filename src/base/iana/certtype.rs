//! Certificate types for the CERT record.

//------------ CertType ------------------------------------------------------

int_enum! {
    /// Certificate types.
    ///
    /// These values are used in the CERT resource record to describe the
    /// format of the stored certificate. They are defined in [RFC 4398].
    ///
    /// [RFC 4398]: https://tools.ietf.org/html/rfc4398#section-2.1
    =>
    CertType, u16, parse_u16, append_u16;

    /// An X.509 certificate as per PKIX.
    (PKIX => 1, "PKIX")

    /// An SPKI certificate.
    (SPKI => 2, "SPKI")

    /// An OpenPGP packet.
    (PGP => 3, "PGP")

    /// The URL of an X.509 data object.
    (IPKIX => 4, "IPKIX")

    /// The URL of an SPKI certificate.
    (ISPKI => 5, "ISPKI")

    /// The fingerprint and URL of an OpenPGP packet.
    (IPGP => 6, "IPGP")

    /// An attribute certificate.
    (ACPKIX => 7, "ACPKIX")

    /// The URL of an attribute certificate.
    (IACPKIX => 8, "IACPKIX")

    /// A URI private type.
    (URI => 253, "URI")

    /// An OID private type.
    (OID => 254, "OID")
}

int_enum_str_with_decimal!(CertType, u16, "unknown certificate type");

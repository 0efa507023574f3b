//! Delegation signer digest algorithm numbers.

//------------ DigestAlg -----------------------------------------------------

int_enum! {
    /// Delegation signer digest algorithm numbers.
    ///
    /// These numbers are used in the DS resource record to specify how the
    /// key digest in the record has been generated.
    ///
    /// For the currently registered values see the [IANA registration].
    ///
    /// [IANA registration]: https://www.iana.org/assignments/ds-rr-types/ds-rr-types.xhtml#ds-rr-types-1
    =>
    DigestAlg, u8, parse_u8, append_u8;

    /// Specifies that the SHA-1 hash function is used.
    ///
    /// Implementation of this function is currently mandatory.
    (SHA1 => 1, "SHA1")

    /// Specifies that the SHA-256 hash function is used.
    ///
    /// Implementation of this function is currently mandatory.
    (SHA256 => 2, "SHA256")

    /// Specifies that the GOST R 34.11-94 hash function is used.
    (GOST => 3, "GOST")

    /// Specifies that the SHA-384 hash function is used.
    (SHA384 => 4, "SHA384")
}

int_enum_str_with_decimal!(DigestAlg, u8, "unknown digest algorithm");

//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It occupies
    /// four bits of the message header.
    ///
    /// The opcode and its initial set of values are defined in [RFC 1035].
    /// Additional values have been defined over time. All currently assigned
    /// values can be found in the [IANA registry].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-5
    =>
    Opcode, u8, parse_u8, append_u8;

    /// A standard query (0).
    (QUERY => 0, "QUERY")

    /// An inverse query (IQUERY) (1, obsolete).
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")

    /// A NOTIFY query (4).
    ///
    /// See RFC 1996.
    (NOTIFY => 4, "NOTIFY")

    /// An UPDATE query (5).
    ///
    /// See RFC 2136.
    (UPDATE => 5, "UPDATE")
}

int_enum_str_with_decimal!(Opcode, u8, "unknown opcode");

impl Opcode {
    /// Extracts the opcode from the flags field of a message header.
    #[must_use]
    pub fn from_flags(flags: u16) -> Self {
        Opcode(((flags >> 11) & 0x0F) as u8)
    }

    /// Returns the opcode positioned for the flags field of a header.
    #[must_use]
    pub fn to_flags(self) -> u16 {
        (u16::from(self.0) << 11) & 0x7800
    }
}

//============ Tests =========================================================

//! DNS response codes and extended response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of the
//! message header as response code. Later, [RFC 2671][] (now [RFC 6891])
//! added eight bits to the response code to be transmitted as part of the
//! OPT pseudo-resource record. The type [`Rcode`] represents the complete
//! twelve bit code. The TSIG record defined by [RFC 2845] uses a 16 bit
//! error code of its own, represented by [`TsigRcode`].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 2671]: https://tools.ietf.org/html/rfc2671
//! [RFC 2845]: https://tools.ietf.org/html/rfc2845
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the server
    /// when trying to answer the query. The lower four bits live in the
    /// message header, the upper eight bits in the TTL field of the OPT
    /// record if there is one.
    =>
    Rcode, u16, parse_u16, append_u16;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    (REFUSED => 5, "REFUSED")

    /// Name exists when it should not.
    (YXDOMAIN => 6, "YXDOMAIN")

    /// RR set exists when it should not.
    (YXRRSET => 7, "YXRRSET")

    /// RR set that should exist does not.
    (NXRRSET => 8, "NXRRSET")

    /// Server not authoritative for zone or client not authorized.
    (NOTAUTH => 9, "NOTAUTH")

    /// Name not contained in zone.
    (NOTZONE => 10, "NOTZONE")

    /// Bad OPT version.
    (BADVERS => 16, "BADVERS")
}

int_enum_str_with_decimal!(Rcode, u16, "unknown rcode");

impl Rcode {
    /// Assembles the response code from header flags and EDNS flags.
    ///
    /// `ednsflags` is the complete TTL field of the OPT record.
    #[must_use]
    pub fn from_flags(flags: u16, ednsflags: u32) -> Self {
        let value = (flags & 0x000F) | (((ednsflags >> 20) & 0x0FF0) as u16);
        Rcode(value)
    }

    /// Splits the response code into header flags and EDNS flags bits.
    #[must_use]
    pub fn to_flags(self) -> (u16, u32) {
        let value = self.0 & 0x0FFF;
        (value & 0x000F, u32::from(value & 0x0FF0) << 20)
    }
}

//------------ TsigRcode -----------------------------------------------------

int_enum! {
    /// Response codes for transaction authentication (TSIG).
    ///
    /// TSIG uses a sixteen bit error field that shares its name space with
    /// the response codes but adds a few values of its own.
    =>
    TsigRcode, u16, parse_u16, append_u16;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Signature failure.
    (BADSIG => 16, "BADSIG")

    /// Key not recognized.
    (BADKEY => 17, "BADKEY")

    /// Signature out of time window.
    (BADTIME => 18, "BADTIME")

    /// Bad TKEY mode.
    (BADMODE => 19, "BADMODE")

    /// Duplicate key name.
    (BADNAME => 20, "BADNAME")

    /// Algorithm not supported.
    (BADALG => 21, "BADALG")

    /// Bad truncation.
    (BADTRUNC => 22, "BADTRUNC")
}

impl core::fmt::Display for TsigRcode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.to_mnemonic_str() {
            Some(m) => f.write_str(m),
            None => write!(f, "{}", self.to_int()),
        }
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn extended() {
        assert_eq!(Rcode::from_flags(0x8183, 0), Rcode::NXDOMAIN);
        assert_eq!(Rcode::from_flags(0x8180, 0x0100_0000), Rcode::BADVERS);
        assert_eq!(Rcode::BADVERS.to_flags(), (0, 0x0100_0000));
        assert_eq!(Rcode::REFUSED.to_flags(), (5, 0));
    }

    #[test]
    fn text() {
        assert_eq!(Rcode::from_str("nxdomain").unwrap(), Rcode::NXDOMAIN);
        assert_eq!(Rcode::from_str("4095").unwrap(), Rcode::from_int(4095));
        assert_eq!(Rcode::from_int(4000).to_string(), "4000");
        assert_eq!(TsigRcode::BADTIME.to_string(), "BADTIME");
    }
}

//! DNS EDNS0 Option Codes (OPT)

//------------ OptionCode ----------------------------------------------------

int_enum! {
    /// DNS EDNS0 Option Codes (OPT).
    ///
    /// The record data of OPT records is a sequence of options. The type of
    /// each of these options is given through a 16 bit value called the
    /// option code.
    ///
    /// The currently assigned option codes can be found in the
    /// [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-11
    =>
    OptionCode, u16, parse_u16, append_u16;

    (LLQ => 1, "LLQ")
    (UL => 2, "UL")
    (NSID => 3, "NSID")
    (DAU => 5, "DAU")
    (DHU => 6, "DHU")
    (N3U => 7, "N3U")
    (CLIENT_SUBNET => 8, "ECS")
    (EXPIRE => 9, "EXPIRE")
    (COOKIE => 10, "COOKIE")
    (TCP_KEEPALIVE => 11, "KEEPALIVE")
    (PADDING => 12, "PADDING")
    (CHAIN => 13, "CHAIN")
    (KEY_TAG => 14, "KEY-TAG")
}

int_enum_str_with_decimal!(OptionCode, u16, "unknown option code");

//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. That is, each class has its own separate
    /// record tree starting at the root. However, in practice, only the IN
    /// class is really relevant.
    ///
    /// In addition, there are query classes or QCLASSes that are used in
    /// questions or UPDATE queries, namely NONE and ANY.
    ///
    /// Classes are represented by a 16 bit value. Values without a mnemonic
    /// are shown as `CLASS` followed by the decimal value.
    ///
    /// See [RFC 1034] for the introduction of classes, section 3.2 of
    /// [RFC 6895] for a discussion of the current state of afairs, and
    /// the [DNS CLASSes IANA registry] for an overview of assigned values.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [RFC 6895]: https://tools.ietf.org/html/rfc6895
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16, parse_u16, append_u16;

    /// Reserved.
    (RESERVED0 => 0, "RESERVED0")

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")

    /// Chaosnet (CH).
    ///
    /// A network protocol developed at MIT in the 1970s. Reused by BIND for
    /// built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    ///
    /// A system information protocol part of MIT's Project Athena.
    (HS => 4, "HS")

    /// Query class None.
    ///
    /// Defined in RFC 2136, this class is used in UPDATE queries to
    /// require that an RRset does not exist prior to the update.
    (NONE => 0xFE, "NONE")

    /// Query class ANY.
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, "ANY")
}

int_enum_str_with_prefix!(Class, "CLASS", b"CLASS", u16, "unknown class");

impl Class {
    /// Returns whether the class is a meta class.
    ///
    /// Meta classes only appear in questions and update messages.
    #[must_use]
    pub fn is_metaclass(self) -> bool {
        matches!(self, Class::NONE | Class::ANY)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Class;
    use core::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(Class::from_str("in").unwrap(), Class::IN);
        assert_eq!(Class::from_str("ANY").unwrap(), Class::ANY);
        assert_eq!(Class::from_str("CLASS3").unwrap(), Class::CH);
        assert_eq!(
            Class::from_str("CLASS4711").unwrap(),
            Class::from_int(4711)
        );
        assert!(Class::from_str("CLASS70000").is_err());
        assert!(Class::from_str("IX").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Class::IN.to_string(), "IN");
        assert_eq!(Class::from_int(42).to_string(), "CLASS42");
    }

    #[test]
    fn predicates() {
        assert!(Class::ANY.is_metaclass());
        assert!(Class::NONE.is_metaclass());
        assert!(!Class::IN.is_metaclass());
    }
}

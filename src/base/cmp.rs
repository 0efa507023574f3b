//! Canonical ordering.
//!
//! DNSSEC needs a well-defined order of the records within an RRset when
//! constructing the data a signature is calculated over. This order differs
//! from what the normal `Ord` implementations of some types provide, so it
//! gets a trait of its own.

use core::cmp::Ordering;

/// A trait for the canonical sort order of values.
///
/// Canonical order is defined in [RFC 4034] and clarified in [RFC 6840].
///
/// For domain names, canonical order is the same as the normal order:
/// labels are compared from right to left with each pair of labels
/// compared as octet sequences with ASCII letters lowercased.
///
/// Record data within an RRset is ordered by comparing its canonical wire
/// format as octet sequences. The canonical form lowercases domain names
/// embedded in the record data of the types NS, MD, MF, CNAME, SOA, MB,
/// MG, MR, PTR, MINFO, MX, RP, AFSDB, RT, SIG, PX, NXT, NAPTR, KX, SRV,
/// DNAME, and RRSIG. NSEC is listed in RFC 4034 but has been withdrawn
/// by RFC 6840.
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
/// [RFC 6840]: https://tools.ietf.org/html/rfc6840
pub trait CanonicalOrd<Rhs: ?Sized = Self> {
    /// Returns the canonical ordering between `self` and `other`.
    #[must_use]
    fn canonical_cmp(&self, other: &Rhs) -> Ordering;

    /// Returns whether `self` is canonically less than `other`.
    #[inline]
    #[must_use]
    fn canonical_lt(&self, other: &Rhs) -> bool {
        matches!(self.canonical_cmp(other), Ordering::Less)
    }

    /// Returns whether `self` is canonically less than or equal to `other`.
    #[inline]
    #[must_use]
    fn canonical_le(&self, other: &Rhs) -> bool {
        matches!(
            self.canonical_cmp(other),
            Ordering::Less | Ordering::Equal
        )
    }
}

impl CanonicalOrd for super::name::Name {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.fullcompare(other).1
    }
}

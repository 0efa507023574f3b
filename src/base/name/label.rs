//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::NameError;
use crate::base::scan::Symbol;
use crate::base::wire::Composer;
use core::{cmp, fmt, hash, mem};

//------------ Label ---------------------------------------------------------

/// An octets slice with the content of a domain name label.
///
/// This is an unsized type wrapping the content of a valid label, that is,
/// up to 63 octets. It only contains the label’s content, not the length
/// octet it is preceded by in wire format. The empty label is the root
/// label.
///
/// [`Label`] differs from an octets slice in how it compares: as labels are
/// to be case-insensitive, all the comparison traits as well as `Hash` are
/// implemented ignoring ASCII-case.
#[repr(transparent)]
pub struct Label([u8]);

/// # Creation
///
impl Label {
    /// Domain name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Creates a label from the underlying slice without any checking.
    ///
    /// # Safety
    ///
    /// The `slice` must be at most 63 octets long.
    pub(super) unsafe fn from_slice_unchecked(slice: &[u8]) -> &Self {
        // SAFETY: Label has repr(transparent)
        mem::transmute(slice)
    }

    /// Returns a static reference to the root label.
    pub fn root() -> &'static Self {
        unsafe { Self::from_slice_unchecked(b"") }
    }

    /// Returns a static reference to the wildcard label `*`.
    pub fn wildcard() -> &'static Self {
        unsafe { Self::from_slice_unchecked(b"*") }
    }

    /// Converts an octets slice into a label.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, NameError> {
        if slice.len() > Label::MAX_LEN {
            Err(NameError::LabelTooLong)
        } else {
            Ok(unsafe { Self::from_slice_unchecked(slice) })
        }
    }
}

/// # Properties and Conversion
///
impl Label {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether this is the root label.
    pub fn is_root(&self) -> bool {
        self.is_empty()
    }

    /// Returns whether the label is the wildcard label.
    pub fn is_wildcard(&self) -> bool {
        self.0.len() == 1 && self.0[0] == b'*'
    }

    /// Appends the label with its length octet to `target`.
    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_u8(self.len() as u8);
        target.append_slice(self.as_slice())
    }

    /// Appends the lowercase version of the label to `target`.
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        target.append_u8(self.len() as u8);
        for ch in self.as_slice() {
            target.append_u8(ch.to_ascii_lowercase())
        }
    }

    /// Writes the label in presentation format, escaping where necessary.
    pub fn write_text(&self, target: &mut impl fmt::Write) -> fmt::Result {
        for &ch in self.as_slice() {
            write!(target, "{}", Symbol::from_octet(ch))?;
        }
        Ok(())
    }
}

//--- AsRef

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq and Eq

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_slice())
    }
}

impl Eq for Label {}

//--- PartialOrd and Ord

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    /// Returns the canonical ordering between `self` and `other`.
    ///
    /// Labels are ordered like octet strings except that the case of ASCII
    /// letters is ignored. See section 6.1 of RFC 4034.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice()
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.as_slice().iter().map(u8::to_ascii_lowercase))
    }
}

//--- Hash

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (self.len() as u8).hash(state);
        for c in self.as_slice() {
            c.to_ascii_lowercase().hash(state)
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_text(f)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels of a name in wire format.
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    octets: &'a [u8],
    pos: usize,
}

impl<'a> LabelIter<'a> {
    /// Creates an iterator over an uncompressed, valid label sequence.
    pub(super) fn new(octets: &'a [u8]) -> Self {
        LabelIter { octets, pos: 0 }
    }

    /// Returns the offset of the next label in the underlying octets.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let len = usize::from(*self.octets.get(self.pos)?);
        let start = self.pos + 1;
        let label = self.octets.get(start..start + len)?;
        self.pos = start + len;
        Some(unsafe { Label::from_slice_unchecked(label) })
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compare() {
        let a = Label::from_slice(b"Foo").unwrap();
        let b = Label::from_slice(b"fOO").unwrap();
        assert_eq!(a, b);
        assert!(Label::from_slice(b"a").unwrap() < a);
        assert!(a < Label::from_slice(b"fooa").unwrap());
        assert!(Label::root() < Label::wildcard());
    }

    #[test]
    fn too_long() {
        assert!(Label::from_slice(&[b'a'; 63]).is_ok());
        assert_eq!(
            Label::from_slice(&[b'a'; 64]).err(),
            Some(NameError::LabelTooLong)
        );
    }

    #[test]
    fn display() {
        let label = Label::from_slice(b"a.b\\c d\x7f@").unwrap();
        assert_eq!(label.to_string(), "a\\.b\\\\c\\032d\\127\\@");
        assert!(Label::wildcard().is_wildcard());
    }

    #[test]
    fn iter() {
        let labels: Vec<_> = LabelIter::new(b"\x03www\x07example\x00")
            .map(|label| label.as_slice().to_vec())
            .collect();
        assert_eq!(labels, [&b"www"[..], b"example", b""]);
    }
}

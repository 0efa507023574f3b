//! Domain names.
//!
//! A domain name is a sequence of labels. Names ending in the empty root
//! label are absolute, all other names are relative. Relative names need
//! to be made absolute through an origin before they can appear on the
//! wire.
//!
//! [`Name`] keeps the name in uncompressed wire format. Comparison,
//! ordering, and hashing ignore ASCII case and follow the canonical DNS
//! name order defined in section 6.1 of [RFC 4034], which compares names
//! label by label starting with the rightmost one.
//!
//! Names are created from presentation format via [`Name::from_text`],
//! from wire format via [`Name::parse`] or [`Name::from_wire`], or from
//! other names through [`Name::concatenate`], [`Name::relativize`], and
//! friends.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

pub use self::builder::NameBuilder;
pub use self::label::{Label, LabelIter};

use super::scan::{Symbol, Symbols};
use super::wire::{ComposeError, Composer, ParseError, Parser};
use core::cmp::Ordering;
use core::str::FromStr;
use core::{fmt, hash};

mod builder;
mod label;

//------------ NameRelation --------------------------------------------------

/// How two names relate to each other in the name space.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NameRelation {
    /// The names have nothing in common.
    None,

    /// The first name is a proper ancestor of the second.
    Superdomain,

    /// The first name is a proper descendant of the second.
    Subdomain,

    /// The names are equal.
    Equal,

    /// The names share at least one label but neither contains the other.
    CommonAncestor,
}

//------------ Name ----------------------------------------------------------

/// A domain name, either absolute or relative.
#[derive(Clone)]
pub struct Name {
    /// The name in uncompressed wire format.
    octets: Vec<u8>,
}

/// # Creation
///
impl Name {
    /// The maximum length of a name in wire format.
    pub const MAX_LEN: usize = 255;

    /// Wraps octets that are known to hold a valid label sequence.
    pub(crate) fn from_octets_unchecked(octets: Vec<u8>) -> Self {
        Name { octets }
    }

    /// Creates a name from its uncompressed wire format.
    ///
    /// The octets must be a sequence of labels where only the last one may
    /// be the root label.
    pub fn from_octets(octets: Vec<u8>) -> Result<Self, NameError> {
        if octets.len() > Self::MAX_LEN {
            return Err(NameError::NameTooLong);
        }
        let mut pos = 0;
        while pos < octets.len() {
            let len = usize::from(octets[pos]);
            if len > Label::MAX_LEN {
                return Err(NameError::LabelTooLong);
            }
            if len == 0 && pos + 1 != octets.len() {
                return Err(NameError::EmptyLabel);
            }
            pos += len + 1;
        }
        if pos != octets.len() {
            return Err(NameError::LabelTooLong);
        }
        Ok(Name { octets })
    }

    /// Returns the root name.
    pub fn root() -> Self {
        Name { octets: vec![0] }
    }

    /// Returns the empty relative name.
    pub fn empty() -> Self {
        Name { octets: Vec::new() }
    }

    /// Creates a name from a sequence of labels.
    ///
    /// An empty label is only allowed as the last label, making the name
    /// absolute.
    pub fn from_labels<I, L>(labels: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut builder = NameBuilder::new();
        let mut absolute = false;
        for label in labels {
            if absolute {
                return Err(NameError::EmptyLabel);
            }
            let label = label.as_ref();
            if label.is_empty() {
                absolute = true;
            } else {
                builder.append_label(label)?;
            }
        }
        if absolute {
            builder.into_absolute()
        } else {
            builder.into_relative()
        }
    }

    /// Creates a name from its presentation format.
    ///
    /// A backslash followed by three decimal digits encodes the octet of
    /// that value, a backslash followed by any other character stands for
    /// that character itself. A single `@` stands for the empty name.
    ///
    /// If the name is not absolute and `origin` is given, the origin is
    /// appended to it.
    pub fn from_text(
        text: &str,
        origin: Option<&Name>,
    ) -> Result<Self, NameError> {
        let text = if text == "@" { "" } else { text };
        if text == "." {
            return Ok(Name::root());
        }
        let mut builder = NameBuilder::new();
        let mut absolute = false;
        for symbol in Symbols::new(text.chars()) {
            let symbol = symbol.map_err(|_| NameError::BadEscape)?;
            absolute = false;
            match symbol {
                Symbol::Char('.') => {
                    builder.end_label()?;
                    absolute = true;
                }
                Symbol::Char(ch) => {
                    let mut buf = [0u8; 4];
                    for &octet in ch.encode_utf8(&mut buf).as_bytes() {
                        builder.push(octet)?;
                    }
                }
                Symbol::SimpleEscape(ch) | Symbol::DecimalEscape(ch) => {
                    builder.push(ch)?
                }
            }
        }
        if absolute {
            return builder.into_absolute();
        }
        let name = builder.into_relative()?;
        match origin {
            Some(origin) => name.concatenate(origin),
            None => Ok(name),
        }
    }

    /// Reads a possibly compressed name from wire format.
    ///
    /// Compression pointers are resolved against the complete buffer of
    /// the parser. Each pointer must point to a position before the
    /// previous one, the first one before the start of the name.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut octets = Vec::new();
        let buf = parser.buffer();
        let mut biggest_pointer = parser.pos();

        // Labels up to the first pointer are read through the parser.
        let mut pos = loop {
            let len = parser.parse_u8()?;
            match len {
                0 => {
                    octets.push(0);
                    return Self::check_parsed(octets);
                }
                1..=63 => {
                    octets.push(len);
                    octets.extend_from_slice(
                        parser.parse_octets(usize::from(len))?,
                    );
                    if octets.len() > Self::MAX_LEN {
                        return Err(ParseError::NameTooLong);
                    }
                }
                0xC0..=0xFF => {
                    break (usize::from(len & 0x3F) << 8)
                        | usize::from(parser.parse_u8()?);
                }
                _ => return Err(ParseError::BadLabelType),
            }
        };

        // From there on we follow pointers through the whole buffer.
        loop {
            if pos >= biggest_pointer {
                return Err(ParseError::BadPointer);
            }
            biggest_pointer = pos;
            loop {
                let len = buf.byte_at(pos)?;
                match len {
                    0 => {
                        octets.push(0);
                        return Self::check_parsed(octets);
                    }
                    1..=63 => {
                        let start = pos + 1;
                        let end = start + usize::from(len);
                        octets.push(len);
                        octets.extend_from_slice(buf.slice(start, end)?);
                        if octets.len() > Self::MAX_LEN {
                            return Err(ParseError::NameTooLong);
                        }
                        pos = end;
                    }
                    0xC0..=0xFF => {
                        pos = (usize::from(len & 0x3F) << 8)
                            | usize::from(buf.byte_at(pos + 1)?);
                        break;
                    }
                    _ => return Err(ParseError::BadLabelType),
                }
            }
        }
    }

    fn check_parsed(octets: Vec<u8>) -> Result<Self, ParseError> {
        if octets.len() > Self::MAX_LEN {
            Err(ParseError::NameTooLong)
        } else {
            Ok(Name { octets })
        }
    }

    /// Reads a name from `message` starting at `offset`.
    ///
    /// Returns the name and the number of octets it occupies at `offset`,
    /// which for a compressed name ends after the first pointer.
    pub fn from_wire(
        message: &[u8],
        offset: usize,
    ) -> Result<(Self, usize), ParseError> {
        let mut parser = Parser::new(message);
        parser.seek(offset)?;
        let name = Self::parse(&mut parser)?;
        Ok((name, parser.pos() - offset))
    }
}

/// # Properties
///
impl Name {
    /// Returns the uncompressed wire format of the name.
    ///
    /// For a relative name, this is the sequence of its labels.
    pub fn as_wire(&self) -> &[u8] {
        &self.octets
    }

    /// Returns the length of the wire format of the name.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether this is the empty relative name.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.octets == [0]
    }

    /// Returns whether the name ends with the root label.
    pub fn is_absolute(&self) -> bool {
        self.labels().last().map_or(false, Label::is_root)
    }

    /// Returns whether the first label is the wildcard label `*`.
    pub fn is_wild(&self) -> bool {
        self.labels().next().map_or(false, Label::is_wildcard)
    }

    /// Returns an iterator over the labels, starting with the leftmost.
    pub fn labels(&self) -> LabelIter {
        LabelIter::new(&self.octets)
    }

    /// Returns the number of labels including the root label.
    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// Returns the offsets of the labels in the wire format.
    pub fn label_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        let mut iter = self.labels();
        core::iter::from_fn(move || {
            let offset = iter.offset();
            iter.next().map(|_| offset)
        })
    }

    /// Returns the name made up of the labels starting at `offset`.
    ///
    /// The offset must be one returned by [`label_offsets`].
    ///
    /// [`label_offsets`]: Self::label_offsets
    pub(crate) fn suffix_at(&self, offset: usize) -> Name {
        Name::from_octets_unchecked(self.octets[offset..].to_vec())
    }
}

/// # Comparison
///
impl Name {
    /// Compares two names returning their relation, order, and the number
    /// of labels they have in common.
    ///
    /// An absolute name never relates to a relative name and always
    /// sorts after it.
    pub fn fullcompare(
        &self,
        other: &Name,
    ) -> (NameRelation, Ordering, usize) {
        let self_abs = self.is_absolute();
        let other_abs = other.is_absolute();
        if self_abs != other_abs {
            let order = if self_abs {
                Ordering::Greater
            } else {
                Ordering::Less
            };
            return (NameRelation::None, order, 0);
        }
        let left: Vec<_> = self.labels().collect();
        let right: Vec<_> = other.labels().collect();
        let mut common = 0;
        for (l, r) in left.iter().rev().zip(right.iter().rev()) {
            let order = l.cmp(r);
            if order != Ordering::Equal {
                let relation = if common > 0 {
                    NameRelation::CommonAncestor
                } else {
                    NameRelation::None
                };
                return (relation, order, common);
            }
            common += 1;
        }
        let order = left.len().cmp(&right.len());
        let relation = match order {
            Ordering::Less => NameRelation::Superdomain,
            Ordering::Greater => NameRelation::Subdomain,
            Ordering::Equal => NameRelation::Equal,
        };
        (relation, order, common)
    }

    /// Returns whether `self` is equal to or a descendant of `other`.
    pub fn is_subdomain(&self, other: &Name) -> bool {
        matches!(
            self.fullcompare(other).0,
            NameRelation::Subdomain | NameRelation::Equal
        )
    }

    /// Returns whether `self` is equal to or an ancestor of `other`.
    pub fn is_superdomain(&self, other: &Name) -> bool {
        matches!(
            self.fullcompare(other).0,
            NameRelation::Superdomain | NameRelation::Equal
        )
    }
}

/// # Transformation
///
impl Name {
    /// Returns the name with all ASCII letters in lowercase.
    pub fn canonicalize(&self) -> Name {
        let mut octets = self.octets.clone();
        octets.make_ascii_lowercase();
        Name { octets }
    }

    /// Appends `other` to `self`.
    ///
    /// Fails if `self` is absolute and `other` is not empty.
    pub fn concatenate(&self, other: &Name) -> Result<Name, NameError> {
        if self.is_absolute() && !other.is_empty() {
            return Err(NameError::AbsoluteConcatenation);
        }
        let mut octets = Vec::with_capacity(self.len() + other.len());
        octets.extend_from_slice(&self.octets);
        octets.extend_from_slice(&other.octets);
        if octets.len() > Self::MAX_LEN {
            return Err(NameError::NameTooLong);
        }
        Ok(Name { octets })
    }

    /// Returns the name relative to `origin`.
    ///
    /// If `self` is not a subdomain of `origin`, it is returned unchanged.
    pub fn relativize(&self, origin: &Name) -> Name {
        if !origin.is_empty() && self.is_subdomain(origin) {
            Name {
                octets: self.octets[..self.len() - origin.len()].to_vec(),
            }
        } else {
            self.clone()
        }
    }

    /// Makes a relative name absolute by appending `origin`.
    pub fn derelativize(&self, origin: &Name) -> Result<Name, NameError> {
        if self.is_absolute() {
            Ok(self.clone())
        } else {
            self.concatenate(origin)
        }
    }

    /// Relativizes or derelativizes the name depending on `relativize`.
    ///
    /// Without an origin, the name is returned as is.
    pub fn choose_relativity(
        &self,
        origin: Option<&Name>,
        relativize: bool,
    ) -> Result<Name, NameError> {
        match origin {
            Some(origin) if relativize => Ok(self.relativize(origin)),
            Some(origin) => self.derelativize(origin),
            None => Ok(self.clone()),
        }
    }

    /// Splits the name into a prefix and a suffix of `depth` labels.
    pub fn split(&self, depth: usize) -> Result<(Name, Name), NameError> {
        let count = self.label_count();
        if depth > count {
            return Err(NameError::BadDepth);
        }
        let offset = if depth == count {
            0
        } else {
            self.label_offsets().nth(count - depth).unwrap_or(self.len())
        };
        Ok((
            Name {
                octets: self.octets[..offset].to_vec(),
            },
            Name {
                octets: self.octets[offset..].to_vec(),
            },
        ))
    }

    /// Returns the name with the leftmost label removed.
    pub fn parent(&self) -> Result<Name, NameError> {
        if self.is_root() || self.is_empty() {
            return Err(NameError::NoParent);
        }
        let offset = self.label_offsets().nth(1).unwrap_or(self.len());
        Ok(Name {
            octets: self.octets[offset..].to_vec(),
        })
    }
}

/// # Wire Format
///
impl Name {
    /// Appends the name to `target` using name compression if available.
    ///
    /// A relative name is made absolute with `origin` first. Without an
    /// origin, it cannot be composed.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        origin: Option<&Name>,
    ) -> Result<(), ComposeError> {
        match self.absolute_with(origin)? {
            Some(name) => target.append_compressed_name(&name),
            None => target.append_compressed_name(self),
        }
    }

    /// Appends the name to `target` without compression.
    pub fn compose_uncompressed<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        origin: Option<&Name>,
    ) -> Result<(), ComposeError> {
        match self.absolute_with(origin)? {
            Some(name) => target.append_slice(name.as_wire()),
            None => target.append_slice(self.as_wire()),
        }
        Ok(())
    }

    /// Appends the lowercased, uncompressed name to `target`.
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        origin: Option<&Name>,
    ) -> Result<(), ComposeError> {
        let name = self.absolute_with(origin)?;
        for label in name.as_ref().unwrap_or(self).labels() {
            label.compose_canonical(target)
        }
        Ok(())
    }

    /// Returns the canonical wire format of an absolute name.
    pub fn to_digestable(
        &self,
        origin: Option<&Name>,
    ) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(Self::MAX_LEN);
        self.compose_canonical(&mut res, origin)?;
        Ok(res)
    }

    /// Returns the absolute name if different from `self`.
    fn absolute_with(
        &self,
        origin: Option<&Name>,
    ) -> Result<Option<Name>, ComposeError> {
        if self.is_absolute() {
            return Ok(None);
        }
        match origin {
            Some(origin) if origin.is_absolute() => self
                .concatenate(origin)
                .map(Some)
                .map_err(|_| ComposeError::LongData),
            _ => Err(ComposeError::RelativeName),
        }
    }
}

/// # Presentation Format
///
impl Name {
    /// Returns the presentation format of the name.
    ///
    /// The empty name is `@`, the root name is `.`. If `omit_final_dot`
    /// is true, absolute names are written without the trailing dot.
    pub fn to_text(&self, omit_final_dot: bool) -> String {
        let mut res = String::new();
        // Writing into a String never fails.
        let _ = self.write_text(&mut res, omit_final_dot);
        res
    }

    fn write_text(
        &self,
        target: &mut impl fmt::Write,
        omit_final_dot: bool,
    ) -> fmt::Result {
        if self.is_empty() {
            return target.write_str("@");
        }
        if self.is_root() {
            return target.write_str(".");
        }
        let mut first = true;
        for label in self.labels() {
            if label.is_root() {
                if !omit_final_dot {
                    target.write_str(".")?;
                }
                break;
            }
            if !first {
                target.write_str(".")?;
            }
            first = false;
            label.write_text(target)?;
        }
        Ok(())
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = NameError;

    /// Parses a name relative to the root, i.e., always absolute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::from_text(s, Some(&Name::root()))
    }
}

//--- PartialEq and Eq

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.octets.eq_ignore_ascii_case(&other.octets)
    }
}

impl Eq for Name {}

//--- PartialOrd and Ord

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fullcompare(other).1
    }
}

//--- Hash

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for label in self.labels() {
            label.hash(state)
        }
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_text(f, false)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//============ Error Types ===================================================

//------------ NameError -----------------------------------------------------

/// A domain name could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// An empty label appeared other than at the end.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LabelTooLong,

    /// The name was longer than 255 octets.
    NameTooLong,

    /// An escape sequence was malformed.
    BadEscape,

    /// Something was appended to an absolute name.
    AbsoluteConcatenation,

    /// The root or empty name has no parent.
    NoParent,

    /// A split depth exceeded the number of labels.
    BadDepth,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameError::EmptyLabel => "empty label",
            NameError::LabelTooLong => "label too long",
            NameError::NameTooLong => "name too long",
            NameError::BadEscape => "bad escape sequence",
            NameError::AbsoluteConcatenation => {
                "cannot append to an absolute name"
            }
            NameError::NoParent => "name has no parent",
            NameError::BadDepth => "split depth out of range",
        })
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> Name {
        Name::from_text(s, None).unwrap()
    }

    fn label_vec(name: &Name) -> Vec<Vec<u8>> {
        name.labels().map(|l| l.as_slice().to_vec()).collect()
    }

    #[test]
    fn from_text_absolute() {
        let n = name("foo.bar.");
        assert_eq!(label_vec(&n), [&b"foo"[..], b"bar", b""]);
        assert!(n.is_absolute());
        assert!(!name("foo.bar").is_absolute());
    }

    #[test]
    fn from_text_origin() {
        let origin = name("example.");
        let n = Name::from_text("FOO.bar", Some(&origin)).unwrap();
        assert_eq!(
            label_vec(&n.canonicalize()),
            [&b"foo"[..], b"bar", b"example", b""]
        );
        assert_eq!(Name::from_text("@", Some(&origin)).unwrap(), origin);
        assert_eq!(Name::from_text("", Some(&origin)).unwrap(), origin);
        assert_eq!(Name::from_text("@", None).unwrap(), Name::empty());
        assert!(Name::from_text(".", Some(&origin)).unwrap().is_root());
        assert_eq!(
            Name::from_text("a.", Some(&origin)).unwrap().as_wire(),
            b"\x01a\x00"
        );
    }

    #[test]
    fn from_text_escapes() {
        assert_eq!(name("a\\.b.").as_wire(), b"\x03a.b\x00");
        assert_eq!(name("\\065\\066.").as_wire(), b"\x02AB\x00");
        assert_eq!(Name::from_text("a\\6", None), Err(NameError::BadEscape));
        assert_eq!(Name::from_text("a\\", None), Err(NameError::BadEscape));
        assert_eq!(Name::from_text("a\\256", None), Err(NameError::BadEscape));
    }

    #[test]
    fn from_text_errors() {
        assert_eq!(Name::from_text("a..b", None), Err(NameError::EmptyLabel));
        assert_eq!(Name::from_text(".a", None), Err(NameError::EmptyLabel));
        let long = "a".repeat(64);
        assert_eq!(
            Name::from_text(&long, None),
            Err(NameError::LabelTooLong)
        );
        let long = vec!["a".repeat(63); 4].join(".") + ".";
        assert_eq!(Name::from_text(&long, None), Err(NameError::NameTooLong));
    }

    #[test]
    fn to_text() {
        assert_eq!(Name::empty().to_text(false), "@");
        assert_eq!(Name::root().to_text(false), ".");
        assert_eq!(name("www.example.com.").to_text(false), "www.example.com.");
        assert_eq!(name("www.example.com.").to_text(true), "www.example.com");
        assert_eq!(name("www.example").to_text(false), "www.example");
        assert_eq!(
            name("a\\.b\\032\\@\\$\\\"\\(\\)\\;\\\\.").to_string(),
            "a\\.b\\032\\@\\$\\\"\\(\\)\\;\\\\."
        );
    }

    #[test]
    fn from_wire_pointers() {
        let msg = b"\x03foo\x00\x03bar\xC0\x00";
        let (n, used) = Name::from_wire(msg, 5).unwrap();
        assert_eq!(n, name("bar.foo."));
        assert_eq!(used, 6);

        // Pointer to itself.
        assert_eq!(
            Name::from_wire(b"\x03foo\xC0\x04", 4).err(),
            Some(ParseError::BadPointer)
        );
        // Forward pointer.
        assert_eq!(
            Name::from_wire(b"\xC0\x02\x00", 0).err(),
            Some(ParseError::BadPointer)
        );
        // Loop through two pointers.
        assert_eq!(
            Name::from_wire(b"\x01a\xC0\x04\xC0\x00", 4).err(),
            Some(ParseError::BadPointer)
        );
        assert_eq!(
            Name::from_wire(b"\x40abc", 0).err(),
            Some(ParseError::BadLabelType)
        );
        assert_eq!(
            Name::from_wire(b"\x03fo", 0).err(),
            Some(ParseError::ShortInput)
        );
    }

    #[test]
    fn fullcompare() {
        let root = Name::root();
        let a = name("a.example.");
        let b = name("b.example.");
        let example = name("example.");
        assert_eq!(
            Name::empty().fullcompare(&root),
            (NameRelation::None, Ordering::Less, 0)
        );
        assert_eq!(
            a.fullcompare(&b),
            (NameRelation::CommonAncestor, Ordering::Less, 2)
        );
        assert_eq!(
            a.fullcompare(&example),
            (NameRelation::Subdomain, Ordering::Greater, 2)
        );
        assert_eq!(
            example.fullcompare(&a),
            (NameRelation::Superdomain, Ordering::Less, 2)
        );
        assert_eq!(
            name("A.EXAMPLE.").fullcompare(&a),
            (NameRelation::Equal, Ordering::Equal, 3)
        );
        assert_eq!(
            name("com.").fullcompare(&name("org.")),
            (NameRelation::CommonAncestor, Ordering::Less, 1)
        );
        assert_eq!(
            name("a").fullcompare(&name("b")),
            (NameRelation::None, Ordering::Less, 0)
        );
        assert!(a.is_subdomain(&a));
        assert!(a.is_subdomain(&root));
        assert!(root.is_superdomain(&a));
    }

    #[test]
    fn canonical_order() {
        // The example from RFC 4034, section 6.1.
        let mut names: Vec<_> = [
            "\\200.z.example.",
            "zABC.a.EXAMPLE.",
            "*.z.example.",
            "example.",
            "z.example.",
            "yljkjljk.a.example.",
            "\\001.z.example.",
            "a.example.",
            "Z.a.example.",
        ]
        .iter()
        .map(|s| name(s))
        .collect();
        names.sort();
        let sorted: Vec<_> = names.iter().map(|n| n.to_string()).collect();
        assert_eq!(
            sorted,
            [
                "example.",
                "a.example.",
                "yljkjljk.a.example.",
                "Z.a.example.",
                "zABC.a.EXAMPLE.",
                "z.example.",
                "\\001.z.example.",
                "*.z.example.",
                "\\200.z.example.",
            ]
        );
    }

    #[test]
    fn relativity() {
        let origin = name("example.");
        let www = name("www.example.");
        assert_eq!(www.relativize(&origin), name("www"));
        assert_eq!(origin.relativize(&origin), Name::empty());
        assert_eq!(name("www.other.").relativize(&origin), name("www.other."));
        assert_eq!(name("www").derelativize(&origin).unwrap(), www);
        assert_eq!(
            www.choose_relativity(Some(&origin), true).unwrap(),
            name("www")
        );
        assert_eq!(
            name("www").choose_relativity(Some(&origin), false).unwrap(),
            www
        );
        assert_eq!(
            www.concatenate(&name("a")),
            Err(NameError::AbsoluteConcatenation)
        );
        assert_eq!(www.concatenate(&Name::empty()).unwrap(), www);
    }

    #[test]
    fn split_and_parent() {
        let n = name("a.b.c.");
        assert_eq!(n.split(2).unwrap(), (name("a.b"), name("c.")));
        assert_eq!(n.split(0).unwrap(), (n.clone(), Name::empty()));
        assert_eq!(n.split(4).unwrap(), (Name::empty(), n.clone()));
        assert_eq!(n.split(5), Err(NameError::BadDepth));
        assert_eq!(n.parent().unwrap(), name("b.c."));
        assert_eq!(Name::root().parent(), Err(NameError::NoParent));
        assert_eq!(Name::empty().parent(), Err(NameError::NoParent));
        assert!(name("*.a.").is_wild());
        assert!(!name("a.*.").is_wild());
    }

    #[test]
    fn compose() {
        let mut target = Vec::new();
        name("www")
            .compose(&mut target, Some(&name("Example.")))
            .unwrap();
        assert_eq!(target, b"\x03www\x07Example\x00");
        assert_eq!(
            name("www").compose(&mut target, None),
            Err(ComposeError::RelativeName)
        );
        assert_eq!(
            name("WWW.Example.").to_digestable(None).unwrap(),
            b"\x03www\x07example\x00"
        );
    }

    #[test]
    fn hash_ignores_case() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(name("Example.COM."));
        assert!(set.contains(&name("example.com.")));
    }
}

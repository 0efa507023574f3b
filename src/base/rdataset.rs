//! Sets of record data.
//!
//! An [`Rdataset`] collects record data of the same class and type
//! together with a single TTL. Signature record sets also share the type
//! their signatures cover. The members of a set are unique: adding data
//! that is already present has no effect.
//!
//! Record sets are not bound to an owner name. The [`Rrset`] type in the
//! sibling module adds that.
//!
//! [`Rrset`]: super::rrset::Rrset

use super::iana::{Class, Rtype};
use super::name::Name;
use super::scan::{SyntaxError, Tokenizer};
use super::wire::{compose_len_prefixed, ComposeError, Composer};
use crate::rdata::Rdata;
use core::fmt;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::trace;

//------------ Rdataset ------------------------------------------------------

/// A set of record data of the same class and type.
#[derive(Clone, Debug)]
pub struct Rdataset {
    rdclass: Class,
    rtype: Rtype,
    covers: Rtype,
    ttl: u32,
    rdatas: Vec<Rdata>,
}

/// # Creation and Access
///
impl Rdataset {
    /// Creates a new, empty set.
    ///
    /// The `covers` type is only relevant for the signature types SIG and
    /// RRSIG and should be [`Rtype::NONE`] otherwise.
    pub fn new(rdclass: Class, rtype: Rtype, covers: Rtype) -> Self {
        Rdataset {
            rdclass,
            rtype,
            covers,
            ttl: 0,
            rdatas: Vec::new(),
        }
    }

    /// Creates a set from record data.
    ///
    /// The type of the set is taken from the first item. Fails if `rdatas`
    /// is empty or the items have differing types.
    pub fn from_rdatas(
        rdclass: Class,
        ttl: u32,
        rdatas: impl IntoIterator<Item = Rdata>,
    ) -> Result<Self, RdatasetError> {
        let mut rdatas = rdatas.into_iter().peekable();
        let (rtype, covers) = rdatas
            .peek()
            .map(Rdata::extended_rtype)
            .ok_or(RdatasetError::Empty)?;
        let mut res = Rdataset::new(rdclass, rtype, covers);
        for rdata in rdatas {
            res.add(rdata, Some(ttl))?;
        }
        Ok(res)
    }

    /// Creates a set from record data in presentation format.
    pub fn from_text<'a>(
        rdclass: Class,
        rtype: Rtype,
        ttl: u32,
        texts: impl IntoIterator<Item = &'a str>,
        origin: Option<&Name>,
    ) -> Result<Self, RdatasetError> {
        let mut res = Rdataset::new(rdclass, rtype, Rtype::NONE);
        for text in texts {
            let rdata = Rdata::scan(
                rdclass,
                rtype,
                &mut Tokenizer::new(text),
                origin,
            )?;
            if res.is_empty() {
                res.covers = rdata.covers();
            }
            res.add(rdata, Some(ttl))?;
        }
        Ok(res)
    }

    pub fn rdclass(&self) -> Class {
        self.rdclass
    }

    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the type covered by the signatures in the set.
    pub fn covers(&self) -> Rtype {
        self.covers
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.rdatas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rdatas.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<Rdata> {
        self.rdatas.iter()
    }

    pub fn as_slice(&self) -> &[Rdata] {
        &self.rdatas
    }

    pub fn contains(&self, rdata: &Rdata) -> bool {
        self.rdatas.contains(rdata)
    }

    /// Returns whether the set has the given class and types.
    pub fn matches(&self, rdclass: Class, rtype: Rtype, covers: Rtype) -> bool {
        self.rdclass == rdclass && self.rtype == rtype && self.covers == covers
    }
}

/// # Modification
///
impl Rdataset {
    /// Sets the TTL to the minimum of the current and the given one.
    ///
    /// An empty set takes the given TTL outright.
    pub fn update_ttl(&mut self, ttl: u32) {
        if self.rdatas.is_empty() || ttl < self.ttl {
            self.ttl = ttl
        }
    }

    /// Adds record data to the set.
    ///
    /// If the TTL is given, it is applied via [`update_ttl`] before the
    /// data is added. Data for a singleton type replaces the current
    /// member.
    ///
    /// [`update_ttl`]: Self::update_ttl
    pub fn add(
        &mut self,
        rdata: Rdata,
        ttl: Option<u32>,
    ) -> Result<(), RdatasetError> {
        if rdata.rtype() != self.rtype {
            return Err(RdatasetError::IncompatibleTypes);
        }
        if self.rtype.is_signature() {
            let covers = rdata.covers();
            if self.rdatas.is_empty() && self.covers == Rtype::NONE {
                self.covers = covers;
            } else if self.covers != covers {
                return Err(RdatasetError::DifferingCovers);
            }
        }
        if self.rtype.is_singleton() && !self.rdatas.is_empty() {
            trace!(rtype = %self.rtype, "replacing singleton record data");
            self.rdatas.clear();
        }
        if let Some(ttl) = ttl {
            self.update_ttl(ttl);
        }
        if !self.rdatas.contains(&rdata) {
            self.rdatas.push(rdata);
        }
        Ok(())
    }

    /// Removes the given record data if present.
    pub fn discard(&mut self, rdata: &Rdata) {
        self.rdatas.retain(|item| item != rdata)
    }

    pub fn clear(&mut self) {
        self.rdatas.clear()
    }
}

/// # Set Algebra
///
/// Membership is decided by equality of the record data. The TTL of the
/// result is that of `self`.
impl Rdataset {
    /// Adds all members of `other` to `self`.
    pub fn union_update(&mut self, other: &Rdataset) {
        if self.rdatas.is_empty() {
            self.ttl = other.ttl;
        }
        for rdata in &other.rdatas {
            if !self.rdatas.contains(rdata) {
                self.rdatas.push(rdata.clone());
            }
        }
    }

    /// Removes all members of `self` not in `other`.
    pub fn intersection_update(&mut self, other: &Rdataset) {
        self.rdatas.retain(|rdata| other.contains(rdata))
    }

    /// Removes all members of `other` from `self`.
    pub fn difference_update(&mut self, other: &Rdataset) {
        self.rdatas.retain(|rdata| !other.contains(rdata))
    }

    pub fn union(&self, other: &Rdataset) -> Rdataset {
        let mut res = self.clone();
        res.union_update(other);
        res
    }

    pub fn intersection(&self, other: &Rdataset) -> Rdataset {
        let mut res = self.clone();
        res.intersection_update(other);
        res
    }

    pub fn difference(&self, other: &Rdataset) -> Rdataset {
        let mut res = self.clone();
        res.difference_update(other);
        res
    }

    /// Returns whether all members of `self` are members of `other`.
    pub fn is_subset(&self, other: &Rdataset) -> bool {
        self.rdatas.iter().all(|rdata| other.contains(rdata))
    }

    /// Returns whether all members of `other` are members of `self`.
    pub fn is_superset(&self, other: &Rdataset) -> bool {
        other.is_subset(self)
    }
}

/// # Presentation and Wire Format
///
impl Rdataset {
    /// Returns the set in presentation format.
    ///
    /// Each member becomes a line with the owner `name`, TTL, class,
    /// type, and the data. An empty set produces a single line without
    /// TTL and data as is used for questions. Names are relativized to
    /// `origin` if `relativize` is true.
    pub fn to_text(
        &self,
        name: Option<&Name>,
        origin: Option<&Name>,
        relativize: bool,
        override_class: Option<Class>,
    ) -> String {
        let (name, pad) = match name {
            Some(name) => (
                name.choose_relativity(origin, relativize)
                    .map(|name| name.to_string())
                    .unwrap_or_else(|_| name.to_string()),
                " ",
            ),
            None => (String::new(), ""),
        };
        let rdclass = override_class.unwrap_or(self.rdclass);
        if self.rdatas.is_empty() {
            return format!("{}{}{} {}", name, pad, rdclass, self.rtype);
        }
        let lines: Vec<_> = self
            .rdatas
            .iter()
            .map(|rdata| {
                format!(
                    "{}{}{} {} {} {}",
                    name,
                    pad,
                    self.ttl,
                    rdclass,
                    self.rtype,
                    rdata.to_text(origin, relativize)
                )
            })
            .collect();
        lines.join("\n")
    }

    /// Appends the set as records owned by `name` to `target`.
    ///
    /// Returns the number of records written. An empty set is written as
    /// a single record with a TTL of zero and no data, as used by dynamic
    /// updates. If `override_class` is given, it replaces the class of the
    /// set and shuffling is disabled.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        name: &Name,
        target: &mut Target,
        origin: Option<&Name>,
        override_class: Option<Class>,
        want_shuffle: bool,
    ) -> Result<u16, ComposeError> {
        let (rdclass, want_shuffle) = match override_class {
            Some(rdclass) => (rdclass, false),
            None => (self.rdclass, want_shuffle),
        };
        if self.rdatas.is_empty() {
            name.compose(target, origin)?;
            self.rtype.compose(target);
            rdclass.compose(target);
            target.append_u32(0);
            target.append_u16(0);
            return Ok(1);
        }
        let mut rdatas: Vec<_> = self.rdatas.iter().collect();
        if want_shuffle {
            rdatas.shuffle(&mut rand::thread_rng());
        }
        for rdata in &rdatas {
            name.compose(target, origin)?;
            self.rtype.compose(target);
            rdclass.compose(target);
            target.append_u32(self.ttl);
            compose_len_prefixed(target, |target| {
                rdata.compose(target, origin, true)
            })?;
        }
        u16::try_from(rdatas.len()).map_err(|_| ComposeError::TooBig)
    }
}

//--- PartialEq and Eq

impl PartialEq for Rdataset {
    /// Sets are equal if their class and types match and they have the
    /// same members. The TTL is not compared.
    fn eq(&self, other: &Self) -> bool {
        if !other.matches(self.rdclass, self.rtype, self.covers)
            || self.rdatas.len() != other.rdatas.len()
        {
            return false;
        }
        let members: HashSet<_> = self.rdatas.iter().collect();
        other.rdatas.iter().all(|rdata| members.contains(rdata))
    }
}

impl Eq for Rdataset {}

//--- IntoIterator

impl<'a> IntoIterator for &'a Rdataset {
    type Item = &'a Rdata;
    type IntoIter = core::slice::Iter<'a, Rdata>;

    fn into_iter(self) -> Self::IntoIter {
        self.rdatas.iter()
    }
}

//--- Display

impl fmt::Display for Rdataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_text(None, None, false, None))
    }
}

//============ Error Types ===================================================

//------------ RdatasetError -------------------------------------------------

/// Record data could not be added to a set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RdatasetError {
    /// The record data is of a different type than the set.
    IncompatibleTypes,

    /// A signature covers a different type than the set.
    DifferingCovers,

    /// A set was to be created from no data at all.
    Empty,

    /// Record data in presentation format was invalid.
    Syntax(SyntaxError),
}

impl From<SyntaxError> for RdatasetError {
    fn from(err: SyntaxError) -> Self {
        RdatasetError::Syntax(err)
    }
}

impl fmt::Display for RdatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RdatasetError::IncompatibleTypes => {
                f.write_str("record data of incompatible type")
            }
            RdatasetError::DifferingCovers => {
                f.write_str("signature covers a different type")
            }
            RdatasetError::Empty => f.write_str("no record data given"),
            RdatasetError::Syntax(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RdatasetError {}

//============ Testing =======================================================

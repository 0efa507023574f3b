//! Record sets bound to an owner name.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::rdataset::{Rdataset, RdatasetError};
use super::wire::{ComposeError, Composer};
use crate::rdata::Rdata;
use core::{fmt, ops};

//------------ Rrset ---------------------------------------------------------

/// A set of records with the same owner, class, and type.
///
/// Besides the owner, an RRset may carry a deleting class. Dynamic
/// updates use the classes ANY and NONE in place of the record class to
/// mark records for deletion. The deleting class replaces the class of
/// the set when it is written.
///
/// The type dereferences to its [`Rdataset`].
#[derive(Clone, Debug)]
pub struct Rrset {
    name: Name,
    deleting: Option<Class>,
    rdataset: Rdataset,
}

impl Rrset {
    /// Creates a new, empty RRset.
    pub fn new(
        name: Name,
        rdclass: Class,
        rtype: Rtype,
        covers: Rtype,
        deleting: Option<Class>,
    ) -> Self {
        Rrset {
            name,
            deleting,
            rdataset: Rdataset::new(rdclass, rtype, covers),
        }
    }

    /// Creates an RRset from an owner and a record set.
    pub fn from_rdataset(name: Name, rdataset: Rdataset) -> Self {
        Rrset {
            name,
            deleting: None,
            rdataset,
        }
    }

    /// Creates an RRset from record data.
    pub fn from_rdatas(
        name: Name,
        rdclass: Class,
        ttl: u32,
        rdatas: impl IntoIterator<Item = Rdata>,
    ) -> Result<Self, RdatasetError> {
        Rdataset::from_rdatas(rdclass, ttl, rdatas)
            .map(|rdataset| Self::from_rdataset(name, rdataset))
    }

    /// Creates an RRset from record data in presentation format.
    ///
    /// Relative names in the data are made absolute with `origin`. The
    /// owner is used as given.
    pub fn from_text<'a>(
        name: Name,
        rdclass: Class,
        rtype: Rtype,
        ttl: u32,
        texts: impl IntoIterator<Item = &'a str>,
        origin: Option<&Name>,
    ) -> Result<Self, RdatasetError> {
        Rdataset::from_text(rdclass, rtype, ttl, texts, origin)
            .map(|rdataset| Self::from_rdataset(name, rdataset))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn deleting(&self) -> Option<Class> {
        self.deleting
    }

    pub fn rdataset(&self) -> &Rdataset {
        &self.rdataset
    }

    pub fn into_rdataset(self) -> Rdataset {
        self.rdataset
    }

    /// Returns whether the RRset has the given owner, classes, and types.
    pub fn matches(
        &self,
        name: &Name,
        rdclass: Class,
        rtype: Rtype,
        covers: Rtype,
        deleting: Option<Class>,
    ) -> bool {
        self.name == *name
            && self.deleting == deleting
            && self.rdataset.matches(rdclass, rtype, covers)
    }

    /// Returns the RRset in presentation format.
    ///
    /// The owner and names in the data are relativized to `origin` if
    /// `relativize` is true.
    pub fn to_text(&self, origin: Option<&Name>, relativize: bool) -> String {
        self.rdataset
            .to_text(Some(&self.name), origin, relativize, self.deleting)
    }

    /// Appends the records of the set to `target`.
    ///
    /// Returns the number of records written.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        origin: Option<&Name>,
        want_shuffle: bool,
    ) -> Result<u16, ComposeError> {
        self.rdataset.compose(
            &self.name,
            target,
            origin,
            self.deleting,
            want_shuffle,
        )
    }
}

//--- Deref and DerefMut

impl ops::Deref for Rrset {
    type Target = Rdataset;

    fn deref(&self) -> &Self::Target {
        &self.rdataset
    }
}

impl ops::DerefMut for Rrset {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.rdataset
    }
}

//--- PartialEq and Eq

impl PartialEq for Rrset {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.rdataset == other.rdataset
    }
}

impl Eq for Rrset {}

//--- Display

impl fmt::Display for Rrset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_text(None, false))
    }
}

//============ Testing =======================================================

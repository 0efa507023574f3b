//! Resource record data.
//!
//! Each resource record type has its own definition of the content and
//! formatting of its data. This module provides the basics for implementing
//! specific types for this record data. The concrete implementations for
//! well-known record types live in the top-level [`crate::rdata`] module.
//!
//! Record data types implement [`RecordData`] for reading the data from
//! wire format and presentation format and for writing it back into wire
//! format. Writing presentation format happens via the [`ZonefileFmt`]
//! super-trait. How embedded domain names are written is controlled by a
//! [`ComposeMode`] which is derived from the rules for the record type.

use super::name::Name;
use super::scan::{SyntaxError, Tokenizer};
use super::wire::{ComposeError, Composer, ParseError, Parser};
use super::zonefile_fmt::ZonefileFmt;
use core::fmt;

//------------ ComposeMode ---------------------------------------------------

/// How domain names embedded in record data are to be composed.
///
/// The mode is determined by the caller together with the rules of the
/// record type: only some types allow compression of their names and only
/// some have their names lowercased in canonical form.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComposeMode<'a> {
    /// The origin for relative names.
    pub origin: Option<&'a Name>,

    /// Whether names may be compressed.
    pub compress: bool,

    /// Whether names should be written in canonical form.
    pub canonical: bool,
}

impl<'a> ComposeMode<'a> {
    /// Creates a mode for plain uncompressed output.
    pub fn new(origin: Option<&'a Name>) -> Self {
        ComposeMode {
            origin,
            compress: false,
            canonical: false,
        }
    }

    /// Appends an embedded domain name according to the mode.
    pub fn compose_name<Target: Composer + ?Sized>(
        &self,
        name: &Name,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        if self.canonical {
            name.compose_canonical(target, self.origin)
        } else if self.compress {
            name.compose(target, self.origin)
        } else {
            name.compose_uncompressed(target, self.origin)
        }
    }
}

//------------ RecordData ----------------------------------------------------

/// A type that represents the data of a specific record type.
///
/// The record type itself is not part of the trait: several record types
/// share the same layout and thus the same type. It is the job of the
/// [`Rdata`][crate::rdata::Rdata] enum to keep track of which record type
/// a value belongs to.
pub trait RecordData: ZonefileFmt + Sized {
    /// Parses the record data from wire format.
    ///
    /// The parser is limited to the record data. Compression pointers are
    /// resolved against the complete underlying buffer.
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError>;

    /// Scans the record data from presentation format.
    ///
    /// Relative domain names are made absolute with `origin` if given.
    /// The end of the entry is not consumed.
    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError>;

    /// Appends the wire format of the record data to `target`.
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError>;
}

//------------ LongRecordData ------------------------------------------------

/// The octets sequence to be used for record data is too long.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongRecordData;

impl LongRecordData {
    /// Checks that data of `len` octets fits into record data.
    pub fn check_len(len: usize) -> Result<(), Self> {
        if len > usize::from(u16::MAX) {
            Err(LongRecordData)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("record data too long")
    }
}

impl std::error::Error for LongRecordData {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compose_name_modes() {
        let origin = Name::root();
        let name: Name = "Foo.Example.".parse().unwrap();

        let mut plain = Vec::new();
        ComposeMode::new(Some(&origin))
            .compose_name(&name, &mut plain)
            .unwrap();
        assert_eq!(plain, b"\x03Foo\x07Example\x00");

        let mut canonical = Vec::new();
        ComposeMode {
            canonical: true,
            ..ComposeMode::new(None)
        }
        .compose_name(&name, &mut canonical)
        .unwrap();
        assert_eq!(canonical, b"\x03foo\x07example\x00");
    }

    #[test]
    fn relative_without_origin() {
        let name = Name::from_text("foo", None).unwrap();
        assert_eq!(
            ComposeMode::new(None).compose_name(&name, &mut Vec::new()),
            Err(ComposeError::RelativeName)
        );
    }

    #[test]
    fn long_record_data() {
        assert!(LongRecordData::check_len(0xFFFF).is_ok());
        assert_eq!(LongRecordData::check_len(0x10000), Err(LongRecordData));
    }
}

//! Building a new message.
//!
//! DNS messages are written in wire format by a [`Renderer`]. It starts out
//! with room for the header and then accepts questions, RRsets, the EDNS
//! record, and finally a TSIG signature. The sections have to be filled in
//! order: once a record has been added to, say, the authority section, no
//! more answers can be added. Attempting to do so fails with
//! [`ComposeError::SectionOrder`].
//!
//! Domain names are compressed as they are written. The renderer remembers
//! the position of every name suffix it has written and replaces later
//! occurences of such a suffix with a pointer.
//!
//! The renderer can be given a maximum message size. Whenever an addition
//! would take the message beyond that size, it is removed again and the
//! operation fails with [`ComposeError::TooBig`]. The renderer stays
//! usable and the caller can decide what to do, for instance set the TC
//! flag and finish the message.
//!
//! Because the section counts are only known at the very end, the header
//! is only written by [`Renderer::write_header`]. A TSIG signature covers
//! the header, so it has to be added after that.
//!
//! # Example
//!
//! ```
//! use dnskit::base::iana::{Class, Rtype};
//! use dnskit::base::message_builder::Renderer;
//! use dnskit::base::name::Name;
//!
//! let mut renderer = Renderer::new(0x1234, 0x0100, 512, None);
//! renderer.add_question(
//!     &"example.com.".parse::<Name>().unwrap(), Rtype::A, Class::IN
//! ).unwrap();
//! renderer.write_header();
//! let wire = renderer.finish();
//! assert_eq!(&wire[..4], b"\x12\x34\x01\x00");
//! ```

use super::header::{HeaderCounts, HeaderSection};
use super::iana::{Class, Rtype};
use super::message::Section;
use super::name::Name;
use super::opt::Edns;
use super::rdata::{ComposeMode, RecordData};
use super::rrset::Rrset;
use super::wire::{compose_len_prefixed, ComposeError, Composer};
use crate::tsig::{self, TsigOptions};
use std::collections::HashMap;
use tracing::debug;

//------------ Renderer ------------------------------------------------------

/// Writes a DNS message in wire format.
#[derive(Clone, Debug)]
pub struct Renderer {
    /// The message composed so far, starting with space for the header.
    buf: Vec<u8>,

    /// The message ID for the header.
    id: u16,

    /// The flags for the header.
    flags: u16,

    /// The maximum size of the message.
    max_size: usize,

    /// The origin for relative names.
    origin: Option<Name>,

    /// The positions of name suffixes already written.
    compress: HashMap<Name, u16>,

    /// The section currently being written.
    section: Section,

    /// The number of entries written to each section.
    counts: [u16; 4],

    /// The MAC of the TSIG record if one was added.
    mac: Vec<u8>,
}

impl Renderer {
    /// Creates a new renderer.
    ///
    /// The message will not grow beyond `max_size` octets. Relative names
    /// are made absolute with `origin`.
    pub fn new(
        id: u16,
        flags: u16,
        max_size: usize,
        origin: Option<Name>,
    ) -> Self {
        Renderer {
            buf: vec![0; HeaderSection::LEN],
            id,
            flags,
            max_size,
            origin,
            compress: HashMap::new(),
            section: Section::Question,
            counts: [0; 4],
            mac: Vec::new(),
        }
    }

    /// Returns the section currently being written.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns the number of entries written to `section`.
    pub fn count(&self, section: Section) -> u16 {
        self.counts[section.index()]
    }

    /// Returns the MAC of the TSIG record if one was added.
    pub fn mac(&self) -> &[u8] {
        &self.mac
    }

    /// Moves on to the given section.
    ///
    /// Moving back to an earlier section is an error.
    pub fn set_section(&mut self, section: Section) -> Result<(), ComposeError> {
        if section < self.section {
            return Err(ComposeError::SectionOrder);
        }
        self.section = section;
        Ok(())
    }

    /// Drops everything written after `pos`.
    ///
    /// Compression entries pointing into the dropped data are forgotten.
    pub fn rollback(&mut self, pos: usize) {
        let pos = pos.max(HeaderSection::LEN);
        self.buf.truncate(pos);
        self.compress.retain(|_, offset| usize::from(*offset) < pos);
    }

    /// Runs `op` and rolls back if it fails or makes the message too big.
    fn guarded<F>(&mut self, op: F) -> Result<u16, ComposeError>
    where
        F: FnOnce(&mut Self) -> Result<u16, ComposeError>,
    {
        let start = self.buf.len();
        let count = match op(self) {
            Ok(count) => count,
            Err(err) => {
                self.rollback(start);
                return Err(err);
            }
        };
        if self.buf.len() > self.max_size {
            debug!(
                len = self.buf.len(),
                max_size = self.max_size,
                section = %self.section,
                "message too big, rolling back"
            );
            self.rollback(start);
            return Err(ComposeError::TooBig);
        }
        Ok(count)
    }

    /// Adds an entry to the question section.
    pub fn add_question(
        &mut self,
        qname: &Name,
        rtype: Rtype,
        rclass: Class,
    ) -> Result<(), ComposeError> {
        self.set_section(Section::Question)?;
        let origin = self.origin.clone();
        self.guarded(|target| {
            qname.compose(target, origin.as_ref())?;
            rtype.compose(target);
            rclass.compose(target);
            Ok(1)
        })?;
        self.counts[Section::Question.index()] += 1;
        Ok(())
    }

    /// Adds all records of an RRset to `section`.
    ///
    /// If `want_shuffle` is true, the records are written in random order.
    pub fn add_rrset(
        &mut self,
        section: Section,
        rrset: &Rrset,
        want_shuffle: bool,
    ) -> Result<(), ComposeError> {
        self.set_section(section)?;
        let origin = self.origin.clone();
        let count = self.guarded(|target| {
            rrset.compose(target, origin.as_ref(), want_shuffle)
        })?;
        self.counts[section.index()] += count;
        Ok(())
    }

    /// Adds an OPT record for the EDNS information to the additional
    /// section.
    ///
    /// The `rcode_bits` are the extended response code bits as returned by
    /// [`Rcode::to_flags`][super::iana::Rcode::to_flags].
    pub fn add_edns(
        &mut self,
        edns: &Edns,
        rcode_bits: u32,
    ) -> Result<(), ComposeError> {
        self.set_section(Section::Additional)?;
        self.guarded(|target| {
            target.append_u8(0);
            Rtype::OPT.compose(target);
            target.append_u16(edns.payload);
            target.append_u32(edns.ttl(rcode_bits));
            compose_len_prefixed(target, |target| {
                Edns::compose_options(&edns.options, target);
                Ok(())
            })?;
            Ok(1)
        })?;
        self.counts[Section::Additional.index()] += 1;
        Ok(())
    }

    /// Signs the message and adds the TSIG record.
    ///
    /// This writes the header, so nothing but the signature can be added
    /// afterwards. `time_signed` is the signing time in seconds since the
    /// Unix epoch.
    pub fn add_tsig(
        &mut self,
        opts: &TsigOptions,
        request_mac: &[u8],
        time_signed: u64,
    ) -> Result<(), ComposeError> {
        self.set_section(Section::Additional)?;
        self.write_header();
        let tsig = tsig::sign(
            &self.buf,
            &opts.key,
            time_signed,
            opts.fudge,
            opts.original_id.unwrap_or(self.id),
            opts.error,
            &opts.other,
            request_mac,
        )?;
        let origin = self.origin.clone();
        self.guarded(|target| {
            opts.key.name().compose(target, origin.as_ref())?;
            Rtype::TSIG.compose(target);
            Class::ANY.compose(target);
            target.append_u32(0);
            compose_len_prefixed(target, |target| {
                tsig.compose_rdata(target, ComposeMode::new(None))
            })?;
            Ok(1)
        })?;
        self.counts[Section::Additional.index()] += 1;
        self.mac = tsig.mac().to_vec();
        self.write_header();
        Ok(())
    }

    /// Writes the header with the current section counts.
    pub fn write_header(&mut self) {
        let header = HeaderSection {
            id: self.id,
            flags: self.flags,
            counts: HeaderCounts {
                qdcount: self.counts[0],
                ancount: self.counts[1],
                nscount: self.counts[2],
                arcount: self.counts[3],
            },
        };
        let mut octets = Vec::with_capacity(HeaderSection::LEN);
        header.compose(&mut octets);
        self.buf[..HeaderSection::LEN].copy_from_slice(&octets);
    }

    /// Returns the wire format of the message.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

//--- Composer

impl Composer for Renderer {
    fn append_slice(&mut self, slice: &[u8]) {
        self.buf.extend_from_slice(slice)
    }

    fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    fn truncate(&mut self, len: usize) {
        self.rollback(len)
    }

    fn append_compressed_name(
        &mut self,
        name: &Name,
    ) -> Result<(), ComposeError> {
        for (label, offset) in name.labels().zip(name.label_offsets()) {
            if label.is_root() {
                label.compose(self);
                return Ok(());
            }
            let suffix = name.suffix_at(offset);
            if let Some(&pos) = self.compress.get(&suffix) {
                self.append_u16(0xC000 | pos);
                return Ok(());
            }
            // Pointers only have fourteen bits.
            if let Ok(pos) = u16::try_from(self.buf.len()) {
                if pos <= 0x3FFF {
                    self.compress.insert(suffix, pos);
                }
            }
            label.compose(self);
        }
        Ok(())
    }
}

//============ Testing =======================================================

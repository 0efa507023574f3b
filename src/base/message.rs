//! DNS messages.
//!
//! A [`Message`] holds everything a DNS message consists of: the header
//! fields, the four sections as lists of [`Rrset`]s, the EDNS information,
//! and the parameters for a TSIG signature. Entries of the question
//! section are RRsets without record data.
//!
//! Messages are decoded from wire format via [`Message::from_wire`] and
//! encoded via [`Message::to_wire`], the latter using a
//! [`Renderer`][super::message_builder::Renderer]. Both take an options
//! struct: [`ParseOptions`] and [`RenderOptions`], respectively. There is
//! a text format, too, which is produced by [`Message::to_text`] and read
//! by [`Message::from_text`].
//!
//! # Decoding
//!
//! Decoding is strict. The twelve octet header must be present, the OPT
//! record may only appear once and only in the additional section, and a
//! TSIG record must be the very last record of the message. A signed
//! message is verified during decoding which requires the key to be
//! present in the keyring given via the options. Data after the last
//! record is an error unless explicitly allowed.
//!
//! For dynamic updates, records with class ANY or NONE are delete
//! instructions. They are collected into RRsets of the zone's class with
//! the original class kept as the RRset's deleting class.

use super::header::{EdnsFlags, Flags, HeaderSection};
use super::iana::{Class, Opcode, Rcode, Rtype};
use super::message_builder::Renderer;
use super::name::Name;
use super::opt::{Edns, EdnsOption};
use super::rdata::RecordData;
use super::rrset::Rrset;
use super::scan::{SyntaxError, Token, Tokenizer};
use super::ttl;
use super::wire::{ComposeError, ParseError, Parser};
use crate::rdata::{Rdata, Tsig};
use crate::tsig::{self, Keyring, TsigError, TsigOptions};
use crate::utils::config::DefMinMax;
use core::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};

//------------ Configuration Constants ---------------------------------------

/// The limits for the maximum size of a rendered message.
pub const MAX_SIZE: DefMinMax<u16> = DefMinMax::new(65535, 512, 65535);

//------------ Section -------------------------------------------------------

/// The sections of a message.
///
/// Sections are ordered the way they appear in a message.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    /// All sections in message order.
    pub const ALL: [Section; 4] = [
        Section::Question,
        Section::Answer,
        Section::Authority,
        Section::Additional,
    ];

    /// Returns the position of the section in a message.
    pub fn index(self) -> usize {
        match self {
            Section::Question => 0,
            Section::Answer => 1,
            Section::Authority => 2,
            Section::Additional => 3,
        }
    }

    /// Returns the name of the section.
    ///
    /// Dynamic update messages use different names for the first three
    /// sections.
    pub fn to_text(self, updating: bool) -> &'static str {
        match (self, updating) {
            (Section::Question, false) => "QUESTION",
            (Section::Answer, false) => "ANSWER",
            (Section::Authority, false) => "AUTHORITY",
            (Section::Question, true) => "ZONE",
            (Section::Answer, true) => "PREREQ",
            (Section::Authority, true) => "UPDATE",
            (Section::Additional, _) => "ADDITIONAL",
        }
    }

    /// Returns the section for one of its names.
    ///
    /// Both the regular and the update names are accepted.
    pub fn from_text(text: &str) -> Option<Self> {
        match text.to_ascii_uppercase().as_str() {
            "QUESTION" | "ZONE" => Some(Section::Question),
            "ANSWER" | "PREREQ" => Some(Section::Answer),
            "AUTHORITY" | "UPDATE" => Some(Section::Authority),
            "ADDITIONAL" => Some(Section::Additional),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_text(false))
    }
}

//------------ ParseOptions --------------------------------------------------

/// Options for decoding a message from wire format.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The keys for verifying a TSIG signature.
    pub keyring: Option<&'a Keyring>,

    /// The MAC of the request if the message is a signed response.
    pub request_mac: &'a [u8],

    /// Whether to ignore data after the last record.
    pub ignore_trailing: bool,

    /// Whether to stop after the question section.
    pub question_only: bool,

    /// Whether to place every record into an RRset of its own.
    pub one_rr_per_rrset: bool,

    /// The current time for TSIG verification.
    ///
    /// If `None`, the system time is used.
    pub now: Option<u64>,
}

//------------ RenderOptions -------------------------------------------------

/// Options for encoding a message into wire format.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions<'a> {
    /// The origin for relative names.
    pub origin: Option<&'a Name>,

    /// The maximum size of the message.
    ///
    /// If `None`, the EDNS payload size is used or, without EDNS, the
    /// largest possible message size. Values are limited to the range
    /// given by [`MAX_SIZE`].
    pub max_size: Option<u16>,

    /// Whether to write the records of an RRset in random order.
    pub want_shuffle: bool,

    /// The time to sign the message at.
    ///
    /// If `None`, the system time is used.
    pub time: Option<u64>,
}

//------------ Message -------------------------------------------------------

/// A DNS message.
#[derive(Clone, Debug)]
pub struct Message {
    /// The message ID.
    id: u16,

    /// The header flags including opcode and the lower rcode bits.
    flags: u16,

    /// The upper eight rcode bits in the position of the OPT TTL.
    ext_rcode: u32,

    /// The RRsets of the four sections.
    sections: [Vec<Rrset>; 4],

    /// The EDNS information if EDNS is used.
    edns: Option<Edns>,

    /// The parameters for signing the message.
    tsig: Option<TsigOptions>,

    /// The MAC of the request this message responds to.
    request_mac: Vec<u8>,

    /// The MAC of the message after encoding or decoding.
    mac: Vec<u8>,

    /// Whether a decoded message carried a TSIG signature.
    had_tsig: bool,
}

/// # Creation and Header Access
///
impl Message {
    /// Creates an empty message with a random ID.
    pub fn new() -> Self {
        Self::with_id(rand::random())
    }

    /// Creates an empty message with the given ID.
    pub fn with_id(id: u16) -> Self {
        Message {
            id,
            flags: 0,
            ext_rcode: 0,
            sections: Default::default(),
            edns: None,
            tsig: None,
            request_mac: Vec::new(),
            mac: Vec::new(),
            had_tsig: false,
        }
    }

    /// Creates a query for the given name, type, and class.
    ///
    /// The query has the RD flag set.
    pub fn make_query(qname: Name, rtype: Rtype, rclass: Class) -> Self {
        let mut res = Self::new();
        res.flags = Flags::RD;
        res.find_or_create_rrset(
            Section::Question,
            &qname,
            rclass,
            rtype,
            Rtype::NONE,
            None,
            true,
        );
        res
    }

    /// Creates the skeleton of a response to `query`.
    ///
    /// The response has the query's ID, opcode, and question. It uses EDNS
    /// with a payload of `our_payload` if the query did and is signed with
    /// the query's key if the query was signed.
    pub fn make_response(
        query: &Message,
        recursion_available: bool,
        our_payload: u16,
        fudge: u16,
    ) -> Result<Self, ParseError> {
        if query.flags & Flags::QR != 0 {
            return Err(ParseError::form_error("message is not a query"));
        }
        let mut res = Self::with_id(query.id);
        res.flags = Flags::QR | (query.flags & Flags::RD);
        if recursion_available {
            res.flags |= Flags::RA;
        }
        res.set_opcode(query.opcode());
        res.sections[Section::Question.index()] =
            query.section(Section::Question).to_vec();
        if query.edns.is_some() {
            res.use_edns(Some(Edns::new(0, 0, our_payload)));
        }
        if query.had_tsig {
            if let Some(ref opts) = query.tsig {
                let mut opts = TsigOptions::new(opts.key.clone());
                opts.fudge = fudge;
                res.use_tsig(Some(opts));
                res.request_mac = query.mac.clone();
            }
        }
        Ok(res)
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn set_id(&mut self, id: u16) {
        self.id = id
    }

    /// Returns the raw header flags.
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// Replaces the raw header flags.
    pub fn set_flags(&mut self, flags: u16) {
        self.flags = flags
    }

    /// Returns the header flags as a [`Flags`] value.
    pub fn header_flags(&self) -> Flags {
        Flags::from_bits(self.flags)
    }

    pub fn opcode(&self) -> Opcode {
        Opcode::from_flags(self.flags)
    }

    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.flags = (self.flags & 0x87FF) | opcode.to_flags();
    }

    /// Returns the response code including the extended bits.
    pub fn rcode(&self) -> Rcode {
        Rcode::from_flags(self.flags, self.ext_rcode)
    }

    /// Sets the response code.
    ///
    /// If the code needs the extended bits, EDNS is switched on.
    pub fn set_rcode(&mut self, rcode: Rcode) {
        let (bits, ext) = rcode.to_flags();
        self.flags = (self.flags & 0xFFF0) | bits;
        self.ext_rcode = ext;
        if ext != 0 && self.edns.is_none() {
            self.edns = Some(Edns::default());
        }
    }

    /// Returns whether this is a dynamic update message.
    pub fn is_update(&self) -> bool {
        self.opcode() == Opcode::UPDATE
    }
}

/// # EDNS and TSIG
///
impl Message {
    pub fn edns(&self) -> Option<&Edns> {
        self.edns.as_ref()
    }

    /// Switches EDNS on or off.
    ///
    /// Switching EDNS off also drops the extended rcode bits.
    pub fn use_edns(&mut self, edns: Option<Edns>) {
        if edns.is_none() {
            self.ext_rcode = 0;
        }
        self.edns = edns;
    }

    /// Sets or clears the DO flag.
    ///
    /// Setting the flag switches on EDNS if necessary.
    pub fn want_dnssec(&mut self, wanted: bool) {
        match self.edns {
            Some(ref mut edns) => edns.set_dnssec_ok(wanted),
            None if wanted => {
                let mut edns = Edns::default();
                edns.set_dnssec_ok(true);
                self.edns = Some(edns);
            }
            None => {}
        }
    }

    pub fn tsig(&self) -> Option<&TsigOptions> {
        self.tsig.as_ref()
    }

    /// Sets the parameters for signing the message or stops signing.
    pub fn use_tsig(&mut self, tsig: Option<TsigOptions>) {
        self.tsig = tsig
    }

    /// Returns whether the decoded message was signed.
    pub fn had_tsig(&self) -> bool {
        self.had_tsig
    }

    /// Returns the MAC of the message after encoding or decoding.
    pub fn mac(&self) -> &[u8] {
        &self.mac
    }

    pub fn request_mac(&self) -> &[u8] {
        &self.request_mac
    }

    /// Sets the MAC of the request this message answers.
    pub fn set_request_mac(&mut self, mac: Vec<u8>) {
        self.request_mac = mac
    }
}

/// # Sections and RRsets
///
impl Message {
    pub fn section(&self, section: Section) -> &[Rrset] {
        &self.sections[section.index()]
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Vec<Rrset> {
        &mut self.sections[section.index()]
    }

    pub fn question(&self) -> &[Rrset] {
        self.section(Section::Question)
    }

    pub fn answer(&self) -> &[Rrset] {
        self.section(Section::Answer)
    }

    pub fn authority(&self) -> &[Rrset] {
        self.section(Section::Authority)
    }

    pub fn additional(&self) -> &[Rrset] {
        self.section(Section::Additional)
    }

    /// Returns the number of entries the section will have on the wire.
    ///
    /// For the additional section, this includes the OPT and TSIG records.
    pub fn section_count(&self, section: Section) -> usize {
        let rrsets = self.section(section);
        let mut res = match section {
            Section::Question => rrsets.len(),
            _ => rrsets.iter().map(|rrset| rrset.len().max(1)).sum(),
        };
        if section == Section::Additional {
            res += usize::from(self.edns.is_some());
            res += usize::from(self.tsig.is_some());
        }
        res
    }

    /// Returns the matching RRset or an error if there is none.
    pub fn find_rrset(
        &self,
        section: Section,
        name: &Name,
        rdclass: Class,
        rtype: Rtype,
        covers: Rtype,
        deleting: Option<Class>,
    ) -> Result<&Rrset, LookupError> {
        self.get_rrset(section, name, rdclass, rtype, covers, deleting)
            .ok_or(LookupError::NotFound)
    }

    /// Returns the matching RRset if there is one.
    pub fn get_rrset(
        &self,
        section: Section,
        name: &Name,
        rdclass: Class,
        rtype: Rtype,
        covers: Rtype,
        deleting: Option<Class>,
    ) -> Option<&Rrset> {
        self.section(section)
            .iter()
            .find(|rrset| rrset.matches(name, rdclass, rtype, covers, deleting))
    }

    /// Returns the matching RRset, adding an empty one if necessary.
    ///
    /// If `force_unique` is true, a new RRset is always added.
    #[allow(clippy::too_many_arguments)]
    pub fn find_or_create_rrset(
        &mut self,
        section: Section,
        name: &Name,
        rdclass: Class,
        rtype: Rtype,
        covers: Rtype,
        deleting: Option<Class>,
        force_unique: bool,
    ) -> &mut Rrset {
        let rrsets = &mut self.sections[section.index()];
        let pos = if force_unique {
            None
        } else {
            rrsets.iter().position(|rrset| {
                rrset.matches(name, rdclass, rtype, covers, deleting)
            })
        };
        let pos = match pos {
            Some(pos) => pos,
            None => {
                rrsets.push(Rrset::new(
                    name.clone(),
                    rdclass,
                    rtype,
                    covers,
                    deleting,
                ));
                rrsets.len() - 1
            }
        };
        &mut rrsets[pos]
    }

    /// Returns whether `other` is a response to this message.
    ///
    /// This is the case if `other` has the QR flag set and the same ID and
    /// opcode. Unless `other` carries an error or this is an update, both
    /// questions must also be the same.
    pub fn is_response(&self, other: &Message) -> bool {
        if other.flags & Flags::QR == 0
            || self.id != other.id
            || self.opcode() != other.opcode()
        {
            return false;
        }
        if other.rcode() != Rcode::NOERROR || self.is_update() {
            return true;
        }
        let mine = self.question();
        let theirs = other.question();
        mine.iter().all(|item| theirs.contains(item))
            && theirs.iter().all(|item| mine.contains(item))
    }
}

/// # Wire Format
///
impl Message {
    /// Encodes the message.
    ///
    /// If the message is to be signed, the MAC is kept and can be
    /// retrieved via [`mac`][Self::mac] afterwards.
    pub fn to_wire(
        &mut self,
        opts: &RenderOptions,
    ) -> Result<Vec<u8>, ComposeError> {
        let max_size = match opts.max_size {
            Some(size) => MAX_SIZE.limit(size),
            None => match self.edns {
                Some(ref edns) => MAX_SIZE.limit(edns.payload),
                None => MAX_SIZE.default(),
            },
        };
        let mut renderer = Renderer::new(
            self.id,
            self.flags,
            usize::from(max_size),
            opts.origin.cloned(),
        );
        for rrset in self.question() {
            renderer.add_question(rrset.name(), rrset.rtype(), rrset.rdclass())?;
        }
        for section in &Section::ALL[1..] {
            for rrset in self.section(*section) {
                renderer.add_rrset(*section, rrset, opts.want_shuffle)?;
            }
        }
        if let Some(ref edns) = self.edns {
            renderer.add_edns(edns, self.ext_rcode)?;
        }
        renderer.write_header();
        if let Some(ref tsig) = self.tsig {
            let time = opts.time.unwrap_or_else(now);
            renderer.add_tsig(tsig, &self.request_mac, time)?;
            self.mac = renderer.mac().to_vec();
        }
        Ok(renderer.finish())
    }

    /// Decodes a message.
    pub fn from_wire(
        wire: &[u8],
        opts: &ParseOptions,
    ) -> Result<Self, ParseError> {
        let mut parser = Parser::new(wire);
        let header = HeaderSection::parse(&mut parser)?;
        let mut res = Self::with_id(header.id);
        res.flags = header.flags;
        res.request_mac = opts.request_mac.to_vec();
        let updating = res.is_update();
        let counts = header.counts;
        trace!(
            id = header.id,
            qdcount = counts.qdcount,
            ancount = counts.ancount,
            nscount = counts.nscount,
            arcount = counts.arcount,
            "decoding message"
        );
        if updating && counts.qdcount > 1 {
            return Err(ParseError::form_error(
                "more than one question in update",
            ));
        }

        let mut zone_class = Class::IN;
        for _ in 0..counts.qdcount {
            let qname = Name::parse(&mut parser)?;
            let rtype = Rtype::parse(&mut parser)?;
            let rclass = Class::parse(&mut parser)?;
            if updating {
                zone_class = rclass;
            }
            res.find_or_create_rrset(
                Section::Question,
                &qname,
                rclass,
                rtype,
                Rtype::NONE,
                None,
                true,
            );
        }
        if opts.question_only {
            return Ok(res);
        }

        let mut reader = SectionReader {
            wire,
            opts,
            updating,
            zone_class,
            seen_opt: false,
        };
        for (section, count) in [
            (Section::Answer, counts.ancount),
            (Section::Authority, counts.nscount),
            (Section::Additional, counts.arcount),
        ] {
            for i in 0..count {
                let last = i + 1 == count;
                reader.read_record(&mut res, &mut parser, section, last)?;
            }
        }
        if !opts.ignore_trailing && parser.remaining() > 0 {
            return Err(ParseError::TrailingJunk);
        }
        Ok(res)
    }
}

/// # Text Format
///
impl Message {
    /// Returns the message in text format.
    ///
    /// The header fields come first, one per line, followed by the
    /// sections each introduced by a line with the section name
    /// preceded by a semicolon.
    pub fn to_text(&self, origin: Option<&Name>, relativize: bool) -> String {
        let mut lines = vec![
            format!("id {}", self.id),
            format!("opcode {}", self.opcode()),
            format!("rcode {}", self.rcode()),
            format!("flags {}", self.header_flags()),
        ];
        if let Some(ref edns) = self.edns {
            lines.push(format!("edns {}", edns.version));
            if edns.flags != 0 {
                lines.push(format!("eflags {}", edns.edns_flags()));
            }
            lines.push(format!("payload {}", edns.payload));
            for option in &edns.options {
                lines.push(format!("option {}", option));
            }
        }
        let updating = self.is_update();
        for section in Section::ALL {
            lines.push(format!(";{}", section.to_text(updating)));
            for rrset in self.section(section) {
                lines.push(rrset.to_text(origin, relativize));
            }
        }
        lines.join("\n")
    }

    /// Reads a message from its text format.
    ///
    /// Names without a trailing dot stay relative. A line starting with
    /// white space reuses the owner of the previous line.
    pub fn from_text(text: &str) -> Result<Self, SyntaxError> {
        let mut reader = TextReader {
            tok: Tokenizer::new(text),
            msg: Self::with_id(0),
            section: None,
            last_name: None,
            zone_class: Class::IN,
        };
        reader.read()?;
        Ok(reader.msg)
    }
}

//--- Default

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

//--- PartialEq and Eq

impl PartialEq for Message {
    /// Compares ID, flags, and the sections ignoring the order of RRsets.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.flags == other.flags
            && self.sections.iter().zip(other.sections.iter()).all(
                |(mine, theirs)| {
                    mine.iter().all(|item| theirs.contains(item))
                        && theirs.iter().all(|item| mine.contains(item))
                },
            )
    }
}

impl Eq for Message {}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_text(None, false))
    }
}

//------------ SectionReader -------------------------------------------------

/// The state for decoding the record sections.
struct SectionReader<'a> {
    wire: &'a [u8],
    opts: &'a ParseOptions<'a>,
    updating: bool,
    zone_class: Class,
    seen_opt: bool,
}

impl SectionReader<'_> {
    /// Reads one record into `msg`.
    ///
    /// `last` is true for the last record of the section.
    fn read_record(
        &mut self,
        msg: &mut Message,
        parser: &mut Parser,
        section: Section,
        last: bool,
    ) -> Result<(), ParseError> {
        let start = parser.pos();
        let name = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let raw_class = parser.parse_u16()?;
        let ttl = parser.parse_u32()?;
        let rdlen = usize::from(parser.parse_u16()?);

        if rtype == Rtype::OPT {
            if section != Section::Additional || self.seen_opt {
                return Err(ParseError::BadEdns);
            }
            let options = parser.parse_limited(rdlen, Edns::parse_options)?;
            trace!(payload = raw_class, "found OPT record");
            msg.edns = Some(Edns::from_record(raw_class, ttl, options));
            msg.ext_rcode = ttl & 0xFF00_0000;
            self.seen_opt = true;
            return Ok(());
        }

        if rtype == Rtype::TSIG {
            if section != Section::Additional || !last {
                return Err(ParseError::BadTsig);
            }
            return self.read_tsig(msg, parser, name, start, rdlen);
        }

        let rclass = Class::from_int(raw_class);
        let (rclass, deleting) = if self.updating
            && (rclass == Class::ANY || rclass == Class::NONE)
        {
            (self.zone_class, Some(rclass))
        } else {
            (rclass, None)
        };
        let rdata = if deleting == Some(Class::ANY)
            || (deleting == Some(Class::NONE) && section == Section::Answer)
        {
            parser.advance(rdlen)?;
            None
        } else {
            Some(parser.parse_limited(rdlen, |parser| {
                Rdata::parse(rclass, rtype, parser)
            })?)
        };
        let covers = rdata.as_ref().map_or(Rtype::NONE, Rdata::covers);
        let rrset = msg.find_or_create_rrset(
            section,
            &name,
            rclass,
            rtype,
            covers,
            deleting,
            self.opts.one_rr_per_rrset,
        );
        if let Some(rdata) = rdata {
            rrset
                .add(rdata, Some(ttl))
                .map_err(|_| ParseError::form_error("inconsistent record"))?;
        }
        Ok(())
    }

    /// Reads and verifies the TSIG record.
    fn read_tsig(
        &mut self,
        msg: &mut Message,
        parser: &mut Parser,
        key_name: Name,
        start: usize,
        rdlen: usize,
    ) -> Result<(), ParseError> {
        let keyring = self.opts.keyring.ok_or_else(|| {
            debug!(key = %key_name, "signed message without keyring");
            TsigError::UnknownKey
        })?;
        let key = keyring.get(&key_name).ok_or_else(|| {
            debug!(key = %key_name, "unknown TSIG key");
            TsigError::UnknownKey
        })?;
        let record = parser.parse_limited(rdlen, Tsig::parse_rdata)?;
        let time = self.opts.now.unwrap_or_else(now);
        tsig::verify(
            self.wire,
            key,
            &record,
            start,
            time,
            self.opts.request_mac,
        )?;
        msg.tsig = Some(TsigOptions {
            key: key.clone(),
            fudge: record.fudge(),
            original_id: Some(record.original_id()),
            error: record.error(),
            other: record.other().to_vec(),
        });
        msg.mac = record.mac().to_vec();
        msg.had_tsig = true;
        Ok(())
    }
}

//------------ TextReader ----------------------------------------------------

/// The state for reading a message from text.
struct TextReader<'a> {
    tok: Tokenizer<'a>,
    msg: Message,

    /// The current section or `None` while still in the header.
    section: Option<Section>,

    /// The owner of the previous record.
    last_name: Option<Name>,

    /// The class of the zone of an update message.
    zone_class: Class,
}

impl TextReader<'_> {
    fn read(&mut self) -> Result<(), SyntaxError> {
        loop {
            let token = self.tok.get_token(true, true)?;
            match token {
                Token::Eof => return Ok(()),
                Token::Eol => continue,
                Token::Comment(ref text) => {
                    if let Some(section) = Section::from_text(text.trim()) {
                        self.section = Some(section);
                    }
                    continue;
                }
                _ => {}
            }
            match self.section {
                None => {
                    self.tok.unget(token)?;
                    self.read_header_line()?;
                }
                Some(Section::Question) => self.read_question(token)?,
                Some(section) => self.read_record(section, token)?,
            }
        }
    }

    fn read_header_line(&mut self) -> Result<(), SyntaxError> {
        let keyword = self.tok.get_identifier()?.to_ascii_lowercase();
        match keyword.as_str() {
            "id" => self.msg.id = self.tok.get_u16()?,
            "flags" => {
                for token in self.tok.get_remaining()? {
                    let value = token
                        .value()
                        .ok_or(SyntaxError::UnexpectedToken("flag"))?;
                    let flags: Flags = value
                        .parse()
                        .map_err(|_| SyntaxError::UnknownMnemonic)?;
                    self.msg.flags |= flags.to_bits();
                }
            }
            "edns" => {
                let version = self.tok.get_u8()?;
                self.edns_mut().version = version;
            }
            "eflags" => {
                let mut bits = 0;
                for token in self.tok.get_remaining()? {
                    let value = token
                        .value()
                        .ok_or(SyntaxError::UnexpectedToken("flag"))?;
                    let flags: EdnsFlags = value
                        .parse()
                        .map_err(|_| SyntaxError::UnknownMnemonic)?;
                    bits |= flags.to_bits() as u16;
                }
                self.edns_mut().flags |= bits;
            }
            "payload" => {
                let payload = self.tok.get_u16()?;
                self.edns_mut().payload = payload;
            }
            "option" => {
                let option: EdnsOption = self.tok.get_identifier()?.parse()?;
                self.edns_mut().options.push(option);
            }
            "opcode" => {
                let opcode = self.tok.get_mnemonic(Opcode::from_bytes)?;
                self.msg.set_opcode(opcode);
            }
            "rcode" => {
                let rcode = self.tok.get_mnemonic(Rcode::from_bytes)?;
                self.msg.set_rcode(rcode);
            }
            _ => return Err(SyntaxError::UnexpectedToken("header field")),
        }
        self.tok.get_eol()
    }

    fn edns_mut(&mut self) -> &mut Edns {
        self.msg.edns.get_or_insert_with(Edns::default)
    }

    /// Returns the owner of a line starting with `token`.
    fn owner(&mut self, token: Token) -> Result<Name, SyntaxError> {
        let name = match token {
            Token::Whitespace => {
                self.last_name.clone().ok_or(SyntaxError::Custom(
                    "no previous owner to reuse",
                ))?
            }
            Token::Identifier(ref value) => {
                Name::from_text(value, None).map_err(SyntaxError::BadName)?
            }
            _ => return Err(SyntaxError::UnexpectedToken("owner name")),
        };
        self.last_name = Some(name.clone());
        Ok(name)
    }

    /// Reads an optional class, defaulting to IN.
    fn read_class(&mut self) -> Result<Class, SyntaxError> {
        let token = self.tok.get()?;
        if let Token::Identifier(ref value) = token {
            if let Some(class) = Class::from_bytes(value.as_bytes()) {
                return Ok(class);
            }
        }
        self.tok.unget(token)?;
        Ok(Class::IN)
    }

    fn read_question(&mut self, token: Token) -> Result<(), SyntaxError> {
        let name = self.owner(token)?;
        let rclass = self.read_class()?;
        let rtype = self.tok.get_mnemonic(Rtype::from_bytes)?;
        self.tok.get_eol()?;
        if self.msg.is_update() {
            self.zone_class = rclass;
        }
        self.msg.find_or_create_rrset(
            Section::Question,
            &name,
            rclass,
            rtype,
            Rtype::NONE,
            None,
            true,
        );
        Ok(())
    }

    fn read_record(
        &mut self,
        section: Section,
        token: Token,
    ) -> Result<(), SyntaxError> {
        let name = self.owner(token)?;
        let token = self.tok.get()?;
        let ttl = match token
            .value()
            .filter(|value| value.starts_with(|ch: char| ch.is_ascii_digit()))
        {
            Some(value) => ttl::from_text(value)?,
            None => {
                self.tok.unget(token)?;
                0
            }
        };
        let rclass = self.read_class()?;
        let updating = self.msg.is_update();
        let (rclass, deleting) =
            if updating && (rclass == Class::ANY || rclass == Class::NONE) {
                (self.zone_class, Some(rclass))
            } else {
                (rclass, None)
            };
        let rtype = self.tok.get_mnemonic(Rtype::from_bytes)?;
        let rdata = if self.tok.at_eol()? {
            self.tok.get_eol()?;
            None
        } else {
            Some(Rdata::scan(rclass, rtype, &mut self.tok, None)?)
        };
        let covers = rdata.as_ref().map_or(Rtype::NONE, Rdata::covers);
        let rrset = self.msg.find_or_create_rrset(
            section, &name, rclass, rtype, covers, deleting, updating,
        );
        if let Some(rdata) = rdata {
            rrset
                .add(rdata, Some(ttl))
                .map_err(|_| SyntaxError::Custom("inconsistent record"))?;
        }
        Ok(())
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns the current time in seconds since the Unix epoch.
fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_secs())
        .unwrap_or(0)
}

//============ Error Types ===================================================

//------------ LookupError ---------------------------------------------------

/// A requested RRset is not present in a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LookupError {
    NotFound,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LookupError::NotFound => f.write_str("RRset not found"),
        }
    }
}

impl std::error::Error for LookupError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::tsig::{Algorithm, Key};

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    fn sample() -> Message {
        let mut msg = Message::with_id(0x1234);
        msg.set_flags(Flags::QR | Flags::AA | Flags::RD);
        msg.find_or_create_rrset(
            Section::Question,
            &name("example."),
            Class::IN,
            Rtype::MX,
            Rtype::NONE,
            None,
            true,
        );
        for (section, owner, rtype, data) in [
            (Section::Answer, "example.", Rtype::MX, "10 mail.example."),
            (Section::Authority, "example.", Rtype::NS, "ns.example."),
            (Section::Additional, "mail.example.", Rtype::A, "10.0.0.1"),
        ] {
            msg.find_or_create_rrset(
                section,
                &name(owner),
                Class::IN,
                rtype,
                Rtype::NONE,
                None,
                false,
            )
            .add(Rdata::from_text(Class::IN, rtype, data, None).unwrap(), Some(3600))
            .unwrap();
        }
        msg
    }

    #[test]
    fn wire_round_trip() {
        crate::logging::init_logging();
        let mut msg = sample();
        let wire = msg.to_wire(&RenderOptions::default()).unwrap();
        let parsed = Message::from_wire(&wire, &ParseOptions::default())
            .unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.section_count(Section::Additional), 1);
    }

    #[test]
    fn signed_round_trip() {
        crate::logging::init_logging();
        let key = Key::new(
            name("key.example."),
            Algorithm::HmacSha256,
            b"0123456789abcdef".to_vec(),
        );
        let keyring: Keyring = [key.clone()].into_iter().collect();
        let mut msg = sample();
        msg.use_edns(Some(Edns::new(0, 0, 1232)));
        msg.use_tsig(Some(TsigOptions::new(key)));
        let opts = RenderOptions {
            time: Some(1_700_000_000),
            ..Default::default()
        };
        let wire = msg.to_wire(&opts).unwrap();
        assert_eq!(msg.mac().len(), 32);

        let parse = ParseOptions {
            keyring: Some(&keyring),
            now: Some(1_700_000_100),
            ..Default::default()
        };
        let parsed = Message::from_wire(&wire, &parse).unwrap();
        assert_eq!(parsed, msg);
        assert!(parsed.had_tsig());
        assert_eq!(parsed.mac(), msg.mac());
        assert_eq!(parsed.edns().map(|edns| edns.payload), Some(1232));

        assert_eq!(
            Message::from_wire(&wire, &ParseOptions::default()),
            Err(ParseError::Tsig(TsigError::UnknownKey))
        );
        let mut tampered = wire.clone();
        tampered[3] ^= 0x10;
        assert_eq!(
            Message::from_wire(&tampered, &parse),
            Err(ParseError::Tsig(TsigError::BadSignature))
        );
    }

    #[test]
    fn misplaced_opt() {
        // An OPT record in the answer section.
        let wire = b"\x00\x01\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\
                     \x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x00";
        assert_eq!(
            Message::from_wire(wire, &ParseOptions::default()),
            Err(ParseError::BadEdns)
        );
    }

    #[test]
    fn two_opts() {
        let wire = b"\x00\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00\x02\
                     \x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x00\
                     \x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x00";
        assert_eq!(
            Message::from_wire(wire, &ParseOptions::default()),
            Err(ParseError::BadEdns)
        );
    }

    #[test]
    fn too_big() {
        let mut msg = sample();
        let full = msg.to_wire(&RenderOptions::default()).unwrap();
        assert!(full.len() > 60);
        for rrset in msg.section_mut(Section::Answer) {
            let data = (1..40u16)
                .map(|pref| format!("{} mx{}.example.", pref, pref))
                .collect::<Vec<_>>();
            for text in data {
                rrset
                    .add(
                        Rdata::from_text(Class::IN, Rtype::MX, &text, None)
                            .unwrap(),
                        None,
                    )
                    .unwrap();
            }
        }
        assert_eq!(
            msg.to_wire(&RenderOptions {
                max_size: Some(512),
                ..Default::default()
            }),
            Err(ComposeError::TooBig)
        );
    }

    #[test]
    fn rcode_and_opcode() {
        let mut msg = Message::with_id(1);
        msg.set_opcode(Opcode::UPDATE);
        msg.set_rcode(Rcode::NXDOMAIN);
        assert_eq!(msg.opcode(), Opcode::UPDATE);
        assert_eq!(msg.rcode(), Rcode::NXDOMAIN);
        assert!(msg.edns().is_none());
        msg.set_rcode(Rcode::BADVERS);
        assert_eq!(msg.rcode(), Rcode::BADVERS);
        assert!(msg.edns().is_some());
        let wire = msg.to_wire(&RenderOptions::default()).unwrap();
        let parsed = Message::from_wire(&wire, &ParseOptions::default())
            .unwrap();
        assert_eq!(parsed.rcode(), Rcode::BADVERS);
        assert_eq!(parsed.opcode(), Opcode::UPDATE);
    }

    #[test]
    fn find_and_get() {
        let msg = sample();
        assert!(msg
            .find_rrset(
                Section::Answer,
                &name("EXAMPLE."),
                Class::IN,
                Rtype::MX,
                Rtype::NONE,
                None
            )
            .is_ok());
        assert_eq!(
            msg.find_rrset(
                Section::Answer,
                &name("example."),
                Class::IN,
                Rtype::A,
                Rtype::NONE,
                None
            )
            .err(),
            Some(LookupError::NotFound)
        );
        assert!(msg
            .get_rrset(
                Section::Authority,
                &name("example."),
                Class::IN,
                Rtype::MX,
                Rtype::NONE,
                None
            )
            .is_none());
    }

    #[test]
    fn query_and_response() {
        let mut query =
            Message::make_query(name("www.example."), Rtype::A, Class::IN);
        query.want_dnssec(true);
        assert!(query.header_flags().rd);
        let response =
            Message::make_response(&query, true, 4096, 300).unwrap();
        assert_eq!(response.id(), query.id());
        assert!(response.header_flags().qr);
        assert!(response.header_flags().ra);
        assert_eq!(response.edns().map(|edns| edns.payload), Some(4096));
        assert!(query.is_response(&response));
        assert!(!response.is_response(&query));
        assert!(Message::make_response(&response, true, 4096, 300).is_err());

        let other =
            Message::make_query(name("ftp.example."), Rtype::A, Class::IN);
        let mut other = Message::make_response(&other, false, 512, 300)
            .unwrap();
        other.set_id(query.id());
        assert!(!query.is_response(&other));
        other.set_rcode(Rcode::SERVFAIL);
        assert!(query.is_response(&other));
    }

    #[test]
    fn update_sections() {
        let mut msg = Message::with_id(7);
        msg.set_opcode(Opcode::UPDATE);
        msg.find_or_create_rrset(
            Section::Question,
            &name("example."),
            Class::IN,
            Rtype::SOA,
            Rtype::NONE,
            None,
            true,
        );
        msg.find_or_create_rrset(
            Section::Authority,
            &name("old.example."),
            Class::IN,
            Rtype::ANY,
            Rtype::NONE,
            Some(Class::ANY),
            true,
        );
        let wire = msg.to_wire(&RenderOptions::default()).unwrap();
        let parsed = Message::from_wire(&wire, &ParseOptions::default())
            .unwrap();
        let rrset = &parsed.authority()[0];
        assert_eq!(rrset.deleting(), Some(Class::ANY));
        assert_eq!(rrset.rdclass(), Class::IN);
        assert!(rrset.is_empty());
        assert!(parsed.to_text(None, false).contains(";UPDATE\nold.example. ANY ANY"));
    }

    #[test]
    fn text_round_trip() {
        let mut msg = sample();
        msg.want_dnssec(true);
        let text = msg.to_text(None, false);
        assert_eq!(
            text,
            "id 4660\n\
             opcode QUERY\n\
             rcode NOERROR\n\
             flags QR AA RD\n\
             edns 0\n\
             eflags DO\n\
             payload 1280\n\
             ;QUESTION\n\
             example. IN MX\n\
             ;ANSWER\n\
             example. 3600 IN MX 10 mail.example.\n\
             ;AUTHORITY\n\
             example. 3600 IN NS ns.example.\n\
             ;ADDITIONAL\n\
             mail.example. 3600 IN A 10.0.0.1"
        );
        let parsed = Message::from_text(&text).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.edns(), msg.edns());
    }

    #[test]
    fn text_reuses_owner() {
        let msg = Message::from_text(
            "id 1\n\
             flags QR\n\
             ;ANSWER\n\
             www.example. 300 IN A 10.0.0.1\n\
             \x20300 IN A 10.0.0.2\n",
        )
        .unwrap();
        assert_eq!(msg.answer().len(), 1);
        assert_eq!(msg.answer()[0].len(), 2);
    }

    #[test]
    fn text_rejects_bad_ttl() {
        let res = Message::from_text(
            "id 1\n\
             ;ANSWER\n\
             www.example. 3x IN A 10.0.0.1\n",
        );
        assert_eq!(res.err(), Some(SyntaxError::BadTtl));
        assert!(Message::from_text(
            "id 1\n\
             ;ANSWER\n\
             www.example. 1h IN A 10.0.0.1\n",
        )
        .is_ok());
    }
}

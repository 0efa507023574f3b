//! Basics.
//!
//! This module provides the types for working with DNS data: creating it
//! from scratch, reading it from wire or presentation format, and writing
//! it back out.
//!
//!
//! ## Parsing and Composing
//!
//! In order to easily distinguish handling of the wire format from other
//! forms of representation such as the presentation format, we use the
//! term *parsing* for extracting data from a wire-format representation
//! and *composing* for producing such a representation. Reading the
//! presentation format is called *scanning*.
//!
//! Parsing happens on a [`WireBuffer`][wire::WireBuffer] holding a complete
//! DNS message, since compressed domain names may point anywhere into it.
//! Composing happens into any type implementing
//! [`Composer`][wire::Composer]. Plain vectors never compress names while
//! the message renderer in [message_builder] does.
//!
//! Unless you are adding your own record types, you are unlikely to deal
//! with parsing and composing directly. The [`Message`][message::Message]
//! type converts complete messages between all representations.
//!
//!
//! # Types for DNS Data
//!
//! These are arranged in submodules:
//!
//! * [charstr] for DNS character strings,
//! * [header] for the header of DNS messages and its flags,
//! * [iana] for the registries of record types, classes, and other codes,
//! * [name] for domain names,
//! * [opt] for EDNS and its options,
//! * [rdataset] and [rrset] for sets of records,
//! * [serial] for serial numbers and signature timestamps, and
//! * [ttl] for TTL values in presentation format.

pub mod charstr;
pub mod cmp;
pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod opt;
pub mod rdata;
pub mod rdataset;
pub mod rrset;
pub mod scan;
pub mod serial;
pub mod ttl;
pub mod wire;
pub mod zonefile_fmt;

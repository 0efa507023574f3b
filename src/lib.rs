//! A DNS protocol library.
//!
//! This crate provides the building blocks for working with DNS data:
//! domain names, resource records and record sets, and complete messages
//! in both wire format and presentation format. On top of these, it can
//! sign and verify messages with TSIG and validate DNSSEC signatures.
//!
//! It does no networking of its own. Messages are turned into octets and
//! back; how they travel is up to the caller.
//!
//! # Modules
//!
//! * [base] contains the fundamental types: names, the IANA registries,
//!   the wire format buffer and parser, record sets, and messages along
//!   with the renderer that turns them into wire format,
//! * [rdata] contains the record data of all supported record types,
//! * [tsig] implements transaction signatures for messages,
//! * [validate] verifies DNSSEC signatures and creates DS records, and
//! * [utils] holds the base 16, 32, and 64 codecs used by presentation
//!   format as well as some helpers.
//!
//! All modules report failures through their own error types. The
//! [`error::Error`] type collects them for use with `?`.
//!
//! The crate logs through [tracing](https://docs.rs/tracing) and leaves
//! installing a subscriber to the application.
//!
//! # Reference of Feature Flags
//!
//! * `legacy-crypto`: enables algorithms not provided by
//!   [ring](https://github.com/briansmith/ring): RSA/MD5 and DSA DNSSEC
//!   signatures, RSA keys shorter than 1024 bits, and HMAC-MD5 TSIG.
//! * `serde`: enables serialization of the IANA registry types via
//!   [serde](https://serde.rs/).

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod error;
pub mod rdata;
pub mod tsig;
pub mod utils;
pub mod validate;

#[cfg(test)]
pub mod logging;

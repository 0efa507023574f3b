//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant for this crate.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around an integer with associated constants for all the
//! well-defined values. Undefined values can still be represented and
//! compare equal to a constant of the same value.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` are implemented to convert from
//! the string codes to the values and back.
//!
//! Types also implement `parse()` and `compose()` methods for reading and
//! writing wire format.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here. This is mostly so we can have associated types like
//! `FromStrError` without having to resort to devilishly long names.

pub use self::certtype::CertType;
pub use self::class::Class;
pub use self::digestalg::DigestAlg;
pub use self::nsec3::Nsec3HashAlg;
pub use self::opcode::Opcode;
pub use self::opt::OptionCode;
pub use self::rcode::{Rcode, TsigRcode};
pub use self::rtype::Rtype;
pub use self::secalg::SecAlg;

#[macro_use]
mod macros;

pub mod certtype;
pub mod class;
pub mod digestalg;
pub mod nsec3;
pub mod opcode;
pub mod opt;
pub mod rcode;
pub mod rtype;
pub mod secalg;

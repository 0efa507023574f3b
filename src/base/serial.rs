//! Serial numbers.
//!
//! DNS uses 32 bit serial numbers in various places that are conceptionally
//! viewed as the 32 bit modulus of a larger number space. Because of that,
//! special rules apply when processing these values. This module provides
//! the type [`Serial`] that implements these rules.
//!
//! Serials are also used for the signature times of RRSIG records which
//! have a presentation format of their own.

use super::cmp::CanonicalOrd;
use super::scan::SyntaxError;
use super::wire::{Composer, ParseError, Parser};
use core::cmp::Ordering;
use core::str::FromStr;
use core::{cmp, fmt, str};
use std::time::{SystemTime, UNIX_EPOCH};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

//------------ Serial --------------------------------------------------------

/// A serial number.
///
/// Serial numbers are used in DNS to track changes to resources. For
/// instance, the SOA record type provides a serial number that expresses
/// the version of the zone. Since these numbers are only 32 bits long,
/// they can wrap. [RFC 1982] defined the semantics for doing arithmetics
/// in the face of these wrap-arounds. This type implements these semantics
/// atop a native `u32`.
///
/// For addition, the amount added can only be a positive number of up to
/// `2^31 - 1`. Because of this, there is a dedicated method `add` rather
/// than an implementation of the `Add` trait.
///
/// Serial numbers only implement a partial ordering. That is, there are
/// pairs of values that are not equal but there still isn’t one value
/// larger than the other.
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Serial(pub u32);

impl Serial {
    /// Returns a serial number for the current Unix time.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|dur| dur.as_secs())
            .unwrap_or(0);
        Self(secs as u32)
    }

    /// Returns the serial number as a raw integer.
    pub fn into_int(self) -> u32 {
        self.0
    }

    /// Add `other` to `self`.
    ///
    /// Returns `None` if `other` is greater than `2^31 - 1`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: u32) -> Option<Self> {
        if other > 0x7FFF_FFFF {
            None
        } else {
            Some(Serial(self.0.wrapping_add(other)))
        }
    }

    /// Reads a signature time from its presentation format.
    ///
    /// In RRSIG records, the expiration and inception times can either be
    /// given as a plain integer or a date in `YYYYMMDDHHmmSS` format.
    pub fn rrsig_from_str(src: &str) -> Result<Self, SyntaxError> {
        fn err<T>(_: T) -> SyntaxError {
            SyntaxError::Custom("illegal signature time")
        }

        if !src.bytes().all(|ch| ch.is_ascii_digit()) || src.is_empty() {
            return Err(err(()));
        }
        if src.len() != 14 {
            return Serial::from_str(src).map_err(err);
        }
        let year = i32::from_str(&src[0..4]).map_err(err)?;
        let month = Month::try_from(u8::from_str(&src[4..6]).map_err(err)?)
            .map_err(err)?;
        let day = u8::from_str(&src[6..8]).map_err(err)?;
        let hour = u8::from_str(&src[8..10]).map_err(err)?;
        let minute = u8::from_str(&src[10..12]).map_err(err)?;
        let second = u8::from_str(&src[12..14]).map_err(err)?;
        let stamp = PrimitiveDateTime::new(
            Date::from_calendar_date(year, month, day).map_err(err)?,
            Time::from_hms(hour, minute, second).map_err(err)?,
        )
        .assume_utc()
        .unix_timestamp();
        u32::try_from(stamp).map(Serial).map_err(err)
    }

    /// Returns the `YYYYMMDDHHmmSS` format of a signature time.
    pub fn rrsig_to_string(self) -> String {
        match OffsetDateTime::from_unix_timestamp(i64::from(self.0)) {
            Ok(time) => format!(
                "{:04}{:02}{:02}{:02}{:02}{:02}",
                time.year(),
                u8::from(time.month()),
                time.day(),
                time.hour(),
                time.minute(),
                time.second()
            ),
            Err(_) => self.0.to_string(),
        }
    }
}

/// # Parsing and Composing
///
impl Serial {
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        parser.parse_u32().map(Into::into)
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_u32(self.0)
    }
}

//--- From and FromStr

impl From<u32> for Serial {
    fn from(value: u32) -> Serial {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(serial: Serial) -> u32 {
        serial.0
    }
}

impl str::FromStr for Serial {
    type Err = <u32 as str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <u32 as str::FromStr>::from_str(s).map(Into::into)
    }
}

//--- Display

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--- PartialOrd

impl cmp::PartialOrd for Serial {
    fn partial_cmp(&self, other: &Serial) -> Option<cmp::Ordering> {
        match self.0.cmp(&other.0) {
            Ordering::Equal => Some(Ordering::Equal),
            Ordering::Less => {
                let sub = other.0 - self.0;
                match sub.cmp(&0x8000_0000) {
                    Ordering::Less => Some(Ordering::Less),
                    Ordering::Greater => Some(Ordering::Greater),
                    Ordering::Equal => None,
                }
            }
            Ordering::Greater => {
                let sub = self.0 - other.0;
                match sub.cmp(&0x8000_0000) {
                    Ordering::Less => Some(Ordering::Greater),
                    Ordering::Greater => Some(Ordering::Less),
                    Ordering::Equal => None,
                }
            }
        }
    }
}

impl CanonicalOrd for Serial {
    fn canonical_cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

//============ Testing =======================================================

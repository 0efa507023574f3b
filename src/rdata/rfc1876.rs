//! Record data from [RFC 1876]: the LOC record.
//!
//! [RFC 1876]: https://tools.ietf.org/html/rfc1876

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use core::fmt;

/// The wire value of the equator and the prime meridian.
const EQUATOR: i64 = 1 << 31;

/// The wire value of an altitude of zero.
const ALTITUDE_BASE: i64 = 10_000_000;

/// Thousandths of arc seconds in a degree.
const MS_PER_DEGREE: i64 = 3_600_000;

//------------ Loc -----------------------------------------------------------

/// Loc record data.
///
/// The record conveys the location of a host as latitude, longitude, and
/// altitude together with the size of the described sphere and its
/// horizontal and vertical precision.
///
/// All fields are kept in their wire encoding. Latitude and longitude are
/// thousandths of arc seconds offset by 2^31, the altitude is centimeters
/// above a base 100,000 meters below the WGS 84 spheroid. Size and
/// precisions are encoded as a base and power of ten of centimeters in the
/// upper and lower four bits of an octet.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Loc {
    size: u8,
    horiz_pre: u8,
    vert_pre: u8,
    latitude: u32,
    longitude: u32,
    altitude: u32,
}

impl Loc {
    /// The default size of 1 meter.
    pub const DEFAULT_SIZE: u8 = 0x12;

    /// The default horizontal precision of 10,000 meters.
    pub const DEFAULT_HORIZ_PRE: u8 = 0x16;

    /// The default vertical precision of 10 meters.
    pub const DEFAULT_VERT_PRE: u8 = 0x13;

    /// Creates record data from the wire values of its fields.
    ///
    /// Returns `None` if one of the size or precision values is not a
    /// valid encoding.
    pub fn new(
        latitude: u32,
        longitude: u32,
        altitude: u32,
        size: u8,
        horiz_pre: u8,
        vert_pre: u8,
    ) -> Option<Self> {
        for value in [size, horiz_pre, vert_pre] {
            decode_size(value)?;
        }
        Some(Loc {
            size,
            horiz_pre,
            vert_pre,
            latitude,
            longitude,
            altitude,
        })
    }

    pub fn latitude(&self) -> u32 {
        self.latitude
    }

    pub fn longitude(&self) -> u32 {
        self.longitude
    }

    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    /// Returns the size in centimeters.
    pub fn size_cm(&self) -> u64 {
        decode_size(self.size).unwrap_or(0)
    }

    /// Returns the horizontal precision in centimeters.
    pub fn horiz_pre_cm(&self) -> u64 {
        decode_size(self.horiz_pre).unwrap_or(0)
    }

    /// Returns the vertical precision in centimeters.
    pub fn vert_pre_cm(&self) -> u64 {
        decode_size(self.vert_pre).unwrap_or(0)
    }

    fn scan_coordinate(
        tok: &mut Tokenizer,
        max_degrees: i64,
        positive: &str,
        negative: &str,
    ) -> Result<u32, SyntaxError> {
        let mut value = i64::from(tok.get_u32()?) * MS_PER_DEGREE;
        let mut token = tok.get_identifier()?;
        if !is_hemisphere(&token, positive, negative) {
            let minutes = token.parse::<u8>().map_err(|_| SyntaxError::BadNumber)?;
            if minutes >= 60 {
                return Err(SyntaxError::Custom("bad LOC minutes"));
            }
            value += i64::from(minutes) * 60_000;
            token = tok.get_identifier()?;
            if !is_hemisphere(&token, positive, negative) {
                let ms = parse_decimal(&token, 3).ok_or(SyntaxError::BadNumber)?;
                if !(0..60_000).contains(&ms) {
                    return Err(SyntaxError::Custom("bad LOC seconds"));
                }
                value += ms;
                token = tok.get_identifier()?;
            }
        }
        if value > max_degrees * MS_PER_DEGREE {
            return Err(SyntaxError::Custom("LOC coordinate out of range"));
        }
        if token.eq_ignore_ascii_case(negative) {
            value = -value
        } else if !token.eq_ignore_ascii_case(positive) {
            return Err(SyntaxError::Custom("bad LOC hemisphere"));
        }
        Ok((EQUATOR + value) as u32)
    }

    fn scan_size(tok: &mut Tokenizer, default: u8) -> Result<u8, SyntaxError> {
        if tok.at_eol()? {
            return Ok(default);
        }
        let token = tok.get_identifier()?;
        let cm = parse_decimal(token.strip_suffix('m').unwrap_or(&token), 2)
            .ok_or(SyntaxError::BadNumber)?;
        u64::try_from(cm)
            .ok()
            .and_then(encode_size)
            .ok_or(SyntaxError::Custom("bad LOC size"))
    }
}

//--- RecordData

impl RecordData for Loc {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        if parser.parse_u8()? != 0 {
            return Err(ParseError::form_error("LOC version not zero"));
        }
        let size = parser.parse_u8()?;
        let horiz_pre = parser.parse_u8()?;
        let vert_pre = parser.parse_u8()?;
        Loc::new(
            parser.parse_u32()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
            size,
            horiz_pre,
            vert_pre,
        )
        .ok_or(ParseError::form_error("bad LOC size or precision"))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let latitude = Self::scan_coordinate(tok, 90, "N", "S")?;
        let longitude = Self::scan_coordinate(tok, 180, "E", "W")?;
        let altitude = tok.get_identifier()?;
        let altitude =
            parse_decimal(altitude.strip_suffix('m').unwrap_or(&altitude), 2)
                .map(|cm| cm + ALTITUDE_BASE)
                .and_then(|value| u32::try_from(value).ok())
                .ok_or(SyntaxError::Custom("bad LOC altitude"))?;
        let size = Self::scan_size(tok, Self::DEFAULT_SIZE)?;
        let horiz_pre = Self::scan_size(tok, Self::DEFAULT_HORIZ_PRE)?;
        let vert_pre = Self::scan_size(tok, Self::DEFAULT_VERT_PRE)?;
        Ok(Loc {
            size,
            horiz_pre,
            vert_pre,
            latitude,
            longitude,
            altitude,
        })
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_slice(&[0, self.size, self.horiz_pre, self.vert_pre]);
        target.append_u32(self.latitude);
        target.append_u32(self.longitude);
        target.append_u32(self.altitude);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Loc {
    fn present(&self, p: &mut Presenter) {
        for (value, positive, negative) in
            [(self.latitude, 'N', 'S'), (self.longitude, 'E', 'W')]
        {
            let mut value = i64::from(value) - EQUATOR;
            let hemisphere = if value < 0 {
                value = -value;
                negative
            } else {
                positive
            };
            p.write_token(value / MS_PER_DEGREE);
            value %= MS_PER_DEGREE;
            p.write_token(value / 60_000);
            value %= 60_000;
            p.write_token(format_args!("{}.{:03}", value / 1000, value % 1000));
            p.write_token(hemisphere);
        }
        p.write_token(Meters(i64::from(self.altitude) - ALTITUDE_BASE));
        for value in [self.size_cm(), self.horiz_pre_cm(), self.vert_pre_cm()] {
            p.write_token(Meters(value as i64))
        }
    }
}

//------------ Helpers -------------------------------------------------------

/// Displays a value in centimeters as meters.
struct Meters(i64);

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}m", sign, abs / 100, abs % 100)
    }
}

fn is_hemisphere(token: &str, positive: &str, negative: &str) -> bool {
    token.eq_ignore_ascii_case(positive) || token.eq_ignore_ascii_case(negative)
}

/// Parses a decimal number with up to `digits` fractional digits.
///
/// Returns the number scaled by `10^digits`.
fn parse_decimal(text: &str, digits: u32) -> Option<i64> {
    let (negative, text) = match text.strip_prefix('-') {
        Some(text) => (true, text),
        None => (false, text),
    };
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (text, ""),
    };
    if int.is_empty()
        || frac.len() > digits as usize
        || !int.bytes().chain(frac.bytes()).all(|ch| ch.is_ascii_digit())
    {
        return None;
    }
    let mut value = int.parse::<i64>().ok()?.checked_mul(10i64.pow(digits))?;
    if !frac.is_empty() {
        let scale = 10i64.pow(digits - frac.len() as u32);
        value = value.checked_add(frac.parse::<i64>().ok()? * scale)?;
    }
    Some(if negative { -value } else { value })
}

/// Decodes a size or precision value into centimeters.
fn decode_size(value: u8) -> Option<u64> {
    let base = value >> 4;
    let exponent = value & 0x0F;
    if base > 9 || exponent > 9 {
        return None;
    }
    Some(u64::from(base) * 10u64.pow(u32::from(exponent)))
}

/// Encodes centimeters as a size or precision value.
///
/// Digits beyond the most significant one are dropped.
fn encode_size(mut value: u64) -> Option<u8> {
    let mut exponent = 0u8;
    while value >= 10 {
        value /= 10;
        exponent += 1;
    }
    if exponent > 9 {
        None
    } else {
        Some(((value as u8) << 4) | exponent)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn size_encoding() {
        assert_eq!(encode_size(100), Some(0x12));
        assert_eq!(encode_size(1_000_000), Some(0x16));
        assert_eq!(encode_size(0), Some(0x00));
        assert_eq!(encode_size(250), Some(0x22));
        assert_eq!(decode_size(0x13), Some(1000));
        assert_eq!(decode_size(0xA0), None);
    }

    #[test]
    fn loc_text() {
        // Example from RFC 1876.
        let loc = Loc::scan_rdata(
            &mut Tokenizer::new("42 21 54 N 71 06 18 W -24m 30m"),
            None,
        )
        .unwrap();
        assert_eq!(loc.latitude(), 0x8000_0000 + 152_514_000);
        assert_eq!(loc.longitude(), 0x8000_0000 - 255_978_000);
        assert_eq!(loc.altitude(), 10_000_000 - 2400);
        assert_eq!(loc.size_cm(), 3000);
        assert_eq!(loc.horiz_pre_cm(), 1_000_000);
        assert_eq!(
            loc.to_text(None, false),
            "42 21 54.000 N 71 6 18.000 W -24.00m 30.00m 10000.00m 10.00m"
        );
    }

    #[test]
    fn loc_short_forms() {
        let loc =
            Loc::scan_rdata(&mut Tokenizer::new("52 N 4 E 0"), None).unwrap();
        assert_eq!(
            loc.to_text(None, false),
            "52 0 0.000 N 4 0 0.000 E 0.00m 1.00m 10000.00m 10.00m"
        );
        assert!(Loc::scan_rdata(&mut Tokenizer::new("91 N 4 E 0"), None)
            .is_err());
        assert!(Loc::scan_rdata(&mut Tokenizer::new("52 60 N 4 E 0"), None)
            .is_err());
    }

    #[test]
    fn loc_wire() {
        let loc = Loc::scan_rdata(
            &mut Tokenizer::new("60 9 0.510 N 24 39 0.000 E 10.00m 20m"),
            None,
        )
        .unwrap();
        let mut target = Vec::new();
        loc.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(target.len(), 16);
        assert_eq!(Loc::parse_rdata(&mut Parser::new(&target)).unwrap(), loc);
        target[0] = 1;
        assert!(Loc::parse_rdata(&mut Parser::new(&target)).is_err());
    }
}

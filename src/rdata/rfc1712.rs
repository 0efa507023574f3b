//! Record data from [RFC 1712]: the GPOS record.
//!
//! [RFC 1712]: https://tools.ietf.org/html/rfc1712

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use core::str::FromStr;

//------------ Gpos ----------------------------------------------------------

/// Gpos record data.
///
/// The geographical position is given as three character strings holding
/// decimal floating point numbers: the latitude, the longitude, and the
/// altitude in meters. Both wire and presentation format use this order.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Gpos {
    latitude: CharStr,
    longitude: CharStr,
    altitude: CharStr,
}

impl Gpos {
    /// Creates the record data, checking the range of the coordinates.
    pub fn new(
        latitude: CharStr,
        longitude: CharStr,
        altitude: CharStr,
    ) -> Result<Self, SyntaxError> {
        let lat = Self::float(&latitude)?;
        let long = Self::float(&longitude)?;
        Self::float(&altitude)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SyntaxError::Custom("bad latitude"));
        }
        if !(-180.0..=180.0).contains(&long) {
            return Err(SyntaxError::Custom("bad longitude"));
        }
        Ok(Gpos {
            latitude,
            longitude,
            altitude,
        })
    }

    fn float(value: &CharStr) -> Result<f64, SyntaxError> {
        core::str::from_utf8(value.as_slice())
            .ok()
            .and_then(|s| f64::from_str(s).ok())
            .filter(|v| v.is_finite())
            .ok_or(SyntaxError::BadNumber)
    }

    pub fn latitude(&self) -> &CharStr {
        &self.latitude
    }

    pub fn longitude(&self) -> &CharStr {
        &self.longitude
    }

    pub fn altitude(&self) -> &CharStr {
        &self.altitude
    }
}

impl RecordData for Gpos {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Gpos::new(
            CharStr::parse(parser)?,
            CharStr::parse(parser)?,
            CharStr::parse(parser)?,
        )
        .map_err(|_| ParseError::form_error("bad GPOS coordinates"))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Gpos::new(CharStr::scan(tok)?, CharStr::scan(tok)?, CharStr::scan(tok)?)
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.latitude.compose(target);
        self.longitude.compose(target);
        self.altitude.compose(target);
        Ok(())
    }
}

impl ZonefileFmt for Gpos {
    fn present(&self, p: &mut Presenter) {
        p.write_token(&self.latitude);
        p.write_token(&self.longitude);
        p.write_token(&self.altitude);
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gpos_text() {
        let gpos =
            Gpos::scan_rdata(&mut Tokenizer::new("-32.6882 116.8652 10.0"), None)
                .unwrap();
        assert_eq!(gpos.latitude().as_slice(), b"-32.6882");
        assert_eq!(gpos.longitude().as_slice(), b"116.8652");
        assert_eq!(gpos.to_text(None, false), "-32.6882 116.8652 10.0");

        let mut target = Vec::new();
        gpos.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(&target[..9], b"\x08-32.6882");
        assert_eq!(Gpos::parse_rdata(&mut Parser::new(&target)).unwrap(), gpos);

        assert!(Gpos::scan_rdata(&mut Tokenizer::new("91 0 0"), None).is_err());
        assert!(Gpos::scan_rdata(&mut Tokenizer::new("0 181 0"), None).is_err());
        assert!(Gpos::scan_rdata(&mut Tokenizer::new("0 x 0"), None).is_err());
    }
}

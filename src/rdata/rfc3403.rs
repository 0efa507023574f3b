//! Record data from [RFC 3403]: the NAPTR record.
//!
//! [RFC 3403]: https://tools.ietf.org/html/rfc3403

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Naptr ---------------------------------------------------------

/// Naptr record data.
///
/// The Naptr record stores rules for rewriting strings, used in dynamic
/// delegation discovery.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Naptr {
    order: u16,
    preference: u16,
    flags: CharStr,
    services: CharStr,
    regexp: CharStr,
    replacement: Name,
}

impl Naptr {
    pub fn new(
        order: u16,
        preference: u16,
        flags: CharStr,
        services: CharStr,
        regexp: CharStr,
        replacement: Name,
    ) -> Self {
        Naptr {
            order,
            preference,
            flags,
            services,
            regexp,
            replacement,
        }
    }

    /// The order in which records must be processed.
    pub fn order(&self) -> u16 {
        self.order
    }

    /// The order of records with equal order values.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn flags(&self) -> &CharStr {
        &self.flags
    }

    pub fn services(&self) -> &CharStr {
        &self.services
    }

    pub fn regexp(&self) -> &CharStr {
        &self.regexp
    }

    pub fn replacement(&self) -> &Name {
        &self.replacement
    }
}

impl RecordData for Naptr {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Naptr::new(
            parser.parse_u16()?,
            parser.parse_u16()?,
            CharStr::parse(parser)?,
            CharStr::parse(parser)?,
            CharStr::parse(parser)?,
            Name::parse(parser)?,
        ))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Naptr::new(
            tok.get_u16()?,
            tok.get_u16()?,
            CharStr::scan(tok)?,
            CharStr::scan(tok)?,
            CharStr::scan(tok)?,
            tok.get_name(origin)?,
        ))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.order);
        target.append_u16(self.preference);
        self.flags.compose(target);
        self.services.compose(target);
        self.regexp.compose(target);
        mode.compose_name(&self.replacement, target)
    }
}

impl ZonefileFmt for Naptr {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.order);
        p.write_token(self.preference);
        p.write_token(self.flags.display_quoted());
        p.write_token(self.services.display_quoted());
        p.write_token(self.regexp.display_quoted());
        p.write_name(&self.replacement);
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn naptr_text() {
        let text = "100 50 \"s\" \"http+I2L+I2C+I2R\" \"\" _http._tcp.gatech.edu.";
        let naptr = Naptr::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert_eq!(naptr.services().as_slice(), b"http+I2L+I2C+I2R");
        assert!(naptr.regexp().is_empty());
        assert_eq!(naptr.to_text(None, false), text);
    }
}

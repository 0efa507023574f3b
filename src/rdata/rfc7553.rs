//! Record data from [RFC 7553]: the URI record.
//!
//! [RFC 7553]: https://tools.ietf.org/html/rfc7553

use crate::base::charstr::display_quoted_octets;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{unescape, SyntaxError, Token, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Uri -----------------------------------------------------------

/// Uri record data.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Uri {
    priority: u16,
    weight: u16,
    target: Vec<u8>,
}

impl Uri {
    /// Creates new record data.
    ///
    /// Returns `None` if the target is empty.
    pub fn new(priority: u16, weight: u16, target: Vec<u8>) -> Option<Self> {
        if target.is_empty() {
            return None;
        }
        Some(Uri {
            priority,
            weight,
            target,
        })
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }
}

impl RecordData for Uri {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let priority = parser.parse_u16()?;
        let weight = parser.parse_u16()?;
        let target = parser.parse_remaining()?.to_vec();
        Uri::new(priority, weight, target)
            .ok_or(ParseError::form_error("URI target empty"))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let priority = tok.get_u16()?;
        let weight = tok.get_u16()?;
        let target = match tok.get()? {
            Token::QuotedString(value) => unescape(&value)?,
            Token::Eol | Token::Eof => return Err(SyntaxError::UnexpectedEnd),
            _ => return Err(SyntaxError::UnexpectedToken("quoted string")),
        };
        Uri::new(priority, weight, target)
            .ok_or(SyntaxError::Custom("URI target empty"))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u16(self.priority);
        target.append_u16(self.weight);
        target.append_slice(&self.target);
        Ok(())
    }
}

impl ZonefileFmt for Uri {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.priority);
        p.write_token(self.weight);
        p.write_token(display_quoted_octets(&self.target));
    }
}

//============ Testing =======================================================

//! Record data for the HINFO record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Hinfo --------------------------------------------------------

/// Hinfo record data.
///
/// Hinfo records are used to acquire general information about a host,
/// specifically the CPU type and operating system type.
///
/// The Hinfo type is defined in [RFC 1035, section 3.3.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.2
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hinfo {
    cpu: CharStr,
    os: CharStr,
}

impl Hinfo {
    /// Creates a new Hinfo record data from the components.
    pub fn new(cpu: CharStr, os: CharStr) -> Self {
        Hinfo { cpu, os }
    }

    /// The CPU type of the host.
    pub fn cpu(&self) -> &CharStr {
        &self.cpu
    }

    /// The operating system type of the host.
    pub fn os(&self) -> &CharStr {
        &self.os
    }
}

//--- RecordData

impl RecordData for Hinfo {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(CharStr::parse(parser)?, CharStr::parse(parser)?))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Self::new(CharStr::scan(tok)?, CharStr::scan(tok)?))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        self.cpu.compose(target);
        self.os.compose(target);
        Ok(())
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Hinfo {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.cpu.display_quoted());
        p.write_token(self.os.display_quoted());
    }
}

//============ Testing =======================================================

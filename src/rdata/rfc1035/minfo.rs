//! Record data for the MINFO record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Minfo --------------------------------------------------------

/// Minfo record data.
///
/// The Minfo record specifies a mailbox which is responsible for the
/// mailing list or mailbox and a mailbox that receives error messages
/// related to the list or box.
///
/// The Minfo record is experimental.
///
/// The Minfo record type is defined in [RFC 1035, section 3.3.7][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.7
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Minfo {
    rmailbx: Name,
    emailbx: Name,
}

impl Minfo {
    /// Creates a new Minfo record data from the components.
    pub fn new(rmailbx: Name, emailbx: Name) -> Self {
        Minfo { rmailbx, emailbx }
    }

    /// The responsible mail box.
    pub fn rmailbx(&self) -> &Name {
        &self.rmailbx
    }

    /// The error mail box.
    pub fn emailbx(&self) -> &Name {
        &self.emailbx
    }
}

//--- RecordData

impl RecordData for Minfo {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(Name::parse(parser)?, Name::parse(parser)?))
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Ok(Self::new(tok.get_name(origin)?, tok.get_name(origin)?))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        mode.compose_name(&self.rmailbx, target)?;
        mode.compose_name(&self.emailbx, target)
    }
}

//--- ZonefileFmt

impl ZonefileFmt for Minfo {
    fn present(&self, p: &mut Presenter) {
        p.write_name(&self.rmailbx);
        p.write_name(&self.emailbx);
    }
}

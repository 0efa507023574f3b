//! Record data from [RFC 6891]: the OPT record.
//!
//! The OPT record is a pseudo record that only appears in the additional
//! section of a message. Messages turn it into an [`Edns`] value, so this
//! type is only seen when dealing with records directly.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891
//! [`Edns`]: crate::base::opt::Edns

use super::generic::present_generic;
use crate::base::iana::OptionCode;
use crate::base::name::Name;
use crate::base::opt::{Edns, EdnsOption};
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Opt -----------------------------------------------------------

/// Opt record data.
///
/// The data is a sequence of EDNS options.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Opt {
    options: Vec<EdnsOption>,
}

impl Opt {
    pub fn new(options: Vec<EdnsOption>) -> Self {
        Opt { options }
    }

    pub fn options(&self) -> &[EdnsOption] {
        &self.options
    }

    pub fn into_options(self) -> Vec<EdnsOption> {
        self.options
    }

    /// Returns the first option with the given code.
    pub fn option(&self, code: OptionCode) -> Option<&EdnsOption> {
        self.options.iter().find(|opt| opt.code() == code)
    }
}

impl RecordData for Opt {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        Edns::parse_options(parser).map(Opt::new)
    }

    /// There is no presentation format for OPT records beyond the generic
    /// one.
    fn scan_rdata(
        _tok: &mut Tokenizer,
        _origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        Err(SyntaxError::Custom("OPT record data requires generic syntax"))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        Edns::compose_options(&self.options, target);
        Ok(())
    }
}

impl ZonefileFmt for Opt {
    fn present(&self, p: &mut Presenter) {
        let mut data = Vec::new();
        Edns::compose_options(&self.options, &mut data);
        present_generic(&data, p)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opt_generic_text() {
        let opt = Opt::new(vec![
            EdnsOption::new(OptionCode::NSID, b"ab".to_vec()).unwrap(),
        ]);
        assert_eq!(opt.to_text(None, false), "\\# 6 000300026162");
        assert!(opt.option(OptionCode::NSID).is_some());
        assert!(Opt::scan_rdata(&mut Tokenizer::new("\\# 0"), None).is_err());
    }
}

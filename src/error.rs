//! A crate-wide error type.
//!
//! Each module reports its own error type. [`Error`] collects all of them
//! so that code working across modules can use `?` throughout.

use crate::base::message::LookupError;
use crate::base::name::NameError;
use crate::base::rdataset::RdatasetError;
use crate::base::scan::SyntaxError;
use crate::base::wire::{ComposeError, ParseError};
use crate::tsig::TsigError;
use crate::validate::ValidationError;
use std::{error, fmt};

//------------ Error ---------------------------------------------------------

/// Any error produced by this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Wire format data was malformed.
    Parse(ParseError),

    /// Wire format data could not be created.
    Compose(ComposeError),

    /// A domain name was invalid.
    Name(NameError),

    /// Presentation format data was malformed.
    Syntax(SyntaxError),

    /// Record data did not fit a record set.
    Rdataset(RdatasetError),

    /// A record set was not found in a message.
    Lookup(LookupError),

    /// TSIG signing or verification failed.
    Tsig(TsigError),

    /// A DNSSEC signature did not validate.
    Validation(ValidationError),
}

//--- From

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<ComposeError> for Error {
    fn from(err: ComposeError) -> Self {
        Error::Compose(err)
    }
}

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        Error::Name(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl From<RdatasetError> for Error {
    fn from(err: RdatasetError) -> Self {
        Error::Rdataset(err)
    }
}

impl From<LookupError> for Error {
    fn from(err: LookupError) -> Self {
        Error::Lookup(err)
    }
}

impl From<TsigError> for Error {
    fn from(err: TsigError) -> Self {
        Error::Tsig(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref err) => err.fmt(f),
            Error::Compose(ref err) => err.fmt(f),
            Error::Name(ref err) => err.fmt(f),
            Error::Syntax(ref err) => err.fmt(f),
            Error::Rdataset(ref err) => err.fmt(f),
            Error::Lookup(ref err) => err.fmt(f),
            Error::Tsig(ref err) => err.fmt(f),
            Error::Validation(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Parse(ref err) => Some(err),
            Error::Compose(ref err) => Some(err),
            Error::Name(ref err) => Some(err),
            Error::Syntax(ref err) => Some(err),
            Error::Rdataset(ref err) => Some(err),
            Error::Lookup(ref err) => Some(err),
            Error::Tsig(ref err) => Some(err),
            Error::Validation(ref err) => Some(err),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::message::{Message, ParseOptions};
    use crate::base::name::Name;

    fn parse(wire: &[u8], name: &str) -> Result<(Message, Name), Error> {
        let msg = Message::from_wire(wire, &ParseOptions::default())?;
        let name = Name::from_text(name, None)?;
        Ok((msg, name))
    }

    #[test]
    fn question_mark_across_modules() {
        assert_eq!(
            parse(b"\0\0\0", "a."),
            Err(Error::Parse(ParseError::ShortHeader))
        );
        let err = parse(&[0; 12], "a..").unwrap_err();
        assert!(matches!(err, Error::Name(_)));
        assert!(error::Error::source(&err).is_some());
    }
}

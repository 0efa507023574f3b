//! Record data from [RFC 2535]: the NXT record.
//!
//! The KEY and SIG types of this RFC share their layout with DNSKEY and
//! RRSIG and use [`Dnskey`][super::Dnskey] and [`Rrsig`][super::Rrsig].
//!
//! [RFC 2535]: https://tools.ietf.org/html/rfc2535

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};

//------------ Nxt -----------------------------------------------------------

/// Nxt record data.
///
/// The predecessor of NSEC. The types present at the owner are given as a
/// plain bitmap that can only cover the types 1 to 127.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nxt {
    next_name: Name,
    bitmap: Vec<u8>,
}

impl Nxt {
    /// The largest type that can be represented in the bitmap.
    pub const MAX_TYPE: u16 = 127;

    /// Creates the record data from the next name and a list of types.
    ///
    /// Returns `None` if one of the types cannot be represented.
    pub fn new(
        next_name: Name,
        types: impl IntoIterator<Item = Rtype>,
    ) -> Option<Self> {
        let mut bitmap = Vec::new();
        for rtype in types {
            let value = rtype.to_int();
            if value == 0 || value > Self::MAX_TYPE {
                return None;
            }
            let byte = usize::from(value / 8);
            if bitmap.len() <= byte {
                bitmap.resize(byte + 1, 0);
            }
            bitmap[byte] |= 0x80 >> (value % 8);
        }
        Some(Nxt { next_name, bitmap })
    }

    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Returns an iterator over the types in the bitmap.
    pub fn types(&self) -> impl Iterator<Item = Rtype> + '_ {
        self.bitmap.iter().enumerate().flat_map(|(i, &byte)| {
            (0..8u16)
                .filter(move |bit| byte & (0x80 >> bit) != 0)
                .map(move |bit| Rtype::from_int((i as u16) * 8 + bit))
        })
    }

    pub fn contains(&self, rtype: Rtype) -> bool {
        let value = rtype.to_int();
        match self.bitmap.get(usize::from(value / 8)) {
            Some(byte) => byte & (0x80 >> (value % 8)) != 0,
            None => false,
        }
    }
}

impl RecordData for Nxt {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let next_name = Name::parse(parser)?;
        let bitmap = parser.parse_remaining()?;
        if bitmap.len() > 16 {
            return Err(ParseError::form_error("NXT bitmap too long"));
        }
        if bitmap.first().map(|byte| byte & 0x80 != 0).unwrap_or(false) {
            return Err(ParseError::form_error("unsupported NXT bitmap format"));
        }
        Ok(Nxt {
            next_name,
            bitmap: bitmap.to_vec(),
        })
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let next_name = tok.get_name(origin)?;
        let mut types = Vec::new();
        while !tok.at_eol()? {
            types.push(tok.get_mnemonic(Rtype::from_bytes)?);
        }
        Nxt::new(next_name, types)
            .ok_or(SyntaxError::Custom("type not allowed in NXT bitmap"))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        mode.compose_name(&self.next_name, target)?;
        target.append_slice(&self.bitmap);
        Ok(())
    }
}

impl ZonefileFmt for Nxt {
    fn present(&self, p: &mut Presenter) {
        p.write_name(&self.next_name);
        for rtype in self.types() {
            p.write_token(rtype)
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nxt_text() {
        let nxt = Nxt::scan_rdata(
            &mut Tokenizer::new("medium.example. A MX SIG NXT"),
            None,
        )
        .unwrap();
        assert!(nxt.contains(Rtype::MX));
        assert!(!nxt.contains(Rtype::NS));
        assert_eq!(nxt.to_text(None, false), "medium.example. A MX SIG NXT");
        assert!(Nxt::scan_rdata(&mut Tokenizer::new("a. A TYPE200"), None)
            .is_err());
    }
}

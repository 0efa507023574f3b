//! Record data from [RFC 5205]: the HIP record.
//!
//! [RFC 5205]: https://tools.ietf.org/html/rfc5205

use crate::base::name::Name;
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::scan::{SyntaxError, Tokenizer};
use crate::base::wire::{ComposeError, Composer, ParseError, Parser};
use crate::base::zonefile_fmt::{Presenter, ZonefileFmt};
use crate::utils::{base16, base64};

//------------ Hip -----------------------------------------------------------

/// Hip record data.
///
/// The record stores a host identity tag, the host identity public key,
/// and an optional list of rendezvous servers.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hip {
    algorithm: u8,
    hit: Vec<u8>,
    key: Vec<u8>,
    servers: Vec<Name>,
}

impl Hip {
    /// Creates record data from its components.
    ///
    /// Returns `None` if the tag is longer than 255 octets or the key
    /// longer than 65535 octets.
    pub fn new(
        algorithm: u8,
        hit: Vec<u8>,
        key: Vec<u8>,
        servers: Vec<Name>,
    ) -> Option<Self> {
        if hit.len() > usize::from(u8::MAX) || key.len() > usize::from(u16::MAX)
        {
            return None;
        }
        Some(Hip {
            algorithm,
            hit,
            key,
            servers,
        })
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// Returns the host identity tag.
    pub fn hit(&self) -> &[u8] {
        &self.hit
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Returns the rendezvous servers.
    pub fn servers(&self) -> &[Name] {
        &self.servers
    }
}

impl RecordData for Hip {
    fn parse_rdata(parser: &mut Parser) -> Result<Self, ParseError> {
        let hit_len = parser.parse_u8()?;
        let algorithm = parser.parse_u8()?;
        let key_len = parser.parse_u16()?;
        let hit = parser.parse_octets(usize::from(hit_len))?.to_vec();
        let key = parser.parse_octets(usize::from(key_len))?.to_vec();
        let mut servers = Vec::new();
        while parser.remaining() > 0 {
            servers.push(Name::parse(parser)?);
        }
        Ok(Hip {
            algorithm,
            hit,
            key,
            servers,
        })
    }

    fn scan_rdata(
        tok: &mut Tokenizer,
        origin: Option<&Name>,
    ) -> Result<Self, SyntaxError> {
        let algorithm = tok.get_u8()?;
        let hit = base16::decode_vec(&tok.get_identifier()?)?;
        let key = base64::decode(&tok.get_identifier()?)?;
        let mut servers = Vec::new();
        while !tok.at_eol()? {
            servers.push(tok.get_name(origin)?);
        }
        Hip::new(algorithm, hit, key, servers)
            .ok_or(SyntaxError::Custom("HIP tag or key too long"))
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        mode: ComposeMode,
    ) -> Result<(), ComposeError> {
        target.append_u8(self.hit.len() as u8);
        target.append_u8(self.algorithm);
        target.append_u16(self.key.len() as u16);
        target.append_slice(&self.hit);
        target.append_slice(&self.key);
        for server in &self.servers {
            mode.compose_name(server, target)?;
        }
        Ok(())
    }
}

impl ZonefileFmt for Hip {
    fn present(&self, p: &mut Presenter) {
        p.write_token(self.algorithm);
        p.write_token(base16::encode_display(&self.hit));
        p.write_token(base64::encode_display(&self.key));
        for server in &self.servers {
            p.write_name(server);
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hip_text_and_wire() {
        let text = "2 200100107b1a74df365639cc39f1d578 \
                    AwEAAbdxyhNuSutc5EMzxTs9LBPCIkOFH8cIvM4p9+LrV4e19WzK00+C \
                    rvs1.example.com. rvs2.example.com.";
        let hip = Hip::scan_rdata(&mut Tokenizer::new(text), None).unwrap();
        assert_eq!(hip.hit().len(), 16);
        assert_eq!(hip.servers().len(), 2);
        assert_eq!(hip.to_text(None, false), text);

        let mut target = Vec::new();
        hip.compose_rdata(&mut target, ComposeMode::new(None)).unwrap();
        assert_eq!(target[0], 16);
        assert_eq!(Hip::parse_rdata(&mut Parser::new(&target)).unwrap(), hip);
    }
}

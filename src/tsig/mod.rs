//! Support for TSIG.
//!
//! This module provides support for signing messages with TSIG as defined
//! in [RFC 2845].
//!
//! TSIG is intended to provide authentication for message exchanges.
//! Messages are signed using a secret key shared between the two
//! participants. The sender generates a signature over the message using
//! that key and adds it in a record of type TSIG as the last record of the
//! additional section. The receiver verifies the signature using the same
//! key. When answering a signed request, the signature of the request is
//! included in the signature of the answer, binding the two together.
//!
//! Keys are managed via the [`Key`] type which ties together the name of
//! the key, its algorithm, and the secret. A [`Keyring`] collects keys by
//! their name for looking up the key of a received message.
//!
//! The algorithms provided by *ring* are always available. HMAC-MD5 is
//! only available with the `legacy-crypto` feature. HMAC-SHA224 is known
//! by name but cannot be used for signing or verifying.
//!
//! Signing and verifying are normally done by the message renderer and
//! parser. The functions [`sign`] and [`verify`] provide the underlying
//! operations on raw message data.
//!
//! [RFC 2845]: https://tools.ietf.org/html/rfc2845

use crate::base::iana::{Class, Rtype, TsigRcode};
use crate::base::name::Name;
use crate::base::wire::{ComposeError, Composer};
use crate::rdata::rfc2845::Tsig;
use crate::utils::base64;
use core::{fmt, str};
use ring::{constant_time, hmac};
use std::collections::HashMap;
use tracing::{debug, trace};

//------------ Key -----------------------------------------------------------

/// A key for creating and validating TSIG signatures.
///
/// Keys are identified in TSIG through a name that is encoded as a domain
/// name. While the TSIG specification allows a key to be used with any
/// algorithm, we tie them together, so each `Key` value also knows which
/// algorithm it can be used for.
#[derive(Clone, Eq, PartialEq)]
pub struct Key {
    /// The name of the key as a domain name.
    name: Name,

    /// The algorithm the key is used with.
    algorithm: Algorithm,

    /// The secret octets of the key.
    secret: Vec<u8>,
}

impl Key {
    /// Creates a new key from its components.
    pub fn new(name: Name, algorithm: Algorithm, secret: Vec<u8>) -> Self {
        Key {
            name,
            algorithm,
            secret,
        }
    }

    /// Creates a new key from a Base 64 encoded secret.
    pub fn from_base64(
        name: Name,
        algorithm: Algorithm,
        secret: &str,
    ) -> Result<Self, base64::DecodeError> {
        Ok(Self::new(name, algorithm, base64::decode(secret)?))
    }

    /// Returns a reference to the name of this key.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the algorithm of this key.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

//--- Debug

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

//------------ Keyring -------------------------------------------------------

/// A collection of keys indexed by their name.
#[derive(Clone, Debug, Default)]
pub struct Keyring {
    keys: HashMap<Name, Key>,
}

impl Keyring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key, replacing a key of the same name.
    pub fn insert(&mut self, key: Key) -> Option<Key> {
        self.keys.insert(key.name.clone(), key)
    }

    /// Returns the key with the given name.
    pub fn get(&self, name: &Name) -> Option<&Key> {
        self.keys.get(name)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<Key> for Keyring {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut res = Self::new();
        for key in iter {
            res.insert(key);
        }
        res
    }
}

//------------ TsigOptions ---------------------------------------------------

/// The parameters for signing a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TsigOptions {
    /// The key to sign with.
    pub key: Key,

    /// Seconds of error permitted in the time signed.
    pub fudge: u16,

    /// The message ID placed into the TSIG record.
    ///
    /// If `None`, the ID of the message is used.
    pub original_id: Option<u16>,

    /// The TSIG error to report.
    pub error: TsigRcode,

    /// Other data, for instance the server time with BADTIME.
    pub other: Vec<u8>,
}

impl TsigOptions {
    /// The default fudge value of five minutes.
    pub const DEFAULT_FUDGE: u16 = 300;

    /// Creates options for signing with `key` using default values.
    pub fn new(key: Key) -> Self {
        TsigOptions {
            key,
            fudge: Self::DEFAULT_FUDGE,
            original_id: None,
            error: TsigRcode::NOERROR,
            other: Vec::new(),
        }
    }
}

//------------ Algorithm -----------------------------------------------------

/// The TSIG algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    HmacMd5,
    HmacSha1,
    HmacSha224,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl Algorithm {
    /// The algorithm used if none is given.
    pub const DEFAULT: Self = Algorithm::HmacSha256;

    /// Returns the name of the algorithm in presentation format.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::HmacMd5 => "HMAC-MD5.SIG-ALG.REG.INT.",
            Algorithm::HmacSha1 => "hmac-sha1.",
            Algorithm::HmacSha224 => "hmac-sha224.",
            Algorithm::HmacSha256 => "hmac-sha256.",
            Algorithm::HmacSha384 => "hmac-sha384.",
            Algorithm::HmacSha512 => "hmac-sha512.",
        }
    }

    /// Returns the domain name representing the algorithm.
    pub fn to_name(self) -> Name {
        // The names are static and valid.
        Name::from_text(self.as_str(), None).unwrap_or_else(|_| Name::root())
    }

    /// Returns the algorithm for its domain name representation.
    pub fn from_name(name: &Name) -> Option<Self> {
        [
            Algorithm::HmacMd5,
            Algorithm::HmacSha1,
            Algorithm::HmacSha224,
            Algorithm::HmacSha256,
            Algorithm::HmacSha384,
            Algorithm::HmacSha512,
        ]
        .into_iter()
        .find(|alg| alg.to_name() == *name)
    }

    /// Returns the ring HMAC algorithm if ring provides this algorithm.
    fn ring_algorithm(self) -> Option<hmac::Algorithm> {
        match self {
            Algorithm::HmacSha1 => Some(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY),
            Algorithm::HmacSha256 => Some(hmac::HMAC_SHA256),
            Algorithm::HmacSha384 => Some(hmac::HMAC_SHA384),
            Algorithm::HmacSha512 => Some(hmac::HMAC_SHA512),
            Algorithm::HmacMd5 | Algorithm::HmacSha224 => None,
        }
    }

    /// Calculates the MAC over `data`.
    fn sign(self, secret: &[u8], data: &[u8]) -> Result<Vec<u8>, TsigError> {
        if let Some(alg) = self.ring_algorithm() {
            let key = hmac::Key::new(alg, secret);
            return Ok(hmac::sign(&key, data).as_ref().to_vec());
        }
        #[cfg(feature = "legacy-crypto")]
        if self == Algorithm::HmacMd5 {
            return Ok(hmac_md5(secret, data));
        }
        Err(TsigError::BadAlgorithm)
    }

    /// Checks that `mac` is the MAC over `data`.
    fn verify(
        self,
        secret: &[u8],
        data: &[u8],
        mac: &[u8],
    ) -> Result<(), TsigError> {
        if let Some(alg) = self.ring_algorithm() {
            let key = hmac::Key::new(alg, secret);
            return hmac::verify(&key, data, mac)
                .map_err(|_| TsigError::BadSignature);
        }
        let expected = self.sign(secret, data)?;
        constant_time::verify_slices_are_equal(&expected, mac)
            .map_err(|_| TsigError::BadSignature)
    }
}

//--- FromStr

impl str::FromStr for Algorithm {
    type Err = TsigError;

    /// Converts a name into the algorithm.
    ///
    /// The final dot is optional and case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = Name::from_text(s, Some(&Name::root()))
            .map_err(|_| TsigError::BadAlgorithm)?;
        Self::from_name(&name).ok_or(TsigError::BadAlgorithm)
    }
}

//--- Display

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//------------ sign and verify -----------------------------------------------

/// Creates the TSIG record data for a message.
///
/// The `message` must be the complete message in wire format without the
/// TSIG record and with the header counts not including it. The ID of the
/// message is replaced by `original_id` for calculating the MAC. If the
/// message is the answer to a signed request, `request_mac` must be the
/// MAC of that request.
#[allow(clippy::too_many_arguments)]
pub fn sign(
    message: &[u8],
    key: &Key,
    time_signed: u64,
    fudge: u16,
    original_id: u16,
    error: TsigRcode,
    other: &[u8],
    request_mac: &[u8],
) -> Result<Tsig, TsigError> {
    let tsig = Tsig::new(
        key.algorithm.to_name(),
        time_signed,
        fudge,
        Vec::new(),
        original_id,
        error,
        other.to_vec(),
    )
    .map_err(|_| TsigError::Form)?;
    let data = signed_data(message, &key.name, &tsig, request_mac)?;
    let mac = key.algorithm.sign(&key.secret, &data)?;
    trace!(key = %key.name, algorithm = %key.algorithm, "signed message");
    Tsig::new(
        key.algorithm.to_name(),
        time_signed,
        fudge,
        mac,
        original_id,
        error,
        other.to_vec(),
    )
    .map_err(|_| TsigError::Form)
}

/// Verifies the TSIG record of a received message.
///
/// The `message` is the complete received message. Its TSIG record starts
/// at `tsig_start` and has the data `tsig`. `now` is the current time as
/// seconds since the Unix epoch.
pub fn verify(
    message: &[u8],
    key: &Key,
    tsig: &Tsig,
    tsig_start: usize,
    now: u64,
    request_mac: &[u8],
) -> Result<(), TsigError> {
    let algorithm =
        Algorithm::from_name(tsig.algorithm()).ok_or(TsigError::BadAlgorithm)?;
    if algorithm != key.algorithm {
        debug!(key = %key.name, "TSIG algorithm doesn't match key");
        return Err(TsigError::UnknownKey);
    }
    match tsig.error() {
        TsigRcode::NOERROR => {}
        TsigRcode::BADSIG => return Err(TsigError::PeerBadSignature),
        TsigRcode::BADKEY => return Err(TsigError::PeerBadKey),
        TsigRcode::BADTIME => return Err(TsigError::PeerBadTime),
        TsigRcode::BADTRUNC => return Err(TsigError::PeerBadTruncation),
        rcode => return Err(TsigError::PeerError(rcode)),
    }
    if !tsig.is_valid_at(now) {
        debug!(
            time_signed = tsig.time_signed(),
            now, "TSIG outside of time window"
        );
        return Err(TsigError::BadTime);
    }
    let unsigned = unsigned_message(message, tsig_start, tsig.original_id())?;
    let data = signed_data(&unsigned, &key.name, tsig, request_mac)?;
    algorithm.verify(&key.secret, &data, tsig.mac())?;
    trace!(key = %key.name, "verified TSIG");
    Ok(())
}

/// Reconstructs the message as it was before the TSIG was added.
fn unsigned_message(
    message: &[u8],
    tsig_start: usize,
    original_id: u16,
) -> Result<Vec<u8>, TsigError> {
    let (header, rest) = message
        .get(..tsig_start)
        .filter(|data| data.len() >= 12)
        .map(|data| data.split_at(12))
        .ok_or(TsigError::Form)?;
    let arcount = u16::from_be_bytes([header[10], header[11]])
        .checked_sub(1)
        .ok_or(TsigError::Form)?;
    let mut res = Vec::with_capacity(tsig_start);
    res.append_u16(original_id);
    res.append_slice(&header[2..10]);
    res.append_u16(arcount);
    res.append_slice(rest);
    Ok(res)
}

/// Assembles the data the MAC is calculated over.
fn signed_data(
    message: &[u8],
    key_name: &Name,
    tsig: &Tsig,
    request_mac: &[u8],
) -> Result<Vec<u8>, TsigError> {
    let mut res = Vec::new();
    if !request_mac.is_empty() {
        let len = u16::try_from(request_mac.len())
            .map_err(|_| TsigError::Form)?;
        res.append_u16(len);
        res.append_slice(request_mac);
    }
    res.append_u16(tsig.original_id());
    res.append_slice(message.get(2..).ok_or(TsigError::Form)?);
    compose_variables(&mut res, key_name, tsig)
        .map_err(|_| TsigError::Form)?;
    Ok(res)
}

/// Appends the TSIG variables of section 3.4 of RFC 2845.
fn compose_variables(
    target: &mut Vec<u8>,
    key_name: &Name,
    tsig: &Tsig,
) -> Result<(), ComposeError> {
    key_name.compose_canonical(target, None)?;
    Class::ANY.compose(target);
    target.append_u32(0);
    tsig.algorithm().compose_canonical(target, None)?;
    target.append_slice(&tsig.time_signed().to_be_bytes()[2..]);
    target.append_u16(tsig.fudge());
    tsig.error().compose(target);
    let len =
        u16::try_from(tsig.other().len()).map_err(|_| ComposeError::LongData)?;
    target.append_u16(len);
    target.append_slice(tsig.other());
    Ok(())
}

/// Returns the record type used for TSIG records.
pub const RTYPE: Rtype = Rtype::TSIG;

//------------ HMAC-MD5 ------------------------------------------------------

/// Calculates HMAC-MD5 as defined in RFC 2104.
#[cfg(feature = "legacy-crypto")]
fn hmac_md5(secret: &[u8], data: &[u8]) -> Vec<u8> {
    use md5::{Digest, Md5};

    const BLOCK_LEN: usize = 64;

    let mut key = [0u8; BLOCK_LEN];
    if secret.len() > BLOCK_LEN {
        key[..16].copy_from_slice(&Md5::digest(secret));
    } else {
        key[..secret.len()].copy_from_slice(secret);
    }
    let mut inner = Md5::new();
    inner.update(key.map(|octet| octet ^ 0x36));
    inner.update(data);
    let mut outer = Md5::new();
    outer.update(key.map(|octet| octet ^ 0x5c));
    outer.update(inner.finalize());
    outer.finalize().to_vec()
}

//============ Error Types ===================================================

//------------ TsigError -----------------------------------------------------

/// Signing or verifying a message with TSIG failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TsigError {
    /// The key used by the message is not known.
    UnknownKey,

    /// The algorithm is unknown or not supported.
    BadAlgorithm,

    /// The MAC of the message is wrong.
    BadSignature,

    /// The message was signed outside of the permitted time window.
    BadTime,

    /// The peer didn't know our key.
    PeerBadKey,

    /// The peer failed to verify our MAC.
    PeerBadSignature,

    /// The peer considered our time signed outside of its window.
    PeerBadTime,

    /// The peer didn't accept our truncated MAC.
    PeerBadTruncation,

    /// The peer reported some other TSIG error.
    PeerError(TsigRcode),

    /// The TSIG record or the message was malformed.
    Form,
}

//--- Display and Error

impl fmt::Display for TsigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TsigError::UnknownKey => f.write_str("unknown TSIG key"),
            TsigError::BadAlgorithm => {
                f.write_str("unknown or unsupported TSIG algorithm")
            }
            TsigError::BadSignature => f.write_str("bad TSIG signature"),
            TsigError::BadTime => f.write_str("TSIG time outside of window"),
            TsigError::PeerBadKey => {
                f.write_str("peer didn't know the TSIG key")
            }
            TsigError::PeerBadSignature => {
                f.write_str("peer failed to verify the TSIG signature")
            }
            TsigError::PeerBadTime => f.write_str("peer reported bad time"),
            TsigError::PeerBadTruncation => {
                f.write_str("peer reported bad truncation")
            }
            TsigError::PeerError(rcode) => {
                write!(f, "peer reported TSIG error {}", rcode)
            }
            TsigError::Form => f.write_str("malformed TSIG data"),
        }
    }
}

impl std::error::Error for TsigError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn key() -> Key {
        Key::from_base64(
            "keyname.".parse().unwrap(),
            Algorithm::HmacSha256,
            "c2VjcmV0",
        )
        .unwrap()
    }

    // A query for example. IN A with arcount already including the TSIG.
    fn query(arcount: u8) -> Vec<u8> {
        let mut res = vec![
            0x12, 0x34, 0x01, 0x00, 0, 1, 0, 0, 0, 0, 0, arcount,
        ];
        res.extend_from_slice(b"\x07example\x00\x00\x01\x00\x01");
        res
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(
            "hmac-sha256".parse::<Algorithm>(),
            Ok(Algorithm::HmacSha256)
        );
        assert_eq!(
            "hmac-md5.sig-alg.reg.int.".parse::<Algorithm>(),
            Ok(Algorithm::HmacMd5)
        );
        assert_eq!(
            "hmac-sha3".parse::<Algorithm>(),
            Err(TsigError::BadAlgorithm)
        );
        assert_eq!(Algorithm::HmacSha1.to_string(), "hmac-sha1.");
    }

    #[test]
    fn sign_then_verify() {
        crate::logging::init_logging();
        let key = key();
        let unsigned = query(0);
        let tsig = sign(
            &unsigned,
            &key,
            1_000_000,
            300,
            0x1234,
            TsigRcode::NOERROR,
            b"",
            b"",
        )
        .unwrap();
        assert_eq!(tsig.mac().len(), 32);

        let mut signed = query(1);
        let tsig_start = signed.len();
        signed.extend_from_slice(b"\x07keyname\x00");
        assert_eq!(
            verify(&signed, &key, &tsig, tsig_start, 1_000_100, b""),
            Ok(())
        );
        assert_eq!(
            verify(&signed, &key, &tsig, tsig_start, 1_000_400, b""),
            Err(TsigError::BadTime)
        );
        assert_eq!(
            verify(&signed, &key, &tsig, tsig_start, 1_000_100, b"\x01"),
            Err(TsigError::BadSignature)
        );

        let other = Key::from_base64(
            "keyname.".parse().unwrap(),
            Algorithm::HmacSha256,
            "b3RoZXI=",
        )
        .unwrap();
        assert_eq!(
            verify(&signed, &other, &tsig, tsig_start, 1_000_100, b""),
            Err(TsigError::BadSignature)
        );
    }

    #[test]
    fn peer_errors() {
        let key = key();
        let tsig = sign(
            &query(0),
            &key,
            1_000_000,
            300,
            0x1234,
            TsigRcode::BADKEY,
            b"",
            b"",
        )
        .unwrap();
        let signed = query(1);
        assert_eq!(
            verify(&signed, &key, &tsig, signed.len(), 1_000_000, b""),
            Err(TsigError::PeerBadKey)
        );
    }

    #[test]
    fn sha224_is_unsupported() {
        let key = Key::new(
            "keyname.".parse().unwrap(),
            Algorithm::HmacSha224,
            b"secret".to_vec(),
        );
        assert_eq!(
            sign(&query(0), &key, 0, 300, 1, TsigRcode::NOERROR, b"", b"")
                .err(),
            Some(TsigError::BadAlgorithm)
        );
    }

    #[cfg(feature = "legacy-crypto")]
    #[test]
    fn hmac_md5_rfc2104() {
        // Test case 2 from RFC 2104.
        assert_eq!(
            hmac_md5(b"Jefe", b"what do ya want for nothing?"),
            b"\x75\x0c\x78\x3e\x6a\xb0\xb5\x03\xea\xa8\x6e\x31\x0a\x5d\xb7\x38"
        );
    }

    #[cfg(feature = "legacy-crypto")]
    #[test]
    fn hmac_md5_verify() {
        let data = b"what do ya want for nothing?";
        let mac = hmac_md5(b"Jefe", data);
        assert_eq!(Algorithm::HmacMd5.verify(b"Jefe", data, &mac), Ok(()));
        assert_eq!(
            Algorithm::HmacMd5.verify(b"Jefe", data, &mac[..15]),
            Err(TsigError::BadSignature)
        );
        assert_eq!(
            Algorithm::HmacMd5.verify(b"Jeff", data, &mac),
            Err(TsigError::BadSignature)
        );
    }

    #[test]
    fn verify_rejects_short_mac() {
        let mac = Algorithm::HmacSha256.sign(b"secret", b"data").unwrap();
        assert_eq!(Algorithm::HmacSha256.verify(b"secret", b"data", &mac), Ok(()));
        assert_eq!(
            Algorithm::HmacSha256.verify(b"secret", b"data", &mac[..16]),
            Err(TsigError::BadSignature)
        );
    }
}

//! DNSSEC validation.
//!
//! This module verifies RRSIG records over RRsets using a set of trusted
//! DNSKEY records and creates DS records from keys. It does not build or
//! follow chains of trust. Deciding which keys to trust is up to the
//! caller.
//!
//! Keys are handed in as a map from owner name to the DNSKEY record set
//! of that name. For each signature, the candidate keys are those at the
//! signer's name with the signature's algorithm and key tag.
//!
//! The algorithms RSA/SHA-1, RSA/SHA-256, RSA/SHA-512, ECDSA P-256 and
//! P-384, and Ed25519 are always available. RSA/MD5, DSA, and RSA keys
//! shorter than 1024 bits need the `legacy-crypto` feature.

use crate::base::iana::{DigestAlg, SecAlg};
use crate::base::name::{Name, NameError};
use crate::base::rdata::{ComposeMode, RecordData};
use crate::base::rdataset::Rdataset;
use crate::base::rrset::Rrset;
use crate::base::wire::{ComposeError, Composer};
use crate::rdata::{Dnskey, Ds, Rdata, Rrsig};
use ring::{digest, signature};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{error, fmt};
use tracing::{debug, trace};

/// The smallest RSA modulus in octets ring accepts.
const RSA_MIN_BYTES: usize = 1024 / 8;

//------------ Keys ----------------------------------------------------------

/// Returns the key tag of a DNSKEY record.
///
/// See appendix B of RFC 4034. For the RSA/MD5 algorithm, the tag is
/// taken from the end of the modulus.
pub fn key_tag(key: &Dnskey) -> u16 {
    key.key_tag()
}

/// Creates a DS record for the key at the given name.
///
/// The digest is calculated over the canonical owner name followed by the
/// DNSKEY record data as described in section 5.1.4 of RFC 4034. A
/// relative `name` is made absolute with `origin`.
pub fn make_ds(
    name: &Name,
    key: &Dnskey,
    digest_type: DigestAlg,
    origin: Option<&Name>,
) -> Result<Ds, ValidationError> {
    let algorithm = match digest_type {
        DigestAlg::SHA1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
        DigestAlg::SHA256 => &digest::SHA256,
        DigestAlg::SHA384 => &digest::SHA384,
        _ => return Err(ValidationError::UnsupportedAlgorithm),
    };
    let mut ctx = digest::Context::new(algorithm);
    ctx.update(&name.to_digestable(origin)?);
    let mut rdata = Vec::new();
    key.compose_rdata(&mut rdata, ComposeMode::new(origin))?;
    ctx.update(&rdata);
    Ok(Ds::new(
        key.key_tag(),
        key.algorithm(),
        digest_type,
        ctx.finish().as_ref().to_vec(),
    ))
}

//------------ Signed Data ---------------------------------------------------

/// Returns the data a signature over an RRset is calculated over.
///
/// This is the RRSIG record data without the signature followed by all
/// records of the set in canonical form and canonical order, each with
/// the original TTL from the signature. See section 3.1.8.1 of RFC 4034.
///
/// If the signature has fewer labels than the owner, the owner is an
/// expanded wildcard and the wildcard name is used in its place as
/// described in section 5.3.2 of RFC 4035.
pub fn signed_data(
    rrset: &Rrset,
    rrsig: &Rrsig,
    origin: Option<&Name>,
) -> Result<Vec<u8>, ValidationError> {
    let mut res = Vec::new();
    rrsig.compose_signed_fields(&mut res, origin)?;

    let owner = signed_owner(rrset.name(), rrsig.labels(), origin)?;

    let mut rdatas = rrset
        .iter()
        .map(|rdata| rdata.to_digestable(origin))
        .collect::<Result<Vec<_>, _>>()?;
    rdatas.sort();
    rdatas.dedup();

    for rdata in rdatas {
        res.append_slice(owner.as_wire());
        rrset.rtype().compose(&mut res);
        rrset.rdclass().compose(&mut res);
        res.append_u32(rrsig.original_ttl());
        res.append_u16(
            u16::try_from(rdata.len()).map_err(|_| ComposeError::LongData)?,
        );
        res.append_slice(&rdata);
    }
    Ok(res)
}

/// Returns the canonical owner name used in the signed data.
fn signed_owner(
    name: &Name,
    labels: u8,
    origin: Option<&Name>,
) -> Result<Name, ValidationError> {
    let owner = Name::from_octets(name.to_digestable(origin)?)?;

    // The label count of the signature excludes the root label.
    let depth = usize::from(labels) + 1;
    if depth >= owner.label_count() {
        return Ok(owner);
    }
    let (_, suffix) = owner.split(depth)?;
    let mut wild = Vec::with_capacity(suffix.len() + 2);
    wild.extend_from_slice(b"\x01*");
    wild.extend_from_slice(suffix.as_wire());
    Ok(Name::from_octets(wild)?)
}

//------------ Signature Verification ----------------------------------------

/// Verifies a signature over `data` with the given key.
pub fn verify_signature(
    algorithm: SecAlg,
    key: &Dnskey,
    data: &[u8],
    sig: &[u8],
) -> Result<(), ValidationError> {
    match algorithm {
        SecAlg::RSASHA1
        | SecAlg::RSASHA1NSEC3SHA1
        | SecAlg::RSASHA256
        | SecAlg::RSASHA512 => verify_rsa(algorithm, key, data, sig),
        SecAlg::ECDSAP256SHA256 | SecAlg::ECDSAP384SHA384 => {
            let ring_alg = if algorithm == SecAlg::ECDSAP256SHA256 {
                &signature::ECDSA_P256_SHA256_FIXED
            } else {
                &signature::ECDSA_P384_SHA384_FIXED
            };

            // ring expects the uncompressed point marker in front.
            let public_key = key.public_key();
            let mut point = Vec::with_capacity(public_key.len() + 1);
            point.push(0x4);
            point.extend_from_slice(public_key);

            signature::UnparsedPublicKey::new(ring_alg, &point)
                .verify(data, sig)
                .map_err(|_| ValidationError::VerifyFailure)
        }
        SecAlg::ED25519 => {
            signature::UnparsedPublicKey::new(
                &signature::ED25519,
                key.public_key(),
            )
            .verify(data, sig)
            .map_err(|_| ValidationError::VerifyFailure)
        }
        #[cfg(feature = "legacy-crypto")]
        SecAlg::RSAMD5 => {
            let (e, n) = rsa_exponent_modulus(key)?;
            legacy::verify_rsa(algorithm, e, n, data, sig)
        }
        #[cfg(feature = "legacy-crypto")]
        SecAlg::DSA | SecAlg::DSANSEC3SHA1 => {
            legacy::verify_dsa(key.public_key(), data, sig)
        }
        _ if algorithm.to_mnemonic_str().is_none() => {
            Err(ValidationError::UnknownAlgorithm)
        }
        _ => Err(ValidationError::UnsupportedAlgorithm),
    }
}

fn verify_rsa(
    algorithm: SecAlg,
    key: &Dnskey,
    data: &[u8],
    sig: &[u8],
) -> Result<(), ValidationError> {
    let (e, n) = rsa_exponent_modulus(key)?;
    if n.len() < RSA_MIN_BYTES {
        #[cfg(feature = "legacy-crypto")]
        return legacy::verify_rsa(algorithm, e, n, data, sig);
        #[cfg(not(feature = "legacy-crypto"))]
        return Err(ValidationError::UnsupportedAlgorithm);
    }
    let ring_alg = match algorithm {
        SecAlg::RSASHA256 => {
            &signature::RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY
        }
        SecAlg::RSASHA512 => {
            &signature::RSA_PKCS1_1024_8192_SHA512_FOR_LEGACY_USE_ONLY
        }
        _ => &signature::RSA_PKCS1_1024_8192_SHA1_FOR_LEGACY_USE_ONLY,
    };

    // The key comes in neither PEM nor DER, so use the components.
    signature::RsaPublicKeyComponents { n, e }
        .verify(ring_alg, data, sig)
        .map_err(|_| ValidationError::VerifyFailure)
}

/// Returns the RSA exponent and modulus from a DNSKEY record.
///
/// See section 2 of RFC 3110.
fn rsa_exponent_modulus(
    key: &Dnskey,
) -> Result<(&[u8], &[u8]), ValidationError> {
    let public_key = key.public_key();
    if public_key.len() <= 3 {
        return Err(ValidationError::InvalidKey);
    }

    let (pos, exp_len) = match public_key[0] {
        0 => (
            3,
            (usize::from(public_key[1]) << 8) | usize::from(public_key[2]),
        ),
        len => (1, usize::from(len)),
    };

    if public_key.len() <= pos + exp_len {
        return Err(ValidationError::InvalidKey);
    };

    Ok(public_key[pos..].split_at(exp_len))
}

//------------ Validation ----------------------------------------------------

/// Validates an RRset against a single signature.
///
/// The candidate keys are the DNSKEY records in `keys` at the signer's
/// name that have the signature's algorithm and key tag. The signature
/// must be current at `now`, given in seconds since the Unix epoch, or
/// at the current time if `now` is `None`. Validation succeeds if any
/// candidate key verifies the signature.
pub fn validate_rrsig(
    rrset: &Rrset,
    rrsig: &Rrsig,
    keys: &HashMap<Name, Rdataset>,
    origin: Option<&Name>,
    now: Option<u64>,
) -> Result<(), ValidationError> {
    let candidates = candidate_keys(keys, rrsig, origin)?;

    let now = now.unwrap_or_else(unix_now);
    if u64::from(rrsig.expiration().into_int()) < now {
        return Err(ValidationError::Expired);
    }
    if u64::from(rrsig.inception().into_int()) > now {
        return Err(ValidationError::NotYetValid);
    }

    let data = signed_data(rrset, rrsig, origin)?;
    for key in candidates {
        match verify_signature(rrsig.algorithm(), key, &data, rrsig.signature())
        {
            Ok(()) => {
                trace!(
                    owner = %rrset.name(),
                    key_tag = rrsig.key_tag(),
                    "signature verified"
                );
                return Ok(());
            }
            Err(ValidationError::VerifyFailure)
            | Err(ValidationError::InvalidKey) => {
                trace!(
                    owner = %rrset.name(),
                    key_tag = rrsig.key_tag(),
                    "key did not verify signature"
                );
            }
            Err(err) => return Err(err),
        }
    }
    Err(ValidationError::VerifyFailure)
}

/// Validates an RRset against a set of signatures.
///
/// Both sets must have the same owner after applying `origin`. The RRset
/// is valid if any signature in `rrsigset` validates. See
/// [`validate_rrsig`] for the meaning of the other arguments.
pub fn validate(
    rrset: &Rrset,
    rrsigset: &Rrset,
    keys: &HashMap<Name, Rdataset>,
    origin: Option<&Name>,
    now: Option<u64>,
) -> Result<(), ValidationError> {
    let owner = rrset.name().choose_relativity(origin, false)?;
    let sig_owner = rrsigset.name().choose_relativity(origin, false)?;
    if owner != sig_owner {
        return Err(ValidationError::OwnerMismatch);
    }

    for rdata in rrsigset.iter() {
        if let Rdata::Rrsig(ref rrsig) = *rdata {
            match validate_rrsig(rrset, rrsig, keys, origin, now) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    debug!(
                        %owner,
                        key_tag = rrsig.key_tag(),
                        "RRSIG did not validate: {}", err
                    );
                }
            }
        }
    }
    Err(ValidationError::NoValidSignature)
}

/// Returns the keys that may have created the signature.
fn candidate_keys<'a>(
    keys: &'a HashMap<Name, Rdataset>,
    rrsig: &Rrsig,
    origin: Option<&Name>,
) -> Result<Vec<&'a Dnskey>, ValidationError> {
    let signer = rrsig.signer_name();
    let rdataset = match keys.get(signer) {
        Some(rdataset) => rdataset,
        None => {
            match origin.and_then(|origin| signer.derelativize(origin).ok())
            {
                Some(name) => {
                    keys.get(&name).ok_or(ValidationError::UnknownKey)?
                }
                None => return Err(ValidationError::UnknownKey),
            }
        }
    };
    let res: Vec<_> = rdataset
        .iter()
        .filter_map(|rdata| match *rdata {
            Rdata::Dnskey(ref key)
                if key.algorithm() == rrsig.algorithm()
                    && key.key_tag() == rrsig.key_tag() =>
            {
                Some(key)
            }
            _ => None,
        })
        .collect();
    if res.is_empty() {
        return Err(ValidationError::UnknownKey);
    }
    Ok(res)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_secs())
        .unwrap_or(0)
}

//------------ legacy --------------------------------------------------------

/// Algorithms ring does not provide.
#[cfg(feature = "legacy-crypto")]
mod legacy {
    use super::ValidationError;
    use crate::base::iana::SecAlg;
    use md5::{Digest, Md5};
    use num_bigint::BigUint;
    use ring::digest;

    // DER encoded DigestInfo prefixes from RFC 8017.
    const MD5_PREFIX: &[u8] = &[
        0x30, 0x20, 0x30, 0x0c, 0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7,
        0x0d, 0x02, 0x05, 0x05, 0x00, 0x04, 0x10,
    ];
    const SHA1_PREFIX: &[u8] = &[
        0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a,
        0x05, 0x00, 0x04, 0x14,
    ];
    const SHA256_PREFIX: &[u8] = &[
        0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65,
        0x03, 0x04, 0x02, 0x01, 0x05, 0x00, 0x04, 0x20,
    ];
    const SHA512_PREFIX: &[u8] = &[
        0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65,
        0x03, 0x04, 0x02, 0x03, 0x05, 0x00, 0x04, 0x40,
    ];

    fn sha(algorithm: &'static digest::Algorithm, data: &[u8]) -> Vec<u8> {
        digest::digest(algorithm, data).as_ref().to_vec()
    }

    /// Verifies an RSASSA-PKCS1-v1_5 signature.
    pub fn verify_rsa(
        algorithm: SecAlg,
        exponent: &[u8],
        modulus: &[u8],
        data: &[u8],
        sig: &[u8],
    ) -> Result<(), ValidationError> {
        let (prefix, hash) = match algorithm {
            SecAlg::RSAMD5 => (MD5_PREFIX, Md5::digest(data).to_vec()),
            SecAlg::RSASHA1 | SecAlg::RSASHA1NSEC3SHA1 => {
                (SHA1_PREFIX, sha(&digest::SHA1_FOR_LEGACY_USE_ONLY, data))
            }
            SecAlg::RSASHA256 => (SHA256_PREFIX, sha(&digest::SHA256, data)),
            SecAlg::RSASHA512 => (SHA512_PREFIX, sha(&digest::SHA512, data)),
            _ => return Err(ValidationError::UnsupportedAlgorithm),
        };

        let n = BigUint::from_bytes_be(modulus);
        let e = BigUint::from_bytes_be(exponent);
        if n.bits() == 0 || e.bits() == 0 {
            return Err(ValidationError::InvalidKey);
        }
        let k = usize::try_from((n.bits() + 7) / 8)
            .map_err(|_| ValidationError::InvalidKey)?;
        let t_len = prefix.len() + hash.len();
        if sig.len() > k || k < t_len + 11 {
            return Err(ValidationError::VerifyFailure);
        }
        let s = BigUint::from_bytes_be(sig);
        if s >= n {
            return Err(ValidationError::VerifyFailure);
        }
        let m = s.modpow(&e, &n).to_bytes_be();
        if m.len() > k {
            return Err(ValidationError::VerifyFailure);
        }

        let mut expected = vec![0xffu8; k];
        expected[0] = 0;
        expected[1] = 1;
        expected[k - t_len - 1] = 0;
        expected[k - t_len..k - hash.len()].copy_from_slice(prefix);
        expected[k - hash.len()..].copy_from_slice(&hash);

        let mut actual = vec![0u8; k - m.len()];
        actual.extend_from_slice(&m);
        if actual == expected {
            Ok(())
        } else {
            Err(ValidationError::VerifyFailure)
        }
    }

    /// Verifies a DSA signature in the format of RFC 2536.
    pub fn verify_dsa(
        public_key: &[u8],
        data: &[u8],
        sig: &[u8],
    ) -> Result<(), ValidationError> {
        let t = match public_key.first() {
            Some(&t) if t <= 8 => usize::from(t),
            _ => return Err(ValidationError::InvalidKey),
        };
        let size = 64 + t * 8;
        if public_key.len() != 21 + 3 * size {
            return Err(ValidationError::InvalidKey);
        }
        if sig.len() != 41 {
            return Err(ValidationError::VerifyFailure);
        }

        let (q, rest) = public_key[1..].split_at(20);
        let (p, rest) = rest.split_at(size);
        let (g, y) = rest.split_at(size);
        let q = BigUint::from_bytes_be(q);
        let p = BigUint::from_bytes_be(p);
        let g = BigUint::from_bytes_be(g);
        let y = BigUint::from_bytes_be(y);
        if q.bits() < 2 || p.bits() == 0 {
            return Err(ValidationError::InvalidKey);
        }

        let r = BigUint::from_bytes_be(&sig[1..21]);
        let s = BigUint::from_bytes_be(&sig[21..41]);
        if r.bits() == 0 || r >= q || s.bits() == 0 || s >= q {
            return Err(ValidationError::VerifyFailure);
        }

        let w = s.modpow(&(q.clone() - 2u32), &q);
        let h = BigUint::from_bytes_be(&sha(
            &digest::SHA1_FOR_LEGACY_USE_ONLY,
            data,
        ));
        let u1 = (&h * &w) % &q;
        let u2 = (&r * &w) % &q;
        let v = (g.modpow(&u1, &p) * y.modpow(&u2, &p)) % &p % &q;
        if v == r {
            Ok(())
        } else {
            Err(ValidationError::VerifyFailure)
        }
    }
}

//============ Error Types ===================================================

//------------ ValidationError -----------------------------------------------

/// Validation of a signature failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// The signature has expired.
    Expired,

    /// The signature is not valid yet.
    NotYetValid,

    /// No key matches the signature.
    UnknownKey,

    /// None of the candidate keys verified the signature.
    VerifyFailure,

    /// The algorithm is not known.
    UnknownAlgorithm,

    /// The algorithm is known but not implemented.
    UnsupportedAlgorithm,

    /// The public key is malformed.
    InvalidKey,

    /// The RRset and its signatures have different owners.
    OwnerMismatch,

    /// None of the signatures validated.
    NoValidSignature,

    /// The signed data could not be assembled.
    Compose(ComposeError),

    /// A name was invalid.
    Name(NameError),
}

//--- From

impl From<ComposeError> for ValidationError {
    fn from(err: ComposeError) -> Self {
        ValidationError::Compose(err)
    }
}

impl From<NameError> for ValidationError {
    fn from(err: NameError) -> Self {
        ValidationError::Name(err)
    }
}

//--- Display and Error

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValidationError::Expired => f.write_str("expired"),
            ValidationError::NotYetValid => f.write_str("not yet valid"),
            ValidationError::UnknownKey => f.write_str("unknown key"),
            ValidationError::VerifyFailure => f.write_str("verify failure"),
            ValidationError::UnknownAlgorithm => {
                f.write_str("unknown algorithm")
            }
            ValidationError::UnsupportedAlgorithm => {
                f.write_str("unsupported algorithm")
            }
            ValidationError::InvalidKey => f.write_str("invalid key"),
            ValidationError::OwnerMismatch => {
                f.write_str("owner names do not match")
            }
            ValidationError::NoValidSignature => {
                f.write_str("no RRSIGs validated")
            }
            ValidationError::Compose(ref err) => err.fmt(f),
            ValidationError::Name(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for ValidationError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::base::serial::Serial;
    use crate::utils::base64;

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    // Returns the root KSK and ZSK of mid 2019.
    fn root_pubkey() -> (Dnskey, Dnskey) {
        let ksk = base64::decode(
            "\
            AwEAAaz/tAm8yTn4Mfeh5eyI96WSVexTBAvkMgJzkKTOiW1vkIbzxeF3+/\
            4RgWOq7HrxRixHlFlExOLAJr5emLvN7SWXgnLh4+B5xQlNVz8Og8kvArMt\
            NROxVQuCaSnIDdD5LKyWbRd2n9WGe2R8PzgCmr3EgVLrjyBxWezF0jLHwV\
            N8efS3rCj/EWgvIWgb9tarpVUDK/b58Da+sqqls3eNbuv7pr+eoZG+SrDK\
            6nWeL3c6H5Apxz7LjVc1uTIdsIXxuOLYA4/ilBmSVIzuDWfdRUfhHdY6+c\
            n8HFRm+2hM8AnXGXws9555KrUB5qihylGa8subX2Nn6UwNR1AkUTV74bU=",
        )
        .unwrap();
        let zsk = base64::decode(
            "\
            AwEAAeVDC34GZILwsQJy97K2Fst4P3XYZrXLyrkausYzSqEjSUulgh+iLgH\
            g0y7FIF890+sIjXsk7KLJUmCOWfYWPorNKEOKLk5Zx/4M6D3IHZE3O3m/Ea\
            hrc28qQzmTLxiMZAW65MvR2UO3LxVtYOPBEBiDgAQD47x2JLsJYtavCzNL5\
            WiUk59OgvHmDqmcC7VXYBhK8V8Tic089XJgExGeplKWUt9yyc31ra1swJX5\
            1XsOaQz17+vyLVH8AZP26KvKFiZeoRbaq6vl+hc8HQnI2ug5rA2zoz3MsSQ\
            BvP1f/HvqsWxLqwXXKyDD1QM639U+XzVB8CYigyscRP22QCnwKIU=",
        )
        .unwrap();
        (
            Dnskey::new(257, 3, SecAlg::RSASHA256, ksk),
            Dnskey::new(256, 3, SecAlg::RSASHA256, zsk),
        )
    }

    fn root_rrsig() -> Rrsig {
        Rrsig::new(
            Rtype::DNSKEY,
            SecAlg::RSASHA256,
            0,
            172800,
            Serial(1560211200),
            Serial(1558396800),
            20326,
            Name::root(),
            base64::decode(
                "otBkINZAQu7AvPKjr/xWIEE7+SoZtKgF8bzVynX6bfJMJuPay8jPvNmwXk\
                ZOdSoYlvFp0bk9JWJKCh8y5uoNfMFkN6OSrDkr3t0E+c8c0Mnmwkk5CETH3\
                Gqxthi0yyRX5T4VlHU06/Ks4zI+XAgl3FBpOc554ivdzez8YCjAIGx7Xgzz\
                ooEb7heMSlLc7S7/HNjw51TPRs4RxrAVcezieKCzPPpeWBhjE6R3oiSwrl0\
                SBD4/yplrDlr7UHs/Atcm3MSgemdyr2sOoOUkVQCVpcj3SQQezoD2tCM786\
                1CXEQdg5fjeHDtz285xHt5HJpA5cOcctRo4ihybfow/+V7AQ==",
            )
            .unwrap(),
        )
    }

    /// Returns the DNSKEY RRset of the signer and a key map holding it.
    fn key_rrset(
        rrsig: &Rrsig,
        keys: &[&Dnskey],
    ) -> (Rrset, HashMap<Name, Rdataset>) {
        let rrset = Rrset::from_rdatas(
            rrsig.signer_name().clone(),
            Class::IN,
            0,
            keys.iter().map(|key| Rdata::Dnskey((*key).clone())),
        )
        .unwrap();
        let mut map = HashMap::new();
        map.insert(rrset.name().clone(), rrset.rdataset().clone());
        (rrset, map)
    }

    fn check_dnskey_rrsig(ksk: Dnskey, zsk: Dnskey, rrsig: Rrsig) {
        assert_eq!(ksk.key_tag(), rrsig.key_tag());
        let (rrset, keys) = key_rrset(&rrsig, &[&ksk, &zsk]);
        let now = Some(u64::from(rrsig.inception().into_int()) + 1);

        assert_eq!(validate_rrsig(&rrset, &rrsig, &keys, None, now), Ok(()));

        let data = signed_data(&rrset, &rrsig, None).unwrap();
        assert_eq!(
            verify_signature(rrsig.algorithm(), &ksk, &data, rrsig.signature()),
            Ok(())
        );
        assert_eq!(
            verify_signature(rrsig.algorithm(), &zsk, &data, rrsig.signature()),
            Err(ValidationError::VerifyFailure)
        );
    }

    #[test]
    fn make_ds_root() {
        let (ksk, _) = root_pubkey();
        assert_eq!(key_tag(&ksk), 20326);
        let ds = make_ds(&Name::root(), &ksk, DigestAlg::SHA256, None).unwrap();
        assert_eq!(ds.key_tag(), 20326);
        assert_eq!(ds.algorithm(), SecAlg::RSASHA256);
        assert_eq!(
            ds.digest(),
            base64::decode("4G1EuAuPHTmpXAsNfGXQhFjogECbvGg0VxBCN8f47I0=")
                .unwrap()
                .as_slice()
        );
    }

    #[test]
    fn make_ds_relative_owner() {
        let (ksk, _) = root_pubkey();
        let relative_name = Name::from_text("example", None).unwrap();
        let absolute =
            make_ds(&name("example."), &ksk, DigestAlg::SHA1, None).unwrap();
        let relative = make_ds(
            &relative_name,
            &ksk,
            DigestAlg::SHA1,
            Some(&Name::root()),
        )
        .unwrap();
        assert_eq!(absolute.digest(), relative.digest());
        assert_eq!(
            make_ds(&relative_name, &ksk, DigestAlg::SHA1, None),
            Err(ValidationError::Compose(ComposeError::RelativeName))
        );
    }

    #[test]
    fn make_ds_unsupported() {
        let (ksk, _) = root_pubkey();
        assert_eq!(
            make_ds(&Name::root(), &ksk, DigestAlg::GOST, None),
            Err(ValidationError::UnsupportedAlgorithm)
        );
    }

    #[test]
    fn make_ds_sha384_length() {
        let (ksk, _) = root_pubkey();
        let ds =
            make_ds(&Name::root(), &ksk, DigestAlg::SHA384, None).unwrap();
        assert_eq!(ds.digest().len(), 48);
        assert_eq!(ds.digest_type(), DigestAlg::SHA384);
    }

    #[test]
    fn rsa_sha256() {
        crate::logging::init_logging();
        let (ksk, zsk) = root_pubkey();
        check_dnskey_rrsig(ksk, zsk, root_rrsig());
    }

    #[test]
    fn ecdsap256_sha256() {
        let ksk = Dnskey::new(
            257,
            3,
            SecAlg::ECDSAP256SHA256,
            base64::decode(
                "mdsswUyr3DPW132mOi8V9xESWE8jTo0dxCjjnopKl+GqJxpVXckHAe\
                F+KkxLbxILfDLUT0rAK9iUzy1L53eKGQ==",
            )
            .unwrap(),
        );
        let zsk = Dnskey::new(
            256,
            3,
            SecAlg::ECDSAP256SHA256,
            base64::decode(
                "oJMRESz5E4gYzS/q6XDrvU1qMPYIjCWzJaOau8XNEZeqCYKD5ar0IR\
                d8KqXXFJkqmVfRvMGPmM1x8fGAa2XhSA==",
            )
            .unwrap(),
        );
        let rrsig = Rrsig::new(
            Rtype::DNSKEY,
            SecAlg::ECDSAP256SHA256,
            2,
            3600,
            Serial(1560314494),
            Serial(1555130494),
            2371,
            name("cloudflare.com."),
            base64::decode(
                "8jnAGhG7O52wmL065je10XQztRX1vK8P8KBSyo71Z6h5wAT9+GFxKBaE\
                zcJBLvRmofYFDAhju21p1uTfLaYHrg==",
            )
            .unwrap(),
        );
        check_dnskey_rrsig(ksk, zsk, rrsig);
    }

    #[test]
    fn ed25519() {
        let ksk = Dnskey::new(
            257,
            3,
            SecAlg::ED25519,
            base64::decode("m1NELLVVQKl4fHVn/KKdeNO0PrYKGT3IGbYseT8XcKo=")
                .unwrap(),
        );
        let zsk = Dnskey::new(
            256,
            3,
            SecAlg::ED25519,
            base64::decode("2tstZAjgmlDTePn0NVXrAHBJmg84LoaFVxzLl1anjGI=")
                .unwrap(),
        );
        let rrsig = Rrsig::new(
            Rtype::DNSKEY,
            SecAlg::ED25519,
            2,
            3600,
            Serial(1559174400),
            Serial(1557360000),
            45515,
            name("ED25519.nl."),
            base64::decode(
                "hvPSS3E9Mx7lMARqtv6IGiw0NE0uz0mZewndJCHTkhwSYqlasUq7KfO5\
                QdtgPXja7YkTaqzrYUbYk01J8ICsAA==",
            )
            .unwrap(),
        );
        check_dnskey_rrsig(ksk, zsk, rrsig);
    }

    #[test]
    fn expanded_wildcard() {
        let key = Dnskey::new(
            256,
            3,
            SecAlg::RSASHA1,
            base64::decode(
                "AQOy1bZVvpPqhg4j7EJoM9rI3ZmyEx2OzDBVrZy/lvI5CQePxX\
                HZS4i8dANH4DX3tbHol61ek8EFMcsGXxKciJFHyhl94C+NwILQd\
                zsUlSFovBZsyl/NX6yEbtw/xN9ZNcrbYvgjjZ/UVPZIySFNsgEY\
                vh0z2542lzMKR4Dh8uZffQ==",
            )
            .unwrap(),
        );
        let rrsig = Rrsig::new(
            Rtype::MX,
            SecAlg::RSASHA1,
            2,
            3600,
            Serial::rrsig_from_str("20040509183619").unwrap(),
            Serial::rrsig_from_str("20040409183619").unwrap(),
            38519,
            name("example."),
            base64::decode(
                "OMK8rAZlepfzLWW75Dxd63jy2wswESzxDKG2f9AMN1CytCd10cYI\
                 SAxfAdvXSZ7xujKAtPbctvOQ2ofO7AZJ+d01EeeQTVBPq4/6KCWhq\
                 e2XTjnkVLNvvhnc0u28aoSsG0+4InvkkOHknKxw4kX18MMR34i8lC\
                 36SR5xBni8vHI=",
            )
            .unwrap(),
        );
        assert_eq!(key.key_tag(), rrsig.key_tag());

        let rrset = Rrset::from_text(
            name("a.z.w.example."),
            Class::IN,
            Rtype::MX,
            3600,
            ["1 ai.example."],
            None,
        )
        .unwrap();
        let (_, keys) = key_rrset(&rrsig, &[&key]);
        let now = Some(u64::from(rrsig.inception().into_int()) + 1);
        assert_eq!(validate_rrsig(&rrset, &rrsig, &keys, None, now), Ok(()));

        let data = signed_data(&rrset, &rrsig, None).unwrap();
        assert!(data
            .windows(12)
            .any(|window| window == b"\x01*\x01w\x07example"));
    }

    #[test]
    fn time_window() {
        let (ksk, zsk) = root_pubkey();
        let rrsig = root_rrsig();
        let (rrset, keys) = key_rrset(&rrsig, &[&ksk, &zsk]);
        assert_eq!(
            validate_rrsig(&rrset, &rrsig, &keys, None, Some(1560211201)),
            Err(ValidationError::Expired)
        );
        assert_eq!(
            validate_rrsig(&rrset, &rrsig, &keys, None, Some(1558396799)),
            Err(ValidationError::NotYetValid)
        );
    }

    #[test]
    fn missing_keys() {
        let (ksk, zsk) = root_pubkey();
        let rrsig = root_rrsig();
        let (rrset, _) = key_rrset(&rrsig, &[&ksk, &zsk]);
        let now = Some(1558396801);

        assert_eq!(
            validate_rrsig(&rrset, &rrsig, &HashMap::new(), None, now),
            Err(ValidationError::UnknownKey)
        );
        let (_, only_zsk) = key_rrset(&rrsig, &[&zsk]);
        assert_eq!(
            validate_rrsig(&rrset, &rrsig, &only_zsk, None, now),
            Err(ValidationError::UnknownKey)
        );
    }

    #[test]
    fn tampered_rrset() {
        let (ksk, zsk) = root_pubkey();
        let rrsig = root_rrsig();
        let (_, keys) = key_rrset(&rrsig, &[&ksk, &zsk]);
        let (rrset, _) = key_rrset(&rrsig, &[&ksk]);
        assert_eq!(
            validate_rrsig(&rrset, &rrsig, &keys, None, Some(1558396801)),
            Err(ValidationError::VerifyFailure)
        );
    }

    #[test]
    fn validate_rrsigset() {
        crate::logging::init_logging();
        let (ksk, zsk) = root_pubkey();
        let rrsig = root_rrsig();
        let (rrset, keys) = key_rrset(&rrsig, &[&ksk, &zsk]);

        let mut bad = rrsig.clone();
        bad.set_signature(vec![0; 256]);
        let sigs = Rrset::from_rdatas(
            Name::root(),
            Class::IN,
            172800,
            [Rdata::Rrsig(bad.clone()), Rdata::Rrsig(rrsig)],
        )
        .unwrap();
        assert_eq!(
            validate(&rrset, &sigs, &keys, None, Some(1558396801)),
            Ok(())
        );

        let bad_sigs = Rrset::from_rdatas(
            Name::root(),
            Class::IN,
            172800,
            [Rdata::Rrsig(bad)],
        )
        .unwrap();
        assert_eq!(
            validate(&rrset, &bad_sigs, &keys, None, Some(1558396801)),
            Err(ValidationError::NoValidSignature)
        );

        let elsewhere = Rrset::from_rdataset(
            name("example."),
            bad_sigs.rdataset().clone(),
        );
        assert_eq!(
            validate(&rrset, &elsewhere, &keys, None, Some(1558396801)),
            Err(ValidationError::OwnerMismatch)
        );
    }

    #[test]
    fn unknown_and_unsupported() {
        let key = Dnskey::new(256, 3, SecAlg::from_int(200), vec![1, 2, 3]);
        assert_eq!(
            verify_signature(SecAlg::from_int(200), &key, b"", b""),
            Err(ValidationError::UnknownAlgorithm)
        );
        assert_eq!(
            verify_signature(SecAlg::ED448, &key, b"", b""),
            Err(ValidationError::UnsupportedAlgorithm)
        );
        assert_eq!(
            verify_signature(SecAlg::RSASHA256, &key, b"", b""),
            Err(ValidationError::InvalidKey)
        );
    }
}

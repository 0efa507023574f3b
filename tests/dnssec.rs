//! DNSSEC known-answer tests.

use dnskit::base::iana::{Class, DigestAlg, Rtype};
use dnskit::base::name::Name;
use dnskit::base::rdataset::Rdataset;
use dnskit::base::rrset::Rrset;
use dnskit::rdata::{Dnskey, Rdata, Rrsig};
use dnskit::validate::{self, ValidationError};
use rstest::rstest;
use std::collections::HashMap;

fn name(s: &str) -> Name {
    s.parse().unwrap()
}

fn dnskey(text: &str) -> Dnskey {
    match Rdata::from_text(Class::IN, Rtype::DNSKEY, text, None).unwrap() {
        Rdata::Dnskey(key) => key,
        other => panic!("not a DNSKEY: {:?}", other),
    }
}

//------------ DS ------------------------------------------------------------

// The example from section 5.4 of RFC 4034 and section 2.1 of RFC 4509.
const DSKEY: &str = "256 3 5 ( AQOeiiR0GOMYkDshWoSKz9Xz fwJr1AYtsmx3TGkJaNXVbfi/ \
    2pHm822aJ5iI9BMzNXxeYCmZ DRD99WYwYqUSdjMmmAphXdvx \
    egXd/M5+X7OrzKBaMbCVdFLU Uh6DhweJBjEVv5f2wwjM9Xzc \
    nOf+EPbtG9DMBmADjFDc2w/r ljwvFw== )";

#[rstest]
#[case::sha1(DigestAlg::SHA1, "60485 5 1 2BB183AF5F22588179A53B0A98631FAD1A292118")]
#[case::sha256(
    DigestAlg::SHA256,
    "60485 5 2 D4B7D520E7BB5F0F67674A0CCEB1E3E0614B93C4F9E99B8383F6A1E4469DA50A"
)]
fn make_ds(#[case] digest: DigestAlg, #[case] expected: &str) {
    let key = dnskey(DSKEY);
    assert_eq!(validate::key_tag(&key), 60485);
    let ds = validate::make_ds(&name("dskey.example.com."), &key, digest, None)
        .unwrap();
    assert_eq!(
        Rdata::Ds(ds),
        Rdata::from_text(Class::IN, Rtype::DS, expected, None).unwrap()
    );
}

//------------ RRSIG ---------------------------------------------------------

// An RSA/SHA-256 key and signature over the SOA RRset of example.
const ZONE_KEY: &str = "257 3 8 \
    AwEAAayWj1cFWLhkJU0hfeLWsziN0FWPNm7IHjm+ZDhRgyYSt4Nu4caoNefzrD7mBfgv\
    alCugtIV6wL6zx3uD4Spw/TGKJXSDEUuPQQ4FY2lj3TAR53qWJruNSmbrcW7+L7vrAkF\
    +VaDQt+2CjoQIgw8qgIoyN5Up+Rz09aQg/fslpdw4n5GFc+q2/gpeCcyLNoxvJu5yl6X\
    f0oYPCMizZ0HraTlUYakd+l2j24HmrcLwXy3f8sn1Wlvfb4vXQwSrYlLA2QqIrZldY3y\
    3vgceGaZ4+5DQVOzg1QbEoimorap1/hBaUngmZktKJs3iOnr9307y6AnTZti1X2HuExq\
    0MX+HGk=";

const SOA: &str = "ns1.example. hostmaster.example. 2024010101 7200 3600 1209600 3600";

const SOA_RRSIG: &str = "SOA 8 1 3600 20270115080000 20231114221320 47689 example. \
    E3KoshBE65uPLg6ZHKAyzyhI+SfxGzN0SXT2LfO4GLe/e7i9iLLRPn4tkhL3O12Kex8i\
    QFKWEySNQ+RidZ33mmwRVXaXPQiuFQaZ/La/SJItDwsc35sJqKJbgNs5iecKPaeogA9/\
    prjgq81S60LqRmMt0HIxa6PSSvPUdI0XQ9x0Vm6owFmJl/clk4oQ+dbN6tYWdJOA80VB\
    +DMclAwY8HjCPWJ9GwiTGQeJvxPOonhJv/C7Rdz00H7Iz3KEvMLv+X0JxgC96mlKhUTk\
    +OIEEzUIsOmBmSDy56DKAZRa5WZdWzyfi5GVVsO5tXWqL4a0oR98g+KQcCKBfiZpz9MK\
    6w==";

/// Inside the validity period of the signature.
const NOW: u64 = 1_750_000_000;

fn keys() -> HashMap<Name, Rdataset> {
    let mut res = HashMap::new();
    res.insert(
        name("example."),
        Rdataset::from_text(Class::IN, Rtype::DNSKEY, 3600, [ZONE_KEY], None)
            .unwrap(),
    );
    res
}

fn soa_rrset(owner: &str, soa: &str) -> Rrset {
    Rrset::from_text(name(owner), Class::IN, Rtype::SOA, 3600, [soa], None)
        .unwrap()
}

fn rrsig_rrset() -> Rrset {
    Rrset::from_text(
        name("example."),
        Class::IN,
        Rtype::RRSIG,
        3600,
        [SOA_RRSIG],
        None,
    )
    .unwrap()
}

fn rrsig() -> Rrsig {
    match rrsig_rrset().iter().next() {
        Some(Rdata::Rrsig(sig)) => sig.clone(),
        other => panic!("not an RRSIG: {:?}", other),
    }
}

#[test]
fn signature_times() {
    // The signature was made for these exact timestamps.
    let sig = rrsig();
    assert_eq!(sig.inception().into_int(), 1_700_000_000);
    assert_eq!(sig.expiration().into_int(), 1_800_000_000);
    assert_eq!(sig.key_tag(), validate::key_tag(&dnskey(ZONE_KEY)));
}

#[test]
fn soa_validates() {
    let rrset = soa_rrset("example.", SOA);
    assert_eq!(
        validate::validate(&rrset, &rrsig_rrset(), &keys(), None, Some(NOW)),
        Ok(())
    );
    assert_eq!(
        validate::validate_rrsig(&rrset, &rrsig(), &keys(), None, Some(NOW)),
        Ok(())
    );
}

#[test]
fn soa_validates_relative() {
    let rrset = Rrset::from_text(
        Name::empty(),
        Class::IN,
        Rtype::SOA,
        3600,
        ["ns1 hostmaster 2024010101 7200 3600 1209600 3600"],
        Some(&name("example.")),
    )
    .unwrap();
    let rrsigs = Rrset::from_rdataset(Name::empty(), rrsig_rrset().into_rdataset());
    assert_eq!(
        validate::validate(
            &rrset,
            &rrsigs,
            &keys(),
            Some(&name("example.")),
            Some(NOW)
        ),
        Ok(())
    );
}

#[rstest]
#[case::changed_serial(
    "example.",
    "ns1.example. hostmaster.example. 2024010102 7200 3600 1209600 3600",
    NOW,
    ValidationError::VerifyFailure
)]
#[case::expired("example.", SOA, 1_800_000_001, ValidationError::Expired)]
#[case::not_yet_valid("example.", SOA, 1_699_999_999, ValidationError::NotYetValid)]
fn soa_fails(
    #[case] owner: &str,
    #[case] soa: &str,
    #[case] now: u64,
    #[case] err: ValidationError,
) {
    let rrset = soa_rrset(owner, soa);
    assert_eq!(
        validate::validate_rrsig(&rrset, &rrsig(), &keys(), None, Some(now)),
        Err(err)
    );
    assert_eq!(
        validate::validate(&rrset, &rrsig_rrset(), &keys(), None, Some(now)),
        Err(ValidationError::NoValidSignature)
    );
}

#[test]
fn soa_without_keys() {
    let rrset = soa_rrset("example.", SOA);
    assert_eq!(
        validate::validate_rrsig(&rrset, &rrsig(), &HashMap::new(), None, Some(NOW)),
        Err(ValidationError::UnknownKey)
    );
}

#[test]
fn soa_wrong_owner() {
    let rrset = soa_rrset("other.example.", SOA);
    assert_eq!(
        validate::validate(&rrset, &rrsig_rrset(), &keys(), None, Some(NOW)),
        Err(ValidationError::OwnerMismatch)
    );
}

//------------ Legacy Algorithms ---------------------------------------------

// Keys and signatures over the same SOA RRset for the algorithms ring does
// not support.

// RSA/MD5 with a 1024 bit key.
const RSAMD5_KEY: &str = "257 3 1 \
    AwEAAdkjO/1wYfI2rqtJPYpnkdp/Hze1PluQI1U1BPRTQqRUWF75vcsaARZJuX0LHM88\
    RpB9G0puR8Ptpeg9iOXzH9XV3J+HZHZgZG12YlqfMexGc6mpAamCUkF0CgoB8ratw2zw\
    wjsswA5+BfbZ8KQ3G5PjP/DxXPyN1hB9aRlruA1t";

const RSAMD5_RRSIG: &str = "SOA 1 1 3600 20270115080000 20231114221320 47117 example. \
    jj8EM0KF7uZrtabkw5fSmOFXJZ8OQMYbZ1W2BMM/q0qck27GXTf7B02Vk+8KSVGW7C6K\
    ChVGQAlfEkA37OOjcWdW6gxMnnY3zWWEayECtcF3y2M5z0MVUhduJLYDDYzGSxNw1a3u\
    kxsQXGge7sZD/65/6Kvp8r5LGirdrC/YSVs=";

// RSA/SHA-1 with a 512 bit key.
const RSASHA1_512_KEY: &str = "257 3 5 \
    AwEAAbl9AS0eQYeUH0oOCtMl8wDtuFf+GqS60+nR233lWqJ7WCazap87JcP72xUJcWKV\
    0+PvZqM3lYZJwgzxwDy/i4k=";

const RSASHA1_512_RRSIG: &str = "SOA 5 1 3600 20270115080000 20231114221320 12428 example. \
    BGwbfrDUUKovIgdo6yiDZ/IP55QBkc2xryVv7rdMiaiFh9CkyHdkfbGyGrTPAKj9++L4\
    eWVjSEbimgRE4JjymA==";

// DSA with a 1024 bit prime.
const DSA_KEY: &str = "257 3 3 \
    CLMsCuH1nQusAeE/0khIVNOSjeQvtKii8gG7HZKiOmyibBe1VfktrbxDc/5RnwcQ4Rf+\
    OQTNdOx0eNDChd5vmcqV7botGoAavzl4B9ZK2EgKDR8lAr9PEOzYmKCaToFMw7K0/Or2\
    wBilqhzhVE7nSnszc3EJg9lybWOwTxGFKA32hyVeptn3EJ4TKhWzM58yJwCQmrs/crh1\
    LzVrTk89tbwX0owGvO73uRMmbAfEuOWHotLwV7E+7RnmThdq/m1znsDuLoE/8g8AZzIO\
    TZQs3rRtVj6h1c4qu5CklVNAKI+aJUaiO6rhcw7N0gOTZybygzIGqqSwpfBDGTqWMPoy\
    7TkNxHlXQ06hg7i9eFg4QgeEUb8/NSP0Xx/e0O6paB7+pZ6sjqdK+ACH6l91i6IlHhST\
    WDGiXZCZ9AD6CNWvnK/F3liyHpXlWMlTgcXP88IFcqzpSEqVR7QmHm4rvhurU3xRUUGz\
    HUD7m5PogD+JdVk6dRxI/BzsU1bnxKD+dIUvPXLVDAGSVw3A9c4tgYkpIJER+AQ+";

const DSA_RRSIG: &str = "SOA 3 1 3600 20270115080000 20231114221320 6492 example. \
    CFI4ZZH9X79LOoOEoetfuR5yKUVaQ8CR7TnVvSFu2ot4R10mPivdkHc=";

fn legacy_validate(
    key: &str,
    rrsig: &str,
    soa: &str,
) -> Result<(), ValidationError> {
    let mut keys = HashMap::new();
    keys.insert(
        name("example."),
        Rdataset::from_text(Class::IN, Rtype::DNSKEY, 3600, [key], None)
            .unwrap(),
    );
    let sig = match Rdata::from_text(Class::IN, Rtype::RRSIG, rrsig, None)
        .unwrap()
    {
        Rdata::Rrsig(sig) => sig,
        other => panic!("not an RRSIG: {:?}", other),
    };
    assert_eq!(sig.key_tag(), validate::key_tag(&dnskey(key)));
    validate::validate_rrsig(&soa_rrset("example.", soa), &sig, &keys, None, Some(NOW))
}

#[cfg(feature = "legacy-crypto")]
#[rstest]
#[case::rsamd5(RSAMD5_KEY, RSAMD5_RRSIG)]
#[case::rsasha1_512(RSASHA1_512_KEY, RSASHA1_512_RRSIG)]
#[case::dsa(DSA_KEY, DSA_RRSIG)]
fn legacy_algorithms(#[case] key: &str, #[case] rrsig: &str) {
    assert_eq!(legacy_validate(key, rrsig, SOA), Ok(()));
    assert_eq!(
        legacy_validate(
            key,
            rrsig,
            "ns1.example. hostmaster.example. 2024010102 7200 3600 1209600 3600"
        ),
        Err(ValidationError::VerifyFailure)
    );
}

#[cfg(not(feature = "legacy-crypto"))]
#[rstest]
#[case::rsamd5(RSAMD5_KEY, RSAMD5_RRSIG)]
#[case::rsasha1_512(RSASHA1_512_KEY, RSASHA1_512_RRSIG)]
#[case::dsa(DSA_KEY, DSA_RRSIG)]
fn legacy_algorithms_unsupported(#[case] key: &str, #[case] rrsig: &str) {
    assert_eq!(
        legacy_validate(key, rrsig, SOA),
        Err(ValidationError::UnsupportedAlgorithm)
    );
}

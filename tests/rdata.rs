//! Record data in presentation and wire format.

use dnskit::base::iana::{Class, Rtype};
use dnskit::base::name::Name;
use dnskit::rdata::Rdata;
use rstest::rstest;

#[rstest]
#[case::a(Rtype::A, "10.0.0.1")]
#[case::ns(Rtype::NS, "ns1.example.")]
#[case::md(Rtype::MD, "md.example.")]
#[case::mf(Rtype::MF, "mf.example.")]
#[case::cname(Rtype::CNAME, "www.example.")]
#[case::soa(
    Rtype::SOA,
    "ns1.example. hostmaster.example. 2024010101 7200 3600 1209600 3600"
)]
#[case::mb(Rtype::MB, "mb.example.")]
#[case::mg(Rtype::MG, "mg.example.")]
#[case::mr(Rtype::MR, "mr.example.")]
#[case::wks(Rtype::WKS, "10.0.0.1 6 21 25 80")]
#[case::ptr(Rtype::PTR, "host.example.")]
#[case::hinfo(Rtype::HINFO, "\"Intel x86\" \"linux\"")]
#[case::minfo(Rtype::MINFO, "rmail.example. email.example.")]
#[case::mx(Rtype::MX, "10 mail.example.")]
#[case::txt(Rtype::TXT, "\"hello world\" \"second\"")]
#[case::rp(Rtype::RP, "admin.example. info.example.")]
#[case::afsdb(Rtype::AFSDB, "1 afsdb.example.")]
#[case::x25(Rtype::X25, "\"311061700956\"")]
#[case::isdn(Rtype::ISDN, "\"150862028003217\" \"004\"")]
#[case::rt(Rtype::RT, "10 relay.example.")]
#[case::nsap(Rtype::NSAP, "0x47000580005a00")]
#[case::nsap_ptr(Rtype::NSAPPTR, "foo.example.")]
#[case::sig(
    Rtype::SIG,
    "A 5 3 86400 20030322173103 20030220173103 2642 example.com. AQIDBAUG"
)]
#[case::key(Rtype::KEY, "256 3 5 AQIDBA==")]
#[case::px(Rtype::PX, "10 map822.example. mapx400.example.")]
#[case::gpos(Rtype::GPOS, "-32.6882 116.8652 10.0")]
#[case::aaaa(Rtype::AAAA, "2001:db8::1")]
#[case::loc(
    Rtype::LOC,
    "42 21 54.000 N 71 6 18.000 W -24.00m 30.00m 10000.00m 10.00m"
)]
#[case::nxt(Rtype::NXT, "medium.example. A MX SIG NXT")]
#[case::srv(Rtype::SRV, "0 5 5060 sip.example.")]
#[case::naptr(
    Rtype::NAPTR,
    "100 50 \"s\" \"http+I2L+I2C+I2R\" \"\" _http._tcp.gatech.edu."
)]
#[case::kx(Rtype::KX, "10 kx.example.")]
#[case::cert(Rtype::CERT, "PKIX 12345 RSASHA256 AQID")]
#[case::dname(Rtype::DNAME, "target.example.")]
#[case::opt(Rtype::OPT, "\\# 6 000300026162")]
#[case::apl(Rtype::APL, "1:192.168.32.0/21 !1:192.168.38.0/28 2:ff00::/8")]
#[case::ds(Rtype::DS, "60485 5 1 2bb183af5f22588179a53b0a98631fad1a292118")]
#[case::sshfp(Rtype::SSHFP, "1 1 123456789abcdef67890123456789abcdef67890")]
#[case::ipseckey(
    Rtype::IPSECKEY,
    "10 3 2 mygateway.example.com. AQNRU3mG7TVTO2BkR47usntb102uFJtugbo6BSGvgqt4AQ=="
)]
#[case::rrsig(
    Rtype::RRSIG,
    "A 5 3 86400 20030322173103 20030220173103 2642 example.com. AQIDBAUG"
)]
#[case::nsec(Rtype::NSEC, "host.example.com. A MX RRSIG NSEC TYPE1234")]
#[case::dnskey(Rtype::DNSKEY, "257 3 8 AQIDBA==")]
#[case::dhcid(Rtype::DHCID, "AQIDBAUG")]
#[case::nsec3(
    Rtype::NSEC3,
    "1 1 12 aabbccdd 2t7b4g4vsa5smi47k61mv5bv1a22bojr NS SOA MX RRSIG DNSKEY NSEC3PARAM"
)]
#[case::nsec3param(Rtype::NSEC3PARAM, "1 0 12 aabbccdd")]
#[case::tlsa(
    Rtype::TLSA,
    "3 1 1 0c72ac70b745ac19998811b131d662c9ac69dbdbe7cb23e5b514b56664c5d3d6"
)]
#[case::hip(
    Rtype::HIP,
    "2 200100107b1a74df365639cc39f1d578 \
     AwEAAbdxyhNuSutc5EMzxTs9LBPCIkOFH8cIvM4p9+LrV4e19WzK00+C \
     rvs1.example.com. rvs2.example.com."
)]
#[case::cds(Rtype::CDS, "60485 5 2 d4b7d520e7bb5f0f67674a0cceb1e3e0614b93c4f9e99b8383f6a1e4469da50a")]
#[case::cdnskey(Rtype::CDNSKEY, "257 3 13 AQIDBA==")]
#[case::spf(Rtype::SPF, "\"v=spf1 -all\"")]
#[case::eui48(Rtype::EUI48, "00-00-5e-00-53-2a")]
#[case::eui64(Rtype::EUI64, "00-00-5e-ef-10-00-00-2a")]
#[case::tsig(
    Rtype::TSIG,
    "hmac-sha256. 1600000000 300 4 AQIDBA== 4660 BADTIME 6 AABfXhAA"
)]
#[case::uri(Rtype::URI, "10 1 \"ftp://ftp1.example.com/public\"")]
#[case::caa(Rtype::CAA, "128 issue \"ca.example.net; account=230123\"")]
#[case::ta(Rtype::TA, "60485 5 2 d4b7d520e7bb5f0f67674a0cceb1e3e0614b93c4f9e99b8383f6a1e4469da50a")]
#[case::dlv(Rtype::DLV, "60485 5 1 2bb183af5f22588179a53b0a98631fad1a292118")]
fn text_and_wire(#[case] rtype: Rtype, #[case] text: &str) {
    let rdata = Rdata::from_text(Class::IN, rtype, text, None).unwrap();
    assert_eq!(rdata.rtype(), rtype);
    assert!(!matches!(rdata, Rdata::Unknown(_)));
    assert_eq!(rdata.to_text(None, false), text);

    let wire = rdata.to_wire(None).unwrap();
    let parsed =
        Rdata::from_wire(Class::IN, rtype, &wire, 0, wire.len()).unwrap();
    assert_eq!(parsed, rdata);
    assert_eq!(parsed.to_text(None, false), text);
    assert_eq!(parsed.to_wire(None).unwrap(), wire);
}

#[test]
fn generic_syntax() {
    let a = Rdata::from_text(Class::IN, Rtype::A, "\\# 4 0a000001", None)
        .unwrap();
    assert_eq!(a.to_text(None, false), "10.0.0.1");

    let private = Rtype::from_int(65280);
    let unknown =
        Rdata::from_text(Class::IN, private, "\\# 3 abcdef", None).unwrap();
    assert_eq!(unknown.rtype(), private);
    assert_eq!(unknown.to_text(None, false), "\\# 3 abcdef");
    assert_eq!(unknown.to_wire(None).unwrap(), b"\xab\xcd\xef");
}

#[test]
fn relative_names() {
    let origin: Name = "example.".parse().unwrap();
    let mx = Rdata::from_text(Class::IN, Rtype::MX, "10 mail", Some(&origin))
        .unwrap();
    assert_eq!(mx.to_text(None, false), "10 mail.example.");
    assert_eq!(mx.to_text(Some(&origin), true), "10 mail");
}

#[test]
fn canonical_form() {
    let mx = Rdata::from_text(Class::IN, Rtype::MX, "10 MAIL.Example.", None)
        .unwrap();
    assert_eq!(mx.to_wire(None).unwrap(), b"\x00\x0a\x04MAIL\x07Example\x00");
    assert_eq!(
        mx.to_digestable(None).unwrap(),
        b"\x00\x0a\x04mail\x07example\x00"
    );

    // NSEC next names keep their case.
    let nsec =
        Rdata::from_text(Class::IN, Rtype::NSEC, "Host.Example. A", None)
            .unwrap();
    assert_eq!(
        nsec.to_digestable(None).unwrap(),
        b"\x04Host\x07Example\x00\x00\x01\x40"
    );
}

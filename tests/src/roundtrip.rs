#![cfg(test)]
use addrkit_core::{Address, Ipv4Address, Ipv6Address};

#[test]
fn ipv4_text_round_trip() {
    for text in ["0.0.0.0", "127.0.0.1", "255.255.255.255", "192.168.1.42"] {
        let addr = Ipv4Address::parse(text).unwrap();
        assert_eq!(addr.name(), text);
        assert_eq!(Ipv4Address::parse(&addr.name()).unwrap(), addr);
    }
}

#[test]
fn ipv6_raw_name_round_trip() {
    let cases: [[u16; 8]; 5] = [
        [0; 8],
        [0xffff; 8],
        [0x2001, 0x0db8, 0x85a3, 0, 0, 0x8a2e, 0x0370, 0x7334],
        [0, 0, 0, 0, 0, 0xffff, 0xc0a8, 0x0101],
        [0xfe80, 0, 0, 0, 0x0202, 0xb3ff, 0xfe1e, 0x8329],
    ];

    for groups in cases {
        let addr = Ipv6Address::new(groups);
        assert_eq!(Ipv6Address::parse(&addr.raw_name()).unwrap(), addr);
        assert_eq!(Ipv6Address::parse(&addr.name()).unwrap(), addr);
    }
}

#[test]
fn ipv6_longs_round_trip() {
    let cases = [
        (0u64, 0u64),
        (1, 0),
        (0, 1),
        (u64::MAX, 0),
        (0x2001_0db8_85a3_0000, 0x0000_8a2e_0370_7334),
    ];

    for (high, low) in cases {
        let addr = Ipv6Address::from_longs(high, low);
        assert_eq!(addr.to_longs(), (high, low));
        assert_eq!(Ipv6Address::parse(&addr.raw_name()).unwrap(), addr);
    }
}

/// The mapped form must survive the full chain:
/// text -> IPv6 -> embedded IPv4 -> text.
#[test]
fn mapped_address_chain() {
    let addr = Ipv6Address::parse("::ffff:127.0.0.1").unwrap();
    assert!(addr.is_mapped());
    assert_eq!(addr.to_ipv4().unwrap().name(), "127.0.0.1");

    let bracketed = Ipv6Address::parse("[::ffff:192.168.1.1]:8080").unwrap();
    assert_eq!(bracketed.to_ipv4().unwrap().name(), "192.168.1.1");
}

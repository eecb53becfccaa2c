#![cfg(test)]
use addrkit_core::{Address, HttpAddress, Ipv6Address, Port};

#[test]
fn urls_always_carry_a_trailing_slash() {
    let inputs = ["10.0.0.1", "2001:db8::1", "example.com"];

    for input in inputs {
        let parsed = HttpAddress::parse(input).unwrap();
        for secure in [false, true] {
            for port in [None, Some(Port::new(8080))] {
                let url = parsed.to_url(secure, port);
                assert!(url.ends_with('/'), "{url}");
                let scheme = if secure { "https://" } else { "http://" };
                assert!(url.starts_with(scheme), "{url}");
            }
        }
    }
}

#[test]
fn ipv6_urls_bracket_the_host() {
    let addr = Ipv6Address::parse("2001:db8::1").unwrap();
    assert_eq!(addr.to_url(false, None), "http://[2001:db8::1]/");
    assert_eq!(
        addr.to_url(true, Some(Port::new(8080))),
        "https://[2001:db8::1:8080]/"
    );
    assert_eq!(addr.with_port(Port::new(25565)), "[2001:db8::1]:25565");
}

#[test]
fn canonical_name_matches_known_vectors() {
    let cases = [
        ("2001:0db8:0000:0000:0000:0000:0000:0001", "2001:db8::1"),
        ("2001:0DB8:85A3:0000:0000:8A2E:0370:7334", "2001:db8:85a3::8a2e:370:7334"),
        ("0:0:0:0:0:0:0:0", "::"),
        ("0:0:0:0:0:0:0:1", "::1"),
        ("fe80:0:0:0:0:0:0:1", "fe80::1"),
    ];

    for (input, expected) in cases {
        let addr = Ipv6Address::parse(input).unwrap();
        assert_eq!(addr.name(), expected, "name({input:?})");
        assert_eq!(addr.bytes(), expected.as_bytes().to_vec());
    }
}

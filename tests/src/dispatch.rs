#![cfg(test)]
use addrkit_core::{Address, AddressError, AddressFamily, HttpAddress, classify};

/// Every family should be reachable from a raw string through the same
/// entry point, in the fixed IPv4 -> IPv6 -> domain priority order.
#[test]
fn dispatch_covers_all_families() {
    let cases = [
        ("127.0.0.1", AddressFamily::Ipv4),
        ("127.0.0.1:8080", AddressFamily::Ipv4),
        ("::1", AddressFamily::Ipv6),
        ("[2001:db8::1]:443", AddressFamily::Ipv6),
        ("::ffff:10.0.0.1", AddressFamily::Ipv6),
        ("example.com", AddressFamily::Domain),
        ("api.example.com:8080", AddressFamily::Domain),
    ];

    for (input, family) in cases {
        assert_eq!(classify(input), Some(family), "classify({input:?})");
        let parsed = HttpAddress::parse(input).unwrap();
        assert_eq!(parsed.family(), family, "parse({input:?})");
    }
}

#[test]
fn dispatch_rejects_unmatched_input() {
    let garbage = ["", "999.1.1.1", "2001:db8:::1", "[2001:db8::1", "no spaces allowed!"];

    for input in garbage {
        assert_eq!(classify(input), None, "classify({input:?})");
        let err = HttpAddress::parse(input).unwrap_err();
        assert!(
            matches!(err, AddressError::InvalidFormat { .. }),
            "parse({input:?}) -> {err:?}"
        );
    }
}

/// A parsed value keeps enough information to reproduce its input's
/// canonical spelling, regardless of brackets or ports in the raw text.
#[test]
fn dispatch_normalizes_host_text() -> anyhow::Result<()> {
    assert_eq!(HttpAddress::parse("[::1]:8080")?.name(), "::1");
    assert_eq!(HttpAddress::parse("10.0.0.1:80")?.name(), "10.0.0.1");
    assert_eq!(HttpAddress::parse("Example.COM")?.name(), "example.com");
    Ok(())
}

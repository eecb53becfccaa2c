use addrkit_core::{Address, HttpAddress};
use tracing::debug;

use crate::terminal::print;

pub fn inspect(address: &str) -> anyhow::Result<()> {
    let parsed = HttpAddress::parse(address)?;
    debug!(family = %parsed.family(), "parsed address");

    print::detail("family", &parsed.family().to_string());
    print::detail("name", &parsed.name());

    if let HttpAddress::Ipv6(v6) = &parsed {
        print::detail("raw", &v6.raw_name());
        print::flag("link-local", v6.is_local());
        print::flag("ipv4-mapped", v6.is_mapped());
        if let Ok(v4) = v6.to_ipv4() {
            print::detail("embedded ipv4", &v4.name());
        }
        let (high, low) = v6.to_longs();
        print::detail("as longs", &format!("{high:#018x} {low:#018x}"));
    }

    Ok(())
}

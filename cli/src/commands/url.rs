use addrkit_core::{Address, HttpAddress, Port};

use crate::terminal::print;

pub fn url(address: &str, port: Option<u16>, secure: bool) -> anyhow::Result<()> {
    let parsed = HttpAddress::parse(address)?;
    print::value(&parsed.to_url(secure, port.map(Port::new)));
    Ok(())
}

use crate::terminal::print;

pub fn classify(address: &str) -> anyhow::Result<()> {
    match addrkit_core::classify(address) {
        Some(family) => {
            print::detail("family", &family.to_string());
            Ok(())
        }
        None => anyhow::bail!("no address family matches '{address}'"),
    }
}

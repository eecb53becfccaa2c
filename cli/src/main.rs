mod commands;
mod terminal;

use commands::{CommandLine, Commands, classify, inspect, url};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Classify { address } => classify::classify(&address),
        Commands::Inspect { address } => inspect::inspect(&address),
        Commands::Url {
            address,
            port,
            secure,
        } => url::url(&address, port, secure),
    }
}

pub mod classify;
pub mod inspect;
pub mod url;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "addrkit")]
#[command(about = "Parse, classify and normalize network addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the address family of a string
    #[command(alias = "c")]
    Classify { address: String },
    /// Show the canonical forms and properties of an address
    #[command(alias = "i")]
    Inspect { address: String },
    /// Render an address as an http(s) URL
    #[command(alias = "u")]
    Url {
        address: String,
        /// Port to embed in the URL
        #[arg(short, long)]
        port: Option<u16>,
        /// Use https instead of http
        #[arg(short, long)]
        secure: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

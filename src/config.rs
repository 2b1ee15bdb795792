use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::breach::DEFAULT_API_URL;

/// pwned-check-rs: score a password and check it against the Pwned Passwords range API.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pwned-check-rs",
    version,
    about = "Score a password and check it against the Pwned Passwords range API.",
    long_about = None
)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Base URL of the k-anonymity range API.
    #[arg(long = "breach-api-url", env = "BREACH_API_URL", default_value = DEFAULT_API_URL)]
    pub breach_api_url: String,

    /// Whole-request timeout for the range lookup, in milliseconds.
    #[arg(long = "lookup-timeout-ms", env = "LOOKUP_TIMEOUT_MS", default_value_t = 5000)]
    pub lookup_timeout_ms: u64,

    /// Ask the range API to pad responses with decoy entries.
    #[arg(long = "add-padding", env = "ADD_PADDING", default_value_t = false)]
    pub add_padding: bool,

    /// Directory holding the static submission form.
    #[arg(long = "ui-dir", env = "UI_DIR", default_value = "ui")]
    pub ui_dir: PathBuf,

    /// Enable debug logging.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Free-text search over a catalog of short-let listings
#[derive(Debug, Clone, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file holding the listing catalog
    #[arg(long, env = "LISTINGS_PATH", default_value = "data/listings.json")]
    pub listings: PathBuf,

    /// Tracing filter, e.g. `info` or `stay_scout=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Error-translating front for database-backed APIs
#[derive(Debug, Parser)]
#[command(name = "dbfront", about = "HTTP front with a uniform error contract for database clients")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "DBFRONT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "DBFRONT_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter directive (e.g. `info,dbfront_server=debug`)
    #[arg(long, default_value = "info", env = "DBFRONT_LOG")]
    pub log_filter: String,
}

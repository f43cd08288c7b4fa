//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Pick a VPN endpoint (country, city, protocol) from a directory of profiles and connect
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Override config directory (default: platform config dir, honors `XDG_CONFIG_HOME` and sudo)
    #[arg(short = 'C', long, value_name = "DIR", env = "VPNPICK_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Scan this directory for profiles instead of the configured one
    #[arg(short = 'd', long, value_name = "DIR")]
    pub profiles_dir: Option<PathBuf>,
}

use clap::Parser;
use std::path::PathBuf;

/// mspctl - play a music catalog through an MSProxy queue
///
/// Reads commands from standard input, one per line. Type `help` for the
/// list.
#[derive(Parser, Debug)]
#[command(name = "mspctl", version, about)]
pub struct Args {
    /// Configuration directory (defaults to $MSPROXY_CONFIG, ./.msproxy or ~/.msproxy)
    #[arg(long, short = 'c')]
    pub config_dir: Option<String>,

    /// Catalog file (defaults to `catalog.path` from the configuration)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Play mode: NORMAL or SHUFFLE (overrides the configuration)
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Explicit filter: ALLOW or DISALLOW (overrides the configuration)
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Check stream URLs with an HTTP HEAD request before playing them
    #[arg(long)]
    pub probe: bool,
}

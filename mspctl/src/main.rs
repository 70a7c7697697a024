mod cli;
mod commands;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::Args;
use commands::{Command, HELP, execute};
use mspcatalog::StaticCatalog;
use mspconfig::{Config, get_config};
use mspproxy::Proxy;
use mspsource::{ResolveCache, StreamProbe};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config
            .get_log_min_level()
            .unwrap_or_else(|_| "INFO".to_string());
        EnvFilter::new(level.to_lowercase())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(args: &Args, config: &Config) -> Result<StaticCatalog> {
    let path = match &args.catalog {
        Some(path) => path.clone(),
        None => match config.get_catalog_path()? {
            Some(path) => path,
            None => bail!("no catalog given: use --catalog or set catalog.path in config.yaml"),
        },
    };

    let cache = ResolveCache::with_settings(
        config.get_resolve_cache_capacity()? as u64,
        Duration::from_secs(config.get_resolve_cache_ttl_secs()?),
    );

    let mut catalog = StaticCatalog::from_file(&path)
        .with_context(|| format!("cannot load catalog {}", path.display()))?
        .with_cache(cache);

    if args.probe {
        let timeout = Duration::from_secs(config.get_http_timeout_secs()?);
        catalog = catalog.with_probe(StreamProbe::new(timeout));
    }
    Ok(catalog)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config_dir {
        Some(dir) => Arc::new(Config::load_config(dir)?),
        None => get_config(),
    };
    init_logging(&config);

    let catalog = load_catalog(&args, &config)?;
    let mut proxy = Proxy::from_config(catalog, &config)?;
    if let Some(mode) = &args.mode {
        proxy.set_play_mode(mode)?;
    }
    if let Some(filter) = &args.filter {
        proxy.set_explicit_track_filter(filter)?;
    }

    info!(
        provider = proxy.provider_id(),
        mode = %proxy.mode(),
        filter = %proxy.explicit_filter(),
        "mspctl ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{} ready. {HELP}", proxy.provider_name())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match execute(&mut proxy, command, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                warn!(error = %err, "Command failed");
                writeln!(out, "error: {err}")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}

mod cli;
mod commands;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use simdata_core::{Branch, RefreshConfig, config::timeouts};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "simdata={default_level},simdata_core={default_level}"
        ))
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = build_config(&args);

    match args.command {
        None | Some(Command::Refresh) => commands::refresh::run(&config),
        Some(Command::Fetch) => commands::fetch::run(&config),
        Some(Command::Extract { tables }) => commands::extract::run(&config, &tables),
        Some(Command::Trinkets) => commands::trinkets::run(&config),
    }
}

fn build_config(args: &Args) -> RefreshConfig {
    let mut config = RefreshConfig::new(&args.output);
    config.simc = args.simc.clone();
    config.wow = args.wow.clone();
    config.skip_fetch = args.no_load;
    config.skip_extract = args.no_extract;
    config.branch = if args.ptr {
        Branch::Ptr
    } else if args.beta {
        Branch::Beta
    } else {
        Branch::Live
    };
    match args.timeout {
        Some(0) => {
            config.fetch_timeout = None;
            config.extract_timeout = None;
        }
        Some(secs) => {
            config.fetch_timeout = Some(Duration::from_secs(secs));
            config.extract_timeout = Some(Duration::from_secs(secs));
        }
        None => {
            config.fetch_timeout = Some(timeouts::FETCH);
            config.extract_timeout = Some(timeouts::EXTRACT);
        }
    }
    config
}

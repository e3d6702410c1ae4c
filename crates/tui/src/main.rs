mod page;
mod renderer;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use env_logger::{Env, Target};
use folio_core::{FolioConfig, Portfolio};

struct Args {
    config: Option<PathBuf>,
    log: PathBuf,
    route: String,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        log: PathBuf::from("folio.log"),
        route: "/".to_string(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--log" => args.log = it.next().context("--log needs a path")?.into(),
            "-h" | "--help" => {
                bail!("Usage: folio [--config <path.json>] [--log <path>] [route]")
            }
            other if other.starts_with("--") => bail!("unknown option `{other}`"),
            route => args.route = route.to_string(),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    let args = parse_args()?;

    // The alternate screen owns stdout/stderr, so logs go to a file.
    let log_file = File::create(&args.log)
        .with_context(|| format!("cannot create log file {}", args.log.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(log_file)))
        .init();

    let config = match &args.config {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            FolioConfig::from_json(&data).inspect_err(|e| log::warn!("rejected config: {e}"))?
        }
        None => FolioConfig::default(),
    };

    let mut portfolio = Portfolio::new(config)?;
    renderer::run(&mut portfolio, &args.route)?;
    log::info!("exited with {} live timers", portfolio.scheduler().live());
    Ok(())
}

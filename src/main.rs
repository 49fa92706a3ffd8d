use anyhow::{bail, Context, Result};
use log::{error, info};
use simple_logger::SimpleLogger;
use std::path::Path;

use objmesh::{
    assets::fetch::{load_obj, Fetcher},
    config::loader::{load_config_from, load_or_create_config},
};

struct Args {
    json: bool,
    config: Option<String>,
    locations: Vec<String>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Args {
            json: false,
            config: None,
            locations: Vec::new(),
        };

        let mut raw = std::env::args().skip(1);
        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "--json" => args.json = true,
                "--config" => {
                    args.config = Some(raw.next().context("--config needs a path")?);
                }
                "-h" | "--help" => {
                    println!("usage: objmesh [--json] [--config <file>] <path-or-url>...");
                    std::process::exit(0);
                }
                _ => args.locations.push(arg),
            }
        }

        if args.locations.is_empty() {
            bail!("usage: objmesh [--json] [--config <file>] <path-or-url>...");
        }
        Ok(args)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse()?;
    let config = match &args.config {
        Some(path) => load_config_from(Path::new(path))?,
        None => load_or_create_config()?,
    };

    SimpleLogger::new().with_level(config.level_filter()?).init()?;
    info!("Loading {} model(s)...", args.locations.len());

    let fetcher = Fetcher::new(&config.http)?;
    let mut failures = 0;

    for location in &args.locations {
        match load_obj(&fetcher, location).await {
            Ok(model) => {
                info!("{}: {}", location, model.summary());
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&model)?);
                }
            }
            Err(e) => {
                error!("{}: {}", location, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} model(s) failed to load", failures, args.locations.len());
    }
    Ok(())
}

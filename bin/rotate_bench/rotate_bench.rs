use std::path::{Path, PathBuf};

use bench::{bench, Bench};
use clap::{Parser, Subcommand};
use list::list;
use rotate::config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use verify::{verify, Verify};

mod bench;
mod list;
mod verify;

#[derive(Parser)]
#[clap(version)]
pub struct Args {
    #[clap(short, long, env = "ROTATE_CONFIG")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Clone, Subcommand)]
enum Cmd {
    /// Time the configured algorithms over a range of region sizes
    Bench(Bench),
    /// Cross-check algorithms against the reference rotation
    Verify(Verify),
    /// List the available algorithms
    List,
}

fn load_config(path: Option<&Path>) -> eyre::Result<Config> {
    let mut settings = config::Config::builder();

    if let Some(path) = path {
        settings = settings.add_source(config::File::from(path).required(true));
    }

    let settings = settings
        .add_source(
            config::Environment::with_prefix("ROTATE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize::<Config>()?)
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().compact())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;

    match args.cmd {
        Cmd::Bench(args) => {
            bench(&args, config.bench)?;
        }
        Cmd::Verify(args) => {
            verify(&args, config.verify)?;
        }
        Cmd::List => {
            list();
        }
    }

    Ok(())
}

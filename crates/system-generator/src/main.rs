//! starform: generate a planetary system by accretion and print it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stellar::StarSpec;
use system_generator::{GenerationConfig, describe_system, generate_stellar_system};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "starform")]
#[command(about = "Generate a stellar system by Dole accretion", long_about = None)]
struct Args {
    /// RNG seed; overrides the name and any seed in the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// System name, hashed into a reproducible seed
    #[arg(short, long)]
    name: Option<String>,

    /// Also form moons around each planet
    #[arg(short, long)]
    moons: bool,

    /// Star type such as G2M/0 (class, number, M|G|S|D, orbit in AU); repeat for companions
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    stars: Vec<StarSpec>,

    /// More output; repeat for debug and trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON configuration file; flags override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GenerationConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.name.is_some() {
            config.name = self.name;
        }
        config.moons |= self.moons;
        if !self.stars.is_empty() {
            config.stars = self.stars;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("installing the tracing subscriber")?;

    let config = args.into_config()?;
    let system = generate_stellar_system(&config).context("generating the system")?;
    print!("{}", describe_system(&system));
    Ok(())
}

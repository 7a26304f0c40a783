// src/bin/write_list/app.rs
use anyhow::{anyhow, Result};
use buildlist::{Outcome, Pipeline, Source};
use clap::Parser;
use log::{debug, LevelFilter};

#[derive(Parser)]
#[command(name = "write-list")]
#[command(about = "Build a list from a source and print it as indented JSON", long_about = None)]
pub struct Cli {
    /// Niveau de verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Source of the list: an http(s) URL, a JSON file, or - for stdin
    pub source: Source,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Log level for a verbosity count
fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise env_logger; RUST_LOG takes precedence over -v
pub fn init_logger(verbose: u8) {
    let default_filter = level_for(verbose).to_string().to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Exécute l'application CLI
pub fn run(cli: Cli) -> Result<()> {
    debug!("Using {}", cli.source.describe());

    // Un seul fil d'exécution: la source est le seul point de suspension
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to create Tokio runtime: {}", e))?;

    let pipeline = Pipeline::new(cli.source);
    let outcome = runtime.block_on(pipeline.run())?;

    // A reported failure still exits with status 0
    if outcome == Outcome::Reported {
        debug!("Failure reported, exiting normally");
    }

    Ok(())
}

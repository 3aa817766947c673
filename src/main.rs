use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aliasmatch::{AliasBookConfig, Screener};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aliasmatch")]
#[command(version)]
#[command(about = "Screen company-name records against a YAML alias book")]
#[command(long_about = None)]
struct Cli {
    /// Alias book YAML file
    book: PathBuf,

    /// Company-name records to screen, one argument per record
    #[arg(required = true)]
    records: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = env::var("ALIASMATCH_LOG_FORMAT").is_ok_and(|format| format == "json");

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(book: &Path, records: &[String]) -> Result<(), Box<dyn Error>> {
    let config = AliasBookConfig::from_file(book)?;
    tracing::info!(
        path = %book.display(),
        entities = config.entities.len(),
        "alias_book_loaded"
    );

    let screener = Screener::from_config(&config);
    for record in records {
        let hits = screener.screen(record)?;
        if hits.is_empty() {
            println!("{record}\t-\tno_match");
        }
        for hit in hits {
            println!("{record}\t{}\t{}", hit.entity, hit.rule);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Usage errors exit with status 2; --help and --version exit cleanly.
    let cli = Cli::parse();
    init_tracing();

    match run(&cli.book, &cli.records) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("aliasmatch: {err}");
            ExitCode::FAILURE
        }
    }
}

//! geolist-scan: CLI tool for checking a directory of list files.

use clap::{Parser, Subcommand};
use geolist::{FileMeta, IngestConfig, IngestSummary, Ingestor, LogDiagnostics};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "geolist-scan")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Classify and parse IP/domain list files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest every list file under a directory
    Scan {
        /// Root directory of list files
        #[arg(short, long)]
        input: PathBuf,

        /// YAML ingest config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Process files in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Print a JSON summary instead of one line per file
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify file names without reading them
    Check {
        /// List file names or paths
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            config,
            parallel,
            json,
            verbose,
        } => {
            if let Err(e) = scan(&input, config, parallel, json, verbose) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Check { files } => {
            if !check(&files) {
                std::process::exit(1);
            }
        }
    }
}

fn scan(
    input: &Path,
    config: Option<PathBuf>,
    parallel: bool,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ingest_config = match config {
        Some(path) => IngestConfig::load(path)?,
        None => IngestConfig::default(),
    };
    if parallel {
        ingest_config.parallel = true;
    }

    if verbose {
        println!("Scanning {:?} with {:?}", input, ingest_config);
    }

    let ingestor = Ingestor::new(ingest_config, LogDiagnostics);
    let records = ingestor.ingest(input)?;
    let summary = IngestSummary::from_records(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for record in &records {
        println!(
            "{} {} {} {}: {} lines, {} addresses, {} networks, {} patterns",
            record.path().display(),
            record.direction(),
            record.kind(),
            record.category(),
            record.lines().len(),
            record.addresses().len(),
            record.networks().len(),
            record.patterns().len(),
        );
    }

    println!(
        "Accepted {} files in {} categories",
        summary.total.files,
        summary.categories.len()
    );
    Ok(())
}

fn check(files: &[PathBuf]) -> bool {
    let mut all_valid = true;

    for file in files {
        match FileMeta::from_path(file) {
            Ok(meta) => println!(
                "{}: {} {} {}{}",
                file.display(),
                meta.direction,
                meta.kind,
                meta.category,
                if meta.is_pattern { " (patterns)" } else { "" }
            ),
            Err(e) => {
                all_valid = false;
                println!("{}: rejected: {}", file.display(), e);
            }
        }
    }

    all_valid
}

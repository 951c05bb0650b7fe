//! Rhea CLI
//!
//! Reads a Rhea RDF/XML dump (optionally gzipped), resolves it, and either
//! prints a summary or exports the resolved entities as JSON.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rhea_core::{unrecognized_subclasses, Resolver, ResolverConfig};
use rhea_ingest_rdfxml::{decode_records, read_dump};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

mod summary;

#[derive(Parser)]
#[command(name = "rhea")]
#[command(author, version, about = "Resolve Rhea RDF dumps into typed entities")]
struct Cli {
    /// Log debug output (overridden by RHEA_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print entity counts for a dump.
    Summary {
        #[command(flatten)]
        input: InputArgs,
        /// Also list subclass values that produced no entity
        #[arg(long)]
        report_unknown: bool,
    },

    /// Write the resolved entities as JSON.
    Export {
        #[command(flatten)]
        input: InputArgs,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path to `rhea.rdf` or `rhea.rdf.gz`
    dump: PathBuf,
    /// Resolver config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Resolve records in parallel
    #[arg(long)]
    parallel: bool,
}

impl InputArgs {
    fn resolver_config(&self) -> Result<ResolverConfig> {
        let config = match &self.config {
            Some(path) => ResolverConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ResolverConfig::default(),
        };
        Ok(if self.parallel {
            config.with_parallel(true)
        } else {
            config
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::Summary {
            input,
            report_unknown,
        } => cmd_summary(&input, report_unknown),
        Commands::Export { input, out, pretty } => cmd_export(&input, out.as_ref(), pretty),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RHEA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn cmd_summary(input: &InputArgs, report_unknown: bool) -> Result<()> {
    let config = input.resolver_config()?;
    let bytes = read_dump(&input.dump)
        .with_context(|| format!("failed to read {}", input.dump.display()))?;
    let records = decode_records(&bytes).context("failed to decode RDF/XML")?;
    let rhea = Resolver::new(config.clone())
        .resolve(&records)
        .context("failed to resolve records")?;

    let unknown = report_unknown.then(|| unrecognized_subclasses(&records, &config));
    let text = summary::render(&input.dump, records.len(), &rhea, unknown.as_ref())?;
    print!("{text}");
    Ok(())
}

fn cmd_export(input: &InputArgs, out: Option<&PathBuf>, pretty: bool) -> Result<()> {
    let config = input.resolver_config()?;
    let rhea = rhea_ingest_rdfxml::parse_rhea_file(&input.dump, &config)
        .with_context(|| format!("failed to parse {}", input.dump.display()))?;

    let json = if pretty {
        serde_json::to_string_pretty(&rhea)?
    } else {
        serde_json::to_string(&rhea)?
    };

    match out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote rhea export");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

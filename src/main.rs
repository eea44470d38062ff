//! CLI entrypoint.

use std::error::Error;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use refsite::{SiteGenerator, SymbolGraph};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the refsite CLI.
struct Cli {
	/// Path to the symbol graph JSON file produced by the analysis front end.
	graph: PathBuf,

	/// Output directory for the generated site.
	#[arg(short = 'o', long = "out", default_value = "site")]
	out: PathBuf,

	/// Project name shown on pages and used in reference-source links.
	#[arg(short = 'p', long, default_value = "project")]
	project: String,

	/// URL prefix for reference-source links.
	#[arg(short = 'b', long = "base-path", default_value = "/")]
	base_path: String,

	/// Namespace roots whose documentation is cached and shared across pages.
	#[arg(long = "shared-root", value_delimiter = ',')]
	shared_roots: Vec<String>,

	/// Generate pages sequentially instead of on the worker pool.
	#[arg(long, default_value_t = false)]
	sequential: bool,

	/// Only report failures, not per-page progress.
	#[arg(short = 'q', long, default_value_t = false)]
	quiet: bool,

	/// Disable ANSI colors in CLI output.
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

fn should_color_output(cli: &Cli) -> bool {
	if cli.no_color {
		return false;
	}
	if std::env::var_os("NO_COLOR").is_some() {
		return false;
	}
	if std::env::var("TERM").ok().as_deref() == Some("dumb") {
		return false;
	}
	std::io::stdout().is_terminal()
}

fn main() {
	let cli = Cli::parse();

	let default_level = if cli.quiet { "warn" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
		)
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = run(cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
	let raw = fs::read_to_string(&cli.graph)?;
	let graph: SymbolGraph = serde_json::from_str(&raw)?;

	let mut generator = SiteGenerator::new(&cli.project)
		.with_base_path(&cli.base_path)
		.with_parallel(!cli.sequential);
	if !cli.shared_roots.is_empty() {
		generator = generator.with_shared_roots(cli.shared_roots.clone());
	}

	let summary = generator.generate(&graph, &cli.out)?;
	let colored = should_color_output(&cli);

	if !cli.quiet {
		let written = format!("{} pages written", summary.written.len());
		if colored {
			println!("{}", written.green());
		} else {
			println!("{written}");
		}
	}

	for failure in &summary.failed {
		let line = format!("failed: {} ({})", failure.symbol, failure.error);
		if colored {
			eprintln!("{}", line.red());
		} else {
			eprintln!("{line}");
		}
	}
	if !summary.is_complete() {
		let line = format!(
			"{} of {} pages failed; they are omitted from the index",
			summary.failed.len(),
			summary.failed.len() + summary.written.len()
		);
		if colored {
			eprintln!("{}", line.yellow());
		} else {
			eprintln!("{line}");
		}
	}

	Ok(())
}

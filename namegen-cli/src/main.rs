//! Command-line front end for the name generator.
//!
//! Prints one generated name per line on standard output. Diagnostics go
//! to standard error through `tracing`, filtered by `RUST_LOG`.
//!
//! ```bash
//! starwars-namegen                      # one random name
//! starwars-namegen -c 3 -f snake        # 3-word name in snake_case
//! starwars-namegen -m 5 --random digits # 5 names with digit suffixes
//! starwars-namegen --seed 42            # reproducible name
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use namegen_core::{FormatSpec, GenerationRequest, NameGenerator, SuffixSpec};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Generate Star Wars themed multi-word names for servers, containers and
/// other resources.
#[derive(Parser, Debug)]
#[command(name = "starwars-namegen", version, about)]
struct Args {
	/// Number of words in the name (clamped to 1-5). Random if omitted.
	#[arg(short, long, allow_negative_numbers = true)]
	count: Option<i64>,

	/// Output format: kebab, snake, camel, pascal or space.
	#[arg(short, long, default_value = "kebab")]
	format: FormatSpec,

	/// Number of names to generate.
	#[arg(short, long, default_value_t = 1)]
	multiple: usize,

	/// Random suffix to append: none, digits, hex, symbol or uuid.
	#[arg(short = 'r', long = "random", default_value = "none")]
	suffix: SuffixSpec,

	/// Seed for reproducible output. Any integer, negatives included.
	#[arg(short, long, allow_negative_numbers = true)]
	seed: Option<i64>,

	/// Log generation details to stderr.
	#[arg(short, long)]
	verbose: bool,
}

impl Args {
	fn request(&self) -> GenerationRequest {
		GenerationRequest {
			word_count: self.count,
			format: self.format,
			suffix: self.suffix,
			// Negative seeds reinterpret their bits as u64
			seed: self.seed.map(|seed| seed as u64),
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	let default_level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
	tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_env_filter(
			EnvFilter::builder()
				.with_default_directive(default_level.into())
				.from_env_lossy(),
		)
		.init();

	let request = args.request();
	debug!(?request, multiple = args.multiple, "starting");

	// Seeded once, before the first name
	let mut generator = NameGenerator::for_request(&request);

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	for i in 0..args.multiple {
		let name = generator
			.generate_request(&request)
			.with_context(|| format!("failed to generate name {}", i + 1))?;
		writeln!(out, "{name}")?;
	}
	out.flush()?;

	Ok(())
}

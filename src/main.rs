use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, warn, LevelFilter};
use widener::options::{RemapOptions, Substitution};

/// Remaps an access widener file from one mapping namespace into another, using a tiny v2 mappings file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
	/// The tiny v2 file to take the names from
	mappings: PathBuf,
	/// The access widener file to remap
	input: PathBuf,
	/// Where to write the remapped access widener file to
	output: PathBuf,

	/// The namespace the input is in
	#[arg(long, default_value = RemapOptions::DEFAULT_FROM)]
	from: String,
	/// The namespace to remap into
	#[arg(long, default_value = RemapOptions::DEFAULT_TO)]
	to: String,
	/// Package prefix of classes to remap inside of descriptors, can be given multiple times
	#[arg(long = "package", value_name = "PREFIX", default_values = RemapOptions::DEFAULT_PACKAGES)]
	packages: Vec<String>,
	/// Only replace the first occurrence of each class reference in a descriptor, like older tools did
	#[arg(long)]
	first_occurrence: bool,

	/// Log more, can be given multiple times
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
	/// Only log errors
	#[arg(short, long, conflicts_with = "verbose")]
	quiet: bool,
}

impl Cli {
	fn level(&self) -> LevelFilter {
		if self.quiet {
			return LevelFilter::Error;
		}
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}

	fn options(&self) -> RemapOptions {
		RemapOptions {
			from: self.from.clone(),
			to: self.to.clone(),
			packages: self.packages.clone(),
			substitution: if self.first_occurrence {
				Substitution::FirstOccurrence
			} else {
				Substitution::Positional
			},
		}
	}
}

fn setup_logger(level: LevelFilter) -> Result<()> {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
		.context("failed to set up logging")
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_logger(cli.level())?;

	let options = cli.options();

	let (table, _) = widener::tiny_v2::read_file(&cli.mappings, &options)?;
	if table.is_empty() {
		warn!("no mappings were read from {:?}, only the header will change", cli.mappings);
	}

	let summary = widener::access_widener::remap_file(&cli.input, &cli.output, &table, &options)?;

	info!("wrote {} lines to {:?}", summary.lines, cli.output);

	Ok(())
}

#[cfg(test)]
mod testing {
	use clap::{CommandFactory, Parser};
	use log::LevelFilter;
	use widener::options::{RemapOptions, Substitution};
	use crate::Cli;

	#[test]
	fn command() {
		Cli::command().debug_assert();
	}

	#[test]
	fn defaults() {
		let cli = Cli::try_parse_from(["widener-remap", "mappings.tiny", "in.accesswidener", "out.accesswidener"]).unwrap();

		assert_eq!(cli.options(), RemapOptions::default());
		assert_eq!(cli.level(), LevelFilter::Warn);
	}

	#[test]
	fn options() {
		let cli = Cli::try_parse_from([
			"widener-remap", "-vv", "--from", "named", "--to", "official",
			"--package", "org/example", "--first-occurrence",
			"mappings.tiny", "in.accesswidener", "out.accesswidener",
		]).unwrap();

		let options = cli.options();
		assert_eq!(options.from, "named");
		assert_eq!(options.to, "official");
		assert_eq!(options.packages, vec!["org/example".to_owned()]);
		assert_eq!(options.substitution, Substitution::FirstOccurrence);
		assert_eq!(cli.level(), LevelFilter::Debug);
	}

	#[test]
	fn missing_arguments() {
		assert!(Cli::try_parse_from(["widener-remap"]).is_err());
		assert!(Cli::try_parse_from(["widener-remap", "mappings.tiny", "in.accesswidener"]).is_err());
	}
}

//! Reading of "Tiny v2" mapping files into a [`MappingTable`].
//!
//! Only the names are read: class rows (`c`) at the top level, and field (`f`) and method (`m`) rows one level
//! below them. Everything else, like parameters, comments or deeper nested rows, is skipped.
//!
//! # Columns
//! If the file starts with a header line (`tiny	2	0	namespaceA	namespaceB	...`), the names of
//! [`RemapOptions::from`] are used as keys and the names of [`RemapOptions::to`] as values.
//!
//! Without a header, rows with three or more names map the second name to the third one, like for the usual
//! `official`, `intermediary`, `named` files. Rows with only two names map the first to the second.
//!
//! Rows that are too short are reported with a warning and skipped. Rows where the key or the value is empty don't
//! get stored, so that looking them up gives back the name unchanged.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use crate::error::RemapError;
use crate::lines::TinyLine;
use crate::options::RemapOptions;
use crate::table::{Kind, MappingTable};

/// What was read from a mappings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
	pub classes: usize,
	pub fields: usize,
	pub methods: usize,
	/// Rows skipped because they had too few columns.
	pub skipped: usize,
}

impl LoadSummary {
	fn count(&mut self, kind: Kind) {
		match kind {
			Kind::Class => self.classes += 1,
			Kind::Field => self.fields += 1,
			Kind::Method => self.methods += 1,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Columns {
	/// Name indices taken from the header.
	Header { from: usize, to: usize },
	/// No header, the indices depend on how many names a row has.
	Implicit,
}

impl Columns {
	fn pick(self, names: usize) -> (usize, usize) {
		match self {
			Columns::Header { from, to } => (from, to),
			Columns::Implicit if names >= 3 => (1, 2),
			Columns::Implicit => (0, 1),
		}
	}
}

/// Reads a `.tiny` file, by opening the file given by the path.
pub fn read_file(path: impl AsRef<Path>, options: &RemapOptions) -> Result<(MappingTable, LoadSummary)> {
	let path = path.as_ref();
	let file = File::open(path)
		.with_context(|| anyhow!("failed to open mappings file {path:?}"))?;
	read(file, options)
		.with_context(|| anyhow!("failed to read mappings file {path:?} as tiny v2 file"))
}

/// Reads the tiny v2 format from the given reader.
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use widener::options::RemapOptions;
/// use widener::table::Kind;
/// let string = "\
/// tiny	2	0	official	intermediary	named
/// c	a	net/minecraft/class_1	net/minecraft/Foo
/// 	f	I	b	field_1	count
/// 	m	()V	c	method_1	tick
/// ";
///
/// let (table, summary) = widener::tiny_v2::read(string.as_bytes(), &RemapOptions::default()).unwrap();
///
/// assert_eq!(table.map(Kind::Class, "net/minecraft/class_1"), "net/minecraft/Foo");
/// assert_eq!(table.map(Kind::Field, "field_1"), "count");
/// assert_eq!(table.map(Kind::Method, "method_1"), "tick");
/// assert_eq!(summary.skipped, 0);
/// ```
pub fn read(reader: impl Read, options: &RemapOptions) -> Result<(MappingTable, LoadSummary)> {
	let mut table = MappingTable::new();
	let mut summary = LoadSummary::default();
	let mut columns = Columns::Implicit;

	for (index, line) in BufReader::new(reader).lines().enumerate() {
		let line_number = index + 1;
		let line = line.with_context(|| anyhow!("failed to read line {line_number}"))?;
		let line = TinyLine::new(line_number, &line);

		if line_number == 1 && line.idents() == 0 && line.first_field() == "tiny" {
			columns = read_header(&line, options)
				.with_context(|| anyhow!("in header line {line_number}"))?;
			continue;
		}

		// (kind, index of the first name)
		let (kind, first_name) = match (line.idents(), line.first_field()) {
			(0, "c") => (Kind::Class, 1),
			(1, "f") => (Kind::Field, 2),
			(1, "m") => (Kind::Method, 2),
			_ => continue,
		};

		match read_names(&line, kind, first_name, columns) {
			Ok(Some((from, to))) => {
				if let Some(old) = table.insert(kind, from, to) {
					debug!("{kind} {from:?} was mapped to {old:?} before, now mapping it to {to:?}");
				}
				summary.count(kind);
			},
			Ok(None) => {},
			Err(e) => {
				warn!("skipping mapping row: {e}");
				summary.skipped += 1;
			},
		}
	}

	info!("read {} class, {} field and {} method mappings, skipped {} rows",
		summary.classes, summary.fields, summary.methods, summary.skipped);

	Ok((table, summary))
}

fn read_header(line: &TinyLine, options: &RemapOptions) -> Result<Columns> {
	line.require("header", 3)?;

	let fields = line.fields();
	if fields[1] != "2" {
		warn!("mappings declare tiny version {}.{}, reading them as tiny v2", fields[1], fields[2]);
	}

	let namespaces = &fields[3..];
	let position = |namespace: &str| {
		namespaces.iter()
			.position(|x| *x == namespace)
			.ok_or_else(|| RemapError::UnknownNamespace {
				namespace: namespace.to_owned(),
				available: namespaces.iter().map(|x| x.to_string()).collect(),
			})
	};

	let from = position(options.from.as_str())?;
	let to = position(options.to.as_str())?;

	debug!("mapping namespace {:?} (column {from}) to {:?} (column {to})", options.from, options.to);

	Ok(Columns::Header { from, to })
}

/// Gets the key and value name of a row, or `None` if one of them is empty.
fn read_names<'a>(line: &TinyLine<'a>, kind: Kind, first_name: usize, columns: Columns) -> Result<Option<(&'a str, &'a str)>, RemapError> {
	let names = line.fields().get(first_name..).unwrap_or_default();
	let (from, to) = columns.pick(names.len());

	line.require(kind.as_str(), first_name + from.max(to) + 1)?;

	match (names[from], names[to]) {
		("", _) | (_, "") => Ok(None),
		(from, to) => Ok(Some((from, to))),
	}
}

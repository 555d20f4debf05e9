//! Remapping of access widener files, line by line.
//!
//! Every input line gives exactly one output line, in the same order:
//! - the header (`accessWidener	v2	intermediary`) gets its namespace replaced,
//! - comments (starting with `#`) and empty lines are copied,
//! - declarations (`<access>	class	<class>`, `<access>	method	<class>	<name>	<descriptor>`,
//!   `<access>	field	<class>	<name>	<descriptor>`) get their names and descriptors remapped,
//! - any other line is copied.
//!
//! Class, field and method names without a mapping are kept as they are. Descriptors are remapped with the
//! [`DescriptorRemapper`], which fails on missing class mappings instead.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, IntoInnerError, Read, Write};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use tempfile::NamedTempFile;
use crate::error::RemapError;
use crate::options::RemapOptions;
use crate::remapper::DescriptorRemapper;
use crate::table::{Kind, MappingTable};

/// The first column of the header line.
pub const HEADER: &str = "accessWidener";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
	Header,
	Comment,
	Declaration(Kind),
	/// Lines without a known kind in the second column, including empty lines.
	Other,
}

/// Finds out what kind of line this is, without looking at the columns after the second one.
pub fn classify(line: &str) -> LineKind {
	if line.starts_with(HEADER) {
		LineKind::Header
	} else if line.starts_with('#') {
		LineKind::Comment
	} else {
		line.split('\t')
			.nth(1)
			.and_then(Kind::from_declaration)
			.map_or(LineKind::Other, LineKind::Declaration)
	}
}

/// How many lines of each kind were remapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemapSummary {
	pub lines: usize,
	pub headers: usize,
	pub comments: usize,
	pub classes: usize,
	pub methods: usize,
	pub fields: usize,
	pub other: usize,
}

impl RemapSummary {
	fn count(&mut self, kind: LineKind) {
		self.lines += 1;
		match kind {
			LineKind::Header => self.headers += 1,
			LineKind::Comment => self.comments += 1,
			LineKind::Declaration(Kind::Class) => self.classes += 1,
			LineKind::Declaration(Kind::Method) => self.methods += 1,
			LineKind::Declaration(Kind::Field) => self.fields += 1,
			LineKind::Other => self.other += 1,
		}
	}
}

#[derive(Debug, Clone, Copy)]
pub struct LineRemapper<'a> {
	table: &'a MappingTable,
	options: &'a RemapOptions,
	descriptors: DescriptorRemapper<'a>,
}

impl<'a> LineRemapper<'a> {
	pub fn new(table: &'a MappingTable, options: &'a RemapOptions) -> LineRemapper<'a> {
		LineRemapper {
			table,
			options,
			descriptors: DescriptorRemapper::new(table, options),
		}
	}

	/// Remaps a single line. The line number is only used for error messages.
	pub fn remap_line<'l>(&self, line_number: usize, line: &'l str) -> Result<Cow<'l, str>> {
		self.remap_classified(classify(line), line_number, line)
	}

	fn remap_classified<'l>(&self, kind: LineKind, line_number: usize, line: &'l str) -> Result<Cow<'l, str>> {
		match kind {
			LineKind::Header => Ok(self.remap_header(line)),
			LineKind::Comment | LineKind::Other => Ok(Cow::Borrowed(line)),
			LineKind::Declaration(kind) => self.remap_declaration(kind, line_number, line).map(Cow::Owned),
		}
	}

	fn remap_header<'l>(&self, line: &'l str) -> Cow<'l, str> {
		if line.contains(self.options.from.as_str()) {
			let remapped = line.replacen(self.options.from.as_str(), &self.options.to, 1);
			debug!("rewrote header {line:?} to {remapped:?}");
			Cow::Owned(remapped)
		} else {
			warn!("header {line:?} doesn't mention the namespace {:?}, leaving it as is", self.options.from);
			Cow::Borrowed(line)
		}
	}

	fn remap_declaration(&self, kind: Kind, line_number: usize, line: &str) -> Result<String> {
		let columns: Vec<&str> = line.split('\t').collect();

		let expected = match kind {
			Kind::Class => 3,
			Kind::Field | Kind::Method => 5,
		};
		if columns.len() < expected {
			return Err(RemapError::row_format(line_number, kind.as_str(), expected, columns.len(), line).into());
		}

		// extra columns after the ones we remap are kept
		let mut remapped: Vec<Cow<str>> = columns.iter().map(|&column| Cow::Borrowed(column)).collect();

		let class = columns[2];
		remapped[2] = Cow::Borrowed(self.table.map(Kind::Class, class));

		if let Kind::Field | Kind::Method = kind {
			let name = columns[3];
			remapped[3] = Cow::Borrowed(self.table.map(kind, name));
			remapped[4] = self.descriptors.map_desc(columns[4])
				.map_err(|e| e.at_line(line_number))
				.with_context(|| anyhow!("failed to remap the descriptor of {kind} {class}.{name}"))?;
		}

		Ok(remapped.join("\t"))
	}
}

/// Remaps all lines from the reader, and writes them to the writer.
///
/// Each line written ends with a `\n`. The writer gets flushed at the end.
pub fn remap(reader: impl Read, mut writer: impl Write, table: &MappingTable, options: &RemapOptions) -> Result<RemapSummary> {
	let remapper = LineRemapper::new(table, options);
	let mut summary = RemapSummary::default();

	for (index, line) in BufReader::new(reader).lines().enumerate() {
		let line_number = index + 1;
		let line = line.with_context(|| anyhow!("failed to read line {line_number}"))?;

		let kind = classify(&line);
		let remapped = remapper.remap_classified(kind, line_number, &line)
			.with_context(|| anyhow!("in line {line_number}"))?;

		writeln!(writer, "{remapped}")
			.with_context(|| anyhow!("failed to write line {line_number}"))?;

		summary.count(kind);
	}

	writer.flush().context("failed to flush output")?;

	info!("remapped {} lines: {} classes, {} methods, {} fields, {} other",
		summary.lines, summary.classes, summary.methods, summary.fields, summary.other);

	Ok(summary)
}

/// Remaps the file at `input` into the file at `output`.
///
/// The output is first written to a uniquely named temporary file in the directory of `output`, which is then moved
/// to `output`. If anything fails, the temporary file is removed and `output` is left as it was.
pub fn remap_file(input: impl AsRef<Path>, output: impl AsRef<Path>, table: &MappingTable, options: &RemapOptions) -> Result<RemapSummary> {
	let input = input.as_ref();
	let output = output.as_ref();

	let reader = File::open(input)
		.with_context(|| anyhow!("failed to open input file {input:?}"))?;

	let directory = match output.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let temporary = NamedTempFile::new_in(directory)
		.with_context(|| anyhow!("failed to create a temporary file in {directory:?}"))?;

	// on any error below, dropping the temporary file deletes it
	let mut writer = BufWriter::new(temporary);

	let summary = remap(reader, &mut writer, table, options)
		.with_context(|| anyhow!("failed to remap {input:?} into {output:?}"))?;

	let temporary = writer.into_inner()
		.map_err(IntoInnerError::into_error)
		.context("failed to flush output")?;
	temporary.as_file().sync_all()
		.with_context(|| anyhow!("failed to sync {:?}", temporary.path()))?;

	temporary.persist(output)
		.with_context(|| anyhow!("failed to move the remapped file to {output:?}"))?;

	Ok(summary)
}

#[cfg(test)]
mod testing {
	use crate::access_widener::{classify, LineKind};
	use crate::table::Kind;

	#[test]
	fn classify_lines() {
		assert_eq!(classify("accessWidener\tv2\tintermediary"), LineKind::Header);
		assert_eq!(classify("# a comment"), LineKind::Comment);
		assert_eq!(classify("accessible\tclass\tnet/minecraft/class_1"), LineKind::Declaration(Kind::Class));
		assert_eq!(classify("mutable\tfield\ta\tb\tI"), LineKind::Declaration(Kind::Field));
		assert_eq!(classify("extendable\tmethod\ta\tb\t()V"), LineKind::Declaration(Kind::Method));
		assert_eq!(classify("accessible\tpackage\ta"), LineKind::Other);
		assert_eq!(classify(""), LineKind::Other);
	}
}

use crate::error::RemapError;

/// A line of a tab separated file, with the leading tabs counted and split off.
#[derive(Debug)]
pub(crate) struct TinyLine<'a> {
	line_number: usize,
	idents: usize,
	raw: &'a str,
	fields: Vec<&'a str>,
}

impl<'a> TinyLine<'a> {
	pub(crate) fn new(line_number: usize, raw: &'a str) -> TinyLine<'a> {
		let line = raw.trim_start_matches('\t');
		// a tab is always one byte
		let idents = raw.len() - line.len();

		TinyLine {
			line_number,
			idents,
			raw,
			fields: line.split('\t').collect(),
		}
	}

	pub(crate) fn idents(&self) -> usize {
		self.idents
	}

	pub(crate) fn first_field(&self) -> &'a str {
		self.fields.first().copied().unwrap_or_default()
	}

	/// All fields, including the first one.
	pub(crate) fn fields(&self) -> &[&'a str] {
		&self.fields
	}

	/// Checks that there are at least `expected` fields, including the first one.
	pub(crate) fn require(&self, kind: &'static str, expected: usize) -> Result<(), RemapError> {
		if self.fields.len() < expected {
			Err(RemapError::row_format(self.line_number, kind, expected, self.fields.len(), self.raw))
		} else {
			Ok(())
		}
	}
}

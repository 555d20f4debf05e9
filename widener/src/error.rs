//! The failures that can happen while reading mappings and remapping lines.
//!
//! All functions of this crate return [`anyhow::Result`]. The errors here are carried inside of it and can be
//! recovered with [`anyhow::Error::downcast_ref`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemapError {
	/// A mapping row or access widener line has fewer tab separated columns than its kind requires.
	#[error("line {line_number}: a {kind} row needs at least {expected} columns, but has {found}: {raw:?}")]
	RowFormat {
		line_number: usize,
		kind: &'static str,
		expected: usize,
		found: usize,
		raw: String,
	},
	/// A descriptor references a class that has no entry in the class mappings.
	///
	/// The line number is known when the descriptor was remapped as part of an access widener line.
	#[error("{}no class mapping for {class:?}, referenced in descriptor {descriptor:?}", .line_number.map(|n| format!("line {n}: ")).unwrap_or_default())]
	MissingMapping {
		line_number: Option<usize>,
		class: String,
		descriptor: String,
	},
	/// The header of the mappings doesn't list a namespace we need.
	#[error("namespace {namespace:?} is not one of the mapping namespaces {available:?}")]
	UnknownNamespace {
		namespace: String,
		available: Vec<String>,
	},
}

impl RemapError {
	pub(crate) fn row_format(line_number: usize, kind: &'static str, expected: usize, found: usize, raw: &str) -> RemapError {
		RemapError::RowFormat {
			line_number,
			kind,
			expected,
			found,
			raw: raw.to_owned(),
		}
	}

	/// Attaches the line number to a [`RemapError::MissingMapping`].
	pub(crate) fn at_line(self, line: usize) -> RemapError {
		match self {
			RemapError::MissingMapping { line_number: None, class, descriptor } => RemapError::MissingMapping {
				line_number: Some(line),
				class,
				descriptor,
			},
			other => other,
		}
	}
}

//! The lookup tables built from the mappings.
//!
//! Note that fields and methods are not scoped to the class owning them: a member name is mapped the same way in every
//! class, and the last row read for a name wins. Access widener remapping has always worked like this, and output must
//! stay identical to what older tools produced, so don't scope them per class.

use std::fmt::{Display, Formatter};
use indexmap::IndexMap;

/// The kind of thing a mapping row or access widener declaration is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	Class,
	Field,
	Method,
}

impl Kind {
	pub fn as_str(self) -> &'static str {
		match self {
			Kind::Class => "class",
			Kind::Field => "field",
			Kind::Method => "method",
		}
	}

	/// Parses the second column of an access widener declaration.
	pub fn from_declaration(tag: &str) -> Option<Kind> {
		match tag {
			"class" => Some(Kind::Class),
			"field" => Some(Kind::Field),
			"method" => Some(Kind::Method),
			_ => None,
		}
	}
}

impl Display for Kind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Three independent maps from names in the source namespace to names in the target namespace.
///
/// Built once by [`crate::tiny_v2::read`], and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
	classes: IndexMap<String, String>,
	fields: IndexMap<String, String>,
	methods: IndexMap<String, String>,
}

impl MappingTable {
	pub fn new() -> MappingTable {
		MappingTable::default()
	}

	fn names(&self, kind: Kind) -> &IndexMap<String, String> {
		match kind {
			Kind::Class => &self.classes,
			Kind::Field => &self.fields,
			Kind::Method => &self.methods,
		}
	}

	fn names_mut(&mut self, kind: Kind) -> &mut IndexMap<String, String> {
		match kind {
			Kind::Class => &mut self.classes,
			Kind::Field => &mut self.fields,
			Kind::Method => &mut self.methods,
		}
	}

	/// Inserts a mapping, returning the previous target name if there was one.
	pub fn insert(&mut self, kind: Kind, from: impl Into<String>, to: impl Into<String>) -> Option<String> {
		self.names_mut(kind).insert(from.into(), to.into())
	}

	/// Looks up the target name, if the mapping exists.
	pub fn get(&self, kind: Kind, from: &str) -> Option<&str> {
		self.names(kind).get(from).map(String::as_str)
	}

	/// Looks up the target name, if the mapping doesn't exist, returns the name given.
	pub fn map<'a>(&'a self, kind: Kind, from: &'a str) -> &'a str {
		self.get(kind, from).unwrap_or(from)
	}

	/// Checks if any mapping of this kind has the given target name.
	pub fn is_target(&self, kind: Kind, to: &str) -> bool {
		self.names(kind).values().any(|name| name == to)
	}

	pub fn len(&self, kind: Kind) -> usize {
		self.names(kind).len()
	}

	pub fn is_empty(&self) -> bool {
		self.classes.is_empty() && self.fields.is_empty() && self.methods.is_empty()
	}
}

#[cfg(test)]
mod testing {
	use crate::table::{Kind, MappingTable};

	#[test]
	fn lookup_falls_back_to_identity() {
		let mut table = MappingTable::new();
		table.insert(Kind::Class, "a", "A");

		assert_eq!(table.map(Kind::Class, "a"), "A");
		assert_eq!(table.map(Kind::Class, "b"), "b");
		assert_eq!(table.get(Kind::Class, "b"), None);
		// the kinds don't share their names
		assert_eq!(table.map(Kind::Field, "a"), "a");

		assert!(table.is_target(Kind::Class, "A"));
		assert!(!table.is_target(Kind::Class, "a"));
		assert!(!table.is_target(Kind::Method, "A"));
	}

	#[test]
	fn later_insert_wins() {
		let mut table = MappingTable::new();
		assert_eq!(table.insert(Kind::Method, "method_1", "tick"), None);
		assert_eq!(table.insert(Kind::Method, "method_1", "update"), Some("tick".to_owned()));

		assert_eq!(table.map(Kind::Method, "method_1"), "update");
		assert_eq!(table.len(Kind::Method), 1);
	}
}

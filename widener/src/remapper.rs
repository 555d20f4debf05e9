//! Remapping of the class names referenced in field and method descriptors.
//!
//! A descriptor like `(ILnet/minecraft/class_1;[Lnet/minecraft/class_2;)V` references classes in the form
//! `L<class name>;`. The [`DescriptorRemapper`] replaces each of these with the name from the class mappings.
//!
//! Only descriptors whose references all lie in one of the [remapped packages][RemapOptions::packages] are touched.
//! As soon as a single reference is outside of these, the whole descriptor is given back unchanged, even if other
//! references could have been remapped.
//!
//! A referenced class without a mapping that already is the target name of some class mapping is kept as is. This
//! makes remapping a file that is already in the target namespace a no-op, instead of failing.

use std::borrow::Cow;
use std::ops::Range;
use log::trace;
use crate::error::RemapError;
use crate::options::{RemapOptions, Substitution};
use crate::table::{Kind, MappingTable};

fn is_class_name_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'/' | b'$')
}

/// Finds all object type references in a descriptor.
///
/// A reference is an `L`, followed by at least one ASCII letter, digit, `_`, `/` or `$`, followed by a `;`. The ranges
/// returned include the `L` and the `;`, and are in the order found.
///
/// This doesn't validate the descriptor. A `L` that doesn't start a reference is just skipped over.
///
/// ```
/// let desc = "(I[Lnet/minecraft/class_1;)Ljava/lang/String;";
/// let references = widener::remapper::object_references(desc);
///
/// assert_eq!(references, vec![3..26, 27..45]);
/// assert_eq!(&desc[references[0].clone()], "Lnet/minecraft/class_1;");
/// ```
pub fn object_references(desc: &str) -> Vec<Range<usize>> {
	let bytes = desc.as_bytes();
	let mut references = Vec::new();

	let mut start = 0;
	while start < bytes.len() {
		if bytes[start] == b'L' {
			let end = bytes[start + 1..].iter()
				.position(|&byte| !is_class_name_byte(byte))
				.map_or(bytes.len(), |length| start + 1 + length);

			if end > start + 1 && bytes.get(end) == Some(&b';') {
				references.push(start..end + 1);
				start = end + 1;
				continue;
			}
		}
		start += 1;
	}

	references
}

/// Gets the class name out of a reference range, without the `L` and the `;`.
fn class_name<'d>(desc: &'d str, reference: &Range<usize>) -> &'d str {
	&desc[reference.start + 1..reference.end - 1]
}

#[derive(Debug, Clone, Copy)]
pub struct DescriptorRemapper<'a> {
	table: &'a MappingTable,
	options: &'a RemapOptions,
}

impl<'a> DescriptorRemapper<'a> {
	pub fn new(table: &'a MappingTable, options: &'a RemapOptions) -> DescriptorRemapper<'a> {
		DescriptorRemapper { table, options }
	}

	/// Maps a field or method descriptor.
	///
	/// Gives back the descriptor borrowed if there's nothing to remap, or if any referenced class is outside the
	/// remapped packages. Fails with [`RemapError::MissingMapping`] if a referenced class inside the remapped
	/// packages has no mapping, and isn't a target name either.
	pub fn map_desc<'d>(&self, desc: &'d str) -> Result<Cow<'d, str>, RemapError> {
		let references = object_references(desc);
		if references.is_empty() {
			return Ok(Cow::Borrowed(desc));
		}

		if let Some(outside) = references.iter()
			.map(|reference| class_name(desc, reference))
			.find(|class| !self.options.in_scope(class))
		{
			trace!("leaving descriptor {desc:?} as is, {outside:?} is outside of the remapped packages");
			return Ok(Cow::Borrowed(desc));
		}

		let mapped = match self.options.substitution {
			Substitution::Positional => {
				let mut s = String::with_capacity(desc.len());
				let mut last = 0;

				for reference in &references {
					let new_class_name = self.map_class(desc, class_name(desc, reference))?;

					s.push_str(&desc[last..reference.start]);
					s.push('L');
					s.push_str(new_class_name);
					s.push(';');

					last = reference.end;
				}
				s.push_str(&desc[last..]);

				s
			},
			Substitution::FirstOccurrence => {
				let mut s = desc.to_owned();

				for reference in &references {
					let new_class_name = self.map_class(desc, class_name(desc, reference))?;

					s = s.replacen(&desc[reference.clone()], &format!("L{new_class_name};"), 1);
				}

				s
			},
		};

		Ok(Cow::Owned(mapped))
	}

	fn map_class<'x>(&'x self, desc: &str, class: &'x str) -> Result<&'x str, RemapError> {
		match self.table.get(Kind::Class, class) {
			Some(new_class_name) => Ok(new_class_name),
			None if self.table.is_target(Kind::Class, class) => Ok(class),
			None => Err(RemapError::MissingMapping {
				line_number: None,
				class: class.to_owned(),
				descriptor: desc.to_owned(),
			}),
		}
	}
}

#[cfg(test)]
mod testing {
	use crate::remapper::object_references;

	#[test]
	fn references() {
		assert_eq!(object_references("()V"), vec![]);
		assert_eq!(object_references("I"), vec![]);
		assert_eq!(object_references("[[La/b;"), vec![2..7]);
		assert_eq!(object_references("(La;Lb$c;)La;"), vec![1..4, 4..9, 10..13]);
		// a `L` without a following name, or without a `;`, doesn't start a reference
		assert_eq!(object_references("L;"), vec![]);
		assert_eq!(object_references("La(Lb;"), vec![3..6]);
		assert_eq!(object_references("(JLa"), vec![]);
	}
}

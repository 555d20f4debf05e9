//! Options controlling what gets remapped and how.

/// How the class references inside of a descriptor are substituted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Substitution {
	/// Every reference is replaced at the position it was found at.
	#[default]
	Positional,
	/// For every reference found, the first textual occurrence of it in the partially remapped descriptor is replaced.
	///
	/// This is what older tools did. It differs from [`Substitution::Positional`] when a class is mapped to the name
	/// of another class referenced in the same descriptor.
	FirstOccurrence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapOptions {
	/// The namespace the input is written in, and the key column of the mappings.
	pub from: String,
	/// The namespace the output is written in, and the value column of the mappings.
	pub to: String,
	/// Package prefixes of the classes that get remapped inside of descriptors.
	///
	/// This is a plain string prefix check, `net/minecraft` also matches `net/minecraftforge/Foo`.
	pub packages: Vec<String>,
	pub substitution: Substitution,
}

impl RemapOptions {
	pub const DEFAULT_FROM: &'static str = "intermediary";
	pub const DEFAULT_TO: &'static str = "named";
	pub const DEFAULT_PACKAGES: [&'static str; 2] = ["net/minecraft", "com/mojang"];

	/// Checks if a class referenced in a descriptor falls under one of the remapped packages.
	pub fn in_scope(&self, class: &str) -> bool {
		self.packages.iter().any(|package| class.starts_with(package.as_str()))
	}
}

impl Default for RemapOptions {
	fn default() -> Self {
		RemapOptions {
			from: Self::DEFAULT_FROM.to_owned(),
			to: Self::DEFAULT_TO.to_owned(),
			packages: Self::DEFAULT_PACKAGES.map(String::from).to_vec(),
			substitution: Substitution::default(),
		}
	}
}

#[cfg(test)]
mod testing {
	use crate::options::{RemapOptions, Substitution};

	#[test]
	fn defaults() {
		let options = RemapOptions::default();
		assert_eq!(options.from, "intermediary");
		assert_eq!(options.to, "named");
		assert_eq!(options.substitution, Substitution::Positional);
	}

	#[test]
	fn scope_is_a_string_prefix() {
		let options = RemapOptions::default();
		assert!(options.in_scope("net/minecraft/class_1"));
		assert!(options.in_scope("com/mojang/blaze3d/Foo"));
		assert!(options.in_scope("net/minecraftforge/Bar"));
		assert!(!options.in_scope("java/lang/Object"));
		assert!(!options.in_scope("com/other/Bar"));
	}
}

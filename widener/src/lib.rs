#![allow(clippy::tabs_in_doc_comments)]

//! Crate for remapping access widener files from one mapping namespace into another.
//!
//! The work is done in two steps: first a Tiny v2 (`.tiny`) file is read into a [`MappingTable`][table::MappingTable]
//! by the [`tiny_v2`] module, then every line of an access widener file is rewritten by the [`access_widener`] module.
//! The table has to be read completely before the first line is remapped.
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! use widener::options::RemapOptions;
//! let mappings = "\
//! c	net/minecraft/Foo	A
//! 	m	()V	bar	baz
//! ";
//! let input = "\
//! accessWidener	v2	intermediary
//! accessible	method	net/minecraft/Foo	bar	()V
//! ";
//!
//! let options = RemapOptions::default();
//! let (table, _) = widener::tiny_v2::read(mappings.as_bytes(), &options).unwrap();
//!
//! let mut output = Vec::new();
//! widener::access_widener::remap(input.as_bytes(), &mut output, &table, &options).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "\
//! accessWidener	v2	named
//! accessible	method	A	baz	()V
//! ");
//! ```

mod lines;

pub mod access_widener;
pub mod error;
pub mod options;
pub mod remapper;
pub mod table;
pub mod tiny_v2;

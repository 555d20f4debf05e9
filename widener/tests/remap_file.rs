use std::fs;
use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use widener::options::RemapOptions;
use widener::table::MappingTable;

#[test]
fn remap_file() -> Result<()> {
	let dir = TempDir::new()?;
	let input = dir.path().join("input.accesswidener");
	let output = dir.path().join("output.accesswidener");
	fs::write(&input, include_str!("end_to_end_input.accesswidener"))?;

	let options = RemapOptions::default();
	let (table, _) = widener::tiny_v2::read(include_str!("end_to_end.tiny").as_bytes(), &options)?;

	let summary = widener::access_widener::remap_file(&input, &output, &table, &options)?;

	assert_eq!(fs::read_to_string(&output)?, include_str!("end_to_end_output.accesswidener"));
	assert_eq!(summary.lines, 4);
	// only the input and the output are left
	assert_eq!(fs::read_dir(dir.path())?.count(), 2);

	Ok(())
}

#[test]
fn failure_leaves_output_alone() -> Result<()> {
	let dir = TempDir::new()?;
	let input = dir.path().join("input.accesswidener");
	let output = dir.path().join("output.accesswidener");
	fs::write(&input, "accessWidener\tv2\tintermediary\naccessible\tfield\tnet/minecraft/Foo\tx\tLnet/minecraft/Missing;\n")?;
	fs::write(&output, "previous content\n")?;

	let options = RemapOptions::default();
	let (table, _) = widener::tiny_v2::read(include_str!("end_to_end.tiny").as_bytes(), &options)?;

	let result = widener::access_widener::remap_file(&input, &output, &table, &options);

	assert!(result.is_err());
	assert_eq!(fs::read_to_string(&output)?, "previous content\n");
	assert_eq!(fs::read_dir(dir.path())?.count(), 2);

	Ok(())
}

#[test]
fn failure_creates_no_output() -> Result<()> {
	let dir = TempDir::new()?;
	let input = dir.path().join("input.accesswidener");
	let output = dir.path().join("output.accesswidener");
	fs::write(&input, "accessible\tclass\n")?;

	let result = widener::access_widener::remap_file(&input, &output, &MappingTable::new(), &RemapOptions::default());

	assert!(result.is_err());
	assert!(!output.exists());
	assert_eq!(fs::read_dir(dir.path())?.count(), 1);

	Ok(())
}

#[test]
fn failure_keeps_unrelated_files() -> Result<()> {
	let dir = TempDir::new()?;
	let input = dir.path().join("input.accesswidener");
	let output = dir.path().join("output.accesswidener");
	// looks like a temporary file name, but belongs to someone else
	let unrelated = dir.path().join(".output.accesswidener.tmp");
	fs::write(&input, "accessible\tclass\n")?;
	fs::write(&unrelated, "user data")?;

	let result = widener::access_widener::remap_file(&input, &output, &MappingTable::new(), &RemapOptions::default());

	assert!(result.is_err());
	assert_eq!(fs::read_to_string(&unrelated)?, "user data");
	assert_eq!(fs::read_dir(dir.path())?.count(), 2);

	Ok(())
}

#[test]
fn missing_input() -> Result<()> {
	let dir = TempDir::new()?;
	let output = dir.path().join("output.accesswidener");

	let result = widener::access_widener::remap_file(dir.path().join("nope"), &output, &MappingTable::new(), &RemapOptions::default());

	assert!(result.is_err());
	assert!(!output.exists());
	assert_eq!(fs::read_dir(dir.path())?.count(), 0);

	Ok(())
}

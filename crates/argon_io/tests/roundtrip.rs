//! File-level round trips through the reader and writer.

use argon_floorplan::Axis;
use argon_io::{format_placement, read_design, write_placement, ParseError};
use std::io::Write;

#[test]
fn read_design_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "NumHardBlocks 3\n\
         HardBlock a 10 10\n\
         HardBlock b 10 10\n\
         HardBlock solo 5 5\n\
         NumSymGroups 1\n\
         SymGroup sg0 1 Horizontal\n\
         SymPair a b\n"
    )
    .unwrap();

    let design = read_design(file.path()).unwrap();
    assert_eq!(design.block_count(), 3);
    assert_eq!(design.groups.len(), 1);
    assert_eq!(design.groups[0].axis, Axis::Horizontal);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_design(dir.path().join("does_not_exist.txt")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn write_then_reread_placement_text() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("result.out");

    let mut design = read_design_from_str(
        "NumHardBlocks 2\n\
         HardBlock m1 10 10\n\
         HardBlock m2 20 5\n",
    );
    design.blocks[1].x = 10;
    write_placement(&out_path, 300, &design.blocks).unwrap();

    let text = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(text, format_placement(300, &design.blocks));
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Area 300"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("NumHardBlocks 2"));
    assert_eq!(lines.next(), Some("m1 0 0 0"));
    assert_eq!(lines.next(), Some("m2 10 0 0"));
}

fn read_design_from_str(content: &str) -> argon_floorplan::Design {
    argon_io::parse_design(content).unwrap()
}

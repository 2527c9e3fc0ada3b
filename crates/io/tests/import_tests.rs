// Integration tests for puzzle file import: parse from disk, accept, then
// number and derive clues from the imported grid.
// Run with: cargo test -p xword-io --test import_tests

use std::fs;
use std::path::{Path, PathBuf};

use xword_core::{ClueKey, Direction, GridLimits};
use xword_engine::{calculate_numbers, derive_clues, merge_clues};
use xword_io::{accept, parse_puzzle_file, ImportError};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

/// A 5x5 `.puz` with two blocks in the second and fourth rows.
fn sample_puz() -> Vec<u8> {
    let mut data = vec![0u8; 0x34];
    data[2..13].copy_from_slice(b"ACROSS&DOWN");
    data[0x18..0x1B].copy_from_slice(b"1.3");
    data[0x2C] = 5;
    data[0x2D] = 5;
    data[0x2E..0x30].copy_from_slice(&6u16.to_le_bytes());

    data.extend_from_slice(b"ABCDEF.G.HIJKLMN.O.PQRSTU");
    data.extend_from_slice(b"------.-.-------.-.------");
    for s in ["Sample Title", "Sample Author", "Sample Copyright"] {
        data.extend_from_slice(s.as_bytes());
        data.push(0);
    }
    for i in 1..=6 {
        data.extend_from_slice(format!("Clue {}", i).as_bytes());
        data.push(0);
    }
    data
}

// ---------------------------------------------------------------------------
// .puz from disk
// ---------------------------------------------------------------------------

#[test]
fn puz_file_imports_and_renumbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.puz");
    fs::write(&path, sample_puz()).unwrap();

    let bytes = fs::read(&path).unwrap();
    let parsed = parse_puzzle_file("sample.puz", &bytes).unwrap();
    let grid = accept(parsed, &GridLimits::default()).unwrap();

    assert_eq!(grid.title, "Sample Title");
    assert_eq!((grid.width, grid.height), (5, 5));
    assert_eq!(grid.cells.len(), 25);
    assert!(grid.cells.iter().all(|c| c.entry.is_empty()));

    let numbers: Vec<u32> = calculate_numbers(grid.width, grid.height, &grid.cells)
        .iter()
        .map(|a| a.number)
        .collect();
    assert_eq!(&numbers[0..5], &[1, 0, 2, 0, 3]);
    assert_eq!(numbers[10], 4);
    assert_eq!(numbers[20], 5);

    let clues = merge_clues(derive_clues(grid.width, grid.height, &grid.cells), grid.clues);
    let one_across = clues.iter().find(|c| c.key() == ClueKey::new(1, Direction::Across)).unwrap();
    assert_eq!(one_across.answer, "ABCDE");
    assert_eq!(one_across.text, "Clue 1");

    let three_down = clues.iter().find(|c| c.key() == ClueKey::new(3, Direction::Down)).unwrap();
    assert_eq!(three_down.answer, "EHMPU");
    assert_eq!(three_down.text, "Clue 4");
    assert!(clues.iter().all(|c| !c.is_orphan()));
}

#[test]
fn signature_sniffing_ignores_extension() {
    let parsed = parse_puzzle_file("upload.bin", &sample_puz()).unwrap();
    assert_eq!(parsed.author, "Sample Author");
}

// ---------------------------------------------------------------------------
// .ipuz fixture
// ---------------------------------------------------------------------------

#[test]
fn ipuz_fixture_imports() {
    let bytes = fs::read(fixture("sample.ipuz")).unwrap();
    let parsed = parse_puzzle_file("sample.ipuz", &bytes).unwrap();
    assert_eq!(parsed.clues.len(), 10);

    let grid = accept(parsed, &GridLimits::default()).unwrap();
    assert_eq!(grid.title, "Five by Five");
    assert_eq!(grid.author, "Test Setter");
    assert_eq!(grid.cells[0].solution, "H");
    assert!(grid.cells[24].is_block);

    let clues = merge_clues(derive_clues(grid.width, grid.height, &grid.cells), grid.clues);
    let seven_across = clues.iter().find(|c| c.key() == ClueKey::new(7, Direction::Across)).unwrap();
    assert_eq!(seven_across.answer, "ABUSE");
    assert_eq!(seven_across.text, "Misuse");

    let nine_across = clues.iter().find(|c| c.key() == ClueKey::new(9, Direction::Across)).unwrap();
    assert_eq!(nine_across.answer, "TREN");

    let five_down = clues.iter().find(|c| c.key() == ClueKey::new(5, Direction::Down)).unwrap();
    assert_eq!(five_down.answer, "TREN");
}

#[test]
fn oversized_import_is_rejected_before_writing() {
    let json = format!(
        r#"{{"dimensions": {{"width": 30, "height": 30}}, "puzzle": {}}}"#,
        serde_json::to_string(&vec![vec![0; 30]; 30]).unwrap()
    );
    let parsed = parse_puzzle_file("big.ipuz", json.as_bytes()).unwrap();
    let err = accept(parsed, &GridLimits::default()).unwrap_err();
    assert!(matches!(err, ImportError::TooLarge { max: 23, .. }));
}

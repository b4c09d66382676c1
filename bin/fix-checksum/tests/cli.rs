use std::fs;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn fix_checksum(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fix-checksum"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run fix-checksum")
}

fn rom_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp");
    file.write_all(contents).expect("write");
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = fix_checksum(&[]);

    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("Usage: fix-checksum"));
}

#[test]
fn test_repairs_in_place() {
    let mut contents = vec![0u8; 0x300];
    contents[0x1A3] = 0x10;
    contents[0x1A7] = 0x2F;
    contents[0x18E] = 0x12;
    contents[0x18F] = 0x34;
    contents[0x200] = 0x00;
    contents[0x201] = 0x05;

    let file = rom_file(&contents);
    let path = file.path().to_str().unwrap();

    let output = fix_checksum(&[path]);
    assert!(output.status.success(), "{}", stdout(&output));

    let fixed = fs::read(path).unwrap();
    assert_eq!(fixed.len(), 0x400);
    assert_eq!(&fixed[0x18E..0x190], &[0x00, 0x05]);
    assert_eq!(&fixed[0x1A0..0x1A4], &[0, 0, 0, 0]);
    assert_eq!(&fixed[0x1A4..0x1A8], &[0x00, 0x00, 0x03, 0xFF]);

    assert_eq!(
        stdout(&output),
        "Reported ROM start: 0x10\n\
         Reported ROM end:   0x2F\n\
         New ROM start:      0x0\n\
         New ROM end:        0x3FF\n\
         Old checksum:       0x1234\n\
         New checksum:       0x5\n\
         Old file size:      768 (0x300) byte(s)\n\
         New file size:      1024 (0x400) byte(s)\n"
    );
}

#[test]
fn test_quiet_and_skip_padding() {
    let file = rom_file(&[0u8; 0x301]);
    let path = file.path().to_str().unwrap();

    let output = fix_checksum(&["-Q", "-s", "-p", "170", path]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let fixed = fs::read(path).unwrap();
    assert_eq!(fixed.len(), 0x302);
    assert_eq!(fixed[0x301], 0xAA);
    assert_eq!(&fixed[0x18E..0x190], &[0x00, 0xAA]);
    assert_eq!(&fixed[0x1A4..0x1A8], &[0x00, 0x00, 0x03, 0x01]);
}

#[test]
fn test_too_small() {
    let file = rom_file(&[0u8; 9]);
    let path = file.path().to_str().unwrap();

    let output = fix_checksum(&["-p", "255", path]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), format!("Error: \"{}\" is too small.\n", path));
    assert_eq!(fs::read(path).unwrap(), vec![0u8; 9]);
}

#[test]
fn test_invalid_pad_leaves_file_alone() {
    let contents = (0..0x300u32).map(|i| i as u8).collect::<Vec<_>>();
    let file = rom_file(&contents);
    let path = file.path().to_str().unwrap();

    for bad in &["256", "abc"] {
        let output = fix_checksum(&["-p", *bad, path]);

        assert!(!output.status.success());
        assert_eq!(
            stdout(&output),
            format!("Error: Invalid pad value \"{}\".\n", bad)
        );
        assert_eq!(fs::read(path).unwrap(), contents);
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.md");
    let path = path.to_str().unwrap();

    let output = fix_checksum(&[path]);

    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        format!("Error: Cannot open \"{}\" for reading.\n", path)
    );
}

#[test]
fn test_second_run_is_stable() {
    let contents = (0..0x5000u32)
        .map(|i| (i * 13 + 1) as u8)
        .collect::<Vec<_>>();
    let file = rom_file(&contents);
    let path = file.path().to_str().unwrap();

    assert!(fix_checksum(&["-q", "-p", "3", path]).status.success());
    let first = fs::read(path).unwrap();

    assert!(fix_checksum(&["-q", "-p", "3", path]).status.success());
    let second = fs::read(path).unwrap();

    assert_eq!(first.len(), 0x8000);
    assert_eq!(first, second);
}

#[test]
fn test_pad_value_uses_leading_integer() {
    let file = rom_file(&[0u8; 0x301]);
    let path = file.path().to_str().unwrap();

    let output = fix_checksum(&["-q", "-s", "-p", "170abc", path]);

    assert!(output.status.success(), "{}", stdout(&output));

    let fixed = fs::read(path).unwrap();
    assert_eq!(fixed.len(), 0x302);
    assert_eq!(fixed[0x301], 0xAA);
}

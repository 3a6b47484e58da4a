use std::fs;
use std::path::PathBuf;

use wcwidth_bakery::output::{publish, write};
use wcwidth_bakery::{CodepointRange, Error, UcdInput, WidthTables};

/// отдельный каталог на тест
fn scratch(name: &str) -> PathBuf
{
    let dir = std::env::temp_dir().join(format!("wcwidth_bakery-{}-{}", name, std::process::id()));

    _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    dir
}

fn tables() -> WidthTables
{
    WidthTables {
        invalid: vec![CodepointRange::new(0x378, 0x379).unwrap()],
        zero_width: vec![CodepointRange::new(0x300, 0x36F).unwrap()],
        double_width: vec![CodepointRange::single(0x3000)],
    }
}

#[test]
fn writes_c_and_rust()
{
    let dir = scratch("formats");

    write(dir.join("my-wcwidth-tables.h"), &tables()).unwrap();
    write(dir.join("tables.rs"), &tables()).unwrap();

    let header = fs::read_to_string(dir.join("my-wcwidth-tables.h")).unwrap();
    let module = fs::read_to_string(dir.join("tables.rs")).unwrap();

    assert!(header.starts_with("#pragma once\n"));
    assert!(header.contains("static const struct ucs_range ucs_double_width[] = {\n    {0x03000, 0x03000}\n};\n"));
    assert!(module.contains("pub const UCS_ZERO_WIDTH: &[(u32, u32)] = &[\n    (0x00300, 0x0036f)\n];\n"));

    // временных файлов не остаётся
    let mut names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names, ["my-wcwidth-tables.h", "tables.rs"]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failed_render_keeps_previous_output()
{
    let dir = scratch("keep");
    let path = dir.join("my-wcwidth-tables.h");

    fs::write(&path, "previous").unwrap();

    let mut broken = tables();
    broken.invalid.clear();

    assert!(matches!(write(&path, &broken), Err(Error::EmptyClass(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn publish_into_missing_directory_fails()
{
    let dir = scratch("missing");
    let path = dir.join("no-such-dir").join("tables.h");

    match publish(&path, "contents") {
        Err(Error::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(!path.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn open_reports_path()
{
    let dir = scratch("open");
    let path = dir.join("EastAsianWidth.txt");

    match UcdInput::open(&path) {
        Err(Error::Io { path: failed, .. }) => assert_eq!(failed, path),
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("file should not exist"),
    }

    fs::write(&path, "3000;F\n").unwrap();
    let input = UcdInput::open(&path).unwrap();
    assert_eq!(input.name, path.display().to_string());

    fs::remove_dir_all(&dir).unwrap();
}

use pwa_icons::{ICONS, generate_icons};
use std::{fs, process::Command};

const EXPECTED_OUTPUT: &str = "Created icon-192.png\nCreated icon-512.png\nIcons generated successfully!\n";

fn png_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_generate_icons() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    let written = generate_icons(dir.path(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_OUTPUT);
    assert_eq!(written.len(), 2);
    assert_eq!(png_names(dir.path()), vec!["icon-192.png", "icon-512.png"]);

    for (size, name) in ICONS {
        let image = image::open(dir.path().join(name)).unwrap();
        assert_eq!((image.width(), image.height()), (size, size));
        assert_eq!(image.color(), image::ColorType::Rgb8);
    }
}

#[test]
fn test_generate_icons_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();

    generate_icons(dir.path(), &mut Vec::new()).unwrap();
    let first = image::open(dir.path().join("icon-512.png")).unwrap().to_rgb8();

    generate_icons(dir.path(), &mut Vec::new()).unwrap();
    let second = image::open(dir.path().join("icon-512.png")).unwrap().to_rgb8();

    assert_eq!(first, second);
    assert_eq!(png_names(dir.path()).len(), 2);
}

#[test]
fn test_generate_icons_fails_on_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let mut out = Vec::new();

    assert!(generate_icons(&missing, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_second_icon_failure_keeps_first() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("icon-512.png")).unwrap();
    let mut out = Vec::new();

    assert!(generate_icons(dir.path(), &mut out).is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "Created icon-192.png\n");

    let first = image::open(dir.path().join("icon-192.png")).unwrap();
    assert_eq!((first.width(), first.height()), (192, 192));
    assert!(dir.path().join("icon-512.png").is_dir());
}

#[test]
fn test_binary_writes_next_to_itself() {
    let exe_dir = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    let exe = exe_dir.path().join("pwa-icons");

    fs::copy(env!("CARGO_BIN_EXE_pwa-icons"), &exe).unwrap();

    let output = Command::new(&exe)
        .current_dir(cwd.path())
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_OUTPUT);
    assert_eq!(png_names(exe_dir.path()), vec!["icon-192.png", "icon-512.png"]);
    assert!(png_names(cwd.path()).is_empty());
}

use devlogo_core::RgbaImage;
use std::path::Path;
use std::process::{Command, Output};

fn devlogo(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devlogo"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("spawn devlogo")
}

/// Blue fill with a white and a transparent pixel.
fn sample_logo() -> RgbaImage {
    RgbaImage::from_fn(3, 2, |x, y| match (x, y) {
        (0, 0) => [255, 255, 255, 255],
        (1, 0) => [0, 0, 255, 0],
        _ => [0, 0, 255, 255],
    })
}

#[test]
fn explicit_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    devlogo_io::write(dir.path().join("in.png"), &sample_logo()).expect("write input");

    let out = devlogo(dir.path(), &["in.png", "out.png"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Generated out.png"), "{stdout}");

    let result = devlogo_io::read(dir.path().join("out.png")).expect("read output");
    assert_eq!(result.dimensions(), (3, 2));
    assert_eq!(result.pixel(0, 0), [255, 255, 255, 255]);
    assert_eq!(result.pixel(1, 0), [0, 0, 255, 0]);
    assert_eq!(result.pixel(2, 1), [255, 45, 0, 255]);
}

#[test]
fn default_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    devlogo_io::write(dir.path().join("logo.png"), &sample_logo()).expect("write input");

    let out = devlogo(dir.path(), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("logo-dev.png"));
    assert!(dir.path().join("logo-dev.png").exists());
}

#[test]
fn single_thread_matches_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = RgbaImage::from_fn(64, 64, |x, y| [(x * 4) as u8, (y * 4) as u8, 255, 255]);
    devlogo_io::write(dir.path().join("logo.png"), &src).expect("write input");

    assert!(devlogo(dir.path(), &["logo.png", "a.png"]).status.success());
    assert!(devlogo(dir.path(), &["-j", "1", "logo.png", "b.png"]).status.success());

    let a = devlogo_io::read(dir.path().join("a.png")).expect("read a");
    let b = devlogo_io::read(dir.path().join("b.png")).expect("read b");
    assert_eq!(a, b);
}

#[test]
fn missing_source_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = devlogo(dir.path(), &["absent.png"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to load: absent.png"), "{stderr}");
    assert!(!dir.path().join("logo-dev.png").exists());
}

#[test]
fn unwritable_destination_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    devlogo_io::write(dir.path().join("logo.png"), &sample_logo()).expect("write input");
    let out = devlogo(dir.path(), &["logo.png", "no/such/dir/out.png"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to save"));
}

use std::path::PathBuf;
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ogimage-bin-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[cfg(feature = "imaging")]
#[test]
fn binary_writes_public_og_jpg_relative_to_cwd() {
    let dir = scratch_dir("ok");
    let output = Command::new(env!("CARGO_BIN_EXE_ogimage"))
        .current_dir(&dir)
        .output()
        .expect("spawn ogimage");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created: public/og.jpg"), "stdout: {stdout}");

    let bytes = std::fs::read(dir.join("public").join("og.jpg")).expect("read og.jpg");
    assert_eq!(&bytes[..3], &[0xff, 0xd8, 0xff]);
    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).expect("decode");
    assert_eq!((decoded.width(), decoded.height()), (1200, 630));

    std::fs::remove_dir_all(&dir).ok();
}

#[cfg(not(feature = "imaging"))]
#[test]
fn binary_without_imaging_exits_nonzero_and_writes_nothing() {
    let dir = scratch_dir("noimaging");
    let output = Command::new(env!("CARGO_BIN_EXE_ogimage"))
        .current_dir(&dir)
        .output()
        .expect("spawn ogimage");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--features imaging"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!dir.join("public").exists());

    std::fs::remove_dir_all(&dir).ok();
}

use std::fs;

use mediaday_client::{
    ensure_output_dir, Artifact, ArtifactSink, AtomicFileWriter, DownloadDirSink,
    ARTIFACT_FILE_NAME,
};
use tempfile::TempDir;

fn entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("downloads");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_and_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("a.zip", b"hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "a.zip");
    assert_eq!(fs::read(&first).unwrap(), b"hello");

    let second = writer.write("a.zip", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"world");
    assert_eq!(entries(temp.path()), vec!["a.zip".to_string()]);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("a.zip", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("a.zip").exists());
    assert_eq!(entries(temp.path()), vec!["not_a_dir".to_string()]);
}

#[test]
fn download_dir_sink_writes_fixed_name() {
    let temp = TempDir::new().unwrap();
    let sink = DownloadDirSink::new(temp.path().join("downloads"));

    let saved = sink
        .save(&Artifact::zip(b"fake zip content".to_vec()))
        .unwrap();

    assert_eq!(saved.file_name, ARTIFACT_FILE_NAME);
    assert_eq!(saved.byte_len, 16);
    let location = saved.location.expect("location");
    assert_eq!(fs::read(location).unwrap(), b"fake zip content");
}

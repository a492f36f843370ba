//! Failure paths: every error surfaces with its stage, and codec failures
//! never touch the destination.

use std::fs;
use std::io::ErrorKind;

use crate::{Codec, FnCodec, FormatCodec, FormatError, FormatKind, OutputWriter, Stage};

#[derive(Debug, PartialEq)]
struct Rejected(&'static str);

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rejected: {}", self.0)
    }
}

impl std::error::Error for Rejected {}

/// Codec whose decode always fails.
#[derive(Debug)]
struct FailingDecode;

impl<'a> Codec<&'a str> for FailingDecode {
    type Decoded = String;
    type Encoded = String;
    type Error = Rejected;

    fn decode(&self, _content: &'a str) -> Result<String, Rejected> {
        Err(Rejected("decode"))
    }

    fn encode(&self, decoded: String) -> Result<String, Rejected> {
        Ok(decoded)
    }
}

#[test]
fn empty_path_is_rejected_at_construction() {
    let err = OutputWriter::new("").expect_err("empty path must be rejected");
    assert_eq!(err.stage, Stage::ResolveOutput);
}

#[test]
fn decode_failure_leaves_existing_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.txt");
    fs::write(&path, "previous").unwrap();

    let writer = OutputWriter::with_codec(&path, FailingDecode).unwrap();
    let err = writer.output("new").expect_err("decode should fail");

    assert_eq!(err.stage, Stage::Decode);
    assert!(err.is_codec_error());
    assert_eq!(err.target, path.to_string_lossy());
    assert_eq!(err.downcast_ref::<Rejected>(), Some(&Rejected("decode")));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
}

#[test]
fn decode_failure_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("never.txt");

    let writer = OutputWriter::with_codec(&path, FailingDecode).unwrap();
    writer.output("x").unwrap_err();

    assert!(!path.exists());
}

#[test]
fn encode_failure_is_reported_at_encode_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enc.txt");
    fs::write(&path, "previous").unwrap();

    let codec = FnCodec::new(
        |s: &str| Ok::<_, Rejected>(s.len()),
        |_n: usize| Err::<String, _>(Rejected("encode")),
    );
    let writer = OutputWriter::with_codec(&path, codec).unwrap();
    let err = writer.output("abc").unwrap_err();

    assert_eq!(err.stage, Stage::Encode);
    let inner = err.into_inner();
    assert_eq!(inner.to_string(), "rejected: encode");
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
}

#[test]
fn format_codec_parse_error_is_propagated_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");

    let writer =
        OutputWriter::with_codec(&path, FormatCodec::new(FormatKind::Json, FormatKind::Json))
            .unwrap();
    let err = writer.output("{not-json").unwrap_err();

    assert_eq!(err.stage, Stage::Decode);
    match err.downcast_ref::<FormatError>() {
        Some(FormatError::Serde(_)) => {}
        other => panic!("expected FormatError::Serde, got: {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn file_blocking_a_directory_segment_fails_at_create_dir() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "i am a file").unwrap();

    let writer = OutputWriter::new(blocker.join("child").join("out.txt")).unwrap();
    let err = writer.output("x").unwrap_err();

    assert_eq!(err.stage, Stage::CreateDir);
    assert!(!err.is_codec_error());
    assert!(err.downcast_ref::<std::io::Error>().is_some());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "i am a file");
}

#[test]
fn directory_at_destination_fails_at_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("occupied");
    fs::create_dir(&path).unwrap();

    let writer = OutputWriter::new(&path).unwrap();
    let err = writer.output("x").unwrap_err();

    assert_eq!(err.stage, Stage::Open);
    let io = err
        .downcast_ref::<std::io::Error>()
        .expect("open failure carries an io::Error");
    assert_ne!(io.kind(), ErrorKind::NotFound);
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_fails_at_write() {
    let writer = OutputWriter::new("/dev/full").unwrap();
    let err = writer.output("x").unwrap_err();

    assert_eq!(err.stage, Stage::Write);
    assert!(!err.is_codec_error());
    let io = err
        .downcast_ref::<std::io::Error>()
        .expect("write failure carries an io::Error");
    assert_eq!(io.raw_os_error(), Some(28));
}

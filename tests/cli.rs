use std::io::Write;
use std::process::{Command, Output};

use claim::assert_gt;
use tempfile::NamedTempFile;

const SAMPLE: &str = "header1,row1Value1
header2,row2Value1
header3 11/31/2011,row3Value1,row3Value2
header1,row4Value1,row4Value2
header2,row5Value1
header3 11/31/2011,row6Value1,row6Value2
";

const SAMPLE_OUT: &str = concat!(
    "header1,header2,header3 ,\n",
    "row1Value1, row2Value1, row3Value1, \n",
    ", , row3Value2, \n",
    "row4Value1, row5Value1, row6Value1, \n",
    "row4Value2, , row6Value2, \n",
    "header1,header2,header3 ,\n",
);

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kv-transpose"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_on(contents: &[u8]) -> Output {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush temp file");
    bin().arg(file.path()).output().expect("run kv-transpose")
}

#[test]
fn transposes_sample_file() {
    let out = run_on(SAMPLE.as_bytes());
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), SAMPLE_OUT);
    assert!(out.stderr.is_empty());
}

#[test]
fn last_line_without_newline() {
    let out = run_on(b"a,1\nb,2");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1, 2, \na,b,\n");
}

#[test]
fn latin1_bytes_are_copied_unchanged() {
    let out = run_on(b"caf\xe9,na\xefve\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"na\xefve, \ncaf\xe9,\n".to_vec());
}

#[test]
fn empty_file_prints_only_the_footer() {
    let out = run_on(b"");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\n");
}

#[test]
fn missing_file_is_empty_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = bin()
        .arg(dir.path().join("does-not-exist.csv"))
        .output()
        .expect("run kv-transpose");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot open input"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let out = bin().output().expect("run kv-transpose");
    assert_eq!(out.status.code(), Some(255));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("kv-transpose <infile.csv>"));
    assert!(err.contains("Source data:"));
    assert!(err.contains("header3 11/31/2011,row3Value1,row3Value2"));
}

#[test]
fn two_arguments_is_a_usage_error() {
    let out = bin().args(&["a.csv", "b.csv"]).output().expect("run kv-transpose");
    assert_eq!(out.status.code(), Some(255));
    assert!(out.stdout.is_empty());
    assert_gt!(out.stderr.len(), 0);
}

#[test]
fn help_exits_cleanly() {
    let out = bin().arg("--help").output().expect("run kv-transpose");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Output:"));
}

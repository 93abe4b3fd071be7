// crates/romgen-cli/tests/generate_tables.rs

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_ok(cmd: &mut Command) {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

fn romgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_romgen-cli"))
}

fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read table")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
        .map(str::to_owned)
        .collect()
}

#[test]
fn sine_table_has_known_quarter_cycle_codes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("sin8.hex");

    run_ok(romgen().args([
        "sine",
        "--n",
        "8",
        "--bits",
        "8",
        "--output",
        out.to_str().unwrap(),
    ]));

    let lines = data_lines(&out);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "00");
    // i=2 is pi/2: full-scale positive.
    assert_eq!(lines[2], "7f");
    // i=6 is 3*pi/2: full-scale negative, two's complement.
    assert_eq!(lines[6], "81");
}

#[test]
fn twiddle_table_packs_real_high_imag_low() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("tw4.hex");

    run_ok(romgen().args([
        "twiddle",
        "--n",
        "4",
        "--bits",
        "8",
        "--output",
        out.to_str().unwrap(),
        "--no-header",
    ]));

    assert_eq!(data_lines(&out), vec!["7f00".to_owned(), "0081".to_owned()]);
}

#[test]
fn twiddle_defaults_match_a_512_point_q23_rom() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("tw512.hex");

    run_ok(romgen().args(["twiddle", "--output", out.to_str().unwrap()]));

    let text = fs::read_to_string(&out).expect("read table");
    assert!(text.starts_with("//"), "expected comment header");

    let lines = data_lines(&out);
    assert_eq!(lines.len(), 256);
    for line in &lines {
        assert_eq!(line.len(), 12, "24-bit components pack to 12 hex chars");
    }
    assert_eq!(lines[0], "7fffff000000");
}

#[test]
fn identical_args_produce_byte_identical_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.hex");
    let b = dir.path().join("b.hex");

    for out in [&a, &b] {
        run_ok(romgen().args([
            "sine",
            "--n",
            "1024",
            "--bits",
            "18",
            "--output",
            out.to_str().unwrap(),
        ]));
    }

    assert_eq!(
        fs::read(&a).expect("read a"),
        fs::read(&b).expect("read b"),
        "re-running with identical parameters must be reproducible"
    );
}

#[test]
fn partial_nibble_twiddle_width_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.hex");

    let out = romgen()
        .args([
            "twiddle",
            "--n",
            "512",
            "--bits",
            "18",
            "--output",
            path.to_str().unwrap(),
        ])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(!path.exists(), "no partial file on config error");
}

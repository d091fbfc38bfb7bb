//! CLI surface tests
//!
//! Runs the built binary and checks that bad arguments exit cleanly with a
//! message instead of panicking, and that the usage text documents the
//! per-shape role of the overloaded fields.

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_spectrogen"))
        .args(args)
        .output()
        .expect("binary runs")
}

#[test]
fn usage_lists_shapes_with_field_roles() {
    let output = run(&[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
    // overload labels come from the shape enum, one line per shape
    assert!(stderr.contains("Duration (P):"));
    assert!(stderr.contains("Duration (2P):"));
    assert!(stderr.contains("Translate (X):"));
    assert!(stderr.contains("Phase (phi):"));
}

#[test]
fn non_positive_interval_is_a_clean_error() {
    let output = run(&["sin", "-1", "1", "1", "1", "0", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("interval must be a positive number"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn reversed_window_is_a_clean_error() {
    let output = run(&["square", "5", "2", "1", "4", "0", "0.01"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid sampling window"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn valid_request_prints_signal_and_spectrum_tables() {
    let output = run(&["cos", "0", "1", "1", "1", "0", "0.25", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cosine waveform"));
    assert!(stdout.contains("re(signal)"));
    assert!(stdout.contains("abs(FFT)"));
}

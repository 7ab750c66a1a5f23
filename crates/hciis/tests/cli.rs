//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Analyze Command
// =============================================================================

const PERSUASIVE: &str = "Experts say the crisis is absolutely shocking. Panic is spreading.";

/// Write `content` to a temp file and return it (kept alive by the caller).
fn temp_input(content: &str) -> tempfile::NamedTempFile {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), content).unwrap();
    tmp
}

#[test]
fn analyze_prints_every_section() {
    let tmp = temp_input("The quick brown fox jumps. The fox runs fast.");
    cmd()
        .args(["--color", "never", "analyze", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cognitive Load:"))
        .stdout(predicate::str::contains("Manipulation & Persuasion:"))
        .stdout(predicate::str::contains("Emotion & Tone:"))
        .stdout(predicate::str::contains("Decision Risk & Ambiguity:"))
        .stdout(predicate::str::contains("Information Quality:"));
}

#[test]
fn analyze_json_outputs_document_report() {
    let tmp = temp_input(PERSUASIVE);
    let output = cmd()
        .args(["analyze", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("analyze --json should output valid JSON");
    assert!(json["cognitive_load"]["load"].is_number());
    assert!(json["manipulation"]["score"].as_f64().unwrap() > 0.0);
    assert!(json["information_quality"]["details"].is_object());
}

#[test]
fn analyze_reads_stdin() {
    cmd()
        .args(["--json", "analyze", "-", "--checks", "emotion"])
        .write_stdin("I am so happy and delighted today.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dominant\": \"Joy\""));
}

#[test]
fn analyze_checks_limits_sections() {
    let tmp = temp_input(PERSUASIVE);
    cmd()
        .args([
            "analyze",
            tmp.path().to_str().unwrap(),
            "--checks",
            "decision_risk,emotion",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"decision_risk\""))
        .stdout(predicate::str::contains("\"density\""))
        .stdout(predicate::str::contains("\"load\"").not());
}

#[test]
fn unknown_check_name_fails() {
    let tmp = temp_input("The cat sat on the mat.");
    cmd()
        .args([
            "analyze",
            tmp.path().to_str().unwrap(),
            "--checks",
            "sentiment",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown check"));
}

#[test]
fn blank_input_fails() {
    let tmp = temp_input("   \n\n  ");
    cmd()
        .args(["analyze", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scorable text"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/input.txt"));
}

// =============================================================================
// Analyze: quality gates
// =============================================================================

#[test]
fn manipulation_gate_fails_after_printing() {
    let tmp = temp_input(PERSUASIVE);
    cmd()
        .args([
            "--color",
            "never",
            "analyze",
            tmp.path().to_str().unwrap(),
            "--max-manipulation",
            "5",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Manipulation & Persuasion:"))
        .stderr(predicate::str::contains("above maximum"));
}

#[test]
fn generous_gates_pass() {
    let tmp = temp_input("The meeting starts at noon in room four.");
    cmd()
        .args([
            "analyze",
            tmp.path().to_str().unwrap(),
            "--max-cognitive-load",
            "100",
            "--max-ambiguity",
            "1",
            "--min-quality",
            "0",
        ])
        .assert()
        .success();
}

#[test]
fn config_gate_is_enforced() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hciis.toml"), "min_quality = 99.5\n").unwrap();
    std::fs::write(dir.path().join("input.txt"), PERSUASIVE).unwrap();

    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "analyze", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 99.5"));
}

#[test]
fn input_limit_rejects_large_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hciis.toml"), "max_input_bytes = 16\n").unwrap();
    std::fs::write(dir.path().join("input.txt"), PERSUASIVE).unwrap();

    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "analyze", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Report Command
// =============================================================================

#[test]
fn report_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("report.txt");
    std::fs::write(&input, PERSUASIVE).unwrap();

    cmd()
        .args([
            "report",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("Human-Centered Information Intelligence System Report"));
    assert!(written.contains("Information Quality"));
}

#[test]
fn report_honors_configured_layout() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("hciis.toml"),
        "[report]\nwrap_width = 30\npage_lines = 10\nmin_remaining_lines = 4\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("input.txt"), PERSUASIVE).unwrap();

    cmd()
        .args([
            "-C",
            dir.path().to_str().unwrap(),
            "report",
            "input.txt",
            "-o",
            "out.txt",
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(written.contains('\x0c'));
    for line in written.lines() {
        assert!(line.trim_start_matches('\x0c').chars().count() <= 30);
    }
}

#[test]
fn report_to_unwritable_path_fails() {
    let tmp = temp_input(PERSUASIVE);
    cmd()
        .args([
            "report",
            tmp.path().to_str().unwrap(),
            "--output",
            "/nonexistent/dir/report.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/dir/report.txt"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

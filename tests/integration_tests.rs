use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get the path to the tempora binary
fn tempora_bin() -> std::path::PathBuf {
    // The binary is built in target/debug/tempora when running tests
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps directory
    path.push("tempora");
    path
}

/// Run tempora in a specific directory with a clean configuration environment
fn run_tempora(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(tempora_bin())
        .current_dir(dir)
        .args(args)
        .env_remove("TEMPORA_TZ")
        .env_remove("TEMPORA_AT")
        .env_remove("TEMPORA_PREFIX")
        .env_remove("TZ")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute tempora command")
}

/// Helper to get stdout as string
fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper to get stderr as string
fn stderr_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// NOW COMMAND TESTS
// =============================================================================

#[test]
fn test_now_sydney_report() {
    let dir = tempdir().unwrap();

    let output = run_tempora(
        dir.path(),
        &[
            "--tz",
            "Australia/Sydney",
            "--at",
            "2025-11-20T04:06:25+11:00",
            "now",
        ],
    );

    let stderr = stderr_str(&output);
    assert!(output.status.success(), "now failed: {}", stderr);

    let stdout = stdout_str(&output);
    assert!(stdout.contains("Thursday, November 20, 2025 at 04:06:25 AEDT"));
    assert!(stdout.contains("Week:    47 of 2025 (Q4)"));
    assert!(stdout.contains("Business hours: no"));
    assert!(stdout.contains("Market hours:   no"));
}

#[test]
fn test_now_json_record() {
    let dir = tempdir().unwrap();

    let output = run_tempora(
        dir.path(),
        &[
            "--tz",
            "US/Eastern",
            "--at",
            "2025-06-16T10:15:00-04:00",
            "now",
            "--json",
        ],
    );
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(record["timezone"], "US/Eastern");
    assert_eq!(record["day_of_week"], "Monday");
    assert_eq!(record["day_of_week_num"], 1);
    assert_eq!(record["is_market_hours"], true);
    assert_eq!(record["is_business_hours"], true);
    assert_eq!(record["is_weekend"], false);
    assert_eq!(record["utc_instant"], 1750083300);
}

#[test]
fn test_now_frozen_instant_is_repeatable() {
    let dir = tempdir().unwrap();
    let args = [
        "--tz",
        "Europe/Berlin",
        "--at",
        "1750083300",
        "now",
        "--json",
    ];

    let first = run_tempora(dir.path(), &args);
    let second = run_tempora(dir.path(), &args);

    assert!(first.status.success());
    assert_eq!(stdout_str(&first), stdout_str(&second));
}

#[test]
fn test_unknown_timezone_falls_back_to_utc() {
    let dir = tempdir().unwrap();

    let output = run_tempora(
        dir.path(),
        &[
            "--tz",
            "Mars/Olympus_Mons",
            "--at",
            "2025-06-16T10:15:00Z",
            "now",
            "--json",
        ],
    );

    assert!(output.status.success(), "fallback must not be fatal");

    let record: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(record["timezone"], "UTC");
    assert_eq!(record["hour"], 10);

    let stderr = stderr_str(&output);
    assert!(stderr.contains("using UTC"), "should warn: {}", stderr);
}

#[test]
fn test_tz_variable_used_without_flag() {
    let dir = tempdir().unwrap();

    let output = Command::new(tempora_bin())
        .current_dir(dir.path())
        .args(["--at", "2025-06-16T10:15:00Z", "now", "--json"])
        .env_remove("TEMPORA_TZ")
        .env_remove("TEMPORA_AT")
        .env_remove("RUST_LOG")
        .env("TZ", ":Asia/Tokyo")
        .output()
        .expect("Failed to execute tempora command");
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(record["timezone"], "Asia/Tokyo");
    assert_eq!(record["hour"], 19);
}

#[test]
fn test_rust_log_level_enables_debug_output() {
    let dir = tempdir().unwrap();

    let output = Command::new(tempora_bin())
        .current_dir(dir.path())
        .args(["--tz", "US/Eastern", "--at", "1750083300", "env"])
        .env_remove("TEMPORA_TZ")
        .env_remove("TEMPORA_AT")
        .env_remove("TEMPORA_PREFIX")
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to execute tempora command");
    assert!(output.status.success());

    let stderr = stderr_str(&output);
    assert!(stderr.contains("resolved timezone"), "no debug log: {}", stderr);
}

#[test]
fn test_invalid_instant_fails() {
    let dir = tempdir().unwrap();

    let output = run_tempora(dir.path(), &["--tz", "UTC", "--at", "soon", "now"]);

    assert!(!output.status.success());
    assert!(stderr_str(&output).contains("invalid instant"));
}

// =============================================================================
// ENV COMMAND TESTS
// =============================================================================

#[test]
fn test_env_shell_exports() {
    let dir = tempdir().unwrap();

    let output = run_tempora(
        dir.path(),
        &[
            "--tz",
            "US/Eastern",
            "--at",
            "2025-06-14T12:00:00-04:00",
            "env",
        ],
    );
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.contains("export TEMPORAL_DAY_OF_WEEK='Saturday'\n"));
    assert!(stdout.contains("export TEMPORAL_IS_WEEKEND='true'\n"));
    assert!(stdout.contains("export TEMPORAL_IS_BUSINESS_HOURS='true'\n"));
    assert!(stdout.contains("export TEMPORAL_TIMEZONE='US/Eastern'\n"));
    let stderr = stderr_str(&output);
    assert!(stderr.is_empty(), "unexpected stderr: {}", stderr);
}

#[test]
fn test_env_custom_prefix_and_format() {
    let dir = tempdir().unwrap();

    let output = run_tempora(
        dir.path(),
        &[
            "--tz",
            "US/Eastern",
            "--at",
            "2025-06-16T09:15:00-04:00",
            "env",
            "--prefix",
            "claude",
            "--format",
            "powershell",
        ],
    );
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.contains("$env:CLAUDE_IS_MARKET_HOURS = 'false'"));
    assert!(stdout.contains("$env:CLAUDE_IS_BUSINESS_HOURS = 'true'"));
    assert!(!stdout.contains("TEMPORAL_"));
}

#[test]
fn test_env_prefix_from_environment() {
    let dir = tempdir().unwrap();

    let output = Command::new(tempora_bin())
        .current_dir(dir.path())
        .args(["--tz", "UTC", "--at", "0", "env", "--format", "dotenv"])
        .env_remove("TEMPORA_TZ")
        .env_remove("TEMPORA_AT")
        .env_remove("TZ")
        .env_remove("RUST_LOG")
        .env("TEMPORA_PREFIX", "AGENT")
        .output()
        .expect("Failed to execute tempora command");
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.contains("AGENT_DATE=\"1970-01-01\""));
    assert!(stdout.contains("AGENT_DAY_OF_WEEK=\"Thursday\""));
}

#[test]
fn test_env_rejects_bad_prefix() {
    let dir = tempdir().unwrap();

    let output = run_tempora(dir.path(), &["--tz", "UTC", "env", "--prefix", "9lives"]);

    assert!(!output.status.success());
    assert!(stderr_str(&output).contains("invalid prefix"));
}

// =============================================================================
// DIRECTIVE COMMAND TESTS
// =============================================================================

#[test]
fn test_directive_creates_file() {
    let dir = tempdir().unwrap();

    let output = run_tempora(dir.path(), &["directive"]);
    let stderr = stderr_str(&output);
    assert!(output.status.success(), "directive failed: {}", stderr);
    assert!(stdout_str(&output).contains("Created"));

    let content = fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(content.contains("<!-- tempora:begin sha256="));
    assert!(content.contains("TEMPORAL_IS_MARKET_HOURS"));
    assert!(content.ends_with("<!-- tempora:end -->\n"));
}

#[test]
fn test_directive_is_idempotent() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("AGENTS.md");
    fs::write(&file, "# Agents\n\nExisting guidance.\n").unwrap();

    let first = run_tempora(dir.path(), &["directive", "--file", "AGENTS.md"]);
    assert!(first.status.success());
    assert!(stdout_str(&first).contains("Appended to"));
    let after_first = fs::read_to_string(&file).unwrap();

    let second = run_tempora(dir.path(), &["directive", "--file", "AGENTS.md"]);
    assert!(second.status.success());
    assert!(stdout_str(&second).contains("Already up to date"));

    assert_eq!(fs::read_to_string(&file).unwrap(), after_first);
    assert!(after_first.starts_with("# Agents\n\nExisting guidance.\n\n"));
    assert_eq!(after_first.matches("tempora:begin").count(), 1);
}

#[test]
fn test_directive_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();

    let args = ["directive", "--dry-run", "--prefix", "CLAUDE"];
    let output = run_tempora(dir.path(), &args);
    assert!(output.status.success());
    assert!(stdout_str(&output).contains("CLAUDE_WEEK_OF_YEAR"));
    assert!(!dir.path().join("CLAUDE.md").exists());
}

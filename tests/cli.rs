use assert_cmd::Command;
use predicates::prelude::*;

fn launcher() -> Command {
    let mut cmd = Command::cargo_bin("bot-launcher").unwrap();
    cmd.env_remove("BOT_LAUNCHER_PYTHON")
        .env_remove("BOT_LAUNCHER_TERMINAL")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn dry_run_prints_ten_posix_commands() {
    let dir = tempfile::tempdir().unwrap();
    let out = launcher()
        .current_dir(dir.path())
        .args([
            "--dry-run",
            "--platform",
            "posix",
            "--interpreter",
            "python3",
            "--terminal",
            "xterm",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with("xterm -e \"python3 "));
        assert!(line.ends_with(&format!(
            "bot.py --email=user{i}@example.com --password=password{i}; bash\" &"
        )));
    }
}

#[test]
fn json_report_for_windows_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = launcher()
        .current_dir(dir.path())
        .args([
            "--dry-run",
            "--json",
            "--platform",
            "windows",
            "--interpreter",
            "python",
            "--count",
            "3",
            "--first-index",
            "40",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["platform"], "windows");
    assert_eq!(report["submitted"], 3);
    let launches = report["launches"].as_array().unwrap();
    assert_eq!(launches[0]["email"], "user40@example.com");
    assert!(launches[2]["command"]
        .as_str()
        .unwrap()
        .starts_with("start cmd /k \"python "));
    assert!(launches[2]["pid"].is_null());
}

#[test]
fn config_file_is_layered_under_flags() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("launch.json");
    std::fs::write(
        &cfg,
        r#"{"count": 2, "platform": "posix", "interpreter": "py-from-file", "terminal": "kitty"}"#,
    )
    .unwrap();

    launcher()
        .current_dir(dir.path())
        .args(["--dry-run", "--terminal", "alacritty", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("alacritty -e \"py-from-file "))
        .stdout(predicate::str::contains("user1@example.com"))
        .stdout(predicate::str::contains("user2@example.com").not());
}

#[test]
fn out_of_range_count_is_rejected() {
    launcher()
        .args(["--dry-run", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("count must be between 1 and 100"));

    launcher()
        .args(["--dry-run", "--first-index", "95"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("seeded accounts"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    launcher()
        .current_dir(dir.path())
        .args(["--dry-run", "--config", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[cfg(unix)]
#[test]
fn json_stdout_closes_while_terminals_still_run() {
    use std::io::Read;
    use std::os::unix::fs::PermissionsExt;
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let dir = tempfile::tempdir().unwrap();
    let term = dir.path().join("slowterm");
    std::fs::write(&term, "#!/bin/sh\nsleep 4\n").unwrap();
    std::fs::set_permissions(&term, std::fs::Permissions::from_mode(0o755)).unwrap();

    let started = Instant::now();
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("bot-launcher"))
        .current_dir(dir.path())
        .env("RUST_LOG", "warn")
        .args(["--json", "--count", "2", "--platform", "posix"])
        .args(["--interpreter", "python3", "--terminal"])
        .arg(&term)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut out = Vec::new();
    child.stdout.take().unwrap().read_to_end(&mut out).unwrap();
    let elapsed = started.elapsed();
    assert!(child.wait().unwrap().success());

    assert!(elapsed < Duration::from_secs(3), "stdout held open for {elapsed:?}");
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["submitted"], 2);
}

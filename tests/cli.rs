use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against an empty config home so user settings never leak in.
fn mathpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mathpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn help_prints_usage() {
    let home = TempDir::new().unwrap();
    mathpad_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Math practice whiteboard with an AI tutor",
        ))
        .stdout(predicate::str::contains("replay"));
}

#[test]
fn version_includes_git_hash() {
    let home = TempDir::new().unwrap();
    mathpad_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^mathpad \d+\.\d+\.\d+ \(.+\)").unwrap());
}

#[test]
fn subjects_marks_inactive_ones() {
    let home = TempDir::new().unwrap();
    mathpad_cmd(&home)
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("  Maths\n"))
        .stdout(predicate::str::contains("Physics (coming soon)"))
        .stdout(predicate::str::contains("Classes: 8, 9, 10"));
}

#[test]
fn question_requires_api_key() {
    let home = TempDir::new().unwrap();
    mathpad_cmd(&home)
        .args(["question", "--subject", "Maths", "--class", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn question_rejects_inactive_subject() {
    let home = TempDir::new().unwrap();
    mathpad_cmd(&home)
        .args(["question", "--subject", "Physics", "--class", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Physics is coming soon"));
}

#[test]
fn api_key_variable_is_configurable() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[tutor]\napi_key_env = \"MY_TUTOR_KEY\"\n").unwrap();

    mathpad_cmd(&home)
        .env_remove("MY_TUTOR_KEY")
        .arg("--config")
        .arg(&config)
        .args(["hint", "--question", "Solve 2x = 4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MY_TUTOR_KEY"));
}

#[test]
fn replay_writes_png() {
    let home = TempDir::new().unwrap();
    let events = home.path().join("events.json");
    let output = home.path().join("board.png");
    std::fs::write(
        &events,
        r#"[
            {"type": "touch_start", "x": 10.0, "y": 10.0},
            {"type": "touch_move", "x": 100.0, "y": 120.0},
            {"type": "touch_end"},
            {"type": "set_mode", "mode": "erase"},
            {"type": "touch_start", "x": 500.0, "y": 500.0},
            {"type": "touch_end"},
            {"type": "set_mode", "mode": "draw"},
            {"type": "touch_start", "x": 200.0, "y": 50.0},
            {"type": "touch_cancel"}
        ]"#,
    )
    .unwrap();

    mathpad_cmd(&home)
        .arg("replay")
        .arg(&events)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 800x600 board"));

    let png = std::fs::read(&output).unwrap();
    assert_eq!(&png[..4], b"\x89PNG");
}

#[test]
fn replay_saves_timestamped_png_into_directory() {
    let home = TempDir::new().unwrap();
    let events = home.path().join("events.json");
    let save_dir = home.path().join("captures");
    std::fs::write(
        &events,
        r#"[{"type": "touch_start", "x": 5.0, "y": 5.0}, {"type": "touch_end"}]"#,
    )
    .unwrap();

    mathpad_cmd(&home)
        .arg("replay")
        .arg(&events)
        .arg("--save-dir")
        .arg(&save_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("solution_"));

    let saved: Vec<_> = std::fs::read_dir(&save_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].extension().unwrap(), "png");
    assert_eq!(&std::fs::read(&saved[0]).unwrap()[..4], b"\x89PNG");
}

#[test]
fn network_failure_does_not_print_api_key() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("offline.toml");
    std::fs::write(
        &config,
        "[tutor]\nbase_url = \"http://127.0.0.1:9/v1beta\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    mathpad_cmd(&home)
        .env("GEMINI_API_KEY", "AIzaCliSecret-42")
        .arg("--config")
        .arg(&config)
        .args(["hint", "--question", "Solve 2x = 4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate hint"))
        .stderr(predicate::str::contains("AIzaCliSecret-42").not());
}

#[test]
fn replay_rejects_malformed_events() {
    let home = TempDir::new().unwrap();
    let events = home.path().join("events.json");
    std::fs::write(&events, r#"[{"type": "pinch"}]"#).unwrap();

    mathpad_cmd(&home)
        .arg("replay")
        .arg(&events)
        .args(["--output", "unused.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse events"));
}

#[test]
fn schema_describes_sections() {
    let home = TempDir::new().unwrap();
    mathpad_cmd(&home)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"drawing\""))
        .stdout(predicate::str::contains("\"tutor\""));
}

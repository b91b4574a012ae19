//! Runs the `imgfetch` binary for exit codes and fatal diagnostics.
//!
//! Only URLs rejected before any request are used, so no network is needed.

use assert_cmd::Command;
use predicates::str::{contains, is_empty, starts_with};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// `imgfetch` with XDG dirs pointed into `home`, run from `cwd`.
fn cmd(home: &TempDir, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("imgfetch").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_STATE_HOME", home.path().join("state"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_target_dir_is_fatal() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    let list = work.path().join("urls.txt");
    fs::write(&list, "http://example.com/a.png\n").unwrap();
    let missing = work.path().join("no-such-dir");

    cmd(&home, work.path())
        .arg(&list)
        .arg("-p")
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(format!(
            "Error: path '{}' does not exist\n",
            missing.display()
        ));
}

#[test]
fn missing_url_file_is_fatal() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();

    cmd(&home, work.path())
        .arg("nope.txt")
        .assert()
        .code(1)
        .stderr("Error: file 'nope.txt' does not exist\n");
}

#[test]
fn rejected_urls_are_reported_and_run_succeeds() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let list = work.path().join("urls.txt");
    fs::write(&list, "notaurl\r\nftp://x.com/a.jpg\nhttps://x.com/path/\n").unwrap();

    cmd(&home, work.path())
        .arg(&list)
        .arg("--path")
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(
            "Skipping URL notaurl: malformed URL\n\
             Skipping URL ftp://x.com/a.jpg: invalid protocol (only HTTP and HTTPS allowed)\n\
             Skipping URL https://x.com/path/: invalid filename\n",
        );
    assert_eq!(fs::read_dir(out_dir.path()).unwrap().count(), 0);
}

#[test]
fn non_utf8_line_does_not_stop_the_run() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let list = work.path().join("urls.txt");
    fs::write(&list, b"notaurl\nhttp://x.com/caf\xe9/\nftp://x.com/a.jpg\n").unwrap();

    cmd(&home, work.path())
        .arg(&list)
        .arg("--path")
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(
            "Skipping URL notaurl: malformed URL\n\
             Skipping URL http://x.com/caf\u{FFFD}/: invalid filename\n\
             Skipping URL ftp://x.com/a.jpg: invalid protocol (only HTTP and HTTPS allowed)\n",
        );
}

#[test]
fn default_config_is_created() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    let list = work.path().join("urls.txt");
    fs::write(&list, "").unwrap();

    cmd(&home, work.path()).arg(&list).assert().success();

    let cfg = home.path().join("config").join("imgfetch").join("config.toml");
    let text = fs::read_to_string(cfg).unwrap();
    assert!(text.contains("[fetch]"));
}

#[test]
fn invalid_config_is_fatal() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    let list = work.path().join("urls.txt");
    fs::write(&list, "notaurl\n").unwrap();
    let cfg = work.path().join("bad.toml");
    fs::write(&cfg, "[fetch\n").unwrap();

    cmd(&home, work.path())
        .arg(&list)
        .arg("--config")
        .arg(&cfg)
        .assert()
        .code(1)
        .stderr(starts_with("imgfetch error: invalid config"));
}

#[test]
fn force_and_rename_together_is_a_usage_error() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();

    cmd(&home, work.path())
        .args(["urls.txt", "-f", "-r"])
        .assert()
        .code(2)
        .stderr(contains("cannot be used with"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn treecat(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("treecat"));
    cmd.arg(root).arg("--no-color");
    cmd
}

#[test]
fn concatenates_matching_files_with_delimiters() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello");
    write_file(&temp.path().join("b.log"), "nope");
    write_file(&temp.path().join("sub/c.txt"), "");

    let assert = treecat(temp.path()).write_stdin("*.txt\n").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("--- START: a.txt ---"));
    assert!(stdout.contains("hello"));
    assert!(stdout.contains("--- END: a.txt ---"));
    assert!(stdout.contains("--- START: sub/c.txt ---"));
    assert!(stdout.contains("[EMPTY FILE]"));
    assert!(!stdout.contains("b.log"));
}

#[test]
fn output_file_holds_exact_blob() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello");
    let out = temp.path().join("out.txt");

    treecat(temp.path())
        .arg("--output")
        .arg(&out)
        .write_stdin("*.txt\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Success!"));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "\n--- START: a.txt ---\nhello\n--- END: a.txt ---\n"
    );
}

#[test]
fn fixed_exclusions_prune_whole_directories() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("keep.txt"), "yes");
    write_file(&temp.path().join("node_modules/lost.txt"), "no");
    write_file(&temp.path().join("deep/.git/config.txt"), "no");

    let assert = treecat(temp.path()).write_stdin("*.txt\n").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("--- START: keep.txt ---"));
    assert!(!stdout.contains("lost.txt"));
    assert!(!stdout.contains("config.txt"));
}

#[test]
fn exclude_token_prunes_matching_directory() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "kept");
    write_file(&temp.path().join("sub/c.txt"), "pruned");

    let assert = treecat(temp.path())
        .arg("--exclude")
        .arg("sub")
        .write_stdin("*.txt\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("--- START: a.txt ---"));
    assert!(!stdout.contains("c.txt"));
}

#[test]
fn exclude_bare_name_hits_everywhere() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("notes.txt"), "one");
    write_file(&temp.path().join("deep/nested/notes.txt"), "two");
    write_file(&temp.path().join("other.txt"), "kept");

    let assert = treecat(temp.path())
        .arg("--exclude")
        .arg("notes.txt")
        .write_stdin("*.txt\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("--- START: other.txt ---"));
    assert!(!stdout.contains("notes.txt"));
}

#[test]
fn exclude_relative_path_hits_exact_file_only() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("keep.txt"), "root copy");
    write_file(&temp.path().join("a/keep.txt"), "excluded copy");

    let assert = treecat(temp.path())
        .arg("--exclude")
        .arg("a/keep.txt")
        .write_stdin("*.txt\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("--- START: keep.txt ---"));
    assert!(!stdout.contains("--- START: a/keep.txt ---"));
}

#[test]
fn output_flag_wins_over_copy() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello");
    let out = temp.path().join("out.txt");

    // Succeeds even on headless machines: with --output selected the
    // clipboard is never initialized.
    treecat(temp.path())
        .arg("--output")
        .arg(&out)
        .arg("--copy")
        .write_stdin("*.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(fs::read_to_string(&out).unwrap().contains("hello"));
}

#[test]
fn empty_pattern_input_is_an_error() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello");

    treecat(temp.path())
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pattern list cannot be empty"));
}

#[test]
fn closed_stdin_cancels_cleanly() {
    let temp = tempdir().unwrap();

    treecat(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Operation cancelled by user."));
}

#[test]
fn invalid_glob_pattern_is_reported() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello");

    treecat(temp.path())
        .write_stdin("*[\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid file pattern"));
}

#[test]
fn no_matches_reports_and_exits_clean() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.log"), "nope");

    treecat(temp.path())
        .write_stdin("*.rs\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No files matching"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_warns_and_scan_continues() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    write_file(&temp.path().join("good.txt"), "kept");
    let locked = temp.path().join("locked.txt");
    write_file(&locked, "secret");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // File modes don't bind root; nothing to observe in that case
    if fs::read(&locked).is_ok() {
        return;
    }

    let assert = treecat(temp.path()).write_stdin("*.txt\n").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert!(stdout.contains("--- START: good.txt ---"));
    assert!(!stdout.contains("--- START: locked.txt ---"));
    assert!(stderr.contains("Error reading file"));
}

#[test]
fn quiet_suppresses_progress_lines() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hello");

    treecat(temp.path())
        .arg("--quiet")
        .write_stdin("*.txt\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Added:").not())
        .stderr(predicate::str::contains("Starting search").not());
}

#[test]
fn whitespace_only_file_renders_placeholder() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("blank.txt"), "   \n\t\n");
    let out = temp.path().join("out.txt");

    treecat(temp.path())
        .arg("--output")
        .arg(&out)
        .write_stdin("*.txt\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "\n--- START: blank.txt ---\n[EMPTY FILE]\n--- END: blank.txt ---\n"
    );
}

#[test]
fn comma_separated_patterns_are_or_ed() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.md"), "md");
    write_file(&temp.path().join("b.toml"), "toml");
    write_file(&temp.path().join("c.rs"), "rs");

    let assert = treecat(temp.path())
        .write_stdin("*.md, *.toml\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("--- START: a.md ---"));
    assert!(stdout.contains("--- START: b.toml ---"));
    assert!(!stdout.contains("c.rs"));
}

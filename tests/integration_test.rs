// tests/integration_test.rs
use assert_cmd::Command;
use predicates::prelude::*;

const DEFAULT_CONFIG: &str = "tests/fixtures/default.toml";

fn relkit() -> Command {
    let mut cmd = Command::cargo_bin("relkit").expect("binary should build");
    cmd.args(["--config", DEFAULT_CONFIG]);
    cmd
}

#[test]
fn test_relkit_help() {
    Command::cargo_bin("relkit")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("changelog"))
        .stdout(predicate::str::contains("bump"))
        .stdout(predicate::str::contains("level"));
}

#[test]
fn test_changelog_end_to_end() {
    relkit()
        .arg("changelog")
        .write_stdin("abc123\tauthor\tfix: correct off-by-one\n")
        .assert()
        .success()
        .stdout("### Bug Fixes\n\n* correct off-by-one (abc123)\n\n");
}

#[test]
fn test_changelog_groups_features() {
    let input = "\
1111\tann\tfeat: add search
2222\tbob\tfix(ui): align buttons
3333\tann\tfeat(api): paginate results
4444\tbob\tMerge pull request #12
";
    relkit()
        .arg("changelog")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            "### Features\n\n* add search (1111)\n* paginate results (3333)\n\n\
             ### Bug Fixes\n\n* align buttons (2222)\n\n",
        );
}

#[test]
fn test_changelog_skips_short_rows_with_warning() {
    relkit()
        .arg("changelog")
        .write_stdin("oops\tfeat: lost\nabc\tme\tdocs: usage\n")
        .assert()
        .success()
        .stdout("### Documentation\n\n* usage (abc)\n\n")
        .stderr(predicate::str::contains("Malformed row 1"));
}

#[test]
fn test_changelog_strict_fails_on_short_rows() {
    relkit()
        .args(["--strict", "changelog"])
        .write_stdin("oops\tfeat: lost\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Malformed row 1"));
}

#[test]
fn test_level_end_to_end() {
    relkit()
        .arg("level")
        .write_stdin("abc123\tauthor\tfix: correct off-by-one\n")
        .assert()
        .success()
        .stdout("patch\n");
}

#[test]
fn test_level_perf_wins() {
    relkit()
        .arg("level")
        .write_stdin("a\tme\tfeat: x\nb\tme\tperf: y\nc\tme\tfix: z\n")
        .assert()
        .success()
        .stdout("major\n");
}

#[test]
fn test_level_revert_is_minor() {
    relkit()
        .arg("level")
        .write_stdin("a\tme\trevert: undo x\nb\tme\tchore: y\n")
        .assert()
        .success()
        .stdout("minor\n");
}

#[test]
fn test_level_prints_nothing_without_recognized_commits() {
    relkit()
        .arg("level")
        .write_stdin("a\tme\tInitial commit\nb\tme\ttest: more cases\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_bump_default_patch() {
    relkit()
        .arg("bump")
        .write_stdin("v1.2.3-beta\n")
        .assert()
        .success()
        .stdout("1.2.4\n");
}

#[test]
fn test_bump_levels() {
    for (level, expected) in [("patch", "1.2.4\n"), ("minor", "1.3.0\n"), ("major", "2.0.0\n")] {
        relkit()
            .args(["bump", level])
            .write_stdin("1.2.3\n")
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_bump_streams_each_matching_line() {
    relkit()
        .args(["bump", "minor"])
        .write_stdin("name = \"demo\"\nversion = \"0.4.9\"\nrelease v2.0.0\n")
        .assert()
        .success()
        .stdout("0.5.0\n2.1.0\n");
}

#[test]
fn test_bump_invalid_argument() {
    relkit()
        .args(["bump", "huge"])
        .write_stdin("1.2.3\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid value 'huge'"));
}

#[test]
fn test_bump_strict_fails_on_missing_version() {
    relkit()
        .args(["--strict", "bump"])
        .write_stdin("1.0.0\nno version\n")
        .assert()
        .code(1)
        .stdout("1.0.1\n")
        .stderr(predicate::str::contains("No version found on line 2"));
}

#[test]
fn test_fixture_config_changes_layout_and_titles() {
    Command::cargo_bin("relkit")
        .unwrap()
        .args(["--config", "tests/fixtures/relkit.toml", "changelog"])
        .write_stdin("9f9f|feat: pipes work\n")
        .assert()
        .success()
        .stdout("### New Features\n\n* pipes work (9f9f)\n\n");
}

#[test]
fn test_breaking_marker_commits_end_to_end() {
    let input = "a1\tme\tfeat!: drop v1 api\na2\tme\tfix(core)!: rework\n";
    relkit()
        .arg("changelog")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("### Features\n\n* drop v1 api (a1)\n\n### Bug Fixes\n\n* rework (a2)\n\n");
    relkit()
        .arg("level")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("minor\n");
}

#[test]
fn test_bump_version_at_numeric_limit_is_skipped() {
    relkit()
        .args(["bump", "major"])
        .write_stdin("18446744073709551615.0.0\n1.0.0\n")
        .assert()
        .success()
        .stdout("2.0.0\n")
        .stderr(predicate::str::contains("cannot be bumped"));
}

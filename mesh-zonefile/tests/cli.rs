use std::path::PathBuf;
use assert_cmd::Command;
use predicates::prelude::*;

fn template() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates/mesh.zone.hbs")
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("mesh-zonefile").unwrap();
    cmd.env_remove("MESH_ZONEFILE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_renders_sample_template() {
    cmd()
        .arg(template())
        .write_stdin(
            r#"{"lastUpdate":1700000000,
                "members":{"node1":{"addr":"10.0.0.1","st":"alive"},"node2":{"addr":"10.0.0.2"}},
                "services":{"web":{"nodes":["node1","node2"],"port":80}}}"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("1700000000\t; serial"))
        .stdout(predicate::str::contains("node1\tIN\tA\t10.0.0.1\n"))
        .stdout(predicate::str::contains("all\tIN\tA\t 10.0.0.1 10.0.0.2\n"))
        .stdout(predicate::str::contains("web\tIN\tCNAME\t node1 node2\n"))
        .stdout(predicate::str::contains("web\tIN\tTXT\t\"port=80\""))
        .stdout(predicate::str::ends_with("\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_stdin_exits_2() {
    cmd()
        .arg(template())
        .write_stdin("")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no data"));
}

#[test]
fn test_two_args_exits_1() {
    cmd()
        .arg(template())
        .arg("extra")
        .write_stdin("{}")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("usage"));
}

#[test]
fn test_no_args_exits_1() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("template file"));
}

#[test]
fn test_missing_template_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .arg(dir.path().join("missing.hbs"))
        .write_stdin("{}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read template"));
}

#[test]
fn test_malformed_json_fails() {
    cmd()
        .arg(template())
        .write_stdin("{\"members\":")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed member list"));
}

#[test]
fn test_config_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("zonefile.toml");
    std::fs::write(&config, "[render]\ntrailing_newline = false\n\n[records]\naggregate_name = \"mesh\"\n").unwrap();
    let tpl = dir.path().join("a.hbs");
    std::fs::write(&tpl, "{{#each a_records}}{{name}}={{ip}};{{/each}}").unwrap();

    cmd()
        .env("MESH_ZONEFILE_CONFIG", &config)
        .arg(&tpl)
        .write_stdin(r#"{"members":{"n1":{"addr":"10.0.0.1"}}}"#)
        .assert()
        .success()
        .stdout("n1=10.0.0.1;mesh= 10.0.0.1;");
}

#[test]
fn test_bad_config_fails() {
    cmd()
        .env("MESH_ZONEFILE_CONFIG", "/nonexistent/zonefile.toml")
        .arg(template())
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_null_members_renders_empty_zone() {
    let dir = tempfile::tempdir().unwrap();
    let tpl = dir.path().join("a.hbs");
    std::fs::write(&tpl, "{{serial}}:{{#each a_records}}{{name}};{{/each}}").unwrap();

    cmd()
        .arg(&tpl)
        .write_stdin(r#"{"lastUpdate":9,"members":null,"services":null}"#)
        .assert()
        .success()
        .stdout("9:\n");
}

//! Tests for input validation errors and their suggestions.

use assert_cmd::Command;
use predicates::prelude::*;

fn devwf() -> Command {
    let mut cmd = Command::cargo_bin("devwf").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn unknown_template_lists_the_registry() {
    devwf()
        .args(["create-project", "rails-on-lambda", "acme-app"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown template"))
        .stderr(predicate::str::contains("python-fastapi-postgres"))
        .stderr(predicate::str::contains("nodejs-supabase"))
        .stderr(predicate::str::contains("nodejs-mongodb"))
        .stderr(predicate::str::contains("react-native"));
}

#[test]
fn unknown_template_wins_even_with_a_valid_name() {
    devwf()
        .args(["create-project", "not-a-template", "valid-name"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown template"));
}

#[test]
fn uppercase_project_name_is_rejected() {
    devwf()
        .args(["create-project", "nodejs-supabase", "MyApp"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("lowercase"));
}

#[test]
fn underscore_in_project_name_is_rejected() {
    devwf()
        .args(["create-project", "nodejs-supabase", "my_app"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn missing_arguments_show_usage_and_templates() {
    devwf()
        .args(["create-project", "nodejs-supabase"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Available templates"))
        .stderr(predicate::str::contains("python-fastapi-postgres"))
        .stderr(predicate::str::contains("react-native"));
}

#[test]
fn extra_arguments_are_rejected() {
    devwf()
        .args(["create-project", "nodejs-supabase", "acme-app", "surplus"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Available templates"));
}

#[test]
fn missing_explicit_config_file_exits_with_config_code() {
    devwf()
        .args([
            "create-project",
            "nodejs-supabase",
            "acme-app",
            "--config",
            "/definitely/not/here/devwf.toml",
        ])
        .assert()
        .failure()
        .code(4);
}

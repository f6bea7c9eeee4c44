//! Tests for CLI command handlers.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::cli::{Cli, Command, InspectArgs, MilestonesArgs, ValidateArgs};

use super::run_command;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn cli(command: Command) -> Cli {
    Cli { command, verbose: false, quiet: true }
}

#[test]
fn test_inspect_accepts_bare_member_array() {
    let team = write_temp(
        r#"[
            {
                "id": "1",
                "name": "Ada",
                "email": "ada@example.com",
                "createdAt": "2024-01-15T00:00:00Z",
                "teamSize": 1
            }
        ]"#,
    );

    let args = InspectArgs {
        team: team.path().to_path_buf(),
        expand: true,
        check_rollups: true,
    };
    assert!(run_command(cli(Command::Inspect(args))).is_ok());
}

#[test]
fn test_inspect_rejects_duplicate_ids() {
    let team = write_temp(
        r#"[
            {"id": "1", "name": "A", "email": "a@x.com", "createdAt": "2024-01-15T00:00:00Z"},
            {"id": "1", "name": "B", "email": "b@x.com", "createdAt": "2024-01-15T00:00:00Z"}
        ]"#,
    );

    let args = InspectArgs {
        team: team.path().to_path_buf(),
        expand: false,
        check_rollups: false,
    };
    let err = run_command(cli(Command::Inspect(args))).unwrap_err();
    assert!(err.contains("Invalid hierarchy"));
}

#[test]
fn test_inspect_missing_file_fails() {
    let args = InspectArgs {
        team: "/nonexistent/team.json".into(),
        expand: false,
        check_rollups: false,
    };
    assert!(run_command(cli(Command::Inspect(args))).is_err());
}

#[test]
fn test_milestones_with_default_schedule() {
    let aggregates = write_temp(r#"{ "userId": "u1", "depositeInLabel1": 500.0 }"#);

    let args = MilestonesArgs { aggregates: aggregates.path().to_path_buf(), schedule: None };
    assert!(run_command(cli(Command::Milestones(args))).is_ok());
}

#[test]
fn test_milestones_with_custom_schedule() {
    let aggregates = write_temp(r#"{ "depositeInLabel2": 2000.0 }"#);
    let schedule = write_temp(
        "\
- { level: 1, target_business: 100.0, reward: 1.0 }
- { level: 2, target_business: 200.0, reward: 2.0 }
- { level: 3, target_business: 300.0, reward: 3.0 }
- { level: 4, target_business: 400.0, reward: 4.0 }
- { level: 5, target_business: 500.0, reward: 5.0 }
",
    );

    let args = MilestonesArgs {
        aggregates: aggregates.path().to_path_buf(),
        schedule: Some(schedule.path().to_path_buf()),
    };
    assert!(run_command(cli(Command::Milestones(args))).is_ok());
}

#[test]
fn test_validate_accepts_production_shape() {
    let schedule = write_temp(
        "\
- { level: 1, target_business: 1000.0, reward: 10.0 }
- { level: 2, target_business: 10000.0, reward: 20.0 }
- { level: 3, target_business: 20000.0, reward: 20.0 }
- { level: 4, target_business: 30000.0, reward: 20.0 }
- { level: 5, target_business: 40000.0, reward: 20.0 }
",
    );

    let args = ValidateArgs { schedule: schedule.path().to_path_buf() };
    assert!(run_command(cli(Command::Validate(args))).is_ok());
}

#[test]
fn test_validate_rejects_bad_target() {
    let schedule = write_temp("- { level: 1, target_business: 0.0, reward: 10.0 }");

    let args = ValidateArgs { schedule: schedule.path().to_path_buf() };
    let err = run_command(cli(Command::Validate(args))).unwrap_err();
    assert!(err.contains("Invalid schedule"));
}

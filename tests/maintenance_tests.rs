mod common;

use common::{dbk, init_env, init_with_contacts, setup_test_env, temp_out};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_database() {
    let env = setup_test_env("maint_init");
    init_env(&env);
    assert!(Path::new(&env.db).exists());
}

#[test]
fn test_db_info_check_vacuum() {
    let env = setup_test_env("maint_db");
    init_with_contacts(&env);

    dbk(&env)
        .args(["db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Total contacts:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_log_records_mutations() {
    let env = setup_test_env("maint_log");
    init_with_contacts(&env);
    dbk(&env).args(["contact", "del", "2", "--yes"]).assert().success();

    dbk(&env)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("Database initialized"))
        .stdout(contains("Added contact 'Ada Lovelace'"))
        .stdout(contains("Deleted contact 'Alan Turing'"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let env = setup_test_env("maint_backup");
    init_with_contacts(&env);

    let plain = temp_out(&env, "backup.sqlite");
    dbk(&env)
        .args(["backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    let zipped = temp_out(&env, "archive.sqlite");
    dbk(&env)
        .args(["backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(Path::new(&temp_out(&env, "archive.zip")).exists());
    assert!(!Path::new(&zipped).exists());
}

#[test]
fn test_backup_overwrite_declined() {
    let env = setup_test_env("maint_backup_declined");
    init_env(&env);

    let dest = temp_out(&env, "backup.sqlite");
    fs::write(&dest, "old").unwrap();
    dbk(&env)
        .args(["backup", "--file", &dest])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
}

#[test]
fn test_config_check_reports_missing_fields() {
    let env = setup_test_env("maint_config_check");
    let conf_dir = env.home.join(".deskbook");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("deskbook.conf"), "database: /tmp/x.sqlite\n").unwrap();

    dbk(&env)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field 'history_limit'"))
        .stdout(contains("Missing field 'weather'"));
}

#[test]
fn test_config_print_shows_overrides() {
    let env = setup_test_env("maint_config_print");

    dbk(&env)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("history_limit: 10"))
        .stdout(contains(env.db.as_str()));
}

#[test]
fn test_unknown_contact_delete_fails() {
    let env = setup_test_env("maint_unknown_delete");
    init_env(&env);

    dbk(&env)
        .args(["contact", "del", "9", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Contact #9 not found"))
        .stderr(contains("Error:"));
}

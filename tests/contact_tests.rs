mod common;

use common::{dbk, init_env, init_with_contacts, setup_test_env, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn test_add_and_list_contacts() {
    let env = setup_test_env("contact_add_list");
    init_with_contacts(&env);

    dbk(&env)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("Alan Turing"))
        .stdout(contains("Grace Hopper"))
        .stdout(contains("N/A"));
}

#[test]
fn test_empty_list_message() {
    let env = setup_test_env("contact_empty");
    init_env(&env);

    dbk(&env)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(contains("No contacts found."));
}

#[test]
fn test_blank_name_is_rejected() {
    let env = setup_test_env("contact_blank_name");
    init_env(&env);

    dbk(&env)
        .args(["contact", "add", "--name", "   ", "--phone", "123"])
        .assert()
        .failure()
        .stderr(contains("Name cannot be empty"));

    dbk(&env)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(contains("No contacts found."));
}

#[test]
fn test_search_matches_any_field_case_insensitively() {
    let env = setup_test_env("contact_search");
    init_with_contacts(&env);

    dbk(&env)
        .args(["contact", "list", "--search", "ALAN@"])
        .assert()
        .success()
        .stdout(contains("Alan Turing"))
        .stdout(contains("Ada Lovelace").not());

    dbk(&env)
        .args(["contact", "list", "--search", "555-01"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("Grace Hopper"))
        .stdout(contains("Alan Turing").not());
}

#[test]
fn test_edit_keeps_id_and_unchanged_fields() {
    let env = setup_test_env("contact_edit");
    init_with_contacts(&env);

    dbk(&env)
        .args(["contact", "edit", "2", "--phone", "555-0142"])
        .assert()
        .success()
        .stdout(contains("Contact #2 updated: Alan Turing"));

    dbk(&env)
        .args(["contact", "list", "--search", "0142"])
        .assert()
        .success()
        .stdout(contains("alan@example.com"));

    dbk(&env)
        .args(["contact", "edit", "2", "--name", ""])
        .assert()
        .failure()
        .stderr(contains("Name cannot be empty"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let env = setup_test_env("contact_edit_unknown");
    init_env(&env);

    dbk(&env)
        .args(["contact", "edit", "42", "--name", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("Contact #42 not found"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let env = setup_test_env("contact_delete");
    init_with_contacts(&env);

    dbk(&env)
        .args(["contact", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."));

    dbk(&env)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"));

    dbk(&env)
        .args(["contact", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Contact #1 deleted"));

    dbk(&env)
        .args(["contact", "del", "3", "--yes"])
        .assert()
        .success();

    dbk(&env)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace").not())
        .stdout(contains("Grace Hopper").not())
        .stdout(contains("Alan Turing"));
}

#[test]
fn test_export_json_and_csv() {
    let env = setup_test_env("contact_export");
    init_with_contacts(&env);

    let json_out = temp_out(&env, "contacts.json");
    dbk(&env)
        .args(["contact", "export", "--format", "json", "--file", &json_out])
        .assert()
        .success();

    let v: Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[1]["name"], "Alan Turing");
    assert_eq!(arr[1]["phone"], Value::Null);

    let csv_out = temp_out(&env, "contacts.csv");
    dbk(&env)
        .args(["contact", "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let text = fs::read_to_string(&csv_out).unwrap();
    assert!(text.starts_with("id,name,phone,email"));
    assert!(text.contains("3,Grace Hopper,555-0199,"));
}

#[test]
fn test_export_does_not_overwrite_without_consent() {
    let env = setup_test_env("contact_export_overwrite");
    init_with_contacts(&env);

    let out = temp_out(&env, "contacts.csv");
    fs::write(&out, "keep").unwrap();

    dbk(&env)
        .args(["contact", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep");

    dbk(&env)
        .args(["contact", "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Ada Lovelace"));
}

mod common;

use common::{dbk, setup_test_env};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_single_grade_stats_line() {
    let env = setup_test_env("grades_single");

    dbk(&env)
        .arg("grades")
        .write_stdin("add Alice | Math | 95\nquit\n")
        .assert()
        .success()
        .stdout(contains("Math - Alice: 95"))
        .stdout(contains(
            "Total Grades: 1 | Average: 95.0 | Highest: 95 | Lowest: 95",
        ));
}

#[test]
fn test_average_and_extremes() {
    let env = setup_test_env("grades_average");

    dbk(&env)
        .arg("grades")
        .write_stdin("add A | Math | 90\nadd B | History | 71\nadd C | english | 60\nstats\n")
        .assert()
        .success()
        .stdout(contains("English - C: 60"))
        .stdout(contains(
            "Total Grades: 3 | Average: 73.7 | Highest: 90 | Lowest: 60",
        ));
}

#[test]
fn test_invalid_input_does_not_change_book() {
    let env = setup_test_env("grades_invalid");

    dbk(&env)
        .arg("grades")
        .write_stdin("add Bob | Math | 150\nadd Bob | | 50\nstats\n")
        .assert()
        .success()
        .stdout(contains("Grade must be between 0 and 100"))
        .stdout(contains("Please select a subject"))
        .stdout(contains("No grades recorded"))
        .stdout(contains("Total Grades").not());
}

#[test]
fn test_script_file_with_confirmed_delete() {
    let env = setup_test_env("grades_script");
    let script = env.data_dir.join("session.txt");
    fs::write(
        &script,
        "add Ann | Science | 80\nadd Ben | Science | 40\ndel 2\ny\nlist\nquit\n",
    )
    .unwrap();

    dbk(&env)
        .args(["grades", "--script", &script.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Grade #2 deleted."))
        .stdout(contains(
            "Total Grades: 1 | Average: 80.0 | Highest: 80 | Lowest: 80",
        ));
}

#[test]
fn test_missing_script_fails() {
    let env = setup_test_env("grades_missing_script");

    dbk(&env)
        .args(["grades", "--script", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

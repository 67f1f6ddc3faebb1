#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Per-test sandbox: database, weather data dir and a fake HOME holding the
/// config directory, all under the system temp dir.
pub struct TestEnv {
    pub db: String,
    pub data_dir: PathBuf,
    pub home: PathBuf,
}

/// Create a fresh sandbox for `name`, removing leftovers from earlier runs.
pub fn setup_test_env(name: &str) -> TestEnv {
    let mut root: PathBuf = env::temp_dir();
    root.push(format!("{}_deskbook", name));
    fs::remove_dir_all(&root).ok();

    let data_dir = root.join("data");
    let home = root.join("home");
    fs::create_dir_all(&data_dir).expect("create data dir");
    fs::create_dir_all(&home).expect("create home");

    TestEnv {
        db: root.join("deskbook.sqlite").to_string_lossy().to_string(),
        data_dir,
        home,
    }
}

/// Binary with the sandbox paths and no weather credentials.
pub fn dbk(env: &TestEnv) -> Command {
    let mut cmd = cargo_bin_cmd!("deskbook");
    cmd.env("HOME", &env.home)
        .env("APPDATA", &env.home)
        .env_remove("OPENWEATHER_API_KEY")
        .env_remove("OPENWEATHER_BASE_URL")
        .args([
            "--db",
            &env.db,
            "--data-dir",
            &env.data_dir.to_string_lossy(),
        ]);
    cmd
}

/// Initialize the database in test mode (config file is not written)
pub fn init_env(env: &TestEnv) {
    dbk(env).args(["--test", "init"]).assert().success();
}

/// Init and add a few contacts useful for many tests
pub fn init_with_contacts(env: &TestEnv) {
    init_env(env);
    for args in [
        ["--name", "Ada Lovelace", "--phone", "555-0101", "--email", "ada@example.com"],
        ["--name", "Alan Turing", "--phone", "", "--email", "alan@example.com"],
        ["--name", "Grace Hopper", "--phone", "555-0199", "--email", ""],
    ] {
        dbk(env).args(["contact", "add"]).args(args).assert().success();
    }
}

pub fn temp_out(env: &TestEnv, file: &str) -> String {
    env.data_dir.join(file).to_string_lossy().to_string()
}

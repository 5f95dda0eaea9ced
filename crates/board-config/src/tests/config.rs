use crate::Config;

use googletest::prelude::*;
use serial_test::serial;

fn clear_board_env() {
    for var in [
        "BOARD_CONFIG_DIR",
        "BOARD_SERVER_HOST",
        "BOARD_SERVER_PORT",
        "BOARD_STATIC_DIR",
        "BOARD_STORAGE_PATH",
        "BOARD_REMOTE_ENABLED",
        "BOARD_REMOTE_URL",
        "BOARD_REMOTE_SERVICE_KEY",
        "BOARD_LOG_LEVEL",
        "BOARD_LOG_COLORED",
        "BOARD_LOG_FILE",
    ] {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
#[serial]
fn given_no_config_file_when_loading_then_defaults_apply() {
    clear_board_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("BOARD_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(3333));
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.storage.path.as_str(), eq("data/db.json"));
    assert_that!(config.remote.enabled, eq(false));

    clear_board_env();
}

#[test]
#[serial]
fn given_config_toml_when_loading_then_file_values_apply() {
    clear_board_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[server]
port = 4100

[storage]
path = "state/board.json"
"#,
    )
    .unwrap();
    unsafe { std::env::set_var("BOARD_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(4100));
    assert_that!(config.storage.path.as_str(), eq("state/board.json"));

    clear_board_env();
}

#[test]
#[serial]
fn given_env_overrides_when_loading_then_they_beat_the_file() {
    clear_board_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[server]\nport = 4100\n").unwrap();
    unsafe {
        std::env::set_var("BOARD_CONFIG_DIR", dir.path());
        std::env::set_var("BOARD_SERVER_PORT", "4200");
        std::env::set_var("BOARD_REMOTE_ENABLED", "1");
        std::env::set_var("BOARD_REMOTE_URL", "https://tables.example.co");
        std::env::set_var("BOARD_REMOTE_SERVICE_KEY", "secret");
    }

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(4200));
    assert_that!(config.remote.credentials(), some(anything()));

    clear_board_env();
}

#[test]
#[serial]
fn given_snapshot_path_when_resolving_then_it_lives_under_the_config_dir() {
    clear_board_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("BOARD_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();
    let path = config.snapshot_path().unwrap();

    assert_that!(path.starts_with(dir.path()), eq(true));
    assert_that!(path.ends_with("data/db.json"), eq(true));

    clear_board_env();
}

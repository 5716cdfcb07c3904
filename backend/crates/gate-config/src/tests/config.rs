use crate::tests::{EnvGuard, setup_config_dir, write_config_toml};
use crate::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, Config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.storage.path.as_str(), eq("users.json"));
    assert_that!(config.credentials.min_password_length, eq(6));
    assert_that!(config.logging.colored, eq(true));
    assert_that!(config.logging.file, none());
    assert_that!(
        config.client.server_url.as_str(),
        eq("http://127.0.0.1:8000")
    );
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let temp = setup_config_dir();
    write_config_toml(
        &temp.0,
        r#"
            [server]
            port = 9000

            [storage]
            path = "data/users.json"

            [credentials]
            min_password_length = 10
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.storage.path.as_str(), eq("data/users.json"));
    assert_that!(config.credentials.min_password_length, eq(10));
    // Untouched sections keep their defaults
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.credentials.hash_iterations, eq(3));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let temp = setup_config_dir();
    write_config_toml(&temp.0, "[server]\nport = 9000");
    let _port = EnvGuard::set("GATE_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _host = EnvGuard::set("GATE_SERVER_HOST", "0.0.0.0");
    let _storage = EnvGuard::set("GATE_STORAGE_PATH", "other.json");
    let _min = EnvGuard::set("GATE_MIN_PASSWORD_LENGTH", "12");
    let _memory = EnvGuard::set("GATE_HASH_MEMORY_KIB", "4096");
    let _colored = EnvGuard::set("GATE_LOG_COLORED", "false");
    let _file = EnvGuard::set("GATE_LOG_FILE", "server.log");
    let _url = EnvGuard::set("GATE_CLIENT_SERVER_URL", "https://auth.example.com");
    let _session = EnvGuard::set("GATE_CLIENT_SESSION_DIR", "sessions");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.storage.path.as_str(), eq("other.json"));
    assert_that!(config.credentials.min_password_length, eq(12));
    assert_that!(config.credentials.hash_memory_kib, eq(4096));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file, some(eq("server.log")));
    assert_that!(
        config.client.server_url.as_str(),
        eq("https://auth.example.com")
    );
    assert_that!(config.client.session_dir.as_str(), eq("sessions"));
}

#[test]
#[serial]
fn given_unparseable_numeric_env_var_when_load_then_value_ignored() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("GATE_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

// =========================================================================
// Paths
// =========================================================================

#[test]
#[serial]
fn given_config_dir_env_when_storage_path_then_joined_under_config_dir() {
    // Given
    let temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path().unwrap();

    // Then
    assert_that!(path == temp.0.path().join("users.json"), eq(true));
}

#[test]
#[serial]
fn given_config_dir_env_when_session_dir_then_joined_under_config_dir() {
    // Given
    let temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.session_dir().unwrap();

    // Then
    assert_that!(path == temp.0.path().join("session"), eq(true));
}

#[test]
#[serial]
fn given_log_file_configured_when_log_file_path_then_inside_log_dir() {
    // Given
    let temp = setup_config_dir();
    let _file = EnvGuard::set("GATE_LOG_FILE", "gate.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(path == Some(temp.0.path().join("log").join("gate.log")), eq(true));
}

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.log_file_path().unwrap(), none());
}

#[test]
#[serial]
fn given_no_config_dir_env_when_config_dir_then_dot_gate_under_cwd() {
    // Given
    let _unset = EnvGuard::remove(CONFIG_DIR_ENV);

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    let expected = std::env::current_dir().unwrap().join(CONFIG_DIR_NAME);
    assert_that!(dir == expected, eq(true));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("config");
    let _dir = EnvGuard::set(CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), eq(true));
}

#[test]
#[serial]
fn given_defaults_when_bind_addr_then_host_and_port() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr().as_str(), eq("127.0.0.1:8000"));
}

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let temp = setup_config_dir();
    write_config_toml(&temp.0, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_wrong_type_in_toml_when_load_then_error() {
    // Given
    let temp = setup_config_dir();
    write_config_toml(&temp.0, "[server]\nport = \"eight thousand\"");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

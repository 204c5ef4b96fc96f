use std::fs;

use moviefeed::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("moviefeed/config.toml"));
}

#[test]
fn default_config_fails_validation_without_api_key() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://api.themoviedb.org/3");
    let error = config.validate().expect_err("missing key must fail");
    assert!(matches!(error, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "api = not-a-table").expect("write config");

    let error = Config::load_from(&path).expect_err("parse must fail");
    assert!(matches!(error, ConfigError::ParseError { .. }));
}

/// File loading and the env override live in one test: the override
/// mutates process-wide state, and cargo runs tests concurrently.
#[test]
fn load_from_reads_file_and_env_override() {
    std::env::remove_var("TMDB_API_KEY");
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
base_url = "https://movies.example.com/v3"
api_key = "from-file"
"#,
    )
    .expect("write config");

    let config = Config::load_from(&path).expect("load config");
    assert_eq!(config.api.base_url, "https://movies.example.com/v3");
    assert_eq!(config.api.api_key, "from-file");

    std::env::set_var("TMDB_API_KEY", "from-env");
    let overridden = Config::load_from(&path).expect("load config");
    std::env::remove_var("TMDB_API_KEY");
    assert_eq!(overridden.api.api_key, "from-env");

    // A missing file still works once the env var supplies the key.
    std::env::set_var("TMDB_API_KEY", "from-env");
    let defaulted = Config::load_from(&temp_dir.path().join("absent.toml")).expect("load config");
    std::env::remove_var("TMDB_API_KEY");
    assert_eq!(defaulted.api.api_key, "from-env");
    assert_eq!(defaulted.api.base_url, "https://api.themoviedb.org/3");
}

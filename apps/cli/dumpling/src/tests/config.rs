// Unit tests for config resolution in commands

use crate::commands::load_config;
use crate::error::{DumplingError, EXIT_ERROR};

#[test]
fn given_missing_config_flag_path_when_loaded_then_core_error_names_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("staging.toml");

    let err = load_config(Some(&path)).expect_err("missing --config file must fail");

    assert!(matches!(err, DumplingError::Core { .. }));
    assert_eq!(err.exit_code(), EXIT_ERROR);
    assert!(err.to_string().contains("staging.toml"));
}

#[test]
fn given_existing_config_flag_path_when_loaded_then_values_are_used() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dumpling.toml");
    std::fs::write(&path, "base_url = \"http://127.0.0.1:9000/api/v1\"\n").expect("write");

    let config = load_config(Some(&path)).expect("loads");

    assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v1");
}

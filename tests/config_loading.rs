mod support;

use pcrec::config::{self, AppSettings};
use support::pcrec_env::PcrecEnvGuard;

#[test]
fn first_launch_writes_defaults_under_config_home() {
    let temp = tempfile::tempdir().unwrap();
    let _env = PcrecEnvGuard::set_config_home(temp.path().to_path_buf());

    let settings = config::load_or_default().unwrap();

    assert_eq!(settings, AppSettings::default());
    let written = temp.path().join(".pcrec").join("config.toml");
    assert!(written.is_file());
    let text = std::fs::read_to_string(written).unwrap();
    assert!(text.contains("base_url = \"http://localhost:8000\""));
}

#[test]
fn api_url_env_overrides_stored_value_without_saving() {
    let temp = tempfile::tempdir().unwrap();
    let env = PcrecEnvGuard::set_config_home(temp.path().to_path_buf());
    let mut stored = AppSettings::default();
    stored.api.base_url = "http://stored.example:9000".into();
    let path = temp.path().join(".pcrec").join("config.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    config::save_to_path(&stored, &path).unwrap();
    env.set_api_url("http://override.example:8080/");

    let settings = config::load_or_default().unwrap();

    assert_eq!(settings.api.base_url, "http://override.example:8080");
    assert_eq!(
        config::load_from_path(&path).unwrap().api.base_url,
        "http://stored.example:9000"
    );
}

#[test]
fn invalid_env_url_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let env = PcrecEnvGuard::set_config_home(temp.path().to_path_buf());
    env.set_api_url("ftp://nope");

    let err = config::load_or_default().unwrap_err();

    assert!(matches!(err, config::ConfigError::InvalidBaseUrl { .. }));
}

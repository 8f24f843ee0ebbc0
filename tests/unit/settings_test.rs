use shelfmark::services::settings::StoreSettings;
use shelfmark::types::errors::SettingsError;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");

    let settings = StoreSettings::load(&path).unwrap();
    assert_eq!(settings.base_url, "");
    assert_eq!(settings.api_key, "");
    assert_eq!(settings.table, "bookmarks");
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = StoreSettings {
        base_url: "https://abc.example.co".to_string(),
        api_key: "public-key".to_string(),
        table: "bookmarks".to_string(),
    };
    settings.save(&path).unwrap();

    let loaded = StoreSettings::load(&path).unwrap();
    assert_eq!(loaded.base_url, settings.base_url);
    assert_eq!(loaded.api_key, settings.api_key);
    assert_eq!(loaded.table, settings.table);
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = StoreSettings::load(&path);
    assert!(matches!(err, Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_env_overrides_replace_file_values() {
    let settings = StoreSettings {
        base_url: "https://from-file.example.co".to_string(),
        api_key: "file-key".to_string(),
        table: "bookmarks".to_string(),
    };

    std::env::set_var("SHELFMARK_STORE_URL", "https://from-env.example.co");
    std::env::set_var("SHELFMARK_API_KEY", "env-key");
    let overridden = settings.with_env_overrides();
    std::env::remove_var("SHELFMARK_STORE_URL");
    std::env::remove_var("SHELFMARK_API_KEY");

    assert_eq!(overridden.base_url, "https://from-env.example.co");
    assert_eq!(overridden.api_key, "env-key");
    assert_eq!(overridden.table, "bookmarks");
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"base_url": "https://abc.example.co"}"#).unwrap();

    let settings = StoreSettings::load(&path).unwrap();
    assert_eq!(settings.base_url, "https://abc.example.co");
    assert_eq!(settings.table, "bookmarks");
}

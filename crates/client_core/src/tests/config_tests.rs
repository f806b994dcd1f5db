use super::*;

use std::{
    collections::HashMap,
    env,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("roster_config_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("roster.toml");
    fs::write(&path, contents).expect("write settings");
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_with(
        SettingsFile::Default(Path::new("/nonexistent/roster.toml")),
        no_env,
    );
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.directory_url, DEFAULT_DIRECTORY_URL);
    assert_eq!(settings.id_assignment, IdAssignment::NextAfterMax);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        r#"
directory_url = "http://127.0.0.1:9000/users"
request_timeout_seconds = 5
id_assignment = "count_plus_one"
"#,
    );

    let settings = load_settings_with(SettingsFile::Explicit(&path), no_env);
    assert_eq!(settings.directory_url, "http://127.0.0.1:9000/users");
    assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    assert_eq!(settings.id_assignment, IdAssignment::CountPlusOne);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_file("directory_url = \"http://file.example/users\"\n");
    let vars: HashMap<&str, &str> = HashMap::from([
        ("DIRECTORY_URL", "http://plain.example/users"),
        ("APP__DIRECTORY_URL", "http://app.example/users"),
        ("APP__REQUEST_TIMEOUT_SECONDS", "12"),
        ("APP__ID_ASSIGNMENT", "count_plus_one"),
    ]);

    let settings = load_settings_with(SettingsFile::Explicit(&path), |name| {
        vars.get(name).map(|v| v.to_string())
    });
    assert_eq!(settings.directory_url, "http://app.example/users");
    assert_eq!(settings.request_timeout_seconds, 12);
    assert_eq!(settings.id_assignment, IdAssignment::CountPlusOne);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn invalid_file_and_env_values_are_ignored() {
    let path = temp_settings_file("request_timeout_seconds = \"soon\"\n");
    let vars: HashMap<&str, &str> = HashMap::from([
        ("APP__REQUEST_TIMEOUT_SECONDS", "never"),
        ("APP__ID_ASSIGNMENT", "random"),
    ]);

    let settings = load_settings_with(SettingsFile::Explicit(&path), |name| {
        vars.get(name).map(|v| v.to_string())
    });
    assert_eq!(settings, Settings::default());

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn missing_file_is_reported_as_missing() {
    let mut settings = Settings::default();
    let outcome = apply_file(
        &mut settings,
        SettingsFile::Explicit(Path::new("/nonexistent/custom.toml")),
    );
    assert_eq!(outcome, FileOutcome::Missing);
    assert_eq!(settings, Settings::default());
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    // A directory exists but cannot be read as a file.
    let dir = env::temp_dir();
    let mut settings = Settings::default();

    let outcome = apply_file(&mut settings, SettingsFile::Explicit(&dir));
    assert_eq!(outcome, FileOutcome::Unreadable);
    assert_eq!(settings, Settings::default());

    let loaded = load_settings_with(SettingsFile::Default(&dir), no_env);
    assert_eq!(loaded, Settings::default());
}

#[test]
fn unparsable_file_is_reported() {
    let path = temp_settings_file("directory_url = [\n");
    let mut settings = Settings::default();

    let outcome = apply_file(&mut settings, SettingsFile::Explicit(&path));
    assert_eq!(outcome, FileOutcome::Unparsable);
    assert_eq!(settings, Settings::default());

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn directory_endpoint_requires_http_url() {
    let mut settings = Settings::default();
    assert_eq!(
        settings.directory_endpoint().expect("default url").host_str(),
        Some("jsonplaceholder.typicode.com")
    );

    settings.directory_url = "not a url".into();
    assert!(matches!(
        settings.directory_endpoint(),
        Err(SettingsError::InvalidUrl { .. })
    ));

    settings.directory_url = "ftp://example.com/users".into();
    assert!(matches!(
        settings.directory_endpoint(),
        Err(SettingsError::UnsupportedScheme(_))
    ));
}

#[test]
fn zero_timeout_is_clamped_to_one_second() {
    let settings = Settings {
        request_timeout_seconds: 0,
        ..Settings::default()
    };
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}

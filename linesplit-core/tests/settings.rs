use linesplit_core::settings::{load_settings_file, save_settings_file};
use linesplit_core::{AppSettings, SettingsStore, ThemeChoice};

#[test]
fn defaults_when_no_file_exists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SettingsStore::load_or_default(dir.path().join("settings.json"));
    assert_eq!(store.settings.num_parts, 2);
    assert_eq!(store.settings.theme, ThemeChoice::Dark);
    assert!(store.settings.output_dir.is_none());
}

#[test]
fn update_persists_immediately() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");

    let mut store = SettingsStore::load_or_default(path.clone());
    store.update(|s| {
        s.num_parts = 5;
        s.theme = ThemeChoice::Light;
        s.output_dir = Some(dir.path().to_path_buf());
    });

    let reloaded = SettingsStore::load_or_default(path);
    assert_eq!(reloaded.settings.num_parts, 5);
    assert_eq!(reloaded.settings.theme, ThemeChoice::Light);
    assert_eq!(
        reloaded.settings.output_dir.as_deref(),
        Some(dir.path())
    );
}

#[test]
fn load_normalizes_bad_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    let gone = dir.path().join("removed");

    save_settings_file(
        &path,
        &AppSettings {
            output_dir: Some(gone),
            num_parts: 0,
            theme: ThemeChoice::Light,
        },
    )
    .expect("save");

    let settings = load_settings_file(&path).expect("load");
    assert_eq!(settings.num_parts, 1);
    assert!(settings.output_dir.is_none());
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").expect("write");

    let store = SettingsStore::load_or_default(path);
    assert_eq!(store.settings.num_parts, 2);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.json");

    save_settings_file(&path, &AppSettings::default()).expect("save");
    assert!(path.exists());
}

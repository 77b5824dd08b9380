//! Settings path resolution from `PRJ_ROOT`, `PRJ_CONFIG_HOME` and `--conf`.
//!
//! Environment variables and the config-home override are process-wide, so
//! everything runs as one ordered test in its own binary.

#![allow(unsafe_code)]

use std::fs;
use std::path::Path;

use spinwin::{load_wheel_settings, set_config_home_override, wheel_settings_paths};
use tempfile::TempDir;

fn set_env(name: &str, value: &Path) {
    // SAFETY: this binary holds a single test, so no other thread reads the environment.
    unsafe { std::env::set_var(name, value) };
}

fn write_user_settings(config_home: &Path, body: &str) {
    let dir = config_home.join("spinwin");
    fs::create_dir_all(&dir).expect("create user settings dir");
    fs::write(dir.join("settings.yaml"), body).expect("write user settings");
}

#[test]
fn test_settings_paths_follow_env_then_override() {
    let root = TempDir::new().expect("tempdir");
    let root_path = root.path();
    set_env("PRJ_ROOT", root_path);

    // Relative config home resolves under the project root.
    set_env("PRJ_CONFIG_HOME", Path::new("conf-rel"));
    let (system, user) = wheel_settings_paths();
    assert_eq!(system, root_path.join("packages/conf/spinwin.yaml"));
    assert_eq!(user, root_path.join("conf-rel/spinwin/settings.yaml"));

    // Absolute config home is taken verbatim.
    let elsewhere = TempDir::new().expect("tempdir");
    set_env("PRJ_CONFIG_HOME", elsewhere.path());
    let (_, user) = wheel_settings_paths();
    assert_eq!(user, elsewhere.path().join("spinwin/settings.yaml"));

    // Both layers are read from the resolved locations.
    fs::create_dir_all(root_path.join("packages/conf")).expect("create system dir");
    fs::write(
        root_path.join("packages/conf/spinwin.yaml"),
        "countdown_secs: 8\nseed: 1\n",
    )
    .expect("write system settings");
    write_user_settings(elsewhere.path(), "seed: 2\n");
    let settings = load_wheel_settings();
    assert_eq!(settings.countdown_secs(), 8);
    assert_eq!(settings.seed, Some(2));

    // The --conf override wins over PRJ_CONFIG_HOME and resolves against the root.
    set_config_home_override("pinned");
    let (_, user) = wheel_settings_paths();
    assert_eq!(user, root_path.join("pinned/spinwin/settings.yaml"));

    write_user_settings(&root_path.join("pinned"), "seed: 3\n");
    assert_eq!(load_wheel_settings().seed, Some(3));

    // Later overrides are ignored; the first one stays pinned.
    set_config_home_override("/somewhere/else");
    let (_, user) = wheel_settings_paths();
    assert_eq!(user, root_path.join("pinned/spinwin/settings.yaml"));

    // Empty overrides are no-ops.
    set_config_home_override("");
    assert_eq!(wheel_settings_paths().1, user);
}

//! Wheel settings loader.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/packages/conf/spinwin.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/spinwin/settings.yaml`
//!
//! Merge precedence is user over system, field by field. A sector list is
//! replaced as a whole, never merged element-wise.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

use crate::geometry::{DEFAULT_BASE_ROTATION, SpinGeometry};
use crate::presets::Preset;
use crate::sector::Sector;
use crate::state::{DEFAULT_COUNTDOWN_SECS, WheelState};

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "packages/conf/spinwin.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "spinwin/settings.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";
const DEFAULT_SPIN_DURATION_MS: u64 = 5000;
static CONFIG_HOME_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// Merchant-facing wheel configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WheelSettings {
    /// Built-in sector set used when `sectors` is absent.
    pub preset: Option<Preset>,
    /// Explicit sector list.
    pub sectors: Option<Vec<Sector>>,
    /// Seconds a result stays visible.
    pub countdown_secs: Option<u32>,
    /// Decorative rotation before the target offset, in degrees.
    pub base_rotation: Option<f64>,
    /// Spin animation length.
    pub spin_duration_ms: Option<u64>,
    /// Seed for reproducible draws.
    pub seed: Option<u64>,
}

impl WheelSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            preset: overlay.preset.or(self.preset),
            sectors: overlay.sectors.or(self.sectors),
            countdown_secs: overlay.countdown_secs.or(self.countdown_secs),
            base_rotation: overlay.base_rotation.or(self.base_rotation),
            spin_duration_ms: overlay.spin_duration_ms.or(self.spin_duration_ms),
            seed: overlay.seed.or(self.seed),
        }
    }

    /// Sectors to seed the wheel with.
    #[must_use]
    pub fn resolved_sectors(&self) -> Vec<Sector> {
        self.sectors
            .clone()
            .unwrap_or_else(|| self.preset.unwrap_or_default().sectors())
    }

    /// Result countdown length.
    #[must_use]
    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs.unwrap_or(DEFAULT_COUNTDOWN_SECS)
    }

    /// Rotation constants for the rendering surface.
    #[must_use]
    pub fn geometry(&self) -> SpinGeometry {
        SpinGeometry::with_base_rotation(self.base_rotation.unwrap_or(DEFAULT_BASE_ROTATION))
    }

    /// Spin animation length.
    #[must_use]
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms.unwrap_or(DEFAULT_SPIN_DURATION_MS))
    }

    /// Fresh idle wheel built from these settings.
    #[must_use]
    pub fn to_state(&self) -> WheelState {
        WheelState::new(self.resolved_sectors()).with_countdown(self.countdown_secs())
    }
}

/// Load settings from the default system and user locations.
#[must_use]
pub fn load_wheel_settings() -> WheelSettings {
    let (system_path, user_path) = wheel_settings_paths();
    load_wheel_settings_from_paths(&system_path, &user_path)
}

/// Resolved `(system, user)` settings paths for the current process.
///
/// Reads `PRJ_ROOT` and `PRJ_CONFIG_HOME`; a config home set through
/// [`set_config_home_override`] wins over the environment.
#[must_use]
pub fn wheel_settings_paths() -> (PathBuf, PathBuf) {
    let project_root = env_path("PRJ_ROOT")
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let config_home = CONFIG_HOME_OVERRIDE
        .get()
        .cloned()
        .or_else(|| env_path("PRJ_CONFIG_HOME"));
    let location = SettingsLocation::new(project_root, config_home);
    (location.system_file(), location.user_file())
}

/// Directories the two settings layers are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLocation {
    /// Project root holding `packages/conf/spinwin.yaml`.
    pub project_root: PathBuf,
    /// Directory holding `spinwin/settings.yaml`.
    pub config_home: PathBuf,
}

impl SettingsLocation {
    /// Anchor a config home at `project_root`.
    ///
    /// A relative `config_home` is joined onto the root; `None` means `.config`.
    #[must_use]
    pub fn new(project_root: PathBuf, config_home: Option<PathBuf>) -> Self {
        let config_home = match config_home {
            Some(home) if home.is_absolute() => home,
            Some(home) => project_root.join(home),
            None => project_root.join(DEFAULT_CONFIG_HOME_RELATIVE_PATH),
        };
        Self {
            project_root,
            config_home,
        }
    }

    /// Merchant-wide defaults file.
    #[must_use]
    pub fn system_file(&self) -> PathBuf {
        self.project_root.join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH)
    }

    /// Per-user overrides file.
    #[must_use]
    pub fn user_file(&self) -> PathBuf {
        self.config_home.join(DEFAULT_USER_SETTINGS_RELATIVE_PATH)
    }
}

/// Load and merge two explicit settings files.
#[must_use]
pub fn load_wheel_settings_from_paths(system: &Path, user: &Path) -> WheelSettings {
    load_one(system).merge(load_one(user))
}

fn load_one(path: &Path) -> WheelSettings {
    if !path.exists() {
        log::debug!("no settings file at {}; skipping", path.display());
        return WheelSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            log::warn!(
                "failed to read settings file {}; ignoring: {error}",
                path.display()
            );
            return WheelSettings::default();
        }
    };
    if raw.trim().is_empty() {
        return WheelSettings::default();
    }
    match serde_yaml::from_str::<Option<WheelSettings>>(&raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(error) => {
            log::warn!(
                "failed to parse settings yaml {}; ignoring file: {error}",
                path.display()
            );
            WheelSettings::default()
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Pin the config home for this process (CLI `--conf`).
///
/// Relative paths resolve against the project root. Only the first non-empty
/// value sticks; later, different values are logged and dropped.
pub fn set_config_home_override(path: impl Into<PathBuf>) {
    let path = path.into();
    if path.as_os_str().is_empty() {
        return;
    }
    if let Err(rejected) = CONFIG_HOME_OVERRIDE.set(path)
        && let Some(current) = CONFIG_HOME_OVERRIDE.get()
        && current != &rejected
    {
        log::warn!(
            "config home already pinned to {}; ignoring {}",
            current.display(),
            rejected.display()
        );
    }
}

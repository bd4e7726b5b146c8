//! Configuration: YAML config + env var overrides.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::drag::DragSettings;
use crate::error::GroveError;
use crate::screen::ScreenId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Screen shown at launch
    #[serde(default = "default_start_screen")]
    pub start_screen: ScreenId,

    /// Name used in greetings
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Minimum swipe travel (px) before a gesture navigates
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f32,

    /// Margin (px) around the tree that still counts as "over" it
    #[serde(default = "default_drop_tolerance")]
    pub drop_tolerance_px: f32,

    /// Water added per watering
    #[serde(default = "default_water_step")]
    pub water_step: u32,

    #[serde(default = "default_water_max")]
    pub water_max: u32,

    /// Water level each time the tree screen opens
    #[serde(default = "default_initial_water_level")]
    pub initial_water_level: u32,

    /// Minimum gap between repeated waterings while hovering
    #[serde(default = "default_rewater_interval")]
    pub rewater_interval_ms: u64,

    /// Watering animation length
    #[serde(default = "default_effect_duration")]
    pub effect_duration_ms: u64,

    /// How long the "recently watered" tint lasts
    #[serde(default = "default_recently_watered")]
    pub recently_watered_ms: u64,

    #[serde(default = "default_breathing_start_delay")]
    pub breathing_start_delay_ms: u64,

    /// Length of one inhale (or exhale)
    #[serde(default = "default_breath_phase")]
    pub breath_phase_ms: u64,

    #[serde(default = "default_message_rotation")]
    pub message_rotation_ms: u64,

    /// Delay between booking confirmation and returning to specialists
    #[serde(default = "default_booking_confirm_delay")]
    pub booking_confirm_delay_ms: u64,

    /// Terminal cell size used to convert cell coordinates to pixels
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f32,

    #[serde(default = "default_cell_height")]
    pub cell_height_px: f32,
}

fn default_start_screen() -> ScreenId {
    ScreenId::Main
}
fn default_user_name() -> String {
    "Mala".into()
}
fn default_swipe_threshold() -> f32 {
    crate::gesture::MIN_SWIPE_DISTANCE
}
fn default_drop_tolerance() -> f32 {
    crate::drag::DROP_TOLERANCE
}
fn default_water_step() -> u32 {
    crate::drag::WATER_STEP
}
fn default_water_max() -> u32 {
    crate::drag::WATER_MAX
}
fn default_initial_water_level() -> u32 {
    65
}
fn default_rewater_interval() -> u64 {
    100
}
fn default_effect_duration() -> u64 {
    1500
}
fn default_recently_watered() -> u64 {
    5000
}
fn default_breathing_start_delay() -> u64 {
    500
}
fn default_breath_phase() -> u64 {
    4000
}
fn default_message_rotation() -> u64 {
    8000
}
fn default_booking_confirm_delay() -> u64 {
    2000
}
fn default_cell_width() -> f32 {
    8.0
}
fn default_cell_height() -> f32 {
    16.0
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.yaml` from `dir`, or defaults (plus env) when it is absent.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.yaml");
        if config_path.exists() {
            return Self::load(&config_path);
        }
        let mut config = Config::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(screen) = std::env::var("VIBEGROVE_START_SCREEN") {
            self.start_screen = screen
                .parse()
                .context("Invalid VIBEGROVE_START_SCREEN")?;
        }
        if let Ok(name) = std::env::var("VIBEGROVE_USER_NAME") {
            self.user_name = name;
        }
        if let Ok(px) = std::env::var("VIBEGROVE_SWIPE_THRESHOLD") {
            self.swipe_threshold_px = px
                .parse()
                .with_context(|| format!("Invalid VIBEGROVE_SWIPE_THRESHOLD: {}", px))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), GroveError> {
        if self.water_step == 0 {
            return Err(GroveError::InvalidConfig("water_step must be positive".into()));
        }
        if self.initial_water_level > self.water_max {
            return Err(GroveError::InvalidConfig(format!(
                "initial_water_level {} exceeds water_max {}",
                self.initial_water_level, self.water_max
            )));
        }
        for (name, px) in [
            ("cell_width_px", self.cell_width_px),
            ("cell_height_px", self.cell_height_px),
        ] {
            if !px.is_finite() || px <= 0.0 {
                return Err(GroveError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, px
                )));
            }
        }
        for (name, px) in [
            ("swipe_threshold_px", self.swipe_threshold_px),
            ("drop_tolerance_px", self.drop_tolerance_px),
        ] {
            if !px.is_finite() || px < 0.0 {
                return Err(GroveError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number, got {}",
                    name, px
                )));
            }
        }
        Ok(())
    }

    pub fn drag_settings(&self) -> DragSettings {
        DragSettings {
            tolerance: self.drop_tolerance_px,
            step: self.water_step,
            rewater_interval: Duration::from_millis(self.rewater_interval_ms),
        }
    }

    pub fn effect_duration(&self) -> Duration {
        Duration::from_millis(self.effect_duration_ms)
    }

    pub fn recently_watered(&self) -> Duration {
        Duration::from_millis(self.recently_watered_ms)
    }

    pub fn breathing_start_delay(&self) -> Duration {
        Duration::from_millis(self.breathing_start_delay_ms)
    }

    pub fn breath_phase(&self) -> Duration {
        Duration::from_millis(self.breath_phase_ms)
    }

    pub fn message_rotation(&self) -> Duration {
        Duration::from_millis(self.message_rotation_ms)
    }

    pub fn booking_confirm_delay(&self) -> Duration {
        Duration::from_millis(self.booking_confirm_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_screen: default_start_screen(),
            user_name: default_user_name(),
            swipe_threshold_px: default_swipe_threshold(),
            drop_tolerance_px: default_drop_tolerance(),
            water_step: default_water_step(),
            water_max: default_water_max(),
            initial_water_level: default_initial_water_level(),
            rewater_interval_ms: default_rewater_interval(),
            effect_duration_ms: default_effect_duration(),
            recently_watered_ms: default_recently_watered(),
            breathing_start_delay_ms: default_breathing_start_delay(),
            breath_phase_ms: default_breath_phase(),
            message_rotation_ms: default_message_rotation(),
            booking_confirm_delay_ms: default_booking_confirm_delay(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::NamedTempFile;

    // Loading reads VIBEGROVE_* variables, so loads and env edits take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load(path: &Path) -> Result<Config> {
        let _lock = env_lock();
        Config::load(path)
    }

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "user_name: Sam").unwrap();

        let config = load(tmp.path()).unwrap();
        assert_eq!(config.user_name, "Sam");
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.drop_tolerance_px, 20.0);
        assert_eq!(config.water_step, 10);
        assert_eq!(config.initial_water_level, 65);
        assert_eq!(config.effect_duration(), Duration::from_millis(1500));
        assert_eq!(config.recently_watered(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_config_custom_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "start_screen: tree\ninitial_water_level: 0\nrewater_interval_ms: 0\ncell_width_px: 10"
        )
        .unwrap();

        let config = load(tmp.path()).unwrap();
        assert_eq!(config.start_screen, ScreenId::Tree);
        assert_eq!(config.initial_water_level, 0);
        assert_eq!(config.drag_settings().rewater_interval, Duration::ZERO);
        assert_eq!(config.cell_width_px, 10.0);
    }

    #[test]
    fn test_unknown_start_screen_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "start_screen: resource-hub").unwrap();
        assert!(load(tmp.path()).is_err());
    }

    #[test]
    fn test_initial_level_above_max_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "initial_water_level: 120\nwater_max: 100").unwrap();
        let err = load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("initial_water_level"));
    }

    #[test]
    fn test_zero_step_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "water_step: 0").unwrap();
        assert!(load(tmp.path()).is_err());
    }

    #[test]
    fn test_non_finite_lengths_fail() {
        for field in [
            "swipe_threshold_px",
            "drop_tolerance_px",
            "cell_width_px",
            "cell_height_px",
        ] {
            for value in [".nan", ".inf", "-.inf"] {
                let mut tmp = NamedTempFile::new().unwrap();
                writeln!(tmp, "{}: {}", field, value).unwrap();
                let err = load(tmp.path()).unwrap_err();
                assert!(err.to_string().contains(field), "{field}: {value} -> {err}");
            }
        }
    }

    #[test]
    fn test_negative_drop_tolerance_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "drop_tolerance_px: -1").unwrap();
        assert!(load(tmp.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let _lock = env_lock();
        const VARS: [&str; 3] = [
            "VIBEGROVE_START_SCREEN",
            "VIBEGROVE_USER_NAME",
            "VIBEGROVE_SWIPE_THRESHOLD",
        ];
        let clear = || VARS.iter().for_each(|v| std::env::remove_var(v));
        let dir = tempfile::tempdir().unwrap();

        std::env::set_var("VIBEGROVE_START_SCREEN", "forest");
        std::env::set_var("VIBEGROVE_USER_NAME", "Robin");
        std::env::set_var("VIBEGROVE_SWIPE_THRESHOLD", "75");
        let config = Config::load_from_dir(dir.path());
        clear();
        let config = config.unwrap();
        assert_eq!(config.start_screen, ScreenId::Forest);
        assert_eq!(config.user_name, "Robin");
        assert_eq!(config.swipe_threshold_px, 75.0);

        // Env wins over the file.
        std::fs::write(dir.path().join("config.yaml"), "user_name: Sam\n").unwrap();
        std::env::set_var("VIBEGROVE_USER_NAME", "Robin");
        let config = Config::load_from_dir(dir.path());
        clear();
        assert_eq!(config.unwrap().user_name, "Robin");

        std::env::set_var("VIBEGROVE_START_SCREEN", "resource-hub");
        let result = Config::load_from_dir(dir.path());
        clear();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("VIBEGROVE_START_SCREEN"));

        for bad in ["NaN", "inf", "wide"] {
            std::env::set_var("VIBEGROVE_SWIPE_THRESHOLD", bad);
            let result = Config::load_from_dir(dir.path());
            clear();
            assert!(result.is_err(), "threshold {bad} should be rejected");
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = {
            let _lock = env_lock();
            Config::load_from_dir(dir.path()).unwrap()
        };
        assert_eq!(config.water_max, 100);
    }
}

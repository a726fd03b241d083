use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

use crate::models::{PrayerDefinition, PrayerName, parse_time};
use crate::prayer_times::PrayerSchedule;

fn default_location() -> String {
    "Makkah, Saudi Arabia".to_string()
}
fn default_qibla_bearing() -> u16 {
    245
}
fn default_fajr() -> String {
    "05:30".to_string()
}
fn default_sunrise() -> String {
    "07:00".to_string()
}
fn default_dhuhr() -> String {
    "12:45".to_string()
}
fn default_asr() -> String {
    "15:30".to_string()
}
fn default_maghrib() -> String {
    "18:15".to_string()
}
fn default_isha() -> String {
    "19:45".to_string()
}

/// Wall-clock prayer times as "HH:MM" strings. These are fixed for every
/// day; there is no astronomical calculation behind them.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesConfig {
    #[serde(default = "default_fajr")]
    pub fajr: String,
    #[serde(default = "default_sunrise")]
    pub sunrise: String,
    #[serde(default = "default_dhuhr")]
    pub dhuhr: String,
    #[serde(default = "default_asr")]
    pub asr: String,
    #[serde(default = "default_maghrib")]
    pub maghrib: String,
    #[serde(default = "default_isha")]
    pub isha: String,
}

impl Default for TimesConfig {
    fn default() -> Self {
        Self {
            fajr: default_fajr(),
            sunrise: default_sunrise(),
            dhuhr: default_dhuhr(),
            asr: default_asr(),
            maghrib: default_maghrib(),
            isha: default_isha(),
        }
    }
}

impl TimesConfig {
    fn raw(&self, name: PrayerName) -> &str {
        match name {
            PrayerName::Fajr => &self.fajr,
            PrayerName::Sunrise => &self.sunrise,
            PrayerName::Dhuhr => &self.dhuhr,
            PrayerName::Asr => &self.asr,
            PrayerName::Maghrib => &self.maghrib,
            PrayerName::Isha => &self.isha,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_location")]
    pub location: String,
    /// Degrees clockwise from north, shown on the qibla compass.
    #[serde(default = "default_qibla_bearing")]
    pub qibla_bearing: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            qibla_bearing: default_qibla_bearing(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub times: TimesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "mihrab")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    /// Build the validated schedule from the configured "HH:MM" strings.
    /// This is the one place malformed times are rejected; past here the
    /// engine treats the list as trusted.
    pub fn schedule(&self) -> Result<PrayerSchedule> {
        let mut entries = Vec::with_capacity(6);
        for name in PrayerName::all() {
            let raw = self.times.raw(name);
            let time = parse_time(raw)
                .with_context(|| format!("Bad {} time in config.toml", name.as_str()))?;
            entries.push(PrayerDefinition::new(name, time));
        }
        Ok(PrayerSchedule::new(entries)?)
    }

    /// Qibla bearing normalized into 0..360.
    pub fn qibla_bearing(&self) -> u16 {
        self.display.qibla_bearing % 360
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_produce_the_reference_schedule() {
        let config = AppConfig::default();
        let schedule = config.schedule().unwrap();
        let entries = schedule.entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].name, PrayerName::Fajr);
        assert_eq!(entries[0].time, parse_time("05:30").unwrap());
        assert_eq!(entries[5].time, parse_time("19:45").unwrap());
        assert_eq!(config.display.location, "Makkah, Saudi Arabia");
        assert_eq!(config.qibla_bearing(), 245);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[times]\nfajr = \"04:55\"\n\n[display]\nlocation = \"Istanbul, Turkey\"\n"
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.times.fajr, "04:55");
        assert_eq!(config.times.isha, "19:45");
        assert_eq!(config.display.location, "Istanbul, Turkey");
        assert_eq!(config.qibla_bearing(), 245);
    }

    #[test]
    fn malformed_time_is_reported_with_the_offending_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[times]\nmaghrib = \"25:99\"\n").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        let err = config.schedule().unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("maghrib"), "got: {}", message);
        assert!(message.contains("25:99"), "got: {}", message);
    }

    #[test]
    fn unparseable_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "this is not toml [").unwrap();
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn bearing_wraps_past_a_full_turn() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[display]\nqibla_bearing = 365\n").unwrap();
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.qibla_bearing(), 5);
    }
}

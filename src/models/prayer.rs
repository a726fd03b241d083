use chrono::NaiveTime;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub fn all() -> [PrayerName; 6] {
        [
            PrayerName::Fajr,
            PrayerName::Sunrise,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "fajr",
            PrayerName::Sunrise => "sunrise",
            PrayerName::Dhuhr => "dhuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "الفجر",
            PrayerName::Sunrise => "الشروق",
            PrayerName::Dhuhr => "الظهر",
            PrayerName::Asr => "العصر",
            PrayerName::Maghrib => "المغرب",
            PrayerName::Isha => "العشاء",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "sunrise" | "shuruq" => Ok(PrayerName::Sunrise),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer name: {}", s)),
        }
    }
}

/// One entry of the daily schedule. Times are plain wall-clock values,
/// identical every day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerDefinition {
    pub name: PrayerName,
    pub arabic: String,
    pub time: NaiveTime,
}

impl PrayerDefinition {
    pub fn new(name: PrayerName, time: NaiveTime) -> Self {
        Self {
            name,
            arabic: name.arabic_name().to_string(),
            time,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("prayer schedule must contain at least one entry")]
    Empty,
    #[error("invalid prayer time '{0}': expected HH:MM with hour 0-23 and minute 0-59")]
    InvalidTime(String),
}

/// Parse a `"HH:MM"` wall-clock string.
pub fn parse_time(s: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| ScheduleError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_well_formed_times() {
        let t = parse_time("05:30").unwrap();
        assert_eq!((t.hour(), t.minute()), (5, 30));
        assert_eq!(parse_time("00:00").unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(parse_time("23:59").unwrap(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["24:00", "12:60", "noon", "7", "07:5x", ""] {
            let err = parse_time(bad).unwrap_err();
            assert_eq!(err, ScheduleError::InvalidTime(bad.to_string()));
        }
    }

    #[test]
    fn prayer_names_round_trip() {
        for name in PrayerName::all() {
            assert_eq!(name.as_str().parse::<PrayerName>().unwrap(), name);
        }
        assert_eq!("Zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert!("midnight".parse::<PrayerName>().is_err());
    }

    #[test]
    fn definitions_carry_arabic_names() {
        let fajr = PrayerDefinition::new(PrayerName::Fajr, parse_time("05:30").unwrap());
        assert_eq!(fajr.arabic, "الفجر");
        assert_eq!(fajr.name.display_name(), "Fajr");
    }
}

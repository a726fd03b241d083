pub mod schedule;

pub use schedule::{Countdown, NextPrayerInfo, PrayerSchedule, time_until};

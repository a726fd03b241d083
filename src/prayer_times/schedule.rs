use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::models::{PrayerDefinition, ScheduleError};

/// Remaining time to a prayer, decomposed for display.
/// Always satisfies hours < 24, minutes < 60, seconds < 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub fn as_secs(&self) -> i64 {
        self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64
    }
}

/// One evaluation of the schedule against a clock reading. `current` is
/// `None` before the first prayer of the day; `next` wraps to the first
/// entry after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayerInfo {
    pub current: Option<usize>,
    pub next: usize,
    pub remaining: Countdown,
}

/// The day's prayer list, ascending by time-of-day, identical every day.
/// Construction rejects an empty list; everything after that is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSchedule {
    entries: Vec<PrayerDefinition>,
}

impl PrayerSchedule {
    pub fn new(entries: Vec<PrayerDefinition>) -> Result<Self, ScheduleError> {
        if entries.is_empty() {
            return Err(ScheduleError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PrayerDefinition] {
        &self.entries
    }

    /// Index of the prayer whose window contains `now`, comparing whole
    /// minutes only. A prayer is current from the exact minute it starts.
    pub fn current_index(&self, now: NaiveTime) -> Option<usize> {
        let now_minutes = now.hour() * 60 + now.minute();
        self.entries.iter().rposition(|entry| {
            entry.time.hour() * 60 + entry.time.minute() <= now_minutes
        })
    }

    /// Entry after `current`, wrapping to the first prayer when the last
    /// one has passed or none has started yet.
    pub fn next_index(&self, current: Option<usize>) -> usize {
        match current {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            _ => 0,
        }
    }

    pub fn next_prayer_info(&self, now: NaiveDateTime) -> NextPrayerInfo {
        let current = self.current_index(now.time());
        let next = self.next_index(current);
        let remaining = time_until(self.entries[next].time, now);
        NextPrayerInfo { current, next, remaining }
    }
}

/// Countdown from `now` to the next occurrence of `target`, today if it
/// is still ahead, otherwise tomorrow.
pub fn time_until(target: NaiveTime, now: NaiveDateTime) -> Countdown {
    let target_moment = now.date().and_time(target);
    let mut diff = target_moment - now;
    if diff < Duration::zero() {
        diff = diff + Duration::hours(24);
    }
    let total = diff.num_seconds();
    Countdown {
        hours: (total / 3600) as u32,
        minutes: ((total % 3600) / 60) as u32,
        seconds: (total % 60) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrayerName, parse_time};
    use chrono::NaiveDate;

    fn reference_schedule() -> PrayerSchedule {
        let times = [
            (PrayerName::Fajr, "05:30"),
            (PrayerName::Sunrise, "07:00"),
            (PrayerName::Dhuhr, "12:45"),
            (PrayerName::Asr, "15:30"),
            (PrayerName::Maghrib, "18:15"),
            (PrayerName::Isha, "19:45"),
        ];
        let entries = times
            .into_iter()
            .map(|(name, time)| PrayerDefinition::new(name, parse_time(time).unwrap()))
            .collect();
        PrayerSchedule::new(entries).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 13)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn empty_schedule_is_rejected() {
        assert_eq!(PrayerSchedule::new(vec![]).unwrap_err(), ScheduleError::Empty);
    }

    #[test]
    fn afternoon_reports_dhuhr_current_and_asr_next() {
        let schedule = reference_schedule();
        let info = schedule.next_prayer_info(at(14, 0, 0));
        assert_eq!(info.current, Some(2));
        assert_eq!(schedule.entries()[info.next].name, PrayerName::Asr);
        assert_eq!(info.remaining, Countdown { hours: 1, minutes: 30, seconds: 0 });
    }

    #[test]
    fn after_isha_wraps_to_tomorrows_fajr() {
        let schedule = reference_schedule();
        let info = schedule.next_prayer_info(at(20, 30, 0));
        assert_eq!(info.current, Some(5));
        assert_eq!(info.next, 0);
        assert_eq!(info.remaining, Countdown { hours: 9, minutes: 0, seconds: 0 });
    }

    #[test]
    fn before_fajr_has_no_current_prayer() {
        let schedule = reference_schedule();
        let info = schedule.next_prayer_info(at(4, 0, 0));
        assert_eq!(info.current, None);
        assert_eq!(info.next, 0);
        assert_eq!(info.remaining, Countdown { hours: 1, minutes: 30, seconds: 0 });
    }

    #[test]
    fn prayer_becomes_current_at_its_exact_minute() {
        let schedule = reference_schedule();
        assert_eq!(schedule.current_index(parse_time("12:45").unwrap()), Some(2));
        assert_eq!(schedule.current_index(parse_time("19:45").unwrap()), Some(5));
        assert_eq!(schedule.next_index(Some(5)), 0);
    }

    #[test]
    fn seconds_do_not_affect_the_current_window() {
        let schedule = reference_schedule();
        let just_before = NaiveTime::from_hms_opt(5, 29, 59).unwrap();
        let within = NaiveTime::from_hms_opt(5, 30, 59).unwrap();
        assert_eq!(schedule.current_index(just_before), None);
        assert_eq!(schedule.current_index(within), Some(0));
    }

    #[test]
    fn countdown_components_stay_bounded_and_reconstruct_the_target() {
        let schedule = reference_schedule();
        for hour in 0..24 {
            let now = at(hour, 17, 23);
            let info = schedule.next_prayer_info(now);
            let countdown = info.remaining;
            assert!(countdown.hours < 24);
            assert!(countdown.minutes < 60);
            assert!(countdown.seconds < 60);

            let arrival = now + Duration::seconds(countdown.as_secs());
            assert_eq!(arrival.time(), schedule.entries()[info.next].time);
            let day_delta = (arrival.date() - now.date()).num_days();
            assert!(day_delta == 0 || day_delta == 1);
        }
    }

    #[test]
    fn single_entry_schedule_always_points_at_itself() {
        let entry = PrayerDefinition::new(PrayerName::Dhuhr, parse_time("12:45").unwrap());
        let schedule = PrayerSchedule::new(vec![entry]).unwrap();

        let before = schedule.next_prayer_info(at(4, 0, 0));
        assert_eq!(before.current, None);
        assert_eq!(before.next, 0);

        let after = schedule.next_prayer_info(at(13, 0, 0));
        assert_eq!(after.current, Some(0));
        assert_eq!(after.next, 0);
        assert_eq!(after.remaining, Countdown { hours: 23, minutes: 45, seconds: 0 });
    }
}

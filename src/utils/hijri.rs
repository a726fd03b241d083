/// Islamic month names (index 0 = Muharram)
const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhul-Qadah",
    "Dhul-Hijjah",
];

const ANCHOR_DAY: i64 = 13;
const ANCHOR_MONTH: i64 = 5; // Jumada al-Thani
const ANCHOR_YEAR: i64 = 1447;

// Every month is treated as exactly 30 days. Real Hijri months alternate
// 29/30 with lunar sighting; this calendar trades that accuracy for a
// date that moves predictably with the day offset.
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 12 * DAYS_PER_MONTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriDate {
    pub day: u32,
    pub month: usize,
    pub year: i64,
}

impl HijriDate {
    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTH_NAMES[self.month]
    }

    pub fn formatted(&self) -> String {
        format!("{} {}, {} AH", self.day, self.month_name(), self.year)
    }
}

/// Hijri date `offset` days away from the anchor (13 Jumada al-Thani,
/// 1447 AH). Day stays in 1..=30 and months wrap with year carry in
/// both directions, for any integer offset.
pub fn hijri_date(offset: i64) -> HijriDate {
    let total = ANCHOR_MONTH * DAYS_PER_MONTH + (ANCHOR_DAY - 1) + offset;
    let year = ANCHOR_YEAR + total.div_euclid(DAYS_PER_YEAR);
    let day_of_year = total.rem_euclid(DAYS_PER_YEAR);
    HijriDate {
        day: (day_of_year % DAYS_PER_MONTH + 1) as u32,
        month: (day_of_year / DAYS_PER_MONTH) as usize,
        year,
    }
}

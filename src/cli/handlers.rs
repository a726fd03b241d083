use anyhow::{Result, anyhow};
use chrono::Local;

use crate::config::AppConfig;
use crate::models::{DuaCategory, DuaLibrary};
use crate::prayer_times::PrayerSchedule;
use crate::utils::format::{
    cardinal_name, date_label, format_countdown_secs, format_duration_secs, format_time,
    gregorian_label,
};
use crate::utils::hijri::hijri_date;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(schedule: &PrayerSchedule, config: &AppConfig) -> Result<()> {
    let now = Local::now().naive_local();
    let today_str = now.date().format("%Y-%m-%d").to_string();
    let info = schedule.next_prayer_info(now);

    println!();
    println_colored!(
        GOLD,
        "  Prayer Times — {} ({})",
        config.display.location,
        today_str
    );
    println!();

    for (i, entry) in schedule.entries().iter().enumerate() {
        let time_str = format_time(entry.time);
        let passed = info.current.is_some_and(|current| i <= current);
        if i == info.next {
            println_colored!(
                AMBER,
                "  {:<10}  {}   {}",
                entry.name.display_name(),
                time_str,
                entry.arabic
            );
        } else if passed {
            println_colored!(
                DIM,
                "  {:<10}  {}   {}",
                entry.name.display_name(),
                time_str,
                entry.arabic
            );
        } else {
            println_colored!(
                BOLD,
                "  {:<10}  {}   {}",
                entry.name.display_name(),
                time_str,
                entry.arabic
            );
        }
    }

    let next = &schedule.entries()[info.next];
    println!();
    println_colored!(
        AMBER,
        "  Next: {} in {}",
        next.name.display_name(),
        format_duration_secs(info.remaining.as_secs())
    );
    println!();
    Ok(())
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(schedule: &PrayerSchedule) -> Result<()> {
    let now = Local::now().naive_local();
    let info = schedule.next_prayer_info(now);
    let next = &schedule.entries()[info.next];

    println!();
    println_colored!(GOLD, "  Next Prayer");
    println!();
    println_colored!(BOLD, "  {}  {}", next.name.display_name(), next.arabic);
    println!("  at {}", format_time(next.time));
    println_colored!(
        AMBER,
        "  in {}",
        format_countdown_secs(info.remaining.as_secs())
    );
    println!();
    Ok(())
}

// ─── Qibla ───────────────────────────────────────────────────────────────────

pub fn handle_qibla(config: &AppConfig) -> Result<()> {
    let bearing = config.qibla_bearing();

    println!();
    println_colored!(GOLD, "  Qibla Direction — {}", config.display.location);
    println!();
    println_colored!(BOLD, "  {}° {}", bearing, cardinal_name(bearing));
    println_colored!(DIM, "  Face {}° clockwise from north to face the Kaaba", bearing);
    println!();
    Ok(())
}

// ─── Date ────────────────────────────────────────────────────────────────────

pub fn handle_date(offset: i64) -> Result<()> {
    let today = Local::now().date_naive();

    println!();
    println_colored!(GOLD, "  Date — {}", date_label(offset));
    println!();
    println_colored!(BOLD, "  Islamic     {}", hijri_date(offset).formatted());
    println!("  Gregorian   {}", gregorian_label(today, offset));
    println!();
    Ok(())
}

// ─── Duas ────────────────────────────────────────────────────────────────────

pub fn handle_duas(category: Option<&str>, query: Option<&str>) -> Result<()> {
    let category = category
        .map(|s| {
            s.parse::<DuaCategory>().map_err(|_| {
                anyhow!(
                    "Unknown category '{}'. Use: morning, daily, protection, difficult, repentance, sleep",
                    s
                )
            })
        })
        .transpose()?;

    let library = DuaLibrary::new();
    let hits = library.filtered(query.unwrap_or(""), category);

    println!();
    println_colored!(GOLD, "  Duas & Supplications ({})", hits.len());
    println!();

    if hits.is_empty() {
        println_colored!(DIM, "  No duas found");
        println!();
        return Ok(());
    }

    for dua in hits {
        println_colored!(BOLD, "  {}  {}", dua.title, dua.title_arabic);
        println_colored!(GREEN, "      {}", dua.category.as_str());
        println_colored!(AMBER, "      {}", dua.arabic);
        println!("      {}", dua.transliteration);
        println!("      {}", dua.translation);
        println_colored!(DIM, "      Reference: {}", dua.reference);
        println!();
    }
    Ok(())
}

pub mod dua;
pub mod prayer;
pub mod settings;
pub mod tasbih;

pub use dua::{BUILTIN_DUAS, Dua, DuaCategory, DuaLibrary};
pub use prayer::{PrayerDefinition, PrayerName, ScheduleError, parse_time};
pub use settings::{SavedLocation, SettingsState};
pub use tasbih::{COMMON_DHIKR, TARGET_OPTIONS, TasbihCounter};

pub const LANGUAGES: [&str; 4] = ["Türkçe", "English", "العربية", "اردو"];

pub const THEMES: [&str; 4] = [
    "Dark Neumorphic",
    "Light Neumorphic",
    "Classic Dark",
    "Classic Light",
];

pub const ACCENT_COLORS: [&str; 4] = ["Islamic Green", "Golden", "Blue", "Purple"];

pub const CALCULATION_METHODS: [&str; 8] = [
    "Muslim World League",
    "Islamic Society of North America",
    "Egyptian General Authority",
    "Umm Al-Qura University",
    "University of Islamic Sciences, Karachi",
    "Institute of Geophysics, Tehran",
    "Shia Ithna-Ashari",
    "Diyanet İşleri Başkanlığı (Turkey)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingOption {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const ASR_METHODS: [SettingOption; 2] = [
    SettingOption {
        name: "Standard (Shafi, Maliki, Hanbali)",
        detail: "Gölge = Cisim boyu + Öğle gölgesi",
    },
    SettingOption {
        name: "Hanafi",
        detail: "Gölge = 2 × Cisim boyu + Öğle gölgesi",
    },
];

pub const HIGH_LATITUDE_RULES: [SettingOption; 4] = [
    SettingOption { name: "None", detail: "Standart hesaplama" },
    SettingOption { name: "Middle of the Night", detail: "Gece ortası yöntemi" },
    SettingOption { name: "One Seventh", detail: "Gecenin 1/7'si" },
    SettingOption { name: "Angle Based", detail: "Açı bazlı hesaplama" },
];

pub const ADHAN_VOICES: [&str; 5] = ["Makkah", "Madinah", "Al-Aqsa", "Egypt", "Turkey"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedLocation {
    pub id: u32,
    pub name: String,
}

/// Session-only settings state. Nothing here is written to disk; every
/// launch starts from these defaults, and the prayer-time and adhan
/// rows are inert labels with no effect on the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    pub language: usize,
    pub theme: usize,
    pub accent_color: usize,
    pub calculation_method: usize,
    pub asr_method: usize,
    pub high_latitude: usize,
    pub notifications_enabled: bool,
    pub adhan_volume: u8,
    pub notification_volume: u8,
    pub adhan_voice: usize,
    pub saved_locations: Vec<SavedLocation>,
    pub adjustments: [i32; 6],
    next_location_id: u32,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            language: 0,
            theme: 0,
            accent_color: 0,
            calculation_method: 0,
            asr_method: 0,
            high_latitude: 1,
            notifications_enabled: true,
            adhan_volume: 80,
            notification_volume: 50,
            adhan_voice: 0,
            saved_locations: vec![
                SavedLocation { id: 1, name: "Makkah, Saudi Arabia".to_string() },
                SavedLocation { id: 2, name: "Istanbul, Turkey".to_string() },
            ],
            adjustments: [0; 6],
            next_location_id: 3,
        }
    }
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_location(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let id = self.next_location_id;
        self.next_location_id += 1;
        self.saved_locations.push(SavedLocation { id, name: name.to_string() });
    }

    pub fn delete_location(&mut self, id: u32) {
        self.saved_locations.retain(|loc| loc.id != id);
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    pub fn adjust_prayer(&mut self, index: usize, delta: i32) {
        if let Some(slot) = self.adjustments.get_mut(index) {
            *slot += delta;
        }
    }

    pub fn reset_adjustments(&mut self) {
        self.adjustments = [0; 6];
    }

    pub fn adjust_adhan_volume(&mut self, delta: i32) {
        self.adhan_volume = clamp_volume(self.adhan_volume, delta);
    }

    pub fn adjust_notification_volume(&mut self, delta: i32) {
        self.notification_volume = clamp_volume(self.notification_volume, delta);
    }
}

fn clamp_volume(current: u8, delta: i32) -> u8 {
    (current as i32 + delta).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference() {
        let settings = SettingsState::new();
        assert_eq!(LANGUAGES[settings.language], "Türkçe");
        assert_eq!(THEMES[settings.theme], "Dark Neumorphic");
        assert_eq!(ACCENT_COLORS[settings.accent_color], "Islamic Green");
        assert_eq!(CALCULATION_METHODS[settings.calculation_method], "Muslim World League");
        assert_eq!(HIGH_LATITUDE_RULES[settings.high_latitude].name, "Middle of the Night");
        assert!(settings.notifications_enabled);
        assert_eq!(settings.adhan_volume, 80);
        assert_eq!(settings.notification_volume, 50);
        assert_eq!(settings.saved_locations.len(), 2);
        assert_eq!(settings.adjustments, [0; 6]);
    }

    #[test]
    fn locations_add_and_delete_by_id() {
        let mut settings = SettingsState::new();
        settings.add_location("Kuala Lumpur, Malaysia");
        assert_eq!(settings.saved_locations.len(), 3);
        let new_id = settings.saved_locations[2].id;
        assert_eq!(new_id, 3);

        settings.delete_location(1);
        assert_eq!(settings.saved_locations.len(), 2);
        assert!(settings.saved_locations.iter().all(|l| l.id != 1));

        // Ids never recycle after a delete.
        settings.add_location("Cairo, Egypt");
        assert_eq!(settings.saved_locations.last().map(|l| l.id), Some(4));
    }

    #[test]
    fn blank_location_names_are_ignored() {
        let mut settings = SettingsState::new();
        settings.add_location("   ");
        assert_eq!(settings.saved_locations.len(), 2);
    }

    #[test]
    fn volumes_clamp_to_percent_range() {
        let mut settings = SettingsState::new();
        settings.adjust_adhan_volume(50);
        assert_eq!(settings.adhan_volume, 100);
        settings.adjust_notification_volume(-200);
        assert_eq!(settings.notification_volume, 0);
    }

    #[test]
    fn adjustments_accumulate_and_reset() {
        let mut settings = SettingsState::new();
        settings.adjust_prayer(0, 1);
        settings.adjust_prayer(0, 1);
        settings.adjust_prayer(3, -1);
        assert_eq!(settings.adjustments[0], 2);
        assert_eq!(settings.adjustments[3], -1);
        settings.reset_adjustments();
        assert_eq!(settings.adjustments, [0; 6]);
    }
}

use std::collections::HashSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuaCategory {
    MorningEvening,
    DailyLife,
    Protection,
    DifficultTimes,
    Repentance,
    Sleep,
}

impl DuaCategory {
    pub fn all() -> [DuaCategory; 6] {
        [
            DuaCategory::MorningEvening,
            DuaCategory::DailyLife,
            DuaCategory::Protection,
            DuaCategory::DifficultTimes,
            DuaCategory::Repentance,
            DuaCategory::Sleep,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DuaCategory::MorningEvening => "Morning/Evening",
            DuaCategory::DailyLife => "Daily Life",
            DuaCategory::Protection => "Protection",
            DuaCategory::DifficultTimes => "Difficult Times",
            DuaCategory::Repentance => "Repentance",
            DuaCategory::Sleep => "Sleep",
        }
    }
}

impl FromStr for DuaCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning/evening" | "morning-evening" | "morning" | "evening" => {
                Ok(DuaCategory::MorningEvening)
            }
            "daily life" | "daily-life" | "daily" => Ok(DuaCategory::DailyLife),
            "protection" => Ok(DuaCategory::Protection),
            "difficult times" | "difficult-times" | "difficult" => Ok(DuaCategory::DifficultTimes),
            "repentance" => Ok(DuaCategory::Repentance),
            "sleep" => Ok(DuaCategory::Sleep),
            _ => Err(anyhow::anyhow!("Unknown dua category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dua {
    pub id: u32,
    pub title: &'static str,
    pub title_arabic: &'static str,
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    pub reference: &'static str,
    pub category: DuaCategory,
}

pub static BUILTIN_DUAS: [Dua; 10] = [
    Dua {
        id: 1,
        title: "Morning Dua",
        title_arabic: "دعاء الصباح",
        arabic: "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ",
        transliteration: "Aṣbaḥnā wa aṣbaḥa al-mulku lillāh, wa al-ḥamdu lillāh",
        translation: "We have entered the morning and the whole universe belongs to Allah, and all praise is for Allah.",
        reference: "Muslim",
        category: DuaCategory::MorningEvening,
    },
    Dua {
        id: 2,
        title: "Evening Dua",
        title_arabic: "دعاء المساء",
        arabic: "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ",
        transliteration: "Amsaynā wa amsā al-mulku lillāh, wa al-ḥamdu lillāh",
        translation: "We have entered the evening and the whole universe belongs to Allah, and all praise is for Allah.",
        reference: "Muslim",
        category: DuaCategory::MorningEvening,
    },
    Dua {
        id: 3,
        title: "Before Eating",
        title_arabic: "دعاء قبل الطعام",
        arabic: "بِسْمِ اللَّهِ",
        transliteration: "Bismillāh",
        translation: "In the name of Allah.",
        reference: "Abu Dawud, Tirmidhi",
        category: DuaCategory::DailyLife,
    },
    Dua {
        id: 4,
        title: "After Eating",
        title_arabic: "دعاء بعد الطعام",
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَطْعَمَنَا وَسَقَانَا وَجَعَلَنَا مُسْلِمِينَ",
        transliteration: "Alḥamdu lillāhi alladhī aṭʿamanā wa saqānā wa jaʿalanā muslimīn",
        translation: "All praise is due to Allah who fed us, gave us drink, and made us Muslims.",
        reference: "Abu Dawud, Tirmidhi",
        category: DuaCategory::DailyLife,
    },
    Dua {
        id: 5,
        title: "Entering Home",
        title_arabic: "دعاء دخول المنزل",
        arabic: "بِسْمِ اللَّهِ وَلَجْنَا، وَبِسْمِ اللَّهِ خَرَجْنَا، وَعَلَى اللَّهِ رَبِّنَا تَوَكَّلْنَا",
        transliteration: "Bismillāhi walajna, wa bismillāhi kharajna, wa ʿalā allāhi rabbinā tawakkalnā",
        translation: "In the name of Allah we enter, in the name of Allah we leave, and upon our Lord we place our trust.",
        reference: "Abu Dawud",
        category: DuaCategory::DailyLife,
    },
    Dua {
        id: 6,
        title: "For Protection",
        title_arabic: "دعاء الحفظ",
        arabic: "أَعُوذُ بِكَلِمَاتِ اللَّهِ التَّامَّاتِ مِنْ شَرِّ مَا خَلَقَ",
        transliteration: "Aʿūdhu bi-kalimāti allāhi at-tāmmāti min sharri mā khalaq",
        translation: "I seek refuge in the perfect words of Allah from the evil of what He has created.",
        reference: "Muslim",
        category: DuaCategory::Protection,
    },
    Dua {
        id: 7,
        title: "When Distressed",
        title_arabic: "دعاء الكرب",
        arabic: "لَا إِلَهَ إِلَّا اللَّهُ الْعَظِيمُ الْحَلِيمُ، لَا إِلَهَ إِلَّا اللَّهُ رَبُّ الْعَرْشِ الْعَظِيمِ",
        transliteration: "Lā ilāha illā allāhu al-ʿaẓīmu al-ḥalīm, lā ilāha illā allāhu rabbu al-ʿarshi al-ʿaẓīm",
        translation: "There is no god but Allah, the Mighty, the Forbearing. There is no god but Allah, Lord of the Mighty Throne.",
        reference: "Bukhari, Muslim",
        category: DuaCategory::DifficultTimes,
    },
    Dua {
        id: 8,
        title: "For Forgiveness",
        title_arabic: "سيد الاستغفار",
        arabic: "اللَّهُمَّ أَنْتَ رَبِّي لَا إِلَهَ إِلَّا أَنْتَ، خَلَقْتَنِي وَأَنَا عَبْدُكَ",
        transliteration: "Allāhumma anta rabbī lā ilāha illā ant, khalaqtanī wa anā ʿabduk",
        translation: "O Allah, You are my Lord. There is no god but You. You created me and I am Your servant.",
        reference: "Bukhari",
        category: DuaCategory::Repentance,
    },
    Dua {
        id: 9,
        title: "Before Sleep",
        title_arabic: "دعاء النوم",
        arabic: "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
        transliteration: "Bismika allāhumma amūtu wa aḥyā",
        translation: "In Your name, O Allah, I die and I live.",
        reference: "Bukhari",
        category: DuaCategory::Sleep,
    },
    Dua {
        id: 10,
        title: "Waking Up",
        title_arabic: "دعاء الاستيقاظ",
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَحْيَانَا بَعْدَ مَا أَمَاتَنَا وَإِلَيْهِ النُّشُورُ",
        transliteration: "Alḥamdu lillāhi alladhī aḥyānā baʿda mā amātanā wa ilayhi an-nushūr",
        translation: "All praise is for Allah who gave us life after causing us to die, and to Him is the resurrection.",
        reference: "Bukhari",
        category: DuaCategory::MorningEvening,
    },
];

/// Built-in dua catalogue with the session-only favorite set. Favorites
/// are not written anywhere and start empty on every launch.
#[derive(Debug, Clone, Default)]
pub struct DuaLibrary {
    favorites: HashSet<u32>,
}

impl DuaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &'static [Dua] {
        &BUILTIN_DUAS
    }

    /// Case-insensitive substring search over title, transliteration, and
    /// translation, intersected with the category chip when one is active.
    pub fn filtered(&self, query: &str, category: Option<DuaCategory>) -> Vec<&'static Dua> {
        let needle = query.to_lowercase();
        BUILTIN_DUAS
            .iter()
            .filter(|dua| category.is_none_or(|c| dua.category == c))
            .filter(|dua| {
                dua.title.to_lowercase().contains(&needle)
                    || dua.transliteration.to_lowercase().contains(&needle)
                    || dua.translation.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn toggle_favorite(&mut self, id: u32) {
        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_without_category_returns_everything() {
        let library = DuaLibrary::new();
        assert_eq!(library.filtered("", None).len(), BUILTIN_DUAS.len());
    }

    #[test]
    fn category_filter_selects_only_matching() {
        let library = DuaLibrary::new();
        let daily = library.filtered("", Some(DuaCategory::DailyLife));
        assert_eq!(daily.len(), 3);
        assert!(daily.iter().all(|d| d.category == DuaCategory::DailyLife));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let library = DuaLibrary::new();
        // Title match.
        let morning = library.filtered("MORNING", None);
        assert_eq!(morning.len(), 1);
        assert_eq!(morning[0].id, 1);
        // Transliteration match.
        let bismillah: Vec<u32> = library.filtered("bismillāh", None).iter().map(|d| d.id).collect();
        assert_eq!(bismillah, vec![3, 5]);
        // Translation match.
        let refuge = library.filtered("refuge", None);
        assert_eq!(refuge.len(), 1);
        assert_eq!(refuge[0].id, 6);
    }

    #[test]
    fn search_and_category_compose() {
        let library = DuaLibrary::new();
        let hits = library.filtered("allah", Some(DuaCategory::Sleep));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 9);
    }

    #[test]
    fn unknown_query_yields_empty_list() {
        let library = DuaLibrary::new();
        assert!(library.filtered("xylophone", None).is_empty());
    }

    #[test]
    fn favorite_toggle_round_trips() {
        let mut library = DuaLibrary::new();
        assert!(!library.is_favorite(6));
        library.toggle_favorite(6);
        assert!(library.is_favorite(6));
        library.toggle_favorite(6);
        assert!(!library.is_favorite(6));
    }

    #[test]
    fn category_names_parse() {
        for category in DuaCategory::all() {
            assert_eq!(category.as_str().parse::<DuaCategory>().unwrap(), category);
        }
        assert_eq!("daily".parse::<DuaCategory>().unwrap(), DuaCategory::DailyLife);
        assert!("poetry".parse::<DuaCategory>().is_err());
    }
}

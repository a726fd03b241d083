#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhikrPhrase {
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub meaning: &'static str,
}

pub const COMMON_DHIKR: [DhikrPhrase; 4] = [
    DhikrPhrase {
        arabic: "سُبْحَانَ ٱللَّٰهِ",
        transliteration: "SubhanAllah",
        meaning: "Glory be to Allah",
    },
    DhikrPhrase {
        arabic: "ٱلْحَمْدُ لِلَّٰهِ",
        transliteration: "Alhamdulillah",
        meaning: "All praise is due to Allah",
    },
    DhikrPhrase {
        arabic: "ٱللَّٰهُ أَكْبَرُ",
        transliteration: "Allahu Akbar",
        meaning: "Allah is the Greatest",
    },
    DhikrPhrase {
        arabic: "لَا إِلَٰهَ إِلَّا ٱللَّٰهُ",
        transliteration: "La ilaha illallah",
        meaning: "There is no god but Allah",
    },
];

pub const TARGET_OPTIONS: [u32; 5] = [33, 99, 100, 500, 1000];

/// Increment/reset state machine for the digital tasbih. Reaching the
/// target records a completed cycle and holds the full count on screen
/// until the next one-second tick rolls it back to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasbihCounter {
    pub count: u32,
    pub target: u32,
    pub total: u64,
    pub cycles: u32,
    pending_reset: bool,
}

impl Default for TasbihCounter {
    fn default() -> Self {
        Self {
            count: 0,
            target: TARGET_OPTIONS[0],
            total: 0,
            cycles: 0,
            pending_reset: false,
        }
    }
}

impl TasbihCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        if self.pending_reset {
            self.count = 0;
            self.pending_reset = false;
        }
        self.count += 1;
        self.total += 1;
        if self.count >= self.target {
            self.cycles += 1;
            self.pending_reset = true;
        }
    }

    /// Applies the deferred roll-back. Called once per second by the UI tick.
    pub fn on_tick(&mut self) {
        if self.pending_reset {
            self.count = 0;
            self.pending_reset = false;
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.pending_reset = false;
    }

    pub fn reset_all(&mut self) {
        self.count = 0;
        self.total = 0;
        self.cycles = 0;
        self.pending_reset = false;
    }

    pub fn next_target(&mut self) {
        let i = TARGET_OPTIONS.iter().position(|&t| t == self.target).unwrap_or(0);
        self.target = TARGET_OPTIONS[(i + 1) % TARGET_OPTIONS.len()];
    }

    pub fn prev_target(&mut self) {
        let i = TARGET_OPTIONS.iter().position(|&t| t == self.target).unwrap_or(0);
        self.target = TARGET_OPTIONS[(i + TARGET_OPTIONS.len() - 1) % TARGET_OPTIONS.len()];
    }

    /// Fraction of the current target reached, clamped to 1.0.
    pub fn progress(&self) -> f64 {
        (self.count as f64 / self.target as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_counts_and_totals() {
        let mut counter = TasbihCounter::new();
        counter.increment();
        counter.increment();
        assert_eq!(counter.count, 2);
        assert_eq!(counter.total, 2);
        assert_eq!(counter.cycles, 0);
    }

    #[test]
    fn reaching_target_completes_cycle_and_resets_on_tick() {
        let mut counter = TasbihCounter::new();
        for _ in 0..33 {
            counter.increment();
        }
        // Full count stays visible until the next tick.
        assert_eq!(counter.count, 33);
        assert_eq!(counter.cycles, 1);
        counter.on_tick();
        assert_eq!(counter.count, 0);
        assert_eq!(counter.total, 33);
        assert_eq!(counter.cycles, 1);
    }

    #[test]
    fn increment_during_pending_reset_starts_fresh_cycle() {
        let mut counter = TasbihCounter::new();
        for _ in 0..33 {
            counter.increment();
        }
        counter.increment();
        assert_eq!(counter.count, 1);
        assert_eq!(counter.total, 34);
    }

    #[test]
    fn reset_preserves_total_and_cycles() {
        let mut counter = TasbihCounter::new();
        for _ in 0..40 {
            counter.increment();
        }
        counter.on_tick();
        counter.reset();
        assert_eq!(counter.count, 0);
        assert_eq!(counter.total, 40);
        assert_eq!(counter.cycles, 1);
    }

    #[test]
    fn reset_all_clears_everything() {
        let mut counter = TasbihCounter::new();
        for _ in 0..50 {
            counter.increment();
        }
        counter.reset_all();
        assert_eq!(counter.count, 0);
        assert_eq!(counter.total, 0);
        assert_eq!(counter.cycles, 0);
    }

    #[test]
    fn target_cycling_wraps_both_ways() {
        let mut counter = TasbihCounter::new();
        assert_eq!(counter.target, 33);
        counter.prev_target();
        assert_eq!(counter.target, 1000);
        counter.next_target();
        assert_eq!(counter.target, 33);
        counter.next_target();
        assert_eq!(counter.target, 99);
    }
}

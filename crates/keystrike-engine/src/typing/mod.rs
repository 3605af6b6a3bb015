//! The typing-progress state machine.

mod state;

pub use state::TypingState;

/// Which input the machine is consuming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing against the current target word.
    #[default]
    Targeting,
    /// Accumulating arbitrary text, no target.
    Free,
}

/// Display casing for target and queue words. Never affects matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Lower,
    Upper,
}

impl CaseMode {
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Upper => text.to_uppercase(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            CaseMode::Lower => CaseMode::Upper,
            CaseMode::Upper => CaseMode::Lower,
        }
    }
}

/// What a submitted character did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Appended to the free-mode text.
    FreeAppend,
    /// Correct letter, word not finished yet.
    Continue,
    /// Correct final letter. `level` is 1..=3.
    WordComplete { level: u8 },
    /// Wrong letter; streak reset.
    Miss,
    /// The word is finished and waiting to advance; nothing changed.
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOutcome {
    pub accepted: bool,
    pub kind: OutcomeKind,
}

impl InputOutcome {
    fn accepted(kind: OutcomeKind) -> Self {
        Self { accepted: true, kind }
    }

    fn rejected(kind: OutcomeKind) -> Self {
        Self { accepted: false, kind }
    }
}

/// Effect tier for a streak: above 15 is level 3, above 5 is level 2.
pub fn level_for_streak(streak: u32) -> u8 {
    if streak > 15 {
        3
    } else if streak > 5 {
        2
    } else {
        1
    }
}

/// Points awarded for finishing a word with the given streak.
pub fn completion_bonus(streak: u32) -> u64 {
    100 + streak as u64 * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        assert_eq!(level_for_streak(0), 1);
        assert_eq!(level_for_streak(5), 1);
        assert_eq!(level_for_streak(6), 2);
        assert_eq!(level_for_streak(15), 2);
        assert_eq!(level_for_streak(16), 3);
    }

    #[test]
    fn bonus_scales_with_streak() {
        assert_eq!(completion_bonus(3), 130);
        assert_eq!(completion_bonus(7), 170);
    }

    #[test]
    fn case_mode_is_display_only() {
        assert_eq!(CaseMode::Lower.apply("LASER"), "laser");
        assert_eq!(CaseMode::Upper.apply("laser"), "LASER");
        assert_eq!(CaseMode::Lower.toggled().toggled(), CaseMode::Lower);
    }
}

use std::collections::VecDeque;

use super::{completion_bonus, level_for_streak, CaseMode, InputOutcome, Mode, OutcomeKind};
use crate::words::{WordBank, WordEntry};

/// Game state owned by the typing state machine.
///
/// Invariants: `progress <= current.len()`; the queue keeps its length across
/// `advance_target`; `streak == 0` right after a miss.
#[derive(Debug, Clone, Default)]
pub struct TypingState {
    queue: VecDeque<WordEntry>,
    current: Option<WordEntry>,
    progress: usize,
    score: u64,
    streak: u32,
    mode: Mode,
    free_text: String,
    case_mode: CaseMode,
}

impl TypingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the lookahead queue with `queue_len` draws and take the first target.
    pub fn start(&mut self, bank: &mut WordBank, queue_len: usize) {
        self.queue = bank.initial_queue(queue_len.max(1));
        self.advance_target(bank);
    }

    /// Pop the queue head into `current`, refill the tail, restart progress.
    /// Returns false (and changes nothing) in free mode or with an empty queue.
    pub fn advance_target(&mut self, bank: &mut WordBank) -> bool {
        if self.mode == Mode::Free {
            log::warn!("advance_target called in free mode; ignored");
            return false;
        }
        let Some(next) = self.queue.pop_front() else {
            log::warn!("advance_target called with an empty queue; ignored");
            return false;
        };
        log::debug!("target: {} ({:?})", next.text, next.difficulty);
        self.current = Some(next);
        self.queue.push_back(bank.random_word());
        self.progress = 0;
        true
    }

    /// Feed one letter. Matching is case-insensitive.
    pub fn submit_character(&mut self, ch: char) -> InputOutcome {
        if self.mode == Mode::Free {
            self.free_text.push(ch);
            return InputOutcome::accepted(OutcomeKind::FreeAppend);
        }

        let Some(current) = &self.current else {
            log::warn!("letter {ch:?} submitted with no target; ignored");
            return InputOutcome::rejected(OutcomeKind::Pending);
        };
        let Some(expected) = current.letter(self.progress) else {
            return InputOutcome::rejected(OutcomeKind::Pending);
        };

        if ch.to_ascii_uppercase() != expected {
            self.streak = 0;
            return InputOutcome::rejected(OutcomeKind::Miss);
        }

        self.progress += 1;
        self.streak = self.streak.saturating_add(1);
        if self.progress < current.len() {
            return InputOutcome::accepted(OutcomeKind::Continue);
        }

        // Level is taken from the streak after this letter's increment.
        let level = level_for_streak(self.streak);
        self.score += completion_bonus(self.streak);
        log::debug!("completed {} at streak {} (level {level})", current.text, self.streak);
        InputOutcome::accepted(OutcomeKind::WordComplete { level })
    }

    /// Delete the last free-mode character. False when there was nothing to
    /// delete or the machine is targeting.
    pub fn backspace(&mut self) -> bool {
        self.mode == Mode::Free && self.free_text.pop().is_some()
    }

    /// Clear the free-mode text (Escape). No-op while targeting.
    pub fn clear_free_text(&mut self) -> bool {
        if self.mode == Mode::Free && !self.free_text.is_empty() {
            self.free_text.clear();
            return true;
        }
        false
    }

    /// Flip between targeting and free mode. Score, streak and queue survive.
    pub fn toggle_free_mode(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Targeting => Mode::Free,
            Mode::Free => Mode::Targeting,
        };
        self.free_text.clear();
        self.mode
    }

    pub fn toggle_case(&mut self) -> CaseMode {
        self.case_mode = self.case_mode.toggled();
        self.case_mode
    }

    /// Back to a blank targeting state with no word; the caller reseeds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Force the streak (debug hook).
    pub fn set_streak(&mut self, streak: u32) {
        self.streak = streak;
    }

    /// The target has been fully typed and is waiting for `advance_target`.
    pub fn is_word_complete(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|w| self.progress >= w.len())
    }

    /// Percentage of the target typed, rounded down.
    pub fn progress_percent(&self) -> u32 {
        match &self.current {
            Some(w) if !w.is_empty() => (self.progress * 100 / w.len()) as u32,
            _ => 0,
        }
    }

    pub fn queue(&self) -> &VecDeque<WordEntry> {
        &self.queue
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.current.as_ref()
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_free(&self) -> bool {
        self.mode == Mode::Free
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_of(word: &str) -> WordBank {
        let json = format!(r#"[{{ "text": "{word}", "difficulty": "easy" }}]"#);
        WordBank::from_json(&json, 1).unwrap()
    }

    fn started(word: &str) -> (TypingState, WordBank) {
        let mut bank = bank_of(word);
        let mut state = TypingState::new();
        state.start(&mut bank, 5);
        (state, bank)
    }

    #[test]
    fn start_takes_first_target_and_keeps_queue_full() {
        let (state, _) = started("CAT");
        assert_eq!(state.current().unwrap().text, "CAT");
        assert_eq!(state.queue().len(), 5);
        assert_eq!(state.progress(), 0);
        assert_eq!(state.mode(), Mode::Targeting);
    }

    #[test]
    fn cat_scenario_from_zero_streak() {
        let (mut state, _) = started("CAT");
        assert_eq!(state.submit_character('C').kind, OutcomeKind::Continue);
        assert_eq!(state.streak(), 1);
        assert_eq!(state.submit_character('a').kind, OutcomeKind::Continue);
        assert_eq!(state.streak(), 2);

        let out = state.submit_character('T');
        assert!(out.accepted);
        assert_eq!(out.kind, OutcomeKind::WordComplete { level: 1 });
        assert_eq!(state.streak(), 3);
        assert_eq!(state.score(), 130);
    }

    #[test]
    fn single_letter_word_levels_from_incremented_streak() {
        let (mut state, _) = started("A");
        state.set_streak(6);
        let out = state.submit_character('a');
        assert_eq!(out.kind, OutcomeKind::WordComplete { level: 2 });
        assert_eq!(state.streak(), 7);
        assert_eq!(state.score(), 170);
    }

    #[test]
    fn streak_of_five_crosses_into_level_two_on_final_letter() {
        // 5 before the letter, 6 after: the final increment counts.
        let (mut state, _) = started("A");
        state.set_streak(5);
        assert_eq!(state.submit_character('A').kind, OutcomeKind::WordComplete { level: 2 });
    }

    #[test]
    fn miss_resets_streak_and_keeps_progress() {
        let (mut state, _) = started("CAT");
        state.set_streak(10);
        let out = state.submit_character('X');
        assert!(!out.accepted);
        assert_eq!(out.kind, OutcomeKind::Miss);
        assert_eq!(state.streak(), 0);
        assert_eq!(state.progress(), 0);

        state.submit_character('C');
        state.submit_character('Q');
        assert_eq!(state.progress(), 1);
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn advance_keeps_queue_length_and_resets_progress() {
        let (mut state, mut bank) = started("CAT");
        state.submit_character('C');
        assert!(state.advance_target(&mut bank));
        assert_eq!(state.queue().len(), 5);
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn finished_word_waits_for_advance() {
        let (mut state, mut bank) = started("A");
        state.submit_character('A');
        assert!(state.is_word_complete());
        let score = state.score();

        let out = state.submit_character('A');
        assert_eq!(out, InputOutcome { accepted: false, kind: OutcomeKind::Pending });
        assert_eq!(state.score(), score);
        assert_eq!(state.streak(), 1);

        state.advance_target(&mut bank);
        assert!(!state.is_word_complete());
    }

    #[test]
    fn free_mode_appends_verbatim() {
        let (mut state, _) = started("CAT");
        state.toggle_free_mode();
        assert_eq!(state.submit_character('h').kind, OutcomeKind::FreeAppend);
        assert_eq!(state.submit_character('I').kind, OutcomeKind::FreeAppend);
        assert_eq!(state.free_text(), "hI");
    }

    #[test]
    fn toggle_free_mode_twice_is_identity() {
        let (mut state, _) = started("CAT");
        state.set_streak(4);
        assert_eq!(state.toggle_free_mode(), Mode::Free);
        state.submit_character('z');
        assert_eq!(state.toggle_free_mode(), Mode::Targeting);
        assert_eq!(state.free_text(), "");
        assert_eq!(state.streak(), 4);
        assert_eq!(state.queue().len(), 5);
    }

    #[test]
    fn backspace_rules() {
        let (mut state, _) = started("CAT");
        assert!(!state.backspace());

        state.toggle_free_mode();
        assert!(!state.backspace());
        state.submit_character('a');
        state.submit_character('b');
        assert!(state.backspace());
        assert_eq!(state.free_text(), "a");
    }

    #[test]
    fn advance_in_free_mode_is_refused() {
        let (mut state, mut bank) = started("CAT");
        state.toggle_free_mode();
        let before = state.queue().clone();
        assert!(!state.advance_target(&mut bank));
        assert_eq!(state.queue(), &before);
    }

    #[test]
    fn clear_free_text_only_in_free_mode() {
        let (mut state, _) = started("CAT");
        assert!(!state.clear_free_text());
        state.toggle_free_mode();
        state.submit_character('q');
        assert!(state.clear_free_text());
        assert_eq!(state.free_text(), "");
    }

    #[test]
    fn case_toggle_does_not_touch_matching() {
        let (mut state, _) = started("CAT");
        assert_eq!(state.toggle_case(), CaseMode::Upper);
        assert_eq!(state.submit_character('c').kind, OutcomeKind::Continue);
        assert_eq!(state.toggle_case(), CaseMode::Lower);
        assert_eq!(state.submit_character('A').kind, OutcomeKind::Continue);
    }

    #[test]
    fn reset_clears_everything() {
        let (mut state, mut bank) = started("CAT");
        state.submit_character('C');
        state.toggle_case();
        state.reset();
        assert!(state.current().is_none());
        assert!(state.queue().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.streak(), 0);
        assert_eq!(state.case_mode(), CaseMode::Lower);
        assert!(!state.advance_target(&mut bank));
        assert_eq!(state.submit_character('C').kind, OutcomeKind::Pending);
    }

    #[test]
    fn progress_percent_rounds_down() {
        let (mut state, _) = started("CAT");
        assert_eq!(state.progress_percent(), 0);
        state.submit_character('C');
        assert_eq!(state.progress_percent(), 33);
        state.submit_character('A');
        assert_eq!(state.progress_percent(), 66);
    }
}

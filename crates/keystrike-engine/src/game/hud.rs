//! Read-only HUD snapshot, rebuilt after every state change.
//!
//! The host renders this verbatim; it never writes back into the game.

use serde::Serialize;

use crate::typing::{level_for_streak, CaseMode, Mode, TypingState};

/// How many upcoming words the queue panel lists.
pub const QUEUE_PREVIEW: usize = 5;

/// Streak counter color by tier.
pub const STREAK_COLORS: [&str; 3] = ["#fff", "#ffbb00", "#ff00ff"];
/// Overdrive bar color by tier.
pub const OVERDRIVE_COLORS: [&str; 3] = ["#00f3ff", "#ffbb00", "#ff00ff"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HudMode {
    Targeting,
    Free,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueItem {
    pub text: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HudSnapshot {
    pub revision: u64,
    pub mode: HudMode,
    pub upper_case: bool,
    /// Translation of the target; `None` in free mode.
    pub translation: Option<String>,
    /// Typed part of the target, display-cased.
    pub done: String,
    /// Remaining part of the target, display-cased.
    pub todo: String,
    pub queue: Vec<QueueItem>,
    pub progress_percent: u32,
    pub score: u64,
    pub streak: u32,
    /// 0, 1 or 2; same thresholds as the completion level.
    pub streak_tier: u8,
    pub streak_color: &'static str,
    pub overdrive_percent: u32,
    pub overdrive_color: &'static str,
    pub free_text: String,
    pub pilot: String,
    pub enemy_visible: bool,
}

impl HudSnapshot {
    pub fn build(state: &TypingState, pilot: &str, enemy_visible: bool, revision: u64) -> Self {
        let case = state.case_mode();
        let tier = level_for_streak(state.streak()) - 1;

        let (translation, done, todo, progress_percent) = match (state.mode(), state.current()) {
            (Mode::Targeting, Some(word)) => {
                let shown = case.apply(&word.text);
                let split = state.progress().min(shown.len());
                (
                    Some(word.translation.clone()),
                    shown[..split].to_string(),
                    shown[split..].to_string(),
                    state.progress_percent(),
                )
            }
            _ => (None, String::new(), String::new(), 0),
        };

        let queue = state
            .queue()
            .iter()
            .take(QUEUE_PREVIEW)
            .map(|w| QueueItem {
                text: case.apply(&w.text),
                translation: w.translation.clone(),
            })
            .collect();

        Self {
            revision,
            mode: match state.mode() {
                Mode::Targeting => HudMode::Targeting,
                Mode::Free => HudMode::Free,
            },
            upper_case: case == CaseMode::Upper,
            translation,
            done,
            todo,
            queue,
            progress_percent,
            score: state.score(),
            streak: state.streak(),
            streak_tier: tier,
            streak_color: STREAK_COLORS[tier as usize],
            overdrive_percent: state.streak().saturating_mul(5).min(100),
            overdrive_color: OVERDRIVE_COLORS[tier as usize],
            free_text: if state.is_free() { state.free_text().to_string() } else { String::new() },
            pilot: pilot.to_string(),
            enemy_visible,
        }
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

//! The static word dataset and random draws from it.

mod dictionary;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::rng::Rng;
use crate::error::{Error, Result};

/// How tough the enemy guarding a word is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
    Boss,
}

impl Difficulty {
    /// Stable numeric id used on the event wire.
    pub fn index(self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Hard => 1,
            Difficulty::Boss => 2,
        }
    }
}

/// One word to type. `text` is stored upper-cased; matching is
/// case-insensitive and display casing is applied by the HUD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub text: String,
    pub translation: String,
    pub difficulty: Difficulty,
}

impl WordEntry {
    pub fn new(text: &str, translation: &str, difficulty: Difficulty) -> Self {
        Self {
            text: text.to_ascii_uppercase(),
            translation: translation.to_string(),
            difficulty,
        }
    }

    /// Number of letters to type.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The letter at `index`, upper-cased.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.text.as_bytes().get(index).map(|b| *b as char)
    }

    fn is_valid_text(text: &str) -> bool {
        !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic())
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    text: String,
    #[serde(default)]
    translation: String,
    difficulty: Difficulty,
}

/// Holds the word list and draws from it uniformly, with replacement.
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Vec<WordEntry>,
    rng: Rng,
}

impl WordBank {
    /// The built-in space-themed dictionary.
    pub fn builtin(seed: u64) -> Self {
        let entries = dictionary::BUILTIN
            .iter()
            .map(|(text, translation, difficulty)| WordEntry::new(text, translation, *difficulty))
            .collect();
        Self {
            entries,
            rng: Rng::new(seed),
        }
    }

    /// Load a custom word list: a JSON array of
    /// `{ "text", "translation", "difficulty" }`.
    pub fn from_json(json: &str, seed: u64) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(Error::EmptyWordBank);
        }
        let mut entries = Vec::with_capacity(raw.len());
        for entry in raw {
            if !WordEntry::is_valid_text(&entry.text) {
                return Err(Error::InvalidWord(entry.text));
            }
            entries.push(WordEntry::new(&entry.text, &entry.translation, entry.difficulty));
        }
        log::info!("word bank loaded: {} entries", entries.len());
        Ok(Self {
            entries,
            rng: Rng::new(seed),
        })
    }

    /// Uniform random draw. Repeats are allowed, including back to back.
    pub fn random_word(&mut self) -> WordEntry {
        let idx = self.rng.next_index(self.entries.len());
        self.entries[idx].clone()
    }

    /// `size` independent draws.
    pub fn initial_queue(&mut self, size: usize) -> VecDeque<WordEntry> {
        (0..size).map(|_| self.random_word()).collect()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

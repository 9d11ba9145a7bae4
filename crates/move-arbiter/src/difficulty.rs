//! Difficulty levels and how they steer the completion request.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive, whitespace-tolerant. Anything unrecognized is medium.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Sampling temperature sent with the completion request.
    pub fn temperature(self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 0.3,
            Difficulty::Hard => 0.0,
        }
    }

    /// Natural-language instruction embedded in the user prompt.
    pub fn hint(self) -> &'static str {
        match self {
            Difficulty::Easy => "choose a random or non-optimal move from the list",
            Difficulty::Medium => "choose a reasonable move from the list",
            Difficulty::Hard => "choose the strongest move you can from the list",
        }
    }
}

impl From<&str> for Difficulty {
    fn from(raw: &str) -> Self {
        Difficulty::parse(raw)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn temperature_for(raw: &str) -> f32 {
    Difficulty::parse(raw).temperature()
}

pub fn hint_for(raw: &str) -> &'static str {
    Difficulty::parse(raw).hint()
}

use std::fmt;
use std::str::FromStr;

use crate::board::Color;
use crate::error::ConfigError;

/// Who controls each side of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    HumanVsHuman,
    #[default]
    HumanVsAi,
    AiVsAi,
}

impl Mode {
    /// In `HumanVsAi` the AI plays `ai_side`.
    pub fn is_ai_turn(self, turn: Color, ai_side: Color) -> bool {
        match self {
            Mode::AiVsAi => true,
            Mode::HumanVsHuman => false,
            Mode::HumanVsAi => turn == ai_side,
        }
    }

    /// In `HumanVsAi` the human plays `human_side`.
    pub fn is_human_turn(self, turn: Color, human_side: Color) -> bool {
        match self {
            Mode::HumanVsHuman => true,
            Mode::AiVsAi => false,
            Mode::HumanVsAi => turn == human_side,
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>().to_ascii_lowercase();
        match norm.as_str() {
            "humanvshuman" | "hvh" => Ok(Mode::HumanVsHuman),
            "humanvsai" | "hva" => Ok(Mode::HumanVsAi),
            "aivsai" | "ava" => Ok(Mode::AiVsAi),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsAi => "Human vs AI",
            Mode::AiVsAi => "AI vs AI",
        })
    }
}

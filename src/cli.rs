use clap::{Parser, ValueEnum};

use connect6::{Difficulty, GameMode};

/// Six-in-a-row in the terminal. Enter moves as H8 or `7 7` (row col).
#[derive(Parser, Debug)]
#[command(name = "connect6", version, about, long_about = None)]
pub struct Cli {
  /// Who plays White
  #[arg(long, value_enum, default_value_t = ModeArg::Medium)]
  pub mode: ModeArg,

  /// Seed for the easy AI's random choices
  #[arg(long)]
  pub seed: Option<u64>,

  /// Pause before each AI move, in milliseconds
  #[arg(long, default_value_t = 0)]
  pub think_ms: u64,

  /// Print the finished game as JSON
  #[arg(long)]
  pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
  /// Two humans at one terminal
  Pvp,
  Easy,
  Medium,
  Hard,
}

impl From<ModeArg> for GameMode {
  fn from(mode: ModeArg) -> Self {
    let difficulty = match mode {
      ModeArg::Pvp => return GameMode::HumanVsHuman,
      ModeArg::Easy => Difficulty::Easy,
      ModeArg::Medium => Difficulty::Medium,
      ModeArg::Hard => Difficulty::Hard,
    };
    GameMode::HumanVsAi { difficulty }
  }
}

/// Reads a mode name typed at the prompt, e.g. `hard` or `PvP`.
pub fn parse_mode(text: &str) -> Option<GameMode> {
  ModeArg::from_str(text.trim(), true).ok().map(GameMode::from)
}

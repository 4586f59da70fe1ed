use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use connect6::{Game, GameMode, GameStatus, Position};

mod cli;

use cli::{parse_mode, Cli};

const MODE_NAMES: &str = "pvp, easy, medium, hard";

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();
  let mut game = Game::with_seed(cli.mode.into(), cli.seed);
  info!(mode = %game.mode(), "starting");

  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();
  let mut out = io::stdout().lock();

  render(&mut out, &game)?;
  loop {
    if game.status().is_terminal() {
      writeln!(
        out,
        "{} (mode: {}, total moves: {})",
        game.status(),
        game.mode(),
        game.move_count()
      )?;
      if cli.json {
        writeln!(out, "{}", serde_json::to_string(&game.snapshot())?)?;
      }
      write!(out, "Play again? [y = same mode, m = choose mode, N = quit] ")?;
      out.flush()?;
      let answer = lines.next().transpose()?.unwrap_or_default();
      match answer.trim().to_ascii_lowercase().as_str() {
        "y" => game.reset(),
        "m" => {
          let Some(mode) = prompt_mode(&mut out, &mut lines)? else {
            break;
          };
          game = Game::with_seed(mode, cli.seed);
        }
        _ => break,
      }
      render(&mut out, &game)?;
      continue;
    }

    if game.is_ai_turn() {
      if cli.think_ms > 0 {
        thread::sleep(Duration::from_millis(cli.think_ms));
      }
      let applied = game.play_ai_turn()?;
      writeln!(out, "{} plays {}", applied.mv.player, applied.mv.position())?;
      render(&mut out, &game)?;
      continue;
    }

    write!(out, "{} to move> ", game.to_move())?;
    out.flush()?;
    let Some(line) = lines.next().transpose()? else {
      break;
    };

    match line.trim() {
      "" => continue,
      "quit" | "exit" => break,
      "reset" | "new" => {
        game.reset();
        render(&mut out, &game)?;
        continue;
      }
      text if text.starts_with("mode") => match parse_mode(&text["mode".len()..]) {
        Some(mode) => {
          game = Game::with_seed(mode, cli.seed);
          render(&mut out, &game)?;
        }
        None => writeln!(out, "Unknown mode; choose one of {}", MODE_NAMES)?,
      },
      text => match text.parse::<Position>() {
        Ok(pos) => match game.play(pos.row as i32, pos.col as i32) {
          Ok(_) => render(&mut out, &game)?,
          Err(rejected) => {
            warn!(%rejected, "move rejected");
            writeln!(out, "Rejected: {}", rejected)?;
          }
        },
        Err(err) => writeln!(out, "{}", err)?,
      },
    }
  }

  Ok(())
}

// Asks until a known mode is entered; `None` when input runs out.
fn prompt_mode(
  out: &mut impl Write,
  lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<GameMode>> {
  loop {
    write!(out, "Mode ({})> ", MODE_NAMES)?;
    out.flush()?;
    let Some(line) = lines.next().transpose()? else {
      return Ok(None);
    };
    match parse_mode(&line) {
      Some(mode) => return Ok(Some(mode)),
      None => writeln!(out, "Unknown mode {:?}", line.trim())?,
    }
  }
}

fn render(out: &mut impl Write, game: &Game) -> io::Result<()> {
  write!(out, "{}", game.board())?;
  if game.status() == GameStatus::InProgress {
    write!(out, "{} | moves: {}", game.mode(), game.move_count())?;
    if let Some(last) = game.last_move() {
      write!(out, " | last: {}", last)?;
    }
    writeln!(out)?;
  }
  Ok(())
}

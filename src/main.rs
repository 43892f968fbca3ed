//! Terminal endless runner (default binary).
//!
//! Checks the terminal size, runs one session until the player crashes (or
//! quits with `q`/`Esc`/Ctrl-C), restores the terminal and prints the score.

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{error, info};

use tui_runner::core::{Dimensions, GameSession};
use tui_runner::engine::{FramePacer, RunOutcome, Runner, RunnerConfig};
use tui_runner::input::KeyboardInput;
use tui_runner::term::{terminal_size, TerminalDisplay};
use tui_runner::types::{MIN_COLS, MIN_ROWS};

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    init_logging(&config)?;

    let (rows, cols) = terminal_size()?;
    let dims = match Dimensions::new(rows, cols) {
        Ok(dims) => dims,
        Err(err) => {
            error!("{err}");
            write_too_small(&mut io::stdout().lock())?;
            std::process::exit(1);
        }
    };

    info!("seed {}", config.seed);
    let mut session = GameSession::new(dims, config.seed);
    if let Some(frames) = config.first_spawn {
        session = session.with_first_spawn_delay(frames);
    }

    let mut display = TerminalDisplay::new(session.layout());
    display.enter()?;

    let pacer = FramePacer::new(config.frame_delay).with_compensation(config.compensate);
    let mut runner = Runner::new(KeyboardInput::new(), display, pacer);
    let result = runner.run(&mut session);

    // Always try to restore terminal state.
    let (_, mut display) = runner.into_parts();
    let _ = display.exit();

    match result? {
        RunOutcome::GameOver { score } => {
            println!("Game over :(");
            println!("Final Score: {score}");
        }
        RunOutcome::Aborted { score } => {
            println!("Quit.");
            println!("Final Score: {score}");
        }
    }
    Ok(())
}

/// The message shown instead of the game on an undersized terminal.
fn write_too_small(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Terminal window size too small to render on.")?;
    writeln!(out, "Must be larger than {MIN_ROWS}x{MIN_COLS}.")?;
    out.flush()
}

fn init_logging(config: &RunnerConfig) -> Result<()> {
    // Logging to stderr would draw over the game screen.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_message_names_minimum_size() {
        let mut out = Vec::new();
        write_too_small(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Terminal window size too small to render on.\nMust be larger than 30x70.\n"
        );
    }
}

//! Blocking read/eval/print loop around a [`GameEngine`].
//!
//! Input and output are generic so the same loop serves stdin/stdout, script files and
//! in-memory buffers in tests. End of input counts as `quit`. Lines are read as bytes, so
//! one that is not valid UTF-8 is answered like any unknown command.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::logutil::input_preview;
use crate::square::{Action, GameEngine, GameStatus};

use super::parser::parse_action;
use super::render::{goodbye, narrate};

pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    mut input: R,
    output: &mut W,
    config: &Config,
) -> Result<GameStatus> {
    let display = &config.display;
    if let Some(text) = narrate(&engine.welcome(), engine, display) {
        writeln!(output, "{}", text).context("writing to terminal")?;
    }

    let mut buf = Vec::new();
    while !engine.status().is_terminal() {
        write!(output, "{}", config.game.prompt).context("writing to terminal")?;
        output.flush().context("flushing terminal")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("reading player input")?;
        let action = if read == 0 {
            info!("End of input; treating as quit");
            Action::verb("quit", None)
        } else {
            // Undecodable bytes become U+FFFD and the line reads as an unknown word.
            let line = String::from_utf8_lossy(&buf);
            if std::str::from_utf8(&buf).is_err() {
                warn!("Input line was not valid UTF-8");
            }
            debug!("Input: {}", input_preview(&line));
            parse_action(&line)
        };

        let report = engine.step(&action);
        for event in &report.events {
            if let Some(text) = narrate(event, engine, display) {
                writeln!(output, "{}", text).context("writing to terminal")?;
            }
        }
    }

    writeln!(output, "{}", goodbye()).context("writing to terminal")?;
    Ok(engine.status())
}

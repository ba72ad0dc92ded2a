use anyhow::Context;
use campo_core::*;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Instant;

use crate::command::{Command, HELP};
use crate::render::render;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives a [`Game`] from wall-clock time: one tick per elapsed second and cascade steps as
/// their deadlines pass.
pub struct Session {
    game: Game,
    started: Instant,
    ticks: u64,
    last_advance: Instant,
    animate: bool,
}

impl Session {
    pub fn new(game: Game, animate: bool) -> Self {
        let now = Instant::now();
        Self {
            game,
            started: now,
            ticks: 0,
            last_advance: now,
            animate,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn sync_clock(&mut self) {
        let secs = self.started.elapsed().as_secs();
        while self.ticks < secs {
            self.ticks += 1;
            self.game.tick();
        }

        let now = Instant::now();
        self.game.advance(now - self.last_advance);
        self.last_advance = now;
    }

    pub fn apply(&mut self, command: Command) -> anyhow::Result<Flow> {
        self.sync_clock();

        match command {
            Command::Reveal(coords) => {
                self.game.reveal_cell(coords)?;
            }
            Command::Flag(coords) => {
                self.game.toggle_flag(coords);
            }
            Command::Chord(coords) => {
                self.game.chord(coords);
            }
            Command::NewGame => {
                self.game.new_game();
                self.started = Instant::now();
                self.ticks = 0;
            }
            Command::Help | Command::Quit => {}
        }

        Ok(match command {
            Command::Quit => Flow::Quit,
            _ => Flow::Continue,
        })
    }

    /// Sleeps through the pending cascade, redrawing after every step.
    fn play_cascade<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        while let Some(wait) = self.game.scheduler().time_to_next() {
            thread::sleep(wait);
            self.sync_clock();
            write!(out, "{}", render(&self.game))?;
            out.flush()?;
        }
        Ok(())
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        write!(out, "{}{}\n> ", render(&self.game), HELP)?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("could not read command")?;
            if line.trim().is_empty() {
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::debug!("rejected input {:?}: {:#}", line, err);
                    write!(out, "error: {:#}\n> ", err)?;
                    out.flush()?;
                    continue;
                }
            };

            if self.apply(command)? == Flow::Quit {
                break;
            }

            if command == Command::Help {
                writeln!(out, "{}", HELP)?;
            } else {
                write!(out, "{}", render(&self.game))?;
                if self.animate && self.game.is_game_over() {
                    self.play_cascade(&mut out)?;
                }
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> Session {
        let game = Game::with_seed(GameConfig::default(), seed, TimerQueue::new()).unwrap();
        Session::new(game, false)
    }

    #[test]
    fn applies_commands_to_game() {
        let mut session = session(1);

        assert_eq!(session.apply(Command::Flag((9, 9))).unwrap(), Flow::Continue);
        assert_eq!(session.apply(Command::Reveal((0, 0))).unwrap(), Flow::Continue);

        assert!(session.game().first_click_done());
        assert!(session.game().board()[(0, 0)].is_revealed());
        assert_eq!(session.game().flags_remaining(), 14);

        session.apply(Command::NewGame).unwrap();
        assert!(!session.game().first_click_done());
        assert_eq!(session.apply(Command::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn run_reads_until_quit() {
        let mut session = session(2);
        let input = "f 2 2\n\nbogus\nr 2 2\nq\nr 0 0\n";
        let mut out = Vec::new();

        session.run(input.as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("time 0s  flags 14"));
        assert!(out.contains("error: unknown command \"bogus\""));
        assert!(!session.game().first_click_done());
        assert_eq!(session.game().cell_view((2, 2)), Some(CellView::Flagged));
    }
}

use anyhow::{Context, bail};
use campo_core::{Coord, Coord2};
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  r X Y   reveal a cell
  f X Y   toggle a flag
  c X Y   chord around a revealed number
  n       new game
  h       this help
  q       quit";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Chord(Coord2),
    NewGame,
    Help,
    Quit,
}

fn parse_coords<'a>(mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let (Some(x), Some(y), None) = (args.next(), args.next(), args.next()) else {
        bail!("expected two coordinates");
    };
    let x: Coord = x.parse().with_context(|| format!("bad x coordinate {:?}", x))?;
    let y: Coord = y.parse().with_context(|| format!("bad y coordinate {:?}", y))?;
    Ok((x, y))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        Ok(match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(words)?),
            "f" | "flag" => Command::Flag(parse_coords(words)?),
            "c" | "chord" => Command::Chord(parse_coords(words)?),
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => bail!("unknown command {:?}, try h", other),
        })
    }
}

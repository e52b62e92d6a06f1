//! Textual drawing commands
//!
//! | Command | Format          |
//! |---------|-----------------|
//! | canvas  | `C w h`         |
//! | line    | `L x1 y1 x2 y2` |
//! | rect    | `R x1 y1 x2 y2` |
//! | fill    | `B x y c`       |

use std::str::FromStr;

use crate::canvas::Coord;
use crate::errors::{DrawError, Result};

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateCanvas { width: u32, height: u32 },
    CreateLine { from: Coord, to: Coord },
    CreateRectangle { from: Coord, to: Coord },
    BucketFill { at: Coord, fill: char },
}

impl FromStr for Command {
    type Err = DrawError;

    fn from_str(raw: &str) -> Result<Self> {
        let mut tokens = raw.split_whitespace();
        let name = tokens.next().ok_or(DrawError::EmptyCommand)?;
        let args: Vec<&str> = tokens.collect();

        match name {
            "C" => {
                let [width, height] = integers::<2>('C', &args)?;
                Ok(Self::CreateCanvas { width, height })
            }
            "L" => {
                let [x1, y1, x2, y2] = integers::<4>('L', &args)?;
                Ok(Self::CreateLine {
                    from: Coord::new(x1, y1),
                    to: Coord::new(x2, y2),
                })
            }
            "R" => {
                let [x1, y1, x2, y2] = integers::<4>('R', &args)?;
                Ok(Self::CreateRectangle {
                    from: Coord::new(x1, y1),
                    to: Coord::new(x2, y2),
                })
            }
            "B" => {
                check_count('B', 3, &args)?;
                let [x, y] = parse_all::<2>(&args[..2])?;
                Ok(Self::BucketFill {
                    at: Coord::new(x, y),
                    fill: single_char(args[2])?,
                })
            }
            other => Err(DrawError::UnknownCommand(other.to_string())),
        }
    }
}

fn check_count(command: char, expected: usize, args: &[&str]) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(DrawError::ArgumentCount {
            command,
            expected,
            found: args.len(),
        })
    }
}

fn integers<const N: usize>(command: char, args: &[&str]) -> Result<[u32; N]> {
    check_count(command, N, args)?;
    parse_all(args)
}

/// `args` must hold exactly `N` items
fn parse_all<const N: usize>(args: &[&str]) -> Result<[u32; N]> {
    let mut values = [0; N];
    for (slot, arg) in values.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| DrawError::InvalidInteger((*arg).to_string()))?;
    }
    Ok(values)
}

fn single_char(arg: &str) -> Result<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DrawError::InvalidFillChar(arg.to_string())),
    }
}

//! Human contestant reading moves from a line-based input.

use super::Contestant;
use crate::GameState;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictacpro_rules::{Move, Position};
use tracing::{debug, instrument};

/// Parses a move typed by a person.
///
/// Accepts a cell number `1`-`9` (as printed on the board) or a row and
/// column pair `0`-`2` separated by a space or comma, e.g. `"1 2"`.
pub fn parse_move(input: &str) -> Option<Move> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let n: usize = cell.parse().ok()?;
            let pos = Position::from_index(n.checked_sub(1)?)?;
            Some(Move::from(pos))
        }
        [row, col] => {
            let mv = Move::new(row.parse().ok()?, col.parse().ok()?);
            mv.position().map(|_| mv)
        }
        _ => None,
    }
}

/// Human at a terminal (or any reader/writer pair in tests).
///
/// Two humans at one keyboard share the same reader, so the input sits
/// behind an `Rc<RefCell<_>>`; it is only borrowed while a line is read.
#[derive(Debug)]
pub struct HumanPlayer<I, O> {
    name: String,
    input: Rc<RefCell<I>>,
    output: O,
}

impl<I: BufRead, O: Write> HumanPlayer<I, O> {
    /// Creates a human player reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: I, output: O) -> Self {
        Self::with_shared_input(name, Rc::new(RefCell::new(input)), output)
    }

    /// Creates a human player reading from an input shared with others.
    pub fn with_shared_input(name: impl Into<String>, input: Rc<RefCell<I>>, output: O) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<I: BufRead, O: Write> Contestant for HumanPlayer<I, O> {
    #[instrument(skip(self, state), fields(player = %self.name))]
    fn next_move(&mut self, state: &GameState) -> Result<Move> {
        loop {
            write!(
                self.output,
                "{} ({}) - cell 1-9 or \"row col\": ",
                self.name,
                state.current_player()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.borrow_mut().read_line(&mut line)? == 0 {
                bail!("Input closed before {} moved", self.name);
            }

            match parse_move(&line) {
                Some(mv) => {
                    debug!(%mv, "Human entered move");
                    return Ok(mv);
                }
                None => writeln!(self.output, "Could not read '{}' as a move.", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

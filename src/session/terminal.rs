//! Line-based terminal console.
//!
//! Reads one answer per line. `Z` quits at either prompt. Invalid answers
//! are reported and the prompt repeats; end of input counts as a quit.

use std::io::{BufRead, Write};

use crossterm::{cursor, execute, terminal};

use super::console::{Console, PlacementInput, SymbolChoice};
use crate::core::{Board, Place, Symbol};
use crate::error::{Error, Result};
use crate::rules::GameResult;

const QUIT_KEY: &str = "Z";

/// `Console` over any line reader and writer.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl TerminalConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Create a console. Screen clearing is on by default.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Enable or disable clearing the screen before each render.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Recover the writer (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.output, "{prompt}\nPress {QUIT_KEY} to exit")
            .map_err(|e| Error::io("write prompt", e))?;
        self.output.flush().map_err(|e| Error::io("flush output", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("read input", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|e| Error::io("write output", e))
    }
}

/// Parse an answer to the placement prompt; `None` if it is not 1-9.
fn parse_place(answer: &str) -> Option<i64> {
    let value: i64 = answer.parse().ok()?;
    Place::new(value).ok().map(|place| i64::from(place.get()))
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt_symbol(&mut self) -> Result<SymbolChoice> {
        let mut prompt = "Select your symbol (X/O)";
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(SymbolChoice::Quit);
            };
            if answer == QUIT_KEY {
                return Ok(SymbolChoice::Quit);
            }
            let mut chars = answer.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(symbol) = Symbol::from_char(c) {
                    return Ok(SymbolChoice::Pick(symbol));
                }
            }
            prompt = "Invalid input!!\nSelect your symbol (X/O)";
        }
    }

    fn prompt_placement(&mut self) -> Result<PlacementInput> {
        let mut prompt = "Choose a position number to place your symbol";
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(PlacementInput::Quit);
            };
            if answer == QUIT_KEY {
                return Ok(PlacementInput::Quit);
            }
            if let Some(place) = parse_place(&answer) {
                return Ok(PlacementInput::Place(place));
            }
            prompt = "Invalid position!!\nChoose a position number to place your symbol";
        }
    }

    fn render(&mut self, board: &Board, player_symbol: Symbol, computer_symbol: Symbol) -> Result<()> {
        if self.clear_screen {
            execute!(
                self.output,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )
            .map_err(|e| Error::io("clear screen", e))?;
        }
        let header = format!("Player - {player_symbol} , Computer - {computer_symbol}");
        self.say(&header)?;
        write!(self.output, "{}", board.render_grid()).map_err(|e| Error::io("draw board", e))
    }

    fn report_outcome(&mut self, result: GameResult) -> Result<()> {
        self.say(result.message())
    }

    fn notify_occupied(&mut self, place: Place) -> Result<()> {
        self.say(&format!("Position {place} is already taken"))
    }
}

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use lts_core::{entry::Entry, store::Confirm};
use yansi::{Condition, Paint};

/// Asks the operator whether a duplicate entry should be added anyway
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
    colors: Condition,
}

impl PromptConfirm<StdinLock<'static>, Stdout> {
    /// A prompt reading from stdin and writing to stdout
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            colors: Condition::from(|| {
                Condition::stdout_is_tty() && Condition::clicolor() && Condition::no_color()
            }),
        }
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            colors: Condition::NEVER,
        }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, existing: &Entry) -> io::Result<bool> {
        writeln!(
            self.output,
            "{} Entry already exists for {}/{}",
            "Warning:".yellow().whenever(self.colors),
            existing.directory,
            existing.project
        )?;
        write!(self.output, "Add anyway? (y/n): ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Only `y` (in any case) counts as yes
fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}

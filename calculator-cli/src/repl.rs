use anyhow::Result;
use calculator::history::History;
use calculator::interpreter::evaluate;
use log::debug;
use std::io::{BufRead, Write};

const HELP: &str = "Enter an expression such as '(3 + 4) * 5', 'sqrt(2)^2' or '5!'.
Functions: sin cos tan asin acos atan sinh cosh tanh sqrt log ln abs ceil floor
Constants: pi e
Commands: history | help | quit";

/// Evaluates one expression per line until `quit`, `exit` or end of input.
/// Successful calculations are added to the history.
pub fn run(input: impl BufRead, output: &mut impl Write, history: &mut History) -> Result<()> {
    writeln!(output, "Type 'help' for commands, 'quit' to exit.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(output, "{}", HELP)?,
            "history" => {
                for entry in history.all() {
                    writeln!(output, "{}", entry)?;
                }
            }
            _ => match evaluate(line) {
                Ok(value) => {
                    writeln!(output, "{}", value)?;
                    history.record(line, value);
                }
                Err(error) => {
                    debug!("{:?}", error);
                    writeln!(output, "error: {}", error)?;
                }
            },
        }
    }

    writeln!(output)?;
    Ok(())
}

//! Postfix++ interactive interpreter.
//!
//! [`Session`] drives an [`Evaluator`] from a line source: it prints a
//! prompt, evaluates each line, echoes the stack on success and reports
//! `Error: <message>` on failure, resetting the stack but keeping
//! variables. A line reading `exit` (any case, surrounding whitespace
//! ignored) or the end of input ends the session.
//!
//! Errors are reported by message only. Embedders that need error codes
//! and token positions use `EvalError::to_diagnostic` together with
//! `Evaluator::last_error_span` from `postfix-eval` directly.
//!
//! ```text
//! > 3 4 +
//! [7]
//! > X 2 =
//! []
//! > X X * PRINT
//! 4
//! [4]
//! ```

use std::io::{self, BufRead, Write};

use postfix_eval::Evaluator;

/// Text printed around the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before reading each line, without a newline.
    pub prompt: String,
    /// Printed once when the session starts.
    pub banner: String,
    /// Printed once when the session ends.
    pub farewell: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: "Postfix++ Interpreter. Type 'exit' to quit.".to_string(),
            farewell: "Goodbye.".to_string(),
        }
    }
}

/// What the session should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Returns `true` if `line` is the exit command.
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// One interactive session: an evaluator plus its presentation.
#[derive(Debug, Default)]
pub struct Session {
    config: ReplConfig,
    evaluator: Evaluator,
}

impl Session {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Handle one input line.
    ///
    /// Output from `PRINT`/`SHOWVARS` goes to `out` even when a later token
    /// on the same line fails.
    pub fn feed_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<Flow> {
        if is_exit_command(line) {
            return Ok(Flow::Exit);
        }

        let result = self.evaluator.evaluate(line);
        for text in self.evaluator.take_output() {
            writeln!(out, "{text}")?;
        }

        match result {
            Ok(()) => writeln!(out, "{}", self.evaluator.stack())?,
            Err(e) => {
                out.flush()?;
                writeln!(err, "Error: {e}")?;
                self.evaluator.reset_stack();
            }
        }
        Ok(Flow::Continue)
    }

    /// Run until `exit` or end of input, then print the farewell.
    ///
    /// Only I/O failures on the streams end the session early.
    pub fn run(
        &mut self,
        mut input: impl BufRead,
        mut out: impl Write,
        mut err: impl Write,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.config.banner)?;

        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Invalid UTF-8 is replaced with U+FFFD rather than ending the session.
            let line = String::from_utf8_lossy(&buf);
            if self.feed_line(&line, &mut out, &mut err)? == Flow::Exit {
                break;
            }
        }

        writeln!(out, "{}", self.config.farewell)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_command() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("  EXIT \n"));
        assert!(is_exit_command("Exit"));
        assert!(!is_exit_command("exit now"));
        assert!(!is_exit_command("quit"));
    }

    #[test]
    fn test_default_config() {
        let config = ReplConfig::default();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.farewell, "Goodbye.");
    }
}

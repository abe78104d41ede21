use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{evaluate, util::num::format_general};

/// Prompt printed before each line in interactive sessions.
pub const PROMPT: &str = "> ";

/// What a single input line asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `quit` or `exit`: end the session.
    Quit,
    /// Nothing but whitespace.
    Blank,
    /// Anything else, trimmed, to be evaluated.
    Expression(&'a str),
}

/// Classifies a raw input line.
///
/// # Example
/// ```
/// use reckon::repl::{Line, classify};
///
/// assert_eq!(classify("  exit\n"), Line::Quit);
/// assert_eq!(classify("\t\n"), Line::Blank);
/// assert_eq!(classify(" 1 + 1\n"), Line::Expression("1 + 1"));
/// ```
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    match line.trim() {
        "quit" | "exit" => Line::Quit,
        "" => Line::Blank,
        expression => Line::Expression(expression),
    }
}

/// Counts of what happened during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines handed to the evaluator.
    pub evaluated: usize,
    /// Lines whose evaluation failed.
    pub failed:    usize,
}

/// A line-oriented calculator session.
///
/// Reads expressions from `input` one line at a time and writes `= <result>`
/// or `Error: <message>` for each to `output`. The session ends at end of
/// input or on a `quit`/`exit` line. Interactive sessions additionally print
/// a banner, a prompt before every line and a farewell.
pub struct Session<R, W> {
    input:       R,
    output:      W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a quiet session that prints nothing but results and errors.
    pub fn new(input: R, output: W) -> Self {
        Self { input,
               output,
               interactive: false }
    }

    /// Turns the banner, prompt and farewell on or off.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Runs the session until end of input or a quit command.
    ///
    /// # Errors
    /// Returns any I/O error raised while reading input or writing output.
    /// Evaluation errors, including lines that are not valid UTF-8, are
    /// reported to `output` and do not end the session.
    ///
    /// # Example
    /// ```
    /// use reckon::repl::Session;
    ///
    /// let mut out = Vec::new();
    /// let summary = Session::new("2+2\n5/0\nquit\n7\n".as_bytes(), &mut out).run().unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "= 4\nError: division by zero\n");
    /// assert_eq!(summary.evaluated, 2);
    /// assert_eq!(summary.failed, 1);
    /// ```
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        if self.interactive {
            writeln!(self.output, "Welcome to reckon!")?;
            writeln!(self.output,
                     "Enter arithmetic expressions to evaluate (or 'quit' to exit)")?;
        }

        let mut summary = SessionSummary::default();
        let mut raw = Vec::new();

        loop {
            if self.interactive {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                if self.interactive {
                    writeln!(self.output)?;
                }
                break;
            }

            // Invalid UTF-8 becomes U+FFFD and is reported by the evaluator.
            let line = String::from_utf8_lossy(&raw);
            let expression = match classify(&line) {
                Line::Quit => break,
                Line::Blank => continue,
                Line::Expression(expression) => expression,
            };

            debug!("evaluating {expression:?}");
            summary.evaluated += 1;
            match evaluate(expression) {
                Ok(value) => writeln!(self.output, "= {}", format_general(value))?,
                Err(e) => {
                    debug!("evaluation of {expression:?} failed: {e:?}");
                    summary.failed += 1;
                    writeln!(self.output, "Error: {e}")?;
                },
            }
        }

        if self.interactive {
            writeln!(self.output, "Goodbye!")?;
        }
        self.output.flush()?;

        info!("session ended: {} evaluated, {} failed",
              summary.evaluated,
              summary.failed);
        Ok(summary)
    }
}

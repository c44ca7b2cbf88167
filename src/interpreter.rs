use crate::command::Dispatcher;
use crate::config::ReplConfig;
use crate::language::Language;
use crate::lexer::first_word;
use crate::texts::{BANNER, EXAMPLES_TEXT, GOODBYE, UNKNOWN_PREFIX, help_text};
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use tracing::{debug, warn};

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Routes input lines to the dispatcher registered for their language tag.
///
/// The registry is fixed at construction and only read afterwards. See
/// [`Interpreter::with_builtin_languages`] for the three languages included
/// out of the box.
///
/// Example
/// ```
/// use ai_programming_repl::{Flow, Interpreter};
/// let sh = Interpreter::with_builtin_languages().unwrap();
/// let mut out = Vec::new();
/// let flow = sh.process_line(".physics loop 2 orbit", &mut out).unwrap();
/// assert_eq!(flow, Flow::Continue);
/// assert_eq!(String::from_utf8(out).unwrap(), "🔁 Sim step: orbit\n🔁 Sim step: orbit\n");
/// ```
pub struct Interpreter {
    languages: Vec<Box<dyn Dispatcher>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of dispatchers.
    pub fn new(languages: Vec<Box<dyn Dispatcher>>) -> Self {
        Self { languages }
    }

    /// Create an interpreter with `.imagine3000`, `.philosophy` and `.physics`.
    pub fn with_builtin_languages() -> Result<Self> {
        let languages = Language::builtin()?
            .into_iter()
            .map(|l| Box::new(l) as Box<dyn Dispatcher>)
            .collect();
        Ok(Self::new(languages))
    }

    /// Registered tags in registry order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.tag())
    }

    fn find(&self, tag: &str) -> Option<&dyn Dispatcher> {
        self.languages
            .iter()
            .find(|l| l.tag() == tag)
            .map(|l| l.as_ref())
    }

    /// Handle one input line, writing whatever it produces to `out`.
    ///
    /// Returns an error only for dispatcher faults or failed writes; usage
    /// hints and unknown prefixes are ordinary output.
    pub fn process_line(&self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        debug!(line, "received line");

        match line.to_lowercase().as_str() {
            "exit" | "quit" => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(Flow::Exit);
            }
            "help" => {
                writeln!(out, "{}", help_text(self.tags()))?;
                return Ok(Flow::Continue);
            }
            "examples" => {
                writeln!(out, "{}", EXAMPLES_TEXT)?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        // non-empty after trim, so there is always a first word
        let prefix = first_word(line).unwrap_or(line);
        match self.find(prefix) {
            Some(language) => {
                let code = line[prefix.len()..].trim();
                debug!(tag = prefix, code, "dispatching");
                let output = language
                    .dispatch(code)
                    .with_context(|| format!("{} failed", prefix))?;
                writeln!(out, "{}", output)?;
            }
            None => {
                debug!(prefix, "unknown language prefix");
                writeln!(out, "{}", UNKNOWN_PREFIX)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Handle `line`, reporting a fault as `Error: <message>` instead of failing.
    fn process_or_report(&self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        match self.process_line(line, out) {
            Ok(flow) => Ok(flow),
            Err(err) => {
                let message = format!("{:#}", err);
                warn!(error = %message, "dispatch failed");
                writeln!(out, "Error: {}", message)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run a fixed batch of lines with the same rules as the interactive loop.
    ///
    /// Stops at the first `exit`/`quit`.
    pub fn run_lines<'a>(
        &self,
        lines: impl IntoIterator<Item = &'a str>,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        for line in lines {
            if self.process_or_report(line, out)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Read-Eval-Print Loop on the terminal.
    ///
    /// Ends on `exit`/`quit`, Ctrl-C or end of input.
    pub fn repl(&self, config: &ReplConfig) -> Result<()> {
        let mut rl = DefaultEditor::new().context("failed to open line editor")?;
        let mut stdout = std::io::stdout();

        if config.show_banner {
            writeln!(stdout, "{}\n", BANNER)?;
        }

        loop {
            match rl.readline(&config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    if self.process_or_report(&line, &mut stdout)? == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    writeln!(stdout, "\n{}", GOODBYE)?;
                    break;
                }
                Err(err) => {
                    warn!(error = %err, "line editor failed");
                    writeln!(stdout, "Error: {}", err)?;
                    break;
                }
            }
        }

        Ok(())
    }
}

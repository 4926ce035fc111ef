//! Interactive session
//!
//! Reads REPL lines, validates and confirms requests, runs the guess engine
//! and prints exactly one outcome line per run.

use super::generate::random_target;
use super::verbs::{Command, RandomSpec, parse_command};
use crate::animator::{AnimationConfig, RenderSink};
use crate::core::{Alphabet, BreakRequest};
use crate::engine::{
    BreakResult, CancelToken, EngineConfig, GuessEngine, NoopObserver, RunObserver,
};
use crate::error::{Error, Result};
use crate::output::{self, TerminalObserver};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::debug;

/// Whether the session keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session and everything a run needs
pub struct Session {
    alphabet: Alphabet,
    animation: AnimationConfig,
    engine_config: EngineConfig,
    sink: Arc<dyn RenderSink>,
    cancel: CancelToken,
    assume_yes: bool,
    show_cooldowns: bool,
}

impl Session {
    #[must_use]
    pub fn new(
        alphabet: Alphabet,
        animation: AnimationConfig,
        engine_config: EngineConfig,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        Self {
            alphabet,
            animation,
            engine_config,
            sink,
            cancel: CancelToken::new(),
            assume_yes: false,
            show_cooldowns: true,
        }
    }

    /// Skip the confirmation prompt before each run
    #[must_use]
    pub const fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Print a countdown during cooldowns (on by default)
    #[must_use]
    pub const fn show_cooldowns(mut self, show: bool) -> Self {
        self.show_cooldowns = show;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Read and dispatch lines from stdin until `exit` or end of input
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin or writing stdout fails.
    pub fn run_repl(&self) -> Result<()> {
        let stdin = io::stdin();
        self.run_lines(&mut stdin.lock())
    }

    /// Read and dispatch lines from `input` until `exit` or end of input
    ///
    /// A Ctrl+C while waiting at the prompt is dropped once the line arrives,
    /// so it never cancels the command typed after it.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing stdout fails.
    pub fn run_lines(&self, input: &mut dyn BufRead) -> Result<()> {
        loop {
            output::print_prompt();
            io::stdout().flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line)?;
            self.cancel.reset();
            if read == 0 {
                println!();
                return Ok(());
            }

            if self.handle_line(&line, input)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Dispatch one REPL line
    ///
    /// Usage and validation errors are printed and the session continues.
    ///
    /// # Errors
    ///
    /// Returns an error only for terminal I/O failures.
    pub fn handle_line(&self, line: &str, input: &mut dyn BufRead) -> Result<Flow> {
        match parse_command(line) {
            Ok(command) => self.execute(command, input),
            Err(err) => {
                output::print_error(&err);
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command
    ///
    /// # Errors
    ///
    /// Returns an error only for terminal I/O failures.
    pub fn execute(&self, command: Command, input: &mut dyn BufRead) -> Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Exit => {
                println!("{}", "[-] Terminating session...".dimmed());
                return Ok(Flow::Exit);
            }
            Command::List => output::print_command_table(),
            Command::Charset => output::print_charset(&self.alphabet),
            Command::Help(text) => output::print_usage(&text),
            Command::Unknown(verb) => output::print_unknown_command(&verb),
            Command::Break(request) => {
                self.confirm_and_run(&request, input)?;
            }
            Command::RandomBreak(spec) => {
                self.random_break(spec, input)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Generate a random target and run it after confirmation
    ///
    /// # Errors
    ///
    /// Returns an error only for terminal I/O failures.
    pub fn random_break(
        &self,
        spec: RandomSpec,
        input: &mut dyn BufRead,
    ) -> Result<Option<BreakResult>> {
        let mut rng = rand::rng();
        let target = match random_target(&self.alphabet, spec.min, spec.max, &mut rng) {
            Ok(target) => target,
            Err(err) => {
                output::print_error(&err);
                return Ok(None);
            }
        };
        output::print_target(&target);

        let request = BreakRequest {
            target,
            rate_limit: spec.rate_limit,
            cooldown_secs: spec.cooldown_secs,
        };
        self.confirm_and_run(&request, input)
    }

    /// Confirm, run and report one request
    ///
    /// Returns `None` if the run was declined or rejected by validation.
    ///
    /// # Errors
    ///
    /// Returns an error only for terminal I/O failures.
    pub fn confirm_and_run(
        &self,
        request: &BreakRequest,
        input: &mut dyn BufRead,
    ) -> Result<Option<BreakResult>> {
        // Reject before prompting so the user never confirms a doomed run
        if let Err(err) = request.validate() {
            output::print_error(&err);
            return Ok(None);
        }

        if !self.assume_yes && !confirm("[>] Initiate crack sequence (y/n)? ", input)? {
            println!();
            return Ok(None);
        }

        // Ctrl+C while answering the confirmation prompt
        if self.cancel.is_cancelled() {
            debug!("interrupt received before run start; skipping");
            self.cancel.reset();
            output::print_cancelled();
            return Ok(None);
        }

        match self.run(request) {
            Ok(result) => {
                output::print_outcome(&result);
                Ok(Some(result))
            }
            Err(err @ (Error::InvalidInput(_) | Error::Unexpected(_) | Error::Usage(_))) => {
                output::print_error(&err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Run a request on a fresh engine
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the request is rejected.
    pub fn run(&self, request: &BreakRequest) -> Result<BreakResult> {
        let engine = GuessEngine::new(&self.alphabet, &self.animation, Arc::clone(&self.sink))
            .with_config(self.engine_config)
            .with_cancel(self.cancel.clone());

        let mut terminal_observer = TerminalObserver::new();
        let mut quiet = NoopObserver;
        let observer: &mut dyn RunObserver = if self.show_cooldowns {
            &mut terminal_observer
        } else {
            &mut quiet
        };

        let result = engine.run_observed(request, observer);
        self.cancel.reset();
        result
    }
}

/// Ask a yes/no question on stdout, reading the answer from `input`
fn confirm(prompt: &str, input: &mut dyn BufRead) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
